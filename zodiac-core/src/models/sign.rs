use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The twelve sun signs, in calendar order starting at the March equinox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }

    /// Normalize free-form user input (`"leo"`, `"LEO"`) to a sign.
    ///
    /// Only letter case is normalized; surrounding whitespace makes the
    /// input invalid.
    pub fn from_input(input: &str) -> Option<Self> {
        capitalize(input).parse().ok()
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown zodiac sign '{0}'")]
pub struct UnknownSign(pub String);

impl FromStr for ZodiacSign {
    type Err = UnknownSign;

    /// Exact, case-sensitive match on the canonical name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ZodiacSign::ALL
            .into_iter()
            .find(|sign| sign.as_str() == s)
            .ok_or_else(|| UnknownSign(s.to_string()))
    }
}

/// First character upper-cased, the remainder lower-cased.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_normalizes_case() {
        assert_eq!(capitalize("leo"), "Leo");
        assert_eq!(capitalize("SAGITTARIUS"), "Sagittarius");
        assert_eq!(capitalize("pIsCeS"), "Pisces");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize(" leo"), " leo");
    }

    #[test]
    fn from_input_accepts_any_case() {
        assert_eq!(ZodiacSign::from_input("leo"), Some(ZodiacSign::Leo));
        assert_eq!(ZodiacSign::from_input("CAPRICORN"), Some(ZodiacSign::Capricorn));
        assert_eq!(ZodiacSign::from_input("Martian"), None);
        assert_eq!(ZodiacSign::from_input(" leo "), None);
        assert_eq!(ZodiacSign::from_input(""), None);
    }

    #[test]
    fn from_str_is_case_sensitive() {
        assert_eq!("Virgo".parse::<ZodiacSign>(), Ok(ZodiacSign::Virgo));
        assert!("virgo".parse::<ZodiacSign>().is_err());
    }

    #[test]
    fn unknown_sign_is_a_std_error() {
        let err = "Ophiuchus".parse::<ZodiacSign>().unwrap_err();
        assert_eq!(err, UnknownSign("Ophiuchus".to_string()));
        let boxed: Box<dyn std::error::Error> = Box::new(err);
        assert_eq!(boxed.to_string(), "unknown zodiac sign 'Ophiuchus'");
    }

    #[test]
    fn serializes_as_canonical_name() {
        for sign in ZodiacSign::ALL {
            let json = serde_json::to_string(&sign).unwrap();
            assert_eq!(json, format!("\"{}\"", sign.as_str()));
        }
    }
}
