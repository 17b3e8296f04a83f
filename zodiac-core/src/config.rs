use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ZodiacConfig {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub assets: AssetsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

/// Location of the plant catalog CSV.
///
/// A relative `path` is resolved against the directory of the server
/// binary (see [`CatalogConfig::resolve`]), not the working directory.
#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    pub path: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: "data/zodiac_plants_real.csv".to_string(),
        }
    }
}

impl CatalogConfig {
    pub fn resolve(&self, base_dir: &Path) -> PathBuf {
        let path = Path::new(&self.path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            base_dir.join(path)
        }
    }
}

/// Prebuilt front-end directory. Relative paths resolve against the
/// working directory at launch.
#[derive(Debug, Deserialize, Clone)]
pub struct AssetsConfig {
    pub dir: String,
    pub index: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            dir: "build".to_string(),
            index: "index.html".to_string(),
        }
    }
}

impl AssetsConfig {
    pub fn resolve(&self) -> std::io::Result<PathBuf> {
        let dir = Path::new(&self.dir);
        if dir.is_absolute() {
            Ok(dir.to_path_buf())
        } else {
            Ok(std::env::current_dir()?.join(dir))
        }
    }
}

impl ZodiacConfig {
    /// Layer the optional TOML file at `path` under `ZODIAC__*` environment
    /// variables (e.g. `ZODIAC__HTTP__PORT=8080`).
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix("ZODIAC").prefix_separator("__").separator("__"))
            .build()?;
        s.try_deserialize()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.http.host, self.http.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_apply_when_file_is_absent() {
        let config = ZodiacConfig::load("definitely-not-a-real-config-file").unwrap();
        assert_eq!(config.http.port, 5000);
        assert_eq!(config.catalog.path, "data/zodiac_plants_real.csv");
        assert_eq!(config.assets.dir, "build");
        assert_eq!(config.assets.index, "index.html");
    }

    #[test]
    fn file_values_override_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[http]\nhost = \"0.0.0.0\"\nport = 8080\n\n[assets]\ndir = \"/srv/site\"\nindex = \"index.html\""
        )
        .unwrap();

        let config = ZodiacConfig::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.assets.resolve().unwrap(), PathBuf::from("/srv/site"));
        // untouched sections keep their defaults
        assert_eq!(config.service.log_level, "info");
    }

    #[test]
    fn relative_catalog_path_resolves_against_base_dir() {
        let catalog = CatalogConfig::default();
        let resolved = catalog.resolve(Path::new("/opt/zodiac"));
        assert_eq!(resolved, PathBuf::from("/opt/zodiac/data/zodiac_plants_real.csv"));

        let absolute = CatalogConfig {
            path: "/etc/plants.csv".to_string(),
        };
        assert_eq!(absolute.resolve(Path::new("/opt/zodiac")), PathBuf::from("/etc/plants.csv"));
    }
}
