//! zodiac-cli — command-line client for the zodiac plants HTTP API
//!
//! # Subcommands
//! - `recommend --birthdate YYYY-MM-DD | --zodiac <sign> [--json]`
//! - `comments list [--json]`
//! - `comments add [--comment <text>] [--rating <n>]`
//! - `status` — show server health

use std::time::Duration;

use anyhow::{bail, Context};
use clap::{ArgGroup, Parser, Subcommand};
use reqwest::blocking::{Client, Response};
use serde::{Deserialize, Serialize};

const DEFAULT_SERVER: &str = "http://127.0.0.1:5000";

// ============================================================================
// CLI Definition
// ============================================================================

#[derive(Debug, Parser)]
#[command(name = "zodiac-cli", version, about = "Plant recommendations by birthdate or zodiac sign")]
struct Cli {
    /// Server URL (overrides ZODIAC_HTTP_URL env var)
    #[arg(long, env = "ZODIAC_HTTP_URL", default_value = DEFAULT_SERVER)]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Recommend plants for a birthdate or sign
    #[command(group(ArgGroup::new("input").required(true).args(["birthdate", "zodiac"])))]
    Recommend {
        /// Birthdate as YYYY-MM-DD
        #[arg(long)]
        birthdate: Option<String>,

        /// Zodiac sign, any letter case
        #[arg(long)]
        zodiac: Option<String>,

        /// Print the raw JSON response
        #[arg(long)]
        json: bool,
    },

    /// Read or post visitor comments
    Comments {
        #[command(subcommand)]
        action: CommentAction,
    },

    /// Show server status
    Status,
}

#[derive(Debug, Subcommand)]
enum CommentAction {
    /// List all comments, oldest first
    List {
        #[arg(long)]
        json: bool,
    },
    /// Post a comment and/or rating
    Add {
        #[arg(long)]
        comment: Option<String>,

        /// Any number; sent as typed, so 4.5 stays 4.5
        #[arg(long)]
        rating: Option<serde_json::Number>,
    },
}

// ============================================================================
// API Response Types
// ============================================================================

#[derive(Debug, Deserialize, Serialize)]
pub struct RecommendationView {
    pub zodiac: String,
    pub date_range: String,
    pub element: String,
    pub recommended_plants: Vec<String>,
    pub why_suitable: String,
    pub source_urls: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CommentView {
    pub comment: String,
    pub rating: serde_json::Number,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: String,
}

// ============================================================================
// Formatting (pure)
// ============================================================================

/// The one field a `recommend` request carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecommendInput {
    Birthdate(String),
    Zodiac(String),
}

impl RecommendInput {
    /// `birthdate` wins when both are given, matching the server.
    pub fn from_args(birthdate: Option<String>, zodiac: Option<String>) -> anyhow::Result<Self> {
        match (birthdate, zodiac) {
            (Some(date), _) => Ok(Self::Birthdate(date)),
            (None, Some(sign)) => Ok(Self::Zodiac(sign)),
            (None, None) => bail!("one of --birthdate or --zodiac is required"),
        }
    }

    pub fn body(&self) -> serde_json::Value {
        match self {
            Self::Birthdate(date) => serde_json::json!({ "birthdate": date }),
            Self::Zodiac(sign) => serde_json::json!({ "zodiac": sign }),
        }
    }
}

pub fn format_recommendation(r: &RecommendationView) -> String {
    let mut out = format!("{} ({}, {})\n\n", r.zodiac, r.date_range, r.element);
    for plant in &r.recommended_plants {
        out.push_str(&format!("  • {}\n", plant));
    }
    out.push_str(&format!("\n{}\n", r.why_suitable));
    if !r.source_urls.is_empty() {
        out.push_str("\nSources:\n");
        for url in &r.source_urls {
            out.push_str(&format!("  {}\n", url));
        }
    }
    out
}

pub fn format_comment(c: &CommentView) -> String {
    let prefix = if c.rating.as_f64().is_some_and(|r| r > 0.0) {
        format!("[rated {}] ", c.rating)
    } else {
        String::new()
    };
    if c.comment.is_empty() {
        format!("{}(no text)", prefix)
    } else {
        format!("{}{}", prefix, c.comment)
    }
}

// ============================================================================
// HTTP Client Calls
// ============================================================================

fn client(timeout_secs: u64) -> anyhow::Result<Client> {
    Ok(Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()?)
}

/// Turn a non-2xx response into an error carrying the server's message.
fn check(resp: Response) -> anyhow::Result<Response> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    let status = resp.status();
    let text = resp.text().unwrap_or_default();
    let message = serde_json::from_str::<ApiErrorBody>(&text)
        .map(|b| b.error)
        .unwrap_or(text);
    bail!("server returned {}: {}", status, message)
}

fn do_recommend(server: &str, input: &RecommendInput, json_output: bool) -> anyhow::Result<()> {
    let url = format!("{}/recommend", server);
    let resp = client(30)?
        .post(&url)
        .json(&input.body())
        .send()
        .with_context(|| format!("connection failed to {}", url))?;
    let rec: RecommendationView = check(resp)?
        .json()
        .context("failed to parse recommendation")?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&rec)?);
    } else {
        print!("{}", format_recommendation(&rec));
    }
    Ok(())
}

fn do_list_comments(server: &str, json_output: bool) -> anyhow::Result<()> {
    let url = format!("{}/comments", server);
    let resp = client(10)?
        .get(&url)
        .send()
        .with_context(|| format!("connection failed to {}", url))?;
    let comments: Vec<CommentView> = check(resp)?.json().context("failed to parse comments")?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&comments)?);
    } else if comments.is_empty() {
        eprintln!("No comments yet");
    } else {
        for c in &comments {
            println!("{}", format_comment(c));
        }
    }
    Ok(())
}

fn do_add_comment(
    server: &str,
    comment: Option<&str>,
    rating: Option<serde_json::Number>,
) -> anyhow::Result<()> {
    let url = format!("{}/comments", server);
    let mut body = serde_json::Map::new();
    if let Some(comment) = comment {
        body.insert("comment".to_string(), comment.into());
    }
    if let Some(rating) = rating {
        body.insert("rating".to_string(), serde_json::Value::Number(rating));
    }

    let resp = client(10)?
        .post(&url)
        .json(&body)
        .send()
        .with_context(|| format!("connection failed to {}", url))?;
    check(resp)?;
    println!("Comment posted");
    Ok(())
}

/// Show the server status by calling GET /health.
fn do_status(server: &str) -> anyhow::Result<()> {
    let url = format!("{}/health", server);
    let resp = client(10)?
        .get(&url)
        .send()
        .with_context(|| format!("cannot reach {}", url))?;
    let body: serde_json::Value = check(resp)?.json().unwrap_or_default();

    println!("Zodiac server: {}", body["status"].as_str().unwrap_or("unknown"));
    println!("Version:       {}", body["version"].as_str().unwrap_or("?"));
    println!("Catalog signs: {}", body["catalog_signs"]);
    println!("Comments:      {}", body["comments"]);
    Ok(())
}

// ============================================================================
// Main
// ============================================================================

fn main() {
    let cli = Cli::parse();
    let server = cli.server.trim_end_matches('/').to_string();

    let result = match cli.command {
        Commands::Recommend { birthdate, zodiac, json } => {
            RecommendInput::from_args(birthdate, zodiac)
                .and_then(|input| do_recommend(&server, &input, json))
        }
        Commands::Comments { action } => match action {
            CommentAction::List { json } => do_list_comments(&server, json),
            CommentAction::Add { comment, rating } => {
                do_add_comment(&server, comment.as_deref(), rating)
            }
        },
        Commands::Status => do_status(&server),
    };

    if let Err(e) = result {
        eprintln!("zodiac-cli: {:#}", e);
        std::process::exit(1);
    }
}

// ============================================================================
// Tests
// ============================================================================
