use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::display::messages::StatusMessages;
use crate::page::page_model::{DEFAULT_FORM_ID, DEFAULT_RESULT_ID};

pub const DEFAULT_CONFIG_PATH: &str = "contact-form.yaml";
pub const CONFIG_PATH_ENV: &str = "CONTACT_FORM_CONFIG";
pub const PAGE_URL_ENV: &str = "CONTACT_FORM_PAGE_URL";
pub const TRACE_PATH_ENV: &str = "CONTACT_FORM_TRACE";

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "contact-form",
    version,
    about = "Submit contact forms as JSON and report the result"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: contact-form.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Submit a single form built from the command line
    Submit {
        /// Form action URL (relative actions need --page-url)
        #[arg(long)]
        action: String,

        /// Form field as name=value (repeatable)
        #[arg(short, long = "field", value_parser = parse_field)]
        fields: Vec<(String, String)>,

        /// URL of the page hosting the form
        #[arg(long)]
        page_url: Option<String>,
    },

    /// Load a page description and submit its contact form
    Page {
        /// Path to the page YAML file
        #[arg(long)]
        file: String,

        /// Id of the form element
        #[arg(long)]
        form_id: Option<String>,

        /// Id of the result element
        #[arg(long)]
        result_id: Option<String>,
    },
}

/// Parse `name=value`. The value may itself contain `=`.
pub fn parse_field(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected name=value, got '{}'", raw)),
    }
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `contact-form.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub page: PageConfig,
    #[serde(default)]
    pub messages: StatusMessages,
    #[serde(default)]
    pub trace: TraceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    pub url: Option<String>,

    #[serde(default = "default_form_id")]
    pub form_id: String,

    #[serde(default = "default_result_id")]
    pub result_id: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            url: None,
            form_id: default_form_id(),
            result_id: default_result_id(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TraceConfig {
    pub path: Option<String>,
}

// Serde default helpers
fn default_form_id() -> String { DEFAULT_FORM_ID.to_string() }
fn default_result_id() -> String { DEFAULT_RESULT_ID.to_string() }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let env_path = std::env::var(CONFIG_PATH_ENV).ok();
    let config_path = path.or(env_path.as_deref()).unwrap_or(DEFAULT_CONFIG_PATH);

    let mut config = match std::fs::read_to_string(config_path) {
        Ok(content) => parse_config(&content),
        Err(_) => AppConfig::default(),
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    config
}

pub fn parse_config(content: &str) -> AppConfig {
    match serde_yaml::from_str(content) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "malformed config file, using defaults");
            AppConfig::default()
        }
    }
}

/// Environment values take precedence over the file. Empty values are ignored.
pub fn apply_env_overrides<L>(config: &mut AppConfig, lookup: L)
where
    L: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

    if let Some(v) = get(PAGE_URL_ENV) {
        config.page.url = Some(v);
    }
    if let Some(v) = get(TRACE_PATH_ENV) {
        config.trace.path = Some(v);
    }
}
