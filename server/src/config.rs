//! Command-line and environment configuration.

use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(
    name = "items-server",
    version,
    about = "Item records served as a JSON API and HTML pages"
)]
pub struct Config {
    /// Host to bind the server to
    #[arg(short = 'H', long, env = "ITEMS_HOST", default_value = "localhost")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "ITEMS_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Enable verbose logging output (same as --log-level debug)
    #[arg(short, long, env = "ITEMS_VERBOSE", default_value = "false")]
    pub verbose: bool,

    /// Log output format
    #[arg(short = 'f', long, env = "ITEMS_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Log level filter (trace, debug, info, warn, error)
    #[arg(short = 'l', long, env = "ITEMS_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Config {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn effective_log_level(&self) -> &str {
        if self.verbose {
            "debug"
        } else {
            &self.log_level
        }
    }
}
