//! Runtime configuration from the environment and command line

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Front end to start
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    Console,
    Web,
}

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "flashcards", about = "Run the flashcards app in console or web mode.")]
pub struct Cli {
    /// Choose the app mode
    #[arg(value_enum, default_value_t = Mode::Web)]
    pub mode: Mode,

    /// Port number, only used in web mode (overrides PORT)
    #[arg(long, short)]
    pub port: Option<u16>,

    /// SQLite database URL (overrides DATABASE_URL)
    #[arg(long)]
    pub database_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub template_dir: PathBuf,
    pub static_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://flashcards.db".to_string(),
            host: "127.0.0.1".to_string(),
            port: 8000,
            template_dir: PathBuf::from("templates"),
            static_dir: PathBuf::from("static"),
        }
    }
}

impl Config {
    /// Read configuration from process environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a port number, got {:?}", raw))?,
            None => defaults.port,
        };

        Ok(Self {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            template_dir: lookup("TEMPLATE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.template_dir),
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
        })
    }

    /// Command line values take precedence over the environment.
    pub fn apply_cli(mut self, cli: &Cli) -> Self {
        if let Some(port) = cli.port {
            self.port = port;
        }
        if let Some(url) = &cli.database_url {
            self.database_url = url.clone();
        }
        self
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
