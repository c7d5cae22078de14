use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use extractor_core::Appearance;
use extractor_engine::{ClientSettings, DEFAULT_BASE_URL};
use extractor_logging::LogDestination;

#[derive(Parser, Debug)]
#[command(name = "extractor")]
#[command(about = "Paste a product page URL and get its best image")]
#[command(version)]
pub struct Args {
    /// Base URL of the image extraction service
    #[arg(long, env = "EXTRACTOR_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub api_base_url: String,

    /// Give up on a request after this many seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Directory holding the preference file (defaults to the current directory)
    #[arg(long)]
    pub state_dir: Option<PathBuf>,

    /// Where log output goes
    #[arg(long, value_enum, default_value_t = LogTarget::File)]
    pub log: LogTarget,

    /// Appearance used when the theme mode is "system"
    #[arg(long, value_enum, default_value_t = SystemTheme::Light)]
    pub system_theme: SystemTheme,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogTarget {
    File,
    Terminal,
    Both,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SystemTheme {
    Light,
    Dark,
}

impl Args {
    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            base_url: self.api_base_url.clone(),
            request_timeout: Duration::from_secs(self.timeout_secs),
            ..ClientSettings::default()
        }
    }

    pub fn state_dir(&self) -> PathBuf {
        self.state_dir.clone().unwrap_or_else(|| {
            std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
        })
    }
}

impl From<LogTarget> for LogDestination {
    fn from(target: LogTarget) -> Self {
        match target {
            LogTarget::File => LogDestination::File,
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::Both => LogDestination::Both,
        }
    }
}

impl From<SystemTheme> for Appearance {
    fn from(theme: SystemTheme) -> Self {
        match theme {
            SystemTheme::Light => Appearance::Light,
            SystemTheme::Dark => Appearance::Dark,
        }
    }
}
