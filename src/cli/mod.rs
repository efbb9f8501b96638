//! CLI module for myai-smoke
//!
//! Provides the command-line interface for running smoke suites.

pub mod full;
pub mod quick;

use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use crate::config::SmokeConfig;
use crate::report::CheckResult;

/// MyAI smoke checker - HTTP health checks for the local MyAI stack
#[derive(Parser, Debug)]
#[command(name = "myai-smoke")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    MYAI_SMOKE_WEB_URL                Web app base URL (default: http://localhost:8080)
    MYAI_SMOKE_OLLAMA_URL             Inference server base URL (default: http://localhost:11434)
    MYAI_SMOKE_MODEL                  Target model name substring (default: gemma3:270m)
    MYAI_SMOKE_WEB_MARKERS            Comma-separated web body markers (default: MyAI,Flutter)
    MYAI_SMOKE_WEB_TIMEOUT_SECS       Web app probe timeout in seconds (default: 5)
    MYAI_SMOKE_TAGS_TIMEOUT_SECS      Model listing probe timeout in seconds (default: 5)
    MYAI_SMOKE_GENERATE_TIMEOUT_SECS  Generation timeout in seconds (default: 60, quick suite 30)
    MYAI_SMOKE_LOG_LEVEL              Log level (default: info)
"#)]
pub struct Cli {
    /// Subcommand to execute; no subcommand runs the full suite
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full integration suite (default)
    Full(full::FullArgs),
    /// Run the short reachability suite
    Quick(quick::QuickArgs),
}

/// Probe target overrides shared by both suites
#[derive(Args, Debug, Clone, Default)]
pub struct ProbeArgs {
    /// Web app base URL
    #[arg(long, env = "MYAI_SMOKE_WEB_URL")]
    pub web_url: Option<String>,

    /// Inference server base URL
    #[arg(long, env = "MYAI_SMOKE_OLLAMA_URL")]
    pub ollama_url: Option<String>,

    /// Target model name substring
    #[arg(long, env = "MYAI_SMOKE_MODEL")]
    pub model: Option<String>,

    /// Generation timeout in seconds
    #[arg(long, env = "MYAI_SMOKE_GENERATE_TIMEOUT_SECS")]
    pub generate_timeout_secs: Option<u64>,
}

impl ProbeArgs {
    /// Resolve the run configuration: environment defaults overlaid with flags.
    pub fn resolve(&self, generate_default: Duration) -> SmokeConfig {
        let mut config = SmokeConfig::with_generate_default(generate_default);
        if let Some(url) = &self.web_url {
            config.web_url = url.clone();
        }
        if let Some(url) = &self.ollama_url {
            config.ollama_url = url.clone();
        }
        if let Some(model) = &self.model {
            config.model = model.clone();
        }
        if let Some(secs) = self.generate_timeout_secs {
            config.generate_timeout = Duration::from_secs(secs);
        }
        config
    }
}

/// Print one check result with its notes.
pub(crate) fn print_result(result: &CheckResult) {
    let glyph = if result.passed { "✅" } else { "❌" };
    println!("{} {}", glyph, result.detail);
    for note in &result.notes {
        println!("{}", note);
    }
}
