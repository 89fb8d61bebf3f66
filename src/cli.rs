//! CLI definitions using clap.
//!
//! Promptr runs as a single long-lived server process, so there are no
//! subcommands; flags override the config file.

use clap::Parser;
use std::path::PathBuf;

/// Promptr - prompt template compilation and LLM dispatch service
#[derive(Parser, Debug)]
#[command(name = "promptr")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory of *.prompt.json template files (overrides config)
    #[arg(short, long)]
    pub templates_dir: Option<PathBuf>,

    /// Address to bind the HTTP server on (overrides config)
    #[arg(short, long)]
    pub bind: Option<String>,

    /// Register the mock provider alongside the real ones
    #[arg(long)]
    pub mock: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::parse_from(["promptr"]);
        assert!(cli.config.is_none());
        assert!(cli.templates_dir.is_none());
        assert!(cli.bind.is_none());
        assert!(!cli.mock);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_overrides() {
        let cli = Cli::parse_from([
            "promptr",
            "--templates-dir",
            "/srv/prompts",
            "--bind",
            "127.0.0.1:8080",
            "--mock",
            "--verbose",
        ]);
        assert_eq!(cli.templates_dir, Some(PathBuf::from("/srv/prompts")));
        assert_eq!(cli.bind.as_deref(), Some("127.0.0.1:8080"));
        assert!(cli.mock);
        assert!(cli.verbose);
    }
}
