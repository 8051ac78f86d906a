//! Command-line argument parsing for TravelBuddy
//!
//! Provides clap-based CLI with subcommands and verbosity control.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;

/// TravelBuddy - travel advice grounded in a destination database
#[derive(Parser, Debug)]
#[command(name = "travelbuddy")]
#[command(author = "Jerome (Kubashen) Naidoo")]
#[command(version)]
#[command(about = "Travel advice grounded in a local destination database", long_about = None)]
pub struct Args {
    /// Destination corpus (JSON with a top-level "destinations" array)
    #[arg(long, global = true)]
    pub corpus: Option<PathBuf>,

    /// Number of destinations to include as context
    #[arg(short = 'k', long, global = true)]
    pub top_k: Option<usize>,

    /// Model name
    #[arg(short, long, global = true)]
    pub model: Option<String>,

    /// Chat completions base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level: -q (quiet), default (normal), -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (only print results)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Ask a question answered only from the destination database
    Ask {
        /// Travel question
        query: String,

        /// Skip retrieval and ask the model directly
        #[arg(long)]
        no_rag: bool,
    },

    /// Show which destinations a query retrieves, with scores
    Search {
        query: String,
    },

    /// Print the grounded prompt without calling the model
    Prompt {
        query: String,
    },

    /// Interactive question loop
    Chat,

    /// Search mock flight offers
    Flights {
        origin: String,
        destination: String,
        /// Departure date (YYYY-MM-DD)
        date: String,
    },

    /// Mock weather report
    Weather {
        location: String,
        /// Forecast length in days (max 5)
        #[arg(long, default_value_t = 3)]
        days: usize,
    },

    /// Mock currency conversion
    Convert {
        amount: f64,
        from: String,
        to: String,
    },

    /// List available tools and their parameters
    Tools,

    /// Display effective configuration
    Config,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }

    /// Overlay command-line flags on loaded configuration
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(corpus) = &self.corpus {
            config.retrieval.corpus_path = corpus.clone();
        }
        if let Some(top_k) = self.top_k {
            config.retrieval.top_k = top_k;
        }
        if let Some(model) = &self.model {
            config.model.model = model.clone();
        }
        if let Some(base_url) = &self.base_url {
            config.model.base_url = base_url.clone();
        }
    }
}

impl Verbosity {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "quiet",
            Verbosity::Normal => "normal",
            Verbosity::Verbose => "verbose",
            Verbosity::VeryVerbose => "very_verbose",
        }
    }

    /// Check if should show progress spinners
    pub fn show_progress(&self) -> bool {
        !matches!(self, Verbosity::Quiet)
    }

    /// Check if should show retrieval details alongside answers
    pub fn show_matches(&self) -> bool {
        matches!(self, Verbosity::Verbose | Verbosity::VeryVerbose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_ask_command() {
        let args = parse(&["travelbuddy", "ask", "Plan a trip to Tokyo"]);
        assert_eq!(
            args.command,
            Commands::Ask {
                query: "Plan a trip to Tokyo".to_string(),
                no_rag: false
            }
        );
        assert_eq!(args.verbosity(), Verbosity::Normal);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = parse(&["travelbuddy", "search", "temples", "-k", "3", "-vv"]);
        assert_eq!(args.top_k, Some(3));
        assert_eq!(args.verbosity(), Verbosity::VeryVerbose);
    }

    #[test]
    fn test_quiet_wins() {
        let args = parse(&["travelbuddy", "-q", "-v", "prompt", "beach"]);
        assert_eq!(args.verbosity(), Verbosity::Quiet);
        assert!(!args.verbosity().show_progress());
    }

    #[test]
    fn test_tool_commands() {
        let args = parse(&["travelbuddy", "convert", "100", "USD", "EUR"]);
        assert_eq!(
            args.command,
            Commands::Convert {
                amount: 100.0,
                from: "USD".to_string(),
                to: "EUR".to_string()
            }
        );

        let args = parse(&["travelbuddy", "weather", "Lima"]);
        assert_eq!(
            args.command,
            Commands::Weather {
                location: "Lima".to_string(),
                days: 3
            }
        );
    }

    #[test]
    fn test_apply_overrides() {
        let args = parse(&[
            "travelbuddy",
            "--corpus",
            "/tmp/corpus.json",
            "--model",
            "gpt-4o-mini",
            "-k",
            "4",
            "chat",
        ]);
        let mut config = Config::default();
        args.apply_overrides(&mut config);

        assert_eq!(config.retrieval.corpus_path, PathBuf::from("/tmp/corpus.json"));
        assert_eq!(config.retrieval.top_k, 4);
        assert_eq!(config.model.model, "gpt-4o-mini");
        assert_eq!(config.model.base_url, Config::default().model.base_url);
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Args::try_parse_from(["travelbuddy"]).is_err());
    }

    #[test]
    fn test_verbosity_as_str() {
        assert_eq!(Verbosity::Quiet.as_str(), "quiet");
        assert_eq!(Verbosity::VeryVerbose.as_str(), "very_verbose");
    }
}
