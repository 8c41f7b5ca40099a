//! CLI subcommand definitions

use clap::Subcommand;

/// Main CLI commands
#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Show daily usage (default)
    Daily,
    /// Show weekly usage
    Weekly,
    /// Show monthly usage
    Monthly,
    /// Show today's usage
    Today,
    /// Show the built-in model catalog
    Models,
    /// Show quota status for the current usage window
    Quota {
        /// Monthly units limit (overrides config)
        #[arg(long, value_name = "UNITS")]
        limit: Option<f64>,

        /// Instant of the last applied reset (YYYY-MM-DD or RFC 3339)
        #[arg(long, value_name = "WHEN")]
        last_reset: Option<String>,
    },
    /// Output single line for statusline/tmux integration
    Statusline,
}

impl Commands {
    /// Check if this is a statusline command (requires quiet mode)
    pub(crate) fn is_statusline(&self) -> bool {
        matches!(self, Commands::Statusline)
    }

    /// Check if this command needs today's date filter
    pub(crate) fn needs_today_filter(&self) -> bool {
        matches!(self, Commands::Today | Commands::Statusline)
    }
}
