//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigColorMode, ConfigSortOrder};

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum SortOrder {
    /// Oldest first (default)
    #[default]
    Asc,
    /// Newest first
    Desc,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser)]
#[command(name = "custats")]
#[command(about = "Fast Cubent Units usage statistics", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Filter from date (YYYYMMDD or YYYY-MM-DD)
    #[arg(short, long, global = true)]
    pub(crate) since: Option<String>,

    /// Filter until date (YYYYMMDD or YYYY-MM-DD)
    #[arg(short, long, global = true)]
    pub(crate) until: Option<String>,

    /// Show per-model breakdown
    #[arg(short, long, global = true)]
    pub(crate) breakdown: bool,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Sort order for results
    #[arg(short, long, global = true, value_enum, default_value = "asc")]
    pub(crate) order: SortOrder,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Enable debug output (show processing details)
    #[arg(long, global = true)]
    pub(crate) debug: bool,

    /// Compact output (fewer columns, shorter numbers)
    #[arg(short = 'c', long, global = true)]
    pub(crate) compact: bool,

    /// Timezone for date display (e.g., "Asia/Shanghai", "UTC", "America/New_York")
    #[arg(long, global = true, value_name = "TZ")]
    pub(crate) timezone: Option<String>,

    /// Locale for number formatting (e.g., "en", "zh", "de")
    #[arg(long, global = true, value_name = "LOCALE")]
    pub(crate) locale: Option<String>,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // For boolean flags, config only applies if CLI is false (default)
        if !self.compact && config.compact {
            self.compact = true;
        }
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if !self.breakdown && config.breakdown {
            self.breakdown = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }

        // For enum values, apply config only when CLI is at its default
        if let Some(order) = config.order
            && self.order == SortOrder::Asc
        {
            self.order = match order {
                ConfigSortOrder::Asc => SortOrder::Asc,
                ConfigSortOrder::Desc => SortOrder::Desc,
            };
        }

        if let Some(color) = config.color
            && self.color == ColorMode::Auto
        {
            self.color = match color {
                ConfigColorMode::Auto => ColorMode::Auto,
                ConfigColorMode::Always => ColorMode::Always,
                ConfigColorMode::Never => ColorMode::Never,
            };
        }

        // String options: only apply if CLI didn't set them
        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }
        if self.locale.is_none() {
            self.locale = config.locale.clone();
        }

        self
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }

    /// Suppress progress output on stderr (JSON and statusline modes)
    pub(crate) fn quiet_mode(&self) -> bool {
        if self.json {
            return true;
        }
        self.command.as_ref().is_some_and(Commands::is_statusline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_cli() -> Cli {
        Cli::parse_from(["custats"])
    }

    #[test]
    fn config_fills_unset_options() {
        let config = Config {
            compact: true,
            breakdown: true,
            timezone: Some("UTC".to_string()),
            order: Some(ConfigSortOrder::Desc),
            ..Config::default()
        };
        let cli = bare_cli().with_config(&config);
        assert!(cli.compact);
        assert!(cli.breakdown);
        assert_eq!(cli.timezone.as_deref(), Some("UTC"));
        assert_eq!(cli.order, SortOrder::Desc);
    }

    #[test]
    fn cli_flags_beat_config() {
        let config = Config {
            timezone: Some("Asia/Shanghai".to_string()),
            order: Some(ConfigSortOrder::Asc),
            ..Config::default()
        };
        let cli = Cli::parse_from(["custats", "--timezone", "UTC", "--order", "desc"])
            .with_config(&config);
        assert_eq!(cli.timezone.as_deref(), Some("UTC"));
        assert_eq!(cli.order, SortOrder::Desc);
    }

    #[test]
    fn json_implies_quiet() {
        let cli = Cli::parse_from(["custats", "daily", "-j"]);
        assert!(cli.quiet_mode());
        assert!(!bare_cli().quiet_mode());
    }

    #[test]
    fn statusline_implies_quiet() {
        let cli = Cli::parse_from(["custats", "statusline"]);
        assert!(cli.quiet_mode());
    }

    #[test]
    fn no_color_wins() {
        let cli = Cli::parse_from(["custats", "--color", "always", "--no-color"]);
        assert!(!cli.use_color());
    }

    #[test]
    fn quota_flags_parse() {
        let cli = Cli::parse_from([
            "custats",
            "quota",
            "--limit",
            "50",
            "--last-reset",
            "2026-08-01",
        ]);
        match cli.command {
            Some(Commands::Quota { limit, last_reset }) => {
                assert_eq!(limit, Some(50.0));
                assert_eq!(last_reset.as_deref(), Some("2026-08-01"));
            }
            _ => panic!("expected quota command"),
        }
    }
}
