use chrono::Utc;

use crate::billing::{
    ModelCatalog, calculate_units, compute_stats, is_reset_due, next_reset_date, window_start,
};
use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::consts::DEFAULT_UNITS_LIMIT;
use crate::core::DateFilter;
use crate::error::AppError;
use crate::output::{
    NumberFormat, Period, QuotaReport, SummaryOptions, UnitsTableOptions, output_models_json,
    output_period_json, output_quota_json, output_statusline_json, print_models_table,
    print_period_table, print_quota_table, print_statusline,
};
use crate::source::{load_daily, load_records};
use crate::utils::{Timezone, parse_date, parse_instant, set_parse_debug};

pub(crate) struct CommandContext<'a> {
    pub(crate) filter: &'a DateFilter,
    pub(crate) cli: &'a Cli,
    pub(crate) catalog: &'a ModelCatalog,
    pub(crate) timezone: Timezone,
    pub(crate) number_format: NumberFormat,
    pub(crate) quiet: bool,
}

fn handle_period(period: Period, ctx: &CommandContext<'_>) {
    let result = load_daily(ctx.catalog, ctx.filter, ctx.timezone, ctx.quiet, ctx.cli.debug);
    if result.day_stats.is_empty() {
        if ctx.cli.json {
            println!("[]");
        } else {
            println!("No usage data found for the specified date range.");
        }
        return;
    }

    if ctx.cli.json {
        println!(
            "{}",
            output_period_json(&result.day_stats, period, ctx.cli.order, ctx.cli.breakdown)
        );
    } else {
        print_period_table(
            &result.day_stats,
            period,
            ctx.cli.breakdown,
            SummaryOptions {
                skipped: result.skipped,
                valid: result.valid,
                elapsed_ms: Some(result.elapsed_ms),
            },
            UnitsTableOptions {
                order: ctx.cli.order,
                use_color: ctx.cli.use_color(),
                compact: ctx.cli.compact,
                number_format: ctx.number_format,
            },
        );
    }
}

fn handle_models(ctx: &CommandContext<'_>) {
    if ctx.cli.json {
        println!("{}", output_models_json(ctx.catalog));
    } else {
        print_models_table(ctx.catalog, ctx.number_format, ctx.cli.use_color());
    }
}

fn handle_statusline(ctx: &CommandContext<'_>) {
    let result = load_daily(ctx.catalog, ctx.filter, ctx.timezone, true, false);
    if ctx.cli.json {
        println!("{}", output_statusline_json(&result.day_stats, ctx.number_format));
    } else {
        print_statusline(&result.day_stats, ctx.number_format);
    }
}

fn handle_quota(
    limit: Option<f64>,
    last_reset: Option<&str>,
    config: &Config,
    ctx: &CommandContext<'_>,
) -> Result<(), AppError> {
    let limit = limit.or(config.units_limit).unwrap_or(DEFAULT_UNITS_LIMIT);
    if limit <= 0.0 {
        return Err(AppError::InvalidUnitsLimit { value: limit });
    }

    let last_reset = match last_reset {
        Some(raw) => Some(parse_instant(raw)?),
        None => None,
    };

    // The only wall-clock read; everything below takes `now` as a value.
    let now = Utc::now();
    let start = window_start(last_reset, now);
    let start_ms = start.timestamp_millis();

    let (records, _skipped) = load_records(&DateFilter::default(), ctx.timezone, ctx.quiet);
    let units_used: f64 = records
        .iter()
        .filter(|r| r.timestamp_ms >= start_ms)
        .map(|r| calculate_units(ctx.catalog, &r.model, r.has_images))
        .sum();

    let report = QuotaReport {
        stats: compute_stats(units_used, limit, &config.thresholds),
        window_start: start,
        reset_due: is_reset_due(last_reset, now),
        next_reset: next_reset_date(last_reset, now),
    };

    if ctx.cli.json {
        println!("{}", output_quota_json(&report));
    } else {
        print_quota_table(&report, ctx.number_format, ctx.cli.use_color());
    }
    Ok(())
}

pub(crate) fn run(cli: &Cli, config: &Config) -> Result<(), AppError> {
    if cli.debug {
        set_parse_debug(true);
    }

    let timezone = Timezone::parse(cli.timezone.as_deref())?;
    let number_format = NumberFormat::from_locale(cli.locale.as_deref())?;

    let since = match cli.since.as_deref() {
        Some(s) => Some(parse_date(s)?),
        None => None,
    };
    let until = match cli.until.as_deref() {
        Some(s) => Some(parse_date(s)?),
        None => None,
    };

    // "today" style commands pin the filter to the current local date
    let needs_today = cli
        .command
        .as_ref()
        .is_some_and(Commands::needs_today_filter);
    let (since, until) = if needs_today {
        let today = timezone.to_fixed_offset(Utc::now()).date_naive();
        (Some(today), Some(today))
    } else {
        (since, until)
    };

    let filter = DateFilter::new(since, until);
    let catalog = ModelCatalog::builtin();
    let ctx = CommandContext {
        filter: &filter,
        cli,
        catalog: &catalog,
        timezone,
        number_format,
        quiet: cli.quiet_mode(),
    };

    match &cli.command {
        None | Some(Commands::Daily) | Some(Commands::Today) => handle_period(Period::Day, &ctx),
        Some(Commands::Weekly) => handle_period(Period::Week, &ctx),
        Some(Commands::Monthly) => handle_period(Period::Month, &ctx),
        Some(Commands::Models) => handle_models(&ctx),
        Some(Commands::Statusline) => handle_statusline(&ctx),
        Some(Commands::Quota { limit, last_reset }) => {
            handle_quota(*limit, last_reset.as_deref(), config, &ctx)?;
        }
    }

    Ok(())
}
