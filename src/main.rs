// range-picker - A terminal calendar for picking a date range
// Copyright (C) 2025  Simon Peter Rothgang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use clap::Parser;
use range_picker::error::AppError;
use range_picker::picker::{PickerOutcome, RangePicker};
use range_picker::{Cli, OutputFormat};
use std::fs::OpenOptions;

/// Quiet dependencies, full picker decisions.
const DEFAULT_LOG_DIRECTIVES: &str = "warn,range_picker=debug";

#[allow(clippy::exit)]
fn main() {
    if let Err(err) = run() {
        if let Some(app_error) = extract_app_error(&err) {
            eprintln!("{}", app_error.user_message());
            if app_error.shows_detail() {
                eprintln!("  {err:#}");
            }
            std::process::exit(app_error.exit_code());
        }
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli)?;

    let config = range_picker::app::load_config(&cli)?;
    let today = range_picker::calendar::today();
    tracing::info!(
        target: "diagnostics",
        today = %today,
        minimum = ?config.minimum_date,
        maximum = ?config.maximum_date,
        start = ?config.selected_start_date,
        end = ?config.selected_end_date,
        week_start = ?config.week_start,
        absolute_start_of_month = config.is_absolute_start_of_month,
        allow_no_dates = config.enabled_set_no_dates,
        output = ?cli.output,
        "picker options"
    );
    let picker = RangePicker::new(&config, today)
        .map_err(|e| anyhow::Error::new(AppError::from(&e)).context(e))?;

    let rt = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
    let local_set = tokio::task::LocalSet::new();

    let outcome = rt.block_on(local_set.run_until(async move {
        let mut app = range_picker::app::App::new(picker, today);
        range_picker::app::run_tui(&mut app).await?;
        anyhow::Ok(app.outcome())
    }))?;

    match outcome {
        Some(PickerOutcome::Confirmed { start, end }) => {
            println!("{}", format_outcome(cli.output, start, end)?);
            Ok(())
        }
        Some(PickerOutcome::Cancelled) | None => Err(anyhow::Error::new(AppError::Cancelled)),
    }
}

fn format_outcome(
    format: OutputFormat,
    start: Option<chrono::NaiveDate>,
    end: Option<chrono::NaiveDate>,
) -> anyhow::Result<String> {
    let side = |date: Option<chrono::NaiveDate>| date.map(|d| d.to_string()).unwrap_or_default();
    match format {
        OutputFormat::Text => Ok(format!("{}..{}", side(start), side(end))),
        OutputFormat::Json => {
            Ok(serde_json::to_string(&serde_json::json!({ "start": start, "end": end }))?)
        }
    }
}

fn extract_app_error(err: &anyhow::Error) -> Option<AppError> {
    err.chain().find_map(|cause| cause.downcast_ref::<AppError>().cloned())
}

/// `--log-filter`, then `RUST_LOG`, then the picker's own default.
fn log_directives(cli: &Cli, env_filter: Option<String>) -> String {
    cli.log_filter
        .clone()
        .or(env_filter)
        .filter(|directives| !directives.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_DIRECTIVES.to_owned())
}

fn init_tracing(cli: &Cli) -> anyhow::Result<()> {
    let Some(path) = cli.log_file.as_ref() else {
        if std::env::var_os("RUST_LOG").is_some() {
            eprintln!(
                "RUST_LOG is set, but tracing is disabled without --log-file <PATH>. \
Use --log-file to enable diagnostics."
            );
        }
        return Ok(());
    };

    let directives = log_directives(cli, std::env::var("RUST_LOG").ok());
    let filter = tracing_subscriber::EnvFilter::try_new(directives.as_str())
        .map_err(|e| anyhow::anyhow!("invalid tracing filter `{directives}`: {e}"))?;

    let mut options = OpenOptions::new();
    options.create(true).write(true);
    if cli.log_append {
        options.append(true);
    } else {
        options.truncate(true);
    }
    let file = options
        .open(path)
        .map_err(|e| anyhow::anyhow!("failed to open log file {}: {e}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(file)
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing subscriber: {e}"))?;

    tracing::info!(
        target: "diagnostics",
        version = env!("CARGO_PKG_VERSION"),
        log_file = %path.display(),
        log_filter = %directives,
        log_append = cli.log_append,
        "tracing enabled"
    );

    Ok(())
}
