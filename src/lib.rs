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

pub mod app;
pub mod calendar;
pub mod error;
pub mod picker;
pub mod ui;

use calendar::WeekStart;
use calendar::format::WeekdayFormat;
use chrono::NaiveDate;
use clap::Parser;

/// How a confirmed range is printed on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// `START..END`, either side empty when unset
    #[default]
    Text,
    /// `{"start": "...", "end": "..."}`
    Json,
}

#[derive(Parser, Debug, Default)]
#[command(name = "range-picker", about = "Pick a start/end date range in the terminal")]
pub struct Cli {
    /// First selectable date (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub min: Option<NaiveDate>,

    /// Last selectable date (YYYY-MM-DD, defaults to three years after --min)
    #[arg(long)]
    pub max: Option<NaiveDate>,

    /// Pre-selected range start (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// Pre-selected range end (YYYY-MM-DD, requires --start)
    #[arg(long)]
    pub end: Option<NaiveDate>,

    /// Move the minimum date back to the 1st of its month
    #[arg(long)]
    pub absolute_start_of_month: bool,

    /// Third tap clears the range; allow confirming with no dates
    #[arg(long)]
    pub allow_no_dates: bool,

    /// Title shown above the calendar
    #[arg(long)]
    pub title: Option<String>,

    /// First column of each week
    #[arg(long, value_enum)]
    pub week_start: Option<WeekStart>,

    /// Width of weekday labels
    #[arg(long, value_enum)]
    pub weekday_format: Option<WeekdayFormat>,

    /// Output format for the confirmed range
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// JSON config file (defaults to <config dir>/range-picker/config.json)
    #[arg(long, value_name = "PATH")]
    pub config: Option<std::path::PathBuf>,

    /// Write tracing diagnostics to a file (disabled by default)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<std::path::PathBuf>,

    /// Tracing filter directives (e.g. `info,range_picker=debug`)
    #[arg(long, value_name = "FILTER")]
    pub log_filter: Option<String>,

    /// Append to --log-file instead of truncating it
    #[arg(long)]
    pub log_append: bool,
}
