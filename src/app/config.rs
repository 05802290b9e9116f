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

use crate::Cli;
use crate::error::AppError;
use crate::picker::PickerConfig;
use anyhow::Context as _;
use std::path::{Path, PathBuf};

const CONFIG_DIR_NAME: &str = "range-picker";
const CONFIG_FILE: &str = "config.json";

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE))
}

/// Config file (explicit or default location) with CLI flags layered on top.
///
/// A missing default file is not an error. An explicit `--config` that cannot
/// be read or parsed is.
pub fn load_config(cli: &Cli) -> anyhow::Result<PickerConfig> {
    let mut config = match cli.config.as_deref() {
        Some(path) => read_config_file(path)?,
        None => match default_config_path().filter(|path| path.is_file()) {
            Some(path) => read_config_file(&path)?,
            None => {
                tracing::debug!("No config file found, using defaults");
                PickerConfig::default()
            }
        },
    };
    apply_cli_overrides(&mut config, cli);
    Ok(config)
}

fn read_config_file(path: &Path) -> anyhow::Result<PickerConfig> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow::Error::new(AppError::InvalidConfig).context(e))
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config = serde_json::from_str::<PickerConfig>(&content)
        .map_err(|e| anyhow::Error::new(AppError::InvalidConfig).context(e))
        .with_context(|| format!("failed to parse config file {}", path.display()))?;
    tracing::info!(path = %path.display(), "Loaded config file");
    Ok(config)
}

pub fn apply_cli_overrides(config: &mut PickerConfig, cli: &Cli) {
    if let Some(min) = cli.min {
        config.minimum_date = Some(min);
    }
    if let Some(max) = cli.max {
        config.maximum_date = Some(max);
    }
    if let Some(start) = cli.start {
        config.selected_start_date = Some(start);
    }
    if let Some(end) = cli.end {
        config.selected_end_date = Some(end);
    }
    if cli.absolute_start_of_month {
        config.is_absolute_start_of_month = true;
    }
    if cli.allow_no_dates {
        config.enabled_set_no_dates = true;
    }
    if let Some(title) = &cli.title {
        config.title_text = Some(title.clone());
    }
    if let Some(week_start) = cli.week_start {
        config.week_start = week_start;
    }
    if let Some(format) = cli.weekday_format {
        config.weekday_format = format;
    }
}
