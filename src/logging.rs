// Colored Squares – A pyramid of colored squares
// Copyright (C) 2023  Neil Roberts
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.


// Used when neither the config nor RUST_LOG name a filter
const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    // env_logger filter syntax, eg. “colored_squares=debug”. Takes
    // precedence over RUST_LOG.
    pub filter: Option<String>,
    pub no_color: bool,
}

fn choose_filter(config: Option<&str>, environment: Option<&str>) -> String {
    config
        .or(environment)
        .unwrap_or(DEFAULT_FILTER)
        .to_string()
}

/// Installs env_logger as the global logger. Fails if a logger has
/// already been installed.
pub fn init_logging(config: &LoggingConfig) -> Result<(), String> {
    let environment = std::env::var("RUST_LOG").ok();
    let filter = choose_filter(
        config.filter.as_deref(),
        environment.as_deref(),
    );

    let write_style = if config.no_color {
        env_logger::WriteStyle::Never
    } else {
        env_logger::WriteStyle::Auto
    };

    env_logger::Builder::new()
        .parse_filters(&filter)
        .write_style(write_style)
        .try_init()
        .map_err(|e| format!("Failed to set up logging: {}", e))?;

    log::debug!("Logging with filter “{}”", filter);

    Ok(())
}
