// Copyright (C) 2026  Caprica Software Limited
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
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Log file setup.
//!
//! The terminal belongs to the user interface, so log output goes to
//! `calcui.log` next to the configuration file instead of stdout. The level
//! comes from the configuration unless `RUST_LOG` is set, which takes
//! precedence:
//!
//! ```bash
//! RUST_LOG=calcui=debug calcui
//! ```

use std::{
    fs::{self, OpenOptions},
    path::PathBuf,
    sync::Mutex,
};

use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{format::Writer, time::FormatTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::config;

const LOG_FILE: &str = "calcui.log";
const FALLBACK_LEVEL: &str = "warn";

/// Compact time format: HH:MM:SS.mmm
struct CompactTime;

impl FormatTime for CompactTime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%H:%M:%S%.3f"))
    }
}

/// Builds the level filter, preferring `RUST_LOG` over the configured level.
fn level_filter(level: &str) -> EnvFilter {
    if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(FALLBACK_LEVEL))
    }
}

/// Initializes logging to the log file.
///
/// Returns the log file path, or `None` if there is nowhere to write logs (in
/// which case logging stays disabled) or a subscriber was already installed.
pub(crate) fn init(level: &str) -> Option<PathBuf> {
    let path = config::config_path()?.with_file_name(LOG_FILE);

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).ok()?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path).ok()?;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_timer(CompactTime)
        .with_level(true)
        .with_filter(level_filter(level));

    tracing_subscriber::registry().with(fmt_layer).try_init().ok()?;

    Some(path)
}
