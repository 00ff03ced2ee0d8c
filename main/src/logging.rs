/*  dirprobe: Directory Authentication Probe
 *  Copyright (C) 2026 The dirprobe developers
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  You should have received a copy of the GNU General Public License
 *  along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */

use std::str::FromStr;
use tracing_log::LogTracer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Logs go to stderr; stdout is reserved for the probe report.
pub fn initialise_from_verbosity(verbosity_level: u8) {
    let filter = match verbosity_level {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    let filter_layer = match EnvFilter::from_str(filter) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("invalid log filters: {}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
    init_log();
}

fn init_log() {
    if let Err(e) = LogTracer::init() {
        eprintln!("failed to initialise log crate bridge: {}", e);
        std::process::exit(1);
    }
}
