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

use dirprobe_business::data::config::ConnectionConfig;
use dirprobe_business::data::credentials::Credentials;
use dirprobe_business::outcome::ProbeOutcome;
use dirprobe_business::runner::ProbeRunner;
use log::error;

pub fn run(
    config: &ConnectionConfig,
    credentials: &Credentials,
    bind_dn_format: &str,
) -> Result<ProbeOutcome, std::io::Error> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .thread_name(env!("CARGO_PKG_NAME"))
        .build()
        .map_err(|e| {
            error!("failed to start tokio runtime: {}", e);
            e
        })?;

    let outcome = runtime.block_on(async {
        let runner = ProbeRunner::new(dirprobe_ldap::inject::connector(bind_dn_format));
        runner.run(config, credentials).await
    });
    Ok(outcome)
}
