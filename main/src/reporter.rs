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

use chrono::DateTime;
use chrono::Utc;
use dirprobe_business::data::config::ConnectionConfig;
use dirprobe_business::outcome::ProbeOutcome;
use serde_derive::Serialize;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_INVALID_CREDENTIALS: i32 = 1;
pub const EXIT_UNREACHABLE: i32 = 2;
pub const EXIT_TIMEOUT: i32 = 3;
pub const EXIT_PROTOCOL_ERROR: i32 = 4;
pub const EXIT_CONFIG_ERROR: i32 = 5;
pub const EXIT_UNKNOWN_FAILURE: i32 = 6;

pub fn exit_code(outcome: &ProbeOutcome) -> i32 {
    match outcome {
        ProbeOutcome::Success => EXIT_SUCCESS,
        ProbeOutcome::InvalidCredentials => EXIT_INVALID_CREDENTIALS,
        ProbeOutcome::ServerUnreachable => EXIT_UNREACHABLE,
        ProbeOutcome::Timeout => EXIT_TIMEOUT,
        ProbeOutcome::ProtocolError { .. } => EXIT_PROTOCOL_ERROR,
        ProbeOutcome::UnknownFailure { .. } => EXIT_UNKNOWN_FAILURE,
    }
}

#[derive(Serialize)]
struct ProbeRecord<'a> {
    kind: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<&'a str>,
    host: &'a str,
    port: u16,
    principal: &'a str,
    timestamp: String,
}

pub struct ResultReporter {
    json: bool,
}

impl ResultReporter {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    /// Prints the report to stdout and hands back the process exit
    /// code. The credential secret never appears in either.
    pub fn report(
        &self,
        outcome: &ProbeOutcome,
        config: &ConnectionConfig,
        principal: &str,
    ) -> i32 {
        let line = if self.json {
            render_record(outcome, config, principal, Utc::now())
        } else {
            render_message(outcome, config, principal)
        };
        println!("{}", line);
        exit_code(outcome)
    }
}

fn render_message(outcome: &ProbeOutcome, config: &ConnectionConfig, principal: &str) -> String {
    let verdict = match outcome {
        ProbeOutcome::Success => "bind accepted".to_owned(),
        ProbeOutcome::InvalidCredentials => "invalid credentials".to_owned(),
        ProbeOutcome::ServerUnreachable => "server unreachable".to_owned(),
        ProbeOutcome::Timeout => "timed out".to_owned(),
        ProbeOutcome::ProtocolError { detail } => format!("protocol error: {}", detail),
        ProbeOutcome::UnknownFailure { detail } => format!("unknown failure: {}", detail),
    };
    format!("probe of {} as '{}': {}", config.url(), principal, verdict)
}

fn render_record(
    outcome: &ProbeOutcome,
    config: &ConnectionConfig,
    principal: &str,
    timestamp: DateTime<Utc>,
) -> String {
    let record = ProbeRecord {
        kind: outcome.kind(),
        detail: outcome.detail(),
        host: config.host(),
        port: config.port(),
        principal,
        timestamp: timestamp.to_rfc3339(),
    };
    serde_json::to_string(&record).unwrap_or_else(|_| render_message(outcome, config, principal))
}
