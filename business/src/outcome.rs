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

/// Classified result of a single probe. Produced exactly once per
/// invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProbeOutcome {
    Success,
    InvalidCredentials,
    ServerUnreachable,
    Timeout,
    ProtocolError { detail: String },
    UnknownFailure { detail: String },
}

impl ProbeOutcome {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::InvalidCredentials => "invalid-credentials",
            Self::ServerUnreachable => "server-unreachable",
            Self::Timeout => "timeout",
            Self::ProtocolError { .. } => "protocol-error",
            Self::UnknownFailure { .. } => "unknown-failure",
        }
    }

    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::ProtocolError { detail } | Self::UnknownFailure { detail } => {
                Some(detail.as_str())
            }
            _ => None,
        }
    }
}
