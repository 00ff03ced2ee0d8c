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

use dirprobe_business::connector::{OpenError, SessionError};
use ldap3::LdapError;
use std::io::ErrorKind;

pub(crate) fn to_open_error(error: LdapError) -> OpenError {
    match error {
        LdapError::Timeout { .. } => OpenError::Timeout,
        LdapError::Io { source } => match source.kind() {
            ErrorKind::TimedOut => OpenError::Timeout,
            _ => OpenError::Unreachable,
        },
        other => OpenError::Other(other.to_string()),
    }
}

pub(crate) fn to_session_error(error: LdapError) -> SessionError {
    match error {
        LdapError::Timeout { .. } => SessionError::Timeout,
        LdapError::Io { source } if source.kind() == ErrorKind::TimedOut => SessionError::Timeout,
        other => SessionError::Other(other.to_string()),
    }
}
