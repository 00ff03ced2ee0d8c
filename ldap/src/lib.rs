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

mod connect;
mod error;
mod session;

/// Bind the principal verbatim, as Active Directory UPN binds do.
pub const VERBATIM_BIND_DN: &str = "{{ user }}";

pub mod inject {
    use crate::connect::Connector;
    use dirprobe_business::connector::DirectoryConnector;
    use std::sync::Arc;

    /// `bind_dn_format` is a tera template; `{{ user }}` is replaced
    /// by the escaped principal.
    pub fn connector(bind_dn_format: &str) -> Arc<dyn DirectoryConnector> {
        Arc::new(Connector {
            bind_dn_format: bind_dn_format.to_owned(),
        })
    }
}
