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

use crate::error::to_open_error;
use crate::session::LdapSession;
use async_trait::async_trait;
use dirprobe_business::connector::{DirectoryConnector, DirectorySession, OpenError};
use dirprobe_business::data::config::{CertPolicy, ConnectionConfig, TlsMode};
use ldap3::{drive, LdapConnAsync, LdapConnSettings};
use log::{debug, warn};

pub(crate) struct Connector {
    pub(crate) bind_dn_format: String,
}

#[async_trait]
impl DirectoryConnector for Connector {
    async fn open(
        &self,
        config: &ConnectionConfig,
    ) -> Result<Box<dyn DirectorySession>, OpenError> {
        let mut settings = LdapConnSettings::new()
            .set_conn_timeout(config.timeout())
            .set_starttls(config.tls() == TlsMode::StartTls);
        if config.cert_policy() == CertPolicy::Never {
            warn!(
                "certificate verification for {} is DISABLED by configuration",
                config.url()
            );
            settings = settings.set_no_tls_verify(true);
        }

        debug!("connecting to {}", config.url());
        match LdapConnAsync::from_url_with_settings(settings, config.url()).await {
            Err(e) => {
                warn!("ldap connection to '{}' failed: {}", config.url(), e);
                Err(to_open_error(e))
            }
            Ok((conn, ldap)) => {
                drive!(conn);
                debug!("connected to {}", config.url());
                Ok(Box::new(LdapSession::new(
                    ldap,
                    config.timeout(),
                    self.bind_dn_format.clone(),
                )))
            }
        }
    }
}
