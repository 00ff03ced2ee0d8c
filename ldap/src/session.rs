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

use crate::error::to_session_error;
use async_trait::async_trait;
use dirprobe_business::connector::{BindDisposition, DirectorySession, SessionError};
use dirprobe_business::data::credentials::Credentials;
use ldap3::{ldap_escape, Ldap};
use log::{debug, warn};
use std::time::Duration;
use tera::{Context, Tera};

const RC_SUCCESS: u32 = 0;
const RC_INVALID_CREDENTIALS: u32 = 49;

pub(crate) struct LdapSession {
    ldap: Ldap,
    op_timeout: Duration,
    bind_dn_format: String,
}

impl LdapSession {
    pub(crate) fn new(ldap: Ldap, op_timeout: Duration, bind_dn_format: String) -> Self {
        Self {
            ldap,
            op_timeout,
            bind_dn_format,
        }
    }
}

#[async_trait]
impl DirectorySession for LdapSession {
    async fn bind(&mut self, credentials: &Credentials) -> Result<BindDisposition, SessionError> {
        let bind_dn = format_bind_dn(&self.bind_dn_format, credentials.principal())?;
        debug!("binding as '{}'", bind_dn);
        let result = self
            .ldap
            .with_timeout(self.op_timeout)
            .simple_bind(&bind_dn, credentials.secret())
            .await
            .map_err(to_session_error)?;
        classify_bind(result.rc, &result.text)
    }

    async fn close(&mut self) {
        if let Err(e) = self.ldap.unbind().await {
            warn!("failed to unbind: {}", e);
        }
    }
}

fn classify_bind(rc: u32, text: &str) -> Result<BindDisposition, SessionError> {
    match rc {
        RC_SUCCESS => Ok(BindDisposition::Accepted),
        RC_INVALID_CREDENTIALS => {
            debug!("wrong username or password");
            Ok(BindDisposition::Rejected)
        }
        v => {
            warn!("Unexpected LDAP result code while binding: {}. {}", v, text);
            Err(SessionError::Protocol(format!(
                "LDAP result code {}: {}",
                v, text
            )))
        }
    }
}

fn format_bind_dn(format: &str, principal: &str) -> Result<String, SessionError> {
    let mut tera = Tera::default();
    let mut context = Context::new();
    context.insert("user", &ldap_escape(principal).into_owned());
    tera.render_str(format, &context).map_err(|e| {
        warn!("failed to construct bind dn: {}", e);
        SessionError::Other(format!("invalid bind dn format: {}", e))
    })
}
