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

use std::time::Duration;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("host must not be empty")]
    EmptyHost,

    #[error("host '{0}' is not usable in an LDAP URL")]
    InvalidHost(String),

    #[error("port {0} is outside 1..=65535")]
    PortOutOfRange(i64),

    #[error("timeout of {0} seconds is not positive")]
    NonPositiveTimeout(i64),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TlsMode {
    Plain,
    Ldaps,
    StartTls,
}

/// Server certificate verification policy. `Never` disables
/// verification and must be requested explicitly by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CertPolicy {
    Require,
    Never,
}

/// Validated description of the target directory server. Immutable
/// once constructed, one instance per probe invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectionConfig {
    host: String,
    port: u16,
    base_dn: String,
    timeout: Duration,
    tls: TlsMode,
    cert_policy: CertPolicy,
    url: Url,
}

impl ConnectionConfig {
    /// Raw port and timeout arrive as `i64` so that out-of-range
    /// values reach validation instead of dying in integer parsing.
    pub fn new(
        host: &str,
        port: i64,
        base_dn: &str,
        timeout_in_seconds: i64,
        tls: TlsMode,
        cert_policy: CertPolicy,
    ) -> Result<Self, ConfigError> {
        if host.is_empty() {
            return Err(ConfigError::EmptyHost);
        }
        if !(1..=65535).contains(&port) {
            return Err(ConfigError::PortOutOfRange(port));
        }
        if timeout_in_seconds <= 0 {
            return Err(ConfigError::NonPositiveTimeout(timeout_in_seconds));
        }

        let scheme = match tls {
            TlsMode::Ldaps => "ldaps",
            TlsMode::Plain | TlsMode::StartTls => "ldap",
        };
        let url = Url::parse(&format!("{}://{}:{}", scheme, host, port))
            .map_err(|_| ConfigError::InvalidHost(host.to_owned()))?;

        Ok(Self {
            host: host.to_owned(),
            port: port as u16,
            base_dn: base_dn.to_owned(),
            timeout: Duration::from_secs(timeout_in_seconds as u64),
            tls,
            cert_policy,
            url,
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn base_dn(&self) -> &str {
        &self.base_dn
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn tls(&self) -> TlsMode {
        self.tls
    }

    pub fn cert_policy(&self) -> CertPolicy {
        self.cert_policy
    }

    /// URL handed to the directory collaborator.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(-1)]
    #[case(65536)]
    fn out_of_range_port_is_rejected(#[case] port: i64) {
        let actual = ConnectionConfig::new(
            "localhost",
            port,
            "dc=example,dc=org",
            5,
            TlsMode::Plain,
            CertPolicy::Require,
        );

        assert_eq!(Err(ConfigError::PortOutOfRange(port)), actual);
    }

    #[rstest]
    #[case(0)]
    #[case(-3)]
    fn non_positive_timeout_is_rejected(#[case] timeout: i64) {
        let actual = ConnectionConfig::new(
            "localhost",
            389,
            "dc=example,dc=org",
            timeout,
            TlsMode::Plain,
            CertPolicy::Require,
        );

        assert_eq!(Err(ConfigError::NonPositiveTimeout(timeout)), actual);
    }

    #[test]
    fn empty_host_is_rejected() {
        let actual = ConnectionConfig::new(
            "",
            389,
            "dc=example,dc=org",
            5,
            TlsMode::Plain,
            CertPolicy::Require,
        );

        assert_eq!(Err(ConfigError::EmptyHost), actual);
    }

    #[test]
    fn unusable_host_is_rejected() {
        let actual = ConnectionConfig::new(
            "a b",
            389,
            "dc=example,dc=org",
            5,
            TlsMode::Plain,
            CertPolicy::Require,
        );

        assert_eq!(Err(ConfigError::InvalidHost("a b".to_owned())), actual);
    }

    #[test]
    fn ldaps_mode_yields_ldaps_url() {
        let actual = ConnectionConfig::new(
            "directory.example.org",
            636,
            "dc=example,dc=org",
            5,
            TlsMode::Ldaps,
            CertPolicy::Require,
        )
        .unwrap();

        assert_eq!("ldaps://directory.example.org:636", actual.url().as_str());
    }

    #[test]
    fn starttls_mode_keeps_plain_scheme() {
        let actual = ConnectionConfig::new(
            "directory.example.org",
            389,
            "dc=example,dc=org",
            5,
            TlsMode::StartTls,
            CertPolicy::Require,
        )
        .unwrap();

        assert_eq!("ldap://directory.example.org:389", actual.url().as_str());
    }
}
