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

use crate::connector::{BindDisposition, DirectoryConnector, OpenError, SessionError};
use crate::data::config::ConnectionConfig;
use crate::data::credentials::Credentials;
use crate::outcome::ProbeOutcome;
use log::debug;
use std::sync::Arc;

/// Orchestrates one bounded authentication attempt. A probe is one
/// deterministic bind; retry policy belongs to the caller.
pub struct ProbeRunner {
    connector: Arc<dyn DirectoryConnector>,
}

impl ProbeRunner {
    pub fn new(connector: Arc<dyn DirectoryConnector>) -> Self {
        Self { connector }
    }

    /// Invariant: a session, once opened, is closed exactly once on
    /// every exit path before this returns.
    pub async fn run(
        &self,
        config: &ConnectionConfig,
        credentials: &Credentials,
    ) -> ProbeOutcome {
        debug!("probing {}", config.url());
        let mut session = match self.connector.open(config).await {
            Err(OpenError::Unreachable) => return ProbeOutcome::ServerUnreachable,
            Err(OpenError::Timeout) => return ProbeOutcome::Timeout,
            Err(OpenError::Other(detail)) => return ProbeOutcome::UnknownFailure { detail },
            Ok(v) => v,
        };

        let outcome = match session.bind(credentials).await {
            Ok(BindDisposition::Accepted) => ProbeOutcome::Success,
            Ok(BindDisposition::Rejected) => ProbeOutcome::InvalidCredentials,
            Err(SessionError::Timeout) => ProbeOutcome::Timeout,
            Err(SessionError::Protocol(detail)) => ProbeOutcome::ProtocolError { detail },
            Err(SessionError::Other(detail)) => ProbeOutcome::UnknownFailure { detail },
        };

        session.close().await;
        debug!("probe of {} finished: {}", config.url(), outcome.kind());
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::DirectorySession;
    use crate::data::config::{CertPolicy, TlsMode};
    use crate::data::credentials::Secret;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use rstest::fixture;
    use rstest::rstest;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use test_log::test;

    struct FakeConnector {
        bind_result: Result<BindDisposition, fn() -> SessionError>,
        open_error: Option<fn() -> OpenError>,
        closes: Arc<AtomicUsize>,
    }

    struct FakeSession {
        bind_result: Result<BindDisposition, fn() -> SessionError>,
        closes: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl DirectorySession for FakeSession {
        async fn bind(&mut self, _: &Credentials) -> Result<BindDisposition, SessionError> {
            self.bind_result.map_err(|e| e())
        }

        async fn close(&mut self) {
            self.closes.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[async_trait]
    impl DirectoryConnector for FakeConnector {
        async fn open(
            &self,
            _: &ConnectionConfig,
        ) -> Result<Box<dyn DirectorySession>, OpenError> {
            if let Some(error) = self.open_error {
                return Err(error());
            }
            Ok(Box::new(FakeSession {
                bind_result: self.bind_result,
                closes: Arc::clone(&self.closes),
            }))
        }
    }

    #[rstest]
    #[test(tokio::test)]
    async fn accepted_bind_yields_success(
        config: ConnectionConfig,
        credentials: Credentials,
        closes: Arc<AtomicUsize>,
    ) {
        let uut = uut(Ok(BindDisposition::Accepted), None, &closes);

        let actual = uut.run(&config, &credentials).await;

        assert_eq!(ProbeOutcome::Success, actual);
        assert_eq!(1, closes.load(Ordering::SeqCst));
    }

    #[rstest]
    #[test(tokio::test)]
    async fn rejected_bind_yields_invalid_credentials(
        config: ConnectionConfig,
        credentials: Credentials,
        closes: Arc<AtomicUsize>,
    ) {
        let uut = uut(Ok(BindDisposition::Rejected), None, &closes);

        let actual = uut.run(&config, &credentials).await;

        assert_eq!(ProbeOutcome::InvalidCredentials, actual);
        assert_eq!(1, closes.load(Ordering::SeqCst));
    }

    #[rstest]
    #[test(tokio::test)]
    async fn session_timeout_still_closes_the_session(
        config: ConnectionConfig,
        credentials: Credentials,
        closes: Arc<AtomicUsize>,
    ) {
        let uut = uut(Err(|| SessionError::Timeout), None, &closes);

        let actual = uut.run(&config, &credentials).await;

        assert_eq!(ProbeOutcome::Timeout, actual);
        assert_eq!(1, closes.load(Ordering::SeqCst));
    }

    #[rstest]
    #[test(tokio::test)]
    async fn protocol_error_carries_detail(
        config: ConnectionConfig,
        credentials: Credentials,
        closes: Arc<AtomicUsize>,
    ) {
        let uut = uut(
            Err(|| SessionError::Protocol("rc 53: unwilling to perform".to_owned())),
            None,
            &closes,
        );

        let actual = uut.run(&config, &credentials).await;

        assert_eq!(
            ProbeOutcome::ProtocolError {
                detail: "rc 53: unwilling to perform".to_owned()
            },
            actual
        );
        assert_eq!(1, closes.load(Ordering::SeqCst));
    }

    #[rstest]
    #[test(tokio::test)]
    async fn unreachable_server_opens_no_session(
        config: ConnectionConfig,
        credentials: Credentials,
        closes: Arc<AtomicUsize>,
    ) {
        let uut = uut(
            Ok(BindDisposition::Accepted),
            Some(|| OpenError::Unreachable),
            &closes,
        );

        let actual = uut.run(&config, &credentials).await;

        assert_eq!(ProbeOutcome::ServerUnreachable, actual);
        assert_eq!(0, closes.load(Ordering::SeqCst));
    }

    #[rstest]
    #[test(tokio::test)]
    async fn open_timeout_yields_timeout(
        config: ConnectionConfig,
        credentials: Credentials,
        closes: Arc<AtomicUsize>,
    ) {
        let uut = uut(
            Ok(BindDisposition::Accepted),
            Some(|| OpenError::Timeout),
            &closes,
        );

        let actual = uut.run(&config, &credentials).await;

        assert_eq!(ProbeOutcome::Timeout, actual);
        assert_eq!(0, closes.load(Ordering::SeqCst));
    }

    #[rstest]
    #[test(tokio::test)]
    async fn repeated_probes_are_idempotent(
        config: ConnectionConfig,
        credentials: Credentials,
        closes: Arc<AtomicUsize>,
    ) {
        let uut = uut(Ok(BindDisposition::Rejected), None, &closes);

        let first = uut.run(&config, &credentials).await;
        let second = uut.run(&config, &credentials).await;

        assert_eq!(first, second);
        assert_eq!(2, closes.load(Ordering::SeqCst));
    }

    fn uut(
        bind_result: Result<BindDisposition, fn() -> SessionError>,
        open_error: Option<fn() -> OpenError>,
        closes: &Arc<AtomicUsize>,
    ) -> ProbeRunner {
        ProbeRunner::new(Arc::new(FakeConnector {
            bind_result,
            open_error,
            closes: Arc::clone(closes),
        }))
    }

    #[fixture]
    fn config() -> ConnectionConfig {
        ConnectionConfig::new(
            "localhost",
            1389,
            "dc=example,dc=org",
            5,
            TlsMode::Plain,
            CertPolicy::Require,
        )
        .unwrap()
    }

    #[fixture]
    fn credentials() -> Credentials {
        Credentials::new("user01", Secret::new("bitnami1"))
    }

    #[fixture]
    fn closes() -> Arc<AtomicUsize> {
        Arc::new(AtomicUsize::new(0))
    }
}
