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

use crate::data::config::ConnectionConfig;
use crate::data::credentials::Credentials;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpenError {
    #[error("server unreachable")]
    Unreachable,

    #[error("connection attempt timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    Other(String),
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("operation timed out")]
    Timeout,

    #[error("protocol error: {0}")]
    Protocol(String),

    #[error("backend error: {0}")]
    Other(String),
}

/// Verdict of the directory server on one bind attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BindDisposition {
    Accepted,
    Rejected,
}

/// One open connection to a directory server.
#[async_trait]
pub trait DirectorySession: Send {
    async fn bind(&mut self, credentials: &Credentials) -> Result<BindDisposition, SessionError>;

    /// Releases the connection. Failures are the implementation's to
    /// log; the caller's outcome is already fixed at this point.
    async fn close(&mut self);
}

/// Seam to the external directory-protocol library.
#[async_trait]
pub trait DirectoryConnector: Send + Sync {
    async fn open(
        &self,
        config: &ConnectionConfig,
    ) -> Result<Box<dyn DirectorySession>, OpenError>;
}
