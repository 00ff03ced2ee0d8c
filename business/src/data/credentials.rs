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

use std::fmt::{Debug, Display, Formatter};

/// Wrapper keeping the password out of every `Debug`/`Display`
/// rendering. The raw value is only reachable via [`Secret::reveal`].
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub(crate) fn reveal(&self) -> &str {
        &self.0
    }
}

impl Debug for Secret {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "<redacted>")
    }
}

impl Display for Secret {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "<redacted>")
    }
}

/// Principal and secret for a single bind attempt. Scoped to one
/// probe call, never logged and never persisted.
#[derive(Clone, Debug)]
pub struct Credentials {
    principal: String,
    secret: Secret,
}

impl Credentials {
    pub fn new(principal: impl Into<String>, secret: Secret) -> Self {
        Self {
            principal: principal.into(),
            secret,
        }
    }

    pub fn principal(&self) -> &str {
        &self.principal
    }

    pub fn secret(&self) -> &str {
        self.secret.reveal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn debug_rendering_hides_the_secret() {
        let uut = Credentials::new("user01", Secret::new("bitnami1"));

        let rendered = format!("{:?}", uut);

        assert!(!rendered.contains("bitnami1"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn secret_is_recoverable_for_the_bind() {
        let uut = Credentials::new("user01", Secret::new("bitnami1"));

        assert_eq!("bitnami1", uut.secret());
    }
}
