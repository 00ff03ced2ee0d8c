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

use dirprobe_business::data::credentials::Secret;
use std::env;
use std::io::stdin;
use std::io::Error;

pub const PASSWORD_VARIABLE: &str = "DIRPROBE_PASSWORD";

/// The secret comes from the environment or stdin, never from an
/// argument, so it cannot leak into the process list.
pub fn obtain_secret() -> Result<Secret, Error> {
    match env::var(PASSWORD_VARIABLE) {
        Ok(value) => Ok(Secret::new(value)),
        Err(_) => read_from_stdin(),
    }
}

fn read_from_stdin() -> Result<Secret, Error> {
    eprintln!("password:");
    let mut line = String::new();
    stdin().read_line(&mut line)?;
    Ok(Secret::new(line.trim_end_matches(['\r', '\n'])))
}
