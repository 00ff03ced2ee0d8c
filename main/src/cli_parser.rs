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

use clap::Arg;
use clap::ArgAction;
use clap::ArgMatches;
use clap::Command;

pub const FLAG_HOST: &str = "host";
pub const FLAG_PORT: &str = "port";
pub const FLAG_PORT_DEFAULT: &str = "389";
pub const FLAG_BASEDN: &str = "basedn";
pub const FLAG_USER: &str = "user";
pub const FLAG_TIMEOUT: &str = "timeout-seconds";
pub const FLAG_TIMEOUT_DEFAULT: &str = "5";
pub const FLAG_LDAPS: &str = "ldaps";
pub const FLAG_STARTTLS: &str = "starttls";
pub const FLAG_INSECURE_SKIP_VERIFY: &str = "insecure-skip-verify";
pub const FLAG_BIND_DN_FORMAT: &str = "bind-dn-format";
pub const FLAG_JSON: &str = "json";
pub const FLAG_VERBOSE: &str = "verbose";

pub fn parse_arguments() -> ArgMatches {
    let app = Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .after_help(concat!(
            "The bind password is read from $DIRPROBE_PASSWORD or, if unset, ",
            "from stdin. It is never taken as an argument.",
        ))
        .arg(
            Arg::new(FLAG_HOST)
                .short('H')
                .long(FLAG_HOST)
                .value_name("HOST")
                .help("Directory server to probe")
                .num_args(1)
                .required(true),
        )
        .arg(
            Arg::new(FLAG_PORT)
                .short('p')
                .long(FLAG_PORT)
                .value_name("PORT")
                .help("Directory server port")
                .num_args(1)
                .default_value(FLAG_PORT_DEFAULT),
        )
        .arg(
            Arg::new(FLAG_BASEDN)
                .short('b')
                .long(FLAG_BASEDN)
                .value_name("DN")
                .help("Base DN of the directory")
                .num_args(1)
                .default_value(""),
        )
        .arg(
            Arg::new(FLAG_USER)
                .short('u')
                .long(FLAG_USER)
                .value_name("PRINCIPAL")
                .help("Principal to bind as")
                .num_args(1)
                .required(true),
        )
        .arg(
            Arg::new(FLAG_TIMEOUT)
                .short('t')
                .long(FLAG_TIMEOUT)
                .value_name("SECONDS")
                .help("Bound on connect and bind, in seconds")
                .num_args(1)
                .default_value(FLAG_TIMEOUT_DEFAULT),
        )
        .arg(
            Arg::new(FLAG_LDAPS)
                .long(FLAG_LDAPS)
                .help("Connect with TLS (ldaps)")
                .action(ArgAction::SetTrue)
                .conflicts_with(FLAG_STARTTLS),
        )
        .arg(
            Arg::new(FLAG_STARTTLS)
                .long(FLAG_STARTTLS)
                .help("Negotiate TLS via StartTLS after connecting")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(FLAG_INSECURE_SKIP_VERIFY)
                .long(FLAG_INSECURE_SKIP_VERIFY)
                .help("Skip server certificate verification. Loudly logged, never a default")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(FLAG_BIND_DN_FORMAT)
                .long(FLAG_BIND_DN_FORMAT)
                .value_name("TEMPLATE")
                .help("Bind DN template, {{ user }} is replaced by the escaped principal")
                .num_args(1),
        )
        .arg(
            Arg::new(FLAG_JSON)
                .long(FLAG_JSON)
                .help("Emit the outcome as a JSON record instead of a plain line")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(FLAG_VERBOSE)
                .short('v')
                .long(FLAG_VERBOSE)
                .help("Log verbosely. Pass twice for trace output")
                .action(ArgAction::Count),
        );
    app.get_matches()
}
