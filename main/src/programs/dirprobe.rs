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

use clap::ArgMatches;
use dirprobe_business::data::config::{CertPolicy, ConnectionConfig, TlsMode};
use dirprobe_business::data::credentials::Credentials;
use dirprobe_ldap::VERBATIM_BIND_DN;
use dirprobe_main::cli_parser;
use dirprobe_main::logging::initialise_from_verbosity;
use dirprobe_main::reporter::{ResultReporter, EXIT_CONFIG_ERROR, EXIT_UNKNOWN_FAILURE};
use dirprobe_main::runtime;
use dirprobe_main::secret::obtain_secret;
use tracing::error;

fn main() {
    let arguments = cli_parser::parse_arguments();
    let verbosity_level = arguments.get_count(cli_parser::FLAG_VERBOSE);
    initialise_from_verbosity(verbosity_level);

    let config = match build_config(&arguments) {
        Err(e) => {
            error!(%e, "invalid configuration");
            std::process::exit(EXIT_CONFIG_ERROR);
        }
        Ok(v) => v,
    };

    let principal = arguments
        .get_one::<String>(cli_parser::FLAG_USER)
        .cloned()
        .unwrap_or_default();
    let secret = match obtain_secret() {
        Err(e) => {
            error!(%e, "failed to read the password");
            std::process::exit(EXIT_CONFIG_ERROR);
        }
        Ok(v) => v,
    };
    let credentials = Credentials::new(principal.clone(), secret);

    let bind_dn_format = arguments
        .get_one::<String>(cli_parser::FLAG_BIND_DN_FORMAT)
        .map(String::as_str)
        .unwrap_or(VERBATIM_BIND_DN)
        .to_owned();

    let outcome = match runtime::run(&config, &credentials, &bind_dn_format) {
        Err(_) => std::process::exit(EXIT_UNKNOWN_FAILURE),
        Ok(v) => v,
    };

    let reporter = ResultReporter::new(arguments.get_flag(cli_parser::FLAG_JSON));
    let code = reporter.report(&outcome, &config, &principal);
    std::process::exit(code);
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0} is not a number")]
    NotANumber(&'static str),

    #[error(transparent)]
    Config(#[from] dirprobe_business::data::config::ConfigError),
}

fn build_config(arguments: &ArgMatches) -> Result<ConnectionConfig, CliError> {
    let host = arguments
        .get_one::<String>(cli_parser::FLAG_HOST)
        .cloned()
        .unwrap_or_default();
    let port: i64 = arguments
        .get_one::<String>(cli_parser::FLAG_PORT)
        .map(String::as_str)
        .unwrap_or(cli_parser::FLAG_PORT_DEFAULT)
        .parse()
        .map_err(|_| CliError::NotANumber("port"))?;
    let base_dn = arguments
        .get_one::<String>(cli_parser::FLAG_BASEDN)
        .cloned()
        .unwrap_or_default();
    let timeout: i64 = arguments
        .get_one::<String>(cli_parser::FLAG_TIMEOUT)
        .map(String::as_str)
        .unwrap_or(cli_parser::FLAG_TIMEOUT_DEFAULT)
        .parse()
        .map_err(|_| CliError::NotANumber("timeout"))?;

    let tls = if arguments.get_flag(cli_parser::FLAG_LDAPS) {
        TlsMode::Ldaps
    } else if arguments.get_flag(cli_parser::FLAG_STARTTLS) {
        TlsMode::StartTls
    } else {
        TlsMode::Plain
    };
    let cert_policy = if arguments.get_flag(cli_parser::FLAG_INSECURE_SKIP_VERIFY) {
        CertPolicy::Never
    } else {
        CertPolicy::Require
    };

    Ok(ConnectionConfig::new(
        &host,
        port,
        &base_dn,
        timeout,
        tls,
        cert_policy,
    )?)
}
