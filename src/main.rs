use std::io;
use std::process::ExitCode;

use nfshell::{
    config::{self, Config, ConfigError},
    connect,
    logger,
    Session,
    Shell,
};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("nfshell");

    let config = match Config::from_args(args.get(1..).unwrap_or_default()) {
        Ok(c) => c,
        Err(ConfigError::Help) => {
            print!("{}", config::usage(program));
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("{e}");
            eprint!("{}", config::usage(program));
            return ExitCode::FAILURE;
        }
    };
    logger::set_verbose(config.verbose);

    let client = match connect(config.port, &config.server, &config.auth) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Cannot connect to {}: {e}", config.server);
            return ExitCode::FAILURE;
        }
    };
    logger::log(&format!("[SHELL] connected to {}", config.server));

    // the session, and with it the connection, is dropped before we return
    let mut shell = Shell::new(Session::new(client));
    let res = shell.run(io::stdin().lock(), io::stdout().lock());
    drop(shell);

    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
