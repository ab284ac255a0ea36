//! Startup configuration from the command line.
//!
//! Flags take a single dash (`-server host`), and `--server` works too.

use getopts::{Matches, Options};
use thiserror::Error;

use crate::client::{AuthParams, ClientError, ServerAddr};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0}")]
    Options(#[from] getopts::Fail),

    #[error("-server is required")]
    MissingServer,

    #[error("invalid value \"{value}\" for flag -{flag}")]
    InvalidNumber { flag: &'static str, value: String },

    #[error(transparent)]
    InvalidServer(#[from] ClientError),

    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),

    /// `-help` was given; not a failure, the caller prints usage and stops.
    #[error("help requested")]
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Local port for the NFS connection, 0 = any.
    pub port: u16,
    pub server: ServerAddr,
    pub auth: AuthParams,
    pub verbose: bool,
}

fn options() -> Options {
    let mut opts = Options::new();
    opts.long_only(true);
    opts.optopt("", "port", "Local port to use for NFS connection (default 0 = any)", "PORT");
    opts.optopt("", "server", "NFS server to connect to, host[:port]", "ADDR");
    opts.optopt("", "uid", "UID to use for operations (default: your uid)", "UID");
    opts.optopt("", "gid", "GID to use for operations (default: your gid)", "GID");
    opts.optopt("", "machine", "Machine name to use for operations (default: host name)", "NAME");
    opts.optflag("", "verbose", "Log diagnostics to stderr");
    opts.optflag("", "help", "Print this help");
    opts
}

/// Usage text for `program`, listing every flag.
pub fn usage(program: &str) -> String {
    options().usage(&format!("Usage of {program}:"))
}

impl Config {
    /// Parse flags, without the program name.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, ConfigError> {
        let args: Vec<&str> = args.iter().map(|a| a.as_ref()).collect();
        let matches = options().parse(&args)?;

        if matches.opt_present("help") {
            return Err(ConfigError::Help);
        }
        if let Some(extra) = matches.free.first() {
            return Err(ConfigError::UnexpectedArgument(extra.clone()));
        }

        let server = match matches.opt_str("server") {
            Some(s) if !s.is_empty() => s.parse::<ServerAddr>()?,
            _ => return Err(ConfigError::MissingServer),
        };

        let port = number(&matches, "port")?.unwrap_or(0);
        let uid = number(&matches, "uid")?.unwrap_or_else(current_uid);
        let gid = number(&matches, "gid")?.unwrap_or_else(current_gid);
        let machine_name = matches.opt_str("machine").unwrap_or_else(host_name);

        Ok(Self {
            port,
            server,
            auth: AuthParams { uid, gid, machine_name },
            verbose: matches.opt_present("verbose"),
        })
    }
}

fn number<T: std::str::FromStr>(matches: &Matches, flag: &'static str) -> Result<Option<T>, ConfigError> {
    match matches.opt_str(flag) {
        None => Ok(None),
        Some(value) => match value.parse::<T>() {
            Ok(n) => Ok(Some(n)),
            Err(_) => Err(ConfigError::InvalidNumber { flag, value }),
        },
    }
}

fn current_uid() -> u32 {
    unsafe { libc::getuid() }
}

fn current_gid() -> u32 {
    unsafe { libc::getgid() }
}

// empty when the host name cannot be read
fn host_name() -> String {
    hostname::get()
        .map(|h| h.to_string_lossy().into_owned())
        .unwrap_or_default()
}
