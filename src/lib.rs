pub mod logger;
pub mod config;
pub mod client;
pub mod session;
pub mod services;
pub mod shell;
mod utils;

pub use client::{connect, AuthParams, ClientError, FileInfo, NfsClient, ServerAddr};
pub use config::{Config, ConfigError};
pub use session::Session;
pub use shell::{Shell, ShellError};
