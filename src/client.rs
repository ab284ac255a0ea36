//! The NFS client the shell drives.
//!
//! The shell only ever sees [`NfsClient`]: look up a path, list a directory,
//! close. [`connect`] builds the real one from the startup configuration;
//! [`memory::MemoryClient`] serves an export held in memory.

pub mod memory;

#[cfg(feature = "libnfs")]
mod nfs4;

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ====== ERROR ======

#[derive(Debug, Error)]
pub enum ClientError {
    /// Message reported by the underlying NFS library, passed through as is.
    #[error("{0}")]
    Nfs(String),

    #[error("{0}: no such file or directory")]
    NotFound(String),

    #[error("{0}: not a directory")]
    NotADirectory(String),

    #[error("invalid server address '{0}'")]
    InvalidAddress(String),

    #[error("this build has no NFS transport; rebuild with `--features libnfs`")]
    Unsupported,
}

pub type ClientResult<T> = Result<T, ClientError>;

// ====== TYPES ======

/// What the shell needs to know about a path on the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileInfo {
    pub is_dir: bool,
}

/// AUTH_SYS credentials presented to the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthParams {
    pub uid: u32,
    pub gid: u32,
    pub machine_name: String,
}

/// `host`, `host:port` or `[v6-host]:port`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerAddr {
    pub host: String,
    pub port: Option<u16>,
}

impl FromStr for ServerAddr {
    type Err = ClientError;

    fn from_str(s: &str) -> ClientResult<Self> {
        let invalid = || ClientError::InvalidAddress(String::from(s));

        if let Some(rest) = s.strip_prefix('[') {
            let (host, tail) = rest.split_once(']').ok_or_else(invalid)?;
            if host.is_empty() {
                return Err(invalid());
            }
            let port = match tail {
                "" => None,
                t => Some(parse_port(t.strip_prefix(':').ok_or_else(invalid)?).ok_or_else(invalid)?),
            };
            return Ok(Self { host: String::from(host), port });
        }

        // more than one ':' is a bare v6 address without a port
        match s.split_once(':') {
            Some((host, port)) if !port.contains(':') => {
                if host.is_empty() {
                    return Err(invalid());
                }
                let port = parse_port(port).ok_or_else(invalid)?;
                Ok(Self { host: String::from(host), port: Some(port) })
            }
            _ if s.is_empty() => Err(invalid()),
            _ => Ok(Self { host: String::from(s), port: None }),
        }
    }
}

fn parse_port(s: &str) -> Option<u16> {
    s.parse::<u16>().ok().filter(|p| *p != 0)
}

impl fmt::Display for ServerAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let host = if self.host.contains(':') {
            format!("[{}]", self.host)
        } else {
            self.host.clone()
        };
        match self.port {
            Some(p) => write!(f, "{host}:{p}"),
            None => write!(f, "{host}"),
        }
    }
}

// ====== CONTRACT ======

/// A live connection to an NFS export.
///
/// Paths are absolute and normalized. Errors carry a message fit to show the
/// user as is.
pub trait NfsClient {
    fn file_info(&self, path: &str) -> ClientResult<FileInfo>;

    /// Names in `path`, in the order the server returned them.
    fn list_directory(&self, path: &str) -> ClientResult<Vec<String>>;

    /// Release the connection. Called once, when the owning session ends.
    fn close(&mut self);
}

/// Open a connection to `server` from local port `port` (0 = any).
#[cfg(feature = "libnfs")]
pub fn connect(port: u16, server: &ServerAddr, auth: &AuthParams) -> ClientResult<Box<dyn NfsClient>> {
    let client = nfs4::LibnfsClient::connect(port, server, auth)?;
    Ok(Box::new(client))
}

/// Open a connection to `server` from local port `port` (0 = any).
#[cfg(not(feature = "libnfs"))]
pub fn connect(_port: u16, server: &ServerAddr, _auth: &AuthParams) -> ClientResult<Box<dyn NfsClient>> {
    crate::logger::log(&format!("[NFS] cannot reach {server}: built without libnfs"));
    Err(ClientError::Unsupported)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(s: &str) -> ClientResult<ServerAddr> {
        s.parse()
    }

    #[test]
    fn parse_host_only() {
        let a = addr("nfs.example.com").unwrap();
        assert_eq!(a.host, "nfs.example.com");
        assert_eq!(a.port, None);
    }

    #[test]
    fn parse_host_and_port() {
        let a = addr("10.0.0.7:2049").unwrap();
        assert_eq!(a.host, "10.0.0.7");
        assert_eq!(a.port, Some(2049));
        assert_eq!(a.to_string(), "10.0.0.7:2049");
    }

    #[test]
    fn parse_v6() {
        let a = addr("[fe80::1]:2049").unwrap();
        assert_eq!(a.host, "fe80::1");
        assert_eq!(a.port, Some(2049));
        assert_eq!(a.to_string(), "[fe80::1]:2049");

        let bare = addr("fe80::1").unwrap();
        assert_eq!(bare.host, "fe80::1");
        assert_eq!(bare.port, None);

        assert_eq!(addr("[::1]").unwrap().port, None);
    }

    #[test]
    fn reject_bad_addresses() {
        for bad in ["", ":2049", "host:", "host:nfs", "host:70000", "host:0", "[::1", "[]:1", "[::1]2049"] {
            assert!(matches!(addr(bad), Err(ClientError::InvalidAddress(_))), "{bad}");
        }
    }

    #[test]
    fn error_messages_are_user_facing() {
        assert_eq!(ClientError::Nfs(String::from("NFS4ERR_ACCESS")).to_string(), "NFS4ERR_ACCESS");
        assert_eq!(ClientError::NotFound(String::from("/x")).to_string(), "/x: no such file or directory");
    }

    #[cfg(not(feature = "libnfs"))]
    #[test]
    fn connect_without_transport_fails() {
        let auth = AuthParams { uid: 0, gid: 0, machine_name: String::new() };
        let server = addr("localhost").unwrap();
        assert!(matches!(connect(0, &server, &auth), Err(ClientError::Unsupported)));
    }
}
