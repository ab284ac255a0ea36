use libnfs::{NfsClient as Mount, NfsVersion};
use tokio::runtime::{Builder, Runtime};

use super::{AuthParams, ClientError, ClientResult, FileInfo, NfsClient, ServerAddr};
use crate::logger;

// NFSv4 exposes a single pseudo-root; every path is relative to it
const EXPORT: &str = "/";

const S_IFMT: u64 = 0o170000;
const S_IFDIR: u64 = 0o040000;

/// A mounted export, driven from a current-thread runtime so every call
/// still blocks the shell loop and nothing runs in the background.
pub struct LibnfsClient {
    rt: Runtime,
    mount: Option<Mount>,
}

impl LibnfsClient {
    pub fn connect(local_port: u16, server: &ServerAddr, auth: &AuthParams) -> ClientResult<Self> {
        let rt = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ClientError::Nfs(format!("cannot start runtime: {e}")))?;

        for msg in ignored_settings(local_port, server, auth) {
            logger::log(&format!("[NFS] {msg}"));
        }

        logger::log(&format!("[NFS] mounting {}:{EXPORT}", server.host));
        let mount = rt
            .block_on(Mount::mount(&server.host, EXPORT, NfsVersion::V4))
            .map_err(|e| ClientError::Nfs(e.to_string()))?;

        Ok(Self { rt, mount: Some(mount) })
    }

    fn mount(&self) -> ClientResult<&Mount> {
        self.mount
            .as_ref()
            .ok_or_else(|| ClientError::Nfs(String::from("connection closed")))
    }
}

impl NfsClient for LibnfsClient {
    fn file_info(&self, path: &str) -> ClientResult<FileInfo> {
        let mount = self.mount()?;
        let st = self
            .rt
            .block_on(mount.stat(path))
            .map_err(|e| ClientError::Nfs(e.to_string()))?;
        Ok(FileInfo { is_dir: (st.mode as u64 & S_IFMT) == S_IFDIR })
    }

    fn list_directory(&self, path: &str) -> ClientResult<Vec<String>> {
        let mount = self.mount()?;
        let entries = self
            .rt
            .block_on(mount.readdir(path))
            .map_err(|e| ClientError::Nfs(e.to_string()))?;

        Ok(entries
            .into_iter()
            .map(|name| name.to_string())
            .filter(|name| name != "." && name != "..")
            .collect())
    }

    fn close(&mut self) {
        if let Some(mount) = self.mount.take() {
            // the mount may hold runtime resources, drop it inside the runtime
            let _guard = self.rt.enter();
            drop(mount);
            logger::log("[NFS] connection closed");
        }
    }
}

// settings libnfs cannot apply; reported rather than dropped silently
fn ignored_settings(local_port: u16, server: &ServerAddr, auth: &AuthParams) -> Vec<String> {
    let mut ignored = Vec::new();
    if local_port != 0 {
        ignored.push(format!("local port {local_port} ignored: libnfs binds its own source port"));
    }
    if let Some(port) = server.port {
        ignored.push(format!("server port {port} ignored: libnfs uses the standard NFS port"));
    }
    ignored.push(format!(
        "uid {} gid {} machine '{}' not forwarded: libnfs presents its default AUTH_SYS credentials",
        auth.uid, auth.gid, auth.machine_name
    ));
    ignored
}
