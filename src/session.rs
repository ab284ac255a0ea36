use crate::client::NfsClient;
use crate::{logger, utils};

/// The working directory and the connection it lives on.
///
/// The connection is closed when the session is dropped, so it is released
/// exactly once whichever way the shell ends.
pub struct Session {
    wd: String,
    client: Box<dyn NfsClient>,
}

impl Session {
    /// Start at the export root.
    pub fn new(client: Box<dyn NfsClient>) -> Self {
        Self {
            wd: String::from("/"),
            client,
        }
    }

    pub fn wd(&self) -> &str {
        &self.wd
    }

    pub fn client(&self) -> &dyn NfsClient {
        self.client.as_ref()
    }

    /// Absolute, normalized form of `path` seen from the working directory.
    pub fn resolve(&self, path: &str) -> String {
        utils::join_path(&self.wd, path)
    }

    /// Move to `path`. The caller has checked it is a directory.
    pub fn commit(&mut self, path: String) {
        logger::log(&format!("[SESSION] wd {} -> {}", self.wd, path));
        self.wd = path;
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        logger::log("[SESSION] closing connection");
        self.client.close();
    }
}
