//! An export kept in memory.
//!
//! Useful to drive the shell without a server. Directory listings keep
//! insertion order, the way a server returns its own order.
//!
//! ```rust
//! use nfshell::client::memory::MemoryClient;
//! use nfshell::NfsClient;
//!
//! let export = MemoryClient::new().with_dir("/etc").with_file("/etc/exports");
//! assert!(export.file_info("/etc").unwrap().is_dir);
//! assert_eq!(export.list_directory("/etc").unwrap(), vec!["exports"]);
//! ```

use std::cell::Cell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use super::{ClientError, ClientResult, FileInfo, NfsClient};
use crate::utils::join_path;

#[derive(Debug)]
enum Node {
    Dir(Vec<String>),
    File,
}

#[derive(Debug)]
pub struct MemoryClient {
    nodes: BTreeMap<String, Node>,
    failures: HashMap<String, String>,
    closed: Rc<Cell<usize>>,
}

impl Default for MemoryClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryClient {
    /// An export holding only the root directory.
    pub fn new() -> Self {
        let mut nodes = BTreeMap::new();
        nodes.insert(String::from("/"), Node::Dir(Vec::new()));
        Self {
            nodes,
            failures: HashMap::new(),
            closed: Rc::new(Cell::new(0)),
        }
    }

    /// Add a directory. Missing parents are created.
    pub fn with_dir(mut self, path: &str) -> Self {
        self.insert(path, Node::Dir(Vec::new()));
        self
    }

    /// Add a regular file. Missing parents are created.
    pub fn with_file(mut self, path: &str) -> Self {
        self.insert(path, Node::File);
        self
    }

    /// Make every request on `path` fail with `msg`, as a transport error would.
    pub fn with_failure(mut self, path: &str, msg: &str) -> Self {
        self.failures.insert(join_path("/", path), String::from(msg));
        self
    }

    /// Counter bumped by every [`NfsClient::close`] call, shared with the caller.
    pub fn close_count(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.closed)
    }

    fn insert(&mut self, path: &str, node: Node) {
        let path = join_path("/", path);
        if self.nodes.contains_key(&path) {
            return;
        }

        let idx = path.rfind('/').unwrap_or(0);
        let parent = if idx == 0 { String::from("/") } else { String::from(&path[..idx]) };
        let name = String::from(&path[idx + 1..]);

        self.insert(&parent, Node::Dir(Vec::new()));
        if let Some(Node::Dir(entries)) = self.nodes.get_mut(&parent) {
            entries.push(name);
        }
        self.nodes.insert(path, node);
    }

    fn check(&self, path: &str) -> ClientResult<&Node> {
        if let Some(msg) = self.failures.get(path) {
            return Err(ClientError::Nfs(msg.clone()));
        }
        self.nodes
            .get(path)
            .ok_or_else(|| ClientError::NotFound(String::from(path)))
    }
}

impl NfsClient for MemoryClient {
    fn file_info(&self, path: &str) -> ClientResult<FileInfo> {
        let node = self.check(path)?;
        Ok(FileInfo { is_dir: matches!(node, Node::Dir(_)) })
    }

    fn list_directory(&self, path: &str) -> ClientResult<Vec<String>> {
        match self.check(path)? {
            Node::Dir(entries) => Ok(entries.clone()),
            Node::File => Err(ClientError::NotADirectory(String::from(path))),
        }
    }

    fn close(&mut self) {
        self.closed.set(self.closed.get() + 1);
    }
}
