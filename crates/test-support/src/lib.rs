#![deny(unsafe_code)]

//! Scratch directories and file-tree builders shared by the escp test suites.
//!
//! ```
//! use test_support::{FileTree, TestDir};
//!
//! let dir = TestDir::new().unwrap();
//! let mut tree = FileTree::new();
//! tree.text_file("src/main.rs", "fn main() {}").dir("emptydir");
//! tree.create_in(&dir).unwrap();
//!
//! assert!(dir.exists("src/main.rs"));
//! assert!(dir.path().join("emptydir").is_dir());
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Temporary directory removed when dropped.
#[derive(Debug)]
pub struct TestDir {
    inner: TempDir,
}

impl TestDir {
    /// Creates a fresh, empty directory under the system temp location.
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            inner: tempfile::Builder::new().prefix("escp-test-").tempdir()?,
        })
    }

    /// Root of the directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.inner.path()
    }

    /// Joins `relative` onto the root.
    #[must_use]
    pub fn join(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.path().join(relative)
    }

    /// Creates `relative` (and any missing parents) as a directory.
    pub fn mkdir(&self, relative: impl AsRef<Path>) -> io::Result<PathBuf> {
        let path = self.join(relative);
        fs::create_dir_all(&path)?;
        Ok(path)
    }

    /// Writes `contents` to `relative`, creating parent directories.
    pub fn write_file(&self, relative: impl AsRef<Path>, contents: &[u8]) -> io::Result<PathBuf> {
        let path = self.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, contents)?;
        Ok(path)
    }

    /// Reads the file at `relative`.
    pub fn read_file(&self, relative: impl AsRef<Path>) -> io::Result<Vec<u8>> {
        fs::read(self.join(relative))
    }

    /// Reports whether `relative` exists (symlinks are not followed).
    #[must_use]
    pub fn exists(&self, relative: impl AsRef<Path>) -> bool {
        fs::symlink_metadata(self.join(relative)).is_ok()
    }

    /// Lists every file and directory below the root as sorted `/`-joined
    /// relative paths.
    pub fn list_relative(&self) -> io::Result<Vec<String>> {
        let mut out = Vec::new();
        collect_relative(self.path(), "", &mut out)?;
        out.sort();
        Ok(out)
    }
}

fn collect_relative(dir: &Path, prefix: &str, out: &mut Vec<String>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        let relative = if prefix.is_empty() {
            name
        } else {
            format!("{prefix}/{name}")
        };
        let is_dir = entry.file_type()?.is_dir();
        out.push(relative.clone());
        if is_dir {
            collect_relative(&entry.path(), &relative, out)?;
        }
    }
    Ok(())
}

#[derive(Clone, Debug)]
enum Node {
    File(Vec<u8>),
    Dir,
}

/// Declarative description of files and directories to create.
#[derive(Clone, Debug, Default)]
pub struct FileTree {
    nodes: Vec<(PathBuf, Node)>,
}

impl FileTree {
    /// Starts an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file with binary contents.
    pub fn file(&mut self, relative: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) -> &mut Self {
        self.nodes.push((relative.into(), Node::File(contents.into())));
        self
    }

    /// Adds a file with text contents.
    pub fn text_file(&mut self, relative: impl Into<PathBuf>, contents: &str) -> &mut Self {
        self.file(relative, contents.as_bytes())
    }

    /// Adds a directory, which stays empty unless files are added below it.
    pub fn dir(&mut self, relative: impl Into<PathBuf>) -> &mut Self {
        self.nodes.push((relative.into(), Node::Dir));
        self
    }

    /// Materialises the tree below `dir`.
    pub fn create_in(&self, dir: &TestDir) -> io::Result<()> {
        for (relative, node) in &self.nodes {
            match node {
                Node::File(contents) => {
                    dir.write_file(relative, contents)?;
                }
                Node::Dir => {
                    dir.mkdir(relative)?;
                }
            }
        }
        Ok(())
    }
}
