use crate::entry::WalkEntry;
use crate::error::{WalkError, WalkErrorKind};
use logging::trace_flist;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;

/// Depth-first iterator over filesystem entries.
///
/// Directory contents are sorted by name and fully yielded before the walker
/// moves to the next sibling. The first error ends the traversal.
pub struct Walker {
    pub(crate) root: PathBuf,
    pub(crate) yielded_root: bool,
    pub(crate) root_metadata: Option<fs::Metadata>,
    pub(crate) root_child_count: Option<usize>,
    pub(crate) stack: Vec<DirectoryState>,
    pub(crate) finished: bool,
}

impl Walker {
    pub(crate) fn new(root: PathBuf, include_root: bool) -> Result<Self, WalkError> {
        let root = absolutize(root)?;
        trace_flist!("building file list from {}", root.display());

        // The root is followed so a linked source directory is walked and filtered.
        let metadata = fs::metadata(&root)
            .map_err(|error| WalkError::new(WalkErrorKind::Root, root.clone(), error))?;

        let mut walker = Self {
            root,
            yielded_root: !include_root,
            root_metadata: None,
            root_child_count: None,
            stack: Vec::new(),
            finished: false,
        };

        if metadata.file_type().is_dir() {
            let count = walker.push_directory(walker.root.clone(), PathBuf::new(), 0)?;
            walker.root_child_count = Some(count);
        }
        walker.root_metadata = Some(metadata);

        Ok(walker)
    }

    fn push_directory(
        &mut self,
        fs_path: PathBuf,
        relative_prefix: PathBuf,
        depth: usize,
    ) -> Result<usize, WalkError> {
        let state = DirectoryState::new(fs_path, relative_prefix, depth)?;
        let count = state.entries.len();
        self.stack.push(state);
        Ok(count)
    }

    fn prepare_entry(
        &mut self,
        full_path: PathBuf,
        relative_path: PathBuf,
        depth: usize,
    ) -> Result<WalkEntry, WalkError> {
        let metadata = fs::symlink_metadata(&full_path)
            .map_err(|error| WalkError::new(WalkErrorKind::Entry, full_path.clone(), error))?;

        let child_count = if metadata.file_type().is_dir() {
            Some(self.push_directory(full_path.clone(), relative_path.clone(), depth)?)
        } else {
            None
        };

        Ok(WalkEntry {
            full_path,
            relative_path,
            metadata,
            depth,
            is_root: false,
            child_count,
        })
    }
}

impl Iterator for Walker {
    type Item = Result<WalkEntry, WalkError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        if !self.yielded_root {
            self.yielded_root = true;
            if let Some(metadata) = self.root_metadata.take() {
                let entry = WalkEntry {
                    full_path: self.root.clone(),
                    relative_path: PathBuf::new(),
                    metadata,
                    depth: 0,
                    is_root: true,
                    child_count: self.root_child_count,
                };
                return Some(Ok(entry));
            }
        }

        loop {
            let (full_path, relative_path, depth) = {
                let state = self.stack.last_mut()?;

                if let Some(name) = state.next_name() {
                    let full_path = state.fs_path.join(&name);
                    let relative_path = if state.relative_prefix.as_os_str().is_empty() {
                        PathBuf::from(&name)
                    } else {
                        state.relative_prefix.join(&name)
                    };
                    (full_path, relative_path, state.depth + 1)
                } else {
                    self.stack.pop();
                    continue;
                }
            };

            match self.prepare_entry(full_path, relative_path, depth) {
                Ok(entry) => return Some(Ok(entry)),
                Err(error) => {
                    self.finished = true;
                    return Some(Err(error));
                }
            }
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct DirectoryState {
    fs_path: PathBuf,
    relative_prefix: PathBuf,
    entries: Vec<OsString>,
    index: usize,
    depth: usize,
}

impl DirectoryState {
    fn new(fs_path: PathBuf, relative_prefix: PathBuf, depth: usize) -> Result<Self, WalkError> {
        let mut entries = Vec::new();
        let list_error =
            |error| WalkError::new(WalkErrorKind::ListDirectory, fs_path.clone(), error);
        for entry in fs::read_dir(&fs_path).map_err(list_error)? {
            let entry = entry.map_err(list_error)?;
            entries.push(entry.file_name());
        }
        entries.sort();

        trace_flist!("found {} entries in {}", entries.len(), fs_path.display());

        Ok(Self {
            fs_path,
            relative_prefix,
            entries,
            index: 0,
            depth,
        })
    }

    fn next_name(&mut self) -> Option<OsString> {
        let name = self.entries.get(self.index)?.clone();
        self.index += 1;
        Some(name)
    }
}

fn absolutize(path: PathBuf) -> Result<PathBuf, WalkError> {
    if path.is_absolute() {
        Ok(path)
    } else {
        let cwd = env::current_dir()
            .map_err(|error| WalkError::new(WalkErrorKind::ResolveRelative, path.clone(), error))?;
        Ok(cwd.join(path))
    }
}
