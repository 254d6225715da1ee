use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::error::DomainError;

/// Declarative project skeleton ready for materialization.
///
/// A flat, ordered list of directories and `(path, content)` file pairs
/// rooted at `root`. It contains no I/O, only data.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    pub(crate) root: PathBuf,
    pub(crate) entries: Vec<LayoutEntry>,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: Vec::new(),
        }
    }

    pub fn add_directory(&mut self, path: impl Into<PathBuf>) {
        self.entries.push(LayoutEntry::Directory(DirectoryToCreate {
            path: path.into(),
        }));
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.push_file(path, content, WriteMode::Overwrite);
    }

    /// Add a file that is only written when nothing exists at its path yet.
    pub fn add_seed_file(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.push_file(path, content, WriteMode::CreateIfMissing);
    }

    fn push_file(&mut self, path: impl Into<PathBuf>, content: impl Into<String>, mode: WriteMode) {
        self.entries.push(LayoutEntry::File(FileToWrite {
            path: path.into(),
            content: content.into(),
            mode,
        }));
    }

    pub fn with_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.add_directory(path);
        self
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.add_file(path, content);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entries(&self) -> &[LayoutEntry] {
        &self.entries
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.entries.is_empty() {
            return Err(DomainError::InvalidLayout("Project layout is empty".into()));
        }

        let mut seen = HashSet::new();
        for entry in &self.entries {
            let path = entry.path();

            if path.is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed {
                    path: path.display().to_string(),
                });
            }

            if !seen.insert(path) {
                return Err(DomainError::DuplicatePath {
                    path: path.display().to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn files(&self) -> impl Iterator<Item = &FileToWrite> {
        self.entries.iter().filter_map(|e| match e {
            LayoutEntry::File(f) => Some(f),
            _ => None,
        })
    }

    pub fn directories(&self) -> impl Iterator<Item = &DirectoryToCreate> {
        self.entries.iter().filter_map(|e| match e {
            LayoutEntry::Directory(d) => Some(d),
            _ => None,
        })
    }

    /// Look up a file entry by its relative path.
    pub fn file(&self, path: impl AsRef<Path>) -> Option<&FileToWrite> {
        let path = path.as_ref();
        self.files().find(|f| f.path == path)
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Debug, Clone)]
pub enum LayoutEntry {
    File(FileToWrite),
    Directory(DirectoryToCreate),
}

impl LayoutEntry {
    pub fn path(&self) -> &Path {
        match self {
            Self::File(f) => &f.path,
            Self::Directory(d) => &d.path,
        }
    }
}

/// How a file entry treats existing content at its path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Truncate and write on every run.
    #[default]
    Overwrite,
    /// Write only if the path does not exist yet.
    CreateIfMissing,
}

#[derive(Debug, Clone)]
pub struct FileToWrite {
    pub path: PathBuf,
    pub content: String,
    pub mode: WriteMode,
}

impl FileToWrite {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}

#[derive(Debug, Clone)]
pub struct DirectoryToCreate {
    pub path: PathBuf,
}
