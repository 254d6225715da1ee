//! Scaffold Service - materializes a declarative project layout.
//!
//! 1. Validate the layout
//! 2. Create the root and every directory (existing ones are fine)
//! 3. Write every file, creating parents as needed
//!
//! Any filesystem failure is fatal; there is no rollback.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{DomainValidator as validator, LayoutEntry, ProjectLayout, WriteMode},
    error::{StackseedError, StackseedResult},
};

/// What a scaffold pass did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScaffoldSummary {
    pub directories: usize,
    pub files_written: usize,
    /// Seed files left alone because they already existed.
    pub files_kept: usize,
}

pub struct ScaffoldService {
    filesystem: Arc<dyn Filesystem>,
}

impl ScaffoldService {
    pub fn new(filesystem: Arc<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    #[instrument(skip_all, fields(root = %layout.root().display()))]
    pub fn scaffold(&self, layout: &ProjectLayout) -> StackseedResult<ScaffoldSummary> {
        validator::validate_layout(layout).map_err(StackseedError::Domain)?;

        let root = layout.root();
        let mut summary = ScaffoldSummary::default();

        self.filesystem.create_dir_all(root)?;

        for entry in layout.entries() {
            match entry {
                LayoutEntry::Directory(dir) => {
                    self.filesystem.create_dir_all(&root.join(&dir.path))?;
                    summary.directories += 1;
                }
                LayoutEntry::File(file) => {
                    let path = root.join(&file.path);

                    if file.mode == WriteMode::CreateIfMissing && self.filesystem.exists(&path) {
                        debug!(path = %path.display(), "Keeping existing file");
                        summary.files_kept += 1;
                        continue;
                    }

                    if let Some(parent) = path.parent() {
                        self.filesystem.create_dir_all(parent)?;
                    }

                    self.filesystem.write_file(&path, &file.content)?;
                    debug!(path = %path.display(), bytes = file.size(), "Created file");
                    summary.files_written += 1;
                }
            }
        }

        info!(
            directories = summary.directories,
            files = summary.files_written,
            kept = summary.files_kept,
            "Layout materialized"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::*;
    use crate::application::{
        ApplicationError,
        ports::MockFilesystem,
        services::support::FakeFilesystem,
    };
    use crate::domain::DomainError;

    fn layout() -> ProjectLayout {
        let mut layout = ProjectLayout::new("site")
            .with_directory("client/src/pages")
            .with_file("client/src/pages/Home.tsx", "// Home page placeholder content")
            .with_file("performance-tests/load-test.jmx", "<xml/>");
        layout.add_seed_file("docker-compose.yml", "services:\n");
        layout
    }

    #[test]
    fn writes_every_entry() {
        let fs = FakeFilesystem::default();
        let service = ScaffoldService::new(Arc::new(fs.clone()));

        let summary = service.scaffold(&layout()).unwrap();

        assert_eq!(
            summary,
            ScaffoldSummary {
                directories: 1,
                files_written: 3,
                files_kept: 0
            }
        );
        assert_eq!(
            fs.file("site/client/src/pages/Home.tsx").as_deref(),
            Some("// Home page placeholder content")
        );
        // parent created even though the layout never lists it
        assert!(fs.is_dir("site/performance-tests"));
    }

    #[test]
    fn rerun_is_idempotent_and_keeps_seed_files() {
        let fs = FakeFilesystem::default();
        let service = ScaffoldService::new(Arc::new(fs.clone()));

        service.scaffold(&layout()).unwrap();
        fs.put("site/docker-compose.yml", "services:\n  postgres: {}\n");

        let summary = service.scaffold(&layout()).unwrap();

        assert_eq!(summary.files_kept, 1);
        assert_eq!(summary.files_written, 2);
        assert_eq!(
            fs.file("site/docker-compose.yml").as_deref(),
            Some("services:\n  postgres: {}\n")
        );
    }

    #[test]
    fn placeholders_are_rewritten_on_rerun() {
        let fs = FakeFilesystem::default();
        let service = ScaffoldService::new(Arc::new(fs.clone()));

        service.scaffold(&layout()).unwrap();
        fs.put("site/client/src/pages/Home.tsx", "edited");
        service.scaffold(&layout()).unwrap();

        assert_eq!(
            fs.file("site/client/src/pages/Home.tsx").as_deref(),
            Some("// Home page placeholder content")
        );
    }

    #[test]
    fn invalid_layout_touches_nothing() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();

        let service = ScaffoldService::new(Arc::new(fs));
        let err = service.scaffold(&ProjectLayout::new("site")).unwrap_err();

        assert!(matches!(
            err,
            StackseedError::Domain(DomainError::InvalidLayout(_))
        ));
    }

    #[test]
    fn write_failure_aborts() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_exists().returning(|_| false);
        fs.expect_write_file()
            .times(1)
            .returning(|path: &Path, _| {
                Err(ApplicationError::FilesystemError {
                    path: PathBuf::from(path),
                    reason: "disk full".into(),
                }
                .into())
            });

        let service = ScaffoldService::new(Arc::new(fs));
        let err = service.scaffold(&layout()).unwrap_err();

        assert!(err.to_string().contains("disk full"));
    }
}
