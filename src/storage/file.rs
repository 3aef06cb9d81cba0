//! Text file backend.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use super::backend::{BackendError, StorageBackend};

/// Stores the record lines in a single text file.
///
/// Writes go to a uniquely named temporary file next to the target, which is
/// then renamed over it, so readers never observe a half-written file and a
/// failed write leaves the previous content intact.
///
/// # Example
///
/// ```no_run
/// use staff_payroll::storage::{FileBackend, StorageBackend};
///
/// let backend = FileBackend::new("stafflist.txt");
/// let lines = backend.read_all_lines()?;
/// # Ok::<(), staff_payroll::storage::BackendError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Creates a backend for the file at `path`. Nothing is touched on disk yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn access_error(&self, err: io::Error) -> BackendError {
        BackendError::Access {
            resource: self.describe(),
            message: err.to_string(),
        }
    }

    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "records".to_string());
        let tmp_name = format!(".{}-{}.tmp", file_name, Uuid::new_v4());
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.join(tmp_name),
            _ => PathBuf::from(tmp_name),
        }
    }

    /// Writes `content` to `tmp_path`, then renames it over the target.
    /// The temp file is removed if either step fails.
    fn replace_via(&self, tmp_path: &Path, content: &str) -> Result<(), BackendError> {
        let result = fs::write(tmp_path, content).and_then(|()| fs::rename(tmp_path, &self.path));
        if let Err(err) = result {
            let _ = fs::remove_file(tmp_path);
            return Err(self.access_error(err));
        }
        Ok(())
    }
}

impl StorageBackend for FileBackend {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read_all_lines(&self) -> Result<Vec<String>, BackendError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(content.lines().map(str::to_string).collect()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Err(BackendError::NotFound {
                resource: self.describe(),
            }),
            Err(err) => Err(self.access_error(err)),
        }
    }

    fn write_all_lines(&self, lines: &[String]) -> Result<(), BackendError> {
        let mut content = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
        for line in lines {
            content.push_str(line);
            content.push('\n');
        }

        self.replace_via(&self.temp_path(), &content)
    }

    fn create(&self) -> Result<(), BackendError> {
        fs::File::create(&self.path)
            .map(drop)
            .map_err(|e| self.access_error(e))
    }
}
