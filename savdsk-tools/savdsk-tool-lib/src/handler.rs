use crate::error::{Operation, ToolError};
use savdsk::ImageHandler;
use std::cell::RefCell;
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// An image file. Output handlers write to a hidden sibling file which only replaces
/// the destination once `commit` is called. An uncommitted output is deleted on drop,
/// including while unwinding.
pub struct Handler {
    file: RefCell<File>,
    path: PathBuf,
    partial: Option<PathBuf>,
}

impl Handler {
    /// Opens an existing image for reading.
    pub fn open(path: &Path) -> Result<Self, ToolError> {
        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) => return Err(ToolError::new(Operation::Open, path, &e.to_string())),
        };

        return Ok(Self {
            file: RefCell::new(file),
            path: path.to_path_buf(),
            partial: None,
        });
    }

    /// This will create an empty image that becomes `path` on commit.
    pub fn create(path: &Path) -> Result<Self, ToolError> {
        let partial = partial_path(path);

        let file = match OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(&partial)
        {
            Ok(f) => f,
            Err(e) => return Err(ToolError::new(Operation::Create, path, &e.to_string())),
        };

        debug!("writing {} via {}", path.display(), partial.display());

        return Ok(Self {
            file: RefCell::new(file),
            path: path.to_path_buf(),
            partial: Some(partial),
        });
    }

    pub fn path(&self) -> &Path {
        return &self.path;
    }

    /// Flush the written image and move it onto the destination path.
    /// If the rename fails the partial file is removed when the handler drops.
    pub fn commit(mut self) -> Result<(), ToolError> {
        let partial = match &self.partial {
            Some(p) => p.clone(),
            None => return Ok(()),
        };

        match self.file.get_mut().sync_all() {
            Ok(_) => (),
            Err(e) => return Err(ToolError::new(Operation::Write, &self.path, &e.to_string())),
        }

        match fs::rename(&partial, &self.path) {
            Ok(_) => (),
            Err(e) => return Err(ToolError::new(Operation::Commit, &self.path, &e.to_string())),
        }

        self.partial = None;

        return Ok(());
    }

    /// Throw away anything written. The destination path is left untouched.
    pub fn discard(self) {
        drop(self);
    }
}

impl Drop for Handler {
    fn drop(&mut self) {
        if let Some(partial) = self.partial.take() {
            if let Err(e) = fs::remove_file(&partial) {
                warn!("could not remove {}: {}", partial.display(), e);
            }
        }
    }
}

impl ImageHandler<ToolError> for Handler {
    fn read_bytes(&self, location: u64, amount: u64) -> Result<Vec<u8>, ToolError> {
        let mut file = self.file.borrow_mut();

        match file.seek(SeekFrom::Start(location)) {
            Ok(_) => (),
            Err(e) => {
                return Err(ToolError::new(
                    Operation::Read,
                    &self.path,
                    &format!("Failed to seek to location: {}. Error: {}", location, e),
                ))
            }
        }

        let mut result = Vec::with_capacity(amount as usize);
        match (&mut *file).take(amount).read_to_end(&mut result) {
            Ok(_) => (),
            Err(e) => return Err(ToolError::new(Operation::Read, &self.path, &e.to_string())),
        }

        return Ok(result);
    }

    fn write_bytes(&mut self, bytes: &[u8], location: u64) -> Result<(), ToolError> {
        let file = self.file.get_mut();

        match file.seek(SeekFrom::Start(location)) {
            Ok(_) => (),
            Err(e) => {
                return Err(ToolError::new(
                    Operation::Write,
                    &self.path,
                    &format!("Failed to seek to location: {}. Error: {}", location, e),
                ))
            }
        }

        match file.write_all(bytes) {
            Ok(_) => (),
            Err(e) => return Err(ToolError::new(Operation::Write, &self.path, &e.to_string())),
        }

        return Ok(());
    }

    fn image_size(&self) -> Result<u64, ToolError> {
        let b = self.file.borrow();
        let metadata = match b.metadata() {
            Ok(m) => m,
            Err(e) => {
                return Err(ToolError::new(
                    Operation::Read,
                    &self.path,
                    &format!("Could not determine file size. Error: {}", e),
                ))
            }
        };

        return Ok(metadata.len());
    }
}

/// `dir/name.ext` -> `dir/.name.ext.partial`
fn partial_path(path: &Path) -> PathBuf {
    let name = match path.file_name() {
        Some(n) => n.to_string_lossy().to_string(),
        None => String::from("image"),
    };

    return path.with_file_name(format!(".{}.partial", name));
}
