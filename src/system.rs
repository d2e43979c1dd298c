use std::path::Path;

pub trait FsOps {
    fn exists(&self, path: &Path) -> bool;

    /// # Errors
    /// Returns an error if the file is missing or unreadable.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;
}

pub struct DefaultFsOps;
impl FsOps for DefaultFsOps {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }
}
