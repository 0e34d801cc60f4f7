//! Filesystem access used to flag available ROMs.

use std::io;
use std::path::Path;

pub trait FileSystem {
    /// File names (not paths) in `dir` whose extension equals `extension`,
    /// compared case-insensitively. Sorted.
    fn list_dir(&self, dir: &Path, extension: &str) -> io::Result<Vec<String>>;

    fn exists(&self, path: &Path) -> bool;

    fn file_size(&self, path: &Path) -> io::Result<u64>;
}

/// [`FileSystem`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn list_dir(&self, dir: &Path, extension: &str) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let path = entry.path();
            let matches = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case(extension));
            if !matches {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(name) => log::debug!("Skipping non UTF-8 file name: {:?}", name),
            }
        }
        names.sort();
        Ok(names)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn file_size(&self, path: &Path) -> io::Result<u64> {
        Ok(std::fs::metadata(path)?.len())
    }
}

#[cfg(test)]
#[path = "tests/fs_tests.rs"]
mod tests;
