//! Filesystem primitives used while materializing projects.

use crate::error::Result;
use log::debug;
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Recursively copies `src` into `dst`, creating `dst` if needed.
///
/// Regular files are copied with their permission bits; symlinks and other
/// special files are skipped.
pub fn copy_dir<P: AsRef<Path>, Q: AsRef<Path>>(src: P, dst: Q) -> Result<()> {
    let src = src.as_ref();
    let dst = dst.as_ref();
    debug!("Copying {} to {}", src.display(), dst.display());

    for entry in WalkDir::new(src) {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(io::Error::other)?;
        let target = dst.join(relative);

        let file_type = entry.file_type();
        if file_type.is_dir() {
            fs::create_dir_all(&target)?;
        } else if file_type.is_file() {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

/// Removes `dir` and everything below it. A missing directory is not an error.
pub fn remove_dir_if_exists<P: AsRef<Path>>(dir: P) -> Result<()> {
    let dir = dir.as_ref();
    match fs::remove_dir_all(dir) {
        Ok(()) => {
            debug!("Removed {}", dir.display());
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// Renames a file or directory, keeping its contents and permissions.
pub fn rename_path<P: AsRef<Path>, Q: AsRef<Path>>(from: P, to: Q) -> Result<()> {
    let (from, to) = (from.as_ref(), to.as_ref());
    debug!("Renaming {} to {}", from.display(), to.display());
    fs::rename(from, to)?;
    Ok(())
}
