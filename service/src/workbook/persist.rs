use catalogue_core::error::{CatalogueError, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::Builder;
use tracing::debug;

/// Write `bytes` to `path` through a temporary file in the same directory.
///
/// Missing parent directories are created. An existing file at `path` is
/// replaced; on failure it is left untouched and the temporary file is removed.
/// The file gets the same mode as one written with [`fs::write`], not the
/// owner-only mode of a fresh temporary file.
pub(super) fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if path.file_name().is_none() {
        return Err(CatalogueError::write(
            path,
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no file name"),
        ));
    }

    let parent_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    if !parent_dir.exists() {
        debug!("Creating output directory {}", parent_dir.display());
    }
    fs::create_dir_all(parent_dir).map_err(|e| CatalogueError::directory(parent_dir, e))?;

    let mut temp_file = temp_builder()
        .tempfile_in(parent_dir)
        .map_err(|e| CatalogueError::write(path, e))?;
    temp_file
        .write_all(bytes)
        .and_then(|()| temp_file.as_file().sync_all())
        .map_err(|e| CatalogueError::write(path, e))?;

    temp_file
        .persist(path)
        .map_err(|e| CatalogueError::write(path, e.error))?;

    Ok(())
}

/// 0o666 before umask, as for a plain file create.
fn temp_builder<'a, 'b>() -> Builder<'a, 'b> {
    #[allow(unused_mut)]
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("out.bin");
        write_atomic(&path, b"first").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"first");
    }

    #[test]
    fn replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.bin");
        write_atomic(&path, b"first version").unwrap();
        write_atomic(&path, b"second").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"second");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn parent_that_is_a_file_is_an_export_failure() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"not a directory").unwrap();

        let err = write_atomic(&blocker.join("out.bin"), b"data").unwrap_err();
        assert!(err.is_export_failure());
        assert!(matches!(err, CatalogueError::DirectoryCreation { .. }));
    }

    #[test]
    fn destination_directory_is_left_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("taken");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep.txt"), b"keep").unwrap();

        let err = write_atomic(&target, b"data").unwrap_err();
        assert!(matches!(err, CatalogueError::Write { .. }));
        assert_eq!(fs::read(target.join("keep.txt")).unwrap(), b"keep");
        // only the directory remains, no stray temporary file
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn mode_matches_a_plainly_written_file() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let reference = dir.path().join("reference.bin");
        fs::write(&reference, b"data").unwrap();
        let path = dir.path().join("out.bin");
        write_atomic(&path, b"data").unwrap();

        let mode = |p: &Path| fs::metadata(p).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode(&path), mode(&reference));
    }
}
