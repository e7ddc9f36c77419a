//! Writing the image payload to its destination path.

use std::path::Path;

use crate::error::GenError;

/// Write raw image bytes to `path`, creating missing parent directories.
///
/// The bytes are written exactly as received from the API; an existing file
/// at the path is overwritten without confirmation.
///
/// # Errors
///
/// Returns an error if a directory cannot be created or the write fails.
pub fn write_image(data: &[u8], path: &Path) -> Result<(), GenError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, data).map_err(GenError::Io)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_HEADER: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn creates_missing_directory_tree() {
        let dir = std::env::temp_dir().join("danqing_output_tree_test");
        let _ = std::fs::remove_dir_all(&dir);
        let path = dir.join("a/b/out.png");

        write_image(PNG_HEADER, &path).unwrap();

        assert!(path.exists());
        assert_eq!(std::fs::read(&path).unwrap(), PNG_HEADER);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn bytes_are_written_verbatim() {
        let dir = std::env::temp_dir().join("danqing_output_bytes_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("out.bin");
        let data: Vec<u8> = (0..=255).collect();

        write_image(&data, &path).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), data);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = std::env::temp_dir().join("danqing_output_overwrite_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("out.png");
        std::fs::write(&path, b"stale contents").unwrap();

        write_image(PNG_HEADER, &path).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), PNG_HEADER);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
