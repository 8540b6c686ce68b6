//! Input acquisition: read the byte buffer to dump.
//!
//! The formatter itself never touches the filesystem; this is the one
//! module that does. A path of `-` selects standard input.

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::error::RxdError;
use crate::Result;

/// Path spelling that selects standard input.
pub const STDIN_PATH: &str = "-";

/// Read the full contents of `path`, or of standard input when the path
/// is [`STDIN_PATH`].
///
/// The buffer is raw octets; it is never decoded as text.
pub fn read_source(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();

    if path == Path::new(STDIN_PATH) {
        let mut data = Vec::new();
        std::io::stdin()
            .lock()
            .read_to_end(&mut data)
            .map_err(|source| RxdError::SourceRead {
                path: path.to_path_buf(),
                source,
            })?;
        return Ok(data);
    }

    fs::read(path).map_err(|source| RxdError::SourceRead {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_source_returns_raw_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blob.bin");
        let content = [0x00, 0xff, 0x0a, 0x41, 0x80];
        fs::write(&path, content).unwrap();

        let data = read_source(&path).unwrap();
        assert_eq!(data, content);
    }

    #[test]
    fn test_read_source_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.bin");

        let err = read_source(&path).unwrap_err();
        assert!(matches!(err, RxdError::SourceRead { .. }));
        assert!(err.to_string().contains("nope.bin"));
    }
}
