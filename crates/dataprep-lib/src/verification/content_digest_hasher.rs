use crate::error::DataPrepError;
use digest::Digest;
use sha2::Sha256;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Files are hashed in chunks of this size, regardless of their length.
pub const CHUNK_SIZE: usize = 1024 * 1024;

/// Streams `path` through a hasher `D` and returns the lowercase hex digest.
pub fn hex_digest_of_file<D: Digest>(path: &Path) -> Result<String, DataPrepError> {
    let digest_error = |e: std::io::Error| DataPrepError::Digest {
        path: path.to_path_buf(),
        reason: e.to_string(),
    };

    let mut file = File::open(path).map_err(digest_error)?;
    let mut hasher = D::new();
    let mut buffer = vec![0u8; CHUNK_SIZE];

    loop {
        let bytes_read = file.read(&mut buffer).map_err(digest_error)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(hex::encode(hasher.finalize()))
}

pub fn sha256_of_file(path: &Path) -> Result<String, DataPrepError> {
    hex_digest_of_file::<Sha256>(path)
}
