use crate::error::DataPrepError;
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

/// Decompresses a gzip file into `destination`, replacing any existing file.
///
/// All gzip members are decoded, so concatenated archives come out whole.
/// Returns the number of decompressed bytes written.
pub fn extract_gzip(source: &Path, destination: &Path) -> Result<u64, DataPrepError> {
    let extraction_error = |reason: String| DataPrepError::Extraction {
        source_path: source.to_path_buf(),
        destination: destination.to_path_buf(),
        reason,
    };

    let input = File::open(source).map_err(|e| extraction_error(e.to_string()))?;
    let mut decoder = MultiGzDecoder::new(BufReader::new(input));

    let output = File::create(destination).map_err(|e| extraction_error(e.to_string()))?;
    let mut writer = BufWriter::new(output);

    let written =
        io::copy(&mut decoder, &mut writer).map_err(|e| extraction_error(e.to_string()))?;
    writer
        .flush()
        .map_err(|e| extraction_error(e.to_string()))?;

    Ok(written)
}

/// Removes `path`, treating an already missing file as success.
///
/// Returns whether a file was actually removed.
pub fn remove_if_exists(path: &Path) -> Result<bool, DataPrepError> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(DataPrepError::Removal {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }),
    }
}
