// crates/gazetteer-core/src/loader/common_io.rs
use crate::error::{GazetteerError, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::{read::GzDecoder, write::GzEncoder, Compression};

/// True for `*.gz` paths.
pub fn is_gzip_path(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// Opens a file, buffers it, and wraps it in a Gzip decoder when the path
/// ends in `.gz`. The caller does not care about the compression.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        GazetteerError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if is_gzip_path(path) {
        #[cfg(feature = "compact")]
        {
            return Ok(Box::new(GzDecoder::new(reader)));
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(GazetteerError::InvalidData(format!(
                "{} is gzip-compressed but 'compact' is disabled",
                path.display()
            )));
        }
    }

    Ok(Box::new(reader))
}

/// Creates (truncates) a file for writing, gzip-encoding `*.gz` paths.
///
/// The returned writer must be flushed and dropped to finish the stream.
pub fn create_stream(path: &Path) -> Result<Box<dyn Write>> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);

    if is_gzip_path(path) {
        #[cfg(feature = "compact")]
        {
            return Ok(Box::new(GzEncoder::new(writer, Compression::default())));
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(GazetteerError::InvalidData(
                "Gzip requested but 'compact' disabled".into(),
            ));
        }
    }

    Ok(Box::new(writer))
}
