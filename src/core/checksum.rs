/*!
 * Streaming per-chunk MD5 calculation
 */

use crate::error::{ManifestError, Result};
use std::io::{self, Read};
use tracing::{debug, trace};

/// Read buffer size used while filling a chunk
const READ_BUFFER_SIZE: usize = 64 * 1024; // 64KB buffer

/// Hashes a stream in fixed-size, non-overlapping chunks
#[derive(Debug, Clone, Copy)]
pub struct ChunkHasher {
    chunk_size: u64,
}

impl ChunkHasher {
    /// Create a hasher for the given chunk size in bytes.
    ///
    /// Zero and negative sizes are rejected with `InvalidChunkSize`.
    pub fn new(chunk_size: i64) -> Result<Self> {
        if chunk_size <= 0 {
            return Err(ManifestError::InvalidChunkSize(chunk_size));
        }
        Ok(Self {
            chunk_size: chunk_size as u64,
        })
    }

    pub fn chunk_size(&self) -> u64 {
        self.chunk_size
    }

    /// Consume `reader` to the end and return one lowercase hex MD5 per chunk,
    /// in stream order. The last chunk may be shorter than the chunk size.
    ///
    /// The reader is borrowed, not closed. On a read error nothing is returned.
    pub fn hash_stream<R: Read>(&self, reader: &mut R) -> Result<Vec<String>> {
        let mut md5s = Vec::new();
        let mut buffer = vec![0u8; READ_BUFFER_SIZE];

        loop {
            let mut window = Read::take(&mut *reader, self.chunk_size);
            let mut context = md5::Context::new();
            let mut consumed: u64 = 0;

            loop {
                let n = match window.read(&mut buffer) {
                    Ok(0) => break,
                    Ok(n) => n,
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) => return Err(ManifestError::Read(e)),
                };
                context.consume(&buffer[..n]);
                consumed += n as u64;
            }

            if consumed == 0 {
                break;
            }

            let digest = format!("{:x}", context.compute());
            trace!(chunk = md5s.len(), bytes = consumed, md5 = %digest, "hashed chunk");
            md5s.push(digest);

            // A short chunk means the stream ran dry
            if consumed < self.chunk_size {
                break;
            }
        }

        debug!(
            chunks = md5s.len(),
            chunk_size = self.chunk_size,
            "finished chunk hashing"
        );
        Ok(md5s)
    }
}

/// Calculate the chunk MD5 list of a stream (standalone function)
pub fn calculate_md5s<R: Read>(reader: &mut R, chunk_size: i64) -> Result<Vec<String>> {
    ChunkHasher::new(chunk_size)?.hash_stream(reader)
}
