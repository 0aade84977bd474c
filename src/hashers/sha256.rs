// sha256.rs - SHA256 hasher implementation

use std::io::{self, Read};

use super::traits::{read_chunks, FileHasher};

/// SHA256 hasher - cryptographically secure alternative
#[derive(Debug, Clone)]
pub struct Sha256Hasher;

impl FileHasher for Sha256Hasher {
    fn hash_reader(&self, reader: &mut dyn Read) -> io::Result<Vec<u8>> {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        read_chunks(reader, |chunk| hasher.update(chunk))?;
        Ok(hasher.finalize().to_vec())
    }

    fn name(&self) -> &'static str {
        "SHA256"
    }
}
