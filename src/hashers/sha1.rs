// sha1.rs - SHA1 hasher implementation

use std::io::{self, Read};

use super::traits::{read_chunks, FileHasher};

/// SHA1 hasher
#[derive(Debug, Clone)]
pub struct Sha1Hasher;

impl FileHasher for Sha1Hasher {
    fn hash_reader(&self, reader: &mut dyn Read) -> io::Result<Vec<u8>> {
        use sha1::{Digest, Sha1};
        let mut hasher = Sha1::new();
        read_chunks(reader, |chunk| hasher.update(chunk))?;
        Ok(hasher.finalize().to_vec())
    }

    fn name(&self) -> &'static str {
        "SHA1"
    }
}
