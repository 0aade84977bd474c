// md5.rs - MD5 hasher implementation

use std::io::{self, Read};

use super::traits::{read_chunks, FileHasher};

/// MD5 hasher - default algorithm
#[derive(Debug, Clone)]
pub struct Md5Hasher;

impl FileHasher for Md5Hasher {
    fn hash_reader(&self, reader: &mut dyn Read) -> io::Result<Vec<u8>> {
        let mut context = md5::Context::new();
        read_chunks(reader, |chunk| context.consume(chunk))?;
        Ok(context.compute().0.to_vec())
    }

    fn name(&self) -> &'static str {
        "MD5"
    }
}
