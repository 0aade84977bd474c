// traits.rs - Core trait for the file hasher system

use std::fmt::Debug;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Read buffer size used when streaming file contents into a digest
pub const CHUNK_SIZE: usize = 64 * 1024;

/// A digest algorithm that can be applied to a byte stream
pub trait FileHasher: Send + Sync + Debug {
    /// Digest everything readable from `reader`
    fn hash_reader(&self, reader: &mut dyn Read) -> io::Result<Vec<u8>>;

    /// Get a human-readable name for this hasher
    fn name(&self) -> &'static str;

    /// Digest the contents of the file at `path`
    fn hash_file(&self, path: &Path) -> Result<Vec<u8>, String> {
        let mut reader = open_input(path)?;
        self.hash_reader(&mut reader)
            .map_err(|e| format!("Failed to read '{}': {}", path.display(), e))
    }
}

/// Open `path` for hashing with a per-file error message
pub fn open_input(path: &Path) -> Result<BufReader<File>, String> {
    if !path.is_file() {
        return Err(format!(
            "{}: was not found or the caller does not have the required permission.",
            path.display()
        ));
    }
    let file = File::open(path)
        .map_err(|e| format!("Failed to open '{}': {}", path.display(), e))?;
    Ok(BufReader::with_capacity(CHUNK_SIZE, file))
}

/// Feed `reader` into `update` chunk by chunk until end of input
pub fn read_chunks<F>(reader: &mut dyn Read, mut update: F) -> io::Result<()>
where
    F: FnMut(&[u8]),
{
    let mut buffer = vec![0u8; CHUNK_SIZE];
    loop {
        match reader.read(&mut buffer) {
            Ok(0) => return Ok(()),
            Ok(n) => update(&buffer[..n]),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}
