// mod.rs - Hashers module root

pub mod md5;
pub mod provider;
pub mod registry;
pub mod script;
pub mod sha1;
pub mod sha256;
pub mod traits;

// Re-export main types for convenience
pub use self::md5::Md5Hasher;
pub use provider::HashProvider;
pub use registry::HasherRegistry;
pub use script::ScriptHasher;
pub use self::sha1::Sha1Hasher;
pub use sha256::Sha256Hasher;
pub use traits::FileHasher;
