// registry.rs - Hasher registry for managing available hashers

use std::collections::HashMap;
use super::traits::FileHasher;
use super::{Md5Hasher, Sha1Hasher, Sha256Hasher};

/// Registry of built-in hashers, keyed by case-sensitive algorithm name
pub struct HasherRegistry {
    hashers: HashMap<String, Box<dyn FileHasher>>,
}

impl HasherRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            hashers: HashMap::new(),
        };

        // Register built-in hashers
        registry.register_hasher("MD5", Box::new(Md5Hasher));
        registry.register_hasher("SHA1", Box::new(Sha1Hasher));
        registry.register_hasher("SHA256", Box::new(Sha256Hasher));

        registry
    }

    /// Register a new hasher
    pub fn register_hasher(&mut self, name: &str, hasher: Box<dyn FileHasher>) {
        self.hashers.insert(name.to_string(), hasher);
    }

    /// Remove and return a hasher by name
    pub fn take_hasher(&mut self, name: &str) -> Option<Box<dyn FileHasher>> {
        self.hashers.remove(name)
    }

    /// Get all hasher names, sorted
    pub fn get_hasher_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.hashers.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}

impl Default for HasherRegistry {
    fn default() -> Self {
        Self::new()
    }
}
