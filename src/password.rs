//! Credential obfuscation applied to every plaintext password before it reaches the store.
//!
//! Handlers only see [`PasswordHasher`]; swapping [`PlaceholderHasher`] for a real
//! password hash (e.g. Argon2id) does not touch any caller.

pub trait PasswordHasher: Send + Sync {
    /// Map a plaintext password to its stored representation.
    fn hash(&self, plaintext: &str) -> String;
}

/// Deterministic, non-cryptographic stand-in. Not suitable for real credentials.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlaceholderHasher;

impl PasswordHasher for PlaceholderHasher {
    fn hash(&self, plaintext: &str) -> String {
        format!("not really hashed {} hehehe", plaintext)
    }
}
