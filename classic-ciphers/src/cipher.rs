//! Generic text cipher trait

use crate::error::Result;

/// Trait for a keyed classical cipher over text
pub trait TextCipher {
    /// Encrypts a plaintext
    fn encrypt(&self, plaintext: &str) -> Result<String>;

    /// Decrypts a ciphertext
    fn decrypt(&self, ciphertext: &str) -> Result<String>;

    /// Returns a human readable name of the cipher
    fn name(&self) -> &'static str;
}
