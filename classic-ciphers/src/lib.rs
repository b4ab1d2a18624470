//! # Classic Ciphers Library
//!
//! Educational implementations of pre-modern text ciphers together with the
//! cryptanalysis that breaks them.
//!
//! ## Supported Ciphers
//!
//! - **Rotation** (Caesar) - fixed alphabet shift, broken by trying every shift
//! - **Substitution** - arbitrary letter mapping, attacked with frequency analysis
//! - **Permutation** (block transposition) - columns reordered by a keyword
//!
//! ## Usage
//!
//! ```rust
//! use classic_ciphers::{rotation, PermutationCipher, TextCipher};
//!
//! let ciphertext = rotation::encode("the cat sat on the mat", 3);
//! assert_eq!(ciphertext, "wkh fdw vdw rq wkh pdw");
//!
//! let found = rotation::brute_force(&ciphertext)
//!     .find(|candidate| candidate.shift == 3)
//!     .map(|candidate| candidate.text);
//! assert_eq!(found.as_deref(), Some("the cat sat on the mat"));
//!
//! let cipher = PermutationCipher::from_keyword("zebra")?;
//! let encrypted = cipher.encrypt("meet me at the park")?;
//! assert_eq!(cipher.decrypt(&encrypted)?, "meetmeatthepark");
//! # Ok::<(), classic_ciphers::CipherError>(())
//! ```
//!
//! None of these ciphers offer any security. They exist to demonstrate
//! brute-force search and letter-frequency correlation.

// Public modules
pub mod alphabet;
pub mod analysis;
pub mod cipher;
pub mod ciphers;
pub mod error;
pub mod utils;

// Re-exports for easy access
pub use analysis::{LetterCount, Ranking};
pub use cipher::TextCipher;
pub use ciphers::{
    blocks, permutation, rotation, substitution, Block, CandidateDecryption, CipherKind,
    PermutationCipher, PermutationKey, RotationCipher, SubstitutionCipher, SubstitutionMapping,
    Suggestion,
};
pub use error::{CipherError, Result};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version information
pub fn version() -> &'static str {
    VERSION
}

/// List all supported ciphers
pub fn supported_ciphers() -> Vec<&'static str> {
    CipherKind::ALL.iter().map(CipherKind::label).collect()
}
