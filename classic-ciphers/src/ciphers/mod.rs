//! Cipher implementations

pub mod blocks;
pub mod permutation;
pub mod rotation;
pub mod substitution;

pub use blocks::*;
pub use permutation::*;
pub use rotation::{CandidateDecryption, RotationCipher};
pub use substitution::{SubstitutionCipher, SubstitutionMapping, Suggestion};

/// The ciphers offered by the toolkit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherKind {
    Rotation,
    Substitution,
    Permutation,
}

impl CipherKind {
    pub const ALL: [CipherKind; 3] = [
        CipherKind::Rotation,
        CipherKind::Substitution,
        CipherKind::Permutation,
    ];

    /// Menu label of the cipher
    pub fn label(&self) -> &'static str {
        match self {
            CipherKind::Rotation => "Rotation (Caesar Cipher)",
            CipherKind::Substitution => "Substitution",
            CipherKind::Permutation => "Permutation (Block)",
        }
    }
}
