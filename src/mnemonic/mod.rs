//! BIP-39 mnemonic phrases and seed derivation.
//!
//! The pipeline is split into three pieces:
//! - [`WordlistRegistry`] resolves a language to its 2048-word table
//! - [`MnemonicEncoder`] packs entropy plus its SHA-256 checksum into words
//! - [`create_seed`] stretches a phrase and passphrase into a 64-byte seed
//!
//! ```
//! use seedphrase::mnemonic::{create_seed, MnemonicEncoder, Strength};
//!
//! let encoder = MnemonicEncoder::new("english").unwrap();
//! let phrase = encoder.generate(Strength::default()).unwrap();
//! assert_eq!(phrase.split(' ').count(), 12);
//!
//! let seed = create_seed(&phrase, "");
//! assert_eq!(seed.as_bytes().len(), 64);
//! ```

mod encoder;
mod language;
mod seed;
mod wordlist;

pub use encoder::{checksum_bits, MnemonicEncoder, Strength};
pub use language::Language;
pub use seed::{create_seed, create_seed_default, Seed, PBKDF2_ROUNDS, SEED_LEN};
pub use wordlist::{Wordlist, WordlistRegistry, WORDLIST_LEN};

use std::path::PathBuf;

use thiserror::Error;

/// Mnemonic errors
#[derive(Debug, Error)]
pub enum MnemonicError {
    /// Language identifier is not one of the supported set
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),
    /// Wordlist does not hold exactly 2048 entries
    #[error("invalid wordlist length for {language}: expected 2048 words, got {len}")]
    InvalidWordlistLength {
        /// Language the table was resolved for
        language: Language,
        /// Number of words actually found
        len: usize,
    },
    /// The same word appears twice in a wordlist
    #[error("duplicate word in {language} wordlist: {word}")]
    DuplicateWord {
        /// Language the table was resolved for
        language: Language,
        /// The repeated word
        word: String,
    },
    /// Wordlist file could not be read
    #[error("failed to read wordlist {}: {source}", .path.display())]
    WordlistIo {
        /// File that failed
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
    /// Strength outside 128/160/192/224/256 bits
    #[error("invalid strength: {0} bits (must be 128, 160, 192, 224 or 256)")]
    InvalidStrength(usize),
    /// Word count outside 12/15/18/21/24
    #[error("invalid word count: {0} (must be 12, 15, 18, 21 or 24)")]
    InvalidWordCount(usize),
    /// Entropy length outside 16/20/24/28/32 bytes
    #[error("invalid entropy length: {0} bytes (must be 16, 20, 24, 28 or 32)")]
    InvalidEntropyLength(usize),
    /// The secure random source failed to produce entropy
    #[error("random source failure: {0}")]
    RandomSourceFailure(String),
}

/// Result type for mnemonic operations
pub type MnemonicResult<T> = Result<T, MnemonicError>;
