//! # Seedphrase
//!
//! BIP-39 mnemonic generation and seed derivation.
//!
//! ## Pipeline
//!
//! - **Wordlists**: each language resolves to an immutable 2048-word table
//! - **Encoding**: entropy plus a SHA-256 checksum is cut into 11-bit word
//!   indices and rendered with the language's delimiter
//! - **Seeds**: PBKDF2-HMAC-SHA512 (2048 rounds) stretches the phrase and
//!   passphrase into 64 bytes for downstream HD derivation
//!
//! Hierarchical key derivation is left to the caller; this crate stops at the
//! root seed.

#![forbid(unsafe_code)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rust_2018_idioms
)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod logging;
pub mod mnemonic;

pub use config::{Config, ConfigError};
pub use mnemonic::{
    create_seed, Language, MnemonicEncoder, MnemonicError, MnemonicResult, Seed, Strength,
    Wordlist, WordlistRegistry,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
