//! Entropy to mnemonic encoding.
//!
//! Entropy bits are followed by the first `bits / 32` bits of SHA-256 over the
//! entropy. The combined bit-string is cut into 11-bit big-endian groups, each
//! an index into the 2048-word table.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::debug;
use zeroize::Zeroizing;

use super::{Language, MnemonicError, MnemonicResult, Wordlist, WordlistRegistry};

/// Bits per word index
const BITS_PER_WORD: usize = 11;

/// Mask selecting the low 11 bits
const WORD_MASK: u32 = (1 << BITS_PER_WORD) - 1;

/// Entropy strength in bits
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum Strength {
    /// 128 bits, 12 words
    #[default]
    Bits128,
    /// 160 bits, 15 words
    Bits160,
    /// 192 bits, 18 words
    Bits192,
    /// 224 bits, 21 words
    Bits224,
    /// 256 bits, 24 words
    Bits256,
}

impl Strength {
    /// Every supported strength, weakest first
    pub const ALL: [Self; 5] = [
        Self::Bits128,
        Self::Bits160,
        Self::Bits192,
        Self::Bits224,
        Self::Bits256,
    ];

    /// Strength from a bit count.
    ///
    /// # Errors
    /// Returns `InvalidStrength` unless `bits` is 128, 160, 192, 224 or 256
    pub const fn from_bits(bits: usize) -> MnemonicResult<Self> {
        match bits {
            128 => Ok(Self::Bits128),
            160 => Ok(Self::Bits160),
            192 => Ok(Self::Bits192),
            224 => Ok(Self::Bits224),
            256 => Ok(Self::Bits256),
            _ => Err(MnemonicError::InvalidStrength(bits)),
        }
    }

    /// Strength from an entropy length in bytes.
    ///
    /// # Errors
    /// Returns `InvalidEntropyLength` unless `len` is 16, 20, 24, 28 or 32
    pub const fn from_entropy_len(len: usize) -> MnemonicResult<Self> {
        match len {
            16 => Ok(Self::Bits128),
            20 => Ok(Self::Bits160),
            24 => Ok(Self::Bits192),
            28 => Ok(Self::Bits224),
            32 => Ok(Self::Bits256),
            _ => Err(MnemonicError::InvalidEntropyLength(len)),
        }
    }

    /// Strength from a mnemonic word count.
    ///
    /// # Errors
    /// Returns `InvalidWordCount` unless `count` is 12, 15, 18, 21 or 24
    pub const fn from_word_count(count: usize) -> MnemonicResult<Self> {
        match count {
            12 => Ok(Self::Bits128),
            15 => Ok(Self::Bits160),
            18 => Ok(Self::Bits192),
            21 => Ok(Self::Bits224),
            24 => Ok(Self::Bits256),
            _ => Err(MnemonicError::InvalidWordCount(count)),
        }
    }

    /// Entropy bits
    #[must_use]
    pub const fn bits(self) -> usize {
        match self {
            Self::Bits128 => 128,
            Self::Bits160 => 160,
            Self::Bits192 => 192,
            Self::Bits224 => 224,
            Self::Bits256 => 256,
        }
    }

    /// Entropy bytes
    #[must_use]
    pub const fn entropy_len(self) -> usize {
        self.bits() / 8
    }

    /// Checksum bits appended to the entropy
    #[must_use]
    pub const fn checksum_bits(self) -> usize {
        self.bits() / 32
    }

    /// Words in the rendered mnemonic
    #[must_use]
    pub const fn word_count(self) -> usize {
        (self.bits() + self.checksum_bits()) / BITS_PER_WORD
    }
}

impl TryFrom<usize> for Strength {
    type Error = MnemonicError;

    fn try_from(bits: usize) -> Result<Self, Self::Error> {
        Self::from_bits(bits)
    }
}

impl From<Strength> for usize {
    fn from(strength: Strength) -> Self {
        strength.bits()
    }
}

/// Checksum bits for `entropy`, right-aligned in a byte.
///
/// These are the leading `len * 8 / 32` bits of SHA-256(entropy); at most 8.
///
/// # Errors
/// Returns `InvalidEntropyLength` for unsupported entropy lengths
pub fn checksum_bits(entropy: &[u8]) -> MnemonicResult<u8> {
    let strength = Strength::from_entropy_len(entropy.len())?;
    let hash = Sha256::digest(entropy);
    Ok(hash[0] >> (8 - strength.checksum_bits()))
}

/// Encodes entropy into mnemonic phrases for one language.
///
/// Holds only an immutable wordlist, so a single encoder can be shared across
/// threads.
#[derive(Clone, Debug)]
pub struct MnemonicEncoder {
    wordlist: Wordlist,
}

impl MnemonicEncoder {
    /// Create an encoder for a language identifier using the built-in tables.
    ///
    /// # Errors
    /// Returns `UnsupportedLanguage` for unknown identifiers, or the wordlist
    /// error if the table cannot be resolved
    pub fn new(language: &str) -> MnemonicResult<Self> {
        WordlistRegistry::new().resolve(language).map(Self::from_wordlist)
    }

    /// Create an encoder resolving `language` through `registry`.
    ///
    /// # Errors
    /// Returns the registry's error if the wordlist cannot be resolved
    pub fn with_registry(registry: &WordlistRegistry, language: Language) -> MnemonicResult<Self> {
        registry.resolve_language(language).map(Self::from_wordlist)
    }

    /// Create an encoder from an already-resolved wordlist
    #[must_use]
    pub const fn from_wordlist(wordlist: Wordlist) -> Self {
        Self { wordlist }
    }

    /// The encoder's language
    #[must_use]
    pub const fn language(&self) -> Language {
        self.wordlist.language()
    }

    /// The encoder's wordlist
    #[must_use]
    pub const fn wordlist(&self) -> &Wordlist {
        &self.wordlist
    }

    /// Generate a new random mnemonic using the operating system's CSPRNG.
    ///
    /// # Errors
    /// Returns `RandomSourceFailure` if the OS random source fails
    pub fn generate(&self, strength: Strength) -> MnemonicResult<String> {
        self.generate_with_rng(strength, &mut OsRng)
    }

    /// Generate a new random mnemonic from a bit count.
    ///
    /// # Errors
    /// Returns `InvalidStrength` for unsupported bit counts and
    /// `RandomSourceFailure` if the OS random source fails
    pub fn generate_with_bits(&self, bits: usize) -> MnemonicResult<String> {
        self.generate(Strength::from_bits(bits)?)
    }

    /// Generate a new mnemonic drawing entropy from `rng`.
    ///
    /// # Errors
    /// Returns `RandomSourceFailure` if `rng` fails to fill the entropy buffer
    pub fn generate_with_rng<R>(&self, strength: Strength, rng: &mut R) -> MnemonicResult<String>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        let mut entropy = Zeroizing::new(vec![0u8; strength.entropy_len()]);
        rng.try_fill_bytes(&mut entropy[..])
            .map_err(|e| MnemonicError::RandomSourceFailure(e.to_string()))?;

        debug!(
            language = %self.language(),
            bits = strength.bits(),
            words = strength.word_count(),
            "generating mnemonic"
        );
        self.to_mnemonic(&entropy)
    }

    /// Encode entropy as a mnemonic phrase joined with the language delimiter.
    ///
    /// # Errors
    /// Returns `InvalidEntropyLength` unless the entropy is 16, 20, 24, 28 or
    /// 32 bytes
    pub fn to_mnemonic(&self, entropy: &[u8]) -> MnemonicResult<String> {
        let indices = Self::to_indices(entropy)?;
        Ok(self.wordlist.join(&self.words_for(&indices)))
    }

    /// Encode entropy as checksummed 11-bit word indices.
    ///
    /// # Errors
    /// Returns `InvalidEntropyLength` unless the entropy is 16, 20, 24, 28 or
    /// 32 bytes
    pub fn to_indices(entropy: &[u8]) -> MnemonicResult<Vec<u16>> {
        let strength = Strength::from_entropy_len(entropy.len())?;
        let hash = Sha256::digest(entropy);

        // The checksum is never longer than 8 bits, so only the first hash byte
        // is fed in. Its trailing bits are left over once every 11-bit group is
        // full and get discarded.
        let mut indices = Vec::with_capacity(strength.word_count());
        let mut acc: u32 = 0;
        let mut pending = 0;
        for &byte in entropy.iter().chain(std::iter::once(&hash[0])) {
            acc = (acc << 8) | u32::from(byte);
            pending += 8;
            while pending >= BITS_PER_WORD {
                pending -= BITS_PER_WORD;
                #[allow(clippy::cast_possible_truncation)]
                let index = ((acc >> pending) & WORD_MASK) as u16;
                indices.push(index);
            }
            acc &= (1 << pending) - 1;
        }

        debug_assert_eq!(indices.len(), strength.word_count());
        Ok(indices)
    }

    /// Map word indices to words.
    ///
    /// Panics if an index is 2048 or above; indices produced by
    /// [`Self::to_indices`] are always in range.
    #[must_use]
    pub fn words_for(&self, indices: &[u16]) -> Vec<&str> {
        indices.iter().map(|&i| &self.wordlist[i]).collect()
    }
}
