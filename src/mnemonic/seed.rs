//! Mnemonic to seed derivation.
//!
//! PBKDF2-HMAC-SHA512 over the NFKD-normalized phrase, salted with
//! `"mnemonic"` plus the NFKD-normalized passphrase, 2048 rounds, 64-byte
//! output. The phrase is not validated; any text yields a seed.

use std::fmt;

use pbkdf2::pbkdf2_hmac;
use sha2::Sha512;
use subtle::{Choice, ConstantTimeEq};
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Seed length in bytes
pub const SEED_LEN: usize = 64;

/// PBKDF2 iteration count
pub const PBKDF2_ROUNDS: u32 = 2048;

/// Salt prefix placed before the passphrase
const SALT_PREFIX: &str = "mnemonic";

/// A 64-byte BIP-39 seed. Zeroed on drop; compared in constant time.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Seed([u8; SEED_LEN]);

impl Seed {
    /// Get the underlying bytes
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }

    /// Copy out the raw bytes; the caller becomes responsible for zeroing them
    #[must_use]
    pub fn into_bytes(self) -> [u8; SEED_LEN] {
        self.0
    }

    /// Convert to hex string
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl ConstantTimeEq for Seed {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

impl PartialEq for Seed {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Seed {}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seed([REDACTED])")
    }
}

impl AsRef<[u8]> for Seed {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Derive the 64-byte seed for `mnemonic` and `passphrase`.
///
/// Both inputs are NFKD-normalized first, so a Japanese phrase joined with
/// U+3000 derives the same seed as its space-joined form.
///
/// Pure and total: identical inputs always give identical output.
#[must_use]
pub fn create_seed(mnemonic: &str, passphrase: &str) -> Seed {
    let password: Zeroizing<String> = Zeroizing::new(mnemonic.nfkd().collect());

    let mut salt = Zeroizing::new(String::with_capacity(SALT_PREFIX.len() + passphrase.len()));
    salt.push_str(SALT_PREFIX);
    salt.extend(passphrase.nfkd());

    let mut seed = Seed([0u8; SEED_LEN]);
    pbkdf2_hmac::<Sha512>(password.as_bytes(), salt.as_bytes(), PBKDF2_ROUNDS, &mut seed.0);
    seed
}

/// Derive the seed for `mnemonic` with an empty passphrase
#[must_use]
pub fn create_seed_default(mnemonic: &str) -> Seed {
    create_seed(mnemonic, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHRASE: &str =
        "prefer judge blouse motor naive october legal labor exact sustain stuff direct";

    #[test]
    fn test_known_seed_empty_passphrase() {
        let seed = create_seed(PHRASE, "");
        assert_eq!(
            seed.to_hex(),
            "e2e576197f191c9ac9a13af747c9ee3104701a37a6f018438ec827147cfd674f\
             6279adf0a209b8e7e3f6c7bd20e0be1ba6d20055aced88b5030296e1bdecb044"
        );
        assert_eq!(create_seed_default(PHRASE), seed);
    }

    #[test]
    fn test_known_seed_with_passphrase() {
        let seed = create_seed(PHRASE, "151515888");
        assert_eq!(
            seed.to_hex(),
            "2ffd59fae330185352dd5079121a7957513eef7cad19c873e391341e8ec1b07f\
             f4d2d07115f697460d65317b54f6e4de53f624fbb9c9009dcddab02551c27333"
        );
    }

    #[test]
    fn test_reference_vector_trezor() {
        let seed = create_seed(
            "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
            "TREZOR",
        );
        assert_eq!(
            seed.to_hex(),
            "c55257c360c07c72029aebc1b53c05ed0362ada38ead3e3e9efa3708e5349553\
             1f09a6987599d18264c1e1c92f2cf141630c7a3c4ab7c81b2f001698e7463b04"
        );
    }

    #[test]
    fn test_reference_vector_japanese() {
        // Ideographic-space separators and a compatibility-form passphrase
        let mut words = vec!["あいこくしん"; 11];
        words.push("あおぞら");
        let phrase = words.join("\u{3000}");
        let seed = create_seed(&phrase, "㍍ガバヴァぱばぐゞちぢ十人十色");
        assert_eq!(
            seed.to_hex(),
            "a262d6fb6122ecf45be09c50492b31f92e9beb7d9a845987a02cefda57a15f9c\
             467a17872029a9e92299b5cbdf306e3a0ee620245cbd508959b6cb7ca637bd55"
        );

        let spaced = phrase.replace('\u{3000}', " ");
        assert_eq!(create_seed(&spaced, "㍍ガバヴァぱばぐゞちぢ十人十色"), seed);
    }

    #[test]
    fn test_passphrase_normalized() {
        // Precomposed and combining forms of "café"
        assert_eq!(create_seed(PHRASE, "caf\u{e9}"), create_seed(PHRASE, "cafe\u{301}"));
        assert_ne!(create_seed(PHRASE, "caf\u{e9}"), create_seed(PHRASE, "cafe"));
    }

    #[test]
    fn test_constant_time_eq() {
        let a = create_seed(PHRASE, "");
        let b = create_seed(PHRASE, "");
        let c = create_seed(PHRASE, "other");
        assert!(bool::from(a.ct_eq(&b)));
        assert!(!bool::from(a.ct_eq(&c)));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_deterministic() {
        let a = create_seed(PHRASE, "pass");
        let b = create_seed(PHRASE, "pass");
        assert_eq!(a, b);
        assert_eq!(a.as_bytes().len(), SEED_LEN);
    }

    #[test]
    fn test_passphrase_changes_seed() {
        assert_ne!(create_seed(PHRASE, ""), create_seed(PHRASE, "secret"));
        assert_ne!(create_seed(PHRASE, "a"), create_seed(PHRASE, "A"));
    }

    #[test]
    fn test_unvalidated_input_accepted() {
        // Not a valid mnemonic; derivation is still defined
        let seed = create_seed("not a mnemonic at all", "");
        assert_eq!(seed.as_ref().len(), SEED_LEN);
        let empty = create_seed("", "");
        assert_ne!(seed, empty);
    }

    #[test]
    fn test_debug_redacted() {
        let seed = create_seed(PHRASE, "");
        let debug = format!("{seed:?}");
        assert_eq!(debug, "Seed([REDACTED])");
        assert!(!debug.contains(&seed.to_hex()[..8]));
    }

    #[test]
    fn test_into_bytes() {
        let seed = create_seed(PHRASE, "");
        let copy = *seed.as_bytes();
        assert_eq!(seed.into_bytes(), copy);
    }
}
