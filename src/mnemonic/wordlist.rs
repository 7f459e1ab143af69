//! Wordlist resolution.
//!
//! Every language has a built-in table. Ten come from the official BIP-39
//! lists embedded in the `bip39` crate; Russian and Turkish are not part of
//! the official set and are embedded from `wordlists/*.txt`. A
//! `<language>.txt` file in a wordlist directory takes precedence over the
//! built-in table.

use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::ops::Index;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, warn};

use super::{Language, MnemonicError, MnemonicResult};

/// Number of words in every BIP-39 wordlist
pub const WORDLIST_LEN: usize = 2048;

/// An immutable 2048-word table for one language.
///
/// Cloning is cheap; the words are shared behind an `Arc`.
#[derive(Clone)]
pub struct Wordlist {
    language: Language,
    words: Arc<[Cow<'static, str>]>,
}

impl Wordlist {
    /// Build a wordlist, checking its length and that every word is distinct.
    ///
    /// # Errors
    /// Returns `InvalidWordlistLength` or `DuplicateWord`
    pub fn from_words(language: Language, words: Vec<Cow<'static, str>>) -> MnemonicResult<Self> {
        if words.len() != WORDLIST_LEN {
            return Err(MnemonicError::InvalidWordlistLength {
                language,
                len: words.len(),
            });
        }

        let mut seen = HashSet::with_capacity(WORDLIST_LEN);
        for word in &words {
            if !seen.insert(&**word) {
                return Err(MnemonicError::DuplicateWord {
                    language,
                    word: word.to_string(),
                });
            }
        }

        Ok(Self {
            language,
            words: words.into(),
        })
    }

    /// Language of this table
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Character used to join words from this table
    #[must_use]
    pub const fn delimiter(&self) -> char {
        self.language.delimiter()
    }

    /// Number of words (always 2048)
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the table is empty (never true once constructed)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Word at `index`, if in range
    #[must_use]
    pub fn word(&self, index: u16) -> Option<&str> {
        self.words.get(usize::from(index)).map(AsRef::as_ref)
    }

    /// Index of `word` in this table
    #[must_use]
    pub fn position(&self, word: &str) -> Option<u16> {
        self.words
            .iter()
            .position(|w| w == word)
            .and_then(|i| u16::try_from(i).ok())
    }

    /// Iterate over the words in index order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(AsRef::as_ref)
    }

    /// Join words with this table's delimiter
    #[must_use]
    pub fn join(&self, words: &[&str]) -> String {
        let mut buf = [0u8; 4];
        let sep: &str = self.delimiter().encode_utf8(&mut buf);
        words.join(sep)
    }
}

impl Index<u16> for Wordlist {
    type Output = str;

    /// Panics if `index >= 2048`; an 11-bit index can never be out of range.
    fn index(&self, index: u16) -> &str {
        &self.words[usize::from(index)]
    }
}

impl fmt::Debug for Wordlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wordlist")
            .field("language", &self.language)
            .field("len", &self.words.len())
            .finish()
    }
}

/// Resolves languages to wordlists.
///
/// Holds no mutable state; resolving is deterministic and safe to call from
/// any number of threads.
#[derive(Clone, Debug, Default)]
pub struct WordlistRegistry {
    /// Optional directory of `<language>.txt` files
    directory: Option<PathBuf>,
}

impl WordlistRegistry {
    /// Registry backed by the built-in tables only
    #[must_use]
    pub const fn new() -> Self {
        Self { directory: None }
    }

    /// Registry that also reads `<language>.txt` files from `dir`
    #[must_use]
    pub fn with_directory(dir: impl Into<PathBuf>) -> Self {
        Self {
            directory: Some(dir.into()),
        }
    }

    /// Configured wordlist directory
    #[must_use]
    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    /// Resolve a language identifier (case-insensitive) to its wordlist.
    ///
    /// # Errors
    /// Returns `UnsupportedLanguage` for unknown identifiers, or any error from
    /// [`Self::resolve_language`]
    pub fn resolve(&self, language: &str) -> MnemonicResult<Wordlist> {
        self.resolve_language(language.parse()?)
    }

    /// Resolve a language to its wordlist.
    ///
    /// # Errors
    /// Returns `WordlistIo` when a wordlist file cannot be read, and
    /// `InvalidWordlistLength` or `DuplicateWord` when the table is malformed
    pub fn resolve_language(&self, language: Language) -> MnemonicResult<Wordlist> {
        if let Some(words) = self.load_file(language)? {
            warn!(language = %language, "wordlist file overrides built-in table");
            return Wordlist::from_words(language, words);
        }

        debug!(language = %language, "resolved built-in wordlist");
        Wordlist::from_words(language, builtin_words(language))
    }

    /// Wordlist file that replaces the built-in table for `language`, if any
    #[must_use]
    pub fn override_path(&self, language: Language) -> Option<PathBuf> {
        self.file_path(language).filter(|path| path.is_file())
    }

    fn file_path(&self, language: Language) -> Option<PathBuf> {
        self.directory
            .as_ref()
            .map(|dir| dir.join(format!("{}.txt", language.as_str())))
    }

    fn load_file(&self, language: Language) -> MnemonicResult<Option<Vec<Cow<'static, str>>>> {
        let Some(path) = self.file_path(language) else {
            return Ok(None);
        };
        if !path.is_file() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&path)
            .map_err(|source| MnemonicError::WordlistIo { path: path.clone(), source })?;

        let words: Vec<_> = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|word| Cow::Owned(word.to_string()))
            .collect();

        debug!(
            language = %language,
            path = %path.display(),
            count = words.len(),
            "loaded wordlist file"
        );
        Ok(Some(words))
    }
}

const RUSSIAN: &str = include_str!("wordlists/russian.txt");
const TURKISH: &str = include_str!("wordlists/turkish.txt");

/// Built-in table for `language`
fn builtin_words(language: Language) -> Vec<Cow<'static, str>> {
    let official = match language {
        Language::English => bip39::Language::English,
        Language::ChineseSimplified => bip39::Language::SimplifiedChinese,
        Language::ChineseTraditional => bip39::Language::TraditionalChinese,
        Language::Spanish => bip39::Language::Spanish,
        Language::French => bip39::Language::French,
        Language::Italian => bip39::Language::Italian,
        Language::Japanese => bip39::Language::Japanese,
        Language::Korean => bip39::Language::Korean,
        Language::Portuguese => bip39::Language::Portuguese,
        Language::Czech => bip39::Language::Czech,
        Language::Russian => return embedded_words(RUSSIAN),
        Language::Turkish => return embedded_words(TURKISH),
    };
    official.word_list().iter().copied().map(Cow::Borrowed).collect()
}

fn embedded_words(contents: &'static str) -> Vec<Cow<'static, str>> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Cow::Borrowed)
        .collect()
}
