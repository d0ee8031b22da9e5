//! Selecting a [`Numberer`] by language tag.
//!
//! Tags are matched case-insensitively. A tag with a region or script subtag (`en-GB`,
//! `en_US`) falls back to its primary language (`en`) when it is not registered itself.
//!
//! ## Examples
//!
//! ```rust
//! use xsl_numbering::NumbererRegistry;
//!
//! let registry = NumbererRegistry::default();
//! assert_eq!(registry.get("en-GB").unwrap().language(), "en");
//! assert!(registry.get("tlh").is_err());
//! assert_eq!(registry.get_or_default("tlh").language(), "en");
//! ```

use crate::error::{Error, Result};
use crate::numberer::Numberer;
use indexmap::IndexMap;
use tracing::debug;

/// An ordered map from lower-cased language tag to [`Numberer`].
///
/// The first registered numberer is the default for unknown tags.
#[derive(Clone, Debug)]
pub struct NumbererRegistry {
    numberers: IndexMap<String, Numberer>,
}

impl Default for NumbererRegistry {
    /// A registry containing only English under `"en"`.
    fn default() -> Self {
        let mut registry = NumbererRegistry::empty();
        registry.register("en", Numberer::english());
        registry
    }
}

impl NumbererRegistry {
    /// A registry with nothing registered.
    #[must_use]
    pub fn empty() -> Self {
        NumbererRegistry {
            numberers: IndexMap::new(),
        }
    }

    /// Registers `numberer` under `tag`, returning the numberer it replaces.
    pub fn register(&mut self, tag: &str, numberer: Numberer) -> Option<Numberer> {
        self.numberers.insert(tag.to_ascii_lowercase(), numberer)
    }

    /// Builder form of [`register`](Self::register).
    #[must_use]
    pub fn with(mut self, tag: &str, numberer: Numberer) -> Self {
        self.register(tag, numberer);
        self
    }

    /// Looks up the numberer for `tag`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownLanguage`] if neither the tag nor its primary language is
    /// registered.
    pub fn get(&self, tag: &str) -> Result<&Numberer> {
        let key = tag.to_ascii_lowercase();
        if let Some(numberer) = self.numberers.get(&key) {
            return Ok(numberer);
        }
        key.split(['-', '_'])
            .next()
            .and_then(|primary| self.numberers.get(primary))
            .ok_or_else(|| Error::unknown_language(tag))
    }

    /// Looks up `tag`, falling back to the first registered numberer and then to English.
    #[must_use]
    pub fn get_or_default(&self, tag: &str) -> &Numberer {
        match self.get(tag) {
            Ok(numberer) => numberer,
            Err(_) => {
                debug!(tag, "no numberer for language, using default");
                self.numberers
                    .first()
                    .map(|(_, numberer)| numberer)
                    .unwrap_or_else(|| english())
            }
        }
    }

    /// Registered tags in registration order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.numberers.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.numberers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.numberers.is_empty()
    }
}

fn english() -> &'static Numberer {
    static ENGLISH: std::sync::OnceLock<Numberer> = std::sync::OnceLock::new();
    ENGLISH.get_or_init(Numberer::english)
}
