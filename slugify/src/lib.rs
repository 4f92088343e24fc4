use self::table::{is_allowed, single_char};
use regex::Regex;
use serde::Deserialize;
use std::borrow::Cow;
use std::collections::BTreeMap;

pub mod table;

pub use self::error::TableError;
pub use self::table::TranslitTable;

pub mod prelude {
    pub use crate::error::TableError;
    pub use crate::table::TranslitTable;
    pub use crate::{slug, slug_with_max_length};
    pub use crate::{Slug, SlugConfig, Slugifier, Truncation};
}

lazy_static::lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Lowercase, trimmed, accent-stripped slug with `_` in place of whitespace runs.
///
/// Characters outside `[A-Za-z0-9_-]` and whitespace are transliterated with the
/// default table, or dropped when it has no entry for them.
///
/// ```
/// assert_eq!(slugify::slug("Café Münster"), "cafe_munster");
/// assert_eq!(slugify::slug("100% Organic!"), "100_organic");
/// ```
pub fn slug(text: &str) -> String {
    Slugifier::default().slug(text)
}

/// Same as [`slug`], then cut to `max_len - 1` characters if longer than `max_len`.
///
/// ```
/// assert_eq!(slugify::slug_with_max_length("abcdefgh", 5), "abcd");
/// assert_eq!(slugify::slug_with_max_length("abcdefgh", 0), "");
/// ```
pub fn slug_with_max_length(text: &str, max_len: usize) -> String {
    Slugifier::default().slug_with_max_length(text, max_len)
}

/// How [`Slugifier::slug_with_max_length`] cuts a slug that is too long.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Truncation {
    /// Keep `max_len - 1` characters, as earlier slug generators did.
    #[default]
    ReserveOne,
    /// Keep exactly `max_len` characters.
    Exact,
}
impl Truncation {
    fn keep(self, max_len: usize) -> usize {
        match self {
            Truncation::ReserveOne => max_len.saturating_sub(1),
            Truncation::Exact => max_len,
        }
    }
}

/// Deserializable settings for a [`Slugifier`]. Every field is optional.
///
/// ```json
/// { "truncation": "exact", "transliterations": { "œ": "oe" } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SlugConfig {
    pub truncation: Truncation,
    /// Merged onto the default table, or replacing it with `replace_default_table`.
    pub transliterations: BTreeMap<String, String>,
    pub replace_default_table: bool,
}

#[derive(Debug, Clone)]
pub struct Slugifier {
    table: Cow<'static, TranslitTable>,
    truncation: Truncation,
}
impl Default for Slugifier {
    fn default() -> Self {
        Self {
            table: Cow::Borrowed(TranslitTable::default_table()),
            truncation: Truncation::default(),
        }
    }
}
impl Slugifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: SlugConfig) -> Result<Self, TableError> {
        let SlugConfig {
            truncation,
            transliterations,
            replace_default_table,
        } = config;

        let pairs = transliterations
            .into_iter()
            .map(|(key, value)| Ok((single_char(&key)?, value)))
            .collect::<Result<Vec<_>, TableError>>()?;
        let table = if replace_default_table {
            Cow::Owned(TranslitTable::from_pairs(pairs)?)
        } else if pairs.is_empty() {
            Cow::Borrowed(TranslitTable::default_table())
        } else {
            Cow::Owned(TranslitTable::default_table().with_overrides(pairs)?)
        };
        tracing::debug!(
            entries = table.len(),
            ?truncation,
            "configured slugifier"
        );

        Ok(Self { table, truncation })
    }

    pub fn with_table(mut self, table: TranslitTable) -> Self {
        self.table = Cow::Owned(table);
        self
    }

    pub fn truncation(mut self, truncation: Truncation) -> Self {
        self.truncation = truncation;
        self
    }

    pub fn table(&self) -> &TranslitTable {
        &self.table
    }

    pub fn slug(&self, text: &str) -> String {
        let mut substituted = String::with_capacity(text.len());
        for c in text.chars() {
            if is_allowed(c) {
                substituted.push(c);
                continue;
            }
            match self.table.get(c) {
                Some(replacement) => substituted.push_str(replacement),
                None => tracing::trace!(dropped = %c, "no transliteration for character"),
            }
        }

        WHITESPACE_RUN
            .replace_all(substituted.trim(), "_")
            .to_ascii_lowercase()
    }

    pub fn slug_with_max_length(&self, text: &str, max_len: usize) -> String {
        let mut slug = self.slug(text);
        let len = slug.chars().count();
        if len > max_len {
            let keep = self.truncation.keep(max_len);
            let cut = slug
                .char_indices()
                .nth(keep)
                .map_or(slug.len(), |(idx, _)| idx);
            tracing::trace!(len, max_len, keep, "truncating slug");
            slug.truncate(cut);
        }
        slug
    }
}

pub trait Slug {
    fn to_slug(&self) -> String;
    fn to_slug_with_max_length(&self, max_len: usize) -> String;
}
// auto-implement for str, String, Cow<str> and references to them
impl<T: AsRef<str> + ?Sized> Slug for T {
    fn to_slug(&self) -> String {
        slug(self.as_ref())
    }
    fn to_slug_with_max_length(&self, max_len: usize) -> String {
        slug_with_max_length(self.as_ref(), max_len)
    }
}

pub mod error {
    #[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
    pub enum TableError {
        #[error("transliteration key {0:?} must be exactly one character")]
        KeyNotSingleChar(String),
        #[error("{0:?} is already allowed in slugs and cannot be transliterated")]
        KeyInAllowedAlphabet(char),
        #[error("replacement {value:?} for {key:?} must be one or more ASCII letters")]
        InvalidReplacement { key: char, value: String },
        #[error("conflicting transliterations for {key:?}: {first:?} and {second:?}")]
        ConflictingEntry {
            key: char,
            first: String,
            second: String,
        },
    }
}
