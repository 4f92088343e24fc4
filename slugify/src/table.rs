//! Character transliteration table used by the slug pipeline.
//!
//! Maps single characters outside the allowed slug alphabet to plain ASCII
//! replacements (`'é'` → `"e"`, `'Đ'` → `"Dj"`, `'ß'` → `"Ss"`). Lookups are
//! exact and case-sensitive; a miss is a normal outcome, not an error.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::TableError;

/// Default dictionary: Latin-1 supplement plus a few Latin Extended-A letters.
const DICTIONARY: &[(char, &str)] = &[
    ('Š', "S"),
    ('š', "s"),
    ('Đ', "Dj"),
    ('đ', "dj"),
    ('Ž', "Z"),
    ('ž', "z"),
    ('Č', "C"),
    ('č', "c"),
    ('Ć', "C"),
    ('ć', "c"),
    ('À', "A"),
    ('Á', "A"),
    ('Â', "A"),
    ('Ã', "A"),
    ('Ä', "A"),
    ('Å', "A"),
    ('Æ', "A"),
    ('Ç', "C"),
    ('È', "E"),
    ('É', "E"),
    ('Ê', "E"),
    ('Ë', "E"),
    ('Ì', "I"),
    ('Í', "I"),
    ('Î', "I"),
    ('Ï', "I"),
    ('Ñ', "N"),
    ('Ò', "O"),
    ('Ó', "O"),
    ('Ô', "O"),
    ('Õ', "O"),
    ('Ö', "O"),
    ('Ø', "O"),
    ('Ù', "U"),
    ('Ú', "U"),
    ('Û', "U"),
    ('Ü', "U"),
    ('Ý', "Y"),
    ('Þ', "B"),
    ('ß', "Ss"),
    ('à', "a"),
    ('á', "a"),
    ('â', "a"),
    ('ã', "a"),
    ('ä', "a"),
    ('å', "a"),
    ('æ', "a"),
    ('ç', "c"),
    ('è', "e"),
    ('é', "e"),
    ('ê', "e"),
    ('ë', "e"),
    ('ì', "i"),
    ('í', "i"),
    ('î', "i"),
    ('ï', "i"),
    ('ð', "o"),
    ('ñ', "n"),
    ('ò', "o"),
    ('ó', "o"),
    ('ô', "o"),
    ('õ', "o"),
    ('ö', "o"),
    ('ø', "o"),
    ('ù', "u"),
    ('ú', "u"),
    ('û', "u"),
    ('ü', "u"),
    ('ý', "y"),
    ('þ', "b"),
    ('ÿ', "y"),
    ('Ŕ', "R"),
    ('ŕ', "r"),
];

lazy_static::lazy_static! {
    static ref DEFAULT_TABLE: TranslitTable = TranslitTable {
        entries: DICTIONARY
            .iter()
            .map(|(key, value)| (*key, (*value).to_owned()))
            .collect(),
    };
}

/// Characters that pass through the pipeline without consulting the table.
pub fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || c.is_whitespace() || c == '-' || c == '_'
}

/// Immutable `char` → ASCII replacement map.
///
/// Once built, a table cannot be changed; [`TranslitTable::with_overrides`]
/// returns a new table instead. Deserializes from a string map such as
/// `{"é": "e", "œ": "oe"}`, with the same validation as [`TranslitTable::from_pairs`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "BTreeMap<String, String>")]
pub struct TranslitTable {
    entries: BTreeMap<char, String>,
}

impl TranslitTable {
    /// The built-in dictionary, built on first use and shared afterwards.
    pub fn default_table() -> &'static TranslitTable {
        &DEFAULT_TABLE
    }

    pub fn from_pairs<I, V>(pairs: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (char, V)>,
        V: Into<String>,
    {
        let mut entries: BTreeMap<char, String> = BTreeMap::new();
        for (key, value) in pairs {
            let value = validate_entry(key, value.into())?;
            if let Some(first) = entries.get(&key) {
                if *first != value {
                    return Err(TableError::ConflictingEntry {
                        key,
                        first: first.clone(),
                        second: value,
                    });
                }
                continue;
            }
            entries.insert(key, value);
        }
        tracing::debug!(entries = entries.len(), "built transliteration table");
        Ok(Self { entries })
    }

    /// A copy of this table with `pairs` added, replacing existing keys.
    pub fn with_overrides<I, V>(&self, pairs: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (char, V)>,
        V: Into<String>,
    {
        let mut entries = self.entries.clone();
        let mut overridden = 0usize;
        for (key, value) in pairs {
            let value = validate_entry(key, value.into())?;
            if entries.insert(key, value).is_some() {
                overridden += 1;
            }
        }
        tracing::debug!(
            entries = entries.len(),
            overridden,
            "extended transliteration table"
        );
        Ok(Self { entries })
    }

    pub fn get(&self, c: char) -> Option<&str> {
        self.entries.get(&c).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> {
        self.entries.iter().map(|(key, value)| (*key, value.as_str()))
    }
}

impl Default for TranslitTable {
    fn default() -> Self {
        DEFAULT_TABLE.clone()
    }
}

impl TryFrom<BTreeMap<String, String>> for TranslitTable {
    type Error = TableError;

    fn try_from(raw: BTreeMap<String, String>) -> Result<Self, Self::Error> {
        let pairs = raw
            .into_iter()
            .map(|(key, value)| Ok((single_char(&key)?, value)))
            .collect::<Result<Vec<_>, TableError>>()?;
        Self::from_pairs(pairs)
    }
}

pub(crate) fn single_char(key: &str) -> Result<char, TableError> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(TableError::KeyNotSingleChar(key.to_owned())),
    }
}

fn validate_entry(key: char, value: String) -> Result<String, TableError> {
    if is_allowed(key) {
        return Err(TableError::KeyInAllowedAlphabet(key));
    }
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(TableError::InvalidReplacement { key, value });
    }
    Ok(value)
}
