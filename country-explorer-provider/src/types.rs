use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Text shown in the detail view when an optional field is absent.
pub const NOT_AVAILABLE: &str = "N/A";

// ============ Country Record ============

/// One country as returned by the REST Countries v3.1 API.
///
/// Only the fields the explorer reads are modelled; unknown JSON fields are
/// ignored. `name.official` is the sort/filter/display key and the row
/// identifier used for detail lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    /// Official and common names plus native spellings.
    pub name: CountryName,
    /// Population count.
    #[serde(default)]
    pub population: u64,
    /// Region, e.g. `"Europe"`.
    #[serde(default)]
    pub region: String,
    /// Subregion, e.g. `"Northern Europe"`.
    #[serde(default)]
    pub subregion: Option<String>,
    /// Capital cities. Some territories have none.
    #[serde(default)]
    pub capital: Option<Vec<String>>,
    /// Language code → language name.
    #[serde(default)]
    pub languages: Option<BTreeMap<String, String>>,
    /// ISO 3166-1 alpha-2 code.
    #[serde(default)]
    pub cca2: String,
    /// ISO 3166-1 alpha-3 code.
    #[serde(default)]
    pub cca3: String,
    /// International direct dialing prefix.
    #[serde(default)]
    pub idd: Idd,
    /// Flag image references.
    #[serde(default)]
    pub flags: Flags,
    /// Alternate spellings, abbreviations first.
    #[serde(default)]
    pub alt_spellings: Vec<String>,
}

/// Official/common names of a country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryName {
    /// Common name, e.g. `"Finland"`.
    pub common: String,
    /// Official name, e.g. `"Republic of Finland"`.
    pub official: String,
    /// Language code → native name.
    #[serde(default)]
    pub native_name: BTreeMap<String, NativeName>,
}

/// Native spelling of a country name in one language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeName {
    #[serde(default)]
    pub official: String,
    #[serde(default)]
    pub common: String,
}

/// International dialing prefix (`root` + one of `suffixes`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Idd {
    #[serde(default)]
    pub root: Option<String>,
    #[serde(default)]
    pub suffixes: Vec<String>,
}

/// Flag image URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flags {
    #[serde(default)]
    pub png: String,
    #[serde(default)]
    pub svg: String,
    /// Textual description of the flag, when the API provides one.
    #[serde(default)]
    pub alt: Option<String>,
}

// ============ Display Helpers ============

impl Country {
    /// Row identifier (the official name).
    pub fn id(&self) -> &str {
        &self.name.official
    }

    /// Common native name of the first native-name entry.
    ///
    /// Entries are taken in ascending language-code order. Empty when the
    /// country has no native names.
    pub fn native_common_name(&self) -> &str {
        self.name
            .native_name
            .values()
            .next()
            .map_or("", |n| n.common.as_str())
    }

    /// Last alternate spelling, or empty.
    pub fn last_alt_spelling(&self) -> &str {
        self.alt_spellings.last().map_or("", String::as_str)
    }

    /// Alt text for the flag image in the table.
    pub fn flag_alt_text(&self) -> String {
        format!("Flag of {}", self.last_alt_spelling())
    }

    /// Dialing root, e.g. `"+3"`, or empty.
    pub fn dialing_prefix(&self) -> &str {
        self.idd.root.as_deref().unwrap_or("")
    }

    /// Full dialing codes (`root` + each suffix).
    ///
    /// Falls back to the bare root when there are no suffixes.
    pub fn dialing_codes(&self) -> Vec<String> {
        let root = self.dialing_prefix();
        if root.is_empty() {
            return Vec::new();
        }
        if self.idd.suffixes.is_empty() {
            return vec![root.to_string()];
        }
        self.idd
            .suffixes
            .iter()
            .map(|suffix| format!("{root}{suffix}"))
            .collect()
    }

    /// Capitals joined with `", "`, or [`NOT_AVAILABLE`].
    pub fn capital_display(&self) -> String {
        match &self.capital {
            Some(capitals) if !capitals.is_empty() => capitals.join(", "),
            _ => NOT_AVAILABLE.to_string(),
        }
    }

    /// Language names joined with `", "`, or [`NOT_AVAILABLE`].
    pub fn languages_display(&self) -> String {
        match &self.languages {
            Some(languages) if !languages.is_empty() => languages
                .values()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", "),
            _ => NOT_AVAILABLE.to_string(),
        }
    }

    /// Subregion, or [`NOT_AVAILABLE`].
    pub fn subregion_display(&self) -> &str {
        self.subregion.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    /// Population with `,` thousands separators.
    pub fn population_display(&self) -> String {
        group_thousands(self.population)
    }
}

/// Format an integer with `,` every three digits.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
