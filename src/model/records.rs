use std::fmt;

use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    De,
    En,
}

impl Locale {
    pub fn code(self) -> &'static str {
        match self {
            Locale::De => "de",
            Locale::En => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A per-locale name pair loaded from the `*_de` / `*_en` catalog columns.
/// Either side may be empty when the source table has a gap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalizedName {
    pub de: String,
    pub en: String,
}

impl LocalizedName {
    pub fn new(de: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            de: de.into(),
            en: en.into(),
        }
    }

    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::De => &self.de,
            Locale::En => &self.en,
        }
    }

    /// Lookup-or-default: a missing translation falls back to the raw
    /// identifier instead of failing the run.
    pub fn or_id<'a>(&'a self, locale: Locale, id: &'a str) -> &'a str {
        let name = self.get(locale);
        if name.is_empty() { id } else { name }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSourceNode {
    pub id: String,
    pub parent_id: Option<String>,
    pub name: LocalizedName,
    pub source_file: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AntibioticRecord {
    pub code: String,
    pub class_id: String,
    pub full_name: LocalizedName,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganismRecord {
    pub code: String,
    pub class_id: String,
    pub full_name: LocalizedName,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AntibioticClass {
    pub id: String,
    pub name: LocalizedName,
}

/// Organism classes form a two-level hierarchy: a record with no parent
/// is a super-class (e.g. Gram-negative), one with a parent is a leaf
/// class whose parent must itself be parentless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganismClass {
    pub id: String,
    pub parent_id: Option<String>,
    pub name: LocalizedName,
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/records.rs"]
mod tests;
