use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Language
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Tamil,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Tamil];

    pub fn as_str(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Tamil => "Tamil",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// LabelKey – the fixed UI strings
// ---------------------------------------------------------------------------

/// Fixed UI strings looked up in `labels.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKey {
    Title,
    GraphTitle,
    TableTitle,
    BetaLabel,
    MarketCapLabel,
    FullNameLabel,
    CapSegmentLabel,
    IndicesLabel,
    IsinLabel,
    ExportExcel,
    FilterBySector,
}

impl LabelKey {
    pub const ALL: [LabelKey; 11] = [
        LabelKey::Title,
        LabelKey::GraphTitle,
        LabelKey::TableTitle,
        LabelKey::BetaLabel,
        LabelKey::MarketCapLabel,
        LabelKey::FullNameLabel,
        LabelKey::CapSegmentLabel,
        LabelKey::IndicesLabel,
        LabelKey::IsinLabel,
        LabelKey::ExportExcel,
        LabelKey::FilterBySector,
    ];

    /// Key name in the JSON file.
    pub fn as_str(self) -> &'static str {
        match self {
            LabelKey::Title => "title",
            LabelKey::GraphTitle => "graph_title",
            LabelKey::TableTitle => "table_title",
            LabelKey::BetaLabel => "beta_label",
            LabelKey::MarketCapLabel => "marketcap_label",
            LabelKey::FullNameLabel => "fullname_label",
            LabelKey::CapSegmentLabel => "capseg_label",
            LabelKey::IndicesLabel => "indices_label",
            LabelKey::IsinLabel => "isin_label",
            LabelKey::ExportExcel => "export_excel",
            LabelKey::FilterBySector => "filter_by_sector",
        }
    }

    /// English text used when a language entry lacks this key.
    pub fn default_text(self) -> &'static str {
        match self {
            LabelKey::Title => "Bank Beta Dashboard",
            LabelKey::GraphTitle => "Beta vs Market Cap",
            LabelKey::TableTitle => "Bank Details",
            LabelKey::BetaLabel => "5Y Beta",
            LabelKey::MarketCapLabel => "Market Cap",
            LabelKey::FullNameLabel => "Full Name",
            LabelKey::CapSegmentLabel => "Cap Segment",
            LabelKey::IndicesLabel => "Indices",
            LabelKey::IsinLabel => "ISIN",
            LabelKey::ExportExcel => "Export to Excel",
            LabelKey::FilterBySector => "Filter by Sector",
        }
    }
}

// ---------------------------------------------------------------------------
// LanguageLabels / LabelConfig
// ---------------------------------------------------------------------------

/// All strings for one language.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LanguageLabels {
    #[serde(default)]
    pub sector_labels: BTreeMap<String, String>,
    #[serde(default)]
    pub index_labels: BTreeMap<String, String>,
    /// Fixed UI strings keyed by [`LabelKey::as_str`].
    #[serde(flatten)]
    pub strings: BTreeMap<String, String>,
}

impl LanguageLabels {
    pub fn text(&self, key: LabelKey) -> &str {
        self.strings
            .get(key.as_str())
            .map(String::as_str)
            .unwrap_or_else(|| key.default_text())
    }

    /// Translated sector name, or the code itself when untranslated.
    pub fn sector<'a>(&'a self, code: &'a str) -> &'a str {
        lookup_or_code(&self.sector_labels, code, "sector")
    }

    /// Translated index name, or the code itself when untranslated.
    pub fn index<'a>(&'a self, code: &'a str) -> &'a str {
        lookup_or_code(&self.index_labels, code, "index")
    }

    /// Fixed keys absent from this language.
    pub fn missing_keys(&self) -> Vec<LabelKey> {
        LabelKey::ALL
            .into_iter()
            .filter(|k| !self.strings.contains_key(k.as_str()))
            .collect()
    }
}

fn lookup_or_code<'a>(map: &'a BTreeMap<String, String>, code: &'a str, kind: &str) -> &'a str {
    match map.get(code) {
        Some(label) => label.as_str(),
        None => {
            log::trace!("no {kind} translation for {code:?}, showing code");
            code
        }
    }
}

/// Localized labels for every supported language, immutable after load.
///
/// Blocks for languages other than [`Language::ALL`] are skipped with a warning.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "BTreeMap<String, LanguageLabels>")]
pub struct LabelConfig {
    languages: BTreeMap<Language, LanguageLabels>,
}

impl From<BTreeMap<String, LanguageLabels>> for LabelConfig {
    fn from(raw: BTreeMap<String, LanguageLabels>) -> Self {
        let mut languages = BTreeMap::new();
        for (name, labels) in raw {
            match Language::ALL.into_iter().find(|l| l.as_str() == name) {
                Some(language) => {
                    languages.insert(language, labels);
                }
                None => log::warn!("labels: ignoring unsupported language {name:?}"),
            }
        }
        LabelConfig { languages }
    }
}

impl LabelConfig {
    /// Labels for `language`; an absent language resolves every key to its default.
    pub fn for_language(&self, language: Language) -> &LanguageLabels {
        static EMPTY: std::sync::OnceLock<LanguageLabels> = std::sync::OnceLock::new();
        self.languages
            .get(&language)
            .unwrap_or_else(|| EMPTY.get_or_init(LanguageLabels::default))
    }

    pub fn languages(&self) -> impl Iterator<Item = (&Language, &LanguageLabels)> {
        self.languages.iter()
    }

    /// Resolve a fixed UI string.
    pub fn text(&self, language: Language, key: LabelKey) -> &str {
        self.for_language(language).text(key)
    }

    pub fn title_for(&self, language: Language) -> &str {
        self.text(language, LabelKey::Title)
    }

    /// Resolve a sector code with identity fallback.
    pub fn resolve_sector<'a>(&'a self, language: Language, code: &'a str) -> &'a str {
        self.for_language(language).sector(code)
    }

    /// Resolve an index code with identity fallback.
    pub fn resolve_index<'a>(&'a self, language: Language, code: &'a str) -> &'a str {
        self.for_language(language).index(code)
    }
}
