use serde::{Deserialize, Serialize};

/// Contributor recorded for records that ship with the built-in database
pub const SYSTEM_CONTRIBUTOR: &str = "système";

/// How urgently a diagnosed problem should be dealt with.
///
/// The French labels used by the original database files are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[serde(alias = "critique")]
    Critical,
    #[serde(alias = "elevee", alias = "élevée")]
    High,
    #[serde(alias = "moyenne")]
    Medium,
    #[serde(alias = "faible")]
    Low,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Critical => write!(f, "critical"),
            Severity::High => write!(f, "high"),
            Severity::Medium => write!(f, "medium"),
            Severity::Low => write!(f, "low"),
        }
    }
}

impl Severity {
    /// Numeric urgency on a 1-10 scale, higher is more urgent.
    ///
    /// Only orders equally scored runners-up when a ranking is displayed.
    pub fn weight(&self) -> u8 {
        match self {
            Severity::Critical => 9,
            Severity::High => 7,
            Severity::Medium => 4,
            Severity::Low => 1,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Critical => "🚨",
            Severity::High => "⚠️",
            Severity::Medium => "🔧",
            Severity::Low => "ℹ️",
        }
    }

    /// Badge colour as an RGB triple
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Severity::Critical => (0xf4, 0x43, 0x36),
            Severity::High => (0xff, 0x98, 0x00),
            Severity::Medium => (0xff, 0xc1, 0x07),
            Severity::Low => (0x4c, 0xaf, 0x50),
        }
    }
}

/// A single diagnostic entry of the database.
///
/// When loaded from a database file the `key` comes from the enclosing
/// object key, so it may be absent from the record body itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticRecord {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(alias = "titre")]
    pub title: String,
    #[serde(alias = "urgence")]
    pub severity: Severity,
    #[serde(default)]
    pub causes: Vec<String>,
    #[serde(default)]
    pub solutions: Vec<String>,
    #[serde(
        default,
        alias = "cout_estime",
        skip_serializing_if = "Option::is_none"
    )]
    pub estimated_cost: Option<String>,
    #[serde(default = "default_contributor", alias = "contributeur")]
    pub contributor: String,
}

fn default_contributor() -> String {
    "inconnu".to_string()
}

impl DiagnosticRecord {
    /// A record can only ever score if at least one keyword has content
    pub fn is_matchable(&self) -> bool {
        self.keywords.iter().any(|k| !k.trim().is_empty())
    }

    /// Whether the record ships with the built-in database
    pub fn is_system(&self) -> bool {
        self.contributor == SYSTEM_CONTRIBUTOR
    }
}
