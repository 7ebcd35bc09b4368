use serde::{Deserialize, Serialize};

/// Password generation configuration.
///
/// The length is optional so that a missing or unparseable numeric
/// input can be represented; validation treats `None` as too short.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Requested password length.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<u16>,
    /// Include numeric digits.
    pub digits: bool,
    /// Include lowercase and uppercase roman letters.
    pub letters: bool,
    /// Include punctuation symbols.
    pub symbols: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            length: Some(8),
            digits: true,
            letters: true,
            symbols: true,
        }
    }
}

impl Config {
    /// Whether any character class is enabled.
    pub fn has_charset(&self) -> bool {
        self.digits || self.letters || self.symbols
    }
}
