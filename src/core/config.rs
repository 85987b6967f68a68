use serde::{Deserialize, Serialize};
use std::path::Path;

use super::GrantError;

/// Local name of the Schedule I grant group in Form 990 e-files.
pub const DEFAULT_GROUP_TAG: &str = "GrantOrContributionPdDurYrGrp";

/// Recipient name elements, most specific first.
pub const DEFAULT_NAME_TAGS: &[&str] = &[
    "BusinessNameLine1Txt",
    "BusinessNameLine1",
    "BusinessName",
    "RecipientBusinessName",
];

/// Amount elements, most specific first.
pub const DEFAULT_AMOUNT_TAGS: &[&str] = &[
    "Amt",
    "Amount",
    "GrantAmount",
    "ContributionAmt",
    "ContributionAmount",
];

/// Recipients containing this (case-insensitively) are treated as subtotals.
pub const DEFAULT_SUBTOTAL_MARKER: &str = "total";

/// Which elements the extractor looks at.
///
/// Every key is optional in serialized form; missing keys take the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Local name of the repeating grant group element.
    pub group_tag: String,
    /// Candidate local names for the recipient, in priority order.
    pub name_tags: Vec<String>,
    /// Candidate local names for the amount, in priority order.
    pub amount_tags: Vec<String>,
    /// Case-insensitive substring marking subtotal rows. Empty disables the filter.
    pub subtotal_marker: String,
    /// When no `group_tag` element exists, fall back to every element whose
    /// local name contains "grant".
    pub fallback_to_grant_like: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            group_tag: DEFAULT_GROUP_TAG.into(),
            name_tags: DEFAULT_NAME_TAGS.iter().map(|s| s.to_string()).collect(),
            amount_tags: DEFAULT_AMOUNT_TAGS.iter().map(|s| s.to_string()).collect(),
            subtotal_marker: DEFAULT_SUBTOTAL_MARKER.into(),
            fallback_to_grant_like: false,
        }
    }
}

impl ExtractorConfig {
    /// Parse a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, GrantError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| GrantError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON config file.
    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self, GrantError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| GrantError::Config(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&json)
    }

    /// Reject configs that could never produce a row.
    pub fn validate(&self) -> Result<(), GrantError> {
        if self.group_tag.trim().is_empty() {
            return Err(GrantError::Config("group_tag must not be empty".into()));
        }
        if self.name_tags.is_empty() {
            return Err(GrantError::Config("name_tags must not be empty".into()));
        }
        if self.amount_tags.is_empty() {
            return Err(GrantError::Config("amount_tags must not be empty".into()));
        }
        Ok(())
    }

    /// Replace the group element's local name.
    pub fn with_group_tag(mut self, tag: impl Into<String>) -> Self {
        self.group_tag = tag.into();
        self
    }

    /// Allow the "grant"-substring search when no exact group exists.
    pub fn with_fallback(mut self, enabled: bool) -> Self {
        self.fallback_to_grant_like = enabled;
        self
    }

    /// Whether `recipient` names a subtotal rather than a real grantee.
    pub fn is_subtotal(&self, recipient: &str) -> bool {
        if self.subtotal_marker.is_empty() {
            return false;
        }
        recipient
            .to_lowercase()
            .contains(&self.subtotal_marker.to_lowercase())
    }
}
