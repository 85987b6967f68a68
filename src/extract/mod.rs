//! Grant row extraction from a parsed filing.
//!
//! Each candidate group is handled on its own: find the recipient, find the
//! amount, normalize the amount, drop subtotal lines. A group that fails any
//! step is skipped and recorded, never treated as an error.
//!
//! # Example
//!
//! ```
//! use grants990::core::ExtractorConfig;
//! use grants990::extract::GrantExtractor;
//! use grants990::xml::Document;
//!
//! let doc = Document::parse(
//!     "<Return><GrantOrContributionPdDurYrGrp>\
//!        <BusinessNameLine1Txt>Food Bank</BusinessNameLine1Txt>\
//!        <Amt>(1,234.56)</Amt>\
//!      </GrantOrContributionPdDurYrGrp></Return>",
//! ).unwrap();
//!
//! let extraction = GrantExtractor::new(ExtractorConfig::default()).extract(&doc);
//! assert_eq!(extraction.rows.len(), 1);
//! assert_eq!(extraction.rows[0].amount, -1234.56);
//! ```

use tracing::{debug, info};

use crate::core::{
    Extraction, ExtractorConfig, GrantError, GrantRow, SkipReason, SkippedGroup, parse_amount,
};
use crate::xml::{Document, Element, find_by_local_name, find_grant_like, first_text_for_tags};

/// Turns grant groups into [`GrantRow`]s according to an [`ExtractorConfig`].
#[derive(Debug, Clone, Default)]
pub struct GrantExtractor {
    config: ExtractorConfig,
}

impl GrantExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// The configuration this extractor was built with.
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Candidate groups under `root`, and whether the loose fallback was used.
    pub fn locate<'a, 'input>(
        &self,
        root: Element<'a, 'input>,
    ) -> (Vec<Element<'a, 'input>>, bool) {
        let groups = find_by_local_name(root, &self.config.group_tag);
        if groups.is_empty() && self.config.fallback_to_grant_like {
            debug!(
                group_tag = %self.config.group_tag,
                "no exact group elements, falling back to grant-like names"
            );
            return (find_grant_like(root), true);
        }
        (groups, false)
    }

    /// Build a row from one group, or say why it was skipped.
    pub fn extract_group(&self, group: Element<'_, '_>) -> Result<GrantRow, SkipReason> {
        let name = first_text_for_tags(group, self.config.name_tags.as_slice());
        let amount_raw = first_text_for_tags(group, self.config.amount_tags.as_slice());

        let (recipient, raw) = match (name, amount_raw) {
            (Some(name), Some(raw)) => (name, raw),
            (name, raw) => {
                return Err(SkipReason::MissingFields {
                    name_found: name.is_some(),
                    amount_found: raw.is_some(),
                });
            }
        };

        let Some(amount) = parse_amount(&raw) else {
            return Err(SkipReason::UnparseableAmount { raw, recipient });
        };

        if self.config.is_subtotal(&recipient) {
            return Err(SkipReason::Subtotal { recipient });
        }

        Ok(GrantRow { recipient, amount })
    }

    /// Run over the whole document. Never fails; see [`Extraction::into_rows`].
    pub fn extract(&self, document: &Document<'_>) -> Extraction {
        let (groups, used_fallback) = self.locate(document.root());
        debug!("found {} grant-like nodes", groups.len());

        let mut extraction = Extraction {
            groups_found: groups.len(),
            used_fallback,
            ..Default::default()
        };

        for (index, group) in groups.into_iter().enumerate() {
            match self.extract_group(group) {
                Ok(row) => extraction.rows.push(row),
                Err(reason) => {
                    let local_name = group.tag_name().name();
                    debug!(index, node = local_name, "skipping node: {reason}");
                    extraction.skipped.push(SkippedGroup {
                        index,
                        local_name: local_name.to_string(),
                        reason,
                    });
                }
            }
        }

        info!(
            rows = extraction.rows.len(),
            skipped = extraction.skipped.len(),
            total = extraction.total_amount(),
            "extraction finished"
        );
        extraction
    }
}

/// Extract grant rows with `config`, failing if none survive.
pub fn extract_grants(
    document: &Document<'_>,
    config: &ExtractorConfig,
) -> Result<Vec<GrantRow>, GrantError> {
    GrantExtractor::new(config.clone())
        .extract(document)
        .into_rows()
}
