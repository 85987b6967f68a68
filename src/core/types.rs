use serde::{Deserialize, Serialize};
use std::fmt;

use super::GrantError;

/// One extracted grant: who received it and how much.
///
/// Invariant: `recipient` is non-empty and `amount` is finite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrantRow {
    /// Trimmed recipient name.
    pub recipient: String,
    /// Normalized amount; parenthesized or minus-signed inputs are negative.
    pub amount: f64,
}

impl GrantRow {
    /// Build a row. Callers are responsible for the invariants above.
    pub fn new(recipient: impl Into<String>, amount: f64) -> Self {
        Self {
            recipient: recipient.into(),
            amount,
        }
    }
}

/// Why a candidate group produced no row.
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    /// The recipient name, the amount, or both could not be found.
    MissingFields { name_found: bool, amount_found: bool },
    /// An amount was found but did not normalize to a number.
    UnparseableAmount { raw: String, recipient: String },
    /// The recipient looks like a subtotal line ("Total Grants", ...).
    Subtotal { recipient: String },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingFields {
                name_found,
                amount_found,
            } => write!(
                f,
                "name found: {name_found}, amount found: {amount_found}"
            ),
            SkipReason::UnparseableAmount { raw, recipient } => {
                write!(f, "couldn't parse amount: {raw:?} for name: {recipient:?}")
            }
            SkipReason::Subtotal { recipient } => {
                write!(f, "subtotal row: {recipient:?}")
            }
        }
    }
}

/// A candidate group that was dropped, with its position among the candidates.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedGroup {
    /// Zero-based index of the group in document order.
    pub index: usize,
    /// Local name of the group element.
    pub local_name: String,
    pub reason: SkipReason,
}

/// Outcome of running the extractor over one document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    /// Number of candidate group elements inspected.
    pub groups_found: usize,
    /// True when the exact group tag matched nothing and the
    /// "grant"-substring fallback supplied the candidates.
    pub used_fallback: bool,
    /// Surviving rows, in document order.
    pub rows: Vec<GrantRow>,
    /// Dropped groups, in document order.
    pub skipped: Vec<SkippedGroup>,
}

impl Extraction {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sum of all extracted amounts.
    pub fn total_amount(&self) -> f64 {
        self.rows.iter().map(|r| r.amount).sum()
    }

    /// Take the rows, failing with [`GrantError::EmptyResult`] if there are none.
    pub fn into_rows(self) -> Result<Vec<GrantRow>, GrantError> {
        if self.rows.is_empty() {
            return Err(GrantError::EmptyResult {
                groups_found: self.groups_found,
            });
        }
        Ok(self.rows)
    }
}
