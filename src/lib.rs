//! # grants990
//!
//! Extracts grant and contribution records (recipient, amount) from IRS
//! Form 990 XML e-files and writes them to CSV.
//!
//! Form 990 filings from different years and preparers disagree on element
//! names and namespaces, so every lookup here goes by local name and tries an
//! ordered list of alternative tags. Amounts are free text in the wild
//! (`$1,000.00`, `(250)`) and are normalized to `f64`.
//!
//! ## Quick Start
//!
//! ```rust
//! use grants990::core::ExtractorConfig;
//! use grants990::extract::extract_grants;
//! use grants990::export::write_csv;
//! use grants990::xml::Document;
//!
//! let doc = Document::parse(r#"
//!   <Return xmlns="http://www.irs.gov/efile">
//!     <GrantOrContributionPdDurYrGrp>
//!       <RecipientBusinessName><BusinessNameLine1Txt>Food Bank</BusinessNameLine1Txt></RecipientBusinessName>
//!       <Amt>$500.00</Amt>
//!     </GrantOrContributionPdDurYrGrp>
//!   </Return>"#).unwrap();
//!
//! let rows = extract_grants(&doc, &ExtractorConfig::default()).unwrap();
//! let mut out = Vec::new();
//! write_csv(&rows, &mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "recipient,amount\nFood Bank,500.0\n");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `cli` (default) | The `grants990` binary (argument parsing, logging setup) |

pub mod core;
pub mod export;
pub mod extract;
pub mod xml;

// Re-export core types at crate root for convenience
pub use crate::core::*;
