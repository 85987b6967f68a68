//! XML loading and namespace-agnostic lookups for Form 990 e-files.
//!
//! Files are decoded according to their XML declaration and parsed with
//! `roxmltree`. Elements are addressed by local name only, so `irs:Amt` and
//! `Amt` are the same element to every lookup in this module.
//!
//! # Example
//!
//! ```
//! use grants990::xml::{Document, find_by_local_name, first_text_for_tags};
//!
//! let doc = Document::parse(
//!     r#"<irs:Return xmlns:irs="http://www.irs.gov/efile">
//!          <irs:Grp><irs:Amt>$1,000</irs:Amt></irs:Grp>
//!        </irs:Return>"#,
//! ).unwrap();
//!
//! let groups = find_by_local_name(doc.root(), "Grp");
//! assert_eq!(groups.len(), 1);
//! assert_eq!(first_text_for_tags(groups[0], &["Amt"]).as_deref(), Some("$1,000"));
//! ```

mod decode;
mod locate;
mod parse;

/// A node of a parsed [`Document`]. Cheap to copy.
pub type Element<'a, 'input> = roxmltree::Node<'a, 'input>;

pub use decode::{decode_xml, read_xml};
pub use locate::{element_text, find_by_local_name, find_grant_like, first_text_for_tags};
pub use parse::Document;
