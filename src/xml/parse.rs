use roxmltree::ParsingOptions;

use super::Element;
use crate::core::GrantError;

/// A parsed, well-formed XML document borrowing its source text.
#[derive(Debug)]
pub struct Document<'input> {
    tree: roxmltree::Document<'input>,
}

impl<'input> Document<'input> {
    /// Parse an XML string.
    ///
    /// Anything that is not well-formed XML (bad attributes, invalid names,
    /// unbound namespace prefixes, unknown entities, mismatched tags) is a
    /// [`GrantError::Xml`]. Internal DTD subsets are allowed.
    pub fn parse(xml: &'input str) -> Result<Self, GrantError> {
        let xml = xml.strip_prefix('\u{feff}').unwrap_or(xml);
        let mut options = ParsingOptions::default();
        options.allow_dtd = true;

        let tree = roxmltree::Document::parse_with_options(xml, options)
            .map_err(|e| GrantError::Xml(format!("parse error: {e}")))?;
        Ok(Self { tree })
    }

    /// The document element.
    pub fn root(&self) -> Element<'_, 'input> {
        self.tree.root_element()
    }
}
