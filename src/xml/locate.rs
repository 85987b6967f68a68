//! Namespace-agnostic lookups over a parsed tree.

use super::Element;

/// Every element at any depth (including `root`) whose local name is `name`,
/// in document order.
pub fn find_by_local_name<'a, 'input>(
    root: Element<'a, 'input>,
    name: &str,
) -> Vec<Element<'a, 'input>> {
    root.descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == name)
        .collect()
}

/// Every element whose lowercased local name contains "grant", in document order.
///
/// A loose fallback for filings that do not use the usual group element.
pub fn find_grant_like<'a, 'input>(root: Element<'a, 'input>) -> Vec<Element<'a, 'input>> {
    root.descendants()
        .filter(|n| n.is_element() && n.tag_name().name().to_lowercase().contains("grant"))
        .collect()
}

/// All text under `el`, concatenated in document order.
pub fn element_text(el: Element<'_, '_>) -> String {
    el.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

/// First non-empty trimmed text found under `group` for any of `candidate_tags`.
///
/// Tags are tried in list order; within a tag, matching descendants are tried
/// in document order. An earlier tag always wins over a later one, wherever the
/// elements sit in the subtree.
pub fn first_text_for_tags<S: AsRef<str>>(
    group: Element<'_, '_>,
    candidate_tags: &[S],
) -> Option<String> {
    candidate_tags.iter().find_map(|tag| {
        let tag = tag.as_ref();
        group
            .descendants()
            .skip(1)
            .filter(|n| n.is_element() && n.tag_name().name() == tag)
            .map(|n| element_text(n).trim().to_string())
            .find(|text| !text.is_empty())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::Document;

    const FILING: &str = r#"<Return xmlns="http://www.irs.gov/efile" xmlns:irs="http://www.irs.gov/efile">
  <ReturnData>
    <IRS990ScheduleI>
      <irs:GrantOrContributionPdDurYrGrp>
        <RecipientBusinessName>
          <BusinessNameLine1Txt>Food Bank</BusinessNameLine1Txt>
        </RecipientBusinessName>
        <CashGrantAmt>1,000</CashGrantAmt>
      </irs:GrantOrContributionPdDurYrGrp>
      <GrantOrContributionPdDurYrGrp>
        <RecipientBusinessName>
          <BusinessNameLine1Txt>Library</BusinessNameLine1Txt>
        </RecipientBusinessName>
      </GrantOrContributionPdDurYrGrp>
    </IRS990ScheduleI>
  </ReturnData>
</Return>"#;

    fn local_names(nodes: &[Element<'_, '_>]) -> Vec<String> {
        nodes.iter().map(|n| n.tag_name().name().to_string()).collect()
    }

    #[test]
    fn finds_groups_regardless_of_prefix() {
        let doc = Document::parse(FILING).unwrap();
        let groups = find_by_local_name(doc.root(), "GrantOrContributionPdDurYrGrp");
        assert_eq!(groups.len(), 2);
        assert_eq!(element_text(groups[1]).trim(), "Library");
    }

    #[test]
    fn namespace_uri_is_ignored() {
        let doc = Document::parse(
            r#"<Return xmlns:a="urn:a" xmlns:b="urn:b"><a:Amt>1</a:Amt><b:Amt>2</b:Amt><Amt>3</Amt></Return>"#,
        )
        .unwrap();
        let found = find_by_local_name(doc.root(), "Amt");
        let texts: Vec<String> = found.iter().map(|n| element_text(*n)).collect();
        assert_eq!(texts, ["1", "2", "3"]);
    }

    #[test]
    fn root_itself_can_match() {
        let doc = Document::parse("<Amt>5</Amt>").unwrap();
        assert_eq!(find_by_local_name(doc.root(), "Amt").len(), 1);
        assert!(find_by_local_name(doc.root(), "Missing").is_empty());
    }

    #[test]
    fn matches_come_in_document_order() {
        let doc = Document::parse("<A><B><C/></B><C><B/></C></A>").unwrap();
        let all = find_by_local_name(doc.root(), "C");
        assert_eq!(all.len(), 2);
        assert!(all[0].parent().is_some_and(|p| p.has_tag_name("B")));
        assert!(all[1].parent().is_some_and(|p| p.has_tag_name("A")));
    }

    #[test]
    fn grant_like_fallback_is_case_insensitive() {
        let doc = Document::parse(FILING).unwrap();
        assert_eq!(
            local_names(&find_grant_like(doc.root())),
            [
                "GrantOrContributionPdDurYrGrp",
                "CashGrantAmt",
                "GrantOrContributionPdDurYrGrp"
            ]
        );
    }

    #[test]
    fn list_priority_beats_document_position() {
        let doc = Document::parse(
            "<G><Amount>2</Amount><Nested><Amt>1</Amt></Nested></G>",
        )
        .unwrap();
        let text = first_text_for_tags(doc.root(), &["Amt", "Amount"]);
        assert_eq!(text.as_deref(), Some("1"));
    }

    #[test]
    fn empty_matches_fall_through() {
        let doc = Document::parse(
            "<G><Amt>  </Amt><Amt/><Amt> 7 </Amt><Amount>9</Amount></G>",
        )
        .unwrap();
        assert_eq!(
            first_text_for_tags(doc.root(), &["Amt", "Amount"]).as_deref(),
            Some("7")
        );

        let doc = Document::parse("<G><Amt/><Amount>9</Amount></G>").unwrap();
        assert_eq!(
            first_text_for_tags(doc.root(), &["Amt", "Amount"]).as_deref(),
            Some("9")
        );
    }

    #[test]
    fn group_element_itself_is_not_a_candidate() {
        let doc = Document::parse("<Amt>5</Amt>").unwrap();
        assert_eq!(first_text_for_tags(doc.root(), &["Amt"]), None);
    }

    #[test]
    fn nested_text_is_concatenated() {
        let doc = Document::parse(
            "<G><BusinessName><BusinessNameLine1Txt>Boys &amp; Girls</BusinessNameLine1Txt><BusinessNameLine2Txt>Club</BusinessNameLine2Txt></BusinessName></G>",
        )
        .unwrap();
        assert_eq!(
            first_text_for_tags(doc.root(), &["BusinessName"]).as_deref(),
            Some("Boys & GirlsClub")
        );
    }

    #[test]
    fn text_includes_cdata_and_character_references() {
        let doc = Document::parse("<N>A<![CDATA[ & ]]>B&#160;C<!-- note --></N>").unwrap();
        assert_eq!(element_text(doc.root()), "A & B\u{a0}C");
    }

    #[test]
    fn accepts_owned_tag_lists() {
        let doc = Document::parse("<G><Amt>3</Amt></G>").unwrap();
        let tags = vec![String::from("Amt")];
        assert_eq!(first_text_for_tags(doc.root(), tags.as_slice()).as_deref(), Some("3"));
    }
}
