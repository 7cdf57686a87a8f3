//! Domain types for the nine-section Business Model Canvas.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Placeholder content for sections the synthesizer did not produce.
pub const PLACEHOLDER: &str = "—";

/// The nine canonical canvas sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    KeyPartners,
    KeyActivities,
    ValuePropositions,
    CustomerRelationships,
    CustomerSegments,
    KeyResources,
    Channels,
    CostStructure,
    RevenueStreams,
}

impl Section {
    /// All nine sections in canonical order.
    pub const ALL: [Section; 9] = [
        Section::KeyPartners,
        Section::KeyActivities,
        Section::ValuePropositions,
        Section::CustomerRelationships,
        Section::CustomerSegments,
        Section::KeyResources,
        Section::Channels,
        Section::CostStructure,
        Section::RevenueStreams,
    ];

    /// The label used as the canvas mapping key and the block header.
    pub fn label(&self) -> &'static str {
        match self {
            Section::KeyPartners => "Key Partners",
            Section::KeyActivities => "Key Activities",
            Section::ValuePropositions => "Value Propositions",
            Section::CustomerRelationships => "Customer Relationships",
            Section::CustomerSegments => "Customer Segments",
            Section::KeyResources => "Key Resources",
            Section::Channels => "Channels",
            Section::CostStructure => "Cost Structure",
            Section::RevenueStreams => "Revenue Streams",
        }
    }

    /// Look up a section by its canonical label.
    pub fn from_label(label: &str) -> Option<Self> {
        Section::ALL.into_iter().find(|s| s.label() == label)
    }
}

/// Content of one canvas section: either a block of text or an ordered
/// list of items.
///
/// Untagged so JSON strings and string arrays map directly; any other
/// shape (numbers, nested objects) is rejected at deserialization time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlockContent {
    /// A single block of text, possibly multi-line.
    Text(String),
    /// An ordered sequence of text items.
    Items(Vec<String>),
}

impl BlockContent {
    /// True when the content carries no non-empty text at all.
    pub fn is_blank(&self) -> bool {
        match self {
            BlockContent::Text(text) => text.trim().is_empty(),
            BlockContent::Items(items) => items.iter().all(|item| item.trim().is_empty()),
        }
    }
}

impl From<String> for BlockContent {
    fn from(text: String) -> Self {
        BlockContent::Text(text)
    }
}

impl From<&str> for BlockContent {
    fn from(text: &str) -> Self {
        BlockContent::Text(text.to_string())
    }
}

impl From<Vec<String>> for BlockContent {
    fn from(items: Vec<String>) -> Self {
        BlockContent::Items(items)
    }
}

/// A Business Model Canvas: section label -> content.
///
/// Arbitrary keys are accepted (the degraded synthesis path adds a
/// `raw_output` key), but [`backfill_sections`](Self::backfill_sections)
/// guarantees the nine canonical keys are present before a canvas leaves
/// the synthesizer. The renderer tolerates missing keys regardless and
/// substitutes the placeholder itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BusinessModelCanvas {
    sections: BTreeMap<String, BlockContent>,
}

impl BusinessModelCanvas {
    /// Create an empty canvas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a section's content.
    pub fn insert(&mut self, key: impl Into<String>, content: impl Into<BlockContent>) {
        self.sections.insert(key.into(), content.into());
    }

    /// Get a section's content by key.
    pub fn get(&self, key: &str) -> Option<&BlockContent> {
        self.sections.get(key)
    }

    /// Number of keys in the canvas.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// True when the canvas has no keys at all.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Iterate over all keys and their content.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &BlockContent)> {
        self.sections.iter()
    }

    /// Fill every missing canonical section with the placeholder.
    pub fn backfill_sections(&mut self) {
        for section in Section::ALL {
            if !self.sections.contains_key(section.label()) {
                log::debug!("backfilling section '{}'", section.label());
                self.sections
                    .insert(section.label().to_string(), BlockContent::from(PLACEHOLDER));
            }
        }
    }

    /// True when all nine canonical sections are present.
    pub fn has_all_sections(&self) -> bool {
        Section::ALL
            .iter()
            .all(|section| self.sections.contains_key(section.label()))
    }
}

impl From<BTreeMap<String, BlockContent>> for BusinessModelCanvas {
    fn from(sections: BTreeMap<String, BlockContent>) -> Self {
        Self { sections }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_label_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_label(section.label()), Some(section));
        }
        assert_eq!(Section::from_label("Key partners"), None);
        assert_eq!(Section::from_label("raw_output"), None);
    }

    #[test]
    fn test_backfill_empty_canvas() {
        let mut canvas = BusinessModelCanvas::new();
        canvas.backfill_sections();

        assert_eq!(canvas.len(), 9);
        assert!(canvas.has_all_sections());
        for section in Section::ALL {
            assert_eq!(
                canvas.get(section.label()),
                Some(&BlockContent::from(PLACEHOLDER))
            );
        }
    }

    #[test]
    fn test_backfill_preserves_existing_sections() {
        let mut canvas = BusinessModelCanvas::new();
        canvas.insert("Key Partners", "We partner with installers.");
        canvas.backfill_sections();

        assert_eq!(canvas.len(), 9);
        assert_eq!(
            canvas.get("Key Partners"),
            Some(&BlockContent::from("We partner with installers."))
        );
        assert_eq!(
            canvas.get("Channels"),
            Some(&BlockContent::from(PLACEHOLDER))
        );
    }

    #[test]
    fn test_backfill_keeps_extra_keys() {
        let mut canvas = BusinessModelCanvas::new();
        canvas.insert("raw_output", "not json at all");
        canvas.backfill_sections();

        // Nine canonical sections plus the extra key.
        assert_eq!(canvas.len(), 10);
        assert!(canvas.has_all_sections());
    }

    #[test]
    fn test_content_deserializes_string_and_list() {
        let text: BlockContent = serde_json::from_str(r#""A single block.""#).unwrap();
        assert_eq!(text, BlockContent::Text("A single block.".to_string()));

        let items: BlockContent = serde_json::from_str(r#"["One.", "Two."]"#).unwrap();
        assert_eq!(
            items,
            BlockContent::Items(vec!["One.".to_string(), "Two.".to_string()])
        );
    }

    #[test]
    fn test_content_rejects_nested_structures() {
        assert!(serde_json::from_str::<BlockContent>(r#"{"nested": "no"}"#).is_err());
        assert!(serde_json::from_str::<BlockContent>("42").is_err());
        assert!(serde_json::from_str::<BlockContent>(r#"[{"nested": "no"}]"#).is_err());
    }

    #[test]
    fn test_canvas_serializes_transparently() {
        let mut canvas = BusinessModelCanvas::new();
        canvas.insert("Channels", vec!["Online store.".to_string()]);

        let json = serde_json::to_string(&canvas).unwrap();
        assert_eq!(json, r#"{"Channels":["Online store."]}"#);

        let back: BusinessModelCanvas = serde_json::from_str(&json).unwrap();
        assert_eq!(back, canvas);
    }

    #[test]
    fn test_is_blank() {
        assert!(BlockContent::from("   ").is_blank());
        assert!(BlockContent::Items(vec!["".to_string(), "  ".to_string()]).is_blank());
        assert!(!BlockContent::from("—").is_blank());
        assert!(!BlockContent::Items(vec!["x".to_string()]).is_blank());
    }
}
