//! Core types for elemchunk.
//!
//! - [`Element`]: a unit of extracted document content
//! - [`ElementCategory`]: classification of an element
//! - [`ElementMetadata`]: provenance carried alongside the text

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Elements
// ============================================================================

/// A unit of document content produced by partitioning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Unique element identifier
    pub id: Uuid,
    /// Element classification
    pub category: ElementCategory,
    /// Text content
    pub text: String,
    /// Provenance metadata
    #[serde(default)]
    pub metadata: ElementMetadata,
}

impl Element {
    /// Create an element with a fresh identifier and empty metadata.
    pub fn new(category: ElementCategory, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            category,
            text: text.into(),
            metadata: ElementMetadata::default(),
        }
    }

    /// Create a `Title` element.
    pub fn title(text: impl Into<String>) -> Self {
        Self::new(ElementCategory::Title, text)
    }

    /// Create a `NarrativeText` element.
    pub fn narrative(text: impl Into<String>) -> Self {
        Self::new(ElementCategory::NarrativeText, text)
    }

    /// Create a `Table` element.
    pub fn table(text: impl Into<String>) -> Self {
        Self::new(ElementCategory::Table, text)
    }

    /// Create a `CompositeElement`, the output unit of text chunking.
    pub fn composite(text: impl Into<String>) -> Self {
        Self::new(ElementCategory::CompositeElement, text)
    }

    /// Replace the metadata.
    #[must_use]
    pub fn with_metadata(mut self, metadata: ElementMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Set the page number.
    #[must_use]
    pub fn with_page_number(mut self, page_number: u32) -> Self {
        self.metadata.page_number = Some(page_number);
        self
    }

    /// Whether this element holds tabular content.
    pub fn is_table(&self) -> bool {
        matches!(
            self.category,
            ElementCategory::Table | ElementCategory::TableChunk
        )
    }

    /// Length of the text in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Element classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementCategory {
    Title,
    NarrativeText,
    ListItem,
    Text,
    Address,
    EmailAddress,
    FigureCaption,
    Formula,
    Header,
    Footer,
    PageBreak,
    Image,
    Table,
    TableChunk,
    CompositeElement,
    UncategorizedText,
}

/// Provenance metadata for an element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementMetadata {
    /// Source file name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Page number (1-indexed)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    /// Detected languages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
    /// Set on every chunk but the first produced from a single oversized element
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_continuation: Option<bool>,
    /// Source elements a chunk was formed from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orig_elements: Option<Vec<Element>>,
}
