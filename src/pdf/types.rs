//! Page data types

use serde::{Deserialize, Serialize};

use crate::search;

/// One page of extracted text
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// 1-based page number, matching document order
    pub page_number: u32,
    /// Raw extracted text; line structure preserved, not otherwise normalized
    pub content: String,
}

/// Ordered pages of a single document.
///
/// Created once per upload and immutable afterwards; page numbers are
/// contiguous starting at 1.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageCollection {
    pages: Vec<Page>,
}

impl PageCollection {
    pub fn new(pages: Vec<Page>) -> Self {
        Self { pages }
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn iter(&self) -> impl Iterator<Item = &Page> {
        self.pages.iter()
    }

    /// Pages whose content contains the query, case-insensitively.
    ///
    /// An empty or whitespace-only query matches nothing.
    pub fn matching(&self, query: &str) -> Vec<&Page> {
        self.pages
            .iter()
            .filter(|page| search::page_matches(&page.content, query))
            .collect()
    }
}
