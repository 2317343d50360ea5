//! List envelopes and pagination parameters.

use serde::{Deserialize, Serialize};

/// The envelope every list endpoint wraps its records in.
///
/// Page-numbered endpoints fill `page`/`page_size`, windowed ones fill
/// `limit`/`offset`. Both are passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub page_size: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub offset: Option<u32>,
}

impl<T> Page<T> {
    /// Drop the envelope.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Whether the backend reports more records past this page.
    pub fn has_more(&self) -> bool {
        let Some(total) = self.total else {
            return false;
        };
        let seen = match (self.page, self.page_size, self.offset) {
            (Some(page), Some(size), _) => u64::from(page.saturating_sub(1)) * u64::from(size),
            (_, _, Some(offset)) => u64::from(offset),
            _ => 0,
        };
        seen + (self.items.len() as u64) < total
    }
}

/// Query parameters for list endpoints. Unset values are omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PageQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl PageQuery {
    /// Page-numbered query (chats, prompts).
    pub fn page(page: u32, page_size: u32) -> Self {
        Self {
            page: Some(page),
            page_size: Some(page_size),
            ..Default::default()
        }
    }

    /// Windowed query (user states).
    pub fn window(limit: u32, offset: u32) -> Self {
        Self {
            limit: Some(limit),
            offset: Some(offset),
            ..Default::default()
        }
    }

    /// Count-only query (deleted messages).
    pub fn limit(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            ..Default::default()
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Encode as `key=value` pairs in a fixed order.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(size) = self.page_size {
            pairs.push(("page_size", size.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset", offset.to_string()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        pairs
    }
}
