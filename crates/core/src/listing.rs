//! Shared listing contract: filter, paginate, wrap.
//!
//! Every list endpoint follows the same shape: take the full in-memory
//! collection, apply zero or more ANDed predicates in a single linear pass,
//! slice the survivors by `page`/`per_page`, and wrap the slice in a
//! `{data, meta}` envelope. This module owns the slicing and the envelope;
//! the predicates live with their entities.

use serde::Serialize;

use crate::error::{DomainError, DomainResult};

/// Validated pagination parameters.
///
/// `page` is 1-indexed. Construction rejects zero for either field; negative
/// values never get this far because the HTTP layer deserializes both as
/// unsigned integers.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    per_page: u32,
}

impl PageRequest {
    pub const DEFAULT_PAGE: u32 = 1;
    pub const DEFAULT_PER_PAGE: u32 = 15;

    /// Build a page request from optional query parameters, applying defaults.
    pub fn new(page: Option<u32>, per_page: Option<u32>) -> DomainResult<Self> {
        let page = page.unwrap_or(Self::DEFAULT_PAGE);
        let per_page = per_page.unwrap_or(Self::DEFAULT_PER_PAGE);

        if page == 0 {
            return Err(DomainError::validation("page must be at least 1"));
        }
        if per_page == 0 {
            return Err(DomainError::validation("per_page must be at least 1"));
        }

        Ok(Self { page, per_page })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: Self::DEFAULT_PAGE,
            per_page: Self::DEFAULT_PER_PAGE,
        }
    }
}

/// Pagination metadata describing the filtered collection, not the slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub current_page: u32,
    pub per_page: u32,
    /// Count after filtering, before slicing.
    pub total: u64,
    /// `ceil(total / per_page)`; zero for an empty collection.
    pub last_page: u64,
}

/// One page of results plus its metadata.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

/// Slice an already-filtered collection into the requested page.
///
/// Out-of-range pages yield an empty `data` with `total`/`last_page`
/// unchanged; this is not an error.
pub fn paginate<T>(items: Vec<T>, request: &PageRequest) -> Page<T> {
    let total = items.len() as u64;
    let per_page = u64::from(request.per_page);
    let last_page = (total + per_page - 1) / per_page;

    let start = (request.page as usize - 1).saturating_mul(request.per_page as usize);
    let data: Vec<T> = items
        .into_iter()
        .skip(start)
        .take(request.per_page as usize)
        .collect();

    Page {
        data,
        meta: PageMeta {
            current_page: request.page,
            per_page: request.per_page,
            total,
            last_page,
        },
    }
}

/// Case-insensitive free-text match: the lowercased query must be a substring
/// of at least one of the designated searchable fields.
pub fn search_matches(query: &str, fields: &[&str]) -> bool {
    let needle = query.to_lowercase();
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}
