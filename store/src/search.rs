use serde::Serialize;

use crate::fields::{field_value, to_document};

/// Output of `search_records`.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<R> {
    pub items: Vec<R>,
    pub total: usize,
    pub has_results: bool,
}

impl<R> SearchResult<R> {
    fn new(items: Vec<R>) -> Self {
        let total = items.len();
        Self {
            items,
            total,
            has_results: total > 0,
        }
    }
}

/// Keep the records where at least one of `fields` contains `query`,
/// ignoring case.
///
/// A blank or whitespace-only query keeps everything in the original
/// order. Any other query is matched as typed, inner and outer spaces
/// included. Missing and null fields never match.
pub fn search_records<R, F>(items: &[R], fields: &[F], query: &str) -> SearchResult<R>
where
    R: Serialize + Clone,
    F: AsRef<str>,
{
    if query.trim().is_empty() {
        return SearchResult::new(items.to_vec());
    }
    let query = query.to_lowercase();

    let matches = items
        .iter()
        .filter(|record| {
            let document = to_document(*record);
            fields.iter().any(|field| {
                field_value(&document, field.as_ref())
                    .search_text()
                    .is_some_and(|text| text.to_lowercase().contains(&query))
            })
        })
        .cloned()
        .collect();

    SearchResult::new(matches)
}
