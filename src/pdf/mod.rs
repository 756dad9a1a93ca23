//! Text locator - finds keywords in the text of a PDF page
//!
//! Parsing is delegated to a [`TextSource`]. The production source is
//! [`LopdfSource`]; tests substitute in-memory sources.

mod extract;
mod lopdf_source;

pub use extract::extract_text;
pub use lopdf_source::LopdfSource;

use crate::error::LocateError;
use std::path::Path;
use tracing::trace;

/// Page searched for keywords (1-based). Later pages are never inspected.
pub const SEARCH_PAGE: u32 = 1;

/// Anything that can produce the text of a PDF page
pub trait TextSource {
    /// Extract the text of `page` (1-based) from the PDF at `path`
    fn page_text(&self, path: &Path, page: u32) -> Result<String, LocateError>;
}

impl<T: TextSource + ?Sized> TextSource for &T {
    fn page_text(&self, path: &Path, page: u32) -> Result<String, LocateError> {
        (**self).page_text(path, page)
    }
}

/// Check whether `keyword` occurs in the first page of the PDF at `path`.
///
/// Matching is a literal, case-sensitive substring test with no whitespace
/// or ligature normalization.
pub fn locate<S: TextSource>(source: &S, path: &Path, keyword: &str) -> Result<bool, LocateError> {
    let text = source.page_text(path, SEARCH_PAGE)?;
    let found = text.contains(keyword);
    trace!(
        "'{}' {} in {}",
        keyword,
        if found { "found" } else { "not found" },
        path.display()
    );
    Ok(found)
}
