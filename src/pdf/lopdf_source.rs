//! Pure Rust PDF text source backed by lopdf

use super::{TextSource, extract_text};
use crate::error::LocateError;
use lopdf::{Document, Object};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// Reads page text with `lopdf`
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfSource;

impl LopdfSource {
    pub fn new() -> Self {
        Self
    }

    /// Load a document, keeping the file handle only for the duration of the parse
    fn load(path: &Path) -> Result<Document, LocateError> {
        let file = File::open(path).map_err(|source| LocateError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let document =
            Document::load_from(BufReader::new(file)).map_err(|e| LocateError::PdfOpen {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        if document.is_encrypted() {
            return Err(LocateError::PdfOpen {
                path: path.to_path_buf(),
                reason: "document is encrypted".to_string(),
            });
        }

        Ok(document)
    }

    /// Concatenate every content stream of a page in stream order
    fn page_content(document: &Document, path: &Path, page: u32) -> Result<Vec<u8>, LocateError> {
        let page_id = *document
            .get_pages()
            .get(&page)
            .ok_or_else(|| LocateError::PageFetch {
                path: path.to_path_buf(),
                page,
            })?;

        let stream_ids = document.get_page_contents(page_id);
        debug!(
            "{}: page {} has {} content stream(s)",
            path.display(),
            page,
            stream_ids.len()
        );

        let mut content = Vec::new();
        for stream_id in stream_ids {
            let stream = document
                .get_object(stream_id)
                .and_then(Object::as_stream)
                .map_err(|e| LocateError::ContentStream {
                    path: path.to_path_buf(),
                    page,
                    reason: e.to_string(),
                })?;

            // Streams without a filter are stored raw
            let data = if stream.dict.has(b"Filter") {
                stream
                    .decompressed_content()
                    .map_err(|e| LocateError::ContentStream {
                        path: path.to_path_buf(),
                        page,
                        reason: format!("failed to decode stream {:?}: {}", stream_id, e),
                    })?
            } else {
                stream.content.clone()
            };

            if !content.is_empty() {
                content.push(b'\n');
            }
            content.extend_from_slice(&data);
        }

        Ok(content)
    }
}

impl TextSource for LopdfSource {
    fn page_text(&self, path: &Path, page: u32) -> Result<String, LocateError> {
        let document = Self::load(path)?;
        let content = Self::page_content(&document, path, page)?;

        extract_text(&content).map_err(|e| LocateError::TextExtraction {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}
