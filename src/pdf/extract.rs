//! Plain-text extraction from raw content streams
//!
//! Only the character codes seen in the content stream are emitted. Font
//! encodings and ToUnicode maps are not resolved, so text set in fonts with
//! custom encodings will not come out readable.

use lopdf::Object;
use lopdf::content::{Content, Operation};

/// TJ adjustments below this (in thousandths of a text unit) read as a word gap
const TJ_SPACE_THRESHOLD: f32 = -100.0;

/// Extract the text shown by a page's concatenated content streams.
///
/// Fails if the content cannot be tokenized into operations.
pub fn extract_text(content: &[u8]) -> Result<String, lopdf::Error> {
    let content = Content::decode(content)?;

    let mut text = String::new();
    for operation in &content.operations {
        apply_operation(operation, &mut text);
    }

    Ok(text)
}

fn apply_operation(operation: &Operation, text: &mut String) {
    match operation.operator.as_str() {
        "Tj" => {
            if let Some(Object::String(bytes, _)) = operation.operands.first() {
                push_codes(bytes, text);
            }
        }
        "TJ" => {
            if let Some(Object::Array(items)) = operation.operands.first() {
                for item in items {
                    match item {
                        Object::String(bytes, _) => push_codes(bytes, text),
                        other => {
                            if let Ok(adjust) = other.as_float()
                                && adjust < TJ_SPACE_THRESHOLD
                            {
                                text.push(' ');
                            }
                        }
                    }
                }
            }
        }
        // ' moves to the next line then shows a string; " also sets spacing first
        "'" | "\"" => {
            text.push('\n');
            if let Some(Object::String(bytes, _)) = operation.operands.last() {
                push_codes(bytes, text);
            }
        }
        "T*" => text.push('\n'),
        "Td" | "TD" => {
            let ty = operation
                .operands
                .get(1)
                .and_then(|o| o.as_float().ok())
                .unwrap_or(0.0);
            if ty != 0.0 && !text.is_empty() {
                text.push('\n');
            }
        }
        _ => {}
    }
}

/// Each byte is taken as one character code
fn push_codes(bytes: &[u8], text: &mut String) {
    text.extend(bytes.iter().map(|&b| char::from(b)));
}
