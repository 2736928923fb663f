//! PDF text extraction using lopdf

use lopdf::Document;
use thiserror::Error;

use super::types::{Page, PageCollection};

/// PDF extraction errors
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The bytes could not be parsed as a PDF document
    #[error("Failed to parse PDF: {0}")]
    InvalidPdf(String),
    /// The document opened but a page's text could not be extracted
    #[error("Failed to extract text from page {page}: {message}")]
    PageText { page: u32, message: String },
}

/// Extract the ordered page texts from a PDF.
///
/// Every page in the document yields exactly one [`Page`]; none are skipped,
/// merged, or reordered. Page numbers are assigned 1..N in physical order.
/// Malformed or non-PDF input is an [`ExtractError::InvalidPdf`], never an
/// empty collection.
pub fn extract_pages(bytes: &[u8]) -> Result<PageCollection, ExtractError> {
    let doc = Document::load_mem(bytes).map_err(|e| ExtractError::InvalidPdf(e.to_string()))?;

    // BTreeMap iterates in document page order; keys are lopdf's own
    // 1-based page numbers.
    let page_numbers = doc.get_pages();

    let mut pages = Vec::with_capacity(page_numbers.len());
    for (index, source_number) in page_numbers.keys().enumerate() {
        let ordinal = index as u32 + 1;
        let content = doc
            .extract_text(&[*source_number])
            .map_err(|e| ExtractError::PageText {
                page: ordinal,
                message: e.to_string(),
            })?;
        pages.push(Page {
            page_number: ordinal,
            content,
        });
    }

    Ok(PageCollection::new(pages))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};

    /// Build a minimal PDF where each entry in `texts` becomes one page.
    fn pdf_with_pages(texts: &[&str]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for text in texts {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id = doc.add_object(Stream::new(
                dictionary! {},
                content.encode().expect("encode content stream"),
            ));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).expect("serialize test PDF");
        bytes
    }

    #[test]
    fn extracts_one_entry_per_page_in_order() {
        let bytes = pdf_with_pages(&["Revenue grew 10%", "Expenses fell", "Outlook unchanged"]);
        let pages = extract_pages(&bytes).expect("valid PDF");

        assert_eq!(pages.len(), 3);
        let numbers: Vec<u32> = pages.iter().map(|p| p.page_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert!(pages.pages()[0].content.contains("Revenue grew 10%"));
        assert!(pages.pages()[1].content.contains("Expenses fell"));
        assert!(pages.pages()[2].content.contains("Outlook unchanged"));
    }

    #[test]
    fn garbage_bytes_are_an_extraction_error() {
        let result = extract_pages(b"this is not a pdf at all");
        assert!(matches!(result, Err(ExtractError::InvalidPdf(_))));
    }

    #[test]
    fn truncated_pdf_is_an_extraction_error() {
        let mut bytes = pdf_with_pages(&["Revenue grew 10%"]);
        bytes.truncate(bytes.len() / 3);
        assert!(extract_pages(&bytes).is_err());
    }
}
