//! Document builders shared by unit tests.

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, ObjectId, Stream, dictionary};

use crate::io::{InputFile, SourceDocument};

/// Build a document whose page `n` draws the text `Page n`.
///
/// `Resources` and `MediaBox` live on the page tree node, so pages only get
/// them through inheritance.
pub(crate) fn document_with_pages(pages: usize) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let kids: Vec<Object> = (1..=pages)
        .map(|n| {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 24.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new("Tj", vec![Object::string_literal(format!("Page {n}"))]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id = doc.add_object(Stream::new(
                dictionary! {},
                content.encode().unwrap(),
            ));
            doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            })
            .into()
        })
        .collect();

    doc.objects.insert(
        pages_id,
        dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => pages as i64,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        }
        .into(),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    doc
}

/// Serialized form of [`document_with_pages`].
pub(crate) fn pdf_bytes(pages: usize) -> Vec<u8> {
    let mut bytes = Vec::new();
    document_with_pages(pages).save_to(&mut bytes).unwrap();
    bytes
}

pub(crate) fn input_file(name: &str, pages: usize) -> InputFile {
    InputFile::new(name, pdf_bytes(pages))
}

pub(crate) fn source(name: &str, pages: usize) -> SourceDocument {
    SourceDocument::from_document(name, document_with_pages(pages))
}

/// The `Page n` labels of every page of `doc`, in page order.
pub(crate) fn page_labels(doc: &Document) -> Vec<String> {
    doc.get_pages()
        .values()
        .map(|&page_id| page_label(doc, page_id))
        .collect()
}

fn page_label(doc: &Document, page_id: ObjectId) -> String {
    let content = doc.get_page_content(page_id).unwrap_or_default();
    let text = String::from_utf8_lossy(&content);

    text.split_once('(')
        .and_then(|(_, rest)| rest.split_once(')'))
        .map(|(label, _)| label.to_string())
        .unwrap_or_default()
}

/// Page labels of a serialized PDF.
pub(crate) fn labels_of(bytes: &[u8]) -> Vec<String> {
    Document::load_mem(bytes)
        .map(|doc| page_labels(&doc))
        .unwrap_or_default()
}
