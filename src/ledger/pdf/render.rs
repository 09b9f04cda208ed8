use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};

use super::layout::{TabularDocument, TextRun};
use crate::core::DaftarError;

/// Points per millimetre.
const PT_PER_MM: f32 = 72.0 / 25.4;

/// Render a laid-out document into PDF bytes.
///
/// Text is set in the standard Helvetica faces, which only cover Latin
/// characters; anything outside printable ASCII is replaced with `?`.
pub fn render_pdf(document: &TabularDocument) -> Result<Vec<u8>, DaftarError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    // 1. Fonts and shared resources
    let regular_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let bold_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => regular_id,
            "F2" => bold_id,
        },
    });

    // 2. One content stream per page
    let height_pt = document.height * PT_PER_MM;
    let mut kids = Vec::with_capacity(document.pages.len());
    for page in &document.pages {
        let content = Content {
            operations: page
                .runs
                .iter()
                .flat_map(|run| text_operations(run, height_pt))
                .collect::<Vec<_>>(),
        };
        let encoded = content
            .encode()
            .map_err(|e| DaftarError::Export(format!("failed to encode page content: {e}")))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(Object::Reference(page_id));
    }

    // 3. Page tree, catalog and document info
    let page_count = kids.len() as i64;
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => page_count,
        "Resources" => resources_id,
        "MediaBox" => vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(document.width * PT_PER_MM),
            Object::Real(height_pt),
        ],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal(latin_text(&document.title)),
        "Producer" => Object::string_literal("daftar"),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);
    doc.compress();

    let mut output = Vec::new();
    doc.save_to(&mut output)
        .map_err(|e| DaftarError::Export(format!("failed to save PDF: {e}")))?;
    Ok(output)
}

fn text_operations(run: &TextRun, height_pt: f32) -> Vec<Operation> {
    let font = if run.bold { "F2" } else { "F1" };
    vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec![font.into(), Object::Real(run.size)]),
        Operation::new(
            "Td",
            vec![
                Object::Real(run.x * PT_PER_MM),
                Object::Real(height_pt - run.y * PT_PER_MM),
            ],
        ),
        Operation::new("Tj", vec![Object::string_literal(latin_text(&run.text))]),
        Operation::new("ET", vec![]),
    ]
}

fn latin_text(s: &str) -> String {
    s.chars()
        .map(|c| if c == ' ' || c.is_ascii_graphic() { c } else { '?' })
        .collect()
}
