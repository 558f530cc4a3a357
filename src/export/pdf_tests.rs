use super::*;

fn image_count(doc: &Document) -> usize {
    doc.objects
        .values()
        .filter(|object| match object {
            Object::Stream(stream) => {
                let subtype = stream.dict.get(b"Subtype").and_then(Object::as_name).ok();
                subtype == Some(b"Image".as_slice())
            }
            _ => false,
        })
        .count()
}

#[test]
fn pages_share_one_image() {
    let bitmap = Bitmap::filled(4, 8, [15, 23, 42]);
    let mut document = LopdfAssembler::new().new_document(PageSize::A4);
    document.place_image(&bitmap, 0.0, 0.0, 595.28, 1190.56).unwrap();
    document.add_page().unwrap();
    document.place_image(&bitmap, 0.0, -841.89, 595.28, 1190.56).unwrap();

    let bytes = document.finish().unwrap();
    assert!(bytes.starts_with(b"%PDF-1.5"));

    let doc = Document::load_mem(&bytes).unwrap();
    assert_eq!(doc.get_pages().len(), 2);
    assert_eq!(image_count(&doc), 1);
}

#[test]
fn single_page_document() {
    let bitmap = Bitmap::filled(2, 2, [255, 255, 255]);
    let mut document = LopdfAssembler::new().new_document(PageSize::Letter);
    document.place_image(&bitmap, 0.0, 0.0, 612.0, 612.0).unwrap();

    let doc = Document::load_mem(&document.finish().unwrap()).unwrap();
    assert_eq!(doc.get_pages().len(), 1);
}

#[test]
fn empty_document_still_has_a_page() {
    let document = LopdfAssembler::new().new_document(PageSize::A4);
    let doc = Document::load_mem(&document.finish().unwrap()).unwrap();
    assert_eq!(doc.get_pages().len(), 1);
    assert_eq!(image_count(&doc), 0);
}
