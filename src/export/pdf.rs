//! PDF assembly with lopdf.
//!
//! The captured bitmap is embedded once as an image XObject and every page
//! draws it at its own offset.

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, ObjectId, Stream, dictionary};
use tracing::debug;

use super::{Bitmap, DocumentAssembler, PageDocument, PageSize};
use crate::error::{DashboardError, Result};

const IMAGE_NAME: &[u8] = b"Im0";

/// Builds portrait PDF documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfAssembler;

impl LopdfAssembler {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DocumentAssembler for LopdfAssembler {
    fn new_document(&self, page: PageSize) -> Box<dyn PageDocument> {
        Box::new(LopdfDocument::new(page))
    }
}

struct LopdfDocument {
    doc: Document,
    pages_id: ObjectId,
    width: f64,
    height: f64,
    pages: Vec<Vec<Operation>>,
    /// Embedded image, keyed by the address of its pixel buffer.
    image: Option<(usize, ObjectId)>,
}

impl LopdfDocument {
    fn new(page: PageSize) -> Self {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let (width, height) = page.dimensions();
        Self {
            doc,
            pages_id,
            width,
            height,
            pages: vec![Vec::new()],
            image: None,
        }
    }

    fn embed(&mut self, image: &Bitmap) -> ObjectId {
        let key = image.rgb.as_ptr() as usize;
        if let Some((cached, id)) = self.image
            && cached == key
        {
            return id;
        }
        let stream = Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => i64::from(image.width),
                "Height" => i64::from(image.height),
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8_i64,
            },
            image.rgb.clone(),
        );
        let id = self.doc.add_object(stream);
        debug!(width = image.width, height = image.height, "embedded page image");
        self.image = Some((key, id));
        id
    }
}

#[allow(clippy::cast_possible_truncation)] // PDF reals are single precision
fn real(value: f64) -> Object {
    Object::Real(value as f32)
}

fn export_error(context: &str, e: impl std::fmt::Display) -> DashboardError {
    DashboardError::export_failure(format!("{context}: {e}"))
}

impl PageDocument for LopdfDocument {
    fn add_page(&mut self) -> Result<()> {
        self.pages.push(Vec::new());
        Ok(())
    }

    fn place_image(
        &mut self,
        image: &Bitmap,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Result<()> {
        self.embed(image);
        // PDF user space grows upwards from the bottom-left corner.
        let bottom = self.height - (y + height);
        let operations = [
            Operation::new("q", vec![]),
            Operation::new(
                "cm",
                vec![real(width), real(0.0), real(0.0), real(height), real(x), real(bottom)],
            ),
            Operation::new("Do", vec![Object::Name(IMAGE_NAME.to_vec())]),
            Operation::new("Q", vec![]),
        ];
        let page = self
            .pages
            .last_mut()
            .ok_or_else(|| DashboardError::export_failure("document has no pages"))?;
        page.extend(operations);
        Ok(())
    }

    fn finish(mut self: Box<Self>) -> Result<Vec<u8>> {
        let resources = match self.image {
            Some((_, image_id)) => dictionary! {
                "XObject" => dictionary! { "Im0" => image_id },
            },
            None => dictionary! {},
        };
        let resources_id = self.doc.add_object(resources);

        let media_box = vec![
            Object::Integer(0),
            Object::Integer(0),
            real(self.width),
            real(self.height),
        ];
        let mut kids = Vec::with_capacity(self.pages.len());
        for operations in std::mem::take(&mut self.pages) {
            let content = Content { operations }
                .encode()
                .map_err(|e| export_error("cannot encode page content", e))?;
            let content_id = self.doc.add_object(Stream::new(dictionary! {}, content));
            let page_id = self.doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => self.pages_id,
                "MediaBox" => media_box.clone(),
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            kids.push(Object::Reference(page_id));
        }

        let count = i64::try_from(kids.len()).unwrap_or(i64::MAX);
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        };
        self.doc.objects.insert(self.pages_id, Object::Dictionary(pages));

        let catalog_id = self.doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        self.doc.trailer.set("Root", catalog_id);
        self.doc.compress();

        let mut bytes = Vec::new();
        self.doc
            .save_to(&mut bytes)
            .map_err(|e| export_error("cannot write PDF", e))?;
        Ok(bytes)
    }
}

#[cfg(test)]
#[path = "pdf_tests.rs"]
mod tests;
