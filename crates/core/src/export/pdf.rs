//! printpdf backend.

use printpdf::{
    BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference, Pt,
};

use super::backend::{DocumentBackend, PAGE_HEIGHT_PT, PAGE_WIDTH_PT, Weight};
use super::error::ExportError;

const LAYER_NAME: &str = "Layer 1";

fn mm(points: u16) -> Mm {
    Mm::from(Pt(f32::from(points)))
}

fn backend_error(err: impl std::fmt::Display) -> ExportError {
    ExportError::backend(err.to_string())
}

/// Draws pages with printpdf's built-in Helvetica fonts.
pub struct PrintPdfBackend {
    document: PdfDocumentReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    current: Option<PdfLayerReference>,
    first: Option<PdfLayerReference>,
}

impl PrintPdfBackend {
    /// Creates an empty landscape A4 document.
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in fonts cannot be registered.
    pub fn new(title: &str) -> Result<Self, ExportError> {
        let (document, page, layer) = PdfDocument::new(
            title,
            mm(PAGE_WIDTH_PT),
            mm(PAGE_HEIGHT_PT),
            LAYER_NAME,
        );
        let regular = document
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(backend_error)?;
        let bold = document
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(backend_error)?;
        // printpdf creates the first page up front; it is handed out on the
        // first begin_page call.
        let first = document.get_page(page).get_layer(layer);

        Ok(Self {
            document,
            regular,
            bold,
            current: None,
            first: Some(first),
        })
    }
}

impl DocumentBackend for PrintPdfBackend {
    fn begin_page(&mut self) -> Result<(), ExportError> {
        let layer = match self.first.take() {
            Some(first) => first,
            None => {
                let (page, layer) =
                    self.document
                        .add_page(mm(PAGE_WIDTH_PT), mm(PAGE_HEIGHT_PT), LAYER_NAME);
                self.document.get_page(page).get_layer(layer)
            }
        };
        self.current = Some(layer);
        Ok(())
    }

    fn text(
        &mut self,
        x: u16,
        y: u16,
        size: u8,
        weight: Weight,
        text: &str,
    ) -> Result<(), ExportError> {
        let layer = self
            .current
            .as_ref()
            .ok_or_else(|| ExportError::backend("no page started"))?;
        let font = match weight {
            Weight::Regular => &self.regular,
            Weight::Bold => &self.bold,
        };
        // PDF user space starts at the bottom-left corner.
        let baseline = PAGE_HEIGHT_PT.saturating_sub(y);
        layer.use_text(text, f32::from(size), mm(x), mm(baseline), font);
        Ok(())
    }

    fn finish(self) -> Result<Vec<u8>, ExportError> {
        self.document.save_to_bytes().map_err(backend_error)
    }
}
