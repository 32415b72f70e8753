//! Document drawing seam.

use super::error::ExportError;

/// Landscape A4 width in points.
pub const PAGE_WIDTH_PT: u16 = 842;

/// Landscape A4 height in points.
pub const PAGE_HEIGHT_PT: u16 = 595;

/// Font weight of a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weight {
    /// Regular text.
    Regular,
    /// Bold text.
    Bold,
}

/// A page-oriented text drawing surface.
///
/// Coordinates are whole points measured from the top-left corner of the
/// page. The exporter decides layout and pagination; a backend only places
/// text and produces bytes.
pub trait DocumentBackend {
    /// Starts a new page. Called before any text is placed on it.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot add a page.
    fn begin_page(&mut self) -> Result<(), ExportError>;

    /// Places one run of text on the current page.
    ///
    /// # Errors
    ///
    /// Returns an error if no page has been started.
    fn text(
        &mut self,
        x: u16,
        y: u16,
        size: u8,
        weight: Weight,
        text: &str,
    ) -> Result<(), ExportError>;

    /// Finishes the document and returns its bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be serialized.
    fn finish(self) -> Result<Vec<u8>, ExportError>;
}

#[cfg(test)]
pub(crate) mod recording {
    use super::*;

    /// One placed text run.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Run {
        pub x: u16,
        pub y: u16,
        pub weight: Weight,
        pub text: String,
    }

    /// Backend that records pages of text instead of drawing.
    #[derive(Debug, Default)]
    pub struct RecordingBackend {
        pub pages: Vec<Vec<Run>>,
    }

    impl RecordingBackend {
        pub fn page_text(&self, page: usize) -> Vec<&str> {
            self.pages[page].iter().map(|run| run.text.as_str()).collect()
        }
    }

    impl DocumentBackend for &mut RecordingBackend {
        fn begin_page(&mut self) -> Result<(), ExportError> {
            self.pages.push(Vec::new());
            Ok(())
        }

        fn text(
            &mut self,
            x: u16,
            y: u16,
            _size: u8,
            weight: Weight,
            text: &str,
        ) -> Result<(), ExportError> {
            let page = self
                .pages
                .last_mut()
                .ok_or_else(|| ExportError::backend("no page started"))?;
            page.push(Run {
                x,
                y,
                weight,
                text: text.to_string(),
            });
            Ok(())
        }

        fn finish(self) -> Result<Vec<u8>, ExportError> {
            Ok(format!("{} pages", self.pages.len()).into_bytes())
        }
    }
}
