//! PDF Document builder

use crate::text::{encode_text_hex, generate_text_operators, TextRenderContext};
use crate::{Align, PdfError, Result, StandardFont};
use flate2::write::ZlibEncoder;
use flate2::Compression;
use lopdf::{dictionary, Dictionary, Document, Object, Stream, StringFormat};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// A buffered text operation for deferred encoding
///
/// Text is buffered while drawing and encoded into page content streams
/// when the document is built, once every font resource is known.
#[derive(Debug, Clone)]
struct BufferedTextOp {
    /// The text to render
    text: String,
    /// Font used for this run of text
    font: StandardFont,
    /// Page number (1-indexed)
    page: usize,
    /// Anchor X coordinate (PDF coordinates)
    x: f64,
    /// Baseline Y coordinate (PDF coordinates)
    y: f64,
    /// Font size in points
    font_size: f64,
    /// Text color
    color: Color,
    /// Alignment relative to `x`
    align: Align,
}

/// RGB Color (values 0.0 - 1.0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// Create a new RGB color (values 0.0 - 1.0)
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create color from RGB values (0-255)
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Black color
    pub fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    /// Red color
    pub fn red() -> Self {
        Self::rgb(1.0, 0.0, 0.0)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

/// Page dimensions in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width: f64,
    pub height: f64,
}

impl PageSize {
    /// US Letter, 8.5 x 11 inches
    pub const LETTER: PageSize = PageSize {
        width: 612.0,
        height: 792.0,
    };

    /// ISO A4
    pub const A4: PageSize = PageSize {
        width: 595.28,
        height: 841.89,
    };

    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::LETTER
    }
}

/// A new PDF document under construction
///
/// All pages share one page size and one resource dictionary. Nothing is
/// serialized until [`PdfDocument::save`] or [`PdfDocument::to_bytes`].
pub struct PdfDocument {
    /// Size of every page
    page_size: PageSize,
    /// Number of pages added so far
    page_count: usize,
    /// Current font
    current_font: Option<StandardFont>,
    /// Current font size
    current_font_size: f64,
    /// Current text color
    current_text_color: Color,
    /// Font resources (font -> resource name), shared by all pages
    font_resources: BTreeMap<StandardFont, String>,
    /// Next font resource number
    next_font_resource: u32,
    /// Document information dictionary entries
    info: BTreeMap<String, String>,
    /// Buffered text operations (encoded when the document is built)
    buffered_text_ops: Vec<BufferedTextOp>,
}

impl PdfDocument {
    /// Create an empty document whose pages all have the given size
    ///
    /// # Example
    /// ```ignore
    /// let doc = PdfDocument::new(PageSize::LETTER);
    /// ```
    pub fn new(page_size: PageSize) -> Self {
        Self {
            page_size,
            page_count: 0,
            current_font: None,
            current_font_size: 12.0,
            current_text_color: Color::default(),
            font_resources: BTreeMap::new(),
            next_font_resource: 1,
            info: BTreeMap::new(),
            buffered_text_ops: Vec::new(),
        }
    }

    /// Get the page size shared by all pages
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Get the number of pages in the document
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Append a blank page and return its number (1-indexed)
    pub fn add_page(&mut self) -> usize {
        self.page_count += 1;
        self.page_count
    }

    /// Set an entry of the document information dictionary
    ///
    /// # Example
    /// ```ignore
    /// doc.set_info("Title", "Sample");
    /// doc.set_info("Creator", "sample-pdf");
    /// ```
    pub fn set_info(&mut self, key: &str, value: &str) {
        self.info.insert(key.to_string(), value.to_string());
    }

    /// Set the current font and size
    ///
    /// # Arguments
    /// * `font` - One of the standard fonts
    /// * `size` - Font size in points
    pub fn set_font(&mut self, font: StandardFont, size: f64) {
        self.current_font = Some(font);
        self.current_font_size = size;
    }

    /// Set only the font size (keeps current font)
    ///
    /// # Arguments
    /// * `size` - Font size in points
    pub fn set_font_size(&mut self, size: f64) -> Result<()> {
        if self.current_font.is_none() {
            return Err(PdfError::FontNotFound("No font set".to_string()));
        }

        self.current_font_size = size;
        Ok(())
    }

    /// Set the text color
    ///
    /// # Arguments
    /// * `color` - RGB color
    pub fn set_text_color(&mut self, color: Color) {
        self.current_text_color = color;
    }

    fn current_font(&self) -> Result<StandardFont> {
        self.current_font
            .ok_or_else(|| PdfError::FontNotFound("No font set".to_string()))
    }

    /// Get current font's text width for a string
    ///
    /// # Arguments
    /// * `text` - The text to measure
    ///
    /// # Returns
    /// Width in points
    pub fn get_text_width(&self, text: &str) -> Result<f64> {
        let font = self.current_font()?;
        Ok(font.text_width_points(text, self.current_font_size))
    }

    /// Insert text at a specific position
    ///
    /// # Arguments
    /// * `text` - Text to insert
    /// * `page` - Page number (1-indexed)
    /// * `x` - X coordinate in points
    /// * `y` - Baseline Y coordinate in points (PDF coordinates, from bottom)
    /// * `align` - Alignment of the text relative to `x`
    pub fn insert_text(
        &mut self,
        text: &str,
        page: usize,
        x: f64,
        y: f64,
        align: Align,
    ) -> Result<()> {
        if page == 0 || page > self.page_count {
            return Err(PdfError::InvalidPage(page, self.page_count));
        }

        // Nothing to render
        if text.is_empty() {
            return Ok(());
        }

        let font = self.current_font()?;
        self.get_or_create_font_ref(font);

        self.buffered_text_ops.push(BufferedTextOp {
            text: text.to_string(),
            font,
            page,
            x,
            y,
            font_size: self.current_font_size,
            color: self.current_text_color,
            align,
        });

        Ok(())
    }

    /// Get or create the resource name (e.g., "F1", "F2") for a font
    ///
    /// Resource names are assigned in first-use order.
    pub fn get_or_create_font_ref(&mut self, font: StandardFont) -> String {
        if let Some(resource_name) = self.font_resources.get(&font) {
            return resource_name.clone();
        }

        let resource_name = format!("F{}", self.next_font_resource);
        self.next_font_resource += 1;
        self.font_resources.insert(font, resource_name.clone());

        resource_name
    }

    /// Save the document to a file, replacing any existing file
    ///
    /// # Arguments
    /// * `path` - Output file path
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut inner = self.build_document()?;
        inner
            .save(path)
            .map_err(|e| PdfError::SaveError(e.to_string()))?;
        Ok(())
    }

    /// Save the document to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut inner = self.build_document()?;

        let mut buffer = Vec::new();
        inner
            .save_to(&mut buffer)
            .map_err(|e| PdfError::SaveError(e.to_string()))?;

        Ok(buffer)
    }

    /// Encode buffered text operations into one operator buffer per page
    fn encode_page_contents(&self) -> Result<Vec<Vec<u8>>> {
        let mut contents = vec![Vec::new(); self.page_count];

        for op in &self.buffered_text_ops {
            let font_name = self
                .font_resources
                .get(&op.font)
                .ok_or_else(|| PdfError::FontNotFound(op.font.base_font().to_string()))?
                .clone();

            let ctx = TextRenderContext {
                font_name,
                font_size: op.font_size,
                text_width: op.font.text_width_points(&op.text, op.font_size),
                color: op.color,
            };

            let operators =
                generate_text_operators(&encode_text_hex(&op.text), op.x, op.y, op.align, &ctx);

            contents
                .get_mut(op.page - 1)
                .ok_or(PdfError::InvalidPage(op.page, self.page_count))?
                .extend_from_slice(&operators);
        }

        Ok(contents)
    }

    /// Assemble the lopdf object graph
    ///
    /// Object numbering depends only on the buffered state, so building the
    /// same document twice yields identical bytes.
    fn build_document(&self) -> Result<Document> {
        let mut inner = Document::with_version("1.4");
        let pages_id = inner.new_object_id();

        // Font dictionaries, referenced from the shared resources
        let mut font_dict = Dictionary::new();
        for (font, resource_name) in &self.font_resources {
            let font_id = inner.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => font.base_font(),
                "Encoding" => "WinAnsiEncoding",
            });
            font_dict.set(resource_name.as_bytes(), Object::Reference(font_id));
        }
        let resources_id = inner.add_object(dictionary! {
            "Font" => font_dict,
        });

        let contents = self.encode_page_contents()?;
        let mut kids = Vec::with_capacity(self.page_count);
        for content in contents {
            let stream = Stream::new(
                dictionary! { "Filter" => "FlateDecode" },
                compress_content(&content)?,
            );
            let content_id = inner.add_object(stream);

            let page_id = inner.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(Object::Reference(page_id));
        }

        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => self.page_count as i64,
            "Resources" => resources_id,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                Object::Real(self.page_size.width as f32),
                Object::Real(self.page_size.height as f32),
            ],
        };
        inner.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = inner.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        inner.trailer.set("Root", catalog_id);

        if !self.info.is_empty() {
            let mut info = Dictionary::new();
            for (key, value) in &self.info {
                info.set(key.as_bytes(), info_string(value));
            }
            let info_id = inner.add_object(info);
            inner.trailer.set("Info", info_id);
        }

        debug!(
            pages = self.page_count,
            fonts = self.font_resources.len(),
            text_ops = self.buffered_text_ops.len(),
            "built PDF object graph"
        );

        Ok(inner)
    }
}

/// Text string for the Info dictionary
///
/// ASCII is written as a literal. Anything else becomes UTF-16BE with a byte
/// order mark, since PDFDocEncoding cannot hold arbitrary Unicode.
fn info_string(value: &str) -> Object {
    if value.is_ascii() {
        return Object::string_literal(value);
    }

    let mut bytes = vec![0xFE, 0xFF];
    for unit in value.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    Object::String(bytes, StringFormat::Hexadecimal)
}

/// Compress a content stream with FlateDecode (zlib)
fn compress_content(content: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(content)?;
    Ok(encoder.finish()?)
}
