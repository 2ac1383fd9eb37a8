//! Font metrics for text measurement and encoding, plus TrueType embedding

use crate::constants::DEFAULT_CHAR_WIDTH_RATIO;
#[cfg(feature = "ttf-parser")]
use lopdf::{Document, Object, ObjectId, Stream, dictionary};
#[cfg(feature = "ttf-parser")]
use tracing::debug;

/// Trait for measuring text dimensions and encoding text for PDF rendering.
///
/// Implement this trait to provide accurate font-aware text measurement
/// and glyph encoding for Unicode text rendering with embedded fonts.
pub trait FontMetrics {
    /// Width of a single character in points at the given font size
    fn char_width(&self, ch: char, font_size: f32) -> f32;

    /// Total width of a string in points at the given font size
    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        text.chars().map(|ch| self.char_width(ch, font_size)).sum()
    }

    /// Encode text for the PDF Tj operator
    fn encode_text(&self, text: &str) -> Vec<u8>;

    /// Whether `encode_text` produces glyph IDs (Type0 fonts) rather than single-byte codes
    fn uses_glyph_ids(&self) -> bool {
        false
    }
}

/// Fixed-ratio estimation for the standard Type1 fonts.
///
/// Every character is `DEFAULT_CHAR_WIDTH_RATIO * font_size` wide. Text is
/// encoded as single bytes; characters outside Latin-1 become `?`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicMetrics;

impl FontMetrics for HeuristicMetrics {
    fn char_width(&self, _ch: char, font_size: f32) -> f32 {
        font_size * DEFAULT_CHAR_WIDTH_RATIO
    }

    fn encode_text(&self, text: &str) -> Vec<u8> {
        text.chars()
            .map(|ch| u8::try_from(u32::from(ch)).unwrap_or(b'?'))
            .collect()
    }
}

/// Helvetica advance widths in 1/1000 em for WinAnsi codes 32..=255.
///
/// Taken from the Adobe Core 14 AFM file. Zero marks a code with no glyph
/// (127, 129, 141, 143, 144, 157).
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 224] = [
    // 32..=63
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    // 64..=95
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    // 96..=127
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, 0,
    // 128..=159
    556, 0, 222, 556, 333, 1000, 556, 556, 333, 1000, 667, 333, 1000, 0, 611, 0,
    0, 222, 222, 333, 333, 350, 556, 1000, 333, 1000, 500, 333, 944, 0, 500, 667,
    // 160..=191
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    // 192..=223
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    // 224..=255
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500,
];

/// Map a character to its WinAnsiEncoding byte, if it has one
pub fn winansi_code(ch: char) -> Option<u8> {
    let code = match ch {
        ' '..='~' | '\u{00a0}'..='\u{00ff}' => return u8::try_from(u32::from(ch)).ok(),
        '\u{20ac}' => 0x80,
        '\u{201a}' => 0x82,
        '\u{0192}' => 0x83,
        '\u{201e}' => 0x84,
        '\u{2026}' => 0x85,
        '\u{2020}' => 0x86,
        '\u{2021}' => 0x87,
        '\u{02c6}' => 0x88,
        '\u{2030}' => 0x89,
        '\u{0160}' => 0x8a,
        '\u{2039}' => 0x8b,
        '\u{0152}' => 0x8c,
        '\u{017d}' => 0x8e,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201c}' => 0x93,
        '\u{201d}' => 0x94,
        '\u{2022}' => 0x95,
        '\u{2013}' => 0x96,
        '\u{2014}' => 0x97,
        '\u{02dc}' => 0x98,
        '\u{2122}' => 0x99,
        '\u{0161}' => 0x9a,
        '\u{203a}' => 0x9b,
        '\u{0153}' => 0x9c,
        '\u{017e}' => 0x9e,
        '\u{0178}' => 0x9f,
        _ => return None,
    };
    Some(code)
}

/// Metrics for the standard Helvetica Type1 font with WinAnsiEncoding.
///
/// Characters outside WinAnsi are drawn as `?` and measured as such. Codes
/// without a Helvetica glyph fall back to [`HeuristicMetrics`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HelveticaMetrics;

impl HelveticaMetrics {
    fn code_for(ch: char) -> u8 {
        winansi_code(ch).unwrap_or(b'?')
    }
}

impl FontMetrics for HelveticaMetrics {
    fn char_width(&self, ch: char, font_size: f32) -> f32 {
        let code = Self::code_for(ch);
        match HELVETICA_WIDTHS.get(usize::from(code).wrapping_sub(32)) {
            Some(&width) if width > 0 => width as f32 / 1000.0 * font_size,
            _ => HeuristicMetrics.char_width(ch, font_size),
        }
    }

    fn encode_text(&self, text: &str) -> Vec<u8> {
        text.chars().map(Self::code_for).collect()
    }
}

/// TrueType font metrics using ttf-parser for accurate glyph measurement and encoding.
///
/// This struct owns the font data and parses it on demand for measurements.
/// Embedding into a document is done separately by [`embed_ttf_font`].
#[cfg(feature = "ttf-parser")]
#[derive(Clone)]
pub struct TtfFontMetrics {
    font_data: Vec<u8>,
    units_per_em: f32,
}

#[cfg(feature = "ttf-parser")]
impl TtfFontMetrics {
    /// Create new font metrics from raw TTF/TTC font data.
    ///
    /// Validates the font by parsing it and extracting units_per_em.
    pub fn new(font_data: Vec<u8>) -> crate::Result<Self> {
        let face = ttf_parser::Face::parse(&font_data, 0).map_err(|e| {
            crate::error::WorksheetError::TextError(format!("Failed to parse font: {e}"))
        })?;
        let units_per_em = face.units_per_em() as f32;
        Ok(Self {
            font_data,
            units_per_em,
        })
    }

    /// Load and validate a font file from disk
    pub fn from_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        Self::new(std::fs::read(path)?)
    }

    /// Raw font program bytes
    pub fn font_data(&self) -> &[u8] {
        &self.font_data
    }

    pub fn units_per_em(&self) -> f32 {
        self.units_per_em
    }

    // Data was validated in `new`, so a parse failure here is not expected
    fn face(&self) -> Option<ttf_parser::Face<'_>> {
        ttf_parser::Face::parse(&self.font_data, 0).ok()
    }

    fn advance(&self, face: &ttf_parser::Face<'_>, ch: char, font_size: f32) -> f32 {
        face.glyph_index(ch)
            .and_then(|gid| face.glyph_hor_advance(gid))
            .map(|advance| advance as f32 / self.units_per_em * font_size)
            .unwrap_or(font_size * DEFAULT_CHAR_WIDTH_RATIO)
    }
}

#[cfg(feature = "ttf-parser")]
impl FontMetrics for TtfFontMetrics {
    fn char_width(&self, ch: char, font_size: f32) -> f32 {
        match self.face() {
            Some(face) => self.advance(&face, ch, font_size),
            None => font_size * DEFAULT_CHAR_WIDTH_RATIO,
        }
    }

    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        let Some(face) = self.face() else {
            return text.chars().count() as f32 * font_size * DEFAULT_CHAR_WIDTH_RATIO;
        };
        text.chars()
            .map(|ch| self.advance(&face, ch, font_size))
            .sum()
    }

    fn encode_text(&self, text: &str) -> Vec<u8> {
        let face = self.face();
        let mut bytes = Vec::with_capacity(text.len() * 2);
        for ch in text.chars() {
            let glyph_id = face
                .as_ref()
                .and_then(|f| f.glyph_index(ch))
                .map(|g| g.0)
                .unwrap_or(0);
            bytes.extend_from_slice(&glyph_id.to_be_bytes());
        }
        bytes
    }

    fn uses_glyph_ids(&self) -> bool {
        true
    }
}

#[cfg(feature = "ttf-parser")]
impl std::fmt::Debug for TtfFontMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TtfFontMetrics")
            .field("units_per_em", &self.units_per_em)
            .field("font_data_len", &self.font_data.len())
            .finish()
    }
}

/// A TrueType font to embed in the worksheet, with the name it is published under
#[cfg(feature = "ttf-parser")]
#[derive(Debug, Clone)]
pub struct EmbeddedFont {
    pub name: String,
    pub metrics: TtfFontMetrics,
}

#[cfg(feature = "ttf-parser")]
impl EmbeddedFont {
    pub fn new<S: Into<String>>(name: S, metrics: TtfFontMetrics) -> Self {
        Self {
            name: name.into(),
            metrics,
        }
    }
}

/// Embed a TrueType font as a Type0/CIDFontType2 font with Identity-H encoding.
///
/// Returns the object ID of the Type0 font dictionary, ready to be placed in
/// a page's `Font` resources. Text drawn with it must be encoded with
/// [`TtfFontMetrics::encode_text`].
#[cfg(feature = "ttf-parser")]
pub fn embed_ttf_font(
    doc: &mut Document,
    metrics: &TtfFontMetrics,
    base_font_name: &str,
) -> crate::Result<ObjectId> {
    let face = ttf_parser::Face::parse(metrics.font_data(), 0).map_err(|e| {
        crate::error::WorksheetError::TextError(format!("Failed to parse font: {e}"))
    })?;
    let units_per_em = face.units_per_em() as f32;

    debug!(
        "Embedding font {} ({} glyphs, {} bytes)",
        base_font_name,
        face.number_of_glyphs(),
        metrics.font_data().len()
    );

    // Glyph advances in 1/1000 text space units, indexed by glyph ID
    let widths: Vec<Object> = (0..face.number_of_glyphs())
        .map(|gid| {
            let advance = face
                .glyph_hor_advance(ttf_parser::GlyphId(gid))
                .unwrap_or(0) as f32;
            Object::Integer((advance * 1000.0 / units_per_em).round() as i64)
        })
        .collect();

    let font_stream = Stream::new(
        dictionary! {
            "Length1" => metrics.font_data().len() as i64,
        },
        metrics.font_data().to_vec(),
    );
    let font_stream_id = doc.add_object(font_stream);

    let font_descriptor_id = doc.add_object(dictionary! {
        "Type" => "FontDescriptor",
        "FontName" => base_font_name,
        "Flags" => 32, // Nonsymbolic
        "ItalicAngle" => 0,
        "Ascent" => face.ascender() as i64,
        "Descent" => face.descender() as i64,
        "CapHeight" => face.capital_height().unwrap_or(face.ascender()) as i64,
        "StemV" => 80,
        "FontBBox" => vec![
            Object::Integer(0),
            Object::Integer(face.descender() as i64),
            Object::Integer(units_per_em as i64),
            Object::Integer(face.ascender() as i64),
        ],
        "FontFile2" => font_stream_id,
    });

    let cid_font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "CIDFontType2",
        "BaseFont" => base_font_name,
        "CIDSystemInfo" => dictionary! {
            "Registry" => Object::string_literal("Adobe"),
            "Ordering" => Object::string_literal("Identity"),
            "Supplement" => 0,
        },
        "FontDescriptor" => font_descriptor_id,
        "CIDToGIDMap" => "Identity",
        "DW" => 1000,
        "W" => vec![Object::Integer(0), Object::Array(widths)],
    });

    Ok(doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type0",
        "BaseFont" => base_font_name,
        "Encoding" => "Identity-H",
        "DescendantFonts" => vec![cid_font_id.into()],
    }))
}

/// Helpers shared by tests that need a real TrueType font
#[cfg(all(test, feature = "ttf-parser"))]
pub(crate) fn load_test_font() -> Option<Vec<u8>> {
    // Try common system font paths
    let paths = [
        "/System/Library/Fonts/Supplemental/Arial.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "C:\\Windows\\Fonts\\arial.ttf",
    ];
    paths.iter().find_map(|path| std::fs::read(path).ok())
}
