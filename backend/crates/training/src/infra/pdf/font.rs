//! Certificate Fonts
//!
//! DejaVu Sans regular and bold, embedded in the binary so every script the
//! faces cover prints as registered. Widths come from the same font files the
//! PDF embeds.

use printpdf::{IndirectFontRef, PdfDocumentReference};
use ttf_parser::GlyphId;

use crate::error::{TrainingError, TrainingResult};

static DEJAVU_SANS: &[u8] = include_bytes!("../../../assets/fonts/DejaVuSans.ttf");
static DEJAVU_SANS_BOLD: &[u8] = include_bytes!("../../../assets/fonts/DejaVuSans-Bold.ttf");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Regular,
    Bold,
}

impl Face {
    fn data(self) -> &'static [u8] {
        match self {
            Face::Regular => DEJAVU_SANS,
            Face::Bold => DEJAVU_SANS_BOLD,
        }
    }
}

/// A parsed face and its handle in one PDF document
pub struct EmbeddedFont {
    pub metrics: Metrics,
    pub handle: IndirectFontRef,
}

impl EmbeddedFont {
    /// Parse `face` and add it to `doc`
    pub fn embed(doc: &PdfDocumentReference, face: Face) -> TrainingResult<Self> {
        let metrics = Metrics::parse(face)?;
        let handle = doc.add_external_font(face.data())?;
        Ok(Self { metrics, handle })
    }
}

/// Glyph lookups on one face
#[derive(Clone)]
pub struct Metrics {
    face: ttf_parser::Face<'static>,
    units_per_em: f32,
}

impl Metrics {
    pub fn parse(face: Face) -> TrainingResult<Self> {
        let face = ttf_parser::Face::parse(face.data(), 0)
            .map_err(|e| TrainingError::Render(format!("font parse: {e}")))?;
        let units_per_em = f32::from(face.units_per_em());
        Ok(Self { face, units_per_em })
    }

    pub fn glyph_id(&self, c: char) -> Option<u16> {
        self.face.glyph_index(c).map(|GlyphId(id)| id)
    }

    /// Characters of `text` the face has no glyph for
    pub fn missing(&self, text: &str) -> Vec<char> {
        let mut missing: Vec<char> = text
            .chars()
            .filter(|c| !c.is_control() && self.glyph_id(*c).is_none())
            .collect();
        missing.dedup();
        missing
    }

    /// Width of `text` at `size_pt`, in points. Characters without a glyph
    /// are not drawn and take no room.
    pub fn text_width_pt(&self, text: &str, size_pt: f32) -> f32 {
        let units: u32 = text
            .chars()
            .filter_map(|c| self.face.glyph_index(c))
            .filter_map(|id| self.face.glyph_hor_advance(id))
            .map(u32::from)
            .sum();
        units as f32 / self.units_per_em * size_pt
    }
}
