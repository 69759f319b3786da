//! Certificate PDF
//!
//! Renders a [`CertificateText`] onto one A4 landscape page with embedded
//! DejaVu Sans faces.

pub mod font;
pub mod layout;

use printpdf::{Color, Line, Mm, PdfDocument, PdfLayerReference, Point, Rgb};

use crate::domain::certificate::CertificateText;
use crate::error::TrainingResult;

use self::font::{EmbeddedFont, Face};
use self::layout::{CANVAS_HEIGHT, CANVAS_WIDTH, PAGE_HEIGHT_MM, PAGE_WIDTH_MM, PageFit};

const MM_PER_PT: f32 = 25.4 / 72.0;

/// Horizontal padding kept free on both sides of centred lines
const SIDE_PADDING: f32 = 80.0;

const BORDER_GRAY: (u8, u8, u8) = (209, 213, 219);
const HEADING_BLUE: (u8, u8, u8) = (30, 64, 175);
const TEXT_DARK: (u8, u8, u8) = (31, 41, 55);

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(Rgb::new(
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
        None,
    ))
}

/// One line of text on the canvas
struct TextLine<'a> {
    text: &'a str,
    face: Face,
    /// Font size in canvas units
    size: f32,
    /// Baseline, canvas units from the top
    y: f32,
    color: (u8, u8, u8),
}

struct Canvas<'a> {
    fit: PageFit,
    layer: PdfLayerReference,
    regular: &'a EmbeddedFont,
    bold: &'a EmbeddedFont,
}

impl Canvas<'_> {
    fn font(&self, face: Face) -> &EmbeddedFont {
        match face {
            Face::Regular => self.regular,
            Face::Bold => self.bold,
        }
    }

    /// Stroke a rectangle inset `inset` units from the canvas edges
    fn frame(&self, inset: f32, thickness: f32) {
        let fit = &self.fit;
        let (left, right) = (fit.page_x(inset), fit.page_x(CANVAS_WIDTH - inset));
        let (top, bottom) = (fit.page_y(inset), fit.page_y(CANVAS_HEIGHT - inset));

        self.layer.set_outline_color(rgb(BORDER_GRAY));
        self.layer.set_outline_thickness(fit.to_pt(thickness));
        self.layer.add_line(Line {
            points: vec![
                (Point::new(Mm(left), Mm(top)), false),
                (Point::new(Mm(right), Mm(top)), false),
                (Point::new(Mm(right), Mm(bottom)), false),
                (Point::new(Mm(left), Mm(bottom)), false),
            ],
            is_closed: true,
        });
    }

    /// Centre a line horizontally, shrinking it until it fits between the
    /// side paddings
    fn centered(&self, line: &TextLine<'_>) {
        let font = self.font(line.face);
        let max_width = self.fit.to_pt(CANVAS_WIDTH - 2.0 * SIDE_PADDING);
        let mut size_pt = self.fit.to_pt(line.size);
        let natural = font.metrics.text_width_pt(line.text, size_pt);
        if natural > max_width {
            size_pt *= max_width / natural;
        }

        let width_mm = font.metrics.text_width_pt(line.text, size_pt) * MM_PER_PT;
        let x = self.fit.page_x(CANVAS_WIDTH / 2.0) - width_mm / 2.0;

        self.draw(line, size_pt, x);
    }

    fn left(&self, line: &TextLine<'_>, x: f32) {
        self.draw(line, self.fit.to_pt(line.size), self.fit.page_x(x));
    }

    fn draw(&self, line: &TextLine<'_>, size_pt: f32, x_mm: f32) {
        let font = self.font(line.face);
        let missing = font.metrics.missing(line.text);
        if !missing.is_empty() {
            tracing::warn!(
                missing = %missing.iter().collect::<String>(),
                "Certificate font has no glyph for some characters"
            );
        }

        self.layer.set_fill_color(rgb(line.color));
        self.layer.use_text(
            line.text,
            size_pt,
            Mm(x_mm),
            Mm(self.fit.page_y(line.y)),
            &font.handle,
        );
    }
}

/// Render the certificate and return the PDF bytes
pub fn render_certificate(text: &CertificateText) -> TrainingResult<Vec<u8>> {
    let title = format!("{} - {}", text.header, text.course);
    let (doc, page, layer) =
        PdfDocument::new(title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Certificate");

    let regular = EmbeddedFont::embed(&doc, Face::Regular)?;
    let bold = EmbeddedFont::embed(&doc, Face::Bold)?;

    let canvas = Canvas {
        fit: PageFit::a4_landscape(),
        layer: doc.get_page(page).get_layer(layer),
        regular: &regular,
        bold: &bold,
    };

    canvas.frame(16.0, 4.0);
    canvas.frame(24.0, 2.0);

    let lines = [
        TextLine { text: &text.header, face: Face::Bold, size: 30.0, y: 110.0, color: HEADING_BLUE },
        TextLine { text: &text.certifies, face: Face::Regular, size: 20.0, y: 230.0, color: TEXT_DARK },
        TextLine { text: &text.name_line, face: Face::Bold, size: 24.0, y: 280.0, color: TEXT_DARK },
        TextLine { text: &text.completed, face: Face::Regular, size: 20.0, y: 330.0, color: TEXT_DARK },
        TextLine { text: &text.course, face: Face::Bold, size: 30.0, y: 390.0, color: HEADING_BLUE },
    ];
    for line in &lines {
        canvas.centered(line);
    }

    let date = format!("{} {}", text.date_label, text.date);
    canvas.left(
        &TextLine { text: &date, face: Face::Regular, size: 18.0, y: 520.0, color: TEXT_DARK },
        SIDE_PADDING,
    );

    Ok(doc.save_to_bytes()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::certificate::CertificateContent;
    use chrono::NaiveDate;
    use i18n::{Locale, Translator};

    fn text(locale: Locale, full_name: &str) -> CertificateText {
        text_for(locale, full_name, "Sogea Satom")
    }

    fn text_for(locale: Locale, full_name: &str, company: &str) -> CertificateText {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        CertificateContent::new("SOGEA SATOM", full_name, company, date)
            .text(&Translator::new(locale))
    }

    /// The `Tj` operand a line set in `face` is written as
    fn glyph_hex(line: &str, face: Face) -> String {
        let metrics = font::Metrics::parse(face).unwrap();
        line.chars()
            .map(|c| format!("{:04X}", metrics.glyph_id(c).unwrap()))
            .collect()
    }

    fn contains(haystack: &[u8], needle: &str) -> bool {
        haystack
            .windows(needle.len())
            .any(|window| window == needle.as_bytes())
    }

    #[test]
    fn test_renders_pdf_document() {
        let bytes = render_certificate(&text(Locale::Fr, "Awa Koné")).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 500);
    }

    #[test]
    fn test_renders_long_names_in_spanish() {
        let name = "María de los Ángeles Fernández-Castellanos y Rodríguez de la Peña";
        let bytes = render_certificate(&text(Locale::Es, name)).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_renders_every_letter_of_non_latin1_names() {
        let text = text_for(Locale::Fr, "Łukasz Żółć", "Şirket");
        let bytes = render_certificate(&text).unwrap();

        assert!(text.name_line.starts_with("ŁUKASZ ŻÓŁĆ"));
        assert!(contains(&bytes, &glyph_hex(&text.name_line, Face::Bold)));
    }

    #[test]
    fn test_renders_cyrillic_names() {
        let text = text_for(Locale::Es, "Иван Петров", "Газпром");
        let bytes = render_certificate(&text).unwrap();
        assert!(contains(&bytes, &glyph_hex(&text.name_line, Face::Bold)));
    }

    #[test]
    fn test_embeds_the_font_files() {
        let bytes = render_certificate(&text(Locale::Fr, "Awa Koné")).unwrap();
        assert!(contains(&bytes, "FontFile2"));
    }
}
