//! Page Layout
//!
//! The certificate is designed on an 800 x 600 logical canvas and placed on
//! an A4 landscape page, keeping its aspect ratio.

/// Logical canvas size
pub const CANVAS_WIDTH: f32 = 800.0;
pub const CANVAS_HEIGHT: f32 = 600.0;

/// A4 landscape, in millimetres
pub const PAGE_WIDTH_MM: f32 = 297.0;
pub const PAGE_HEIGHT_MM: f32 = 210.0;
pub const PAGE_MARGIN_MM: f32 = 10.0;

const MM_PER_PT: f32 = 25.4 / 72.0;

/// Where the canvas lands on the page, in millimetres from the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageFit {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub page_height: f32,
}

impl PageFit {
    /// Fit a `canvas_width` x `canvas_height` canvas inside the page margins.
    ///
    /// A canvas wider than the available area fills its width and is centred
    /// vertically; otherwise it fills the height and is centred horizontally.
    pub fn new(
        canvas_width: f32,
        canvas_height: f32,
        page_width: f32,
        page_height: f32,
        margin: f32,
    ) -> Self {
        let available_width = page_width - 2.0 * margin;
        let available_height = page_height - 2.0 * margin;

        let canvas_ratio = canvas_width / canvas_height;
        let available_ratio = available_width / available_height;

        let (width, height, x, y) = if canvas_ratio > available_ratio {
            let height = available_width / canvas_ratio;
            (
                available_width,
                height,
                margin,
                margin + (available_height - height) / 2.0,
            )
        } else {
            let width = available_height * canvas_ratio;
            (
                width,
                available_height,
                margin + (available_width - width) / 2.0,
                margin,
            )
        };

        Self {
            x,
            y,
            width,
            height,
            page_height,
        }
    }

    pub fn a4_landscape() -> Self {
        Self::new(
            CANVAS_WIDTH,
            CANVAS_HEIGHT,
            PAGE_WIDTH_MM,
            PAGE_HEIGHT_MM,
            PAGE_MARGIN_MM,
        )
    }

    /// Millimetres per canvas unit
    pub fn scale(&self) -> f32 {
        self.width / CANVAS_WIDTH
    }

    /// Canvas x to page x (mm)
    pub fn page_x(&self, canvas_x: f32) -> f32 {
        self.x + canvas_x * self.scale()
    }

    /// Canvas y (top-down) to PDF y (mm, bottom-up)
    pub fn page_y(&self, canvas_y: f32) -> f32 {
        self.page_height - (self.y + canvas_y * self.scale())
    }

    /// Canvas length to points, for font sizes and stroke widths
    pub fn to_pt(&self, canvas_len: f32) -> f32 {
        canvas_len * self.scale() / MM_PER_PT
    }
}
