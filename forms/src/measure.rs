use unicode_width::UnicodeWidthStr;

use super::*;

/// Font descriptor handed to the measurer and to the canvas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextStyle {
    pub family: String,
    pub size: i32,
    pub bold: bool,
    pub antialias: bool,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            family: "Helvetica".to_string(),
            size: 20,
            bold: false,
            antialias: true,
        }
    }
}

impl TextStyle {
    #[must_use]
    pub fn with_bold(&self, bold: bool) -> Self {
        Self {
            bold,
            ..self.clone()
        }
    }
}

/// Reports rendered text extents. Implementations must be deterministic for
/// a fixed style.
pub trait TextMeasure {
    fn text_size(&self, style: &TextStyle, text: &str) -> Size;

    fn text_width(&self, style: &TextStyle, text: &str) -> i32 {
        self.text_size(style, text).width
    }
}

/// Fixed-pitch measurer: every display column is `cell_width` wide. Wide
/// characters (CJK and friends) take two columns.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MonospaceMeasure {
    pub cell_width: i32,
    pub line_height: i32,
    /// Added per column when the style is bold.
    pub bold_extra: i32,
}

impl Default for MonospaceMeasure {
    fn default() -> Self {
        Self {
            cell_width: 10,
            line_height: 20,
            bold_extra: 1,
        }
    }
}

impl MonospaceMeasure {
    pub const fn new(cell_width: i32, line_height: i32) -> Self {
        Self {
            cell_width,
            line_height,
            bold_extra: 0,
        }
    }
}

impl TextMeasure for MonospaceMeasure {
    fn text_size(&self, style: &TextStyle, text: &str) -> Size {
        let columns = text.width() as i32;
        let pitch = if style.bold {
            self.cell_width + self.bold_extra
        } else {
            self.cell_width
        };
        Size::new(columns * pitch, self.line_height)
    }
}
