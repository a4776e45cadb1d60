use super::*;

/// Drawing surface supplied by the host renderer.
pub trait Canvas {
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draws the outline of `rect`, `width` pixels thick, inside the rect.
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: i32);

    /// Draws `text` with its top-left corner at `pos`.
    fn draw_text(&mut self, text: &str, pos: Point, style: &TextStyle, color: Color);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawOp {
    FillRect {
        rect: Rect,
        color: Color,
    },
    StrokeRect {
        rect: Rect,
        color: Color,
        width: i32,
    },
    Text {
        text: String,
        pos: Point,
        bold: bool,
        color: Color,
    },
}

/// A canvas that records what it was asked to draw.
#[derive(Default, Debug)]
pub struct DrawList {
    pub ops: Vec<DrawOp>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Every string drawn, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Canvas for DrawList {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(DrawOp::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: i32) {
        self.ops.push(DrawOp::StrokeRect { rect, color, width });
    }

    fn draw_text(&mut self, text: &str, pos: Point, style: &TextStyle, color: Color) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            pos,
            bold: style.bold,
            color,
        });
    }
}
