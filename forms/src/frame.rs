use super::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
}

/// Geometry and colors shared by the boxed text widgets. The box is sized in
/// 'M' widths so that `character_count` wide glyphs fit side by side.
pub struct BoxFrame {
    measure: Rc<dyn TextMeasure>,
    position: Point,
    character_count: i32,
    style: TextStyle,
    align: TextAlign,
    pub text_color: Color,
    pub box_color: Color,
    pub background_color: Color,
    border_width: i32,
    glyph: Size,
    dimension: Size,
    text_position: Point,
}

impl BoxFrame {
    pub(crate) fn new(options: &TextboxOptions, measure: Rc<dyn TextMeasure>) -> Result<Self> {
        if options.character_count <= 0 {
            return Err(Error::InvalidOptions("character_count must be positive"));
        }
        if options.border_width < 0 {
            return Err(Error::InvalidOptions("border_width must not be negative"));
        }

        let mut this = Self {
            measure,
            position: options.position,
            character_count: options.character_count,
            style: options.style.clone(),
            align: options.align,
            text_color: options.text_color,
            box_color: options.box_color,
            background_color: options.background_color,
            border_width: options.border_width,
            glyph: Size::default(),
            dimension: Size::default(),
            text_position: Point::default(),
        };
        this.create();
        Ok(this)
    }

    fn create(&mut self) {
        let plain = self.style.with_bold(false);
        self.glyph = self.measure.text_size(&plain, "M");
        self.dimension = Size::new(
            self.glyph.width * self.character_count,
            self.glyph.height + self.border_width * 2,
        );
        trace!(dimension = ?self.dimension, "box frame created");
    }

    /// Recomputes where `text` is drawn for the current alignment.
    pub(crate) fn align(&mut self, text: &str) {
        let text_size = self.measure.text_size(&self.style, text);
        let x = match self.align {
            TextAlign::Left => self.position.x + self.border_width * 2,
            TextAlign::Center => self.position.x + (self.dimension.width - text_size.width) / 2,
        };
        let y = self.position.y + (self.dimension.height - text_size.height) / 2;
        self.text_position = Point::new(x, y);
    }

    pub fn measure(&self) -> &Rc<dyn TextMeasure> {
        &self.measure
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub(crate) fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    pub fn character_count(&self) -> i32 {
        self.character_count
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    pub(crate) fn set_bold(&mut self, bold: bool) {
        self.style.bold = bold;
    }

    pub fn align_mode(&self) -> TextAlign {
        self.align
    }

    pub(crate) fn set_align_mode(&mut self, align: TextAlign) {
        self.align = align;
    }

    pub fn border_width(&self) -> i32 {
        self.border_width
    }

    /// Size of one 'M' in the unbolded style.
    pub fn glyph(&self) -> Size {
        self.glyph
    }

    pub fn dimension(&self) -> Size {
        self.dimension
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.position, self.dimension)
    }

    pub fn text_position(&self) -> Point {
        self.text_position
    }

    /// Widest text that fits inside the border.
    pub fn capacity(&self) -> i32 {
        self.dimension.width - self.border_width * 2
    }

    pub(crate) fn fit(&self, text: &str) -> String {
        fit_to_width(&*self.measure, &self.style, text, self.capacity())
    }

    pub(crate) fn show(&self, canvas: &mut dyn Canvas, text: &str) {
        let rect = self.rect();
        canvas.fill_rect(rect, self.background_color);
        if self.border_width > 0 {
            canvas.stroke_rect(rect, self.box_color, self.border_width);
        }
        canvas.draw_text(text, self.text_position, &self.style, self.text_color);
    }
}
