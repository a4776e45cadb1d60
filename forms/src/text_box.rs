use super::*;

#[derive(Clone, Debug)]
pub struct TextboxOptions {
    pub position: Point,
    /// Box width, in 'M' glyphs.
    pub character_count: i32,
    pub style: TextStyle,
    pub text_color: Color,
    pub box_color: Color,
    pub background_color: Color,
    pub border_width: i32,
    pub align: TextAlign,
}

impl Default for TextboxOptions {
    fn default() -> Self {
        Self {
            position: Point::default(),
            character_count: 50,
            style: TextStyle::default(),
            text_color: Color::BLACK,
            box_color: Color::BLACK,
            background_color: Color::GREY,
            border_width: 2,
            align: TextAlign::Left,
        }
    }
}

/// A bordered box showing a single line of text. The text is set by the
/// program, not typed by the user.
pub struct Textbox {
    frame: BoxFrame,
    value: String,
}

impl core::ops::Deref for Textbox {
    type Target = BoxFrame;
    fn deref(&self) -> &BoxFrame {
        &self.frame
    }
}

impl Textbox {
    pub fn new(measure: Rc<dyn TextMeasure>) -> Result<Textbox> {
        Self::new_with_options(measure, Default::default())
    }

    pub fn new_with_options(measure: Rc<dyn TextMeasure>, options: TextboxOptions) -> Result<Textbox> {
        let mut frame = BoxFrame::new(&options, measure)?;
        frame.align("");
        Ok(Textbox {
            frame,
            value: String::new(),
        })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the text, dropping trailing characters that do not fit.
    pub fn change_value(&mut self, value: &str) {
        self.value = self.frame.fit(value);
        self.frame.align(&self.value);
    }

    pub fn set_bold(&mut self, bold: bool) {
        self.frame.set_bold(bold);
        self.value = self.frame.fit(&self.value);
        self.frame.align(&self.value);
    }

    pub fn set_align(&mut self, align: TextAlign) {
        self.frame.set_align_mode(align);
        self.frame.align(&self.value);
    }

    pub fn set_position(&mut self, position: Point) {
        self.frame.set_position(position);
        self.frame.align(&self.value);
    }

    pub fn set_colors(&mut self, box_color: Color, background_color: Color) {
        self.frame.box_color = box_color;
        self.frame.background_color = background_color;
    }

    pub fn show(&self, canvas: &mut dyn Canvas) {
        self.frame.show(canvas, &self.value);
    }
}
