use super::*;

/// A filled box with centered text. Buttons do not track state; the host
/// asks [`Button::clicked`] where the pointer went.
pub struct Button {
    measure: Rc<dyn TextMeasure>,
    position: Point,
    value: String,
    character_count: i32,
    style: TextStyle,
    pub text_color: Color,
    pub box_color: Color,
    dimension: Size,
    text_position: Point,
}

pub struct ButtonBuilder {
    measure: Rc<dyn TextMeasure>,
    position: Point,
    value: Option<String>,
    character_count: i32,
    style: Option<TextStyle>,
    text_color: Color,
    box_color: Color,
}

impl ButtonBuilder {
    #[must_use]
    pub fn position(mut self, x: i32, y: i32) -> Self {
        self.position = Point::new(x, y);
        self
    }

    #[must_use]
    pub fn text(mut self, text: &str) -> Self {
        self.value = Some(text.to_string());
        self
    }

    #[must_use]
    pub fn character_count(mut self, count: i32) -> Self {
        self.character_count = count;
        self
    }

    #[must_use]
    pub fn style(mut self, style: TextStyle) -> Self {
        self.style = Some(style);
        self
    }

    #[must_use]
    pub fn colors(mut self, text_color: Color, box_color: Color) -> Self {
        self.text_color = text_color;
        self.box_color = box_color;
        self
    }

    pub fn build(self) -> Result<Button> {
        Button::build(self)
    }
}

impl Button {
    pub fn new(measure: Rc<dyn TextMeasure>) -> Result<Button> {
        Self::builder(measure).build()
    }

    pub fn builder(measure: Rc<dyn TextMeasure>) -> ButtonBuilder {
        ButtonBuilder {
            measure,
            position: Point::default(),
            value: None,
            character_count: 5,
            style: None,
            text_color: Color::WHITE,
            box_color: Color::BLACK,
        }
    }

    pub(crate) fn build(builder: ButtonBuilder) -> Result<Button> {
        if builder.character_count <= 0 {
            return Err(Error::InvalidOptions("character_count must be positive"));
        }

        let mut this = Button {
            measure: builder.measure,
            position: builder.position,
            value: builder.value.unwrap_or_else(|| "Accept".to_string()),
            character_count: builder.character_count,
            style: builder.style.unwrap_or_default(),
            text_color: builder.text_color,
            box_color: builder.box_color,
            dimension: Size::default(),
            text_position: Point::default(),
        };
        this.create();
        Ok(this)
    }

    fn create(&mut self) {
        let glyph = self.measure.text_size(&self.style, "M");
        self.dimension = Size::new(glyph.width * self.character_count, glyph.height);

        let text = self.measure.text_size(&self.style, &self.value);
        self.text_position = Point::new(
            self.position.x + (self.dimension.width - text.width) / 2,
            self.position.y + (self.dimension.height - glyph.height) / 2,
        );
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.create();
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
        self.create();
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.position, self.dimension)
    }

    pub fn text_position(&self) -> Point {
        self.text_position
    }

    pub fn clicked(&self, p: Point) -> bool {
        self.rect().contains(p)
    }

    pub fn show(&self, canvas: &mut dyn Canvas) {
        canvas.fill_rect(self.rect(), self.box_color);
        canvas.draw_text(&self.value, self.text_position, &self.style, self.text_color);
    }
}
