use super::*;

pub struct Label {
    value: String,
    position: Point,
    style: TextStyle,
    text_color: Color,
}

impl Label {
    pub fn new(value: &str, position: Point) -> Self {
        Self {
            value: value.to_string(),
            position,
            style: TextStyle::default(),
            text_color: Color::BLACK,
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: TextStyle, text_color: Color) -> Self {
        self.style = style;
        self.text_color = text_color;
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    pub fn show(&self, canvas: &mut dyn Canvas) {
        canvas.draw_text(&self.value, self.position, &self.style, self.text_color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_draws_value_at_position() {
        let mut label = Label::new("Name", Point::new(3, 4))
            .with_style(TextStyle::default().with_bold(true), Color::BLUE);
        label.set_value("User name");
        let mut canvas = DrawList::new();
        label.show(&mut canvas);
        assert_eq!(
            canvas.ops,
            vec![DrawOp::Text {
                text: "User name".to_string(),
                pos: Point::new(3, 4),
                bold: true,
                color: Color::BLUE,
            }]
        );
    }
}
