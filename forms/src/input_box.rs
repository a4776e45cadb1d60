use super::*;

#[derive(Clone, Debug, Default)]
pub struct InputBoxOptions {
    pub textbox: TextboxOptions,
    /// Show mask characters instead of the typed text.
    pub is_password: bool,
    /// Position in the form's tab order. Index 0 starts focused.
    pub tab_index: u32,
}

const CURSOR_WIDTH: i32 = 2;

/// A textbox the user can type into, with a blinking caret.
pub struct InputBox {
    frame: BoxFrame,
    edit: TextEditState,
    tab_index: u32,
}

impl core::ops::Deref for InputBox {
    type Target = BoxFrame;
    fn deref(&self) -> &BoxFrame {
        &self.frame
    }
}

impl InputBox {
    pub fn new(measure: Rc<dyn TextMeasure>) -> Result<InputBox> {
        Self::new_with_options(measure, Default::default())
    }

    pub fn new_with_options(measure: Rc<dyn TextMeasure>, options: InputBoxOptions) -> Result<InputBox> {
        let frame = BoxFrame::new(&options.textbox, Rc::clone(&measure))?;

        let mut config = EditConfig::new(frame.dimension().width, frame.border_width());
        config.masked = options.is_password;
        config.style = frame.style().clone();

        let mut this = InputBox {
            frame,
            edit: TextEditState::new(config, measure),
            tab_index: options.tab_index,
        };
        this.edit.set_focused(options.tab_index == 0);
        this.relayout();
        debug!(
            tab_index = this.tab_index,
            password = options.is_password,
            "input box created"
        );
        Ok(this)
    }

    fn relayout(&mut self) {
        self.frame.align(self.edit.display_value());
        let cursor_top =
            self.frame.position().y + (self.frame.dimension().height - self.frame.glyph().height) / 2;
        self.edit
            .set_layout(self.frame.rect(), self.frame.text_position().x, cursor_top);
    }

    pub fn tab_index(&self) -> u32 {
        self.tab_index
    }

    /// The real text. For password boxes this is the unmasked value.
    pub fn value(&self) -> &str {
        self.edit.value()
    }

    pub fn display_value(&self) -> &str {
        self.edit.display_value()
    }

    pub fn is_password(&self) -> bool {
        self.edit.config().masked
    }

    pub fn edit_state(&self) -> &TextEditState {
        &self.edit
    }

    pub fn is_focused(&self) -> bool {
        self.edit.is_focused()
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.edit.set_focused(focused);
    }

    pub fn set_value(&mut self, value: &str) {
        self.edit.set_value(value);
        self.relayout();
    }

    pub fn set_position(&mut self, position: Point) {
        self.frame.set_position(position);
        self.relayout();
    }

    pub fn set_bold(&mut self, bold: bool) {
        self.frame.set_bold(bold);
        self.edit.set_style(self.frame.style().clone());
        self.relayout();
    }

    /// Hit test against the box.
    pub fn clicked(&self, p: Point) -> bool {
        self.frame.rect().contains(p)
    }

    /// The caret rectangle, two pixels wide and one glyph tall.
    pub fn cursor_rect(&self) -> Rect {
        Rect::new(
            self.edit.cursor_offset(),
            Size::new(CURSOR_WIDTH, self.frame.glyph().height),
        )
    }

    /// Feeds one frame of input to the box.
    pub fn update(&mut self, events: &[Event], clock: FrameClock) -> Outcome {
        self.update_batch(events, clock).0
    }

    /// Like [`InputBox::update`], also returning how many events the box
    /// consumed before the batch ended.
    pub fn update_batch(&mut self, events: &[Event], clock: FrameClock) -> (Outcome, usize) {
        let result = self.edit.process_batch(events, clock);
        self.relayout();
        result
    }

    pub fn show(&self, canvas: &mut dyn Canvas) {
        self.frame.show(canvas, self.edit.display_value());
        if self.edit.is_focused() && self.edit.cursor_visible() {
            canvas.fill_rect(self.cursor_rect(), self.frame.text_color);
        }
    }
}
