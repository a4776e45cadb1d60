use super::*;

/// Something a [`Form`] update produced that the application may act on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FormEvent {
    ButtonClicked(WidgetId),
    /// Enter was pressed in an input box.
    Confirmed(WidgetId),
    FocusChanged(Option<WidgetId>),
}

enum Widget {
    Label(Label),
    Button(Button),
    Textbox(Textbox),
    Input(InputBox),
    Table(Table),
}

/// A set of widgets sharing one focus ring. The form decides which input
/// box receives keyboard input and draws everything in insertion order.
#[derive(Default)]
pub struct Form {
    widgets: Vec<Widget>,
    focus: FocusRing,
}

macro_rules! widget_accessors {
    ($($variant:ident: $ty:ty => $get:ident, $get_mut:ident;)*) => {
        impl Form {
            $(
                pub fn $get(&self, id: WidgetId) -> Option<&$ty> {
                    match self.widgets.get(id.0) {
                        Some(Widget::$variant(w)) => Some(w),
                        _ => None,
                    }
                }

                pub fn $get_mut(&mut self, id: WidgetId) -> Option<&mut $ty> {
                    match self.widgets.get_mut(id.0) {
                        Some(Widget::$variant(w)) => Some(w),
                        _ => None,
                    }
                }
            )*
        }
    }
}

widget_accessors! {
    Label: Label => label, label_mut;
    Button: Button => button, button_mut;
    Textbox: Textbox => textbox, textbox_mut;
    Input: InputBox => input, input_mut;
    Table: Table => table, table_mut;
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, widget: Widget) -> WidgetId {
        let id = WidgetId(self.widgets.len());
        self.widgets.push(widget);
        id
    }

    pub fn add_label(&mut self, label: Label) -> WidgetId {
        self.push(Widget::Label(label))
    }

    pub fn add_button(&mut self, button: Button) -> WidgetId {
        self.push(Widget::Button(button))
    }

    pub fn add_textbox(&mut self, textbox: Textbox) -> WidgetId {
        self.push(Widget::Textbox(textbox))
    }

    pub fn add_table(&mut self, table: Table) -> WidgetId {
        self.push(Widget::Table(table))
    }

    /// Adds an input box to the form and its tab order. An input box that
    /// starts focused keeps focus only if nothing else has it yet.
    pub fn add_input(&mut self, input: InputBox) -> WidgetId {
        let tab_index = input.tab_index();
        let wants_focus = input.is_focused();
        let id = self.push(Widget::Input(input));
        self.focus.insert(id, tab_index);
        if wants_focus && self.focus.focused().is_none() {
            self.focus.focus(id);
        }
        self.sync_focus();
        id
    }

    pub fn focus(&self) -> &FocusRing {
        &self.focus
    }

    pub fn focused(&self) -> Option<WidgetId> {
        self.focus.focused()
    }

    pub fn set_focus(&mut self, id: Option<WidgetId>) {
        match id {
            Some(id) => {
                self.focus.focus(id);
            }
            None => self.focus.blur(),
        }
        self.sync_focus();
    }

    fn sync_focus(&mut self) {
        for (i, widget) in self.widgets.iter_mut().enumerate() {
            if let Widget::Input(input) = widget {
                input.set_focused(self.focus.is_focused(WidgetId(i)));
            }
        }
    }

    fn input_at(&self, p: Point) -> Option<WidgetId> {
        self.widgets.iter().enumerate().find_map(|(i, w)| match w {
            Widget::Input(input) if input.clicked(p) => Some(WidgetId(i)),
            _ => None,
        })
    }

    /// Routes one frame of input. Key input goes to the focused input box
    /// only. Once that box ends the batch (enter, tab or a click away), the
    /// rest of the batch is dropped, so button clicks are only reported up
    /// to and including the event that ended it.
    pub fn update(&mut self, events: &[Event], clock: FrameClock) -> Vec<FormEvent> {
        let before = self.focus.focused();
        let mut follow_up = None;

        let consumed = match before.and_then(|id| self.input_mut(id).map(|input| (id, input))) {
            Some((id, input)) => {
                let region = input.rect();
                let (outcome, consumed) = input.update_batch(events, clock);
                match outcome {
                    Outcome::Nothing => {}
                    Outcome::Confirmed => follow_up = Some(FormEvent::Confirmed(id)),
                    Outcome::Advanced => {
                        self.focus.advance();
                    }
                    Outcome::ClickedAway => {
                        let click = match events[consumed - 1] {
                            Event::PointerUp(p) if !region.contains(p) => Some(p),
                            _ => None,
                        };
                        match click.and_then(|p| self.input_at(p)) {
                            Some(target) => {
                                self.focus.focus(target);
                            }
                            None => self.focus.blur(),
                        }
                    }
                }
                consumed
            }
            None => {
                let target = events.iter().find_map(|e| match *e {
                    Event::PointerUp(p) => self.input_at(p),
                    _ => None,
                });
                if let Some(target) = target {
                    self.focus.focus(target);
                }
                events.len()
            }
        };

        let mut out = Vec::new();
        for event in &events[..consumed] {
            if let Event::PointerUp(p) = *event {
                for (i, widget) in self.widgets.iter().enumerate() {
                    if let Widget::Button(button) = widget {
                        if button.clicked(p) {
                            debug!(id = i, "button clicked");
                            out.push(FormEvent::ButtonClicked(WidgetId(i)));
                        }
                    }
                }
            }
        }
        out.extend(follow_up);

        self.sync_focus();
        let after = self.focus.focused();
        if after != before {
            out.push(FormEvent::FocusChanged(after));
        }
        out
    }

    pub fn show(&self, canvas: &mut dyn Canvas) {
        for widget in &self.widgets {
            match widget {
                Widget::Label(w) => w.show(canvas),
                Widget::Button(w) => w.show(canvas),
                Widget::Textbox(w) => w.show(canvas),
                Widget::Input(w) => w.show(canvas),
                Widget::Table(w) => w.show(canvas),
            }
        }
    }
}
