//! Single-line text editing: a character buffer, a cursor, optional
//! password masking, a width limit and a blinking caret.

use super::*;

/// What a batch of events amounted to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    Nothing,
    /// Enter was pressed.
    Confirmed,
    /// The pointer was released outside the widget.
    ClickedAway,
    /// Tab was pressed; focus has been given up.
    Advanced,
}

#[derive(Clone, Debug)]
pub struct EditConfig {
    pub max_pixel_width: i32,
    pub border_padding: i32,
    pub masked: bool,
    pub mask_char: char,
    pub blink_seconds: f32,
    pub style: TextStyle,
}

impl EditConfig {
    pub fn new(max_pixel_width: i32, border_padding: i32) -> Self {
        Self {
            max_pixel_width,
            border_padding,
            masked: false,
            mask_char: '*',
            blink_seconds: 0.25,
            style: TextStyle::default(),
        }
    }

    /// Widest the buffer may render.
    pub fn capacity(&self) -> i32 {
        self.max_pixel_width - 2 * self.border_padding
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BlinkState {
    pub visible: bool,
    pub frame_count: u32,
}

impl Default for BlinkState {
    fn default() -> Self {
        Self {
            visible: true,
            frame_count: 0,
        }
    }
}

impl BlinkState {
    fn tick(&mut self, clock: FrameClock, blink_seconds: f32) {
        if clock.fps == 0 {
            return;
        }
        self.frame_count = self.frame_count.saturating_add(clock.frames_elapsed);
        if self.frame_count as f32 >= blink_seconds * clock.fps as f32 {
            self.visible = !self.visible;
            self.frame_count = 0;
        }
    }
}

pub struct TextEditState {
    config: EditConfig,
    measure: Rc<dyn TextMeasure>,
    buffer: String,
    display: String,
    cursor: usize,
    focused: bool,
    blink: BlinkState,
    region: Rect,
    text_left: i32,
    cursor_top: i32,
    cursor_offset: Point,
}

impl TextEditState {
    pub fn new(config: EditConfig, measure: Rc<dyn TextMeasure>) -> Self {
        let mut this = Self {
            config,
            measure,
            buffer: String::new(),
            display: String::new(),
            cursor: 0,
            focused: false,
            blink: BlinkState::default(),
            region: Rect::default(),
            text_left: 0,
            cursor_top: 0,
            cursor_offset: Point::default(),
        };
        this.update_cursor_offset();
        this
    }

    pub fn config(&self) -> &EditConfig {
        &self.config
    }

    /// The real text, never masked.
    pub fn value(&self) -> &str {
        &self.buffer
    }

    /// The text the renderer should draw.
    pub fn display_value(&self) -> &str {
        &self.display
    }

    pub fn cursor_index(&self) -> usize {
        self.cursor
    }

    /// Top-left corner of the caret in surface coordinates.
    pub fn cursor_offset(&self) -> Point {
        self.cursor_offset
    }

    pub fn cursor_visible(&self) -> bool {
        self.blink.visible
    }

    pub fn blink(&self) -> BlinkState {
        self.blink
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn region(&self) -> Rect {
        self.region
    }

    /// Positions the widget: `region` is the hit area, `text_left` is where
    /// the first glyph is drawn, `cursor_top` is the caret's top edge.
    pub fn set_layout(&mut self, region: Rect, text_left: i32, cursor_top: i32) {
        self.region = region;
        self.text_left = text_left;
        self.cursor_top = cursor_top;
        self.update_cursor_offset();
    }

    /// Changes the measuring style. A wider style can push the buffer past
    /// capacity, so it is refitted from the end.
    pub fn set_style(&mut self, style: TextStyle) {
        self.config.style = style;
        self.buffer = fit_to_width(
            &*self.measure,
            &self.config.style,
            &self.buffer,
            self.config.capacity(),
        );
        self.cursor = self.cursor.min(self.len());
        self.refresh_display();
        self.update_cursor_offset();
    }

    /// Replaces the whole buffer. Text that does not fit loses characters
    /// from the end until it does.
    pub fn set_value(&mut self, text: &str) {
        self.buffer = fit_to_width(
            &*self.measure,
            &self.config.style,
            text,
            self.config.capacity(),
        );
        self.cursor = self.cursor.min(self.len());
        self.refresh_display();
        self.update_cursor_offset();
    }

    pub fn len(&self) -> usize {
        self.buffer.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Applies one frame's worth of input. Stops early on enter, tab or a
    /// click outside the widget.
    pub fn process_events(&mut self, events: &[Event], clock: FrameClock) -> Outcome {
        self.process_batch(events, clock).0
    }

    /// Like [`TextEditState::process_events`], but also returns how many
    /// events were consumed, counting the one that ended the batch.
    pub fn process_batch(&mut self, events: &[Event], clock: FrameClock) -> (Outcome, usize) {
        for (i, event) in events.iter().enumerate() {
            let outcome = match *event {
                Event::PointerUp(p) => {
                    if self.region.contains(p) {
                        Outcome::Nothing
                    } else {
                        Outcome::ClickedAway
                    }
                }
                Event::KeyDown(key) if self.focused => self.handle_key(key),
                Event::KeyDown(_) => Outcome::Nothing,
            };

            if outcome != Outcome::Nothing {
                debug!(?outcome, consumed = i + 1, "edit batch ended early");
                self.update_cursor_offset();
                return (outcome, i + 1);
            }
        }

        if self.focused {
            self.blink.tick(clock, self.config.blink_seconds);
        }
        self.update_cursor_offset();
        (Outcome::Nothing, events.len())
    }

    fn handle_key(&mut self, event: KeyEvent) -> Outcome {
        match event.key {
            Key::Backspace => self.backspace(),
            Key::Delete => self.delete(),
            Key::Left => self.cursor = self.cursor.saturating_sub(1),
            Key::Right => self.cursor = (self.cursor + 1).min(self.len()),
            Key::Home => self.cursor = 0,
            Key::End => self.cursor = self.len(),
            Key::Enter | Key::KeypadEnter => return Outcome::Confirmed,
            Key::Tab => {
                self.focused = false;
                return Outcome::Advanced;
            }
            key if key.is_ignorable() => {}
            _ => match event.text {
                Some(ch) if !ch.is_control() => {
                    self.insert(ch);
                }
                _ => trace!(key = ?event.key, "key produced no insertable text"),
            },
        }
        Outcome::Nothing
    }

    /// Inserts `ch` at the cursor if the result still fits. Returns whether
    /// it was inserted.
    fn insert(&mut self, ch: char) -> bool {
        let at = byte_offset(&self.buffer, self.cursor);
        let mut candidate = String::with_capacity(self.buffer.len() + ch.len_utf8());
        candidate.push_str(&self.buffer[..at]);
        candidate.push(ch);
        candidate.push_str(&self.buffer[at..]);

        let width = self.measure.text_width(&self.config.style, &candidate);
        if width > self.config.capacity() {
            trace!(width, capacity = self.config.capacity(), "insert rejected");
            return false;
        }

        self.buffer = candidate;
        self.cursor += 1;
        self.refresh_display();
        true
    }

    fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let at = byte_offset(&self.buffer, self.cursor - 1);
        self.buffer.remove(at);
        self.cursor -= 1;
        self.refresh_display();
    }

    fn delete(&mut self) {
        if self.cursor >= self.len() {
            return;
        }
        let at = byte_offset(&self.buffer, self.cursor);
        self.buffer.remove(at);
        self.refresh_display();
    }

    fn refresh_display(&mut self) {
        self.display = if self.config.masked {
            core::iter::repeat(self.config.mask_char)
                .take(self.len())
                .collect()
        } else {
            self.buffer.clone()
        };
    }

    fn update_cursor_offset(&mut self) {
        let mut x = self.text_left - self.config.border_padding / 2;
        let mut utf8 = [0u8; 4];
        for ch in self.display.chars().take(self.cursor) {
            x += self
                .measure
                .text_width(&self.config.style, ch.encode_utf8(&mut utf8));
        }
        self.cursor_offset = Point::new(x, self.cursor_top);
    }
}

/// Drops characters from the end of `text` until it measures no wider than
/// `capacity`.
pub fn fit_to_width(
    measure: &dyn TextMeasure,
    style: &TextStyle,
    text: &str,
    capacity: i32,
) -> String {
    let mut fitted = text.to_string();
    while measure.text_width(style, &fitted) > capacity {
        if fitted.pop().is_none() {
            break;
        }
    }
    if fitted.len() != text.len() {
        debug!(
            kept = fitted.chars().count(),
            dropped = text.chars().count() - fitted.chars().count(),
            "truncated text to fit"
        );
    }
    fitted
}

fn byte_offset(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map_or(s.len(), |(offset, _)| offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::{char, prelude::*};

    const CELL: i32 = 10;
    const BORDER: i32 = 2;

    /// An editor that fits exactly `chars` cells.
    fn editor(chars: i32) -> TextEditState {
        let config = EditConfig::new(chars * CELL + 2 * BORDER, BORDER);
        let mut state = TextEditState::new(config, Rc::new(MonospaceMeasure::new(CELL, 20)));
        state.set_layout(Rect::from_xywh(0, 0, chars * CELL + 2 * BORDER, 24), 4, 2);
        state.set_focused(true);
        state
    }

    fn masked_editor(chars: i32) -> TextEditState {
        let mut config = EditConfig::new(chars * CELL + 2 * BORDER, BORDER);
        config.masked = true;
        let mut state = TextEditState::new(config, Rc::new(MonospaceMeasure::new(CELL, 20)));
        state.set_focused(true);
        state
    }

    fn run(state: &mut TextEditState, events: &[Event]) -> Outcome {
        state.process_events(events, FrameClock::default())
    }

    #[test]
    fn typing_appends_and_advances() {
        let mut s = editor(10);
        assert_eq!(run(&mut s, &Event::typed("cat")), Outcome::Nothing);
        assert_eq!(s.value(), "cat");
        assert_eq!(s.cursor_index(), 3);
    }

    #[test]
    fn backspace_removes_before_cursor() {
        let mut s = editor(10);
        s.set_value("cat");
        run(&mut s, &[Event::key(Key::End), Event::key(Key::Left), Event::key(Key::Left)]);
        assert_eq!(s.cursor_index(), 1);
        run(&mut s, &[Event::key(Key::Backspace)]);
        assert_eq!(s.value(), "at");
        assert_eq!(s.cursor_index(), 0);
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut s = editor(10);
        s.set_value("cat");
        run(&mut s, &[Event::key(Key::Home), Event::key(Key::Backspace)]);
        assert_eq!(s.value(), "cat");
        assert_eq!(s.cursor_index(), 0);
    }

    #[test]
    fn delete_removes_at_cursor() {
        let mut s = editor(10);
        s.set_value("cat");
        run(&mut s, &[Event::key(Key::Home), Event::key(Key::Right)]);
        run(&mut s, &[Event::key(Key::Delete)]);
        assert_eq!(s.value(), "ct");
        assert_eq!(s.cursor_index(), 1);
    }

    #[test]
    fn delete_at_end_is_noop() {
        let mut s = editor(10);
        run(&mut s, &Event::typed("cat"));
        run(&mut s, &[Event::key(Key::Delete)]);
        assert_eq!(s.value(), "cat");
        assert_eq!(s.cursor_index(), 3);
    }

    #[test]
    fn insert_in_middle() {
        let mut s = editor(10);
        run(&mut s, &Event::typed("ct"));
        run(&mut s, &[Event::key(Key::Left), Event::char('a')]);
        assert_eq!(s.value(), "cat");
        assert_eq!(s.cursor_index(), 2);
    }

    #[test]
    fn navigation_clamps() {
        let mut s = editor(10);
        run(&mut s, &Event::typed("ab"));
        run(&mut s, &[Event::key(Key::Right), Event::key(Key::Right)]);
        assert_eq!(s.cursor_index(), 2);
        run(&mut s, &[Event::key(Key::Home), Event::key(Key::Left)]);
        assert_eq!(s.cursor_index(), 0);
        run(&mut s, &[Event::key(Key::End)]);
        assert_eq!(s.cursor_index(), 2);
    }

    #[test]
    fn insert_past_capacity_is_rejected() {
        let mut s = editor(5);
        run(&mut s, &Event::typed("MMMMM"));
        assert_eq!(s.len(), 5);
        run(&mut s, &[Event::char('M'), Event::char('x')]);
        assert_eq!(s.value(), "MMMMM");
        assert_eq!(s.cursor_index(), 5);
    }

    #[test]
    fn rejected_insert_does_not_stop_the_batch() {
        let mut s = editor(2);
        let events = [
            Event::char('a'),
            Event::char('b'),
            Event::char('c'),
            Event::key(Key::Backspace),
        ];
        run(&mut s, &events);
        assert_eq!(s.value(), "a");
    }

    #[test]
    fn set_value_truncates_from_end() {
        let mut s = editor(10);
        s.set_value("a very long string exceeding capacity");
        assert_eq!(s.value(), "a very lon");
        assert!(s.len() <= 10);
    }

    #[test]
    fn set_value_clamps_cursor() {
        let mut s = editor(10);
        run(&mut s, &Event::typed("abcdef"));
        s.set_value("xy");
        assert_eq!(s.cursor_index(), 2);
    }

    #[test]
    fn enter_stops_the_batch() {
        let mut s = editor(10);
        let mut events = Event::typed("ab");
        events.push(Event::key(Key::Enter));
        events.extend(Event::typed("cd"));
        assert_eq!(run(&mut s, &events), Outcome::Confirmed);
        assert_eq!(s.value(), "ab");
        assert!(s.is_focused());
    }

    #[test]
    fn keypad_enter_confirms() {
        let mut s = editor(10);
        assert_eq!(run(&mut s, &[Event::key(Key::KeypadEnter)]), Outcome::Confirmed);
    }

    #[test]
    fn tab_advances_and_blurs() {
        let mut s = editor(10);
        let events = [Event::key(Key::Tab), Event::char('x')];
        assert_eq!(run(&mut s, &events), Outcome::Advanced);
        assert!(!s.is_focused());
        assert_eq!(s.value(), "");
    }

    #[test]
    fn click_outside_is_clicked_away() {
        let mut s = editor(10);
        assert_eq!(run(&mut s, &[Event::click(5, 5)]), Outcome::Nothing);
        assert_eq!(run(&mut s, &[Event::click(104, 5)]), Outcome::ClickedAway);
        assert_eq!(run(&mut s, &[Event::click(5, 24)]), Outcome::ClickedAway);
    }

    #[test]
    fn ignorable_keys_do_nothing() {
        let mut s = editor(10);
        let events = [
            Event::key(Key::LeftShift),
            Event::KeyDown(KeyEvent {
                key: Key::Function(3),
                text: Some('x'),
            }),
            Event::key(Key::CapsLock),
            Event::key(Key::Escape),
            Event::char('a'),
        ];
        assert_eq!(run(&mut s, &events), Outcome::Nothing);
        assert_eq!(s.value(), "a");
    }

    #[test]
    fn keys_without_text_are_skipped() {
        let mut s = editor(10);
        let events = [
            Event::key(Key::Other),
            Event::char('\u{7}'),
            Event::char('b'),
        ];
        run(&mut s, &events);
        assert_eq!(s.value(), "b");
    }

    #[test]
    fn unfocused_ignores_keys() {
        let mut s = editor(10);
        s.set_focused(false);
        let blink = s.blink();
        assert_eq!(run(&mut s, &Event::typed("abc")), Outcome::Nothing);
        assert_eq!(s.value(), "");
        assert_eq!(s.blink(), blink);
        assert_eq!(run(&mut s, &[Event::click(500, 500)]), Outcome::ClickedAway);
    }

    #[test]
    fn masked_display_hides_value() {
        let mut s = masked_editor(10);
        run(&mut s, &Event::typed("hunter2"));
        assert_eq!(s.value(), "hunter2");
        assert_eq!(s.display_value(), "*******");
        run(&mut s, &[Event::key(Key::Backspace), Event::key(Key::Home), Event::key(Key::Delete)]);
        assert_eq!(s.value(), "unter");
        assert_eq!(s.display_value(), "*****");
    }

    #[test]
    fn masked_width_measures_real_text() {
        // Wide characters fill two cells; the mask would only fill one.
        let mut s = masked_editor(4);
        run(&mut s, &Event::typed("界界界"));
        assert_eq!(s.value(), "界界");
        assert_eq!(s.display_value(), "**");
    }

    #[test]
    fn cursor_offset_tracks_display_widths() {
        let mut s = editor(10);
        assert_eq!(s.cursor_offset(), Point::new(3, 2));
        run(&mut s, &Event::typed("abc"));
        assert_eq!(s.cursor_offset(), Point::new(33, 2));
        run(&mut s, &[Event::key(Key::Left)]);
        assert_eq!(s.cursor_offset(), Point::new(23, 2));
    }

    #[test]
    fn blink_toggles_on_interval() {
        let mut s = editor(10);
        let clock = FrameClock::new(20);
        assert!(s.cursor_visible());
        for _ in 0..4 {
            s.process_events(&[], clock);
        }
        assert!(s.cursor_visible());
        s.process_events(&[], clock);
        assert!(!s.cursor_visible());
        assert_eq!(s.blink().frame_count, 0);
        s.process_events(&[], clock.with_frames(5));
        assert!(s.cursor_visible());
    }

    #[test]
    fn batch_reports_consumed_events() {
        let mut s = editor(10);
        let events = [Event::char('a'), Event::key(Key::Enter), Event::char('b')];
        assert_eq!(
            s.process_batch(&events, FrameClock::default()),
            (Outcome::Confirmed, 2)
        );
        assert_eq!(s.value(), "a");

        let events = Event::typed("cd");
        assert_eq!(
            s.process_batch(&events, FrameClock::default()),
            (Outcome::Nothing, 2)
        );
    }

    #[test]
    fn zero_fps_never_blinks() {
        let mut s = editor(10);
        for _ in 0..4 {
            s.process_events(&[], FrameClock::new(0));
        }
        assert_eq!(s.blink(), BlinkState::default());
    }

    #[test]
    fn bolder_style_refits_buffer() {
        let bold = TextStyle::default().with_bold(true);
        let m = MonospaceMeasure {
            bold_extra: 1,
            ..MonospaceMeasure::new(CELL, 20)
        };
        let mut config = EditConfig::new(10 * CELL + 2 * BORDER, BORDER);
        config.masked = true;
        let mut masked = TextEditState::new(config, Rc::new(m));
        masked.set_focused(true);
        run(&mut masked, &Event::typed("MMMMMMMMMM"));
        masked.set_style(bold.clone());
        assert_eq!(masked.value(), "MMMMMMMMM");
        assert_eq!(masked.display_value(), "*********");
        assert_eq!(masked.cursor_index(), 9);
        assert!(m.text_width(&bold, masked.value()) <= 10 * CELL);
    }

    #[test]
    fn early_return_skips_blink() {
        let mut s = editor(10);
        let clock = FrameClock::new(4).with_frames(1);
        s.process_events(&[Event::key(Key::Enter)], clock);
        assert_eq!(s.blink().frame_count, 0);
    }

    #[test]
    fn fit_to_width_handles_negative_capacity() {
        let m = MonospaceMeasure::new(CELL, 20);
        assert_eq!(fit_to_width(&m, &TextStyle::default(), "abc", -4), "");
    }

    fn key_strategy() -> impl Strategy<Value = Event> {
        prop_oneof![
            4 => prop_oneof![
                char::range('a', 'z'),
                Just('M'),
                Just('界'),
                Just(' '),
            ]
            .prop_map(Event::char),
            1 => Just(Event::key(Key::Backspace)),
            1 => Just(Event::key(Key::Delete)),
            1 => Just(Event::key(Key::Left)),
            1 => Just(Event::key(Key::Right)),
            1 => Just(Event::key(Key::Home)),
            1 => Just(Event::key(Key::End)),
            1 => Just(Event::key(Key::LeftShift)),
        ]
    }

    proptest! {
        #[test]
        fn width_and_cursor_invariants(
            chars in 1i32..12,
            events in prop::collection::vec(key_strategy(), 0..60),
        ) {
            let mut s = editor(chars);
            let m = MonospaceMeasure::new(CELL, 20);
            for event in &events {
                s.process_events(core::slice::from_ref(event), FrameClock::default());
                prop_assert!(m.text_width(&TextStyle::default(), s.value()) <= chars * CELL);
                prop_assert!(s.cursor_index() <= s.len());
            }
        }

        #[test]
        fn empty_batch_keeps_buffer(
            events in prop::collection::vec(key_strategy(), 0..30),
        ) {
            let mut s = editor(8);
            s.process_events(&events, FrameClock::default());
            let value = s.value().to_string();
            let cursor = s.cursor_index();
            s.process_events(&[], FrameClock::default());
            prop_assert_eq!(s.value(), value.as_str());
            prop_assert_eq!(s.cursor_index(), cursor);
        }

        #[test]
        fn masked_display_mirrors_length(
            events in prop::collection::vec(key_strategy(), 0..40),
        ) {
            let mut s = masked_editor(8);
            s.process_events(&events, FrameClock::default());
            prop_assert_eq!(s.display_value().chars().count(), s.len());
            prop_assert!(s.display_value().chars().all(|c| c == '*'));
        }
    }
}
