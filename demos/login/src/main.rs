use forms::*;
use std::rc::Rc;
use tracing::info;
use tracing_subscriber::EnvFilter;

const FPS: u32 = 30;

fn main() -> forms::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let measure: Rc<dyn TextMeasure> = Rc::new(MonospaceMeasure::default());
    let mut form = Form::new();

    form.add_label(Label::new("User name", Point::new(20, 20)));
    let user = form.add_input(InputBox::new_with_options(
        Rc::clone(&measure),
        InputBoxOptions {
            textbox: TextboxOptions {
                position: Point::new(20, 45),
                character_count: 16,
                ..Default::default()
            },
            tab_index: 0,
            ..Default::default()
        },
    )?);

    form.add_label(Label::new("Password", Point::new(20, 80)));
    let password = form.add_input(InputBox::new_with_options(
        Rc::clone(&measure),
        InputBoxOptions {
            textbox: TextboxOptions {
                position: Point::new(20, 105),
                character_count: 16,
                ..Default::default()
            },
            is_password: true,
            tab_index: 1,
        },
    )?);

    let login = form.add_button(
        Button::builder(Rc::clone(&measure))
            .position(20, 150)
            .text("Log in")
            .character_count(8)
            .build()?,
    );

    let mut table = Table::new(
        Rc::clone(&measure),
        TableOptions {
            position: Point::new(0, 200),
            row_count: 3,
            column_count: 2,
            has_header: true,
            ..Default::default()
        },
    )?;
    table.set_cell_value(0, 0, "Field");
    table.set_cell_value(0, 1, "Length");
    table.set_cell_value(1, 0, "user");
    table.set_cell_value(2, 0, "password");
    table.center(Size::new(640, 480))?;
    let summary = form.add_table(table);

    let frames: Vec<Vec<Event>> = vec![
        Event::typed("ada lovelace"),
        vec![Event::key(Key::Home), Event::key(Key::Delete), Event::char('A')],
        vec![Event::key(Key::Tab)],
        Event::typed("analytical engine"),
        vec![Event::key(Key::Backspace), Event::key(Key::Enter)],
        vec![],
        vec![Event::click(30, 155)],
    ];

    let clock = FrameClock::new(FPS);
    let mut canvas = DrawList::new();
    for (n, batch) in frames.iter().enumerate() {
        for event in form.update(batch, clock) {
            info!(frame = n, ?event, "form event");
            if event == FormEvent::ButtonClicked(login) {
                let user_len = form.input(user).map_or(0, |i| i.value().chars().count());
                let pass_len = form.input(password).map_or(0, |i| i.value().chars().count());
                if let Some(table) = form.table_mut(summary) {
                    table.set_cell_value(1, 1, &user_len.to_string());
                    table.set_cell_value(2, 1, &pass_len.to_string());
                }
            }
        }

        canvas.clear();
        form.show(&mut canvas);
        info!(frame = n, ops = canvas.ops.len(), "drawn");
    }

    if let Some(input) = form.input(user) {
        info!(value = input.value(), "user name");
    }
    if let Some(input) = form.input(password) {
        info!(shown = input.display_value(), "password");
    }
    let texts: Vec<&str> = canvas.texts().collect();
    info!(?texts, "final frame");
    Ok(())
}
