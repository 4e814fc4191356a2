use std::fs::File;

use formwork::{
    ActionBus, ActionStream, ControlEvents, FormAction, FormControlState, Key, Modifiers,
    RadioGroup,
};
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() {
    let log_file = File::create("formwork-demo.log").expect("create log file");
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file).expect("init logger");

    let bus = ActionBus::new();
    let mut actions = bus.subscribe();

    let theme = RadioGroup::new(FormControlState::new("theme", "dark".to_string()), &bus)
        .with_options(vec![
            "light".to_string(),
            "dark".to_string(),
            "system".to_string(),
        ]);

    println!("initial:");
    print_group(&theme);

    println!("\nclick on \"system\":");
    theme.on_click(2);
    reduce(&theme, &mut actions);
    print_group(&theme);

    println!("\npress Down (wraps back to \"light\"):");
    theme.on_key(Key::Down, Modifiers::new());
    reduce(&theme, &mut actions);
    print_group(&theme);

    println!("\nrename the checked option to \"bright\":");
    theme.set_option(0, "bright".to_string());
    reduce(&theme, &mut actions);
    print_group(&theme);
}

/// Stand-in for the state container: fold SetValue actions back into
/// snapshots and hand them to the binder.
fn reduce(group: &RadioGroup<String>, actions: &mut ActionStream<String>) {
    while let Ok(Some(action)) = actions.try_next() {
        match action {
            FormAction::SetValue { control_id, value } => {
                println!("  action: SetValue {{ {control_id}: {value:?} }}");
                group.set_state(group.state().with_value(value));
            }
        }
    }
    group.clear_dirty();
}

fn print_group(group: &RadioGroup<String>) {
    for line in group.render_lines() {
        println!("  {line}");
    }
}
