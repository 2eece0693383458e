//! Menu logo example.
//!
//! Spawns a stand-in "Logo" and replaces it with a random entry from the
//! custom text. Press Space to simulate the menu loading again.
//!
//! The entries live in `UserData/CustomMenuText.ron`, written with the
//! defaults on first run. Edits are picked up on the next start.
//!
//! Run with: `cargo run --example menu`

use bevy::prelude::*;
use bevy_menu_text::prelude::*;

fn main() {
    // Pixel space instead of world units
    let style = LogoStyle::default()
        .anchors(Vec3::new(0.0, 80.0, 0.0), Vec3::new(0.0, -10.0, 0.0))
        .layout(TextLayoutSpec {
            font_size: 72.0,
            bounds: Vec2::new(900.0, 300.0),
            scale: 1.0,
            ..default()
        });

    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(MenuTextPlugin::default().with_style(style))
        .add_systems(Startup, (setup, signal_menu_loaded).chain())
        .add_systems(Update, (reload_on_space, print_outcomes))
        .run();
}

fn setup(mut commands: Commands) {
    commands.spawn(Camera2d);

    // What the menu shows before the first load
    commands.spawn((
        Name::new("Logo"),
        Text2d::new("ORIGINAL LOGO"),
        TextFont {
            font_size: 72.0,
            ..default()
        },
        Transform::from_xyz(0.0, 40.0, 0.0),
    ));

    commands.spawn((
        Text2d::new("Press Space to reload the menu"),
        Transform::from_xyz(0.0, -250.0, 0.0),
    ));
}

fn reload_on_space(
    keys: Res<ButtonInput<KeyCode>>,
    mut events: MessageWriter<MenuLoadedEvent>,
) {
    if keys.just_pressed(KeyCode::Space) {
        events.write(MenuLoadedEvent);
    }
}

fn print_outcomes(mut events: MessageReader<LogoPresentedEvent>) {
    for event in events.read() {
        match &event.outcome {
            PresentOutcome::Presented { index, total, entry } => {
                println!("[{}/{}] {}", index + 1, total, entry.lines().join(" / "));
            }
            PresentOutcome::NoEntries => println!("No entries, logo left alone"),
        }
    }
}
