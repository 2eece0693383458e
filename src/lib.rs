//! Replace the main menu logo with random user-authored text, for Bevy.
//!
//! Every time the menu loads, one entry is picked at random from a
//! user-maintained list and drawn where the logo used to be:
//!
//! - **Two lines**: drawn like the original logo, top line and bottom line
//!   in their own colors
//! - **Anything else**: drawn as one white block between the two
//! - **No entries**: the original logo stays
//!
//! The text objects are created once and reused on every later visit.
//!
//! # Features
//!
//! - `persist` (default): RON configuration file with the custom text
//!
//! # Custom text format
//!
//! ```text
//! # Lines starting with # are ignored
//! BEAT
//! SABER
//!
//! <color=#FFD700>ONE</color> LINE
//! ```
//!
//! # Quick Start
//!
//! ```ignore
//! use bevy::prelude::*;
//! use bevy_menu_text::prelude::*;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(MenuTextPlugin::default())
//!         .add_systems(OnEnter(GameState::Menu), signal_menu_loaded)
//!         .run();
//! }
//! ```

use std::path::PathBuf;

use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

// Core module (no dependency on a concrete scene)
pub mod core;

pub mod config;
pub mod world_scene;

// Persistence module (feature-gated)
#[cfg(feature = "persist")]
pub mod persist;

// Re-export core types at crate root for convenience
pub use core::{
    Entry, parse_entries, split_lines, is_comment,
    select_entry,
    LogoController, PresentOutcome,
    PresentationCache, LogoHandles,
    MenuScene, TextLayoutSpec,
    TemplateSource, load_template,
    LogoStyle, MenuTextError,
    Span, parse_markup, parse_color, has_markup,
    MenuLoadedEvent, LogoPresentedEvent, MenuTextEventsPlugin,
};

pub use config::{MenuTextConfig, DEFAULT_CUSTOM_TEXT};
pub use world_scene::{FontTemplateSource, MenuTextObject, MenuTextSpan, TextTemplate, WorldScene};

#[cfg(feature = "persist")]
pub use persist::{ConfigError, ConfigPath};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::core::{
        Entry, parse_entries,
        LogoStyle, TextLayoutSpec, PresentOutcome,
        MenuLoadedEvent, LogoPresentedEvent,
    };
    pub use crate::config::MenuTextConfig;
    pub use crate::{MenuTextPlugin, MenuTextState, signal_menu_loaded};
}

/// Default path of the font file.
pub const DEFAULT_FONT_PATH: &str = "UserData/CustomMenuTextFont";

/// Main menu text plugin.
///
/// # Configuration
///
/// ```ignore
/// MenuTextPlugin::default()
///     .with_font_path("assets/fonts/logo.ttf")
///     .with_seed(42)
/// ```
#[derive(Clone)]
pub struct MenuTextPlugin {
    /// Anchors, colors and layout of the logo text.
    pub style: LogoStyle,
    /// Font file to load the text template from.
    pub font_path: PathBuf,
    /// Seed for entry selection; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Font used when the font file is missing or unusable.
    ///
    /// It is written to `font_path` if nothing is there yet. Without one,
    /// Bevy's built-in font is used.
    pub default_font: Option<&'static [u8]>,
}

impl Default for MenuTextPlugin {
    fn default() -> Self {
        Self {
            style: LogoStyle::default(),
            font_path: PathBuf::from(DEFAULT_FONT_PATH),
            seed: None,
            default_font: None,
        }
    }
}

impl MenuTextPlugin {
    /// Use a custom style.
    pub fn with_style(mut self, style: LogoStyle) -> Self {
        self.style = style;
        self
    }

    /// Load the font from `path`.
    pub fn with_font_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.font_path = path.into();
        self
    }

    /// Make entry selection deterministic.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Embed a default font (TTF/OTF bytes).
    pub fn with_default_font(mut self, bytes: &'static [u8]) -> Self {
        self.default_font = Some(bytes);
        self
    }
}

impl Plugin for MenuTextPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MenuTextConfig>()
            .init_resource::<PendingMenuLoads>()
            .insert_resource(MenuTextState::new(self.style.clone(), self.font_path.clone()))
            .insert_resource(MenuTextRng::new(self.seed))
            .insert_resource(DefaultFont(self.default_font))
            .add_plugins(core::MenuTextEventsPlugin);

        // Handle menu loads (three-stage pipeline)
        // 1. collect_menu_loads: Read load messages, queue one load
        // 2. apply_pending_loads: Run the controller with exclusive World access
        // 3. send_pending_outputs: Send outcome messages
        app.add_systems(Update, (
            collect_menu_loads,
            apply_pending_loads,
            send_pending_outputs,
        ).chain());

        // Persistence (feature-gated)
        #[cfg(feature = "persist")]
        {
            app.init_resource::<persist::ConfigPath>()
                .add_systems(Startup, persist::load_config_on_startup);
        }
    }
}

/// The presentation context: controller, cached entries and text objects.
#[derive(Resource, Debug)]
pub struct MenuTextState {
    controller: LogoController<Entity, TextTemplate>,
    last_outcome: Option<PresentOutcome>,
}

impl MenuTextState {
    /// Create a fresh state; nothing is loaded or created yet.
    pub fn new(style: LogoStyle, font_path: impl Into<PathBuf>) -> Self {
        Self {
            controller: LogoController::new(style, font_path),
            last_outcome: None,
        }
    }

    /// The logo controller.
    pub fn controller(&self) -> &LogoController<Entity, TextTemplate> {
        &self.controller
    }

    /// The text entities, once created.
    pub fn handles(&self) -> Option<LogoHandles<Entity>> {
        self.controller.cache().handles()
    }

    /// Outcome of the most recent menu load.
    pub fn last_outcome(&self) -> Option<&PresentOutcome> {
        self.last_outcome.as_ref()
    }

    fn load_menu(
        &mut self,
        config_text: &str,
        world: &mut World,
        source: &mut FontTemplateSource<'_>,
        rng: &mut StdRng,
    ) -> Result<PresentOutcome, MenuTextError> {
        let mut scene = WorldScene::new(world);
        let outcome = self.controller.on_menu_loaded(config_text, &mut scene, source, rng)?;
        self.last_outcome = Some(outcome.clone());
        Ok(outcome)
    }
}

/// Random source for entry selection.
#[derive(Resource)]
pub struct MenuTextRng(pub StdRng);

impl MenuTextRng {
    /// Seeded from `seed`, or from the OS when `None`.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(StdRng::seed_from_u64(seed)),
            None => Self(StdRng::from_entropy()),
        }
    }
}

/// Embedded default font bytes.
#[derive(Resource, Clone, Copy, Default)]
struct DefaultFont(Option<&'static [u8]>);

/// Resource that holds a pending menu load and its outputs.
#[derive(Resource, Default)]
struct PendingMenuLoads {
    requested: bool,
    outputs: Vec<LogoPresentedEvent>,
}

/// System that sends a [`MenuLoadedEvent`].
///
/// Schedule it wherever the host's menu becomes available, e.g.
/// `OnEnter(GameState::Menu)`.
pub fn signal_menu_loaded(mut events: MessageWriter<MenuLoadedEvent>) {
    events.write(MenuLoadedEvent);
}

/// System that turns menu load messages into one pending load.
fn collect_menu_loads(
    mut events: MessageReader<MenuLoadedEvent>,
    mut pending: ResMut<PendingMenuLoads>,
) {
    if events.read().count() > 0 {
        pending.requested = true;
    }
}

/// Exclusive system that runs the logo controller with full World access.
fn apply_pending_loads(world: &mut World) {
    if !world.resource::<PendingMenuLoads>().requested {
        return;
    }
    world.resource_mut::<PendingMenuLoads>().requested = false;

    let config_text = world.resource::<MenuTextConfig>().custom_text.clone();
    let payload = world.resource::<DefaultFont>().0;
    debug!("Setting menu logo");

    let result = world.resource_scope(|world, mut state: Mut<MenuTextState>| {
        world.resource_scope(|world, mut rng: Mut<MenuTextRng>| {
            let state = &mut *state;

            // Font storage is optional (headless apps have none)
            let loaded = world.try_resource_scope(|world, mut fonts: Mut<Assets<Font>>| {
                let mut source = FontTemplateSource::new(Some(&mut *fonts)).with_payload(payload);
                state.load_menu(&config_text, world, &mut source, &mut rng.0)
            });

            match loaded {
                Some(result) => result,
                None => {
                    let mut source = FontTemplateSource::new(None).with_payload(payload);
                    state.load_menu(&config_text, world, &mut source, &mut rng.0)
                }
            }
        })
    });

    match result {
        Ok(outcome) => {
            world
                .resource_mut::<PendingMenuLoads>()
                .outputs
                .push(LogoPresentedEvent::new(outcome));
        }
        Err(e) => {
            error!("Failed to set up menu text: {}", e);
        }
    }
}

/// System that sends queued outcome messages.
fn send_pending_outputs(
    mut pending: ResMut<PendingMenuLoads>,
    mut presented: MessageWriter<LogoPresentedEvent>,
) {
    if pending.outputs.is_empty() {
        return;
    }
    for output in pending.outputs.drain(..) {
        presented.write(output);
    }
}
