//! Messages between the host and the logo controller.
//!
//! - Host -> Core: [`MenuLoadedEvent`] asks for a new logo
//! - Core -> Host: [`LogoPresentedEvent`] reports what happened

use bevy::prelude::*;

use super::PresentOutcome;

/// Message sent when the main menu becomes available.
///
/// Several in the same frame result in a single logo change.
///
/// # Examples
///
/// ```ignore
/// fn on_menu(mut events: MessageWriter<MenuLoadedEvent>) {
///     events.write(MenuLoadedEvent);
/// }
/// ```
#[derive(Message, Debug, Clone, Copy, Default)]
pub struct MenuLoadedEvent;

/// Message sent after a menu load was handled.
///
/// # Examples
///
/// ```ignore
/// fn report(mut events: MessageReader<LogoPresentedEvent>) {
///     for event in events.read() {
///         if event.is_no_op() {
///             warn!("No custom menu text configured");
///         }
///     }
/// }
/// ```
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub struct LogoPresentedEvent {
    /// The result of the menu load.
    pub outcome: PresentOutcome,
}

impl LogoPresentedEvent {
    /// Create a new event.
    pub fn new(outcome: PresentOutcome) -> Self {
        Self { outcome }
    }

    /// Check if the original logo was left untouched.
    pub fn is_no_op(&self) -> bool {
        self.outcome == PresentOutcome::NoEntries
    }
}

/// Plugin that registers all menu text messages.
pub struct MenuTextEventsPlugin;

impl Plugin for MenuTextEventsPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<MenuLoadedEvent>()
            .add_message::<LogoPresentedEvent>();
    }
}
