//! Core logo replacement logic, independent of any concrete scene graph.
//!
//! This module provides the fundamental building blocks:
//! - [`parse_entries`] - Splits the custom text into entries
//! - [`select_entry`] - Uniform random pick
//! - [`PresentationCache`] - Creates the text objects once and resets them
//! - [`LogoController`] - Renders an entry with the 2-line / N-line layout
//! - [`MenuScene`] and [`TemplateSource`] - What the host has to provide
//! - Messages for communication with the host

mod controller;
mod error;
mod events;
mod markup;
mod parser;
mod presentation;
mod scene;
mod selector;
mod style;
mod template;

#[cfg(test)]
pub(crate) mod testing;

pub use controller::{LogoController, PresentOutcome};
pub use error::MenuTextError;
pub use events::{LogoPresentedEvent, MenuLoadedEvent, MenuTextEventsPlugin};
pub use markup::{Span, has_markup, parse_color, parse_markup};
pub use parser::{Entry, is_comment, parse_entries, split_lines};
pub use presentation::{LogoHandles, PresentationCache};
pub use scene::{MenuScene, TextLayoutSpec};
pub use selector::select_entry;
pub use style::{
    BOTTOM_TEXT_NAME, DEFAULT_BOTTOM_COLOR, DEFAULT_LOGO_NAME, DEFAULT_MAIN_COLOR, LogoStyle,
    MAIN_TEXT_NAME, NO_GLOW_TAG, TEMPLATE_ASSET_NAME,
};
pub use template::{TemplateSource, load_template};
