//! Picks an entry and renders it into the logo text objects.

use std::path::PathBuf;

use bevy::prelude::*;
use rand::Rng;

use super::{
    Entry, LogoStyle, MenuScene, MenuTextError, PresentationCache, TemplateSource,
    parse_entries, select_entry,
};

/// What a menu load did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresentOutcome {
    /// An entry was written into the logo.
    Presented {
        /// Index of the entry in the parsed set.
        index: usize,
        /// Number of entries in the set.
        total: usize,
        /// The entry shown.
        entry: Entry,
    },
    /// The configuration had no entries; the original logo was left alone.
    NoEntries,
}

/// Drives the replacement logo across menu loads.
///
/// Owns the parsed entries and the [`PresentationCache`]. Entries are parsed
/// on the first menu load and kept until the configuration text changes.
#[derive(Debug)]
pub struct LogoController<H, T> {
    style: LogoStyle,
    cache: PresentationCache<H, T>,
    entries: Option<Vec<Entry>>,
    parsed_from: String,
}

impl<H, T> LogoController<H, T>
where
    H: Copy + Eq + std::fmt::Debug,
{
    /// Create a controller loading its font bundle from `font_path`.
    pub fn new(style: LogoStyle, font_path: impl Into<PathBuf>) -> Self {
        Self {
            style,
            cache: PresentationCache::new(font_path),
            entries: None,
            parsed_from: String::new(),
        }
    }

    /// The style used for resets.
    pub fn style(&self) -> &LogoStyle {
        &self.style
    }

    /// The presentation cache.
    pub fn cache(&self) -> &PresentationCache<H, T> {
        &self.cache
    }

    /// Entries parsed so far, if any menu load happened.
    pub fn entries(&self) -> Option<&[Entry]> {
        self.entries.as_deref()
    }

    /// Handle a menu load: pick an entry from `config_text` and show it.
    ///
    /// With no entries the scene is left untouched and
    /// [`PresentOutcome::NoEntries`] is returned.
    pub fn on_menu_loaded<S, R, G>(
        &mut self,
        config_text: &str,
        scene: &mut S,
        source: &mut R,
        rng: &mut G,
    ) -> Result<PresentOutcome, MenuTextError>
    where
        S: MenuScene<Handle = H, Template = T>,
        R: TemplateSource<Template = T> + ?Sized,
        G: Rng + ?Sized,
    {
        let entries = self.refresh_entries(config_text);

        let Some((index, entry)) = select_entry(entries, rng) else {
            warn!("Custom text contained no entries! Leaving original logo intact.");
            return Ok(PresentOutcome::NoEntries);
        };

        let total = entries.len();
        let entry = entry.clone();
        debug!("Entry picked: {} from {} options", entry.lines().join(" "), total);

        self.present(&entry, scene, source)?;
        Ok(PresentOutcome::Presented { index, total, entry })
    }

    /// Show `entry` in the logo.
    ///
    /// Exactly two lines are drawn like the original logo: top and bottom,
    /// each in its default color. Anything else is drawn as one block in
    /// the neutral color, centered between the two anchors.
    pub fn present<S, R>(
        &mut self,
        entry: &Entry,
        scene: &mut S,
        source: &mut R,
    ) -> Result<(), MenuTextError>
    where
        S: MenuScene<Handle = H, Template = T>,
        R: TemplateSource<Template = T> + ?Sized,
    {
        let handles = self.cache.ensure(scene, source, &self.style)?;

        if let [top, bottom] = entry.lines() {
            scene.set_text(handles.main, top);
            scene.set_text(handles.bottom, bottom);
            return Ok(());
        }

        scene.set_text(handles.bottom, "");

        let main_pos = scene.position(handles.main).unwrap_or(self.style.main_anchor);
        let bottom_pos = scene.position(handles.bottom).unwrap_or(self.style.bottom_anchor);
        scene.set_position(handles.main, LogoStyle::vertical_midpoint(main_pos, bottom_pos));

        scene.set_color(handles.main, self.style.neutral_color);
        scene.set_text(handles.main, &entry.joined());

        Ok(())
    }

    fn refresh_entries(&mut self, config_text: &str) -> &[Entry] {
        let stale = self.entries.is_none() || self.parsed_from != config_text;
        if stale {
            let entries = parse_entries(config_text);
            debug!("Parsed {} entries from custom text", entries.len());
            self.parsed_from = config_text.to_string();
            self.entries = Some(entries);
        }
        self.entries.as_deref().unwrap_or_default()
    }
}
