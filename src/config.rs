//! User configuration: the custom text blob.

use bevy::prelude::*;

/// Text used when no configuration exists yet.
pub const DEFAULT_CUSTOM_TEXT: &str = "\
# Custom menu text
#
# One entry is picked at random every time the menu loads.
# Entries are separated by an empty line.
# Lines starting with # are ignored.
#
# An entry with exactly two lines looks like the original logo:
# the first line on top, the second one below it.
# Any other entry is drawn as one white block.
#
# Color part of a line with <color=#RRGGBB>...</color>.

BEAT
SABER

MENU
TEXT

<color=#FFD700>GOLDEN</color>
EDITION

THIS ONE
HAS
THREE LINES

ONE LINE ONLY
";

/// The configuration the logo controller reads.
///
/// Changing `custom_text` takes effect at the next menu load.
#[derive(Resource, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "persist", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "persist", serde(default))]
pub struct MenuTextConfig {
    /// Entries, separated by empty lines. `#` starts a comment line.
    pub custom_text: String,
    /// Replace the stored configuration with the defaults on next load.
    pub regenerate_config: bool,
}

impl Default for MenuTextConfig {
    fn default() -> Self {
        Self {
            custom_text: DEFAULT_CUSTOM_TEXT.to_string(),
            regenerate_config: false,
        }
    }
}

impl MenuTextConfig {
    /// Create a config with the given text.
    pub fn with_text(custom_text: impl Into<String>) -> Self {
        Self {
            custom_text: custom_text.into(),
            ..default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse_entries;

    #[test]
    fn test_default_text_parses() {
        let entries = parse_entries(&MenuTextConfig::default().custom_text);
        assert_eq!(entries.len(), 5);
        assert_eq!(entries[0].lines(), ["BEAT", "SABER"]);
        assert_eq!(entries[3].len(), 3);
        assert_eq!(entries[4].lines(), ["ONE LINE ONLY"]);
    }
}
