//! Default appearance of the replacement logo.

use bevy::prelude::*;

use super::TextLayoutSpec;

/// Name of the text object showing the top line.
pub const MAIN_TEXT_NAME: &str = "CustomMenuTextTop";
/// Name of the text object showing the bottom line.
pub const BOTTOM_TEXT_NAME: &str = "CustomMenuTextBottom";
/// Name of the built-in logo object that gets removed.
pub const DEFAULT_LOGO_NAME: &str = "Logo";
/// Name of the template asset inside a font bundle.
pub const TEMPLATE_ASSET_NAME: &str = "Text";
/// Fonts whose name contains this are never used as the ambient font material.
pub const NO_GLOW_TAG: &str = "No Glow";

/// Accent color of the top line.
pub const DEFAULT_MAIN_COLOR: Color = Color::srgb(0.0, 0.501_960_8, 1.0);
/// Alert color of the bottom line.
pub const DEFAULT_BOTTOM_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);

/// Anchors, colors and names used when resetting the logo.
///
/// Every menu load resets both text objects to these values before the
/// picked entry is written, so nothing a previous visit did survives.
#[derive(Debug, Clone, PartialEq)]
pub struct LogoStyle {
    /// Position of the top line.
    pub main_anchor: Vec3,
    /// Position of the bottom line.
    pub bottom_anchor: Vec3,
    /// Color of the top line.
    pub main_color: Color,
    /// Color of the bottom line.
    pub bottom_color: Color,
    /// Color of single or multi-line entries drawn as one block.
    pub neutral_color: Color,
    /// Text written during the reset (top, bottom).
    pub default_text: [String; 2],
    /// Name of the top text object.
    pub main_name: String,
    /// Name of the bottom text object.
    pub bottom_name: String,
    /// Name of the object removed on first setup.
    pub default_logo_name: String,
    /// Template asset to extract from the font bundle.
    pub template_asset: String,
    /// Font names containing this are skipped when borrowing a font material.
    pub excluded_font_tag: String,
    /// Structural layout of newly created text objects.
    pub layout: TextLayoutSpec,
}

impl Default for LogoStyle {
    fn default() -> Self {
        Self {
            main_anchor: Vec3::new(0.0, 21.61, 24.82),
            bottom_anchor: Vec3::new(0.0, 17.0, 24.82),
            main_color: DEFAULT_MAIN_COLOR,
            bottom_color: DEFAULT_BOTTOM_COLOR,
            neutral_color: Color::WHITE,
            default_text: ["BEAT".to_string(), "SABER".to_string()],
            main_name: MAIN_TEXT_NAME.to_string(),
            bottom_name: BOTTOM_TEXT_NAME.to_string(),
            default_logo_name: DEFAULT_LOGO_NAME.to_string(),
            template_asset: TEMPLATE_ASSET_NAME.to_string(),
            excluded_font_tag: NO_GLOW_TAG.to_string(),
            layout: TextLayoutSpec::default(),
        }
    }
}

impl LogoStyle {
    /// Set both anchors.
    pub fn anchors(mut self, main: Vec3, bottom: Vec3) -> Self {
        self.main_anchor = main;
        self.bottom_anchor = bottom;
        self
    }

    /// Set the two-line colors.
    pub fn colors(mut self, main: Color, bottom: Color) -> Self {
        self.main_color = main;
        self.bottom_color = bottom;
        self
    }

    /// Set the text written during the reset.
    pub fn default_text(mut self, main: impl Into<String>, bottom: impl Into<String>) -> Self {
        self.default_text = [main.into(), bottom.into()];
        self
    }

    /// Set the structural layout.
    pub fn layout(mut self, layout: TextLayoutSpec) -> Self {
        self.layout = layout;
        self
    }

    /// Position halfway between `main` and `bottom` on the vertical axis.
    ///
    /// The horizontal and depth components come from `main`.
    pub fn vertical_midpoint(main: Vec3, bottom: Vec3) -> Vec3 {
        Vec3::new(main.x, (main.y + bottom.y) / 2.0, main.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_midpoint() {
        let style = LogoStyle::default();
        let mid = LogoStyle::vertical_midpoint(style.main_anchor, style.bottom_anchor);
        assert!((mid.y - 19.305).abs() < 1e-4);
        assert_eq!(mid.x, 0.0);
        assert_eq!(mid.z, 24.82);
    }

    #[test]
    fn test_builder() {
        let style = LogoStyle::default()
            .anchors(Vec3::new(0.0, 40.0, 0.0), Vec3::new(0.0, -40.0, 0.0))
            .colors(Color::WHITE, Color::BLACK)
            .default_text("TOP", "BOTTOM");
        assert_eq!(style.main_anchor.y, 40.0);
        assert_eq!(style.bottom_color, Color::BLACK);
        assert_eq!(style.default_text, ["TOP".to_string(), "BOTTOM".to_string()]);
        assert_eq!(style.main_name, MAIN_TEXT_NAME);
    }
}
