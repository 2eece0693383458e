//! Scene access used by the logo controller.
//!
//! The controller never touches a concrete scene graph. Hosts implement
//! [`MenuScene`] over whatever holds their objects; [`WorldScene`] is the
//! implementation over a Bevy [`World`].
//!
//! [`WorldScene`]: crate::world_scene::WorldScene
//! [`World`]: bevy::prelude::World

use std::fmt::Debug;

use bevy::prelude::*;

/// Structural layout applied to newly created text objects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextLayoutSpec {
    /// Center the text horizontally.
    pub centered: bool,
    /// Font size before scaling.
    pub font_size: f32,
    /// Fixed size of the text box.
    pub bounds: Vec2,
    /// Interpret inline `<color=...>` markup.
    pub rich_text: bool,
    /// Wrap long lines at word boundaries.
    pub word_wrap: bool,
    /// Uniform scale applied on top of the template's scale.
    pub scale: f32,
}

impl Default for TextLayoutSpec {
    fn default() -> Self {
        Self {
            centered: true,
            font_size: 12.0,
            bounds: Vec2::new(2.0, 2.0),
            rich_text: true,
            word_wrap: false,
            scale: 3.7,
        }
    }
}

/// Capability to find, create and mutate the menu's text objects.
///
/// Lookups take `&mut self` so implementations backed by an ECS can build
/// queries on the fly.
pub trait MenuScene {
    /// Reference to a live scene object.
    type Handle: Copy + Eq + Debug;
    /// Loaded blueprint new text objects are cloned from.
    type Template;
    /// Rendering style borrowed from text already in the scene.
    type FontMaterial;

    /// Find an object by name.
    fn find_by_name(&mut self, name: &str) -> Option<Self::Handle>;

    /// Every live object with its name, descendants included.
    fn enumerate_all(&mut self) -> Vec<(Self::Handle, String)>;

    /// Remove an object (and its descendants) from the scene.
    fn destroy(&mut self, handle: Self::Handle);

    /// Check if a handle still refers to a live object.
    fn is_alive(&mut self, handle: Self::Handle) -> bool;

    /// Font materials of text already in the scene, by font name.
    fn font_materials(&mut self) -> Vec<(String, Self::FontMaterial)>;

    /// Use `material` for text created from `template`.
    fn apply_font_material(template: &mut Self::Template, material: &Self::FontMaterial);

    /// Create a new, hidden text object from the template.
    fn instantiate(&mut self, template: &Self::Template, name: &str) -> Self::Handle;

    /// Apply structural layout to a text object.
    fn apply_layout(&mut self, handle: Self::Handle, layout: &TextLayoutSpec);

    /// Show or hide an object.
    fn set_visible(&mut self, handle: Self::Handle, visible: bool);

    /// Current position, or `None` if the object is gone.
    fn position(&mut self, handle: Self::Handle) -> Option<Vec3>;

    /// Move an object.
    fn set_position(&mut self, handle: Self::Handle, position: Vec3);

    /// Set the base text color.
    fn set_color(&mut self, handle: Self::Handle, color: Color);

    /// Replace the text content.
    fn set_text(&mut self, handle: Self::Handle, text: &str);
}
