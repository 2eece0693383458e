//! [`MenuScene`] and [`TemplateSource`] over a Bevy [`World`].
//!
//! Text objects are `Text2d` entities found by their [`Name`]. When the
//! layout allows rich text, color markup is rendered as `TextSpan` children.

use bevy::prelude::*;
use bevy::text::{FontSmoothing, Justify, LineBreak, TextBounds};

use crate::core::{
    MenuScene, MenuTextError, TemplateSource, TextLayoutSpec, has_markup, parse_markup,
};

/// Blueprint for logo text entities.
#[derive(Debug, Clone, Default)]
pub struct TextTemplate {
    /// Font of the text.
    pub font: Handle<Font>,
    /// Smoothing, possibly borrowed from text already in the scene.
    pub font_smoothing: FontSmoothing,
}

impl TextTemplate {
    /// Create a template for `font`.
    pub fn new(font: Handle<Font>) -> Self {
        Self {
            font,
            ..default()
        }
    }
}

/// Marker for text entities created by this crate.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct MenuTextObject {
    /// Whether color markup is rendered.
    pub rich_text: bool,
}

/// Marker for spans rendered from markup.
#[derive(Component, Debug, Clone, Copy)]
pub struct MenuTextSpan {
    /// The span has no color of its own and follows its parent.
    pub inherit_color: bool,
}

/// A [`MenuScene`] backed by a [`World`].
pub struct WorldScene<'w> {
    world: &'w mut World,
}

impl<'w> WorldScene<'w> {
    /// Wrap a world.
    pub fn new(world: &'w mut World) -> Self {
        Self { world }
    }

    /// The wrapped world.
    pub fn world(&mut self) -> &mut World {
        self.world
    }
}

impl MenuScene for WorldScene<'_> {
    type Handle = Entity;
    type Template = TextTemplate;
    type FontMaterial = FontSmoothing;

    fn find_by_name(&mut self, name: &str) -> Option<Entity> {
        let mut query = self.world.query::<(Entity, &Name)>();
        query
            .iter(self.world)
            .find_map(|(entity, n)| (n.as_str() == name).then_some(entity))
    }

    fn enumerate_all(&mut self) -> Vec<(Entity, String)> {
        let mut query = self.world.query::<(Entity, &Name)>();
        query
            .iter(self.world)
            .map(|(entity, name)| (entity, name.as_str().to_string()))
            .collect()
    }

    fn destroy(&mut self, handle: Entity) {
        if self.is_alive(handle) {
            self.world.despawn(handle);
        }
    }

    fn is_alive(&mut self, handle: Entity) -> bool {
        self.world.get_entity(handle).is_ok()
    }

    fn font_materials(&mut self) -> Vec<(String, FontSmoothing)> {
        let mut query = self
            .world
            .query_filtered::<&TextFont, (Without<MenuTextObject>, Without<MenuTextSpan>)>();
        let fonts: Vec<_> = query
            .iter(self.world)
            .map(|font| (font.font.id(), font.font_smoothing))
            .collect();

        let server = self.world.get_resource::<AssetServer>();
        fonts
            .into_iter()
            .map(|(id, smoothing)| {
                let name = server
                    .and_then(|server| server.get_path(id))
                    .map(|path| path.to_string())
                    .unwrap_or_else(|| "default".to_string());
                (name, smoothing)
            })
            .collect()
    }

    fn apply_font_material(template: &mut TextTemplate, material: &FontSmoothing) {
        template.font_smoothing = *material;
    }

    fn instantiate(&mut self, template: &TextTemplate, name: &str) -> Entity {
        self.world
            .spawn((
                Name::new(name.to_string()),
                Text2d::default(),
                TextFont {
                    font: template.font.clone(),
                    font_smoothing: template.font_smoothing,
                    ..default()
                },
                TextColor::default(),
                Transform::default(),
                Visibility::Hidden,
                MenuTextObject::default(),
            ))
            .id()
    }

    fn apply_layout(&mut self, handle: Entity, layout: &TextLayoutSpec) {
        let Ok(mut entity) = self.world.get_entity_mut(handle) else {
            return;
        };

        let justify = if layout.centered { Justify::Center } else { Justify::Left };
        let linebreak = if layout.word_wrap {
            LineBreak::WordBoundary
        } else {
            LineBreak::NoWrap
        };

        entity.insert((
            TextLayout::new(justify, linebreak),
            TextBounds::new(layout.bounds.x, layout.bounds.y),
            MenuTextObject {
                rich_text: layout.rich_text,
            },
        ));

        if let Some(mut font) = entity.get_mut::<TextFont>() {
            font.font_size = layout.font_size;
        }
        if let Some(mut transform) = entity.get_mut::<Transform>() {
            transform.scale *= layout.scale;
        }
    }

    fn set_visible(&mut self, handle: Entity, visible: bool) {
        if let Some(mut visibility) = self.world.get_mut::<Visibility>(handle) {
            *visibility = if visible {
                Visibility::Inherited
            } else {
                Visibility::Hidden
            };
        }
    }

    fn position(&mut self, handle: Entity) -> Option<Vec3> {
        self.world.get::<Transform>(handle).map(|t| t.translation)
    }

    fn set_position(&mut self, handle: Entity, position: Vec3) {
        if let Some(mut transform) = self.world.get_mut::<Transform>(handle) {
            transform.translation = position;
        }
    }

    fn set_color(&mut self, handle: Entity, color: Color) {
        let Ok(mut entity) = self.world.get_entity_mut(handle) else {
            return;
        };
        entity.insert(TextColor(color));
        let children = entity
            .get::<Children>()
            .map(|children| children.to_vec())
            .unwrap_or_default();

        for child in children {
            let Ok(mut child) = self.world.get_entity_mut(child) else {
                continue;
            };
            if child.get::<MenuTextSpan>().is_some_and(|span| span.inherit_color) {
                child.insert(TextColor(color));
            }
        }
    }

    fn set_text(&mut self, handle: Entity, text: &str) {
        let Ok(mut entity) = self.world.get_entity_mut(handle) else {
            return;
        };

        let rich = entity.get::<MenuTextObject>().is_some_and(|t| t.rich_text);
        let base_color = entity.get::<TextColor>().map_or(Color::WHITE, |c| c.0);
        let font = entity.get::<TextFont>().cloned().unwrap_or_default();

        // Spans from the previous text
        entity.despawn_related::<Children>();

        if !rich || !has_markup(text) {
            entity.insert(Text2d::new(text));
            return;
        }

        entity.insert(Text2d::default());
        entity.with_children(|parent| {
            for span in parse_markup(text) {
                let (color, inherit_color) = match span.color {
                    Some(color) => (color, false),
                    None => (base_color, true),
                };
                parent.spawn((
                    TextSpan::new(span.text),
                    font.clone(),
                    TextColor(color),
                    MenuTextSpan { inherit_color },
                ));
            }
        });
    }
}

/// A [`TemplateSource`] decoding TTF/OTF files into [`Assets<Font>`].
///
/// A font file holds a single face, so the asset name only labels errors.
/// Without a payload of its own, the embedded default is Bevy's built-in
/// font. Without font storage (e.g. headless apps) every load resolves to
/// that default.
pub struct FontTemplateSource<'a> {
    fonts: Option<&'a mut Assets<Font>>,
    payload: Option<&'static [u8]>,
}

impl<'a> FontTemplateSource<'a> {
    /// Create a source adding fonts to `fonts`.
    pub fn new(fonts: Option<&'a mut Assets<Font>>) -> Self {
        Self {
            fonts,
            payload: None,
        }
    }

    /// Use `payload` as the embedded default font.
    ///
    /// It is also written to the font path when nothing is there yet.
    pub fn with_payload(mut self, payload: Option<&'static [u8]>) -> Self {
        self.payload = payload;
        self
    }

    fn decode(&mut self, bytes: Vec<u8>, asset_name: &str) -> Result<Option<TextTemplate>, MenuTextError> {
        let Some(fonts) = self.fonts.as_deref_mut() else {
            return Ok(None);
        };
        let font = Font::try_from_bytes(bytes).map_err(|e| MenuTextError::template(asset_name, e))?;
        Ok(Some(TextTemplate::new(fonts.add(font))))
    }
}

impl TemplateSource for FontTemplateSource<'_> {
    type Template = TextTemplate;

    fn load_bundle(
        &mut self,
        bytes: Vec<u8>,
        asset_name: &str,
    ) -> Result<Option<TextTemplate>, MenuTextError> {
        self.decode(bytes, asset_name)
    }

    fn load_embedded(&mut self, asset_name: &str) -> Result<TextTemplate, MenuTextError> {
        let decoded = match self.payload {
            Some(payload) => self.decode(payload.to_vec(), asset_name)?,
            None => None,
        };
        Ok(decoded.unwrap_or_default())
    }

    fn embedded_payload(&self) -> Option<&[u8]> {
        self.payload
    }
}
