//! In-memory scene and template source for unit tests.

use bevy::prelude::*;

use super::{MenuScene, MenuTextError, TemplateSource, TextLayoutSpec};

#[derive(Debug, Clone)]
pub(crate) struct MockObject {
    pub name: String,
    pub template: String,
    pub layout: Option<TextLayoutSpec>,
    pub visible: bool,
    pub position: Vec3,
    pub color: Color,
    pub text: String,
}

impl MockObject {
    fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            template: String::new(),
            layout: None,
            visible: true,
            position: Vec3::ZERO,
            color: Color::WHITE,
            text: String::new(),
        }
    }
}

/// Flat list of objects; handles are indices, destroyed slots become `None`.
#[derive(Debug, Default)]
pub(crate) struct MockScene {
    pub objects: Vec<Option<MockObject>>,
    pub fonts: Vec<(String, String)>,
    pub instantiated: usize,
    pub destroyed: usize,
    pub mutations: usize,
}

impl MockScene {
    pub fn add(&mut self, name: &str) -> u32 {
        self.objects.push(Some(MockObject::named(name)));
        (self.objects.len() - 1) as u32
    }

    pub fn object(&self, handle: u32) -> &MockObject {
        self.objects[handle as usize].as_ref().expect("object destroyed")
    }

    pub fn count_named(&self, name: &str) -> usize {
        self.objects.iter().flatten().filter(|o| o.name == name).count()
    }

    fn object_mut(&mut self, handle: u32) -> Option<&mut MockObject> {
        self.mutations += 1;
        self.objects.get_mut(handle as usize)?.as_mut()
    }
}

impl MenuScene for MockScene {
    type Handle = u32;
    type Template = String;
    type FontMaterial = String;

    fn find_by_name(&mut self, name: &str) -> Option<u32> {
        self.enumerate_all()
            .into_iter()
            .find_map(|(handle, n)| (n == name).then_some(handle))
    }

    fn enumerate_all(&mut self) -> Vec<(u32, String)> {
        self.objects
            .iter()
            .enumerate()
            .filter_map(|(i, o)| Some((i as u32, o.as_ref()?.name.clone())))
            .collect()
    }

    fn destroy(&mut self, handle: u32) {
        if let Some(slot) = self.objects.get_mut(handle as usize) {
            if slot.take().is_some() {
                self.destroyed += 1;
            }
        }
    }

    fn is_alive(&mut self, handle: u32) -> bool {
        matches!(self.objects.get(handle as usize), Some(Some(_)))
    }

    fn font_materials(&mut self) -> Vec<(String, String)> {
        self.fonts.clone()
    }

    fn apply_font_material(template: &mut String, material: &String) {
        template.push('+');
        template.push_str(material);
    }

    fn instantiate(&mut self, template: &String, name: &str) -> u32 {
        self.instantiated += 1;
        let handle = self.add(name);
        let object = self.objects[handle as usize].as_mut().expect("just added");
        object.template = template.clone();
        object.visible = false;
        handle
    }

    fn apply_layout(&mut self, handle: u32, layout: &TextLayoutSpec) {
        if let Some(object) = self.object_mut(handle) {
            object.layout = Some(*layout);
        }
    }

    fn set_visible(&mut self, handle: u32, visible: bool) {
        if let Some(object) = self.object_mut(handle) {
            object.visible = visible;
        }
    }

    fn position(&mut self, handle: u32) -> Option<Vec3> {
        self.objects.get(handle as usize)?.as_ref().map(|o| o.position)
    }

    fn set_position(&mut self, handle: u32, position: Vec3) {
        if let Some(object) = self.object_mut(handle) {
            object.position = position;
        }
    }

    fn set_color(&mut self, handle: u32, color: Color) {
        if let Some(object) = self.object_mut(handle) {
            object.color = color;
        }
    }

    fn set_text(&mut self, handle: u32, text: &str) {
        if let Some(object) = self.object_mut(handle) {
            object.text = text.to_string();
        }
    }
}

/// Always loads the embedded template "embedded" unless told to fail.
#[derive(Debug, Default)]
pub(crate) struct FakeTemplates {
    pub fail: bool,
    pub embedded_loads: usize,
}

impl TemplateSource for FakeTemplates {
    type Template = String;

    fn load_bundle(&mut self, _bytes: Vec<u8>, _asset_name: &str) -> Result<Option<String>, MenuTextError> {
        Ok(None)
    }

    fn load_embedded(&mut self, asset_name: &str) -> Result<String, MenuTextError> {
        if self.fail {
            return Err(MenuTextError::template(asset_name, "embedded bundle is corrupt"));
        }
        self.embedded_loads += 1;
        Ok("embedded".to_string())
    }
}
