//! Lazily created, reused logo text objects.

use std::path::{Path, PathBuf};

use bevy::prelude::*;

use super::{LogoStyle, MenuScene, MenuTextError, TemplateSource, load_template};

/// The two text objects making up the replacement logo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoHandles<H> {
    /// Top line, or the whole entry when it isn't exactly two lines.
    pub main: H,
    /// Bottom line.
    pub bottom: H,
}

/// Holds the template and both text objects for the lifetime of the process.
///
/// [`ensure`](Self::ensure) loads the template once, creates each text
/// object once and resets both to their defaults on every call. A handle
/// whose object disappeared (e.g. the scene was reloaded) is looked up by
/// name again, and only recreated when that fails too.
#[derive(Debug)]
pub struct PresentationCache<H, T> {
    font_path: PathBuf,
    template: Option<T>,
    main: Option<H>,
    bottom: Option<H>,
}

impl<H, T> PresentationCache<H, T>
where
    H: Copy + Eq + std::fmt::Debug,
{
    /// Create an empty cache that loads its font bundle from `font_path`.
    pub fn new(font_path: impl Into<PathBuf>) -> Self {
        Self {
            font_path: font_path.into(),
            template: None,
            main: None,
            bottom: None,
        }
    }

    /// Path of the font bundle.
    pub fn font_path(&self) -> &Path {
        &self.font_path
    }

    /// The loaded template, if any.
    pub fn template(&self) -> Option<&T> {
        self.template.as_ref()
    }

    /// Cached handles, if both exist.
    pub fn handles(&self) -> Option<LogoHandles<H>> {
        Some(LogoHandles {
            main: self.main?,
            bottom: self.bottom?,
        })
    }

    /// Check if both text objects have been set up.
    pub fn is_initialized(&self) -> bool {
        self.handles().is_some()
    }

    /// Make sure both text objects exist and reset them to their defaults.
    ///
    /// Also removes the default logo if it is still in the scene.
    pub fn ensure<S, R>(
        &mut self,
        scene: &mut S,
        source: &mut R,
        style: &LogoStyle,
    ) -> Result<LogoHandles<H>, MenuTextError>
    where
        S: MenuScene<Handle = H, Template = T>,
        R: TemplateSource<Template = T> + ?Sized,
    {
        let template = match self.template.take() {
            Some(template) => template,
            None => self.load_styled_template(scene, source, style)?,
        };

        remove_default_logo(scene, &style.default_logo_name);

        let main = resolve(&mut self.main, scene, &template, &style.main_name, style);
        let bottom = resolve(&mut self.bottom, scene, &template, &style.bottom_name, style);
        self.template = Some(template);

        scene.set_position(main, style.main_anchor);
        scene.set_color(main, style.main_color);
        scene.set_text(main, &style.default_text[0]);

        scene.set_position(bottom, style.bottom_anchor);
        scene.set_color(bottom, style.bottom_color);
        scene.set_text(bottom, &style.default_text[1]);

        Ok(LogoHandles { main, bottom })
    }

    fn load_styled_template<S, R>(
        &self,
        scene: &mut S,
        source: &mut R,
        style: &LogoStyle,
    ) -> Result<T, MenuTextError>
    where
        S: MenuScene<Handle = H, Template = T>,
        R: TemplateSource<Template = T> + ?Sized,
    {
        let material = scene
            .font_materials()
            .into_iter()
            .find(|(name, _)| !name.contains(style.excluded_font_tag.as_str()));

        let mut template = load_template(&self.font_path, &style.template_asset, source)?;

        if let Some((name, material)) = material {
            debug!("Using font material of '{}'", name);
            S::apply_font_material(&mut template, &material);
        }

        Ok(template)
    }
}

fn remove_default_logo<S: MenuScene>(scene: &mut S, name: &str) {
    let logo = scene
        .enumerate_all()
        .into_iter()
        .find_map(|(handle, object_name)| (object_name == name).then_some(handle));

    if let Some(logo) = logo {
        debug!("Removing default logo '{}'", name);
        scene.destroy(logo);
    }
}

fn resolve<S: MenuScene>(
    slot: &mut Option<S::Handle>,
    scene: &mut S,
    template: &S::Template,
    name: &str,
    style: &LogoStyle,
) -> S::Handle {
    if let Some(handle) = *slot {
        if scene.is_alive(handle) {
            return handle;
        }
        debug!("Cached '{}' is gone", name);
    }

    let handle = match scene.find_by_name(name) {
        Some(handle) => {
            debug!("Reusing existing '{}'", name);
            handle
        }
        None => {
            let handle = scene.instantiate(template, name);
            scene.apply_layout(handle, &style.layout);
            scene.set_visible(handle, true);
            info!("Created menu text '{}'", name);
            handle
        }
    };

    *slot = Some(handle);
    handle
}
