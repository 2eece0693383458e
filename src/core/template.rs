//! Loading the text template from a font bundle.

use std::fs;
use std::path::Path;

use bevy::prelude::*;

use super::MenuTextError;

/// Source of text templates.
///
/// A bundle is the raw content of the font file at the configured path.
/// The embedded default is used whenever that file is missing, unreadable
/// or has no template with the requested name.
pub trait TemplateSource {
    /// The loaded template.
    type Template;

    /// Extract the named template from bundle bytes.
    ///
    /// Returns `Ok(None)` if the bundle has no such template.
    fn load_bundle(
        &mut self,
        bytes: Vec<u8>,
        asset_name: &str,
    ) -> Result<Option<Self::Template>, MenuTextError>;

    /// Load the named template from the embedded default.
    fn load_embedded(&mut self, asset_name: &str) -> Result<Self::Template, MenuTextError>;

    /// Bytes of the embedded default bundle, if it can be written to disk.
    fn embedded_payload(&self) -> Option<&[u8]> {
        None
    }
}

/// Load a template, falling back to the embedded default.
///
/// If nothing exists at `path` and the source has an embedded payload, the
/// payload is written there first so users have a file to replace.
///
/// Only a failure of the embedded default is returned as an error.
pub fn load_template<S: TemplateSource + ?Sized>(
    path: &Path,
    asset_name: &str,
    source: &mut S,
) -> Result<S::Template, MenuTextError> {
    if !path.exists() {
        if let Some(payload) = source.embedded_payload() {
            match write_payload(path, payload) {
                Ok(()) => debug!("No custom font found, writing default to '{}'", path.display()),
                Err(e) => warn!("Could not write default font: {}", e),
            }
        }
    }

    if path.exists() {
        let loaded = fs::read(path)
            .map_err(|e| MenuTextError::io(path, e))
            .and_then(|bytes| source.load_bundle(bytes, asset_name));

        match loaded {
            Ok(Some(template)) => {
                debug!("Loaded text template '{}' from '{}'", asset_name, path.display());
                return Ok(template);
            }
            Ok(None) => {
                debug!("No '{}' template in '{}', using embedded default", asset_name, path.display());
            }
            Err(e) => {
                warn!("{}; using embedded default", e);
            }
        }
    }

    source.load_embedded(asset_name)
}

fn write_payload(path: &Path, payload: &[u8]) -> Result<(), MenuTextError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| MenuTextError::io(parent, e))?;
        }
    }
    fs::write(path, payload).map_err(|e| MenuTextError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// Bundles are `name:value` lines; the embedded default is "embedded".
    #[derive(Default)]
    struct FakeSource {
        payload: Option<&'static [u8]>,
        embedded_fails: bool,
        bundle_loads: usize,
    }

    impl TemplateSource for FakeSource {
        type Template = String;

        fn load_bundle(
            &mut self,
            bytes: Vec<u8>,
            asset_name: &str,
        ) -> Result<Option<String>, MenuTextError> {
            self.bundle_loads += 1;
            let text = String::from_utf8(bytes)
                .map_err(|e| MenuTextError::template(asset_name, e))?;
            Ok(text.lines().find_map(|line| {
                let (name, value) = line.split_once(':')?;
                (name == asset_name).then(|| value.to_string())
            }))
        }

        fn load_embedded(&mut self, asset_name: &str) -> Result<String, MenuTextError> {
            if self.embedded_fails {
                return Err(MenuTextError::template(asset_name, "corrupt payload"));
            }
            Ok("embedded".to_string())
        }

        fn embedded_payload(&self) -> Option<&[u8]> {
            self.payload
        }
    }

    #[test]
    fn test_load_from_bundle() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("font");
        fs::write(&path, "Other:x\nText:custom").unwrap();

        let mut source = FakeSource::default();
        let template = load_template(&path, "Text", &mut source).unwrap();
        assert_eq!(template, "custom");
        assert_eq!(source.bundle_loads, 1);
    }

    #[test]
    fn test_missing_asset_falls_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("font");
        fs::write(&path, "Other:x").unwrap();

        let mut source = FakeSource::default();
        assert_eq!(load_template(&path, "Text", &mut source).unwrap(), "embedded");
    }

    #[test]
    fn test_corrupt_bundle_falls_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("font");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let mut source = FakeSource::default();
        assert_eq!(load_template(&path, "Text", &mut source).unwrap(), "embedded");
    }

    #[test]
    fn test_missing_path_without_payload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("font");

        let mut source = FakeSource::default();
        assert_eq!(load_template(&path, "Text", &mut source).unwrap(), "embedded");
        assert_eq!(source.bundle_loads, 0);
        assert!(!path.exists());
    }

    #[test]
    fn test_missing_path_writes_payload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("UserData").join("font");

        let mut source = FakeSource {
            payload: Some(b"Text:from payload"),
            ..Default::default()
        };
        let template = load_template(&path, "Text", &mut source).unwrap();

        assert_eq!(template, "from payload");
        assert_eq!(fs::read(&path).unwrap(), b"Text:from payload");
    }

    #[test]
    fn test_existing_file_not_overwritten() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("font");
        fs::write(&path, "Text:user font").unwrap();

        let mut source = FakeSource {
            payload: Some(b"Text:from payload"),
            ..Default::default()
        };
        assert_eq!(load_template(&path, "Text", &mut source).unwrap(), "user font");
        assert_eq!(fs::read_to_string(&path).unwrap(), "Text:user font");
    }

    #[test]
    fn test_embedded_failure_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("font");

        let mut source = FakeSource {
            embedded_fails: true,
            ..Default::default()
        };
        let result = load_template(&path, "Text", &mut source);
        assert!(matches!(result, Err(MenuTextError::Template { .. })));
    }
}
