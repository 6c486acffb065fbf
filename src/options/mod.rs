//! Centralized animation/scene options with TOML preset support.
//!
//! Every tuning constant of the blob (clock steps, phase durations, noise
//! terms, orbit parameters, lighting, camera sway) lives here so presets can
//! override any subset of them.

mod animation;
mod blob;
mod camera;
mod lighting;
mod satellites;

use std::path::Path;

pub use animation::AnimationOptions;
pub use blob::{BlobOptions, Wave};
pub use camera::CameraOptions;
pub use lighting::LightingOptions;
pub use satellites::SatelliteOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::MorphError;

/// Physically based surface parameters shared by blob materials.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct MaterialOptions {
    /// Base color (sRGB).
    pub color: [f32; 3],
    /// Metalness in `[0, 1]`.
    pub metalness: f32,
    /// Roughness in `[0, 1]`.
    pub roughness: f32,
    /// Clearcoat layer strength.
    pub clearcoat: f32,
    /// Clearcoat layer roughness.
    pub clearcoat_roughness: f32,
}

impl Default for MaterialOptions {
    fn default() -> Self {
        Self {
            color: [0.1, 0.1, 0.1],
            metalness: 0.0,
            roughness: 0.5,
            clearcoat: 0.0,
            clearcoat_roughness: 0.0,
        }
    }
}

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[animation]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Clock and break-phase choreography.
    pub animation: AnimationOptions,
    /// Main blob geometry and motion.
    pub blob: BlobOptions,
    /// Satellite layout and motion.
    pub satellites: SatelliteOptions,
    /// Lighting rig.
    pub lighting: LightingOptions,
    /// Camera projection and sway.
    pub camera: CameraOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, MorphError> {
        let content = std::fs::read_to_string(path).map_err(MorphError::Io)?;
        toml::from_str(&content)
            .map_err(|e| MorphError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), MorphError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| MorphError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(MorphError::Io)?;
        }
        std::fs::write(path, content).map_err(MorphError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[animation]
phase_duration = 4.0

[satellites]
count = 3
seed = 7
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.animation.phase_duration, 4.0);
        assert_eq!(opts.satellites.count, 3);
        assert_eq!(opts.satellites.seed, Some(7));
        // Everything else should be default
        assert_eq!(opts.animation.transition_window, 2.0);
        assert_eq!(opts.blob.segments, 80);
        assert_eq!(opts.blob.morph_waves.len(), 4);
        assert_eq!(opts.camera.fovy, 75.0);
    }

    #[test]
    fn save_and_load_preset() {
        let dir = std::env::temp_dir()
            .join(format!("morphblob-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.animation.separated_scale = 0.5;
        opts.save(&dir.join("calm.toml")).unwrap();

        let loaded = Options::load(&dir.join("calm.toml")).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(Options::list_presets(&dir), vec!["calm".to_owned()]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn load_reports_parse_errors() {
        let dir = std::env::temp_dir()
            .join(format!("morphblob-bad-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.toml");
        std::fs::write(&path, "[animation]\nphase_duration = \"slow\"\n")
            .unwrap();

        let err = Options::load(&path).unwrap_err();
        assert!(matches!(err, MorphError::OptionsParse(_)));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("animation"));
        assert!(props.contains_key("blob"));
        assert!(props.contains_key("satellites"));
        assert!(props.contains_key("lighting"));
        assert!(props.contains_key("camera"));

        // Tuning internals are hidden from the UI
        let animation = &props["animation"]["properties"];
        assert!(animation.get("phase_duration").is_some());
        assert!(animation.get("transition_window").is_none());
        let blob = &props["blob"]["properties"];
        assert!(blob.get("radius").is_some());
        assert!(blob.get("morph_waves").is_none());
    }
}
