//! Patch file format and operations.

use serde::{Deserialize, Serialize};
use std::path::Path;

use legato_midi::DEFAULT_UPDATE_RATE;
use legato_synth::{Voice, VoiceAllocator};

use crate::error::PatchError;
use crate::parameter_config::ParameterConfig;
use crate::parameter_set::ParameterSet;

/// Default voice pool size.
pub const DEFAULT_VOICES: usize = 8;

/// Patch file describing an instrument's MIDI controls and voice pool.
///
/// Patches are stored as TOML files. They can be loaded from files, created
/// programmatically, and saved to disk.
///
/// # TOML Format
///
/// ```toml
/// name = "Electric piano"
/// description = "Tine piano with a filter on the mod wheel"
/// voices = 8
/// update_rate = 60.0
///
/// [[parameters]]
/// name = "cutoff"
/// kind = "control_change"
/// number = 1
/// range = [200.0, 8000.0]
/// default = 1000.0
///
/// [[parameters]]
/// name = "bend"
/// kind = "pitch_bend"
/// range = [-2.0, 2.0]
/// default = 0.0
/// filter_hz = 30.0
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patch {
    /// Name of the patch.
    pub name: String,

    /// Optional description of the patch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Number of voices in the pool (defaults to 8).
    #[serde(default = "default_voices")]
    pub voices: usize,

    /// Control ticks per second shared by every parameter (defaults to 60).
    #[serde(default = "default_update_rate")]
    pub update_rate: f32,

    /// MIDI-controlled parameters.
    #[serde(default)]
    pub parameters: Vec<ParameterConfig>,
}

fn default_voices() -> usize {
    DEFAULT_VOICES
}

fn default_update_rate() -> f32 {
    DEFAULT_UPDATE_RATE
}

impl Patch {
    /// Create a new patch with no parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            voices: DEFAULT_VOICES,
            update_rate: DEFAULT_UPDATE_RATE,
            parameters: Vec::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the voice pool size.
    pub fn with_voices(mut self, voices: usize) -> Self {
        self.voices = voices;
        self
    }

    /// Set the control update rate.
    pub fn with_update_rate(mut self, update_rate: f32) -> Self {
        self.update_rate = update_rate;
        self
    }

    /// Add a parameter entry.
    pub fn with_parameter(mut self, parameter: ParameterConfig) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Load a patch from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PatchError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| PatchError::read_file(path, e))?;
        let patch = Self::from_toml(&content)?;
        tracing::info!(
            path = %path.display(),
            name = %patch.name,
            parameters = patch.parameters.len(),
            voices = patch.voices,
            "patch loaded"
        );
        Ok(patch)
    }

    /// Load a patch from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, PatchError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the patch to a TOML file, creating parent directories as needed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PatchError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| PatchError::create_dir(parent, e))?;
            }
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| PatchError::write_file(path, e))?;
        tracing::info!(path = %path.display(), name = %self.name, "patch saved");
        Ok(())
    }

    /// Convert the patch to a TOML string.
    pub fn to_toml(&self) -> Result<String, PatchError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Get a parameter entry by name.
    pub fn parameter(&self, name: &str) -> Option<&ParameterConfig> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Build every parameter, in file order.
    ///
    /// # Errors
    ///
    /// Fails on the first entry that cannot be built, or on a repeated name.
    pub fn build_parameters(&self) -> Result<ParameterSet, PatchError> {
        let mut set = ParameterSet::new();
        for config in &self.parameters {
            let parameter = config.build(self.update_rate)?;
            tracing::debug!(
                name = %config.name,
                kind = ?config.kind,
                description = parameter.description(),
                "parameter built"
            );
            set.insert(config.name.clone(), parameter)?;
        }
        Ok(set)
    }

    /// Build a voice pool of the configured size, creating each voice with
    /// `make(index)`.
    ///
    /// # Errors
    ///
    /// Returns [`PatchError::EmptyVoicePool`] if the patch asks for zero voices.
    pub fn build_allocator<V: Voice>(
        &self,
        make: impl FnMut(usize) -> V,
    ) -> Result<VoiceAllocator<V>, PatchError> {
        if self.voices == 0 {
            return Err(PatchError::EmptyVoicePool);
        }
        Ok(VoiceAllocator::from_fn(self.voices, make))
    }
}

impl Default for Patch {
    fn default() -> Self {
        Self::new("Untitled")
    }
}
