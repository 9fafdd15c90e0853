use std::path::Path;

use nova_j2k_types::Nullability;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::element::{Modality, Visibility};

/// Knobs controlling the defaults the converter picks when the source says
/// nothing.
///
/// ```toml
/// force_not_null_types = true
/// open_by_default = false
/// public_by_default = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterSettings {
    /// Reference types built without nullability facts become `NotNull`
    /// instead of `Default`.
    pub force_not_null_types: bool,
    pub open_by_default: bool,
    pub public_by_default: bool,
}

impl Default for ConverterSettings {
    fn default() -> Self {
        Self {
            force_not_null_types: true,
            open_by_default: false,
            public_by_default: false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read converter settings {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse converter settings: {0}")]
    Toml(String),
}

impl From<toml::de::Error> for SettingsError {
    fn from(err: toml::de::Error) -> Self {
        SettingsError::Toml(err.message().to_string())
    }
}

impl ConverterSettings {
    #[must_use]
    pub fn default_nullability(&self) -> Nullability {
        if self.force_not_null_types {
            Nullability::NotNull
        } else {
            Nullability::Default
        }
    }

    #[must_use]
    pub fn default_modality(&self) -> Modality {
        if self.open_by_default {
            Modality::Open
        } else {
            Modality::Final
        }
    }

    #[must_use]
    pub fn default_visibility(&self) -> Visibility {
        if self.public_by_default {
            Visibility::Public
        } else {
            Visibility::Internal
        }
    }

    /// Parses settings, returning them together with the keys that were
    /// ignored. Unknown keys are logged, not rejected.
    pub fn from_toml_str(text: &str) -> Result<(Self, Vec<String>), SettingsError> {
        let (settings, unknown) = deserialize_with_unknown_keys::<Self>(text)?;
        for key in &unknown {
            tracing::warn!(
                target: "nova.j2k.settings",
                key = %key,
                "ignoring unknown converter setting"
            );
        }
        Ok((settings, unknown))
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<(Self, Vec<String>), SettingsError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

fn deserialize_with_unknown_keys<T: DeserializeOwned>(
    text: &str,
) -> Result<(T, Vec<String>), toml::de::Error> {
    let mut unknown = Vec::<String>::new();
    let deserializer = toml::de::Deserializer::new(text);
    let value = serde_ignored::deserialize(deserializer, |path| {
        // Root paths render with a leading `.`.
        unknown.push(path.to_string().trim_start_matches('.').to_string());
    })?;
    unknown.sort();
    unknown.dedup();
    Ok((value, unknown))
}
