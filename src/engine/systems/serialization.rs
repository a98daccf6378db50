use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::{ error, info };
use serde::{ Serialize, Deserialize };
use thiserror::Error;

use crate::engine::components::component::WireComponent;
use crate::engine::components::component_types::{ BridgeError, TypeCodeBridge };
use crate::engine::modules::ecs::{ EntityId, WireEntity };

/// Snapshot layout version written by [`encode_snapshot`]
pub const SCHEMA_VERSION: u32 = 1;

// ================================================================================================
// STORABLE FORMAT
// ================================================================================================

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StorableComponent {
    #[serde(rename = "type")]
    pub type_name: String,
    pub value: serde_json::Value,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StorableEntity {
    pub id: EntityId,
    pub components: Vec<StorableComponent>,
}

/// Versioned, editor-independent persistence shape of the internal graph
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StorableSceneState {
    pub schema_version: u32,
    pub entities: Vec<StorableEntity>,
}

impl StorableSceneState {
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }
}

// ================================================================================================
// ERROR TYPES
// ================================================================================================

#[derive(Error, Debug)]
pub enum SerializationError {
    #[error("File not found: {0}")]
    FileNotFound(String),
    #[error("Snapshot file is empty: {0}")]
    EmptyFile(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Bridge(#[from] BridgeError),
    #[error("unsupported snapshot schema version {found} (expected {})", SCHEMA_VERSION)]
    UnsupportedVersion { found: u32 },
}

// ================================================================================================
// CODEC
// ================================================================================================

/// Tag every component with its human-readable type and stamp the current version
pub fn encode_snapshot(
    entities: &[WireEntity],
    bridge: &dyn TypeCodeBridge
) -> Result<StorableSceneState, SerializationError> {
    let entities = entities
        .iter()
        .map(|entity| {
            let components = entity.components
                .iter()
                .map(|c| {
                    Ok(StorableComponent {
                        type_name: bridge.to_human_readable(c.code)?.to_string(),
                        value: c.value.clone(),
                    })
                })
                .collect::<Result<Vec<_>, BridgeError>>()?;
            Ok(StorableEntity { id: entity.id.clone(), components })
        })
        .collect::<Result<Vec<_>, BridgeError>>()?;

    Ok(StorableSceneState { schema_version: SCHEMA_VERSION, entities })
}

/// Map human-readable types back to internal codes. The schema version is not
/// checked here; see [`check_schema_version`].
pub fn decode_snapshot(
    state: &StorableSceneState,
    bridge: &dyn TypeCodeBridge
) -> Result<Vec<WireEntity>, SerializationError> {
    let entities = state.entities
        .iter()
        .map(|entity| {
            let components = entity.components
                .iter()
                .map(|c| {
                    Ok(WireComponent {
                        code: bridge.from_human_readable(&c.type_name)?,
                        value: c.value.clone(),
                    })
                })
                .collect::<Result<Vec<_>, BridgeError>>()?;
            Ok(WireEntity { id: entity.id.clone(), components })
        })
        .collect::<Result<Vec<_>, BridgeError>>()?;

    Ok(entities)
}

/// Detect snapshots written by a layout this build does not know. No migration is attempted.
pub fn check_schema_version(state: &StorableSceneState) -> Result<(), SerializationError> {
    if state.schema_version == SCHEMA_VERSION {
        Ok(())
    } else {
        Err(SerializationError::UnsupportedVersion { found: state.schema_version })
    }
}

// ================================================================================================
// SAVE/LOAD FUNCTIONS
// ================================================================================================

/// Write a snapshot as pretty-printed JSON
pub fn save_snapshot(path: impl AsRef<Path>, state: &StorableSceneState) -> Result<(), SerializationError> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(state)?;

    let mut file = File::create(path).map_err(|err| {
        error!("Failed to create file {}: {}", path.display(), err);
        err
    })?;
    file.write_all(json.as_bytes())?;
    // Ensure data is written to disk
    file.flush()?;

    info!("Saved {} entities to {}", state.entity_count(), path.display());
    Ok(())
}

pub fn load_snapshot(path: impl AsRef<Path>) -> Result<StorableSceneState, SerializationError> {
    let path = path.as_ref();
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(SerializationError::FileNotFound(path.display().to_string()));
        }
        Err(err) => return Err(err.into()),
    };
    if content.trim().is_empty() {
        return Err(SerializationError::EmptyFile(path.display().to_string()));
    }

    let state: StorableSceneState = serde_json::from_str(&content).map_err(|err| {
        error!("JSON parsing failed for {}: {}", path.display(), err);
        err
    })?;

    info!("Loaded {} entities from {}", state.entity_count(), path.display());
    Ok(state)
}
