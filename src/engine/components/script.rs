use serde::{ Deserialize, Serialize };

/// Smart-item script attached to an entity. `values` holds the script's
/// parameter object as authored; it is never inspected here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScriptData {
    pub src: String,
    #[serde(default)]
    pub values: serde_json::Value,
}
