use serde::{ Deserialize, Serialize };

/// Entity naming component. `value` is the canonical name the runtime keys on,
/// `name` is what the editor shows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameData {
    pub value: String,
    #[serde(default)]
    pub name: String,
}

impl NameData {
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
            name: value.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockedOnEditData {
    pub value: bool,
}
