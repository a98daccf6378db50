use std::collections::HashMap;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{ Deserialize, Serialize };
use thiserror::Error;

/// Every component kind the translators know how to carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ComponentKind {
    Transform,
    #[serde(rename = "GLTFShape")]
    GltfShape,
    #[serde(rename = "NFTShape")]
    NftShape,
    Name,
    Script,
    LockedOnEdit,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 6] = [
        ComponentKind::Transform,
        ComponentKind::GltfShape,
        ComponentKind::NftShape,
        ComponentKind::Name,
        ComponentKind::Script,
        ComponentKind::LockedOnEdit,
    ];

    /// Human-readable name used by the editor manifest and storable snapshots
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Transform => "Transform",
            ComponentKind::GltfShape => "GLTFShape",
            ComponentKind::NftShape => "NFTShape",
            ComponentKind::Name => "Name",
            ComponentKind::Script => "Script",
            ComponentKind::LockedOnEdit => "LockedOnEdit",
        }
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComponentKind::ALL.iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| BridgeError::UnknownName(s.to_string()))
    }
}

/// Internal numeric component type identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentCode(pub u32);

impl std::fmt::Display for ComponentCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    #[error("unsupported component type code {0}")]
    UnknownCode(ComponentCode),
    #[error("unsupported component type name {0:?}")]
    UnknownName(String),
}

pub type BridgeResult<T> = Result<T, BridgeError>;

// ================================================================================================
// TYPE-CODE BRIDGE
// ================================================================================================

/// Bijective mapping between internal type codes and human-readable type names.
///
/// Implementations must be total over the supported kinds; anything outside
/// that set is reported as a [`BridgeError`].
pub trait TypeCodeBridge: Send + Sync {
    fn to_human_readable(&self, code: ComponentCode) -> BridgeResult<&'static str>;
    fn from_human_readable(&self, name: &str) -> BridgeResult<ComponentCode>;

    fn kind_of(&self, code: ComponentCode) -> BridgeResult<ComponentKind> {
        self.to_human_readable(code)?.parse()
    }

    fn code_of(&self, kind: ComponentKind) -> BridgeResult<ComponentCode> {
        self.from_human_readable(kind.as_str())
    }
}

static STANDARD_CODES: Lazy<HashMap<ComponentKind, ComponentCode>> = Lazy::new(|| {
    HashMap::from([
        (ComponentKind::Transform, ComponentCode(1)),
        (ComponentKind::NftShape, ComponentCode(22)),
        (ComponentKind::GltfShape, ComponentCode(54)),
        (ComponentKind::Name, ComponentCode(1100)),
        (ComponentKind::LockedOnEdit, ComponentCode(1101)),
        (ComponentKind::Script, ComponentCode(1200)),
    ])
});

static STANDARD_KINDS: Lazy<HashMap<ComponentCode, ComponentKind>> = Lazy::new(|| {
    STANDARD_CODES.iter().map(|(kind, code)| (*code, *kind)).collect()
});

/// The runtime's default code table
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardTypeCodes;

impl TypeCodeBridge for StandardTypeCodes {
    fn to_human_readable(&self, code: ComponentCode) -> BridgeResult<&'static str> {
        STANDARD_KINDS.get(&code)
            .map(|kind| kind.as_str())
            .ok_or(BridgeError::UnknownCode(code))
    }

    fn from_human_readable(&self, name: &str) -> BridgeResult<ComponentCode> {
        let kind: ComponentKind = name.parse()?;
        STANDARD_CODES.get(&kind)
            .copied()
            .ok_or_else(|| BridgeError::UnknownName(name.to_string()))
    }
}
