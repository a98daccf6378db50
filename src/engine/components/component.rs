use serde::{ Deserialize, Serialize };

use crate::engine::components::component_types::{
    BridgeResult, ComponentCode, ComponentKind, TypeCodeBridge,
};
use crate::engine::components::metadata::{ LockedOnEditData, NameData };
use crate::engine::components::script::ScriptData;
use crate::engine::components::shapes::{ GltfShapeData, NftShapeData };
use crate::engine::components::transform::TransformData;
use crate::engine::error::{ TranslateError, TranslateResult };

// ——————————————————————————————————————————————————————————— Component Payloads ————

/// Typed payload of an internal component, one variant per kind
#[derive(Clone, Debug, PartialEq)]
pub enum ComponentData {
    Transform(TransformData),
    GltfShape(GltfShapeData),
    NftShape(NftShapeData),
    Name(NameData),
    Script(ScriptData),
    LockedOnEdit(LockedOnEditData),
}

impl ComponentData {
    pub fn kind(&self) -> ComponentKind {
        match self {
            ComponentData::Transform(_) => ComponentKind::Transform,
            ComponentData::GltfShape(_) => ComponentKind::GltfShape,
            ComponentData::NftShape(_) => ComponentKind::NftShape,
            ComponentData::Name(_) => ComponentKind::Name,
            ComponentData::Script(_) => ComponentKind::Script,
            ComponentData::LockedOnEdit(_) => ComponentKind::LockedOnEdit,
        }
    }

    /// Decode an untyped payload as the given kind
    pub fn from_value(kind: ComponentKind, value: serde_json::Value) -> serde_json::Result<Self> {
        Ok(match kind {
            ComponentKind::Transform => ComponentData::Transform(serde_json::from_value(value)?),
            ComponentKind::GltfShape => ComponentData::GltfShape(serde_json::from_value(value)?),
            ComponentKind::NftShape => ComponentData::NftShape(serde_json::from_value(value)?),
            ComponentKind::Name => ComponentData::Name(serde_json::from_value(value)?),
            ComponentKind::Script => ComponentData::Script(serde_json::from_value(value)?),
            ComponentKind::LockedOnEdit => ComponentData::LockedOnEdit(serde_json::from_value(value)?),
        })
    }

    pub fn to_value(&self) -> serde_json::Result<serde_json::Value> {
        match self {
            ComponentData::Transform(data) => serde_json::to_value(data),
            ComponentData::GltfShape(data) => serde_json::to_value(data),
            ComponentData::NftShape(data) => serde_json::to_value(data),
            ComponentData::Name(data) => serde_json::to_value(data),
            ComponentData::Script(data) => serde_json::to_value(data),
            ComponentData::LockedOnEdit(data) => serde_json::to_value(data),
        }
    }
}

impl From<TransformData> for ComponentData {
    fn from(t: TransformData) -> Self {
        ComponentData::Transform(t)
    }
}

impl From<GltfShapeData> for ComponentData {
    fn from(g: GltfShapeData) -> Self {
        ComponentData::GltfShape(g)
    }
}

impl From<NftShapeData> for ComponentData {
    fn from(n: NftShapeData) -> Self {
        ComponentData::NftShape(n)
    }
}

impl From<NameData> for ComponentData {
    fn from(n: NameData) -> Self {
        ComponentData::Name(n)
    }
}

impl From<ScriptData> for ComponentData {
    fn from(s: ScriptData) -> Self {
        ComponentData::Script(s)
    }
}

impl From<LockedOnEditData> for ComponentData {
    fn from(l: LockedOnEditData) -> Self {
        ComponentData::LockedOnEdit(l)
    }
}

// ——————————————————————————————————————————————————————————— Internal Component ————

/// One component as the runtime stores it: its type code plus typed payload
#[derive(Clone, Debug, PartialEq)]
pub struct InternalComponent {
    pub code: ComponentCode,
    pub data: ComponentData,
}

impl InternalComponent {
    /// Build a component, resolving its code through the bridge
    pub fn with_bridge(
        bridge: &dyn TypeCodeBridge,
        data: impl Into<ComponentData>
    ) -> BridgeResult<Self> {
        let data = data.into();
        let code = bridge.code_of(data.kind())?;
        Ok(Self { code, data })
    }

    pub fn kind(&self) -> ComponentKind {
        self.data.kind()
    }

    pub fn to_wire(&self) -> serde_json::Result<WireComponent> {
        Ok(WireComponent {
            code: self.code,
            value: self.data.to_value()?,
        })
    }

    pub fn from_wire(wire: &WireComponent, bridge: &dyn TypeCodeBridge) -> TranslateResult<Self> {
        let kind = bridge.kind_of(wire.code)?;
        let data = ComponentData::from_value(kind, wire.value.clone()).map_err(|source| {
            TranslateError::Payload { kind, source }
        })?;
        Ok(Self { code: wire.code, data })
    }
}

/// Untyped wire shape of an internal component: `{ "type": <code>, "value": ... }`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WireComponent {
    #[serde(rename = "type")]
    pub code: ComponentCode,
    pub value: serde_json::Value,
}
