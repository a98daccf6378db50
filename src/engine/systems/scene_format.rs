use std::collections::{ BTreeMap, BTreeSet };

use serde::{ Deserialize, Serialize };

use crate::engine::components::component_types::ComponentKind;
use crate::engine::components::metadata::{ LockedOnEditData, NameData };
use crate::engine::components::script::ScriptData;
use crate::engine::components::shapes::{ GltfShapeData, ManifestNftShapeData };
use crate::engine::components::transform::TransformData;
use crate::engine::managers::assets_manager::Asset;

/// Editor-side component payload, serialized as `{ "type": ..., "data": ... }`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", content = "data")]
pub enum ManifestData {
    Transform(TransformData),
    #[serde(rename = "GLTFShape")]
    GltfShape(GltfShapeData),
    #[serde(rename = "NFTShape")]
    NftShape(ManifestNftShapeData),
    Name(NameData),
    Script(ScriptData),
    LockedOnEdit(LockedOnEditData),
}

impl ManifestData {
    pub fn kind(&self) -> ComponentKind {
        match self {
            ManifestData::Transform(_) => ComponentKind::Transform,
            ManifestData::GltfShape(_) => ComponentKind::GltfShape,
            ManifestData::NftShape(_) => ComponentKind::NftShape,
            ManifestData::Name(_) => ComponentKind::Name,
            ManifestData::Script(_) => ComponentKind::Script,
            ManifestData::LockedOnEdit(_) => ComponentKind::LockedOnEdit,
        }
    }

    /// Asset referenced by a GLTFShape payload
    pub fn gltf_asset_id(&self) -> Option<&str> {
        match self {
            ManifestData::GltfShape(shape) => Some(&shape.asset_id),
            _ => None,
        }
    }
}

/// Component instance in the manifest, keyed by a freshly minted id
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ManifestComponent {
    pub id: String,
    #[serde(flatten)]
    pub data: ManifestData,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEntity {
    pub id: String,
    pub name: String,
    pub components: Vec<String>,
    #[serde(default)]
    pub disable_gizmos: bool,
}

/// Floor asset and the component instance that places it
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Ground {
    pub asset_id: String,
    pub component_id: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SceneMetrics {
    pub triangles: u32,
    pub materials: u32,
    pub meshes: u32,
    pub bodies: u32,
    pub entities: u32,
    pub textures: u32,
}

/// Editor manifest of a scene
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BuilderScene {
    pub id: String,
    #[serde(default)]
    pub entities: BTreeMap<String, ManifestEntity>,
    #[serde(default)]
    pub components: BTreeMap<String, ManifestComponent>,
    #[serde(default)]
    pub assets: BTreeMap<String, Asset>,
    #[serde(default)]
    pub ground: Option<Ground>,
    #[serde(default)]
    pub metrics: SceneMetrics,
    #[serde(default)]
    pub limits: SceneMetrics,
}

impl Default for BuilderScene {
    fn default() -> Self {
        Self::new("no_name")
    }
}

impl BuilderScene {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            entities: BTreeMap::new(),
            components: BTreeMap::new(),
            assets: BTreeMap::new(),
            ground: None,
            metrics: SceneMetrics::default(),
            limits: SceneMetrics::default(),
        }
    }

    /// Copy of this scene keeping only what a fresh translation starts from:
    /// id, metrics, limits, ground and the asset baseline
    pub fn skeleton(&self) -> Self {
        Self {
            entities: BTreeMap::new(),
            components: BTreeMap::new(),
            ..self.clone()
        }
    }

    /// Every asset id referenced by a GLTFShape component
    pub fn gltf_asset_ids(&self) -> BTreeSet<String> {
        self.components
            .values()
            .filter_map(|c| c.data.gltf_asset_id())
            .map(str::to_string)
            .collect()
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn component_serializes_with_flat_type_and_data() {
        let component = ManifestComponent {
            id: "c1".into(),
            data: ManifestData::GltfShape(GltfShapeData::new("tree-01")),
        };
        let json = serde_json::to_value(&component).unwrap();
        assert_eq!(json, json!({ "id": "c1", "type": "GLTFShape", "data": { "assetId": "tree-01" } }));

        let back: ManifestComponent = serde_json::from_value(json).unwrap();
        assert_eq!(back, component);
    }

    #[test]
    fn editor_manifest_parses_with_defaults() {
        let scene: BuilderScene = serde_json::from_value(json!({
            "id": "scene-1",
            "entities": {
                "e1": { "id": "e1", "name": "nft", "components": ["c1"] }
            },
            "components": {
                "c1": { "id": "c1", "type": "NFTShape", "data": { "url": "ethereum://0xabc/1" } }
            },
            "ground": null,
            "limits": { "triangles": 10000 }
        })).unwrap();

        assert!(!scene.entities["e1"].disable_gizmos);
        assert_eq!(scene.components["c1"].data.kind(), ComponentKind::NftShape);
        assert_eq!(scene.limits.triangles, 10000);
        assert!(scene.assets.is_empty());
    }
}
