use crate::engine::components::component::{ ComponentData, InternalComponent };
use crate::engine::components::component_types::{ ComponentCode, ComponentKind };
use crate::engine::components::shapes::{ ManifestNftShapeData, NftShapeData };
use crate::engine::error::{ TranslateError, TranslateResult };
use crate::engine::systems::scene_format::{ ManifestComponent, ManifestData };

/// Per-component field conversion between the internal and editor shapes
pub trait ComponentTransformer: Send + Sync {
    fn to_manifest_form(&self, id: &str, data: &ComponentData) -> TranslateResult<ManifestComponent>;
    fn to_internal_form(&self, code: ComponentCode, data: &ManifestData) -> TranslateResult<InternalComponent>;
}

/// Field mapping for the built-in component kinds
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardTransformer;

impl ComponentTransformer for StandardTransformer {
    fn to_manifest_form(&self, id: &str, data: &ComponentData) -> TranslateResult<ManifestComponent> {
        let data = match data {
            ComponentData::Transform(t) => ManifestData::Transform(*t),
            ComponentData::GltfShape(g) => ManifestData::GltfShape(g.clone()),
            ComponentData::NftShape(n) => ManifestData::NftShape(ManifestNftShapeData {
                url: n.url.clone().unwrap_or_else(|| n.src.clone()),
                src: Some(n.src.clone()),
                asset_id: Some(n.asset_id.clone()),
                color: Some(n.color),
                style: Some(n.style),
            }),
            ComponentData::Name(n) => ManifestData::Name(n.clone()),
            ComponentData::Script(s) => ManifestData::Script(s.clone()),
            ComponentData::LockedOnEdit(l) => ManifestData::LockedOnEdit(*l),
        };
        Ok(ManifestComponent { id: id.to_string(), data })
    }

    fn to_internal_form(&self, code: ComponentCode, data: &ManifestData) -> TranslateResult<InternalComponent> {
        let data = match data {
            ManifestData::Transform(t) => ComponentData::Transform(*t),
            ManifestData::GltfShape(g) => ComponentData::GltfShape(g.clone()),
            ManifestData::NftShape(n) => {
                let missing = |field| TranslateError::MissingField { kind: ComponentKind::NftShape, field };
                ComponentData::NftShape(NftShapeData {
                    src: n.src.clone().ok_or_else(|| missing("src"))?,
                    asset_id: n.asset_id.clone().ok_or_else(|| missing("assetId"))?,
                    color: n.color.unwrap_or_default(),
                    style: n.style.unwrap_or_default(),
                    url: Some(n.url.clone()),
                })
            }
            ManifestData::Name(n) => ComponentData::Name(n.clone()),
            ManifestData::Script(s) => ComponentData::Script(s.clone()),
            ManifestData::LockedOnEdit(l) => ComponentData::LockedOnEdit(*l),
        };
        Ok(InternalComponent { code, data })
    }
}
