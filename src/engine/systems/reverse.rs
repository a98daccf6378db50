use std::borrow::Cow;

use log::{ info, warn };

use crate::engine::components::component::{ ComponentData, InternalComponent };
use crate::engine::components::component_types::ComponentKind;
use crate::engine::components::metadata::NameData;
use crate::engine::components::shapes::{
    asset_id_from_nft_url, ManifestNftShapeData, DEFAULT_NFT_COLOR, DEFAULT_NFT_STYLE,
};
use crate::engine::error::TranslateResult;
use crate::engine::modules::ecs::{ EntityId, SceneGraph, World };
use crate::engine::systems::scene_format::{ BuilderScene, ManifestData };
use crate::engine::systems::translator::SceneTranslator;

/// Component id listed by an entity but absent from the manifest's component table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedReference {
    pub entity_id: EntityId,
    pub component_id: String,
}

#[derive(Debug, Clone)]
pub struct ReverseOutcome {
    pub world: World,
    /// Dangling references tolerated during translation
    pub skipped: Vec<SkippedReference>,
}

/// Fill in the runtime fields of an NFT payload that only carries `url`.
/// Tint and style are not recoverable from a url; defaults are used.
pub fn upgrade_legacy_nft(data: &ManifestData) -> Cow<'_, ManifestData> {
    match data {
        ManifestData::NftShape(nft) if nft.src.is_none() => {
            Cow::Owned(ManifestData::NftShape(ManifestNftShapeData {
                url: nft.url.clone(),
                src: Some(nft.url.clone()),
                asset_id: Some(asset_id_from_nft_url(&nft.url)),
                color: Some(DEFAULT_NFT_COLOR),
                style: Some(DEFAULT_NFT_STYLE),
            }))
        }
        _ => Cow::Borrowed(data),
    }
}

impl SceneTranslator {
    /// Rebuild the internal graph from an editor manifest.
    ///
    /// Component ids an entity lists but the manifest lacks are skipped and
    /// reported in [`ReverseOutcome::skipped`] instead of failing.
    pub fn from_manifest(&self, manifest: &BuilderScene) -> TranslateResult<ReverseOutcome> {
        let mut world = World::new();
        let mut skipped = Vec::new();
        let name_code = self.bridge.code_of(ComponentKind::Name)?;

        for entity in manifest.entities.values() {
            let mut components = Vec::with_capacity(entity.components.len() + 1);

            for component_id in &entity.components {
                let Some(component) = manifest.components.get(component_id) else {
                    warn!("entity {} lists missing component {}, skipping", entity.id, component_id);
                    skipped.push(SkippedReference {
                        entity_id: entity.id.clone(),
                        component_id: component_id.clone(),
                    });
                    continue;
                };

                let code = self.bridge.from_human_readable(component.data.kind().as_str())?;
                let data = upgrade_legacy_nft(&component.data);
                components.push(self.transformer.to_internal_form(code, &data)?);
            }

            match components.iter().position(|c| c.kind() == ComponentKind::Name) {
                Some(idx) => {
                    if let ComponentData::Name(name) = &mut components[idx].data {
                        name.name = entity.name.clone();
                    }
                }
                None => components.push(InternalComponent {
                    code: name_code,
                    data: ComponentData::Name(NameData::new(&entity.name)),
                }),
            }

            world.add_entity(entity.id.clone(), components);
        }

        info!(
            "rebuilt {} entities from manifest {} ({} dangling references skipped)",
            world.len(),
            manifest.id,
            skipped.len()
        );
        Ok(ReverseOutcome { world, skipped })
    }
}
