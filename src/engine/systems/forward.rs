use std::collections::BTreeSet;

use log::{ debug, info, warn };
use uuid::Uuid;

use crate::engine::components::component::ComponentData;
use crate::engine::components::component_types::ComponentKind;
use crate::engine::error::{ TranslateError, TranslateResult };
use crate::engine::managers::assets_manager::Asset;
use crate::engine::modules::ecs::SceneGraph;
use crate::engine::systems::naming::NamingState;
use crate::engine::systems::reconcile::{ detect_ground, reconcile_assets };
use crate::engine::systems::scene_format::{ BuilderScene, ManifestData, ManifestEntity };
use crate::engine::systems::translator::SceneTranslator;

impl SceneTranslator {
    /// Build an editor manifest from the internal graph.
    ///
    /// `skeleton` provides the scene id, metrics, limits and the asset
    /// baseline; its entities and components are discarded. Catalog failures
    /// abort the whole translation.
    pub async fn to_manifest(
        &self,
        graph: &dyn SceneGraph,
        skeleton: &BuilderScene
    ) -> TranslateResult<BuilderScene> {
        let mut scene = skeleton.skeleton();
        let mut naming = NamingState::new();

        for entity in graph.entities() {
            let mut entity_name = entity.id.clone();
            let mut component_ids = Vec::with_capacity(entity.components.len());

            for component in &entity.components {
                let id = Uuid::new_v4().to_string();
                let kind = self.bridge.kind_of(component.code)?;
                if kind != component.kind() {
                    return Err(TranslateError::CodeMismatch {
                        code: component.code,
                        expected: kind,
                        found: component.kind(),
                    });
                }

                let mut data = component.data.clone();
                match &mut data {
                    ComponentData::NftShape(nft) => {
                        nft.url = Some(nft.src.clone());
                        entity_name = naming.next_nft_name();
                    }
                    ComponentData::GltfShape(gltf) => {
                        match self.lookup_asset(&gltf.asset_id).await? {
                            Some(asset) => {
                                entity_name = naming.asset_entity_name(&asset.name);
                                scene.assets.insert(gltf.asset_id.clone(), asset);
                            }
                            None => {
                                warn!(
                                    "entity {} references unknown asset {}, keeping name {}",
                                    entity.id,
                                    gltf.asset_id,
                                    entity_name
                                );
                            }
                        }
                    }
                    _ => {}
                }

                let manifest_component = self.transformer.to_manifest_form(&id, &data)?;
                scene.components.insert(id.clone(), manifest_component);
                component_ids.push(id);
            }

            // Name is written after every component ran, so a later NFT/GLTF rule still applies
            let name_slot = entity.components
                .iter()
                .position(|c| c.kind() == ComponentKind::Name)
                .and_then(|idx| component_ids.get(idx));
            if let Some(name_id) = name_slot {
                if let Some(ManifestData::Name(name)) = scene.components.get_mut(name_id).map(|c| &mut c.data) {
                    name.name = entity_name.clone();
                }
            }

            naming.record(&entity_name);
            debug!("entity {} -> {:?} ({} components)", entity.id, entity_name, component_ids.len());

            scene.entities.insert(entity.id.clone(), ManifestEntity {
                id: entity.id.clone(),
                name: entity_name,
                components: component_ids,
                disable_gizmos: false,
            });
        }

        let report = reconcile_assets(&mut scene, self.catalog.as_ref()).await?;
        if !report.unresolved.is_empty() {
            warn!("{} referenced assets could not be resolved", report.unresolved.len());
        }
        if let Some(ground) = detect_ground(&mut scene) {
            debug!("ground asset {} placed by component {}", ground.asset_id, ground.component_id);
        }

        info!(
            "translated {} entities into manifest {} ({} components, {} assets)",
            scene.entity_count(),
            scene.id,
            scene.components.len(),
            scene.assets.len()
        );
        Ok(scene)
    }

    async fn lookup_asset(&self, asset_id: &str) -> TranslateResult<Option<Asset>> {
        let ids = BTreeSet::from([asset_id.to_string()]);
        let mut found = self.catalog.get_assets(&ids).await?;
        Ok(found.remove(asset_id))
    }
}
