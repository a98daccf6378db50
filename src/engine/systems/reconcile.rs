use std::collections::BTreeSet;

use log::{ debug, warn };

use crate::engine::error::TranslateResult;
use crate::engine::managers::assets_manager::AssetCatalog;
use crate::engine::systems::scene_format::{ BuilderScene, Ground };

/// What a reconciliation pass changed in the asset table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Ids pulled from the catalog because the table lacked them
    pub fetched: BTreeSet<String>,
    /// Ids removed because no GLTFShape references them
    pub dropped: BTreeSet<String>,
    /// Referenced ids the catalog did not return
    pub unresolved: BTreeSet<String>,
}

/// Make the asset table match the set of GLTFShape-referenced asset ids.
///
/// Missing ids are fetched in one catalog call; unreferenced entries are
/// dropped. Ids the catalog omits stay missing and are listed in the report.
pub async fn reconcile_assets(
    scene: &mut BuilderScene,
    catalog: &dyn AssetCatalog
) -> TranslateResult<ReconcileReport> {
    let referenced = scene.gltf_asset_ids();
    let mut report = ReconcileReport::default();

    let missing: BTreeSet<String> = referenced
        .iter()
        .filter(|id| !scene.assets.contains_key(*id))
        .cloned()
        .collect();

    if !missing.is_empty() {
        let found = catalog.get_assets(&missing).await?;
        report.unresolved = missing
            .iter()
            .filter(|id| !found.contains_key(*id))
            .cloned()
            .collect();
        report.fetched = found.keys().filter(|id| missing.contains(*id)).cloned().collect();
        scene.assets.extend(found);
    }

    report.dropped = scene.assets
        .keys()
        .filter(|id| !referenced.contains(*id))
        .cloned()
        .collect();
    scene.assets.retain(|id, _| referenced.contains(id));

    for id in &report.unresolved {
        warn!("asset {} is referenced by a GLTFShape but unknown to the catalog", id);
    }
    debug!(
        "reconciled assets: {} kept, {} fetched, {} dropped",
        scene.assets.len(),
        report.fetched.len(),
        report.dropped.len()
    );
    Ok(report)
}

/// Point `ground` at the floor asset and lock the gizmos of its owning entity.
///
/// With several ground assets the lowest asset id wins. When several entities
/// place that asset, the one with the lowest entity id owns the ground. When no
/// ground asset is left in the table, `ground` is cleared.
pub fn detect_ground(scene: &mut BuilderScene) -> Option<&Ground> {
    // component ids are minted fresh per translation, so the owner is looked
    // up through the entity table (entity id order, then listing order)
    let ground = scene.assets
        .values()
        .find(|asset| asset.is_ground())
        .and_then(|asset| {
            scene.entities
                .values()
                .flat_map(|entity| entity.components.iter())
                .find(|id| {
                    scene.components
                        .get(*id)
                        .and_then(|c| c.data.gltf_asset_id()) == Some(asset.id.as_str())
                })
                .map(|component_id| Ground {
                    asset_id: asset.id.clone(),
                    component_id: component_id.clone(),
                })
        });

    if let Some(ground) = &ground {
        for entity in scene.entities.values_mut() {
            if entity.components.contains(&ground.component_id) {
                entity.disable_gizmos = true;
            }
        }
    }

    scene.ground = ground;
    scene.ground.as_ref()
}
