mod common;

use std::collections::{ BTreeSet, HashSet };
use std::sync::Arc;

use common::*;
use scene_bridge::{
    Asset, BuilderScene, ComponentCode, ComponentData, ManifestData, SceneGraph, SceneTranslator,
    TranslateError, World,
};

#[tokio::test]
async fn nft_entities_are_numbered_in_processing_order() {
    let mut world = World::new();
    world.add_entity("e1".into(), vec![nft("ethereum://0xaaa/1")]);
    world.add_entity("e2".into(), vec![nft("ethereum://0xbbb/2")]);
    world.add_entity("e3".into(), vec![nft("ethereum://0xccc/3")]);

    let scene = translator(empty_catalog())
        .to_manifest(&world, &BuilderScene::new("s"))
        .await
        .unwrap();

    assert_eq!(scene.entities["e1"].name, "nft");
    assert_eq!(scene.entities["e2"].name, "nft2");
    assert_eq!(scene.entities["e3"].name, "nft3");
}

#[tokio::test]
async fn nft_url_is_copied_from_src() {
    let mut world = World::new();
    world.add_entity("e1".into(), vec![nft("ethereum://0xaaa/1")]);

    let scene = translator(empty_catalog())
        .to_manifest(&world, &BuilderScene::new("s"))
        .await
        .unwrap();

    let id = &scene.entities["e1"].components[0];
    match &scene.components[id].data {
        ManifestData::NftShape(data) => {
            assert_eq!(data.url, "ethereum://0xaaa/1");
            assert_eq!(data.src.as_deref(), Some("ethereum://0xaaa/1"));
        }
        other => panic!("unexpected payload: {:?}", other),
    }
}

#[tokio::test]
async fn gltf_names_are_camel_cased_and_unique() {
    let catalog = catalog([
        Asset::new("a1", "Tree", "nature"),
        Asset::new("a2", "Tree", "nature"),
        Asset::new("a3", "Big Pine Tree", "nature"),
    ]);
    let mut world = World::new();
    world.add_entity("e1".into(), vec![gltf("a1")]);
    world.add_entity("e2".into(), vec![gltf("a2")]);
    world.add_entity("e3".into(), vec![gltf("a3")]);

    let scene = translator(catalog)
        .to_manifest(&world, &BuilderScene::new("s"))
        .await
        .unwrap();

    assert_eq!(scene.entities["e1"].name, "tree");
    assert_eq!(scene.entities["e2"].name, "tree2");
    assert_eq!(scene.entities["e3"].name, "bigPineTree");
}

#[tokio::test]
async fn gltf_names_avoid_plain_entity_ids() {
    let catalog = catalog([Asset::new("a1", "Tree", "nature")]);
    let mut world = World::new();
    world.add_entity("tree".into(), vec![transform(0.0, 0.0, 0.0)]);
    world.add_entity("e2".into(), vec![gltf("a1")]);

    let scene = translator(catalog)
        .to_manifest(&world, &BuilderScene::new("s"))
        .await
        .unwrap();

    assert_eq!(scene.entities["tree"].name, "tree");
    assert_eq!(scene.entities["e2"].name, "tree2");
}

#[tokio::test]
async fn name_component_receives_final_entity_name() {
    let catalog = catalog([Asset::new("a1", "Stone Wall", "structures")]);
    let mut world = World::new();
    world.add_entity("e1".into(), vec![name("wall-entity"), transform(1.0, 0.0, 1.0), gltf("a1")]);

    let scene = translator(catalog)
        .to_manifest(&world, &BuilderScene::new("s"))
        .await
        .unwrap();

    let entity = &scene.entities["e1"];
    assert_eq!(entity.name, "stoneWall");
    match &scene.components[&entity.components[0]].data {
        ManifestData::Name(data) => {
            assert_eq!(data.name, "stoneWall");
            assert_eq!(data.value, "wall-entity");
        }
        other => panic!("unexpected payload: {:?}", other),
    }
}

#[tokio::test]
async fn plain_entities_are_named_after_their_id() {
    let mut world = World::new();
    world.add_entity("spawn-point".into(), vec![transform(8.0, 0.0, 8.0)]);

    let scene = translator(empty_catalog())
        .to_manifest(&world, &BuilderScene::new("s"))
        .await
        .unwrap();

    let entity = &scene.entities["spawn-point"];
    assert_eq!(entity.name, "spawn-point");
    assert!(!entity.disable_gizmos);
}

#[tokio::test]
async fn component_ids_are_fresh_and_resolvable() {
    let catalog = catalog([Asset::new("a1", "Tree", "nature")]);
    let mut world = World::new();
    world.add_entity("e1".into(), vec![transform(0.0, 0.0, 0.0), gltf("a1"), name("a")]);
    world.add_entity("e2".into(), vec![transform(1.0, 0.0, 0.0), name("b")]);

    let scene = translator(catalog)
        .to_manifest(&world, &BuilderScene::new("s"))
        .await
        .unwrap();

    let listed: Vec<&String> = scene.entities.values().flat_map(|e| e.components.iter()).collect();
    let unique: HashSet<&String> = listed.iter().copied().collect();
    assert_eq!(listed.len(), 5);
    assert_eq!(unique.len(), 5);
    for id in listed {
        assert_eq!(&scene.components[id].id, id);
    }
}

#[tokio::test]
async fn asset_table_matches_referenced_gltf_assets() {
    let catalog = catalog([
        Asset::new("tree", "Tree", "nature"),
        Asset::new("rock", "Rock", "nature"),
    ]);
    let mut skeleton = BuilderScene::new("s");
    skeleton.assets.insert("stale".into(), Asset::new("stale", "Removed Bench", "decorations"));

    let mut world = World::new();
    world.add_entity("e1".into(), vec![gltf("tree")]);
    world.add_entity("e2".into(), vec![gltf("rock")]);
    world.add_entity("e3".into(), vec![gltf("tree")]);

    let scene = translator(catalog).to_manifest(&world, &skeleton).await.unwrap();

    let keys: BTreeSet<String> = scene.assets.keys().cloned().collect();
    assert_eq!(keys, scene.gltf_asset_ids());
    assert_eq!(keys, BTreeSet::from(["rock".to_string(), "tree".to_string()]));
}

#[tokio::test]
async fn ground_asset_locks_only_its_entity() {
    let catalog = catalog([
        Asset::new("grass", "Grass", "ground"),
        Asset::new("tree", "Tree", "nature"),
    ]);
    let mut world = World::new();
    world.add_entity("floor".into(), vec![transform(8.0, 0.0, 8.0), gltf("grass")]);
    world.add_entity("e2".into(), vec![gltf("tree")]);

    let scene = translator(catalog)
        .to_manifest(&world, &BuilderScene::new("s"))
        .await
        .unwrap();

    let ground = scene.ground.clone().unwrap();
    assert_eq!(ground.asset_id, "grass");
    assert!(scene.entities["floor"].components.contains(&ground.component_id));
    assert!(scene.entities["floor"].disable_gizmos);
    assert!(!scene.entities["e2"].disable_gizmos);
}

#[tokio::test]
async fn ground_owner_is_stable_across_translations() {
    let translator = translator(catalog([Asset::new("grass", "Grass", "ground")]));
    let mut world = World::new();
    world.add_entity("floorB".into(), vec![gltf("grass")]);
    world.add_entity("floorA".into(), vec![transform(8.0, 0.0, 8.0), gltf("grass")]);

    for _ in 0..20 {
        let scene = translator.to_manifest(&world, &BuilderScene::new("s")).await.unwrap();
        let ground = scene.ground.clone().unwrap();
        assert!(scene.entities["floorA"].components.contains(&ground.component_id));
        assert!(scene.entities["floorA"].disable_gizmos);
        assert!(!scene.entities["floorB"].disable_gizmos);
    }
}

#[tokio::test]
async fn stale_ground_is_cleared_when_no_ground_asset_remains() {
    let mut skeleton = BuilderScene::new("s");
    skeleton.ground = Some(scene_bridge::Ground {
        asset_id: "old-grass".into(),
        component_id: "old-component".into(),
    });
    let mut world = World::new();
    world.add_entity("e1".into(), vec![transform(0.0, 0.0, 0.0)]);

    let scene = translator(empty_catalog()).to_manifest(&world, &skeleton).await.unwrap();
    assert!(scene.ground.is_none());
}

#[tokio::test]
async fn skeleton_id_metrics_and_limits_are_kept() {
    let mut skeleton = BuilderScene::new("scene-42");
    skeleton.metrics.triangles = 120;
    skeleton.limits.entities = 200;

    let scene = translator(empty_catalog())
        .to_manifest(&World::new(), &skeleton)
        .await
        .unwrap();

    assert_eq!(scene.id, "scene-42");
    assert_eq!(scene.metrics.triangles, 120);
    assert_eq!(scene.limits.entities, 200);
    assert!(scene.entities.is_empty());
}

#[tokio::test]
async fn unknown_asset_keeps_entity_name() {
    let catalog = empty_catalog();
    let mut world = World::new();
    world.add_entity("e1".into(), vec![gltf("deleted-asset")]);

    let scene = translator(catalog.clone())
        .to_manifest(&world, &BuilderScene::new("s"))
        .await
        .unwrap();

    assert_eq!(scene.entities["e1"].name, "e1");
    assert!(scene.assets.is_empty());
    // one lookup for the name, one more during reconciliation
    assert_eq!(catalog.request_count(), 2);
}

#[tokio::test]
async fn resolved_assets_are_not_fetched_twice() {
    let catalog = catalog([Asset::new("tree", "Tree", "nature")]);
    let mut world = World::new();
    world.add_entity("e1".into(), vec![gltf("tree")]);

    translator(catalog.clone())
        .to_manifest(&world, &BuilderScene::new("s"))
        .await
        .unwrap();

    assert_eq!(catalog.request_count(), 1);
}

#[tokio::test]
async fn catalog_failure_aborts_translation() {
    let translator = SceneTranslator::standard(Arc::new(FailingCatalog));
    let mut world = World::new();
    world.add_entity("e1".into(), vec![gltf("tree")]);

    let result = translator.to_manifest(&world, &BuilderScene::new("s")).await;
    assert!(matches!(result, Err(TranslateError::Catalog(_))));
}

#[tokio::test]
async fn code_and_payload_must_agree() {
    let mut world = World::new();
    let mut mislabeled = transform(0.0, 0.0, 0.0);
    mislabeled.code = ComponentCode(1100);
    world.add_entity("e1".into(), vec![mislabeled]);

    let result = translator(empty_catalog()).to_manifest(&world, &BuilderScene::new("s")).await;
    assert!(matches!(result, Err(TranslateError::CodeMismatch { .. })));
}

#[tokio::test]
async fn later_component_rule_overrides_earlier_one() {
    let catalog = catalog([Asset::new("frame", "Golden Frame", "decorations")]);
    let mut world = World::new();
    world.add_entity("e1".into(), vec![nft("ethereum://0xaaa/1"), gltf("frame")]);
    world.add_entity("e2".into(), vec![nft("ethereum://0xbbb/2")]);

    let scene = translator(catalog)
        .to_manifest(&world, &BuilderScene::new("s"))
        .await
        .unwrap();

    assert_eq!(scene.entities["e1"].name, "goldenFrame");
    // the counter is scene-wide, so e2 is the second NFT even though e1 was renamed
    assert_eq!(scene.entities["e2"].name, "nft2");
    assert!(world.entities().all(|e| matches!(
        e.components[0].data,
        ComponentData::NftShape(ref n) if n.url.is_none()
    )));
}
