#![allow(dead_code)]

use std::collections::{ BTreeMap, BTreeSet };
use std::sync::Arc;

use async_trait::async_trait;
use scene_bridge::managers::assets_manager::CatalogResult;
use scene_bridge::{
    Asset, AssetCatalog, CatalogError, ComponentData, GltfShapeData, InMemoryAssetCatalog,
    InternalComponent, NameData, NftShapeData, SceneTranslator, StandardTypeCodes, TransformData,
};

pub fn component(data: impl Into<ComponentData>) -> InternalComponent {
    InternalComponent::with_bridge(&StandardTypeCodes, data).unwrap()
}

pub fn gltf(asset_id: &str) -> InternalComponent {
    component(GltfShapeData::new(asset_id))
}

pub fn nft(src: &str) -> InternalComponent {
    component(NftShapeData::from_src(src))
}

pub fn name(value: &str) -> InternalComponent {
    component(NameData::new(value))
}

pub fn transform(x: f32, y: f32, z: f32) -> InternalComponent {
    component(TransformData::at(x, y, z))
}

pub fn catalog(assets: impl IntoIterator<Item = Asset>) -> Arc<InMemoryAssetCatalog> {
    Arc::new(InMemoryAssetCatalog::with_assets(assets))
}

pub fn translator(catalog: Arc<InMemoryAssetCatalog>) -> SceneTranslator {
    SceneTranslator::standard(catalog)
}

/// Catalog backend that is always down
pub struct FailingCatalog;

#[async_trait]
impl AssetCatalog for FailingCatalog {
    async fn get_assets(&self, _ids: &BTreeSet<String>) -> CatalogResult<BTreeMap<String, Asset>> {
        Err(CatalogError::Unavailable("connection refused".into()))
    }
}

pub fn empty_catalog() -> Arc<InMemoryAssetCatalog> {
    Arc::new(InMemoryAssetCatalog::new())
}
