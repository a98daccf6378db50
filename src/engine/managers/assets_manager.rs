use std::collections::{ BTreeMap, BTreeSet };
use std::path::Path;
use std::sync::atomic::{ AtomicUsize, Ordering };

use async_trait::async_trait;
use dashmap::DashMap;
use log::debug;
use serde::{ Deserialize, Serialize };
use thiserror::Error;

/// Catalog category marking floor/terrain assets
pub const GROUND_CATEGORY: &str = "ground";

/// Catalog metadata for one asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Asset {
    pub fn new(id: &str, name: &str, category: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            model: None,
            thumbnail: None,
            tags: Vec::new(),
        }
    }

    pub fn is_ground(&self) -> bool {
        self.category == GROUND_CATEGORY
    }
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("asset catalog unavailable: {0}")]
    Unavailable(String),
    #[error("asset catalog I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("asset catalog JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

// ================================================================================================
// CATALOG CLIENT
// ================================================================================================

/// Remote asset lookup. Ids the backend does not know about (e.g. deleted
/// assets) are omitted from the result rather than reported as errors.
#[async_trait]
pub trait AssetCatalog: Send + Sync {
    async fn get_assets(&self, ids: &BTreeSet<String>) -> CatalogResult<BTreeMap<String, Asset>>;
}

/// Catalog held entirely in memory, keyed by asset id
#[derive(Default)]
pub struct InMemoryAssetCatalog {
    assets: DashMap<String, Asset>,
    requests: AtomicUsize,
}

impl InMemoryAssetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_assets(assets: impl IntoIterator<Item = Asset>) -> Self {
        let catalog = Self::new();
        for asset in assets {
            catalog.insert(asset);
        }
        catalog
    }

    pub fn insert(&self, asset: Asset) {
        self.assets.insert(asset.id.clone(), asset);
    }

    /// Accepts either a JSON array of assets or an object keyed by asset id
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Fixture {
            List(Vec<Asset>),
            Map(BTreeMap<String, Asset>),
        }

        let assets = match serde_json::from_str::<Fixture>(json)? {
            Fixture::List(list) => list,
            Fixture::Map(map) => map.into_values().collect(),
        };
        Ok(Self::with_assets(assets))
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Number of `get_assets` calls served so far
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AssetCatalog for InMemoryAssetCatalog {
    async fn get_assets(&self, ids: &BTreeSet<String>) -> CatalogResult<BTreeMap<String, Asset>> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        let found: BTreeMap<String, Asset> = ids
            .iter()
            .filter_map(|id| self.assets.get(id).map(|entry| (id.clone(), entry.value().clone())))
            .collect();
        debug!("catalog lookup: {} requested, {} found", ids.len(), found.len());
        Ok(found)
    }
}
