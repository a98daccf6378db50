pub mod assets_manager;

pub use assets_manager::{ Asset, AssetCatalog, CatalogError, InMemoryAssetCatalog };
