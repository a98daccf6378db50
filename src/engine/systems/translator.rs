use std::sync::Arc;

use crate::engine::components::component_types::{ StandardTypeCodes, TypeCodeBridge };
use crate::engine::managers::assets_manager::AssetCatalog;
use crate::engine::systems::transformer::{ ComponentTransformer, StandardTransformer };

/// Translates scenes between the internal graph and the editor manifest.
///
/// Holds only its collaborators; every call builds its output from scratch,
/// so one translator can serve any number of translations.
#[derive(Clone)]
pub struct SceneTranslator {
    pub(crate) bridge: Arc<dyn TypeCodeBridge>,
    pub(crate) transformer: Arc<dyn ComponentTransformer>,
    pub(crate) catalog: Arc<dyn AssetCatalog>,
}

impl SceneTranslator {
    pub fn new(
        bridge: Arc<dyn TypeCodeBridge>,
        transformer: Arc<dyn ComponentTransformer>,
        catalog: Arc<dyn AssetCatalog>
    ) -> Self {
        Self { bridge, transformer, catalog }
    }

    /// Standard code table and field mapping over the given catalog
    pub fn standard(catalog: Arc<dyn AssetCatalog>) -> Self {
        Self::new(Arc::new(StandardTypeCodes), Arc::new(StandardTransformer), catalog)
    }
}
