pub mod forward;
pub mod naming;
pub mod reconcile;
pub mod reverse;
pub mod scene_format;
pub mod serialization;
pub mod transformer;
pub mod translator;

// Re-export the main types for easy access
pub use reconcile::{ detect_ground, reconcile_assets, ReconcileReport };
pub use reverse::{ ReverseOutcome, SkippedReference };
pub use scene_format::{ BuilderScene, Ground, ManifestComponent, ManifestData, ManifestEntity, SceneMetrics };
pub use serialization::{
    check_schema_version, decode_snapshot, encode_snapshot, load_snapshot, save_snapshot,
    SerializationError, StorableSceneState, SCHEMA_VERSION,
};
pub use transformer::{ ComponentTransformer, StandardTransformer };
pub use translator::SceneTranslator;
