pub mod component;
pub mod component_types;
pub mod metadata;
pub mod script;
pub mod shapes;
pub mod transform;

pub use component::{ ComponentData, InternalComponent, WireComponent };
pub use component_types::{
    BridgeError, ComponentCode, ComponentKind, StandardTypeCodes, TypeCodeBridge,
};
pub use metadata::{ LockedOnEditData, NameData };
pub use script::ScriptData;
pub use shapes::{ Color, GltfShapeData, ManifestNftShapeData, NftShapeData };
pub use transform::{ Quaternion, TransformData, Vec3 };
