pub mod ecs;

pub use ecs::{ Entity, EntityId, SceneGraph, WireEntity, World };
