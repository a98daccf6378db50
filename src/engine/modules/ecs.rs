use std::collections::HashMap;

use serde::{ Deserialize, Serialize };
use uuid::Uuid;

use crate::engine::components::component::{ InternalComponent, WireComponent };
use crate::engine::components::component_types::{ ComponentCode, ComponentKind, TypeCodeBridge };
use crate::engine::error::TranslateResult;

pub type EntityId = String;

/// An entity of the internal scene graph with its components in insertion order
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub id: EntityId,
    pub components: Vec<InternalComponent>,
}

impl Entity {
    pub fn new(id: &str, components: Vec<InternalComponent>) -> Self {
        Self {
            id: id.to_string(),
            components,
        }
    }

    /// First component of the given kind; an entity carries at most one Name
    pub fn component_of_kind(&self, kind: ComponentKind) -> Option<&InternalComponent> {
        self.components.iter().find(|c| c.kind() == kind)
    }
}

/// Untyped wire shape of an entity: `{ "id": ..., "components": [{ "type", "value" }] }`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WireEntity {
    pub id: EntityId,
    pub components: Vec<WireComponent>,
}

// ——————————————————————————————————————————————————————————— Graph Contract ————

/// Read/write access the translators need from a scene graph container
pub trait SceneGraph {
    /// Entities in the container's iteration order
    fn entities(&self) -> Box<dyn Iterator<Item = &Entity> + '_>;
    fn add_entity(&mut self, id: EntityId, components: Vec<InternalComponent>);
}

// ——————————————————————————————————————————————————————————— World ————

/// Ordered in-memory scene graph
#[derive(Debug, Clone, Default)]
pub struct World {
    entities: Vec<Entity>,
    /// Entity id -> position in `entities`
    index: HashMap<EntityId, usize>,
}

impl PartialEq for World {
    fn eq(&self, other: &Self) -> bool {
        self.entities == other.entities
    }
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn an empty entity and return its ID
    pub fn spawn(&mut self) -> EntityId {
        let id = Uuid::new_v4().to_string();
        self.push_entity(Entity::new(&id, Vec::new()));
        id
    }

    /// Insert a component into an entity, replacing any component with the same code
    pub fn insert(&mut self, entity_id: &str, component: InternalComponent) -> bool {
        match self.entity_mut(entity_id) {
            Some(entity) => {
                entity.components.retain(|c| c.code != component.code);
                entity.components.push(component);
                true
            }
            None => false,
        }
    }

    pub fn entity(&self, entity_id: &str) -> Option<&Entity> {
        self.index.get(entity_id).map(|&idx| &self.entities[idx])
    }

    fn entity_mut(&mut self, entity_id: &str) -> Option<&mut Entity> {
        let idx = *self.index.get(entity_id)?;
        self.entities.get_mut(idx)
    }

    fn push_entity(&mut self, entity: Entity) {
        self.index.insert(entity.id.clone(), self.entities.len());
        self.entities.push(entity);
    }

    pub fn get_component(&self, entity_id: &str, code: ComponentCode) -> Option<&InternalComponent> {
        self.entity(entity_id)?.components.iter().find(|c| c.code == code)
    }

    /// Delete an entity and all its components
    pub fn remove_entity(&mut self, entity_id: &str) -> bool {
        let Some(idx) = self.index.remove(entity_id) else {
            return false;
        };
        self.entities.remove(idx);
        for (pos, entity) in self.entities.iter().enumerate().skip(idx) {
            self.index.insert(entity.id.clone(), pos);
        }
        true
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn to_wire(&self) -> serde_json::Result<Vec<WireEntity>> {
        self.entities
            .iter()
            .map(|entity| {
                Ok(WireEntity {
                    id: entity.id.clone(),
                    components: entity.components
                        .iter()
                        .map(InternalComponent::to_wire)
                        .collect::<serde_json::Result<_>>()?,
                })
            })
            .collect()
    }

    pub fn from_wire(entities: &[WireEntity], bridge: &dyn TypeCodeBridge) -> TranslateResult<Self> {
        let mut world = World::new();
        for wire in entities {
            let components = wire.components
                .iter()
                .map(|c| InternalComponent::from_wire(c, bridge))
                .collect::<TranslateResult<Vec<_>>>()?;
            world.add_entity(wire.id.clone(), components);
        }
        Ok(world)
    }
}

impl SceneGraph for World {
    fn entities(&self) -> Box<dyn Iterator<Item = &Entity> + '_> {
        Box::new(self.entities.iter())
    }

    /// Re-adding a known id replaces its components in place
    fn add_entity(&mut self, id: EntityId, components: Vec<InternalComponent>) {
        match self.entity_mut(&id) {
            Some(entity) => entity.components = components,
            None => self.push_entity(Entity { id, components }),
        }
    }
}
