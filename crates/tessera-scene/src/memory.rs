//! In-memory [`Scene`] used by the headless host and by tests.

use hashbrown::HashMap;
use tessera_math::Vec2;

use crate::entity::{Drawable, EntityId};
use crate::events::TapEvent;
use crate::scene::{Scene, SceneError};

/// Stores drawables in registration (draw) order with O(1) lookup by id.
#[derive(Debug, Default)]
pub struct MemoryScene {
    entities: HashMap<EntityId, Drawable>,
    order: Vec<EntityId>,
}

impl MemoryScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &EntityId) -> Option<&Drawable> {
        self.entities.get(id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Drawables in draw order: earlier registrations are drawn first.
    pub fn drawables(&self) -> impl Iterator<Item = &Drawable> + '_ {
        self.order.iter().filter_map(|id| self.entities.get(id))
    }

    /// Build the event a tap at `position` would deliver.
    pub fn tap(&self, position: Vec2) -> TapEvent {
        TapEvent {
            position,
            target: self.pick(position),
        }
    }

    fn entity_mut(&mut self, id: &EntityId) -> Result<&mut Drawable, SceneError> {
        self.entities
            .get_mut(id)
            .ok_or_else(|| SceneError::UnknownEntity(id.clone()))
    }
}

impl Scene for MemoryScene {
    fn register_entity(&mut self, drawable: Drawable) -> Result<(), SceneError> {
        if self.entities.contains_key(&drawable.id) {
            return Err(SceneError::DuplicateEntity(drawable.id));
        }
        self.order.push(drawable.id.clone());
        self.entities.insert(drawable.id.clone(), drawable);
        Ok(())
    }

    fn unregister_entity(&mut self, id: &EntityId) -> Result<Drawable, SceneError> {
        let drawable = self
            .entities
            .remove(id)
            .ok_or_else(|| SceneError::UnknownEntity(id.clone()))?;
        self.order.retain(|other| other != id);
        Ok(drawable)
    }

    fn set_position(&mut self, id: &EntityId, position: Vec2) -> Result<(), SceneError> {
        self.entity_mut(id)?.position = position;
        Ok(())
    }

    fn set_animation(&mut self, id: &EntityId, key: &str) -> Result<(), SceneError> {
        let drawable = self.entity_mut(id)?;
        let known = drawable
            .animations
            .as_ref()
            .is_some_and(|set| set.contains(key));
        if !known {
            return Err(SceneError::UnknownAnimation {
                id: id.clone(),
                key: key.to_string(),
            });
        }
        if drawable.animation.as_deref() != Some(key) {
            tracing::trace!(entity = %id, key, "animation changed");
            drawable.animation = Some(key.to_string());
        }
        Ok(())
    }

    fn pick(&self, position: Vec2) -> Option<EntityId> {
        self.order
            .iter()
            .rev()
            .filter_map(|id| self.entities.get(id))
            .find(|d| d.bounds().contains_point(position))
            .map(|d| d.id.clone())
    }

    fn contains(&self, id: &EntityId) -> bool {
        self.entities.contains_key(id)
    }
}
