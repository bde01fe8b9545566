//! The rendering collaborator interface.

use tessera_math::Vec2;
use tessera_terrain::World;

use crate::entity::{Drawable, EntityId};

/// Errors returned by [`Scene`] operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SceneError {
    /// An entity with this id is already registered. Unregister it first.
    #[error("entity already registered: {0}")]
    DuplicateEntity(EntityId),

    /// No entity with this id is registered.
    #[error("unknown entity: {0}")]
    UnknownEntity(EntityId),

    /// The entity has no animation with this key.
    #[error("entity {id} has no animation {key:?}")]
    UnknownAnimation {
        /// Entity the animation was requested for.
        id: EntityId,
        /// The missing key.
        key: String,
    },
}

/// A drawable scene keyed by [`EntityId`].
///
/// Registration never replaces: re-registering an id must be preceded by
/// [`unregister_entity`](Scene::unregister_entity).
pub trait Scene {
    /// Add a drawable.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::DuplicateEntity`] if the id is already present.
    fn register_entity(&mut self, drawable: Drawable) -> Result<(), SceneError>;

    /// Remove a drawable and return it.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::UnknownEntity`] if the id is not registered.
    fn unregister_entity(&mut self, id: &EntityId) -> Result<Drawable, SceneError>;

    /// Move a registered drawable.
    fn set_position(&mut self, id: &EntityId, position: Vec2) -> Result<(), SceneError>;

    /// Switch a registered drawable to one of its animations.
    fn set_animation(&mut self, id: &EntityId, key: &str) -> Result<(), SceneError>;

    /// The topmost drawable whose bounds contain `position`.
    fn pick(&self, position: Vec2) -> Option<EntityId>;

    fn contains(&self, id: &EntityId) -> bool;
}

/// Register every tile of `world` in emission order. Returns the number of
/// tiles registered.
///
/// # Errors
///
/// Fails on the first tile whose id is already in the scene.
pub fn register_world(scene: &mut impl Scene, world: &World) -> Result<usize, SceneError> {
    let size = world.config().tile_size as f32;
    for tile in world.tiles() {
        scene.register_entity(Drawable::new(
            tile.id.as_str(),
            Vec2::new(tile.x as f32, tile.y as f32),
            Vec2::splat(size),
            tile.texture.as_str(),
        ))?;
    }
    tracing::debug!(tiles = world.tiles().len(), "registered world tiles");
    Ok(world.tiles().len())
}

/// Swap the drawable registered as `id` for a plain one showing `texture`,
/// keeping its id, position and size.
///
/// The old drawable is unregistered before the replacement is registered, so
/// the replacement lands on top of the draw order. Returns the old drawable.
///
/// # Errors
///
/// Returns [`SceneError::UnknownEntity`] if `id` is not registered.
pub fn replace_texture(
    scene: &mut impl Scene,
    id: &EntityId,
    texture: &str,
) -> Result<Drawable, SceneError> {
    let previous = scene.unregister_entity(id)?;
    scene.register_entity(Drawable::new(
        previous.id.clone(),
        previous.position,
        previous.size,
        texture,
    ))?;
    tracing::debug!(entity = %id, texture, "drawable replaced");
    Ok(previous)
}
