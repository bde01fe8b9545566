//! Input events delivered by the scene.

use tessera_math::Vec2;

use crate::entity::EntityId;

/// A click or tap in world space.
#[derive(Clone, Debug, PartialEq)]
pub struct TapEvent {
    /// World-space position of the tap.
    pub position: Vec2,
    /// The registered entity under the tap, if any.
    pub target: Option<EntityId>,
}

impl TapEvent {
    /// A tap that did not land on any entity.
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            target: None,
        }
    }
}
