//! Drawable entities handed to the scene.

use std::fmt;

use hashbrown::HashMap;
use tessera_math::{Rect, Vec2};

/// Scene-unique identifier of a drawable.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for EntityId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Animation key → asset reference table owned by the scene.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnimationSet {
    clips: HashMap<String, String>,
}

impl AnimationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, asset: impl Into<String>) -> Self {
        self.clips.insert(key.into(), asset.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.clips.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.clips.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}

/// Something the scene draws: a textured rectangle with an optional
/// animation table.
#[derive(Clone, Debug, PartialEq)]
pub struct Drawable {
    pub id: EntityId,
    pub position: Vec2,
    pub size: Vec2,
    pub texture: String,
    pub animations: Option<AnimationSet>,
    /// Key of the animation currently playing, if any.
    pub animation: Option<String>,
}

impl Drawable {
    pub fn new(id: impl Into<EntityId>, position: Vec2, size: Vec2, texture: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            position,
            size,
            texture: texture.into(),
            animations: None,
            animation: None,
        }
    }

    pub fn with_animations(mut self, animations: AnimationSet) -> Self {
        self.animations = Some(animations);
        self
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_position_size(self.position, self.size)
    }

    /// Asset reference for the current frame: the playing animation's clip
    /// when one is set, otherwise the static texture.
    pub fn current_asset(&self) -> &str {
        self.animation
            .as_deref()
            .and_then(|key| self.animations.as_ref()?.get(key))
            .unwrap_or(self.texture.as_str())
    }
}
