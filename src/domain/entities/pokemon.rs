//! Pokemon entity - one record of the read-only dataset

/// A Pokemon as served by the API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pokemon {
    pub name: String,
    /// Path or URL to the default front sprite
    pub sprite_front_default: Option<String>,
    pub primary_type: String,
    /// Second type tag; absent for single-typed Pokemon
    pub secondary_type: Option<String>,
}

impl Pokemon {
    pub fn new(name: impl Into<String>, primary_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sprite_front_default: None,
            primary_type: primary_type.into(),
            secondary_type: None,
        }
    }

    pub fn with_sprite(mut self, sprite: impl Into<String>) -> Self {
        self.sprite_front_default = Some(sprite.into());
        self
    }

    pub fn with_secondary_type(mut self, secondary_type: impl Into<String>) -> Self {
        self.secondary_type = Some(secondary_type.into());
        self
    }
}
