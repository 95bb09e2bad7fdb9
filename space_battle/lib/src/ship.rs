use crate::movable::Movable;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShipId(String);

impl ShipId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl Default for ShipId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for ShipId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for ShipId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A ship taking part in a battle. Both vectors are optional so that a
/// scenario can describe a ship that is not able to move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    #[serde(default)]
    id: ShipId,
    name: String,
    #[serde(default)]
    position: Option<Vec<i32>>,
    #[serde(default)]
    move_speed: Option<Vec<i32>>,
}

impl Ship {
    pub fn new(name: String) -> Self {
        Self {
            id: ShipId::new(),
            name,
            position: None,
            move_speed: None,
        }
    }

    pub fn with_id(mut self, id: ShipId) -> Self {
        self.id = id;
        self
    }

    pub fn with_position(mut self, position: Vec<i32>) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_move_speed(mut self, move_speed: Vec<i32>) -> Self {
        self.move_speed = Some(move_speed);
        self
    }

    pub fn id(&self) -> &ShipId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Movable for Ship {
    fn position(&self) -> Option<Vec<i32>> {
        self.position.clone()
    }

    fn set_position(&mut self, position: Vec<i32>) {
        self.position = Some(position);
    }

    fn move_speed(&self) -> Option<Vec<i32>> {
        self.move_speed.clone()
    }
}
