//! Room attribute discriminants.
//!
//! Room details store side/balcony/bathroom attributes as small integer
//! columns; these enums are the allow-list those columns are validated
//! against before anything is written.

use crate::error::CoreError;

/// Compass side a room faces (stored as 1-4).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomSide {
    East = 1,
    West = 2,
    North = 3,
    South = 4,
}

impl RoomSide {
    pub fn from_id(id: i32) -> Result<Self, CoreError> {
        match id {
            1 => Ok(Self::East),
            2 => Ok(Self::West),
            3 => Ok(Self::North),
            4 => Ok(Self::South),
            other => Err(CoreError::Validation(format!(
                "side_id must be 1-4, got {other}"
            ))),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::East => "East",
            Self::West => "West",
            Self::North => "North",
            Self::South => "South",
        }
    }
}

/// Whether the room has a balcony (1=attached, 2=none).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalconyStatus {
    Attached = 1,
    None = 2,
}

impl BalconyStatus {
    pub fn from_id(id: i32) -> Result<Self, CoreError> {
        match id {
            1 => Ok(Self::Attached),
            2 => Ok(Self::None),
            other => Err(CoreError::Validation(format!(
                "balcony_id must be 1 or 2, got {other}"
            ))),
        }
    }
}

/// Whether the room has an attached bathroom (1=attached, 2=none).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BathroomStatus {
    Attached = 1,
    None = 2,
}

impl BathroomStatus {
    pub fn from_id(id: i32) -> Result<Self, CoreError> {
        match id {
            1 => Ok(Self::Attached),
            2 => Ok(Self::None),
            other => Err(CoreError::Validation(format!(
                "attached_bathroom_id must be 1 or 2, got {other}"
            ))),
        }
    }
}
