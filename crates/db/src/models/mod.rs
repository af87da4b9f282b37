//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO for full-overwrite PUTs

pub mod audit;
pub mod bathroom_spec;
pub mod bed_spec;
pub mod booking;
pub mod building;
pub mod common_feature;
pub mod floor;
pub mod furniture;
pub mod paid_item;
pub mod person;
pub mod room;
pub mod room_category;
pub mod room_details;
pub mod user;
