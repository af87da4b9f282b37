//! Pure domain logic for the dormitory administration service.
//!
//! Nothing here touches the database or HTTP; the `db` and `api` crates
//! build on these types.

pub mod booking;
pub mod error;
pub mod images;
pub mod rooms;
pub mod types;
