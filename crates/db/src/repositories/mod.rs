//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod bathroom_spec_repo;
pub mod bed_spec_repo;
pub mod booking_repo;
pub mod building_repo;
pub mod common_feature_repo;
pub mod floor_repo;
pub mod furniture_repo;
pub mod paid_item_repo;
pub mod person_repo;
pub mod room_category_repo;
pub mod room_details_repo;
pub mod room_repo;
pub mod user_repo;

pub use bathroom_spec_repo::BathroomSpecRepo;
pub use bed_spec_repo::BedSpecRepo;
pub use booking_repo::BookingRepo;
pub use building_repo::BuildingRepo;
pub use common_feature_repo::CommonFeatureRepo;
pub use floor_repo::FloorRepo;
pub use furniture_repo::FurnitureRepo;
pub use paid_item_repo::PaidItemRepo;
pub use person_repo::PersonRepo;
pub use room_category_repo::RoomCategoryRepo;
pub use room_details_repo::RoomDetailsRepo;
pub use room_repo::RoomRepo;
pub use user_repo::UserRepo;
