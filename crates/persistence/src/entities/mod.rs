//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod device;
pub mod group;
pub mod membership;
pub mod user;

pub use device::DeviceEntity;
pub use group::GroupEntity;
pub use membership::UserGroupMappingEntity;
pub use user::UserEntity;
