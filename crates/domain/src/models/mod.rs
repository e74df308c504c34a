//! Domain models for the fleet registry.

pub mod device;
pub mod group;
pub mod membership;
pub mod telemetry;
pub mod user;

pub use device::Device;
pub use group::Group;
pub use membership::UserGroupMapping;
pub use telemetry::TemperatureReading;
pub use user::User;
