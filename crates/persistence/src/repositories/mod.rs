//! Repository implementations for database operations.
//!
//! Every repository borrows an open connection, normally the one behind a
//! request's transaction, so a handler's writes commit or roll back together:
//!
//! ```ignore
//! let mut tx = pool.begin().await?;
//! GroupRepository::new(&mut tx).add(&group).await?;
//! MembershipRepository::new(&mut tx).add(&mapping).await?;
//! tx.commit().await?;
//! ```

pub mod device;
pub mod group;
pub mod membership;
pub mod user;

pub use device::DeviceRepository;
pub use group::GroupRepository;
pub use membership::MembershipRepository;
pub use user::UserRepository;
