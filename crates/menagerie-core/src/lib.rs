//! Record model and in-memory store for the menagerie service.
//!
//! [`Animal`] is the closed set of record variants. [`AnimalStore`] holds them
//! in insertion order. Neither type knows about HTTP or locking; the server
//! crate wraps the store in whatever guard its runtime needs.

pub mod animal;
pub mod error;
pub mod store;

pub use animal::{Animal, AnimalKind};
pub use error::CoreError;
pub use store::AnimalStore;
