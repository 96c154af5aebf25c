//! Metadata model
//!
//! Canonical in-memory representation of discovered tables. These types are
//! pure data: evaluation logic lives in `lakeguard-validate`.

pub mod batch;
pub mod entity;
pub mod property_bag;

pub use batch::EntityBatch;
pub use entity::{Entity, Field, QualifiedName};
pub use property_bag::PropertyBag;
