//! ug-model: the transit network graph model.
//!
//! Provides:
//! - Entities (Station, Line, District, Zone) exposed as read-only views
//! - The `Model`, which owns the entities and keeps their cross-references
//!   consistent on every mutation
//! - Invariant checking over a whole model
//!
//! # Example
//!
//! ```
//! use ug_model::Model;
//!
//! let mut model = Model::new();
//! model.add_station("Baker Street", "City of Westminster", [1]).unwrap();
//! model.add_station_to_line("Baker Street", "Jubilee").unwrap();
//! model.add_station_to_line("Baker Street", "Bakerloo").unwrap();
//!
//! assert_eq!(model.station("Baker Street").unwrap().interchange_count(), 2);
//! assert!(model.validate().is_ok());
//! ```

pub mod entity;
pub mod error;
pub mod model;
pub mod validate;

// Re-exports for ergonomics
pub use entity::{District, EntityKind, Line, Station, Zone, ZoneId};
pub use error::{ErrorKind, ModelError, ModelResult};
pub use model::Model;
