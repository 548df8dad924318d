//! Core inventory model for OrionQ.
//!
//! Defines the types every other OrionQ crate builds on:
//! - [`FieldDescriptor`]: a qualified SWQL field (table alias + bare name)
//! - [`FieldRegistry`]: filter parameter → field mapping and the default projection
//! - [`FilterSpec`]: caller-supplied filter patterns and custom-property selection
//! - [`ResultRow`]: one record returned by the information service
//!
//! The registry is plain `'static` data. It is handed to the query builder
//! explicitly rather than looked up by name at runtime.

mod error;
mod field;
mod filter;
mod registry;
mod row;

pub use error::{ModelError, ModelResult};
pub use field::{custom_property_path, FieldDescriptor, TableAlias, CUSTOM_PROPERTIES_BASE};
pub use filter::{CustomProperties, FilterSpec, FilterValue, CUSTOM_PROPERTIES_KEY};
pub use registry::{FieldRegistry, RegistryEntry};
pub use row::ResultRow;
