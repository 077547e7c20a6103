//! Tool registry
//!
//! The registry is a fixed table keyed by [`ToolId`]. Lookups by raw string
//! are the only fallible operation: a string either names a tool or it does not.

mod catalog;
mod descriptor;
mod id;

pub use catalog::{catalog, search, CatalogFilter};
pub use descriptor::{Category, ToolDescriptor};
pub use id::ToolId;

use crate::processing::error::Result;

/// Look up the descriptor of a tool by its URL identifier
///
/// # Errors
///
/// Returns `ProcessingError::ToolNotFound` if the identifier names no tool
pub fn describe(tool_id: &str) -> Result<ToolDescriptor> {
    tool_id.parse::<ToolId>().map(ToolId::descriptor)
}
