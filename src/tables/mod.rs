// src/tables/mod.rs

pub mod definitions;
pub mod error;
pub mod events;
pub mod grid;
pub mod plugin;
pub mod resources;

pub(crate) mod systems;

pub use definitions::ColumnDefinition;
pub use error::{TableError, TableResult};
pub use grid::{GridChange, TableGrid};
pub use plugin::TablesPlugin;
pub use resources::TableRegistry;
