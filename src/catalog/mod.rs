//! Simulation catalog: one JSON file of pre-computed records per trigger category

pub mod loader;
pub mod model;

pub use loader::{
    available_triggers, filename_from_trigger, pretty_name_from_filename, Catalog, CatalogError,
    CatalogResult, DEFAULT_TRIGGER,
};
pub use model::{RawGraph, SimulationItem, StrategyEntry};
