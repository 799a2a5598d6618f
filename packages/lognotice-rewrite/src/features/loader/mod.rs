//! Unit Loader Feature

mod unit_loader;

pub use unit_loader::{LoadOutcome, UnitLoader};
