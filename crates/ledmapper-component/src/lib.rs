//! # LedMapper Component
//!
//! The exported lighting-component descriptor: product fields, LED names,
//! identity mapping and per-LED grid coordinates.

pub mod error;
pub mod export;
pub mod model;

pub use error::{ComponentError, ComponentResult};
pub use export::{export_component, load_from_file, write_to_dir};
pub use model::{strip_data_uri, ComponentDescriptor, ComponentInfo};
