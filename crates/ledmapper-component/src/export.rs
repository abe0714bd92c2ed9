//! Writing descriptors to disk.

use crate::error::ComponentResult;
use crate::model::{ComponentDescriptor, ComponentInfo};
use ledmapper_designer::MappingState;
use std::fs;
use std::path::{Path, PathBuf};

/// Builds the descriptor for `state`, logging any mapping problems.
///
/// Duplicate, unplaced and out-of-range LEDs never block an export.
pub fn export_component(info: &ComponentInfo, state: &MappingState) -> ComponentDescriptor {
    let diagnostics = state.diagnostics();
    if !diagnostics.duplicates.is_empty() {
        tracing::warn!("LEDs mapped to several cells: {:?}", diagnostics.duplicates);
    }
    if !diagnostics.unplaced.is_empty() {
        tracing::warn!(
            "{} LEDs have no cell and export as [0, 0]",
            diagnostics.unplaced.len()
        );
    }
    if !diagnostics.out_of_range.is_empty() {
        tracing::warn!(
            "LEDs beyond LedCount {} are left out: {:?}",
            state.led_count(),
            diagnostics.out_of_range
        );
    }
    ComponentDescriptor::from_state(info, state)
}

/// Writes `descriptor` as `{DisplayName}.json` inside `dir`.
pub fn write_to_dir(
    descriptor: &ComponentDescriptor,
    dir: impl AsRef<Path>,
    pretty: bool,
) -> ComponentResult<PathBuf> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;
    let path = dir.join(descriptor.file_name());
    fs::write(&path, descriptor.to_json(pretty)?)?;
    tracing::info!(
        "Exported {} LEDs to {}",
        descriptor.led_count,
        path.display()
    );
    Ok(path)
}

pub fn load_from_file(path: impl AsRef<Path>) -> ComponentResult<ComponentDescriptor> {
    let content = fs::read_to_string(path)?;
    ComponentDescriptor::from_json(&content)
}
