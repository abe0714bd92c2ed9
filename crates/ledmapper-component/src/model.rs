//! Component descriptor model.
//!
//! [`ComponentInfo`] holds what the user types in; [`ComponentDescriptor`]
//! is the exported artifact, built from the info plus a finished mapping.

use crate::error::{ComponentError, ComponentResult};
use ledmapper_core::Grid;
use ledmapper_designer::MappingState;
use serde::{Deserialize, Serialize};

/// Descriptive fields of a component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentInfo {
    pub product_name: String,
    pub display_name: String,
    pub brand: String,
    /// Device kind shown by the lighting application (Fan, AIO, Strip, ...)
    #[serde(rename = "type")]
    pub component_type: String,
    /// Base64 image, optionally as a `data:` URI.
    pub image: String,
}

/// Exported component JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ComponentDescriptor {
    pub product_name: String,
    pub display_name: String,
    pub brand: String,
    #[serde(rename = "Type")]
    pub component_type: String,
    pub led_count: usize,
    pub width: usize,
    pub height: usize,
    pub led_mapping: Vec<usize>,
    pub led_coordinates: Vec<[usize; 2]>,
    pub led_names: Vec<String>,
    pub image: String,
}

impl ComponentDescriptor {
    /// Builds the descriptor for `grid` with `led_count` LEDs.
    ///
    /// `LedCoordinates[i]` is the first cell (row-major) holding LED `i`, or
    /// `[0, 0]` when no cell does.
    pub fn build(info: &ComponentInfo, grid: &Grid, led_count: usize) -> Self {
        let positions = grid.led_positions();
        let led_coordinates = (0..led_count)
            .map(|led| {
                positions
                    .get(&led)
                    .map_or([0, 0], |&(x, y)| [x, y])
            })
            .collect();

        Self {
            product_name: info.product_name.clone(),
            display_name: info.display_name.clone(),
            brand: info.brand.clone(),
            component_type: info.component_type.clone(),
            led_count,
            width: grid.width(),
            height: grid.height(),
            led_mapping: (0..led_count).collect(),
            led_coordinates,
            led_names: (1..=led_count).map(|i| format!("Led{}", i)).collect(),
            image: strip_data_uri(&info.image).to_string(),
        }
    }

    pub fn from_state(info: &ComponentInfo, state: &MappingState) -> Self {
        Self::build(info, state.grid(), state.led_count())
    }

    /// Checks the length and range invariants of the LED lists.
    pub fn validate(&self) -> ComponentResult<()> {
        let n = self.led_count;
        for (name, len) in [
            ("LedMapping", self.led_mapping.len()),
            ("LedCoordinates", self.led_coordinates.len()),
            ("LedNames", self.led_names.len()),
        ] {
            if len != n {
                return Err(ComponentError::InvalidComponent(format!(
                    "LedCount is {} but {} has {} entries",
                    n, name, len
                )));
            }
        }

        if let Some([x, y]) = self
            .led_coordinates
            .iter()
            .find(|[x, y]| *x >= self.width || *y >= self.height)
        {
            return Err(ComponentError::InvalidComponent(format!(
                "coordinate [{}, {}] is outside the {}x{} grid",
                x, y, self.width, self.height
            )));
        }
        Ok(())
    }

    pub fn to_json(&self, pretty: bool) -> ComponentResult<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    pub fn from_json(json: &str) -> ComponentResult<Self> {
        let descriptor: Self = serde_json::from_str(json)?;
        descriptor.validate()?;
        Ok(descriptor)
    }

    /// Download name: `{DisplayName}.json`.
    ///
    /// Falls back to the product name, then to `component`. Path separators
    /// and control characters become `_`.
    pub fn file_name(&self) -> String {
        let base = [&self.display_name, &self.product_name]
            .into_iter()
            .map(|name| name.trim())
            .find(|name| !name.is_empty())
            .unwrap_or("component");
        let safe: String = base
            .chars()
            .map(|c| {
                if c == '/' || c == '\\' || c.is_control() {
                    '_'
                } else {
                    c
                }
            })
            .collect();
        format!("{}.json", safe)
    }
}

/// Drops a `data:<mime>;base64,` prefix, if present.
pub fn strip_data_uri(image: &str) -> &str {
    let trimmed = image.trim();
    match trimmed.strip_prefix("data:") {
        Some(rest) => rest.split_once(',').map_or(rest, |(_, payload)| payload),
        None => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_data_uri() {
        assert_eq!(strip_data_uri("data:image/png;base64,iVBORw0"), "iVBORw0");
        assert_eq!(strip_data_uri("iVBORw0"), "iVBORw0");
        assert_eq!(strip_data_uri(""), "");
    }

    #[test]
    fn test_file_name_fallbacks() {
        let grid = Grid::new(1, 1).unwrap();
        let mut info = ComponentInfo {
            display_name: "Fan 120/140".to_string(),
            ..Default::default()
        };
        assert_eq!(
            ComponentDescriptor::build(&info, &grid, 1).file_name(),
            "Fan 120_140.json"
        );

        info.display_name = "  ".to_string();
        info.product_name = "QL120".to_string();
        assert_eq!(ComponentDescriptor::build(&info, &grid, 1).file_name(), "QL120.json");

        info.product_name.clear();
        assert_eq!(
            ComponentDescriptor::build(&info, &grid, 1).file_name(),
            "component.json"
        );
    }
}
