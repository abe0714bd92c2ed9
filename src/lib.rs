//! # LedMapper
//!
//! Describe an LED-lit device, map each of its LEDs onto a width × height
//! grid, and export the lighting-component descriptor.
//!
//! ## Architecture
//!
//! LedMapper is organized as a workspace with multiple crates:
//!
//! 1. **ledmapper-core** - Vertex geometry, the grid model, mapping errors
//! 2. **ledmapper-designer** - Shape strategies, mutators, contour resampler, action reducer
//! 3. **ledmapper-trace** - Async image decoding and outline extraction
//! 4. **ledmapper-component** - Component descriptor model and JSON export
//! 5. **ledmapper-settings** - Configuration files
//! 6. **ledmapper** - Session runner binary that integrates all crates

pub mod session;

pub use ledmapper_component::{ComponentDescriptor, ComponentInfo};
pub use ledmapper_core::{Cell, CellStatus, Grid, MappingDiagnostics, MappingError, Vertex};
pub use ledmapper_designer::{
    Action, Direction, MappingHistory, MappingState, RingThreshold, ShapeMode, Step,
    TracedContour,
};
pub use ledmapper_settings::Config;
pub use session::{run_session, run_steps, SessionFile, SessionReport, SessionStep};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Pretty formatted output on stderr, keeping stdout for the report
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
