//! Scripted mapping sessions.
//!
//! A session file describes one component and the editing steps applied to
//! it, in order:
//!
//! ```toml
//! [component]
//! product_name = "Aurora Ring 12"
//! display_name = "Aurora Ring"
//! type = "Fan"
//! width = 11
//! height = 11
//!
//! [[steps]]
//! action = "set_shape"
//! shape = "circle"
//!
//! [[steps]]
//! trace = "outline.png"
//! ```
//!
//! Each step is either a reducer [`Action`] or a `trace` of an image, whose
//! path is relative to the session file.

use anyhow::Context;
use ledmapper_component::{export_component, write_to_dir, ComponentDescriptor, ComponentInfo};
use ledmapper_designer::{
    Action, ContourResampler, MappingHistory, MappingState, RingThreshold,
};
use ledmapper_settings::Config;
use ledmapper_trace::{EdgeContourExtractor, OutlineTracer};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The `[component]` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionComponent {
    #[serde(flatten)]
    pub info: ComponentInfo,
    pub width: usize,
    pub height: usize,
    /// Fixed LED count; left to the shape strategies when absent.
    #[serde(default)]
    pub led_count: Option<usize>,
}

/// One `[[steps]]` entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SessionStep {
    /// Trace an outline image and load it as the custom contour
    Trace { trace: PathBuf },
    Action(Action),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionFile {
    pub component: SessionComponent,
    #[serde(default)]
    pub steps: Vec<SessionStep>,
}

impl SessionFile {
    pub async fn load(path: &Path) -> anyhow::Result<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read session file {}", path.display()))?;
        let session: Self = toml::from_str(&content)
            .with_context(|| format!("Invalid session file {}", path.display()))?;
        Ok(session)
    }
}

/// Outcome of a finished session.
#[derive(Debug)]
pub struct SessionReport {
    pub state: MappingState,
    pub descriptor: ComponentDescriptor,
    pub output: PathBuf,
}

/// Editing state seeded from the configured defaults.
pub fn initial_state(component: &SessionComponent, config: &Config) -> anyhow::Result<MappingState> {
    let threshold = RingThreshold::new(config.mapping.default_threshold)?;
    let state = MappingState::new(component.width, component.height)?
        .with_threshold(threshold)
        .with_threshold_step(config.mapping.threshold_step)
        .with_resampler(ContourResampler::new(config.mapping.max_gap_step));

    Ok(match component.led_count {
        Some(count) => state.reduce(Action::SetLedCount { count }),
        None => state,
    })
}

pub fn tracer(config: &Config) -> OutlineTracer {
    OutlineTracer::new(
        config.trace.pixels_per_cell,
        EdgeContourExtractor {
            canny_low: config.trace.canny_low,
            canny_high: config.trace.canny_high,
            min_contour_points: config.trace.min_contour_points,
        },
    )
}

/// Applies every step of `session` and returns the final state.
///
/// `base_dir` resolves relative trace paths.
pub async fn run_steps(
    session: &SessionFile,
    config: &Config,
    base_dir: &Path,
) -> anyhow::Result<MappingState> {
    let mut history = MappingHistory::new(initial_state(&session.component, config)?);
    let tracer = tracer(config);

    for (index, step) in session.steps.iter().enumerate() {
        let action = match step {
            SessionStep::Action(action) => action.clone(),
            SessionStep::Trace { trace } => {
                let path = base_dir.join(trace);
                let current = history.current();
                let contour = tracer
                    .trace_file(&path, current.width(), current.height())
                    .await
                    .with_context(|| format!("Step {}: failed to trace {}", index + 1, path.display()))?;
                Action::LoadContour { contour }
            }
        };
        tracing::debug!("Step {}: {}", index + 1, action.name());
        history.dispatch(action);
    }

    Ok(history.into_current())
}

/// Loads, runs and exports the session at `path`.
///
/// The descriptor goes to `output_dir`, or the configured export directory.
pub async fn run_session(
    path: &Path,
    output_dir: Option<&Path>,
    config: &Config,
) -> anyhow::Result<SessionReport> {
    let session = SessionFile::load(path).await?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    let state = run_steps(&session, config, base_dir).await?;

    let descriptor = export_component(&session.component.info, &state);
    let dir = output_dir.unwrap_or(&config.export.output_directory);
    let output = write_to_dir(&descriptor, dir, config.export.pretty)?;

    Ok(SessionReport {
        state,
        descriptor,
        output,
    })
}
