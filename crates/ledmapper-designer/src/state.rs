//! Mapping state and the action reducer.
//!
//! [`MappingState::reduce`] is the single entry point for every user action.
//! It never mutates `self`; invalid actions are logged and leave the state
//! as it was.

use crate::mutators;
use crate::resampler::{ContourResampler, TracedContour};
use crate::shape::{Direction, ShapeMode, Step};
use crate::strategies::{
    CircleStrategy, CustomStrategy, MappingStrategy, SquareStrategy, StrategyOutcome,
};
use crate::threshold::{RingThreshold, DEFAULT_THRESHOLD_STEP};
use ledmapper_core::{
    parse_led_input, CellStatus, Grid, MappingDiagnostics, MappingError, Result, MAX_LED_COUNT,
};
use serde::{Deserialize, Serialize};

/// One user action against the mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Change the device footprint
    ResizeGrid { width: usize, height: usize },
    /// Switch the active shape strategy
    SetShape { shape: ShapeMode },
    /// Bind (or with `None`, unbind) a zero-based LED on one cell
    SetLed {
        x: usize,
        y: usize,
        led: Option<usize>,
    },
    /// Raw 1-based text typed into a cell
    LedInput { x: usize, y: usize, text: String },
    Clear,
    Rotate { direction: Direction },
    Reverse,
    SetThreshold { percent: f64 },
    /// Raw text typed into the threshold input
    ThresholdInput { text: String },
    NudgeThreshold { step: Step },
    SetLedCount { count: usize },
    /// New traced outline; replaces any previous one
    LoadContour { contour: TracedContour },
}

impl Action {
    /// Short label used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ResizeGrid { .. } => "Resize Grid",
            Self::SetShape { .. } => "Set Shape",
            Self::SetLed { .. } => "Set LED",
            Self::LedInput { .. } => "LED Input",
            Self::Clear => "Clear",
            Self::Rotate { .. } => "Rotate",
            Self::Reverse => "Reverse",
            Self::SetThreshold { .. } => "Set Threshold",
            Self::ThresholdInput { .. } => "Threshold Input",
            Self::NudgeThreshold { .. } => "Nudge Threshold",
            Self::SetLedCount { .. } => "Set LED Count",
            Self::LoadContour { .. } => "Load Contour",
        }
    }
}

/// Everything the mapping editor tracks for one component.
#[derive(Debug, Clone, PartialEq)]
pub struct MappingState {
    grid: Grid,
    shape: ShapeMode,
    led_count: usize,
    led_count_fixed: bool,
    threshold: RingThreshold,
    threshold_step: f64,
    contour: Option<TracedContour>,
    resampler: ContourResampler,
}

impl MappingState {
    /// Creates an unassigned `width` × `height` mapping with one LED.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Ok(Self {
            grid: Grid::new(width, height)?,
            shape: ShapeMode::None,
            led_count: 1,
            led_count_fixed: false,
            threshold: RingThreshold::default(),
            threshold_step: DEFAULT_THRESHOLD_STEP,
            contour: None,
            resampler: ContourResampler::default(),
        })
    }

    pub fn with_threshold(mut self, threshold: RingThreshold) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_threshold_step(mut self, step: f64) -> Self {
        self.threshold_step = step;
        self
    }

    pub fn with_resampler(mut self, resampler: ContourResampler) -> Self {
        self.resampler = resampler;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn shape(&self) -> ShapeMode {
        self.shape
    }

    pub fn led_count(&self) -> usize {
        self.led_count
    }

    /// Whether the LED count was set explicitly rather than by a strategy.
    pub fn is_led_count_fixed(&self) -> bool {
        self.led_count_fixed
    }

    pub fn threshold(&self) -> RingThreshold {
        self.threshold
    }

    pub fn contour(&self) -> Option<&TracedContour> {
        self.contour.as_ref()
    }

    pub fn cell_status(&self, x: usize, y: usize) -> Option<CellStatus> {
        self.grid.cell_status(x, y, self.led_count)
    }

    pub fn diagnostics(&self) -> MappingDiagnostics {
        self.grid.diagnostics(self.led_count)
    }

    /// Applies `action` and returns the next state.
    pub fn reduce(&self, action: Action) -> MappingState {
        let name = action.name();
        match self.try_reduce(action) {
            Ok(next) => next,
            Err(e) => {
                tracing::warn!("Ignoring {} action: {}", name, e);
                self.clone()
            }
        }
    }

    fn try_reduce(&self, action: Action) -> Result<MappingState> {
        let mut next = self.clone();
        match action {
            Action::ResizeGrid { width, height } => {
                next.grid = self.grid.resize(width, height)?;
                next.apply_shape();
            }
            Action::SetShape {
                shape: ShapeMode::None,
            }
            | Action::Clear => {
                next.grid = mutators::clear(&self.grid);
                next.shape = ShapeMode::None;
            }
            Action::SetShape { shape } => {
                next.shape = shape;
                next.apply_shape();
            }
            Action::SetLed { x, y, led } => {
                next.set_led(x, y, led)?;
            }
            Action::LedInput { x, y, text } => match parse_led_input(&text) {
                Some(led) => next.set_led(x, y, led)?,
                None => tracing::debug!("Ignoring LED input {:?} at ({}, {})", text, x, y),
            },
            Action::Rotate { direction } => {
                next.grid = mutators::rotate(&self.grid, direction);
            }
            Action::Reverse => {
                next.grid = mutators::reverse(&self.grid);
            }
            Action::SetThreshold { percent } => {
                next.set_threshold(RingThreshold::new(percent)?);
            }
            Action::ThresholdInput { text } => {
                next.set_threshold(RingThreshold::parse(&text)?);
            }
            Action::NudgeThreshold { step } => {
                next.set_threshold(self.threshold.nudge(step, self.threshold_step));
            }
            Action::SetLedCount { count } => {
                if count == 0 || count > MAX_LED_COUNT {
                    return Err(MappingError::InvalidLedCount(count));
                }
                next.led_count = count;
                next.led_count_fixed = true;
                if next.shape == ShapeMode::Custom {
                    next.apply_shape();
                }
            }
            Action::LoadContour { contour } => {
                tracing::info!(
                    "Loaded contour with {} vertices ({}x{} source)",
                    contour.vertices.len(),
                    contour.source_width,
                    contour.source_height
                );
                next.contour = Some(contour);
                if next.shape == ShapeMode::Custom {
                    next.apply_shape();
                }
            }
        }
        Ok(next)
    }

    /// Manual edits grow the LED count to fit the new LED, up to
    /// [`MAX_LED_COUNT`].
    fn set_led(&mut self, x: usize, y: usize, led: Option<usize>) -> Result<()> {
        let needed = match led {
            Some(led) => match led.checked_add(1) {
                Some(needed) if needed <= MAX_LED_COUNT => needed,
                _ => {
                    return Err(MappingError::LedIndexTooLarge {
                        led,
                        max: MAX_LED_COUNT,
                    })
                }
            },
            None => 0,
        };

        self.grid = self.grid.set_led(x, y, led)?;
        if needed > self.led_count {
            tracing::debug!("LED count grows from {} to {}", self.led_count, needed);
            self.led_count = needed;
        }
        Ok(())
    }

    fn set_threshold(&mut self, threshold: RingThreshold) {
        self.threshold = threshold;
        if self.shape == ShapeMode::Circle {
            self.apply_shape();
        }
    }

    /// Re-runs the active strategy from a cleared grid.
    fn apply_shape(&mut self) {
        let outcome = match self.shape {
            ShapeMode::None => return,
            ShapeMode::Circle => self.run(&CircleStrategy::new(self.threshold)),
            ShapeMode::Square => self.run(&SquareStrategy),
            ShapeMode::Custom => match &self.contour {
                Some(contour) => {
                    let count = self.led_count_fixed.then_some(self.led_count);
                    self.run(&CustomStrategy::new(contour, self.resampler, count))
                }
                None => {
                    tracing::warn!("Custom shape selected before any contour was traced");
                    StrategyOutcome {
                        grid: self.grid.cleared(),
                        led_count: None,
                    }
                }
            },
        };

        self.grid = outcome.grid;
        if let Some(count) = outcome.led_count {
            // Square and Circle define the count; a fixed count only survives Custom.
            if self.shape != ShapeMode::Custom {
                self.led_count_fixed = false;
            }
            if count == 0 {
                tracing::warn!("{} shape placed no LEDs; LED count reset to 1", self.shape);
            }
            self.led_count = count.max(1);
        }
    }

    fn run(&self, strategy: &dyn MappingStrategy) -> StrategyOutcome {
        let outcome = strategy.apply(&self.grid);
        tracing::debug!(
            "{} strategy on {}x{} grid assigned {} cells",
            strategy.name(),
            self.width(),
            self.height(),
            outcome.grid.count_used()
        );
        outcome
    }
}
