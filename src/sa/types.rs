//! Progress events and the sink trait.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::SinkError;

/// Snapshot emitted once per temperature level.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProgressEvent {
    /// Index of the temperature level, starting at 0.
    pub step_index: usize,

    /// Temperature of this level (before decay).
    pub temperature: f64,

    /// Lowest energy accepted so far in the run.
    pub best_energy: f64,

    /// Energy of the current candidate at the end of the level.
    pub current_energy: f64,

    /// Percentage of this level's steps that accepted an energy-increasing
    /// move. Counted per level, in `[0, 100]`.
    pub worse_accepted_percent: f64,
}

/// What the engine should do after a sink has seen an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SinkControl {
    /// Keep cooling.
    #[default]
    Continue,
    /// Stop after this temperature level; the best candidate is still returned.
    Stop,
}

/// Receives progress events, in order, on the engine's thread.
///
/// Returning an error aborts the run and surfaces as
/// [`AnnealError::Sink`](crate::error::AnnealError::Sink).
///
/// # Examples
///
/// ```
/// use u_anneal::sa::{ProgressEvent, ProgressSink, SinkControl};
/// use u_anneal::error::SinkError;
///
/// /// Stops as soon as a conflict-free board has been seen.
/// struct StopOnSolution;
///
/// impl ProgressSink for StopOnSolution {
///     fn on_progress(&mut self, event: &ProgressEvent) -> Result<SinkControl, SinkError> {
///         Ok(if event.best_energy == 0.0 {
///             SinkControl::Stop
///         } else {
///             SinkControl::Continue
///         })
///     }
/// }
/// ```
pub trait ProgressSink {
    /// Handles one temperature level's event.
    fn on_progress(&mut self, event: &ProgressEvent) -> Result<SinkControl, SinkError>;
}

impl<S: ProgressSink + ?Sized> ProgressSink for &mut S {
    fn on_progress(&mut self, event: &ProgressEvent) -> Result<SinkControl, SinkError> {
        (**self).on_progress(event)
    }
}

impl<S: ProgressSink + ?Sized> ProgressSink for Box<S> {
    fn on_progress(&mut self, event: &ProgressEvent) -> Result<SinkControl, SinkError> {
        (**self).on_progress(event)
    }
}
