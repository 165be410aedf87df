//! Progress timeline
//!
//! Maps the current stage of an ordered progression onto every stage,
//! marking which ones are done and which one is in progress. Used for the
//! order tracking screen and for the checkout step indicator.

use serde::Serialize;

/// One rendered stage of a timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineStep<T> {
    pub stage: T,
    /// The stage is at or before the current one
    pub completed: bool,
    /// The stage is the current one
    pub active: bool,
}

/// Build the timeline for `current` over `stages`.
///
/// If `current` does not occur in `stages` every step is neither completed
/// nor active.
pub fn status_timeline<T: PartialEq + Clone>(current: &T, stages: &[T]) -> Vec<TimelineStep<T>> {
    let current_index = stages.iter().position(|stage| stage == current);

    stages
        .iter()
        .enumerate()
        .map(|(index, stage)| TimelineStep {
            stage: stage.clone(),
            completed: current_index.is_some_and(|k| index <= k),
            active: current_index == Some(index),
        })
        .collect()
}

/// Fraction of the progress line to fill: the index of `current` over the
/// last index. 0.0 when `current` is not a stage, 1.0 for a lone stage.
pub fn timeline_progress<T: PartialEq>(current: &T, stages: &[T]) -> f64 {
    match stages.iter().position(|stage| stage == current) {
        None => 0.0,
        Some(_) if stages.len() == 1 => 1.0,
        Some(index) => index as f64 / (stages.len() - 1) as f64,
    }
}
