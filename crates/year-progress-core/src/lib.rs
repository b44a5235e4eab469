//! Progress computation and bar rendering for year-progress.
//!
//! Every calculation takes the sampled instant as an argument so that all
//! bars of one frame agree on "now".

/// Tick bars, glyphs and the canvas they are drawn on.
pub mod bar;
/// Error taxonomy.
pub mod error;
/// Birth date and life expectancy inputs.
pub mod lifespan;
/// Elapsed-time percentages per period.
pub mod progress;

pub use bar::{BarGlyphs, BarRenderer, BarSpec, Canvas, DrawLayers, Rgb, TextRun};
pub use error::{ProgressError, Result};
pub use lifespan::LifespanConfig;
pub use progress::{Period, PeriodProgress, ProgressSnapshot, snapshot};
