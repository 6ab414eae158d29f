//! Demographic cross-tabulation ("monografi") of a resident roster.
//!
//! A roster snapshot is grouped by RW and RT, classified against one
//! categorical dimension, and counted by gender with RW subtotals and a grand
//! total. The resulting [`Report`] is the only thing renderers consume.

pub mod config;
pub mod dimensions;
pub mod error;
pub mod input;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;

pub use dimensions::{CategoryDimension, DimensionRegistry, FALLBACK_LABEL};
pub use error::{ConfigError, Error, InputError, ReportError};
pub use input::{Gender, PersonRecord};
pub use model::{Cell, Report, RtRow, RwGroup, Tally};
pub use pipeline::build_report;
