pub mod cell;
pub mod keys;
pub mod report;
pub mod tally;

pub use cell::Cell;
pub use keys::AreaKey;
pub use report::{DataQuality, Report, RtRow, RwGroup};
pub use tally::Tally;
