//! Data transfer objects - Wire/display shapes exposed to the host

mod roll_report;

pub use roll_report::{CompoundRollReport, RollReport};
