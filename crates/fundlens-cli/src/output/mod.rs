//! Console and chart presentation of portfolio analyses.

pub mod chart;
pub mod table;
