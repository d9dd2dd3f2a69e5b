//! Blending of historical and forecast records into ranked weeks.
//!
//! This module labels each scored day by its data source, groups days
//! into Monday-anchored calendar weeks, computes per-week-per-source
//! mean scores, and ranks the weeks.

pub mod merge;
pub mod types;
pub mod utility;
pub mod weekly;
