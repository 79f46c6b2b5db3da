// crates/gazetteer-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a loaded gazetteer.
///
/// Returned by [`Gazetteer::stats`](crate::Gazetteer::stats). Both counts
/// are zero for an empty ("not ready") gazetteer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GazetteerStats {
    pub cities: usize,
    pub regions: usize,
}

impl GazetteerStats {
    pub fn total(&self) -> usize {
        self.cities + self.regions
    }
}
