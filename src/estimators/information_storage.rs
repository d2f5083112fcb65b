use crate::error::Result;
use crate::estimators::approaches::discrete::block_mi::BlockMutualInformation;

/// Information storage measures of a single discrete process.
///
/// Both measures are block mutual informations between a window of the past
/// and the window that follows it; they differ only in the window lengths.
pub struct InformationStorage;

impl InformationStorage {
    /// Predictive information `I(X_past^k ; X_future^k)` over the alphabet `0..base`.
    pub fn predictive(base: usize, k: usize) -> Result<BlockMutualInformation> {
        BlockMutualInformation::predictive(base, k)
    }

    /// Active information storage `I(X_past^k ; X_t)` over the alphabet `0..base`.
    pub fn active(base: usize, k: usize) -> Result<BlockMutualInformation> {
        BlockMutualInformation::active(base, k)
    }
}
