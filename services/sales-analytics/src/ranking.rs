//! Profit ranking and bonus assignment
//!
//! Sellers are ordered by profit descending with a stable sort, so equal
//! profits keep input seller order. Bonuses are then assigned by rank
//! through a pluggable `BonusCalculator`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;
use types::errors::AnalysisError;

use crate::stats::SellerStat;

/// Strategy computing a seller's bonus from its rank
///
/// `index` is the 0-based rank, `total` the number of ranked sellers.
/// Returns `None` when the bonus does not fit in a `Decimal`.
pub trait BonusCalculator {
    fn bonus(&self, index: usize, total: usize, seller: &SellerStat) -> Option<Decimal>;
}

impl<F> BonusCalculator for F
where
    F: Fn(usize, usize, &SellerStat) -> Option<Decimal>,
{
    fn bonus(&self, index: usize, total: usize, seller: &SellerStat) -> Option<Decimal> {
        self(index, total, seller)
    }
}

/// Rank-tiered bonus as a share of profit
///
/// | rank                     | bonus                     |
/// |--------------------------|---------------------------|
/// | 0                        | `profit × top_rate`       |
/// | 1, 2                     | `profit × runner_up_rate` |
/// | last (`total − 1`)       | 0                         |
/// | everyone else            | `profit × standard_rate`  |
///
/// Rules are checked top to bottom, so with few sellers the earlier tier
/// wins: a single seller gets the top rate, and with two or three sellers the
/// last one is still a runner-up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitTierBonus {
    pub top_rate: Decimal,
    pub runner_up_rate: Decimal,
    pub standard_rate: Decimal,
}

impl Default for ProfitTierBonus {
    fn default() -> Self {
        Self {
            top_rate: Decimal::new(15, 2),
            runner_up_rate: Decimal::new(10, 2),
            standard_rate: Decimal::new(5, 2),
        }
    }
}

impl ProfitTierBonus {
    /// Bonus rate for a rank
    pub fn rate_for(&self, index: usize, total: usize) -> Decimal {
        match index {
            0 => self.top_rate,
            1 | 2 => self.runner_up_rate,
            i if i + 1 == total => Decimal::ZERO,
            _ => self.standard_rate,
        }
    }
}

impl BonusCalculator for ProfitTierBonus {
    fn bonus(&self, index: usize, total: usize, seller: &SellerStat) -> Option<Decimal> {
        seller.profit.checked_mul(self.rate_for(index, total))
    }
}

/// Sort sellers by profit descending; ties keep their current order.
pub fn rank_by_profit(stats: &mut [SellerStat]) {
    stats.sort_by(|a, b| b.profit.cmp(&a.profit));
}

/// Assign a bonus to every seller from its position in `ranked`.
pub fn assign_bonuses(
    ranked: &mut [SellerStat],
    calculator: &dyn BonusCalculator,
) -> Result<(), AnalysisError> {
    let total = ranked.len();
    for (index, seller) in ranked.iter_mut().enumerate() {
        seller.bonus = calculator
            .bonus(index, total, seller)
            .ok_or_else(|| AnalysisError::bonus_overflow(index))?;
        debug!(
            rank = index,
            seller_id = %seller.seller_id,
            profit = %seller.profit,
            bonus = %seller.bonus,
            "Bonus assigned"
        );
    }
    Ok(())
}
