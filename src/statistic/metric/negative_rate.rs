//! Negative Period Rate 负收益周期百分比模块
//!
//! 本模块提供了负收益周期百分比的计算逻辑。
//! 负收益周期是指复合（或原始，对月度而言）收益率严格小于零的周期。
//!
//! # 计算公式
//!
//! `Negative Period Rate = (负收益周期数 / 总周期数) * 100`
//!
//! # 解释
//!
//! - **Rate = 100.0**: 所有周期均为负收益
//! - **Rate = 50.0**: 一半周期为负收益
//! - **Rate = 0.0**: 没有负收益周期

use crate::Dated;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 表示 0 到 100 之间的负收益周期百分比，计算公式为 `negatives / total * 100`。
///
/// 负收益周期数永远不超过总周期数，因此值落在 `[0, 100]` 区间。
///
/// 如果没有周期（total = 0）或除法运算溢出，返回 `None`。
///
/// ## 严格小于零
///
/// 收益率恰好为零的周期不计为负收益周期。
#[derive(Debug, Clone, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
pub struct NegativePeriodRate {
    /// 负收益周期百分比（0 到 100 之间）。
    pub value: Decimal,
}

impl NegativePeriodRate {
    /// 根据提供的负收益周期数和总周期数计算 [`NegativePeriodRate`]。
    ///
    /// ## 特殊情况
    ///
    /// 如果总周期数为零，返回 `None`。
    ///
    /// # 参数
    ///
    /// - `negatives`: 负收益周期数量（绝对值会被使用）
    /// - `total`: 总周期数量（绝对值会被使用）
    pub fn calculate(negatives: Decimal, total: Decimal) -> Option<Self> {
        if total == Decimal::ZERO {
            None
        } else {
            let value = negatives
                .abs()
                .checked_div(total.abs())?
                .checked_mul(Decimal::ONE_HUNDRED)?;
            Some(Self { value })
        }
    }

    /// 对一组带日期的周期收益率计算 [`NegativePeriodRate`]。
    ///
    /// 计数收益率严格小于零的周期。
    ///
    /// # 返回值
    ///
    /// 返回计算得到的百分比；如果 `periods` 为空则返回 `None`。
    pub fn of_periods(periods: &[Dated<Decimal>]) -> Option<Self> {
        let negatives = periods
            .iter()
            .filter(|period| period.value < Decimal::ZERO)
            .count();

        Self::calculate(Decimal::from(negatives), Decimal::from(periods.len()))
    }
}
