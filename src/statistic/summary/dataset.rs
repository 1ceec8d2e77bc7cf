//! Dataset 数据集统计模块
//!
//! 本模块提供了观测值数据集的增量统计生成器。
//! 基于 [`welford_online`](crate::statistic::algorithm::welford_online)
//! 递推关系，单次遍历计算计数、均值和样本标准差。

use crate::statistic::algorithm::welford_online;
use derive_more::Constructor;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 观测值数据集的增量统计生成器。
///
/// 每次调用 [`update`](DataSummary::update) 送入一个观测值，
/// 内部以 Welford Online 递推关系维护计数、均值和递推量 M，
/// 可随时读取样本方差和样本标准差（Bessel 校正，`n - 1` 分母）。
///
/// ## 字段说明
///
/// - **count**: 观测值数量
/// - **mean**: 运行中的算术均值
/// - **recurrence_relation_m**: Welford Online 递推关系 M
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize, Serialize, Constructor,
)]
pub struct DataSummary {
    /// 观测值数量。
    pub count: Decimal,
    /// 运行中的算术均值。
    pub mean: Decimal,
    /// Welford Online 递推关系 M。
    pub recurrence_relation_m: Decimal,
}

impl DataSummary {
    /// 使用下一个观测值更新内部统计状态。
    pub fn update(&mut self, next_value: Decimal) {
        self.count += Decimal::ONE;

        let new_mean = welford_online::calculate_mean(self.mean, next_value, self.count);

        self.recurrence_relation_m = welford_online::calculate_recurrence_relation_m(
            self.recurrence_relation_m,
            self.mean,
            next_value,
            new_mean,
        );

        self.mean = new_mean;
    }

    /// 当前的无偏样本方差（count < 2 时为 0）。
    pub fn sample_variance(&self) -> Decimal {
        welford_online::calculate_sample_variance(self.recurrence_relation_m, self.count)
    }

    /// 当前的样本标准差（count < 2 时为 0）。
    pub fn sample_std_dev(&self) -> Decimal {
        welford_online::calculate_sample_std_dev(self.recurrence_relation_m, self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_data_summary_constant_observations() {
        let mut summary = DataSummary::default();

        for _ in 0..12 {
            summary.update(dec!(0.01));
        }

        assert_eq!(summary.count, dec!(12));
        assert_eq!(summary.mean, dec!(0.01));
        assert_eq!(summary.sample_variance(), dec!(0));
        assert_eq!(summary.sample_std_dev(), dec!(0));
    }

    #[test]
    fn test_data_summary_mixed_observations() {
        // dataset = [0.05, -0.03, 0.02]
        let mut summary = DataSummary::default();
        summary.update(dec!(0.05));
        summary.update(dec!(-0.03));
        summary.update(dec!(0.02));

        assert_eq!(summary.count, dec!(3));

        // mean = 0.04 / 3
        assert!(
            (summary.mean - dec!(0.0133333333)).abs() < dec!(0.000000001),
            "mean {}",
            summary.mean
        );

        // sample variance = ((0.05-m)^2 + (-0.03-m)^2 + (0.02-m)^2) / 2
        assert!(
            (summary.sample_variance() - dec!(0.0016333333)).abs() < dec!(0.000000001),
            "variance {}",
            summary.sample_variance()
        );
        assert!(
            (summary.sample_std_dev() - dec!(0.0404145188)).abs() < dec!(0.000000001),
            "std_dev {}",
            summary.sample_std_dev()
        );
    }

    #[test]
    fn test_data_summary_single_observation() {
        let mut summary = DataSummary::default();
        summary.update(dec!(-0.02));

        assert_eq!(summary.mean, dec!(-0.02));
        assert_eq!(summary.sample_variance(), dec!(0));
        assert_eq!(summary.sample_std_dev(), dec!(0));
    }
}
