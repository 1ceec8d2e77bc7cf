//! Algorithm 统计算法模块
//!
//! 本模块提供了用于分析收益率数据集的统计算法。
//! 主要包括 Welford Online 算法，用于单次遍历计算运行中的均值和样本方差。
//!
//! # 核心概念
//!
//! - **Welford Online 算法**: 单次遍历计算均值和方差的在线算法
//! - **样本方差**: 使用 Bessel 校正（`n - 1` 分母）的无偏方差，
//!   与常规统计软件的默认约定一致

/// [Welford Online](https://en.wikipedia.org/wiki/Algorithms_for_calculating_variance#Welford's_online_algorithm)
/// 算法集合，用于单次遍历计算运行中的值，如均值、样本方差和样本标准差。
///
/// 本库的数值类型统一为 [`Decimal`](rust_decimal::Decimal)，
/// 因此这里的递推关系直接以 `Decimal` 表达。
pub mod welford_online {
    use rust_decimal::{Decimal, MathematicalOps};

    /// 计算下一个均值。
    ///
    /// ## 公式
    ///
    /// `new_mean = prev_mean + (next_value - prev_mean) / count`
    ///
    /// # 参数
    ///
    /// - `prev_mean`: 之前的均值
    /// - `next_value`: 下一个值
    /// - `count`: 当前计数（包括新值）
    pub fn calculate_mean(prev_mean: Decimal, next_value: Decimal, count: Decimal) -> Decimal {
        prev_mean + (next_value - prev_mean) / count
    }

    /// 计算下一个 Welford Online 递推关系 M。
    ///
    /// M 是用于计算方差的中间量。
    ///
    /// ## 公式
    ///
    /// `M = prev_m + (new_value - prev_mean) * (new_value - new_mean)`
    pub fn calculate_recurrence_relation_m(
        prev_m: Decimal,
        prev_mean: Decimal,
        new_value: Decimal,
        new_mean: Decimal,
    ) -> Decimal {
        prev_m + ((new_value - prev_mean) * (new_value - new_mean))
    }

    /// 使用 Bessel 校正（count - 1）和递推关系 M 计算无偏"样本"方差。
    ///
    /// ## 公式
    ///
    /// `variance = M / (count - 1)` （当 count >= 2 时）
    ///
    /// # 返回值
    ///
    /// 返回样本方差。如果 count < 2，返回 0。
    pub fn calculate_sample_variance(recurrence_relation_m: Decimal, count: Decimal) -> Decimal {
        match count < Decimal::TWO {
            true => Decimal::ZERO,
            false => recurrence_relation_m / (count - Decimal::ONE),
        }
    }

    /// 样本方差的平方根，即样本标准差。
    ///
    /// # 返回值
    ///
    /// 返回样本标准差。如果 count < 2，返回 0。
    pub fn calculate_sample_std_dev(recurrence_relation_m: Decimal, count: Decimal) -> Decimal {
        calculate_sample_variance(recurrence_relation_m, count)
            .sqrt()
            .unwrap_or(Decimal::ZERO)
    }
}
