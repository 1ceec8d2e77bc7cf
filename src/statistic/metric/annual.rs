//! Annualised Returns 年化指标模块
//!
//! 本模块提供了将月度统计缩放到年度等价值的计算逻辑。
//!
//! # 计算公式
//!
//! - 算术年化均值：`12 * mean_monthly`（简单利息，线性缩放）
//! - 几何年化均值：`(1 + mean_monthly)^12 - 1`（复利缩放）
//! - 年化标准差：`std_monthly * sqrt(12)`（平方根缩放）
//!
//! # 缩放假设
//!
//! 标准差的平方根缩放假设月度收益率是独立同分布（IID）的。
//! 这是一个简化假设，而不是经过验证的模型。

use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};

/// 每年的月份数。
const MONTHS_PER_YEAR: i64 = 12;

/// 表示从月度统计年化得到的年度统计集合。
///
/// ## 字段说明
///
/// - **mean_arithmetic**: 算术年化均值（`12 * mean_monthly`）
/// - **mean_geometric**: 几何年化均值（`(1 + mean_monthly)^12 - 1`）
/// - **std_dev**: 年化标准差（`std_monthly * sqrt(12)`）
#[derive(Debug, Clone, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
pub struct AnnualisedReturns {
    /// 算术年化均值。
    pub mean_arithmetic: Decimal,
    /// 几何年化均值。
    pub mean_geometric: Decimal,
    /// 年化标准差。
    pub std_dev: Decimal,
}

impl AnnualisedReturns {
    /// 根据月度均值和月度标准差计算 [`AnnualisedReturns`]。
    ///
    /// ## 特殊情况
    ///
    /// 如果乘法或乘方运算溢出，对应字段为 `Decimal::MAX`。
    ///
    /// # 参数
    ///
    /// - `mean_monthly`: 月度收益率的算术均值（小数形式）
    /// - `std_dev_monthly`: 月度收益率的样本标准差（小数形式）
    pub fn calculate(mean_monthly: Decimal, std_dev_monthly: Decimal) -> Self {
        let months = Decimal::from(MONTHS_PER_YEAR);

        let mean_arithmetic = mean_monthly.checked_mul(months).unwrap_or(Decimal::MAX);

        let mean_geometric = (Decimal::ONE + mean_monthly)
            .checked_powi(MONTHS_PER_YEAR)
            .map(|growth| growth - Decimal::ONE)
            .unwrap_or(Decimal::MAX);

        let std_dev = std_dev_monthly
            .checked_mul(months.sqrt().expect("12 is positive"))
            .unwrap_or(Decimal::MAX);

        Self {
            mean_arithmetic,
            mean_geometric,
            std_dev,
        }
    }
}
