//! Metric 金融指标模块
//!
//! 本模块提供了收益率序列统计所需的金融指标计算逻辑。
//!
//! # 核心指标
//!
//! - **Negative Period Rate**: 负收益周期百分比
//! - **Annualised Returns**: 月度统计的年化（算术、几何、标准差）

/// 年化指标计算逻辑。
pub mod annual;

/// Negative Period Rate 负收益周期百分比计算逻辑。
pub mod negative_rate;
