//! Statistic 统计模块
//!
//! 本模块提供了用于分析收益率序列的统计算法和指标。
//! 包括日历周期划分、复合收益重采样、负收益周期指标、年化指标和统计摘要。
//!
//! # 核心概念
//!
//! - **algorithm**: 用于单次遍历计算均值和方差的统计算法
//! - **metric**: 金融指标（负收益周期百分比、年化收益率）
//! - **resample**: 按日历周期复合收益率的重采样逻辑
//! - **summary**: 收益率序列的统计摘要
//! - **time**: 用于周期划分的日历周期定义

/// 用于单次遍历计算均值和方差的统计算法。
pub mod algorithm;

/// 金融指标及其计算方法。
pub mod metric;

/// 按日历周期复合收益率的重采样逻辑。
pub mod resample;

/// 收益率序列的统计摘要。
///
/// 例如，`ReturnSummary`、`ReturnReport`、`DataSummary` 等。
pub mod summary;

/// 用于周期划分的日历周期定义。
///
/// 例如，`Monthly`、`Quarterly`、`Yearly`、`FiveYearly` 等。
pub mod time;
