#![forbid(unsafe_code)]
#![warn(
    unused,
    clippy::cognitive_complexity,
    unused_crate_dependencies,
    unused_extern_crates,
    clippy::unused_self,
    clippy::useless_let_if_seq,
    missing_debug_implementations,
    rust_2018_idioms,
    rust_2024_compatibility
)]
#![allow(clippy::type_complexity)]

//! # Return Stats
//! Return Stats 是一个用于计算周期性金融收益率序列描述性统计的 Rust 库。
//! * **负收益周期统计**：按月、季度、年、5 年周期统计负收益周期占比。
//! * **复合收益重采样**：按日历边界将月度收益率复合为更长周期的收益率。
//! * **年化统计**：月度均值/标准差的算术年化与几何年化。
//!
//! ## 概述
//! 库的核心是一条纯函数计算链：输入一个按日期排序的 `(日期, 收益率)` 序列，
//! 输出一个固定形状的 [`ReturnSummary`](statistic::summary::ReturnSummary)
//! 统计摘要，以及季度和 5 年周期复合收益率的诊断序列。
//!
//! 文件读取（输入表提供者）和报告写出（输出文本接收器）是独立的边界组件，
//! 核心计算不依赖文件系统，可以单独进行单元测试。
//!
//! 从高层次来看，它提供了几个主要组件：
//! * 经过校验、按日期升序排序的收益率序列 [`ReturnSeries`](series::ReturnSeries)。
//! * 日历周期划分接口 [`SamplePeriod`](statistic::time::SamplePeriod)
//!   及其月/季度/年/5 年实现。
//! * 负收益周期百分比指标
//!   [`NegativePeriodRate`](statistic::metric::negative_rate::NegativePeriodRate)。
//! * 年化指标 [`AnnualisedReturns`](statistic::metric::annual::AnnualisedReturns)。
//! * 汇总整条计算链的 [`ReturnReport`](statistic::summary::ReturnReport)。

use chrono::NaiveDate;
use derive_more::Constructor;
use serde::{Deserialize, Serialize};

/// 定义本库中所有可能的错误。
pub mod error;

/// 输入表提供者：解析带日期列和收益率列的分隔文本文件。
pub mod input;

/// 提供默认的 Tracing 日志初始化器。
pub mod logging;

/// 输出文本接收器：将固定的十行报告写入控制台或文件。
pub mod output;

/// 经过校验、按日期升序排序的收益率序列。
pub mod series;

/// 用于分析收益率序列的统计算法、金融指标和统计摘要。
///
/// 例如：`ReturnSummary`、`NegativePeriodRate`、`AnnualisedReturns` 等。
pub mod statistic;

/// 带日期的值。
///
/// 用于将任意值与日历日期关联。收益率序列中的一条记录是 `Dated<Decimal>`，
/// 重采样后的周期收益率同样是 `Dated<Decimal>`（日期为周期结束日）。
///
/// # 类型参数
///
/// - `T`: 值的类型
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Deserialize,
    Serialize,
    Constructor,
)]
pub struct Dated<T> {
    /// 存储的值。
    pub value: T,
    /// 日历日期。
    pub date: NaiveDate,
}
