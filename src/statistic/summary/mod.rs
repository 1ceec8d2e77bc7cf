//! Summary 统计摘要模块
//!
//! 本模块提供了收益率序列的统计摘要。
//!
//! # 核心概念
//!
//! - **ReturnSummary**: 固定形状的统计摘要（四个负收益周期百分比 +
//!   五个均值/标准差统计）
//! - **ReturnReport**: 统计摘要加上季度和 5 年周期复合收益率的诊断序列
//! - **DataSummary**: 观测值数据集的增量统计生成器

use crate::{
    Dated,
    series::ReturnSeries,
    statistic::{
        metric::{annual::AnnualisedReturns, negative_rate::NegativePeriodRate},
        resample::compound_returns,
        summary::dataset::DataSummary,
        time::{FiveYearly, Quarterly, Yearly},
    },
};
use derive_more::Constructor;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 数据集统计模块。
pub mod dataset;

/// 显示格式化模块。
pub mod display;

/// 收益率序列的固定形状统计摘要。
///
/// 摘要一旦计算完成即不可变：一次写入，供报告读取。
///
/// ## 不变量
///
/// 每个百分比字段落在 `[0, 100]` 区间；
/// 均值/标准差字段为小数形式（0.01 = 1%）。
///
/// ## 字段说明
///
/// - **pct_negative_months**: 负收益月份百分比
/// - **pct_negative_quarters**: 负收益季度百分比
/// - **pct_negative_years**: 负收益年度百分比
/// - **pct_negative_five_years**: 负收益 5 年周期百分比
/// - **mean_monthly**: 月度收益率算术均值
/// - **std_dev_monthly**: 月度收益率样本标准差
/// - **mean_annual_arithmetic**: 算术年化均值（`12 * mean_monthly`）
/// - **mean_annual_geometric**: 几何年化均值（`(1 + mean_monthly)^12 - 1`）
/// - **std_dev_annual**: 年化标准差（`std_monthly * sqrt(12)`）
#[derive(Debug, Clone, PartialEq, PartialOrd, Default, Deserialize, Serialize, Constructor)]
pub struct ReturnSummary {
    /// 负收益月份百分比。
    pub pct_negative_months: Decimal,
    /// 负收益季度百分比。
    pub pct_negative_quarters: Decimal,
    /// 负收益年度百分比。
    pub pct_negative_years: Decimal,
    /// 负收益 5 年周期百分比。
    pub pct_negative_five_years: Decimal,
    /// 月度收益率算术均值。
    pub mean_monthly: Decimal,
    /// 月度收益率样本标准差。
    pub std_dev_monthly: Decimal,
    /// 算术年化均值。
    pub mean_annual_arithmetic: Decimal,
    /// 几何年化均值。
    pub mean_annual_geometric: Decimal,
    /// 年化标准差。
    pub std_dev_annual: Decimal,
}

/// 统计摘要加上重采样诊断序列。
///
/// ## 字段说明
///
/// - **summary**: 固定形状的 [`ReturnSummary`]
/// - **quarterly**: 非空季度复合收益率序列（按周期结束日排序）
/// - **five_yearly**: 非空 5 年周期复合收益率序列（按周期结束日排序）
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Constructor)]
pub struct ReturnReport {
    /// 固定形状的统计摘要。
    pub summary: ReturnSummary,
    /// 非空季度复合收益率序列。
    pub quarterly: Vec<Dated<Decimal>>,
    /// 非空 5 年周期复合收益率序列。
    pub five_yearly: Vec<Dated<Decimal>>,
}

impl ReturnReport {
    /// 对收益率序列计算完整的 [`ReturnReport`]。
    ///
    /// 这是整条计算链的纯函数入口：给定相同序列，结果完全相同。
    /// [`ReturnSeries`] 的构造契约保证序列非空，因此每个粒度的
    /// 周期划分至少产生一个周期，所有百分比均有定义。
    ///
    /// ## 计算步骤
    ///
    /// 1. 负收益月份百分比：直接对原始记录计数（月度为原生粒度，无需复合）
    /// 2. 季度 / 年度 / 5 年周期：按日历边界复合后计数负收益周期
    /// 3. 月度均值与样本标准差：Welford 单次遍历
    /// 4. 年化：算术、几何与平方根缩放
    pub fn calculate(series: &ReturnSeries) -> Self {
        let pct_negative_months = NegativePeriodRate::of_periods(series.records())
            .expect("ReturnSeries is never empty");

        let quarterly = compound_returns(series, Quarterly);
        let yearly = compound_returns(series, Yearly);
        let five_yearly = compound_returns(series, FiveYearly);

        let pct_negative_quarters = NegativePeriodRate::of_periods(&quarterly)
            .expect("non-empty series produces at least one quarter");
        let pct_negative_years = NegativePeriodRate::of_periods(&yearly)
            .expect("non-empty series produces at least one year");
        let pct_negative_five_years = NegativePeriodRate::of_periods(&five_yearly)
            .expect("non-empty series produces at least one five-year block");

        let mut dataset = DataSummary::default();
        for record in series.records() {
            dataset.update(record.value);
        }

        let annualised = AnnualisedReturns::calculate(dataset.mean, dataset.sample_std_dev());

        Self {
            summary: ReturnSummary {
                pct_negative_months: pct_negative_months.value,
                pct_negative_quarters: pct_negative_quarters.value,
                pct_negative_years: pct_negative_years.value,
                pct_negative_five_years: pct_negative_five_years.value,
                mean_monthly: dataset.mean,
                std_dev_monthly: dataset.sample_std_dev(),
                mean_annual_arithmetic: annualised.mean_arithmetic,
                mean_annual_geometric: annualised.mean_geometric,
                std_dev_annual: annualised.std_dev,
            },
            quarterly,
            five_yearly,
        }
    }
}
