//! Resample 重采样模块
//!
//! 本模块提供了按日历周期复合收益率的重采样逻辑。
//! 将按日期排序的月度收益率序列划分为不重叠的日历周期，
//! 并对每个非空周期计算复合收益率。
//!
//! # 计算公式
//!
//! `复合收益率 = Π(1 + r) - 1`，对周期内的所有记录连乘。
//!
//! # 不变量
//!
//! 只有实际包含记录的周期才会被输出：分组直接作用于已有记录，
//! 不会插入合成的零收益周期（零填充会污染负收益周期占比）。
//! 单条记录的周期退化为该记录的原始收益率。

use crate::{Dated, series::ReturnSeries, statistic::time::SamplePeriod};
use itertools::Itertools;
use rust_decimal::Decimal;

/// 按 `period` 的日历边界划分序列，并对每个非空周期计算复合收益率。
///
/// 输出按周期先后排序，每个周期收益率标记其周期结束日。
/// 序列非空时输出至少包含一个周期。
///
/// # 参数
///
/// - `series`: 按日期升序排序的收益率序列
/// - `period`: 日历周期粒度
///
/// # 返回值
///
/// 返回非空周期的复合收益率序列，每项带周期结束日。
pub fn compound_returns<Period>(series: &ReturnSeries, period: Period) -> Vec<Dated<Decimal>>
where
    Period: SamplePeriod,
{
    let periods = series
        .records()
        .iter()
        .chunk_by(|record| period.key(record.date));

    periods
        .into_iter()
        .map(|(_key, records)| {
            let mut period_end = None;

            let growth = records.fold(Decimal::ONE, |product, record| {
                period_end = Some(period.end(record.date));
                product * (Decimal::ONE + record.value)
            });

            Dated::new(
                growth - Decimal::ONE,
                period_end.expect("chunk_by yields non-empty groups"),
            )
        })
        .collect()
}
