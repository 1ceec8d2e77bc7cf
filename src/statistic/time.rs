//! SamplePeriod 日历周期模块
//!
//! 本模块定义了用于周期划分的日历周期类型。
//! 收益率序列按这些周期划分后复合，用于计算负收益周期占比。
//!
//! # 核心概念
//!
//! - **SamplePeriod**: Trait，定义日历周期接口（周期键与周期结束日）
//! - **Monthly**: 月度周期（原生粒度，一条记录即一个周期）
//! - **Quarterly**: 日历季度周期
//! - **Yearly**: 日历年度周期
//! - **FiveYearly**: 5 日历年周期（锚定于 5 的倍数年份）
//!
//! # 周期边界
//!
//! 周期划分完全基于日历边界，不依赖任何库的默认周期锚定：
//! 同一周期内的所有日期映射到同一个周期键，周期结束日是该周期的
//! 最后一个日历日。

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt::Debug;

/// 表示用于周期划分的日历周期类型的 Trait。
///
/// 实现此 Trait 的类型可以将任意日期映射到其所属周期的键和周期结束日，
/// 从而支持对已排序序列的显式分组。
///
/// ## 不变量
///
/// 对任意两个日期 `a`、`b`：`key(a) == key(b)` 当且仅当
/// `a` 与 `b` 落在同一个日历周期内，且此时 `end(a) == end(b)`。
pub trait SamplePeriod: Debug + Copy {
    /// 返回日历周期的人类可读名称。
    fn name(&self) -> SmolStr;

    /// 返回 `date` 所属周期的键。
    ///
    /// 键在时间上单调递增：较晚周期的键严格大于较早周期的键。
    fn key(&self, date: NaiveDate) -> i32;

    /// 返回 `date` 所属周期的最后一个日历日。
    fn end(&self, date: NaiveDate) -> NaiveDate;
}

/// 月度周期。
///
/// 原生粒度：输入序列的一条记录即一个月，无需复合。
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
pub struct Monthly;

impl SamplePeriod for Monthly {
    /// 返回 "Monthly"。
    fn name(&self) -> SmolStr {
        SmolStr::new("Monthly")
    }

    fn key(&self, date: NaiveDate) -> i32 {
        date.year() * 12 + date.month0() as i32
    }

    fn end(&self, date: NaiveDate) -> NaiveDate {
        month_end(date.year(), date.month())
    }
}

/// 日历季度周期。
///
/// 周期结束日为 3 月 31 日、6 月 30 日、9 月 30 日或 12 月 31 日。
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
pub struct Quarterly;

impl SamplePeriod for Quarterly {
    /// 返回 "Quarterly"。
    fn name(&self) -> SmolStr {
        SmolStr::new("Quarterly")
    }

    fn key(&self, date: NaiveDate) -> i32 {
        date.year() * 4 + date.month0() as i32 / 3
    }

    fn end(&self, date: NaiveDate) -> NaiveDate {
        let quarter_last_month = (date.month0() / 3) * 3 + 3;
        month_end(date.year(), quarter_last_month)
    }
}

/// 日历年度周期。
///
/// 周期结束日为 12 月 31 日。
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
pub struct Yearly;

impl SamplePeriod for Yearly {
    /// 返回 "Yearly"。
    fn name(&self) -> SmolStr {
        SmolStr::new("Yearly")
    }

    fn key(&self, date: NaiveDate) -> i32 {
        date.year()
    }

    fn end(&self, date: NaiveDate) -> NaiveDate {
        month_end(date.year(), 12)
    }
}

/// 5 日历年周期。
///
/// 周期锚定于日历年份，而不是数据的第一条观测：年份 `y` 属于区块
/// `[5k, 5k + 4]`，其中 `k = y.div_euclid(5)`。例如 1997 年属于
/// 1995-1999 区块，2000 年属于 2000-2004 区块。
/// 周期结束日为区块最后一年的 12 月 31 日。
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
pub struct FiveYearly;

impl SamplePeriod for FiveYearly {
    /// 返回 "FiveYearly"。
    fn name(&self) -> SmolStr {
        SmolStr::new("FiveYearly")
    }

    fn key(&self, date: NaiveDate) -> i32 {
        date.year().div_euclid(5)
    }

    fn end(&self, date: NaiveDate) -> NaiveDate {
        month_end(date.year().div_euclid(5) * 5 + 4, 12)
    }
}

/// `year` 年 `month` 月的最后一个日历日。
fn month_end(year: i32, month: u32) -> NaiveDate {
    let (next_year, next_month) = match month {
        12 => (year + 1, 1),
        _ => (year, month + 1),
    };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .expect("month is within 1..=12")
        .pred_opt()
        .expect("date is not NaiveDate::MIN")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_sample_period_names() {
        assert_eq!(Monthly.name().as_str(), "Monthly");
        assert_eq!(Quarterly.name().as_str(), "Quarterly");
        assert_eq!(Yearly.name().as_str(), "Yearly");
        assert_eq!(FiveYearly.name().as_str(), "FiveYearly");
    }

    #[test]
    fn test_monthly_keys_and_ends() {
        // consecutive months have distinct, increasing keys
        assert!(Monthly.key(date(2019, 12, 31)) < Monthly.key(date(2020, 1, 31)));
        assert_eq!(
            Monthly.key(date(2020, 2, 1)),
            Monthly.key(date(2020, 2, 29))
        );

        // leap year February
        assert_eq!(Monthly.end(date(2020, 2, 15)), date(2020, 2, 29));
        assert_eq!(Monthly.end(date(2021, 2, 15)), date(2021, 2, 28));
        assert_eq!(Monthly.end(date(2020, 12, 1)), date(2020, 12, 31));
    }

    #[test]
    fn test_quarterly_keys_and_ends() {
        // Jan/Feb/Mar share a calendar quarter
        assert_eq!(
            Quarterly.key(date(2020, 1, 31)),
            Quarterly.key(date(2020, 3, 31))
        );
        assert_ne!(
            Quarterly.key(date(2020, 3, 31)),
            Quarterly.key(date(2020, 4, 30))
        );
        assert!(Quarterly.key(date(2019, 12, 31)) < Quarterly.key(date(2020, 1, 1)));

        assert_eq!(Quarterly.end(date(2020, 2, 14)), date(2020, 3, 31));
        assert_eq!(Quarterly.end(date(2020, 5, 10)), date(2020, 6, 30));
        assert_eq!(Quarterly.end(date(2020, 8, 1)), date(2020, 9, 30));
        assert_eq!(Quarterly.end(date(2020, 11, 30)), date(2020, 12, 31));
    }

    #[test]
    fn test_yearly_keys_and_ends() {
        assert_eq!(Yearly.key(date(2020, 1, 1)), Yearly.key(date(2020, 12, 31)));
        assert_ne!(Yearly.key(date(2020, 12, 31)), Yearly.key(date(2021, 1, 1)));
        assert_eq!(Yearly.end(date(2020, 6, 15)), date(2020, 12, 31));
    }

    #[test]
    fn five_yearly_blocks_are_calendar_anchored() {
        // a series starting in 1997 falls inside the calendar block 1995-1999,
        // NOT a block anchored to the first observation (1997-2001)
        assert_eq!(
            FiveYearly.key(date(1997, 3, 31)),
            FiveYearly.key(date(1999, 12, 31))
        );
        assert_ne!(
            FiveYearly.key(date(1999, 12, 31)),
            FiveYearly.key(date(2000, 1, 31))
        );
        assert_eq!(FiveYearly.end(date(1997, 3, 31)), date(1999, 12, 31));
        assert_eq!(FiveYearly.end(date(2000, 1, 31)), date(2004, 12, 31));
        assert_eq!(FiveYearly.end(date(2004, 12, 31)), date(2004, 12, 31));
        assert_eq!(FiveYearly.end(date(2020, 6, 30)), date(2024, 12, 31));
    }
}
