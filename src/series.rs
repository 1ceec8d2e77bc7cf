//! ReturnSeries 收益率序列模块
//!
//! 本模块定义了收益率序列类型，它是整条计算链的输入契约：
//! 非空、按日期升序排序的 `(日期, 收益率)` 记录序列，
//! 收益率以小数形式表示（例如 0.01 = 1%）。

use crate::{Dated, error::Error};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 按日期升序排序的月度收益率序列。
///
/// 构造时校验序列非空并按日期排序。日期假定唯一（不强制校验）。
/// 序列一旦构造即不可变，核心计算在其上是纯函数。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReturnSeries {
    records: Vec<Dated<Decimal>>,
}

impl ReturnSeries {
    /// 从（可能无序的）记录集合构造 [`ReturnSeries`]。
    ///
    /// 记录会按日期升序排序。
    ///
    /// # 错误
    ///
    /// 如果 `records` 为空，返回 [`Error::EmptyInput`]。
    pub fn new(mut records: Vec<Dated<Decimal>>) -> Result<Self, Error> {
        if records.is_empty() {
            return Err(Error::EmptyInput);
        }

        records.sort_by_key(|record| record.date);

        Ok(Self { records })
    }

    /// 序列中的记录（按日期升序）。
    pub fn records(&self) -> &[Dated<Decimal>] {
        &self.records
    }

    /// 序列中的记录数量（即月份数）。
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// 序列是否为空（构造契约保证永远为 `false`）。
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 序列中第一条记录的日期。
    pub fn first_date(&self) -> NaiveDate {
        self.records
            .first()
            .expect("ReturnSeries is never empty")
            .date
    }

    /// 序列中最后一条记录的日期。
    pub fn last_date(&self) -> NaiveDate {
        self.records
            .last()
            .expect("ReturnSeries is never empty")
            .date
    }
}
