//! Input 输入表提供者模块
//!
//! 本模块负责将带日期列和收益率列的分隔文本文件解析为
//! [`ReturnSeries`](crate::series::ReturnSeries)。
//! 列按表头名称解析，日期解析支持日在前（day-first）的歧义消解。
//!
//! 核心计算只消费解析后的有序序列，不直接接触文件系统。

use crate::{Dated, error::Error, series::ReturnSeries};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::{fs::File, path::PathBuf};
use tracing::debug;

/// 日在前的日期格式（例如 "31/01/1995"）。
const DAY_FIRST_FORMATS: &[&str] = &["%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y"];

/// 月在前的日期格式（例如 "01/31/1995"）。
const MONTH_FIRST_FORMATS: &[&str] = &["%m/%d/%Y", "%m-%d-%Y"];

/// 无歧义的 ISO 日期格式。
const ISO_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// 输入表提供者的配置。
///
/// ## 字段说明
///
/// - **path**: 分隔文本文件路径
/// - **date_column**: 日期列的表头名称
/// - **return_column**: 收益率列的表头名称
/// - **day_first**: 歧义日期（如 "03/04/1995"）是否按日在前解析
#[derive(Debug, Clone, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ReadConfig {
    /// 分隔文本文件路径。
    pub path: PathBuf,
    /// 日期列的表头名称。
    pub date_column: String,
    /// 收益率列的表头名称。
    pub return_column: String,
    /// 歧义日期是否按日在前解析。
    pub day_first: bool,
}

/// 解析 `config` 指定的分隔文本文件，构造 [`ReturnSeries`]。
///
/// # 错误
///
/// - [`Error::MissingColumn`]: 表头中找不到指定的日期列或收益率列
/// - [`Error::InvalidDate`]: 日期值无法解析
/// - [`Error::InvalidReturn`]: 收益率值无法解析为十进制数
/// - [`Error::EmptyInput`]: 文件不包含任何数据行
/// - [`Error::Csv`] / [`Error::Io`]: 底层读取错误
pub fn read_return_series(config: &ReadConfig) -> Result<ReturnSeries, Error> {
    let file = File::open(&config.path)?;

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers = reader.headers()?.clone();

    let date_index = headers
        .iter()
        .position(|header| header == config.date_column)
        .ok_or_else(|| Error::MissingColumn(config.date_column.clone()))?;

    let return_index = headers
        .iter()
        .position(|header| header == config.return_column)
        .ok_or_else(|| Error::MissingColumn(config.return_column.clone()))?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;

        let date_raw = row
            .get(date_index)
            .ok_or_else(|| Error::MissingColumn(config.date_column.clone()))?;
        let date = parse_date(date_raw, config.day_first)?;

        let return_raw = row
            .get(return_index)
            .ok_or_else(|| Error::MissingColumn(config.return_column.clone()))?;
        let value = return_raw
            .parse::<Decimal>()
            .map_err(|_| Error::InvalidReturn(return_raw.to_owned()))?;

        records.push(Dated::new(value, date));
    }

    debug!(
        rows = records.len(),
        path = %config.path.display(),
        "parsed return table"
    );

    ReturnSeries::new(records)
}

/// 解析日期值。
///
/// ISO 格式始终接受；歧义格式按 `day_first` 消解。
fn parse_date(raw: &str, day_first: bool) -> Result<NaiveDate, Error> {
    let ambiguous = match day_first {
        true => DAY_FIRST_FORMATS,
        false => MONTH_FIRST_FORMATS,
    };

    ISO_FORMATS
        .iter()
        .chain(ambiguous)
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
        .ok_or_else(|| Error::InvalidDate(raw.to_owned()))
}
