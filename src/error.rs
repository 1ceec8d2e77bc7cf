//! 错误处理模块
//!
//! 本模块定义了单次批量计算可能遇到的所有错误类型。
//! 所有错误对单次运行都是致命的：计算要么产生完整的统计摘要，
//! 要么完全中止，不会产生部分结果，也没有重试逻辑。

use thiserror::Error;

/// 表示本库可能产生的所有错误。
///
/// ## 错误分类
///
/// - **EmptyInput**: 收益率序列没有任何记录，均值/标准差和百分比均无定义
/// - **MissingColumn**: 输入表中缺少指定的日期列或收益率列
/// - **InvalidDate**: 日期值无法解析
/// - **InvalidReturn**: 收益率值无法解析为十进制数
/// - **Csv** / **Io**: 读取或写出时的底层错误
#[derive(Debug, Error)]
pub enum Error {
    /// 收益率序列没有任何记录。
    #[error("return series contains no records")]
    EmptyInput,

    /// 输入表中缺少指定的列。
    #[error("required column missing from input table: {0}")]
    MissingColumn(String),

    /// 日期值无法解析。
    #[error("invalid date value: {0}")]
    InvalidDate(String),

    /// 收益率值无法解析为十进制数。
    #[error("invalid return value: {0}")]
    InvalidReturn(String),

    /// 底层 CSV 读取错误。
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// 底层 IO 错误。
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
