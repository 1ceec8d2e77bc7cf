//! Display 显示格式化模块
//!
//! 本模块提供了 [`ReturnSummary`] 的固定十行报告格式化。
//! 行文本、标签与对齐空格与报告契约保持一致：
//! 四个百分比行、一个空行分隔符、五个统计行，
//! 所有数值以百分比形式保留两位小数。

use crate::statistic::summary::ReturnSummary;
use rust_decimal::Decimal;

impl ReturnSummary {
    /// 将摘要格式化为固定的十行报告。
    ///
    /// 前四行是负收益周期百分比（已为百分比形式），
    /// 第五行是空行分隔符，后五行是均值/标准差统计
    /// （小数形式，显示时缩放 100 倍）。
    pub fn formatted_lines(&self) -> Vec<String> {
        vec![
            format!(
                "Percentage of months with negative returns:        {:.2}%",
                two_dp(self.pct_negative_months)
            ),
            format!(
                "Percentage of quarters with negative returns:      {:.2}%",
                two_dp(self.pct_negative_quarters)
            ),
            format!(
                "Percentage of years with negative returns:         {:.2}%",
                two_dp(self.pct_negative_years)
            ),
            format!(
                "Percentage of 5-year periods with negative returns:{:.2}%",
                two_dp(self.pct_negative_five_years)
            ),
            String::new(),
            format!(
                "Mean monthly return:         {:.2}%",
                as_percent(self.mean_monthly)
            ),
            format!(
                "Std dev monthly returns:     {:.2}%",
                as_percent(self.std_dev_monthly)
            ),
            format!(
                "Annualized mean (arith):     {:.2}%",
                as_percent(self.mean_annual_arithmetic)
            ),
            format!(
                "Annualized mean (geom):      {:.2}%",
                as_percent(self.mean_annual_geometric)
            ),
            format!(
                "Annualized std dev:          {:.2}%",
                as_percent(self.std_dev_annual)
            ),
        ]
    }
}

/// 将小数形式的统计值缩放为百分比形式并保留两位小数。
fn as_percent(value: Decimal) -> Decimal {
    two_dp(value * Decimal::ONE_HUNDRED)
}

/// 保留两位小数（银行家舍入，与常规统计软件的格式化一致）。
fn two_dp(value: Decimal) -> Decimal {
    value.round_dp(2)
}
