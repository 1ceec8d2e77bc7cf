//! Output 输出接收器模块
//!
//! 本模块负责将格式化后的报告行写出。
//! 写出目标通过 [`std::io::Write`] 抽象：文件、标准输出或内存缓冲。
//! 每行以换行符结尾，空行原样保留。

use crate::error::Error;
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};
use tracing::info;

/// 将报告行依次写入 `writer`，每行以换行符结尾。
pub fn write_report<W>(writer: &mut W, lines: &[String]) -> Result<(), Error>
where
    W: Write,
{
    for line in lines {
        writeln!(writer, "{line}")?;
    }
    writer.flush()?;

    Ok(())
}

/// 将报告行写入 `path` 指定的文本文件（已存在则覆盖）。
pub fn write_report_to_path<P>(path: P, lines: &[String]) -> Result<(), Error>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let mut writer = BufWriter::new(File::create(path)?);
    write_report(&mut writer, lines)?;

    info!(path = %path.display(), lines = lines.len(), "report written");

    Ok(())
}

/// 将报告行打印到标准输出。
pub fn print_report(lines: &[String]) -> Result<(), Error> {
    write_report(&mut io::stdout().lock(), lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_report_terminates_every_line() {
        let lines = vec![
            "first".to_string(),
            String::new(),
            "third".to_string(),
        ];

        let mut buffer = Vec::new();
        write_report(&mut buffer, &lines).unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), "first\n\nthird\n");
    }

    #[test]
    fn test_write_report_to_path_overwrites() {
        let path = std::env::temp_dir().join(format!(
            "return_stats_output_{}.txt",
            std::process::id()
        ));

        write_report_to_path(&path, &["stale".to_string()]).unwrap();
        write_report_to_path(&path, &["fresh".to_string()]).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "fresh\n");

        std::fs::remove_file(path).unwrap();
    }
}
