//! 结果格式化模块
//!
//! 负责单文件结果行、进度提示和批量扫描汇总的文本生成。
//! 渲染函数返回 String，打印由调用方决定，便于测试。

use super::classifier::Category;
use super::constants::display::{MAX_PATH_DISPLAY_CHARS, PROGRESS_INTERVAL};
use super::utils;
use std::path::Path;

/// 文件的显示名
///
/// 路径不超过60个字符时显示完整路径，否则只显示文件名。
/// 是整段丢弃目录部分，不做中间截断。
pub fn display_name(path: &Path) -> String {
    let full = path.display().to_string();
    if full.chars().count() <= MAX_PATH_DISPLAY_CHARS {
        full
    } else {
        utils::extract_filename_lossy(path)
    }
}

/// 生成单个文件的结果行
///
/// 探测成功显示分类标签和kHz采样率，失败显示Failed标记。
pub fn format_result_line(path: &Path, sample_rate: Option<u32>) -> String {
    let name = display_name(path);

    match sample_rate {
        None => format!("  ⚠️  Failed  {name}"),
        Some(rate) => {
            let category = Category::from_rate(rate);
            let khz = rate as f64 / 1000.0;
            format!(
                "  {} {} ({khz:.1} kHz)  {name}",
                category.icon(),
                category.label()
            )
        }
    }
}

/// 生成进度提示文本
///
/// 每处理10个文件以及最后一个文件时返回 `Some`，其余返回 `None`。
/// 调用方以 `\r` 结尾打印，覆盖同一终端行。
pub fn format_progress(processed: usize, total: usize) -> Option<String> {
    if processed == 0 || total == 0 {
        return None;
    }

    if processed % PROGRESS_INTERVAL == 0 || processed == total {
        Some(format!("   📌 进度: {processed}/{total}"))
    } else {
        None
    }
}

/// 一次文件夹扫描的汇总计数器
///
/// 只在单次扫描期间存活，打印汇总后即丢弃。
#[derive(Debug, Clone)]
pub struct ScanSummary {
    discovered: usize,
    valid: usize,
    hi_res: usize,
}

impl ScanSummary {
    /// 创建汇总计数器，`discovered` 为扫描发现的文件总数
    pub fn new(discovered: usize) -> Self {
        Self {
            discovered,
            valid: 0,
            hi_res: 0,
        }
    }

    /// 记录一个文件的探测结果
    ///
    /// 探测失败（`None`）只计入失败数，不参与分类统计。
    pub fn record(&mut self, sample_rate: Option<u32>) {
        if let Some(rate) = sample_rate {
            self.valid += 1;
            if Category::from_rate(rate).is_hi_res() {
                self.hi_res += 1;
            }
        }
    }

    /// 扫描发现的文件总数
    #[inline]
    pub fn discovered(&self) -> usize {
        self.discovered
    }

    /// 成功探测的文件数
    #[inline]
    pub fn valid(&self) -> usize {
        self.valid
    }

    /// HI-RES 文件数
    #[inline]
    pub fn hi_res(&self) -> usize {
        self.hi_res
    }

    /// 探测失败的文件数
    #[inline]
    pub fn failed(&self) -> usize {
        self.discovered - self.valid
    }

    /// HI-RES 在有效文件中的占比（百分数）
    ///
    /// 有效文件数为0时返回 `None`，汇总中整行省略。
    pub fn hi_res_ratio(&self) -> Option<f64> {
        if self.valid == 0 {
            None
        } else {
            Some(self.hi_res as f64 / self.valid as f64 * 100.0)
        }
    }
}

/// 生成批量扫描的汇总统计文本
pub fn render_summary(summary: &ScanSummary) -> String {
    let mut output = String::new();

    output.push_str("\n📊 分析完成\n");
    output.push_str(&format!("{}\n", "-".repeat(40)));
    output.push_str(&format!("✅ 有效音频文件: {}\n", summary.valid()));
    output.push_str(&format!("🎯 HI-RES ( >44.1kHz ): {}\n", summary.hi_res()));

    if let Some(ratio) = summary.hi_res_ratio() {
        output.push_str(&format!("📈 HI-RES 占比: {ratio:.1}%\n"));
    }

    if summary.failed() > 0 {
        output.push_str(&format!("⚠️  解析失败: {}\n", summary.failed()));
    }

    output
}
