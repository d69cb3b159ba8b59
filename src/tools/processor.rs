//! 检测流程模块
//!
//! 负责单文件检测和文件夹批量扫描的执行：探测、分类、逐行输出与汇总。

use super::classifier::Category;
use super::{formatter, scanner, utils};
use crate::probe;
use std::io::Write;
use std::path::Path;

/// 检测单个音频文件并输出结果
///
/// 探测成功时额外输出分类结语（HI-RES祝贺或Standard说明）。
pub fn process_single_file(file_path: &Path) {
    println!("\n🔍 正在分析：{}", utils::extract_filename_lossy(file_path));
    println!("{}", "=".repeat(80));

    let sample_rate = probe::probe_sample_rate(file_path);
    println!("{}", formatter::format_result_line(file_path, sample_rate));

    if let Some(rate) = sample_rate {
        match Category::from_rate(rate) {
            Category::HiRes => println!("\n🎉 恭喜！这是高解析音频（HI-RES）"),
            Category::Standard => println!("\nℹ️  这是标准音频（≤44.1kHz）"),
        }
    }
}

/// 批量扫描文件夹并输出汇总统计
///
/// 逐个文件顺序探测，单个文件失败不中断批量处理。
pub fn process_folder(folder: &Path) {
    println!("\n🔍 正在扫描文件夹：{}", folder.display());
    println!("{}", "=".repeat(80));

    let audio_files = match scanner::scan_audio_files(folder) {
        Ok(files) => files,
        Err(e) => {
            println!("❌ 错误：{e}");
            return;
        }
    };

    if audio_files.is_empty() {
        scanner::show_scan_warning();
        return;
    }

    println!("🔎 共发现 {} 个音频文件，正在分析...\n", audio_files.len());

    let total = audio_files.len();
    let mut summary = formatter::ScanSummary::new(total);

    for (i, file) in audio_files.iter().enumerate() {
        let sample_rate = probe::probe_sample_rate(file);
        println!("{}", formatter::format_result_line(file, sample_rate));
        summary.record(sample_rate);

        if let Some(progress) = formatter::format_progress(i + 1, total) {
            print!("{progress}\r");
            let _ = std::io::stdout().flush();
        }
    }
    println!(); // 换行，结束进度行

    print!("{}", formatter::render_summary(&summary));
}
