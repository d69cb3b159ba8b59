//! 文件扫描模块
//!
//! 负责递归扫描目录中的音频文件，支持多种音频格式。

use super::constants::formats::SUPPORTED_EXTENSIONS;
use crate::{InspectError, InspectResult};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 递归扫描目录中的音频文件
///
/// 按扩展名（不区分大小写）过滤，结果按路径升序排序。
pub fn scan_audio_files(dir_path: &Path) -> InspectResult<Vec<PathBuf>> {
    if !dir_path.exists() {
        return Err(InspectError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("目录不存在: {}", dir_path.display()),
        )));
    }

    if !dir_path.is_dir() {
        return Err(InspectError::InvalidInput(format!(
            "路径不是目录: {}",
            dir_path.display()
        )));
    }

    let mut audio_files = Vec::new();

    // 递归遍历，无法读取的子目录直接跳过
    for entry in WalkDir::new(dir_path).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();

        // 检查文件扩展名
        if let Some(extension) = path.extension()
            && let Some(ext_str) = extension.to_str()
        {
            let ext_lower = ext_str.to_lowercase();
            if SUPPORTED_EXTENSIONS.contains(&ext_lower.as_str()) {
                audio_files.push(path.to_path_buf());
            }
        }
    }

    // 按路径排序
    audio_files.sort();

    Ok(audio_files)
}

/// 显示未找到音频文件的提示
pub fn show_scan_warning() {
    println!(
        "⚠️  未找到支持的音频文件（{}）",
        SUPPORTED_EXTENSIONS.join("/")
    );
}
