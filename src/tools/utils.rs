//! 工具函数模块
//!
//! 提供文件路径处理等通用工具函数。

use std::path::{Path, PathBuf};

/// 提取文件名（返回String，用于结果行显示）
#[inline]
pub fn extract_filename_lossy(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}

/// 用户主目录（跨平台）
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}

/// 展开路径开头的 `~` 为用户主目录
///
/// 只处理 `~` 和 `~/...` 形式；`~user` 形式原样返回。
/// 主目录无法确定时也原样返回。
pub fn expand_tilde(input: &str) -> PathBuf {
    if let Some(rest) = input.strip_prefix('~')
        && (rest.is_empty() || rest.starts_with('/') || rest.starts_with('\\'))
        && let Some(home) = home_dir()
    {
        if rest.is_empty() {
            return home;
        }
        return home.join(rest.trim_start_matches(['/', '\\']));
    }

    PathBuf::from(input)
}

/// 解析用户输入的路径：展开 `~` 并尽量规范化
///
/// 规范化失败（路径不存在等）时退回展开后的原路径，
/// 由调用方的存在性检查给出错误提示。
pub fn resolve_user_path(input: &str) -> PathBuf {
    let expanded = expand_tilde(input);
    dunce::canonicalize(&expanded).unwrap_or(expanded)
}
