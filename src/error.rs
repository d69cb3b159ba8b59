//! 统一错误处理
//!
//! 检测流程中所有可恢复失败的错误类型定义。探测失败不在此列：
//! 探测结果统一用 `Option<u32>` 表达，调用方不需要区分失败原因。

use std::fmt;
use std::io;

/// 检测工具的统一错误类型
#[derive(Debug)]
pub enum InspectError {
    /// 输入验证错误（空路径、路径类型不符等）
    InvalidInput(String),

    /// 文件I/O错误
    IoError(io::Error),

    /// 外部依赖缺失（ffprobe不可用）
    MissingDependency(String),
}

impl fmt::Display for InspectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InspectError::InvalidInput(msg) => write!(f, "输入验证失败: {msg}"),
            InspectError::IoError(err) => write!(f, "文件I/O错误: {err}"),
            InspectError::MissingDependency(msg) => write!(f, "外部依赖缺失: {msg}"),
        }
    }
}

impl std::error::Error for InspectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InspectError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for InspectError {
    fn from(err: io::Error) -> Self {
        InspectError::IoError(err)
    }
}

/// 检测操作的标准Result类型
pub type InspectResult<T> = Result<T, InspectError>;
