//! ffprobe 探测模块
//!
//! 通过 ffprobe 子进程读取音频文件首条音频流的采样率。只查询元数据，
//! 不解码音频载荷。所有失败（工具缺失、非零退出、JSON不完整等）
//! 统一归一化为 `None`，调用方不需要区分失败原因。

use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use std::process::Command;

/// ffprobe 安装指南（跨平台）
pub const FFPROBE_INSTALL_GUIDE: &str = r#"
ffprobe is required for sample rate inspection / 需要安装ffprobe（随FFmpeg分发）以探测采样率

Installation / 安装方法:
  macOS:   brew install ffmpeg
  Windows: https://www.gyan.dev/ffmpeg/builds/ (推荐Full版本)
           或使用: winget install Gyan.FFmpeg
  Linux:
    - Ubuntu/Debian: sudo apt install ffmpeg
    - Fedora/RHEL:   sudo dnf install ffmpeg
    - Arch:          sudo pacman -S ffmpeg

Official site / 官方网站: https://ffmpeg.org/download.html
"#;

/// ffprobe 的 JSON 输出外层结构
#[derive(Debug, Deserialize)]
struct ProbeOutput {
    #[serde(default)]
    streams: Vec<ProbeStream>,
}

/// 单条流的元数据（只关心采样率）
///
/// ffprobe 把 sample_rate 输出为字符串，个别封装器输出为数字，
/// 先反序列化为 Value 再统一转换。
#[derive(Debug, Deserialize)]
struct ProbeStream {
    sample_rate: Option<Value>,
}

/// ffprobe 可执行文件名（跨平台）
fn ffprobe_command() -> &'static str {
    if cfg!(target_os = "windows") {
        "ffprobe.exe"
    } else {
        "ffprobe"
    }
}

/// 检测 ffprobe 是否可用（启动时预检）
pub fn is_available() -> bool {
    Command::new(ffprobe_command())
        .arg("-version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// 从 ffprobe 的 JSON 文本中提取首条音频流的采样率
///
/// 输出形如 `{"streams": [{"sample_rate": "96000"}]}`。
/// 流列表为空、字段缺失或无法解析为整数时返回 `None`。
pub fn parse_sample_rate(json: &str) -> Option<u32> {
    let output: ProbeOutput = serde_json::from_str(json).ok()?;
    let stream = output.streams.into_iter().next()?;

    match stream.sample_rate? {
        Value::String(s) => s.trim().parse::<u32>().ok(),
        Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
        _ => None,
    }
}

/// 探测音频文件的采样率（Hz），失败返回 `None`
///
/// 只选择首条音频流（`a:0`）且只读取 sample_rate 字段，
/// 不校验文件是否存在，交由 ffprobe 自行失败。
pub fn probe_sample_rate(file_path: &Path) -> Option<u32> {
    let output = Command::new(ffprobe_command())
        .args([
            "-v",
            "quiet",
            "-select_streams",
            "a:0",
            "-show_entries",
            "stream=sample_rate",
            "-of",
            "json",
        ])
        .arg(file_path)
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    parse_sample_rate(&String::from_utf8_lossy(&output.stdout))
}
