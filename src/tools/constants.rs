//! 常量和默认配置集中管理
//!
//! 将所有重要常量集中定义，避免"默认值漂移"和重复定义

/// 音频格式常量
pub mod formats {
    /// 支持的音频格式扩展名（小写比较）
    pub const SUPPORTED_EXTENSIONS: &[&str] =
        &["flac", "mp3", "m4a", "wav", "aac", "ogg", "opus"];
}

/// 采样率分类常量
pub mod classification {
    /// HI-RES 判定阈值（Hz）
    ///
    /// 44.1kHz 为 CD 标准采样率，严格大于该值才判定为 HI-RES，
    /// 等于 44100 Hz 的文件属于 Standard
    pub const HIRES_THRESHOLD_HZ: u32 = 44100;
}

/// 显示相关常量
pub mod display {
    /// 路径完整显示的最大字符数
    ///
    /// 超过该长度只显示文件名，避免结果行过长换行
    pub const MAX_PATH_DISPLAY_CHARS: usize = 60;

    /// 进度提示间隔（每处理N个文件刷新一次）
    pub const PROGRESS_INTERVAL: usize = 10;
}
