//! 采样率分类模块
//!
//! 将探测到的采样率映射为 HI-RES / Standard 两类。
//! 阈值固定为 44.1kHz CD 标准，不可配置。

use super::constants::classification::HIRES_THRESHOLD_HZ;

/// 采样率分类结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// 高解析音频（>44.1kHz）
    HiRes,
    /// 标准音频（≤44.1kHz）
    Standard,
}

impl Category {
    /// 按固定阈值对采样率分类
    ///
    /// 严格大于 44100 Hz 为 HI-RES；探测失败的文件没有分类，
    /// 调用方在 `Option` 层处理，不会进入此函数。
    pub fn from_rate(sample_rate: u32) -> Self {
        if sample_rate > HIRES_THRESHOLD_HZ {
            Category::HiRes
        } else {
            Category::Standard
        }
    }

    /// 是否为高解析音频
    #[inline]
    pub fn is_hi_res(self) -> bool {
        matches!(self, Category::HiRes)
    }

    /// 分类标签文本
    pub fn label(self) -> &'static str {
        match self {
            Category::HiRes => "HI-RES",
            Category::Standard => "Standard",
        }
    }

    /// 分类图标
    pub fn icon(self) -> &'static str {
        match self {
            Category::HiRes => "🎯",
            Category::Standard => "🎧",
        }
    }
}
