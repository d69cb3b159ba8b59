//! 采样率分类测试
//!
//! 验证HI-RES/Standard分类规则的阈值边界行为。

use hires_check::Category;

/// 验证严格大于44100 Hz判定为HI-RES
#[test]
fn test_hires_strictly_above_threshold() {
    let hires_rates = vec![
        (44101, "刚过阈值"),
        (48000, "DVD标准"),
        (88200, "2倍CD"),
        (96000, "24bit常见采样率"),
        (192000, "录音室级"),
    ];

    for (rate, desc) in hires_rates {
        let category = Category::from_rate(rate);
        assert_eq!(category, Category::HiRes, "{desc}: {rate} Hz应判定为HI-RES");
        assert!(category.is_hi_res());
        println!("  ✓ {rate} Hz正确判定为HI-RES ({desc})");
    }
}

/// 验证44100 Hz及以下判定为Standard（阈值边界为排他）
#[test]
fn test_standard_at_and_below_threshold() {
    let standard_rates = vec![
        (44100, "CD标准，恰好等于阈值"),
        (32000, "广播常见"),
        (22050, "半CD采样率"),
        (8000, "电话音质"),
    ];

    for (rate, desc) in standard_rates {
        let category = Category::from_rate(rate);
        assert_eq!(
            category,
            Category::Standard,
            "{desc}: {rate} Hz应判定为Standard"
        );
        assert!(!category.is_hi_res());
        println!("  ✓ {rate} Hz正确判定为Standard ({desc})");
    }
}

/// 验证分类标签与图标
#[test]
fn test_category_labels_and_icons() {
    assert_eq!(Category::HiRes.label(), "HI-RES");
    assert_eq!(Category::Standard.label(), "Standard");
    assert_eq!(Category::HiRes.icon(), "🎯");
    assert_eq!(Category::Standard.icon(), "🎧");

    println!("  ✓ 分类标签与图标正确");
}

/// 验证96kHz FLAC场景的完整判定链
#[test]
fn test_96khz_flac_scenario() {
    let rate = 96000u32;
    let category = Category::from_rate(rate);

    assert!(category.is_hi_res(), "96kHz应为HI-RES");
    assert_eq!(format!("{:.1} kHz", rate as f64 / 1000.0), "96.0 kHz");

    println!("  ✓ 96kHz场景判定链正确");
}
