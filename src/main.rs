//! HiRes-Check - 主程序入口
//!
//! 纯流程控制器：Ctrl+C处理、ffprobe预检、横幅与菜单循环。

use hires_check::probe;
use hires_check::tools::menu;
use hires_check::InspectError;
use std::process;

/// 错误退出码定义
mod exit_codes {
    /// 外部依赖缺失（ffprobe不可用）
    pub const MISSING_DEPENDENCY: i32 = 1;
}

fn main() {
    // Ctrl+C随时优雅退出；处理器安装失败不影响正常流程
    if ctrlc::set_handler(|| {
        println!("\n👋 再见！");
        process::exit(0);
    })
    .is_err()
    {
        eprintln!("⚠️  无法安装Ctrl+C处理器，中断时将直接终止");
    }

    // 预检：ffprobe不可用时不进入菜单
    if !probe::is_available() {
        let err = InspectError::MissingDependency("未找到 ffprobe（请先安装 FFmpeg）".to_string());
        eprintln!("❌ 错误：{err}");
        eprintln!("{}", probe::FFPROBE_INSTALL_GUIDE);
        process::exit(exit_codes::MISSING_DEPENDENCY);
    }

    menu::show_banner();
    menu::run();
}
