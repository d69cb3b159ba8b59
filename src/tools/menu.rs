//! 交互式菜单模块
//!
//! 负责横幅、菜单循环和路径输入。程序不接受命令行参数，
//! 所有操作通过标准输入的菜单选项驱动。

use super::{processor, utils};
use std::io::{self, BufRead, Write};

/// 应用程序版本信息
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 显示启动横幅
pub fn show_banner() {
    println!();
    println!("  🎵 Audio Sample Rate Inspector v{VERSION}");
    println!("  ───────────────────────────────");
}

/// 显示操作菜单
fn show_menu() {
    println!("\n❓ 请选择操作：");
    println!("  [1] 🔍 检测单个音频文件");
    println!("  [2] 📁 批量检测整个文件夹");
    println!("  [0] 🚪 退出");
}

/// 读取一行用户输入，去除首尾空白和引号
///
/// 拖拽到终端的路径通常带有引号包裹。输入流结束（Ctrl+D）返回 `None`，
/// 由调用方决定是退出还是返回菜单。
fn read_input(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => Some(
            line.trim()
                .trim_matches(['\'', '"'])
                .trim()
                .to_string(),
        ),
        Err(_) => None,
    }
}

/// 运行菜单主循环
///
/// 菜单处输入流结束时输出告别语并退出循环；
/// 子流程中输入流结束时静默返回菜单。
pub fn run() {
    loop {
        show_menu();

        let Some(choice) = read_input("➤ 请输入选项 [0/1/2]: ") else {
            println!("\n👋 再见！");
            break;
        };

        match choice.as_str() {
            "1" => check_single_file(),
            "2" => check_folder(),
            "0" => {
                println!("✨ 感谢使用！期待下次为您服务～");
                break;
            }
            _ => println!("⚠️  无效输入，请输入 0 / 1 / 2"),
        }
    }
}

/// 单文件检测子流程
fn check_single_file() {
    println!("\n📁 请选择音频文件（支持 flac/mp3/m4a 等）");
    println!("提示：可拖拽文件到终端，或手动输入路径");

    let Some(input) = read_input("➤ 文件路径: ") else {
        return;
    };

    if input.is_empty() {
        println!("❌ 路径为空");
        return;
    }

    let file_path = utils::resolve_user_path(&input);
    if !file_path.is_file() {
        println!("❌ 文件不存在：{}", file_path.display());
        return;
    }

    processor::process_single_file(&file_path);
}

/// 文件夹批量扫描子流程
fn check_folder() {
    println!("\n📁 请输入要扫描的文件夹路径");
    println!("提示：可拖拽文件夹到终端，或输入 ~/Music 等路径");

    let Some(input) = read_input("➤ 文件夹路径: ") else {
        return;
    };

    if input.is_empty() {
        return;
    }

    let folder = utils::resolve_user_path(&input);
    processor::process_folder(&folder);
}
