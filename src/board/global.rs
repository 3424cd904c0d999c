//! 全局面板单例管理
use once_cell::sync::OnceCell;

use super::board::PromptBoard;
use crate::config::{ConfigManager, GlobalConfig};
use crate::error::{PbResult, PromptBoardError};

/// 全局面板实例
static GLOBAL_BOARD: OnceCell<PromptBoard> = OnceCell::new();

/// 初始化全局面板（默认配置）
pub fn init_prompt_board() -> PbResult<()> {
    init_prompt_board_with_config(ConfigManager::get_default())
}

/// 带自定义配置初始化全局面板；只能初始化一次
pub fn init_prompt_board_with_config(config: GlobalConfig) -> PbResult<()> {
    GLOBAL_BOARD
        .set(PromptBoard::new(config))
        .map_err(|_| PromptBoardError::AlreadyInitialized)
}

/// 获取全局面板，未初始化时使用默认配置
pub fn global_board() -> &'static PromptBoard {
    GLOBAL_BOARD.get_or_init(PromptBoard::default)
}
