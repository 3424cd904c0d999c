//! 面板模块：对外的解析/校验/翻译入口
pub mod global;
pub mod board;

// 导出核心接口
pub use self::global::{init_prompt_board, init_prompt_board_with_config, global_board};
pub use self::board::{
    PromptBoard,
    parse_prompt_text,
    preprocess_mixed_content,
    clean_nested_categories,
    validate_prompts,
    translate_prompt_text,
    translate_all_prompts,
    format_prompts,
    get_sample_text,
};
