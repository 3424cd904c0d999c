use promptboard::{
    clean_nested_categories, global_board, init_prompt_board, parse_prompt_text,
    preprocess_mixed_content, translate_prompt_text, validate_prompts, CategoryKey,
    ConfigManager, ParseResult, PromptBoard, PromptBoardError, PromptContent,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("promptboard=debug")
        .with_test_writer()
        .try_init();
}

#[test]
fn parses_two_block_input() {
    init_tracing();
    let result = parse_prompt_text(
        "[Base Styles / 基础风格]\nanime style, cute\n[Rendering / 渲染技术]\n8k resolution",
    );

    let mut expected = ParseResult::empty();
    expected[CategoryKey::BaseStyles] = PromptContent::new("anime style, cute", "");
    expected[CategoryKey::Rendering] = PromptContent::new("8k resolution", "");
    assert_eq!(result, expected);

    let report = validate_prompts(&result);
    assert!(!report.is_valid);
    assert!(report.has_content);
    assert_eq!(report.missing_categories.len(), 6);
}

#[test]
fn empty_input_is_invalid() {
    let result = parse_prompt_text("");
    assert!(result.is_blank());

    let report = validate_prompts(&result);
    assert!(report.is_empty);
    assert!(!report.is_valid);
    assert!(!report.has_content);
    // 全空时不列出缺失类别
    assert!(report.missing_categories.is_empty());
}

#[test]
fn sample_text_fills_every_category() {
    let board = global_board();
    let result = board.parse(board.sample_text());

    for (key, content) in result.iter() {
        assert!(content.has_content(), "{} 应有内容", key);
        assert!(content.zh.is_empty());
    }
    assert_eq!(
        result[CategoryKey::Typography].en,
        "calligraphic kanji overlay, dissolving brushstroke text, flowing mist captions"
    );
    assert!(board.validate(&result).is_valid);
}

#[test]
fn preprocess_is_idempotent() {
    let inputs = [
        "[Base Styles / 基础风格] anime [Rendering / 渲染技术] 8k",
        "intro text [Effects / 特效元素] sparks\nmore [Cinematic / 镜头语言]",
        "[Lighting & Mood / 光影氛围]\nsoft light",
        "plain text without headers",
        "",
    ];
    for input in inputs {
        let once = preprocess_mixed_content(input);
        assert_eq!(preprocess_mixed_content(&once), once);
    }
}

#[test]
fn scrub_leaves_no_bracket_spans() {
    let cleaned = clean_nested_categories("bokeh [[Effects / 特效元素]] [note [inner]] glow");
    assert!(!cleaned.contains('['));
    assert!(!cleaned.starts_with(','));
    assert!(!cleaned.contains("  "));
}

#[test]
fn translates_with_full_width_commas() {
    let first = translate_prompt_text("anime style, cute");
    assert_eq!(first, "动漫 风格，可爱的");
    assert_eq!(translate_prompt_text("anime style, cute"), first);
    assert_eq!(translate_prompt_text("cel shading"), "赛璐珞渲染");
}

#[test]
fn parse_result_json_shape() {
    let board = PromptBoard::default();
    let result = board.parse("[Rendering / 渲染技术]\n8k resolution");
    let value = serde_json::to_value(&result).expect("序列化失败");

    let object = value.as_object().expect("应为对象");
    assert_eq!(object.len(), 8);
    assert_eq!(value["rendering"]["en"], "8k resolution");
    assert_eq!(value["rendering"]["zh"], "");
    assert_eq!(value["base_styles"]["en"], "");

    let report = serde_json::to_value(board.validate(&result)).expect("序列化失败");
    assert_eq!(report["isValid"], false);
    assert_eq!(report["missingCategories"][0], "base_styles");

    let back: ParseResult = serde_json::from_value(value).expect("反序列化失败");
    assert_eq!(back, result);
}

#[test]
fn custom_separator_joins_lines() {
    let config = ConfigManager::custom().content_separator(" | ").build();
    let board = PromptBoard::new(config);
    let result = board.parse("[Effects / 特效元素]\nsparks\nbokeh");
    assert_eq!(result[CategoryKey::Effects].en, "sparks | bokeh");
}

#[test]
fn global_board_rejects_second_init() {
    // 全局面板可能已被其他测试惰性初始化，两次调用中至少第二次必然失败
    let _ = init_prompt_board();
    assert!(matches!(
        init_prompt_board(),
        Err(PromptBoardError::AlreadyInitialized)
    ));
}
