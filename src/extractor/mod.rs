//! 提取模块：混合内容预处理、按行分段分类、残留标记清理
pub mod preprocessor;
pub mod segmenter;
pub mod scrubber;

pub use self::preprocessor::MixedContentPreprocessor;
pub use self::segmenter::Segmenter;
pub use self::scrubber::MarkerScrubber;
