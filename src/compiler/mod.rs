//! 编译模块：将静态类别表与词典编译为可执行的匹配器
pub mod pattern;
pub mod compiler;

pub use self::pattern::{
    Matcher, CompiledCategory, CategoryRegistry, CompiledTerm, CompiledDictionary
};
pub use self::compiler::{RuleCompiler, category_registry, translation_dictionary};
