//! Recipe AI Common Library
//!
//! Web(WASM)フロントエンドから独立してテストできるロジック:
//! 型、パーサー、プロンプト、翻訳ルックアップ、セッション状態

pub mod error;
pub mod i18n;
pub mod parser;
pub mod prompts;
pub mod session;
pub mod types;

pub use error::{Error, Result};
pub use i18n::{Language, Translations};
pub use parser::{extract_json, parse_generation_response};
pub use prompts::{build_generation_prompt, DIETARY_OPTIONS};
pub use session::{Session, View};
pub use types::{Difficulty, GeneratedRecipes, Ingredient, Recipe};
