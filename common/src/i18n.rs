//! 翻訳ルックアップ
//!
//! 2ロケール（英語＝デフォルト、トルコ語）のJSONツリーに対する
//! ドット区切りキーパスの解決:
//! - アクティブロケールでキーパスを辿る（途中で欠落したら中断）
//! - 見つからなければデフォルトロケールで再試行
//! - それでも見つからなければキーパス自体を返す（画面上で検出可能にする）
//! - `{{name}}` 形式のプレースホルダ置換をサポート

use serde_json::Value;

use crate::error::{Error, Result};

/// UI言語
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    En,
    Tr,
}

impl Language {
    /// 言語コード（ロケールファイル名・プロンプト分岐に使用）
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Tr => "tr",
        }
    }

    /// 音声合成用の言語タグ
    pub fn speech_tag(self) -> &'static str {
        match self {
            Language::En => "en-US",
            Language::Tr => "tr-TR",
        }
    }
}

/// 起動時に一度だけ構築される翻訳テーブル
///
/// 構築後は不変。enがデフォルト／フォールバックロケール。
#[derive(Debug, Clone)]
pub struct Translations {
    en: Value,
    tr: Value,
}

impl Translations {
    /// パース済みJSONツリーから構築
    ///
    /// # Arguments
    /// * `en` - 英語ロケールのJSONツリー
    /// * `tr` - トルコ語ロケールのJSONツリー
    ///
    /// # Returns
    /// * `Ok(Translations)` - 両方ともJSONオブジェクトの場合
    /// * `Err` - どちらかがオブジェクトでない場合
    pub fn new(en: Value, tr: Value) -> Result<Self> {
        if !en.is_object() {
            return Err(Error::Locale("enロケールがオブジェクトではありません".into()));
        }
        if !tr.is_object() {
            return Err(Error::Locale("trロケールがオブジェクトではありません".into()));
        }
        Ok(Self { en, tr })
    }

    /// JSONソース文字列から構築
    pub fn from_json(en: &str, tr: &str) -> Result<Self> {
        Self::new(serde_json::from_str(en)?, serde_json::from_str(tr)?)
    }

    fn tree(&self, language: Language) -> &Value {
        match language {
            Language::En => &self.en,
            Language::Tr => &self.tr,
        }
    }

    /// キーパスを表示文字列に解決
    ///
    /// # Arguments
    /// * `language` - アクティブロケール
    /// * `key` - ドット区切りキーパス（例: "cookingMode.step"）
    ///
    /// # Returns
    /// 解決された文字列。どちらのロケールにもなければキーパス自体
    pub fn translate(&self, language: Language, key: &str) -> String {
        let mut resolved = lookup(self.tree(language), key);

        // アクティブロケールになければデフォルトロケールで再試行
        if resolved.is_none() && language != Language::En {
            resolved = lookup(&self.en, key);
        }

        resolved.unwrap_or(key).to_string()
    }

    /// キーパスを解決し、プレースホルダを置換
    ///
    /// 解決された文字列中の `{{name}}` を対応する値に置き換える。
    /// 対応する値がないプレースホルダはそのまま残る。
    ///
    /// # Arguments
    /// * `language` - アクティブロケール
    /// * `key` - ドット区切りキーパス
    /// * `args` - (プレースホルダ名, 値)のスライス
    pub fn translate_with(&self, language: Language, key: &str, args: &[(&str, String)]) -> String {
        let mut result = self.translate(language, key);
        for (name, value) in args {
            result = result.replace(&format!("{{{{{}}}}}", name), value);
        }
        result
    }
}

/// ツリーに対してキーパスを辿る
///
/// どこかのセグメントが欠落したら中断してNone。
/// 終端が文字列でない（中間オブジェクト等の）場合もNone扱い。
fn lookup<'a>(tree: &'a Value, key: &str) -> Option<&'a str> {
    let mut node = tree;
    for segment in key.split('.') {
        node = node.get(segment)?;
    }
    node.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_translations() -> Translations {
        Translations::new(
            json!({
                "common": {
                    "next": "Next",
                    "startOver": "Start Over"
                },
                "cookingMode": {
                    "step": "Step {{current}} of {{total}}"
                },
                "header": {
                    "title": "AI Recipe Assistant"
                },
                "onlyEnglish": "English only"
            }),
            json!({
                "common": {
                    "next": "İleri"
                },
                "cookingMode": {
                    "step": "Adım {{current}} / {{total}}"
                }
            }),
        )
        .expect("翻訳テーブル構築失敗")
    }

    // =============================================
    // Language テスト
    // =============================================

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::En.code(), "en");
        assert_eq!(Language::Tr.code(), "tr");
        assert_eq!(Language::En.speech_tag(), "en-US");
        assert_eq!(Language::Tr.speech_tag(), "tr-TR");
    }

    #[test]
    fn test_language_default_is_english() {
        assert_eq!(Language::default(), Language::En);
    }

    // =============================================
    // 構築テスト
    // =============================================

    #[test]
    fn test_new_rejects_non_object_root() {
        let result = Translations::new(json!("not an object"), json!({}));
        assert!(matches!(result, Err(Error::Locale(_))));

        let result = Translations::new(json!({}), json!([1, 2, 3]));
        assert!(matches!(result, Err(Error::Locale(_))));
    }

    #[test]
    fn test_from_json_invalid_source() {
        let result = Translations::from_json("{not json", "{}");
        assert!(matches!(result, Err(Error::Json(_))));
    }

    // =============================================
    // ルックアップ・フォールバックテスト
    // =============================================

    #[test]
    fn test_translate_active_locale() {
        let t = sample_translations();
        assert_eq!(t.translate(Language::En, "common.next"), "Next");
        assert_eq!(t.translate(Language::Tr, "common.next"), "İleri");
    }

    #[test]
    fn test_translate_falls_back_to_english() {
        let t = sample_translations();
        // trに存在しないキーはenの値で解決される
        assert_eq!(t.translate(Language::Tr, "common.startOver"), "Start Over");
        assert_eq!(t.translate(Language::Tr, "onlyEnglish"), "English only");
    }

    #[test]
    fn test_translate_missing_key_returns_key() {
        let t = sample_translations();
        assert_eq!(t.translate(Language::En, "common.missing"), "common.missing");
        assert_eq!(t.translate(Language::Tr, "no.such.path"), "no.such.path");
    }

    #[test]
    fn test_translate_aborts_on_missing_intermediate_segment() {
        let t = sample_translations();
        // 中間セグメントの欠落はエラーにならずキーを返す
        assert_eq!(t.translate(Language::En, "missing.next"), "missing.next");
    }

    #[test]
    fn test_translate_non_string_node_counts_as_missing() {
        let t = sample_translations();
        // "common" は中間オブジェクト。文字列でない終端はキーを返す
        assert_eq!(t.translate(Language::En, "common"), "common");
        assert_eq!(t.translate(Language::Tr, "cookingMode"), "cookingMode");
    }

    #[test]
    fn test_translate_path_through_string_aborts() {
        let t = sample_translations();
        // 文字列ノードを更に辿ろうとした場合も見つからない扱い
        assert_eq!(t.translate(Language::En, "common.next.deeper"), "common.next.deeper");
    }

    // =============================================
    // プレースホルダ置換テスト
    // =============================================

    #[test]
    fn test_translate_with_placeholders() {
        let t = sample_translations();
        let result = t.translate_with(
            Language::En,
            "cookingMode.step",
            &[("current", "2".to_string()), ("total", "5".to_string())],
        );
        assert_eq!(result, "Step 2 of 5");

        let result = t.translate_with(
            Language::Tr,
            "cookingMode.step",
            &[("current", "1".to_string()), ("total", "3".to_string())],
        );
        assert_eq!(result, "Adım 1 / 3");
    }

    #[test]
    fn test_translate_with_unmatched_placeholder_left_as_is() {
        let t = sample_translations();
        let result = t.translate_with(
            Language::En,
            "cookingMode.step",
            &[("current", "1".to_string())],
        );
        assert_eq!(result, "Step 1 of {{total}}");
    }

    #[test]
    fn test_translate_with_on_missing_key() {
        let t = sample_translations();
        // キー自体がフォールバックとして返る場合、置換対象はない
        let result = t.translate_with(Language::En, "nope", &[("x", "1".to_string())]);
        assert_eq!(result, "nope");
    }
}
