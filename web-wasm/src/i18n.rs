//! 言語コンテキストとロケール読み込み
//!
//! 翻訳テーブル（不変）とアクティブ言語（可変シグナル）を束ねて
//! Leptosコンテキストとして配る。ルックアップ本体はcommon側。

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use recipe_ai_common::{Language, Translations};

/// 翻訳コンテキスト
///
/// 言語シグナルを内包するため、リアクティブなクロージャ内でtを呼べば
/// 言語切替に追従して再描画される
#[derive(Clone, Copy)]
pub struct I18n {
    language: RwSignal<Language>,
    translations: StoredValue<Translations>,
}

impl I18n {
    pub fn new(translations: Translations) -> Self {
        Self {
            language: RwSignal::new(Language::default()),
            translations: StoredValue::new(translations),
        }
    }

    pub fn language(&self) -> Language {
        self.language.get()
    }

    pub fn set_language(&self, language: Language) {
        self.language.set(language);
    }

    /// キーパスを現在の言語で解決
    pub fn t(&self, key: &str) -> String {
        let language = self.language.get();
        self.translations.with_value(|tr| tr.translate(language, key))
    }

    /// キーパスを解決してプレースホルダを置換
    pub fn t_with(&self, key: &str, args: &[(&str, String)]) -> String {
        let language = self.language.get();
        self.translations
            .with_value(|tr| tr.translate_with(language, key, args))
    }
}

/// ロケールファイルを2つ並行で取得して翻訳テーブルを構築
///
/// どちらか一方でも失敗したら起動失敗（呼び出し側でエラー画面を出す）
pub async fn load_translations() -> Result<Translations, JsValue> {
    let (en, tr) = futures::future::join(
        fetch_text("locales/en.json"),
        fetch_text("locales/tr.json"),
    )
    .await;
    let (en, tr) = (en?, tr?);

    Translations::from_json(&en, &tr).map_err(|e| JsValue::from_str(&e.to_string()))
}

async fn fetch_text(url: &str) -> Result<String, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_str(url)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!("HTTP {}: {}", resp.status(), url)));
    }

    let text = JsFuture::from(resp.text()?).await?;
    text.as_string()
        .ok_or_else(|| JsValue::from_str("response body is not a string"))
}
