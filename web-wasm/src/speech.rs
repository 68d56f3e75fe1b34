//! 読み上げ（SpeechSynthesis）ラッパー
//!
//! 発話は常に1本だけ: 新しい読み上げは進行中のものを暗黙にキャンセル
//! する。終了・エラーのどちらでもspeakingフラグを必ず下ろす。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{SpeechSynthesis, SpeechSynthesisUtterance};

fn synth() -> Option<SpeechSynthesis> {
    web_sys::window().and_then(|w| w.speech_synthesis().ok())
}

/// テキストを読み上げる
///
/// # Arguments
/// * `text` - 読み上げるテキスト（空文字なら何もしない）
/// * `lang` - 言語タグ（"en-US", "tr-TR"）
/// * `set_speaking` - 読み上げ状態フラグの書き込み側
pub fn speak(text: &str, lang: &str, set_speaking: WriteSignal<bool>) {
    if text.is_empty() {
        return;
    }
    let Some(synth) = synth() else {
        return;
    };

    synth.cancel();

    let Ok(utterance) = SpeechSynthesisUtterance::new_with_text(text) else {
        return;
    };
    utterance.set_lang(lang);

    let on_done = Closure::wrap(Box::new(move |_: web_sys::Event| {
        set_speaking.set(false);
    }) as Box<dyn FnMut(_)>);
    utterance.set_onend(Some(on_done.as_ref().unchecked_ref()));
    utterance.set_onerror(Some(on_done.as_ref().unchecked_ref()));
    on_done.forget();

    synth.speak(&utterance);
    set_speaking.set(true);
}

/// 進行中の読み上げをキャンセルしてフラグを下ろす
pub fn cancel(set_speaking: WriteSignal<bool>) {
    if let Some(synth) = synth() {
        synth.cancel();
    }
    set_speaking.set(false);
}
