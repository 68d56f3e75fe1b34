//! 画像アップロードコンポーネント
//!
//! ファイル選択 → Data URLプレビュー → 解析ボタン。
//! 解析ボタンはプレビューが存在するときだけ現れる

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{FileReader, HtmlInputElement};

use crate::i18n::I18n;

#[component]
pub fn ImageUpload<F>(on_image_upload: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send + Sync,
{
    let i18n = expect_context::<I18n>();
    let (preview, set_preview) = signal(None::<String>);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let on_file_change = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        read_as_data_url(file, set_preview);
    };

    let trigger_select = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_analyze = {
        let on_image_upload = on_image_upload.clone();
        move |_| {
            if let Some(data_url) = preview.get_untracked() {
                on_image_upload(data_url);
            }
        }
    };

    view! {
        <div class="panel upload-panel">
            <h2>{move || i18n.t("upload.title")}</h2>
            <p class="text-muted">{move || i18n.t("upload.description")}</p>

            <input
                type="file"
                accept="image/*"
                class="hidden"
                node_ref=input_ref
                on:change=on_file_change
            />

            <div
                class="upload-area"
                class:has-preview=move || preview.get().is_some()
                on:click=trigger_select
            >
                <Show
                    when=move || preview.get().is_some()
                    fallback=move || view! {
                        <div class="upload-placeholder">
                            <div class="upload-icon">"📷"</div>
                            <p>{move || i18n.t("upload.prompt")}</p>
                        </div>
                    }
                >
                    <img
                        src=move || preview.get().unwrap_or_default()
                        alt=move || i18n.t("upload.previewAlt")
                    />
                </Show>
            </div>

            <Show when=move || preview.get().is_some()>
                <button class="btn btn-primary btn-block" on:click=on_analyze.clone()>
                    {move || i18n.t("upload.button")}
                </button>
            </Show>
        </div>
    }
}

fn read_as_data_url(file: web_sys::File, set_preview: WriteSignal<Option<String>>) {
    let reader = match FileReader::new() {
        Ok(reader) => reader,
        Err(_) => return,
    };

    let reader_clone = reader.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
        if let Ok(result) = reader_clone.result() {
            if let Some(data_url) = result.as_string() {
                set_preview.set(Some(data_url));
            }
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    let _ = reader.read_as_data_url(&file);
}
