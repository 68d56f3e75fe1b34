//! Recipe AI Web App (Leptos + WASM)
//!
//! 起動順序: ロケール読込 → セッション構築 → マウント。
//! ロケールがどちらか一つでも読めなければアプリは描画しない。

mod api;
mod app;
mod components;
mod i18n;
mod speech;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use app::{App, StartupError};

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    wasm_bindgen_futures::spawn_local(async {
        if api::gemini::api_key().is_none() {
            leptos::mount::mount_to_body(|| {
                view! {
                    <StartupError message="API key is not configured. Rebuild with GEMINI_API_KEY set." />
                }
            });
            return;
        }

        match i18n::load_translations().await {
            Ok(translations) => {
                leptos::mount::mount_to_body(move || view! { <App translations=translations /> });
            }
            Err(err) => {
                gloo::console::error!(format!("failed to load locales: {:?}", err));
                leptos::mount::mount_to_body(|| {
                    view! {
                        <StartupError message="Error loading application. Please check the console." />
                    }
                });
            }
        }
    });
}
