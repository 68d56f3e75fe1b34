//! 買い物リストコンポーネント
//!
//! セッションのフローとは独立のライフサイクル（リセットで消えない）。
//! 挿入順で表示し、行ごとの削除ボタンを持つ

use leptos::prelude::*;

use crate::i18n::I18n;

#[component]
pub fn ShoppingList<F>(items: Memo<Vec<String>>, on_remove: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send + Sync,
{
    let i18n = expect_context::<I18n>();

    view! {
        <div class="panel shopping-panel">
            <h2>{move || i18n.t("shoppingList.title")}</h2>
            <Show
                when=move || !items.get().is_empty()
                fallback=move || view! {
                    <p class="text-muted empty-state">{move || i18n.t("shoppingList.empty")}</p>
                }
            >
                <ul class="shopping-items">
                    <For
                        each=move || items.get()
                        key=|item| item.clone()
                        children={
                            let on_remove = on_remove.clone();
                            move |item: String| {
                                let on_remove = on_remove.clone();
                                let label = item.clone();
                                view! {
                                    <li class="shopping-item">
                                        <span>{label}</span>
                                        <button
                                            class="btn-icon danger"
                                            title=move || i18n.t("shoppingList.removeItem")
                                            on:click=move |_| on_remove(item.clone())
                                        >
                                            "✕"
                                        </button>
                                    </li>
                                }
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}
