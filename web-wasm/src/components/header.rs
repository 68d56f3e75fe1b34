//! ヘッダーコンポーネント
//!
//! タイトル・言語トグル・ナビゲーション。言語トグルは生成呼び出し中も
//! 生きている（ローディングで止まるのはコンテンツ領域だけ）

use leptos::prelude::*;

use recipe_ai_common::{Language, View};

use crate::i18n::I18n;

#[component]
pub fn Header<FR, FS>(
    current_view: Memo<View>,
    on_show_recipes: FR,
    on_show_shopping: FS,
) -> impl IntoView
where
    FR: Fn(()) + 'static + Clone + Send + Sync,
    FS: Fn(()) + 'static + Clone + Send + Sync,
{
    let i18n = expect_context::<I18n>();
    let is_recipe_flow = move || current_view.get() != View::Shopping;

    view! {
        <header class="header">
            <div class="header-inner">
                <h1 class="logo">"🍳 " {move || i18n.t("header.title")}</h1>
                <div class="header-controls">
                    <div class="lang-toggle">
                        <button
                            class="lang-btn"
                            class:active=move || i18n.language() == Language::En
                            on:click=move |_| i18n.set_language(Language::En)
                        >
                            "EN"
                        </button>
                        <button
                            class="lang-btn"
                            class:active=move || i18n.language() == Language::Tr
                            on:click=move |_| i18n.set_language(Language::Tr)
                        >
                            "TR"
                        </button>
                    </div>
                    <nav class="nav">
                        <button
                            class="nav-btn"
                            class:active=is_recipe_flow
                            on:click={
                                let on_show_recipes = on_show_recipes.clone();
                                move |_| on_show_recipes(())
                            }
                        >
                            {move || i18n.t("header.recipes")}
                        </button>
                        <button
                            class="nav-btn"
                            class:active=move || current_view.get() == View::Shopping
                            on:click={
                                let on_show_shopping = on_show_shopping.clone();
                                move |_| on_show_shopping(())
                            }
                        >
                            {move || i18n.t("header.shoppingList")}
                        </button>
                    </nav>
                </div>
            </div>
        </header>
    }
}
