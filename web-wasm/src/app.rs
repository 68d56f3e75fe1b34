//! メインアプリケーションコンポーネント
//!
//! セッション状態（Session）の単一オーナー。画面コンポーネントには
//! Memoスライスとコールバックだけを渡し、ミューテーションはすべて
//! このコンポーネントのハンドラ経由でSessionに入る。
//!
//! 描画の分岐は元のフローのまま: ローディング中はスピナー、エラーが
//! あればリトライ画面、それ以外は現在のViewに対応する画面。

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use recipe_ai_common::{Session, Translations, View};

use crate::api::gemini;
use crate::components::{
    cooking_mode::CookingMode, filter_sidebar::FilterSidebar, header::Header,
    image_upload::ImageUpload, ingredient_confirmation::IngredientConfirmation,
    recipe_list::RecipeList, shopping_list::ShoppingList, spinner::Spinner,
};
use crate::i18n::I18n;

/// 起動失敗画面（ロケール読込失敗・APIキー未設定）
///
/// 翻訳テーブルがまだ無い段階で出すため、文言は英語固定
#[component]
pub fn StartupError(message: &'static str) -> impl IntoView {
    view! {
        <div class="startup-error">
            <p>{message}</p>
        </div>
    }
}

/// 生成失敗画面。唯一の復帰操作はフルリセット
#[component]
fn ErrorNotice<F>(message: Memo<Option<String>>, on_retry: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    let i18n = expect_context::<I18n>();

    view! {
        <div class="panel error-panel">
            <p class="error-text">{move || message.get().unwrap_or_default()}</p>
            <button class="btn btn-primary" on:click=move |_| on_retry(())>
                {move || i18n.t("common.tryAgain")}
            </button>
        </div>
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App(translations: Translations) -> impl IntoView {
    let i18n = I18n::new(translations);
    provide_context(i18n);

    let session = RwSignal::new(Session::new());

    // 画面コンポーネントに渡す読み取りスライス。Memoで切り出すことで
    // 買い物リストの変更が調理画面を作り直す、といった巻き添え再描画を防ぐ
    let current_view = Memo::new(move |_| session.with(|s| s.view()));
    let is_loading = Memo::new(move |_| session.with(|s| s.is_loading()));
    let error = Memo::new(move |_| session.with(|s| s.error().map(str::to_string)));
    let ingredients = Memo::new(move |_| session.with(|s| s.ingredients().to_vec()));
    let recipes = Memo::new(move |_| session.with(|s| s.recipes().to_vec()));
    let cooking_recipe = Memo::new(move |_| session.with(|s| s.selected_recipe().cloned()));
    let shopping_items = Memo::new(move |_| session.with(|s| s.shopping_list().to_vec()));
    let filters = Memo::new(move |_| session.with(|s| s.filters().to_vec()));

    // 生成呼び出し。begin_generationが返すトークンで完了時に
    // 突き合わせ、リセット後や新しい呼び出し後の古いレスポンスを捨てる
    let analyze = move |image: String| {
        let Some(token) = session.try_update(|s| s.begin_generation(image.clone())) else {
            return;
        };
        let filters = session.with_untracked(|s| s.filters().to_vec());
        let language = i18n.language();

        spawn_local(async move {
            match gemini::generate_recipes(&image, &filters, language).await {
                Ok(result) => session.update(|s| s.finish_generation(token, result)),
                Err(err) => {
                    gloo::console::error!(format!("generation failed: {:?}", err));
                    let message = i18n.t("app.error.generateRecipes");
                    session.update(|s| s.fail_generation(token, message));
                }
            }
        });
    };

    // フィルタ変更: 画像を保持していれば同じ画像で生成をやり直す
    // （成功時はConfirmIngredientsに着地し、材料確認を再度挟む）
    let on_filter_change = move |new_filters: Vec<String>| {
        let image = session.try_update(|s| s.set_filters(new_filters)).flatten();
        if let Some(image) = image {
            analyze(image);
        }
    };

    let on_confirm = move |_: ()| session.update(|s| s.confirm_ingredients());
    let on_reset = move |_: ()| session.update(|s| s.reset());
    let on_select_recipe = move |index: usize| session.update(|s| s.select_recipe(index));
    let on_exit_cooking = move |_: ()| session.update(|s| s.exit_cooking());
    let on_add_item = move |item: String| session.update(|s| s.add_to_shopping_list(item));
    let on_remove_item = move |item: String| session.update(|s| s.remove_from_shopping_list(&item));
    let on_show_recipes = move |_: ()| session.update(|s| s.show_recipe_flow());
    let on_show_shopping = move |_: ()| session.update(|s| s.open_shopping());

    view! {
        <div class="app-shell">
            <Header
                current_view=current_view
                on_show_recipes=on_show_recipes
                on_show_shopping=on_show_shopping
            />
            <main class="main-content">
                <div class="layout">
                    <Show when=move || current_view.get() == View::Recipes && !is_loading.get()>
                        <FilterSidebar selected_filters=filters on_change=on_filter_change />
                    </Show>
                    <div class="content-area">
                        {move || {
                            if is_loading.get() {
                                return view! {
                                    <div class="spinner-wrap">
                                        <Spinner />
                                    </div>
                                }
                                .into_any();
                            }
                            if error.get().is_some() {
                                return view! { <ErrorNotice message=error on_retry=on_reset /> }
                                    .into_any();
                            }
                            match current_view.get() {
                                View::Upload => {
                                    view! { <ImageUpload on_image_upload=analyze /> }.into_any()
                                }
                                View::ConfirmIngredients => view! {
                                    <IngredientConfirmation
                                        ingredients=ingredients
                                        on_confirm=on_confirm
                                        on_reset=on_reset
                                    />
                                }
                                .into_any(),
                                View::Recipes => view! {
                                    <RecipeList
                                        recipes=recipes
                                        on_select=on_select_recipe
                                        on_reset=on_reset
                                    />
                                }
                                .into_any(),
                                View::Cooking => view! {
                                    <CookingMode
                                        recipe=cooking_recipe
                                        on_exit=on_exit_cooking
                                        on_add_item=on_add_item
                                    />
                                }
                                .into_any(),
                                View::Shopping => view! {
                                    <ShoppingList items=shopping_items on_remove=on_remove_item />
                                }
                                .into_any(),
                            }
                        }}
                    </div>
                </div>
            </main>
        </div>
    }
}
