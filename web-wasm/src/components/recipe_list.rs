//! レシピ一覧コンポーネント
//!
//! レシピ群が空のときは「見つからない」分岐＋やり直しボタンを描画する
//! （エラーではない）

use leptos::prelude::*;

use recipe_ai_common::Recipe;

use crate::i18n::I18n;

#[component]
pub fn RecipeList<FS, FR>(recipes: Memo<Vec<Recipe>>, on_select: FS, on_reset: FR) -> impl IntoView
where
    FS: Fn(usize) + 'static + Clone + Send + Sync,
    FR: Fn(()) + 'static + Clone + Send + Sync,
{
    let i18n = expect_context::<I18n>();

    view! {
        <Show
            when=move || !recipes.get().is_empty()
            fallback={
                let on_reset = on_reset.clone();
                move || view! {
                    <div class="panel not-found">
                        <h2>{move || i18n.t("recipeList.notFound.title")}</h2>
                        <p class="text-muted">{move || i18n.t("recipeList.notFound.description")}</p>
                        <button
                            class="btn btn-primary"
                            on:click={
                                let on_reset = on_reset.clone();
                                move |_| on_reset(())
                            }
                        >
                            {move || i18n.t("common.startOver")}
                        </button>
                    </div>
                }
            }
        >
            <div class="recipe-list">
                <div class="list-header">
                    <h2>{move || i18n.t("recipeList.title")}</h2>
                    <button
                        class="btn btn-secondary btn-small"
                        on:click={
                            let on_reset = on_reset.clone();
                            move |_| on_reset(())
                        }
                    >
                        {move || i18n.t("common.startOver")}
                    </button>
                </div>
                <div class="recipe-grid">
                    <For
                        each={move || recipes.get().into_iter().enumerate().collect::<Vec<_>>()}
                        key=|(index, recipe)| (*index, recipe.name.clone())
                        children={
                            let on_select = on_select.clone();
                            move |(index, recipe): (usize, Recipe)| {
                                let on_select = on_select.clone();
                                view! {
                                    <RecipeCard recipe=recipe on_select=move |_| on_select(index) />
                                }
                            }
                        }
                    />
                </div>
            </div>
        </Show>
    }
}

/// レシピカード（一覧の1枚）
#[component]
fn RecipeCard<F>(recipe: Recipe, on_select: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    let i18n = expect_context::<I18n>();
    let difficulty = recipe.difficulty;

    let image = match recipe.image_url.clone() {
        Some(url) => view! { <img class="card-image" src=url alt=recipe.name.clone() /> }.into_any(),
        None => view! { <div class="card-image card-image-placeholder">"🍳"</div> }.into_any(),
    };

    view! {
        <div class="recipe-card" on:click=move |_| on_select(())>
            {image}
            <div class="card-body">
                <h3>{recipe.name.clone()}</h3>
                <p class="text-muted">{recipe.description.clone()}</p>
            </div>
            <div class="card-meta">
                <div class="meta-row">
                    <span>{move || i18n.t("recipeCard.difficulty.label")}</span>
                    <span class=format!("badge badge-{}", difficulty.key())>
                        {move || i18n.t(&format!("recipeCard.difficulty.{}", difficulty.key()))}
                    </span>
                </div>
                <div class="meta-row">
                    <span>{move || i18n.t("recipeCard.prepTime")}</span>
                    <span class="meta-value">{recipe.prep_time.clone()}</span>
                </div>
                <div class="meta-row">
                    <span>{move || i18n.t("recipeCard.calories")}</span>
                    <span class="meta-value">{format!("{} kcal", recipe.calories)}</span>
                </div>
            </div>
        </div>
    }
}
