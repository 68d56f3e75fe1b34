//! 調理モードコンポーネント
//!
//! ステップ送りと読み上げトグルを持つ。現在ステップは画面ローカルの
//! 一時状態で、共有されない。読み上げはステップ移動・退出・
//! アンマウントのいずれでも必ずキャンセルされる。
//!
//! レシピが選択されていなければ何も描画しない（正常系では通らない
//! 防御分岐）

use leptos::prelude::*;

use recipe_ai_common::Recipe;

use crate::i18n::I18n;
use crate::speech;

#[component]
pub fn CookingMode<FE, FA>(
    recipe: Memo<Option<Recipe>>,
    on_exit: FE,
    on_add_item: FA,
) -> impl IntoView
where
    FE: Fn(()) + 'static + Clone + Send + Sync,
    FA: Fn(String) + 'static + Clone + Send + Sync,
{
    let i18n = expect_context::<I18n>();
    let (current_step, set_current_step) = signal(0usize);
    let (is_speaking, set_is_speaking) = signal(false);

    // アンマウント時は読み上げを必ず止める
    on_cleanup(move || speech::cancel(set_is_speaking));

    view! {
        {move || recipe.get().map(|recipe| {
            let step_count = recipe.steps.len();
            let steps_for_speech = recipe.steps.clone();
            let steps_for_display = recipe.steps.clone();

            let on_prev = move |_| {
                speech::cancel(set_is_speaking);
                set_current_step.update(|s| *s = s.saturating_sub(1));
            };
            let on_next = move |_| {
                speech::cancel(set_is_speaking);
                set_current_step.update(|s| {
                    if *s + 1 < step_count {
                        *s += 1;
                    }
                });
            };
            let on_speak = move |_| {
                if is_speaking.get_untracked() {
                    speech::cancel(set_is_speaking);
                } else if let Some(text) = steps_for_speech.get(current_step.get_untracked()) {
                    speech::speak(text, i18n.language().speech_tag(), set_is_speaking);
                }
            };
            let on_exit = on_exit.clone();
            let on_add_item = on_add_item.clone();

            let image = match recipe.image_url.clone() {
                Some(url) => view! { <img class="cooking-image" src=url alt=recipe.name.clone() /> }.into_any(),
                None => view! { <div class="cooking-image card-image-placeholder">"🍳"</div> }.into_any(),
            };

            view! {
                <div class="panel cooking-panel">
                    <div class="cooking-header">
                        <div>
                            <h2>{recipe.name.clone()}</h2>
                            <p class="text-muted">{recipe.description.clone()}</p>
                        </div>
                        <button
                            class="btn btn-link"
                            on:click=move |_| {
                                speech::cancel(set_is_speaking);
                                on_exit(())
                            }
                        >
                            {move || i18n.t("cookingMode.exit")}
                        </button>
                    </div>

                    <div class="cooking-layout">
                        <div class="cooking-sidebar">
                            {image}
                            <h3>{move || i18n.t("cookingMode.ingredients")}</h3>
                            <ul class="ingredient-list">
                                {recipe.ingredients.iter().map(|ing| view! {
                                    <li>
                                        <span class="ing-name">{ing.name.clone()}</span>
                                        <span class="ing-quantity">{ing.quantity.clone()}</span>
                                    </li>
                                }).collect_view()}
                            </ul>

                            {(!recipe.missing_ingredients.is_empty()).then(|| view! {
                                <div class="missing-box">
                                    <h4>{move || i18n.t("cookingMode.missingIngredients")}</h4>
                                    <ul class="missing-list">
                                        {recipe.missing_ingredients.iter().map(|item| {
                                            let on_add_item = on_add_item.clone();
                                            let item = item.clone();
                                            let label = item.clone();
                                            view! {
                                                <li class="missing-item">
                                                    <span>{label}</span>
                                                    <button
                                                        class="btn-icon"
                                                        title=move || i18n.t("cookingMode.addToShoppingList")
                                                        on:click=move |_| on_add_item(item.clone())
                                                    >
                                                        "+"
                                                    </button>
                                                </li>
                                            }
                                        }).collect_view()}
                                    </ul>
                                </div>
                            })}
                        </div>

                        <div class="cooking-steps">
                            <div class="step-box">
                                <div class="step-header">
                                    <p class="step-counter">
                                        {move || i18n.t_with(
                                            "cookingMode.step",
                                            &[
                                                ("current", (current_step.get() + 1).to_string()),
                                                ("total", step_count.to_string()),
                                            ],
                                        )}
                                    </p>
                                    <button
                                        class="btn-icon speak-btn"
                                        class:speaking=move || is_speaking.get()
                                        on:click=on_speak
                                    >
                                        "🔊"
                                    </button>
                                </div>
                                <p class="step-text">
                                    {move || steps_for_display
                                        .get(current_step.get())
                                        .cloned()
                                        .unwrap_or_default()}
                                </p>
                            </div>

                            <div class="step-nav">
                                <button
                                    class="btn btn-secondary"
                                    disabled=move || current_step.get() == 0
                                    on:click=on_prev
                                >
                                    {move || i18n.t("common.previous")}
                                </button>
                                <button
                                    class="btn btn-primary"
                                    disabled={move || step_count == 0 || current_step.get() + 1 >= step_count}
                                    on:click=on_next
                                >
                                    {move || i18n.t("common.next")}
                                </button>
                            </div>
                        </div>
                    </div>
                </div>
            }
        })}
    }
}
