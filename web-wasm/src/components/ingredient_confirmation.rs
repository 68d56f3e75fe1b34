//! 材料確認コンポーネント
//!
//! 生成が識別した材料をチップで見せて確認を取る。生成のたびに必ず
//! 通るステップ（フィルタ変更後の再生成でも同じ）

use leptos::prelude::*;

use crate::i18n::I18n;

#[component]
pub fn IngredientConfirmation<FC, FR>(
    ingredients: Memo<Vec<String>>,
    on_confirm: FC,
    on_reset: FR,
) -> impl IntoView
where
    FC: Fn(()) + 'static + Clone + Send + Sync,
    FR: Fn(()) + 'static + Clone + Send + Sync,
{
    let i18n = expect_context::<I18n>();

    view! {
        <div class="panel confirm-panel">
            <h2>{move || i18n.t("ingredientConfirmation.title")}</h2>
            <p class="text-muted">{move || i18n.t("ingredientConfirmation.description")}</p>

            <div class="ingredient-chips">
                <Show
                    when=move || !ingredients.get().is_empty()
                    fallback=move || view! {
                        <p class="text-muted">{move || i18n.t("ingredientConfirmation.noIngredients")}</p>
                    }
                >
                    <For
                        each=move || ingredients.get()
                        key=|item| item.clone()
                        children=move |item: String| view! { <span class="chip">{item}</span> }
                    />
                </Show>
            </div>

            <div class="button-row">
                <button
                    class="btn btn-secondary"
                    on:click={
                        let on_reset = on_reset.clone();
                        move |_| on_reset(())
                    }
                >
                    {move || i18n.t("common.startOver")}
                </button>
                <button
                    class="btn btn-primary"
                    on:click={
                        let on_confirm = on_confirm.clone();
                        move |_| on_confirm(())
                    }
                >
                    {move || i18n.t("ingredientConfirmation.continueButton")}
                </button>
            </div>
        </div>
    }
}
