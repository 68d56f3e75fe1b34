//! 食事制限フィルタコンポーネント
//!
//! レシピ一覧表示中だけ出るサイドバー。チェック変更は新しいフィルタ
//! 集合ごとコントローラへ渡す（画像があれば再生成が走る）

use leptos::prelude::*;

use recipe_ai_common::DIETARY_OPTIONS;

use crate::i18n::I18n;

#[component]
pub fn FilterSidebar<F>(selected_filters: Memo<Vec<String>>, on_change: F) -> impl IntoView
where
    F: Fn(Vec<String>) + 'static + Clone + Send + Sync,
{
    let i18n = expect_context::<I18n>();

    view! {
        <aside class="panel filter-sidebar">
            <h3>{move || i18n.t("filter.title")}</h3>
            <div class="filter-options">
                {DIETARY_OPTIONS.iter().map(|option| {
                    let on_change = on_change.clone();
                    let label_key = format!("filter.options.{}", option.to_lowercase().replace('-', ""));

                    let toggle = move |_| {
                        let mut filters = selected_filters.get_untracked();
                        if let Some(pos) = filters.iter().position(|f| f == option) {
                            filters.remove(pos);
                        } else {
                            filters.push(option.to_string());
                        }
                        on_change(filters);
                    };

                    view! {
                        <label class="filter-option">
                            <input
                                type="checkbox"
                                prop:checked=move || selected_filters.get().iter().any(|f| f == option)
                                on:change=toggle
                            />
                            <span>{move || i18n.t(&label_key)}</span>
                        </label>
                    }
                }).collect_view()}
            </div>
        </aside>
    }
}
