//! セッション状態（画面フローコントローラ）
//!
//! アプリの可変状態を一元的に所有する:
//! - 表示中の画面（View）
//! - 撮影画像 → 識別済み材料 → レシピ群 → 選択レシピ → 買い物リスト
//!   と画面間を流れるデータ
//!
//! 遷移ルール:
//! - 生成成功は常にConfirmIngredientsに着地する（フィルタ変更後の
//!   再生成でも同じ。材料確認ステップを必ず挟む）
//! - 生成失敗はエラーを記録し、復帰手段はリセットのみ
//! - リセットは買い物リスト以外の全データを消す
//! - Shoppingからの戻り先は保存せず、現在のデータから再計算する
//!
//! 生成呼び出しには連番トークンを発行し、リセット後や新しい呼び出しの
//! 後に届いた古いレスポンスを破棄する。

use crate::types::{GeneratedRecipes, Recipe};

/// 表示中の画面
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Upload,
    ConfirmIngredients,
    Recipes,
    Cooking,
    Shopping,
}

/// セッション状態
///
/// 単一オーナー・単一ライター。ミューテーションはすべてここの
/// メソッド経由で行う。選択レシピはインデックスで保持するため、
/// 「選択は常に現在のレシピ群から」という不変条件が構造的に成り立つ。
#[derive(Debug, Clone, Default)]
pub struct Session {
    view: View,
    image: Option<String>,
    ingredients: Vec<String>,
    recipes: Vec<Recipe>,
    selected: Option<usize>,
    shopping_list: Vec<String>,
    filters: Vec<String>,
    loading: bool,
    error: Option<String>,
    generation_seq: u64,
}

impl Session {
    /// 初期状態（View=Upload、コレクションはすべて空）
    pub fn new() -> Self {
        Self::default()
    }

    // =============================================
    // 読み取り
    // =============================================

    pub fn view(&self) -> View {
        self.view
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// 選択中のレシピ
    ///
    /// 未選択またはインデックスが範囲外ならNone（Cooking画面は
    /// このNoneに対して何も描画しない）
    pub fn selected_recipe(&self) -> Option<&Recipe> {
        self.selected.and_then(|i| self.recipes.get(i))
    }

    pub fn shopping_list(&self) -> &[String] {
        &self.shopping_list
    }

    pub fn filters(&self) -> &[String] {
        &self.filters
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Shoppingから「レシピフロー」へ戻る際の行き先を再計算
    ///
    /// レシピがあればRecipes、なければ材料があればConfirmIngredients、
    /// どちらもなければUpload
    pub fn recipe_flow_view(&self) -> View {
        if !self.recipes.is_empty() {
            View::Recipes
        } else if !self.ingredients.is_empty() {
            View::ConfirmIngredients
        } else {
            View::Upload
        }
    }

    // =============================================
    // 生成呼び出しのライフサイクル
    // =============================================

    /// 生成呼び出しの開始
    ///
    /// 画像を保持し、ローディングに入り、直前のエラーを消す。
    /// 返り値のトークンを完了時に突き合わせ、古いレスポンスを弾く。
    ///
    /// # Arguments
    /// * `image` - 画像のData URL
    ///
    /// # Returns
    /// この呼び出しの生成トークン
    pub fn begin_generation(&mut self, image: String) -> u64 {
        self.image = Some(image);
        self.loading = true;
        self.error = None;
        self.generation_seq += 1;
        self.generation_seq
    }

    /// 生成成功
    ///
    /// トークンが古ければ何もしない（リセット後・より新しい呼び出し後に
    /// 届いたレスポンスが消去済み状態を復活させないため）。
    /// 成功時は材料とレシピを保存してConfirmIngredientsに遷移する。
    pub fn finish_generation(&mut self, token: u64, result: GeneratedRecipes) {
        if token != self.generation_seq {
            return;
        }
        self.loading = false;
        self.ingredients = result.identified_ingredients;
        self.recipes = result.recipes;
        self.selected = None;
        self.view = View::ConfirmIngredients;
    }

    /// 生成失敗
    ///
    /// トークンが古ければ何もしない。失敗時はエラーを記録し、
    /// 進行中だった遷移を中断する（復帰手段はリセットのみ）。
    pub fn fail_generation(&mut self, token: u64, message: String) {
        if token != self.generation_seq {
            return;
        }
        self.loading = false;
        self.error = Some(message);
    }

    // =============================================
    // 画面遷移
    // =============================================

    /// 材料確認 → レシピ一覧
    pub fn confirm_ingredients(&mut self) {
        self.view = View::Recipes;
    }

    /// レシピ選択 → 調理画面
    ///
    /// インデックスが現在のレシピ群の範囲内の場合のみ遷移する
    pub fn select_recipe(&mut self, index: usize) {
        if index < self.recipes.len() {
            self.selected = Some(index);
            self.view = View::Cooking;
        }
    }

    /// 調理画面を抜けてレシピ一覧へ。選択をクリアする
    pub fn exit_cooking(&mut self) {
        self.selected = None;
        self.view = View::Recipes;
    }

    /// 買い物リスト画面へ（どの画面からでも可。フローのデータは保持）
    pub fn open_shopping(&mut self) {
        self.view = View::Shopping;
    }

    /// レシピフローへ戻る（行き先は現在のデータから再計算）
    pub fn show_recipe_flow(&mut self) {
        self.view = self.recipe_flow_view();
    }

    /// フィルタ変更
    ///
    /// 新しいフィルタを保存し、画像を保持していればそのData URLを
    /// 返す（呼び出し側が同じ画像で生成をやり直す）。画像がなければ
    /// 再生成は起きない。
    pub fn set_filters(&mut self, filters: Vec<String>) -> Option<String> {
        self.filters = filters;
        self.image.clone()
    }

    /// フルリセット
    ///
    /// 買い物リスト以外の全セッションデータを消す。連番も進め、
    /// 進行中の生成呼び出しのレスポンスを無効化する。
    pub fn reset(&mut self) {
        self.view = View::Upload;
        self.image = None;
        self.ingredients.clear();
        self.recipes.clear();
        self.selected = None;
        self.filters.clear();
        self.loading = false;
        self.error = None;
        self.generation_seq += 1;
    }

    // =============================================
    // 買い物リスト（セッションフローとは独立のライフサイクル）
    // =============================================

    /// 買い物リストに追加（挿入順保持・重複なし）
    pub fn add_to_shopping_list(&mut self, item: String) {
        if !self.shopping_list.contains(&item) {
            self.shopping_list.push(item);
        }
    }

    /// 買い物リストから削除（存在しなければ何もしない）
    pub fn remove_from_shopping_list(&mut self, item: &str) {
        self.shopping_list.retain(|i| i != item);
    }
}
