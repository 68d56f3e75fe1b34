//! レシピ生成結果の型定義
//!
//! Web(WASM)とテストから利用される型:
//! - Ingredient: 材料（名前＋分量）
//! - Difficulty: 難易度（受信時に正規化される）
//! - Recipe: 生成されたレシピ1件
//! - GeneratedRecipes: 生成呼び出し1回分の結果

use serde::{Deserialize, Serialize};

/// レシピの材料（名前＋分量）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Ingredient {
    pub name: String,
    pub quantity: String,
}

/// レシピの難易度
///
/// モデルの出力は自由形式の文字列で届くため、デシリアライズ時に
/// 英語・トルコ語の表記を大文字小文字を区別せずマッピングする。
/// 未知の値はMediumに倒す（これが唯一の防御的正規化）。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// 文字列ラベルから難易度を解決
    ///
    /// # Arguments
    /// * `label` - モデルが返した難易度文字列（"easy", "Zor" など）
    ///
    /// # Returns
    /// 対応する難易度。未知の値はMedium
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "easy" | "kolay" => Difficulty::Easy,
            "medium" | "orta" => Difficulty::Medium,
            "hard" | "zor" => Difficulty::Hard,
            _ => Difficulty::Medium,
        }
    }

    /// 翻訳キー用の小文字ラベル（"recipeCard.difficulty.easy" など）
    pub fn key(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl From<String> for Difficulty {
    fn from(label: String) -> Self {
        Difficulty::from_label(&label)
    }
}

/// 生成されたレシピ1件
///
/// difficulty以外のフィールドは受信値をそのまま信頼する。
/// imageUrlのみスキーマ上オプション。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub name: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub prep_time: String,
    pub calories: u32,
    pub ingredients: Vec<Ingredient>,
    pub missing_ingredients: Vec<String>,
    pub steps: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// 生成呼び出し1回分の結果
///
/// identifiedIngredientsとrecipesはどちらも必須。
/// 欠落はパース失敗＝生成失敗として扱う（部分復旧しない）。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedRecipes {
    pub identified_ingredients: Vec<String>,
    pub recipes: Vec<Recipe>,
}

#[cfg(test)]
mod tests {
    use super::*;

    // =============================================
    // Difficulty 正規化テスト
    // =============================================

    #[test]
    fn test_difficulty_from_label_english() {
        assert_eq!(Difficulty::from_label("easy"), Difficulty::Easy);
        assert_eq!(Difficulty::from_label("Easy"), Difficulty::Easy);
        assert_eq!(Difficulty::from_label("medium"), Difficulty::Medium);
        assert_eq!(Difficulty::from_label("Medium"), Difficulty::Medium);
        assert_eq!(Difficulty::from_label("hard"), Difficulty::Hard);
        assert_eq!(Difficulty::from_label("Hard"), Difficulty::Hard);
    }

    #[test]
    fn test_difficulty_from_label_turkish() {
        assert_eq!(Difficulty::from_label("kolay"), Difficulty::Easy);
        assert_eq!(Difficulty::from_label("Kolay"), Difficulty::Easy);
        assert_eq!(Difficulty::from_label("orta"), Difficulty::Medium);
        assert_eq!(Difficulty::from_label("Orta"), Difficulty::Medium);
        assert_eq!(Difficulty::from_label("zor"), Difficulty::Hard);
        assert_eq!(Difficulty::from_label("Zor"), Difficulty::Hard);
    }

    #[test]
    fn test_difficulty_from_label_unknown_defaults_to_medium() {
        assert_eq!(Difficulty::from_label("extreme"), Difficulty::Medium);
        assert_eq!(Difficulty::from_label(""), Difficulty::Medium);
        assert_eq!(Difficulty::from_label("簡単"), Difficulty::Medium);
    }

    #[test]
    fn test_difficulty_from_label_whitespace() {
        assert_eq!(Difficulty::from_label(" zor "), Difficulty::Hard);
    }

    #[test]
    fn test_difficulty_serialize() {
        let json = serde_json::to_string(&Difficulty::Easy).expect("シリアライズ失敗");
        assert_eq!(json, "\"Easy\"");
        let json = serde_json::to_string(&Difficulty::Hard).expect("シリアライズ失敗");
        assert_eq!(json, "\"Hard\"");
    }

    #[test]
    fn test_difficulty_deserialize_normalizes() {
        let d: Difficulty = serde_json::from_str("\"kolay\"").expect("デシリアライズ失敗");
        assert_eq!(d, Difficulty::Easy);
        let d: Difficulty = serde_json::from_str("\"EXTREME\"").expect("デシリアライズ失敗");
        assert_eq!(d, Difficulty::Medium);
    }

    #[test]
    fn test_difficulty_key() {
        assert_eq!(Difficulty::Easy.key(), "easy");
        assert_eq!(Difficulty::Medium.key(), "medium");
        assert_eq!(Difficulty::Hard.key(), "hard");
    }

    // =============================================
    // Recipe テスト
    // =============================================

    fn sample_recipe_json() -> &'static str {
        r#"{
            "name": "Menemen",
            "description": "Scrambled eggs with tomatoes and peppers.",
            "difficulty": "kolay",
            "prepTime": "20 minutes",
            "calories": 350,
            "ingredients": [
                {"name": "egg", "quantity": "3"},
                {"name": "tomato", "quantity": "2"}
            ],
            "missingIngredients": ["green pepper"],
            "steps": ["Chop the tomatoes.", "Cook everything."]
        }"#
    }

    #[test]
    fn test_recipe_deserialize() {
        let recipe: Recipe = serde_json::from_str(sample_recipe_json()).expect("デシリアライズ失敗");
        assert_eq!(recipe.name, "Menemen");
        assert_eq!(recipe.difficulty, Difficulty::Easy);
        assert_eq!(recipe.prep_time, "20 minutes");
        assert_eq!(recipe.calories, 350);
        assert_eq!(recipe.ingredients.len(), 2);
        assert_eq!(recipe.ingredients[0].name, "egg");
        assert_eq!(recipe.missing_ingredients, vec!["green pepper"]);
        assert_eq!(recipe.steps.len(), 2);
        assert_eq!(recipe.image_url, None);
    }

    #[test]
    fn test_recipe_deserialize_with_image_url() {
        let json = r#"{
            "name": "Pancakes",
            "description": "Fluffy pancakes.",
            "difficulty": "Easy",
            "prepTime": "15 minutes",
            "calories": 420,
            "ingredients": [],
            "missingIngredients": [],
            "steps": ["Mix.", "Fry."],
            "imageUrl": "https://example.com/pancakes.jpg"
        }"#;

        let recipe: Recipe = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(
            recipe.image_url.as_deref(),
            Some("https://example.com/pancakes.jpg")
        );
    }

    #[test]
    fn test_recipe_deserialize_missing_required_field() {
        // nameが欠けているレシピはパース失敗
        let json = r#"{
            "description": "No name.",
            "difficulty": "Easy",
            "prepTime": "5 minutes",
            "calories": 100,
            "ingredients": [],
            "missingIngredients": [],
            "steps": []
        }"#;

        assert!(serde_json::from_str::<Recipe>(json).is_err());
    }

    #[test]
    fn test_recipe_serialize_camel_case() {
        let recipe = Recipe {
            name: "Toast".to_string(),
            prep_time: "5 minutes".to_string(),
            missing_ingredients: vec!["butter".to_string()],
            ..Default::default()
        };

        let json = serde_json::to_string(&recipe).expect("シリアライズ失敗");
        assert!(json.contains("\"prepTime\":\"5 minutes\""));
        assert!(json.contains("\"missingIngredients\":[\"butter\"]"));
        assert!(json.contains("\"difficulty\":\"Medium\""));
        assert!(!json.contains("imageUrl"));
    }

    // =============================================
    // GeneratedRecipes テスト
    // =============================================

    #[test]
    fn test_generated_recipes_deserialize() {
        let json = format!(
            r#"{{"identifiedIngredients": ["egg", "tomato"], "recipes": [{}]}}"#,
            sample_recipe_json()
        );

        let result: GeneratedRecipes = serde_json::from_str(&json).expect("デシリアライズ失敗");
        assert_eq!(result.identified_ingredients, vec!["egg", "tomato"]);
        assert_eq!(result.recipes.len(), 1);
    }

    #[test]
    fn test_generated_recipes_missing_key_is_error() {
        // どちらのキーも必須。欠落は部分復旧せずエラー
        let json = r#"{"recipes": []}"#;
        assert!(serde_json::from_str::<GeneratedRecipes>(json).is_err());

        let json = r#"{"identifiedIngredients": []}"#;
        assert!(serde_json::from_str::<GeneratedRecipes>(json).is_err());
    }

    #[test]
    fn test_generated_recipes_empty_collections() {
        let json = r#"{"identifiedIngredients": [], "recipes": []}"#;
        let result: GeneratedRecipes = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert!(result.identified_ingredients.is_empty());
        assert!(result.recipes.is_empty());
    }
}
