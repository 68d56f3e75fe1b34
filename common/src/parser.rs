//! 生成レスポンスパーサー
//!
//! モデルのレスポンステキストからJSONオブジェクトを抽出し、
//! GeneratedRecipesとしてパースする

use crate::error::{Error, Result};
use crate::types::GeneratedRecipes;

/// レスポンスからJSONオブジェクト部分を抽出
///
/// 抽出優先順位:
/// 1. ```json ... ``` ブロック
/// 2. 生の {...} オブジェクト
/// 3. エラー
///
/// # Arguments
/// * `response` - モデルのレスポンス文字列
///
/// # Returns
/// * `Ok(&str)` - 抽出されたJSON文字列
/// * `Err` - JSONが見つからない場合
///
/// # Examples
/// ```
/// use recipe_ai_common::extract_json;
///
/// let response = r#"{"identifiedIngredients": [], "recipes": []}"#;
/// let json = extract_json(response).unwrap();
/// assert!(json.contains("recipes"));
/// ```
pub fn extract_json(response: &str) -> Result<&str> {
    // ```json ... ``` ブロックを探す
    if let Some(start_marker) = response.find("```json") {
        let start = start_marker + 7; // "```json" の長さ
        if let Some(end_offset) = response[start..].find("```") {
            let end = start + end_offset;
            return Ok(response[start..end].trim());
        }
    }

    // 生の {...} を探す
    if let Some(start) = response.find('{') {
        if let Some(end) = response.rfind('}') {
            if end >= start {
                return Ok(&response[start..=end]);
            }
        }
    }

    Err(Error::Parse("JSONが見つかりません".into()))
}

/// 生成レスポンスをパース
///
/// 材料リストとレシピ配列（GeneratedRecipes）をパースする。
/// difficultyの正規化はDifficultyのデシリアライズで行われるため、
/// ここを通った結果は常にEasy/Medium/Hardのいずれかになっている。
///
/// # Arguments
/// * `response` - 生成APIのレスポンステキスト
///
/// # Returns
/// * `Ok(GeneratedRecipes)` - パース成功
/// * `Err` - JSONが見つからないかスキーマ不一致
pub fn parse_generation_response(response: &str) -> Result<GeneratedRecipes> {
    let json_str = extract_json(response)?;
    let result: GeneratedRecipes = serde_json::from_str(json_str.trim())
        .map_err(|e| Error::Parse(format!("生成結果のJSONパースエラー: {}", e)))?;
    Ok(result)
}
