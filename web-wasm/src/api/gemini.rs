//! Gemini API連携（レシピ生成）
//!
//! 冷蔵庫写真＋指示文を1回のリクエストで送信し、厳密な出力スキーマを
//! 宣言してGeneratedRecipesを受け取る。リトライ・ストリーミングなし。
//! トランスポート失敗・非2xx・スキーマ不一致はすべて呼び出し側には
//! 単一の「生成失敗」として扱われる。

use serde::{Deserialize, Serialize};
use serde_json::json;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use recipe_ai_common::{build_generation_prompt, parse_generation_response, GeneratedRecipes, Language};

const GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent";

/// ビルド時に注入されるAPIキー（外部プロビジョニング）
const API_KEY: Option<&str> = option_env!("GEMINI_API_KEY");

/// 設定済みAPIキー。未設定なら起動時エラーにする
pub fn api_key() -> Option<&'static str> {
    API_KEY
}

/// Gemini APIリクエスト
#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
    #[serde(rename = "responseSchema")]
    response_schema: serde_json::Value,
}

/// Gemini APIレスポンス
#[derive(Deserialize)]
struct GeminiResponse {
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: ResponseContent,
}

#[derive(Deserialize)]
struct ResponseContent {
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: String,
}

/// 出力スキーマ宣言
///
/// identifiedIngredientsとrecipesの2キーを持つオブジェクトを厳密に
/// 要求する。imageUrlのみオプション
fn response_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "identifiedIngredients": {
                "type": "ARRAY",
                "description": "A list of all ingredients identified in the image.",
                "items": { "type": "STRING" }
            },
            "recipes": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING", "description": "The title of the recipe." },
                        "description": { "type": "STRING", "description": "A brief, appealing description of the dish." },
                        "difficulty": { "type": "STRING", "description": "Difficulty level: 'Easy', 'Medium', or 'Hard'." },
                        "prepTime": { "type": "STRING", "description": "Estimated preparation and cooking time, e.g., '45 minutes'." },
                        "calories": { "type": "INTEGER", "description": "Estimated calorie count per serving." },
                        "imageUrl": { "type": "STRING", "description": "A URL to a high-quality, royalty-free image of the finished dish." },
                        "ingredients": {
                            "type": "ARRAY",
                            "description": "List of all ingredients required for the recipe.",
                            "items": {
                                "type": "OBJECT",
                                "properties": {
                                    "name": { "type": "STRING" },
                                    "quantity": { "type": "STRING" }
                                },
                                "required": ["name", "quantity"]
                            }
                        },
                        "missingIngredients": {
                            "type": "ARRAY",
                            "description": "A list of essential ingredients for the recipe that were NOT identified in the image.",
                            "items": { "type": "STRING" }
                        },
                        "steps": {
                            "type": "ARRAY",
                            "description": "Step-by-step cooking instructions.",
                            "items": { "type": "STRING" }
                        }
                    },
                    "required": ["name", "description", "difficulty", "prepTime", "calories", "ingredients", "missingIngredients", "steps"]
                }
            }
        },
        "required": ["identifiedIngredients", "recipes"]
    })
}

/// Data URLからBase64データ部分を抽出
///
/// # Arguments
/// * `data_url` - "data:image/jpeg;base64,/9j/4AAQ..." 形式のData URL
///
/// # Returns
/// Base64エンコードされたデータ部分、または抽出失敗時はNone
pub fn extract_base64_from_data_url(data_url: &str) -> Option<&str> {
    data_url.split(',').nth(1)
}

/// Data URLからMIMEタイプを抽出
///
/// # Arguments
/// * `data_url` - "data:image/jpeg;base64,..." 形式のData URL
///
/// # Returns
/// MIMEタイプ（例: "image/jpeg"）、抽出失敗時は"image/jpeg"をデフォルトとして返す
pub fn extract_mime_type_from_data_url(data_url: &str) -> &str {
    data_url
        .split(':')
        .nth(1)
        .and_then(|s| s.split(';').next())
        .unwrap_or("image/jpeg")
}

/// Gemini API呼び出し（1リクエスト＝1試行）
async fn call_gemini_api(api_key: &str, request: &GeminiRequest) -> Result<String, JsValue> {
    let url = format!("{}?key={}", GEMINI_API_URL, api_key);
    let body = serde_json::to_string(request).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(&url, &opts)?;
    request.headers().set("Content-Type", "application/json")?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!("API error: {}", resp.status())));
    }

    let json = JsFuture::from(resp.json()?).await?;
    let response: GeminiResponse = serde_wasm_bindgen::from_value(json)?;

    response
        .candidates
        .first()
        .and_then(|c| c.content.parts.first())
        .map(|p| p.text.clone())
        .ok_or_else(|| JsValue::from_str("Empty response"))
}

/// レシピ生成
///
/// 画像・アクティブフィルタ・ターゲット言語からリクエストを組み立て、
/// 材料リストとレシピ群を返す
///
/// # Arguments
/// * `image_data_url` - 冷蔵庫写真のData URL
/// * `filters` - アクティブな食事制限フィルタ
/// * `language` - ターゲット言語
///
/// # Returns
/// GeneratedRecipes（difficultyは正規化済み）
pub async fn generate_recipes(
    image_data_url: &str,
    filters: &[String],
    language: Language,
) -> Result<GeneratedRecipes, JsValue> {
    let api_key = api_key().ok_or_else(|| JsValue::from_str("API key is not configured"))?;

    let base64_data = extract_base64_from_data_url(image_data_url)
        .ok_or_else(|| JsValue::from_str("Invalid data URL"))?;
    let mime_type = extract_mime_type_from_data_url(image_data_url);

    let request = GeminiRequest {
        contents: vec![Content {
            parts: vec![
                Part::Text {
                    text: build_generation_prompt(language, filters),
                },
                Part::InlineData {
                    inline_data: InlineData {
                        mime_type: mime_type.to_string(),
                        data: base64_data.to_string(),
                    },
                },
            ],
        }],
        generation_config: GenerationConfig {
            response_mime_type: "application/json".to_string(),
            response_schema: response_schema(),
        },
    };

    let response_text = call_gemini_api(api_key, &request).await?;

    parse_generation_response(&response_text)
        .map_err(|e| JsValue::from_str(&format!("Generation parse error: {}", e)))
}
