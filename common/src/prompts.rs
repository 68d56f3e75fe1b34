//! プロンプト生成モジュール
//!
//! 生成APIに送る指示文の組み立て:
//! - DIETARY_OPTIONS: 食事制限フィルタの定数
//! - build_generation_prompt: 言語別（英語／トルコ語）の指示文生成

use crate::i18n::Language;

/// 食事制限フィルタの選択肢（UIのチェックボックスと一致）
pub const DIETARY_OPTIONS: &[&str] = &["Vegetarian", "Vegan", "Gluten-Free", "Keto", "Dairy-Free"];

/// フィルタ節の生成
///
/// フィルタなしなら「制限なし」、ありなら列挙して全レシピの
/// 準拠をモデルに指示する文を言語別に返す
fn build_filter_clause(language: Language, filters: &[String]) -> String {
    if filters.is_empty() {
        return match language {
            Language::Tr => "Beslenme kısıtlaması yok.".to_string(),
            Language::En => "There are no dietary restrictions.".to_string(),
        };
    }

    let list = filters.join(", ");
    match language {
        Language::Tr => format!(
            "Kullanıcının şu beslenme kısıtlamaları var: {}. Lütfen tüm tariflerin bunlara uygun olduğundan emin olun.",
            list
        ),
        Language::En => format!(
            "The user has the following dietary restrictions: {}. Please ensure all recipes adhere to these.",
            list
        ),
    }
}

/// 生成用プロンプトの組み立て
///
/// 冷蔵庫写真の材料識別＋レシピ提案を指示する固定テンプレート。
/// 言語ごとに2種類あり、フィルタ節だけが可変。
///
/// # Arguments
/// * `language` - ターゲット言語（レシピ本文の言語も決める）
/// * `filters` - アクティブな食事制限フィルタ
///
/// # Returns
/// 生成API用のプロンプト文字列
pub fn build_generation_prompt(language: Language, filters: &[String]) -> String {
    let filter_clause = build_filter_clause(language, filters);

    match language {
        Language::Tr => format!(
            r#"Bu buzdolabı fotoğrafındaki malzemeleri analiz et.
İlk olarak, resimde tanımlayabildiğin tüm malzemelerin bir listesini oluştur.
Ardından, bu malzemelere dayanarak, özellikle Türk mutfağına özgü 3 ila 5 yaratıcı yemek tarifi öner.
Her tarif için açıklama, zorluk, hazırlık süresi, kalori, tam bir malzeme listesi, eksik olan temel malzemelerin özel bir listesi ve adım adım talimatlar içeren ayrıntılı bir döküm sağla. Mümkünse, bitmiş yemeğin yüksek kaliteli, telifsiz bir resminin URL'sini de ekle.
{filter_clause}
Cevabı, 'identifiedIngredients' (bir string dizisi) ve 'recipes' (tarif nesneleri dizisi) olmak üzere iki anahtarı olan tek bir JSON nesnesi olarak, sağlanan şemaya sıkı sıkıya uyarak döndür. Tüm metin alanları Türkçe olmalıdır."#
        ),
        Language::En => format!(
            r#"Analyze the ingredients in this image of a refrigerator.
First, provide a list of all the ingredients you can identify in the image.
Then, based on those ingredients, suggest 3 to 5 creative recipes, focusing on dishes popular in Western cuisine (e.g., American, British).
For each recipe, provide a detailed breakdown including a description, difficulty, prep time, calories, a full list of ingredients, a specific list of missing essential ingredients, and step-by-step instructions. If possible, also include a URL for a high-quality, royalty-free image of the finished dish.
{filter_clause}
Return the response as a single JSON object with two keys: 'identifiedIngredients' (an array of strings) and 'recipes' (an array of recipe objects), strictly following the provided schema."#
        ),
    }
}
