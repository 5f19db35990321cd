//! Prompt rendering for the extraction and consolidation passes
//!
//! Both prompt variants embed a literal example of the expected JSON shape
//! so the model's response stays structurally predictable, and both are
//! rendered from the field schema rather than hardcoding field names.

use tender_domain::{ChatRequest, FieldSchema};

/// Builds extraction and consolidation prompts from the field schema
pub struct PromptBuilder {
    field_instructions: String,
    response_format: String,
    summary_char_limit: usize,
}

impl PromptBuilder {
    /// Create a prompt builder for the given schema
    pub fn new(schema: &FieldSchema, summary_char_limit: usize) -> Self {
        Self {
            field_instructions: build_field_instructions(schema),
            response_format: build_response_format(schema),
            summary_char_limit,
        }
    }

    /// The literal JSON example of the expected response shape
    pub fn response_format(&self) -> &str {
        &self.response_format
    }

    /// Render the per-chunk extraction request
    pub fn extraction_request(&self, chunk: &str) -> ChatRequest {
        let system = format!(
            "あなたは入札案件文書の分析を専門とする政府調達のエキスパートです。\n\
             与えられた文書から必要な情報を抽出し、JSONとして構造化されたデータを提供してください。\n\
             \n\
             各フィールドの抽出ルール:\n\
             {field_instructions}\n\
             重要な指示:\n\
             1. 情報が直接的に記載されていない場合でも、文脈や関連する記述から推論してください\n\
             2. 日付や金額は必ず正確に抽出してください\n\
             3. 不明な項目は空欄とせず、可能な限り推測して情報を補完してください\n\
             4. 複数の候補がある場合は、より詳細で具体的な情報を優先してください\n\
             5. 抽出した情報は必ず文書の記載内容に基づいてください\n\
             6. 応答は必ず有効なJSONオブジェクトとして返してください\n\
             \n\
             応答形式:\n\
             {response_format}",
            field_instructions = self.field_instructions,
            response_format = self.response_format,
        );

        let user = format!("以下の文書を分析してください:\n\n{}", chunk);

        ChatRequest::new(system, user)
    }

    /// Render the consolidation request over serialized per-chunk records
    pub fn consolidation_request(&self, records_json: &str) -> ChatRequest {
        let system = "あなたは入札案件の分析結果を統合する専門家です。".to_string();

        let user = format!(
            "複数の分析結果から、最も適切な情報を選択・統合し、有効なJSONとして返してください。\n\
             \n\
             統合のルール:\n\
             1. 各フィールドで最も詳細な情報を優先して選択\n\
             2. 矛盾する情報がある場合は、より信頼性の高い情報を採用\n\
             3. 複数の情報を組み合わせて、より完全な情報となるよう統合\n\
             4. 日付や金額は必ず正確性を確認\n\
             5. 要件概要は重要なポイントを漏らさず{summary_char_limit}文字程度に要約\n\
             \n\
             分析結果:\n\
             {records}\n\
             \n\
             応答形式:\n\
             {response_format}",
            summary_char_limit = self.summary_char_limit,
            records = records_json,
            response_format = self.response_format,
        );

        ChatRequest::new(system, user)
    }
}

/// One instruction block per field: name, keyword hints, extraction rule
fn build_field_instructions(schema: &FieldSchema) -> String {
    let mut instructions = String::new();
    for field in schema.fields() {
        instructions.push_str(&format!(
            "【{}】\n- 探すキーワード: {}\n- 抽出ルール: {}\n",
            field.name,
            field.keywords.join(", "),
            field.extraction_rule,
        ));
    }
    instructions
}

/// Literal example of the expected response shape, in schema order
fn build_response_format(schema: &FieldSchema) -> String {
    let entries: Vec<String> = schema
        .names()
        .map(|name| format!("    \"{name}\": {{\"見出し\": \"{name}\", \"内容\": \"\"}}"))
        .collect();

    format!("{{\n  \"項目\": {{\n{}\n  }}\n}}", entries.join(",\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> PromptBuilder {
        PromptBuilder::new(&FieldSchema::standard(), 200)
    }

    #[test]
    fn test_extraction_system_prompt_covers_every_field() {
        let request = builder().extraction_request("text");
        for field in FieldSchema::standard().fields() {
            assert!(request.system.contains(&format!("【{}】", field.name)));
            assert!(request.system.contains(&field.keywords.join(", ")));
        }
    }

    #[test]
    fn test_extraction_user_prompt_carries_chunk() {
        let request = builder().extraction_request("案件名は○○です。");
        assert!(request.user.contains("案件名は○○です。"));
        assert!(request.user.starts_with("以下の文書を分析してください:"));
    }

    #[test]
    fn test_prompts_embed_response_shape_example() {
        let builder = builder();
        let extraction = builder.extraction_request("text");
        let consolidation = builder.consolidation_request("[]");

        for prompt in [&extraction.system, &consolidation.user] {
            assert!(prompt.contains("\"項目\""));
            assert!(prompt.contains("\"見出し\""));
            assert!(prompt.contains("\"内容\""));
        }
    }

    #[test]
    fn test_response_format_is_valid_json() {
        let value: serde_json::Value =
            serde_json::from_str(builder().response_format()).unwrap();
        let items = value["項目"].as_object().unwrap();
        assert_eq!(items.len(), FieldSchema::standard().len());
    }

    #[test]
    fn test_consolidation_prompt_carries_records_and_limit() {
        let request = builder().consolidation_request(r#"[{"項目": {}}]"#);
        assert!(request.user.contains(r#"[{"項目": {}}]"#));
        assert!(request.user.contains("200文字程度に要約"));
        assert!(request.system.contains("統合する専門家"));
    }
}
