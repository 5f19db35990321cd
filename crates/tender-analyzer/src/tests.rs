//! Integration tests for the analysis pipeline

#[cfg(test)]
mod tests {
    use crate::{AnalyzerConfig, AnalyzerError, TenderAnalyzer};
    use tender_llm::MockBackend;

    const SAMPLE_TEXT: &str = "案件名は「公共施設案内システム構築」です。\n\n発注機関は○○省です。";

    const SAMPLE_RESPONSE: &str = r#"{
        "項目": {
            "案件名": {"見出し": "案件名", "内容": " 公共施設案内システム構築 "},
            "発注機関": {"見出し": "発注機関", "内容": "○○省"}
        }
    }"#;

    /// The user prompt the analyzer sends for a given chunk
    fn extraction_prompt(chunk: &str) -> String {
        format!("以下の文書を分析してください:\n\n{}", chunk)
    }

    fn analyzer(backend: MockBackend) -> TenderAnalyzer<MockBackend> {
        TenderAnalyzer::new(backend, AnalyzerConfig::default()).unwrap()
    }

    #[test]
    fn test_full_flow_single_chunk() {
        // SAMPLE_TEXT fits one chunk; the same mock response serves both the
        // extraction and the consolidation call.
        let backend = MockBackend::new(SAMPLE_RESPONSE);
        let record = analyzer(backend).analyze(SAMPLE_TEXT).unwrap();

        assert_eq!(record.content("案件名"), Some("公共施設案内システム構築"));
        assert_eq!(record.content("発注機関"), Some("○○省"));
        // Fields the response omitted are still present, empty.
        assert_eq!(record.content("入札の種類"), Some(""));
        assert_eq!(record.content("CMSの有無"), Some(""));
        assert_eq!(record.content("要件概要"), Some(""));
    }

    #[test]
    fn test_empty_input_is_fatal() {
        let backend = MockBackend::new(SAMPLE_RESPONSE);
        let result = analyzer(backend.clone()).analyze("");

        assert!(matches!(result, Err(AnalyzerError::NoText)));
        assert_eq!(backend.call_count(), 0);
    }

    #[test]
    fn test_whitespace_only_input_is_fatal() {
        let backend = MockBackend::new(SAMPLE_RESPONSE);
        let result = analyzer(backend).analyze("  \r\n \t \n\n \x07 ");

        assert!(matches!(result, Err(AnalyzerError::NoText)));
    }

    #[test]
    fn test_all_chunks_failing_is_fatal() {
        let backend = MockBackend::failing();
        let result = analyzer(backend).analyze(SAMPLE_TEXT);

        assert!(matches!(result, Err(AnalyzerError::NoExtraction)));
    }

    #[test]
    fn test_unparseable_responses_on_every_chunk_are_fatal() {
        let backend = MockBackend::new("the model rambled instead of emitting JSON");
        let result = analyzer(backend).analyze(SAMPLE_TEXT);

        assert!(matches!(result, Err(AnalyzerError::NoExtraction)));
    }

    #[test]
    fn test_wrong_shape_still_yields_a_record() {
        // Valid JSON of the wrong shape is coerced, not rejected: the run
        // produces an all-empty record rather than failing.
        let backend = MockBackend::new(r#"{"answer": "wrong shape"}"#);
        let record = analyzer(backend).analyze(SAMPLE_TEXT).unwrap();

        assert!(record.entries().iter().all(|e| e.content.is_empty()));
    }

    #[test]
    fn test_consolidation_failure_falls_back_to_chunk_record() {
        // The extraction prompt gets a valid response; the consolidation
        // call sees the unparseable default and the pipeline degrades to
        // the chunk's own record.
        let mut backend = MockBackend::new("not json");
        backend.add_response(extraction_prompt(SAMPLE_TEXT), SAMPLE_RESPONSE);

        let record = analyzer(backend).analyze(SAMPLE_TEXT).unwrap();
        assert_eq!(record.content("案件名"), Some("公共施設案内システム構築"));
    }

    #[test]
    fn test_failed_chunk_does_not_abort_run() {
        let config = AnalyzerConfig {
            max_chunk_size: 20,
            ..AnalyzerConfig::default()
        };

        // Two paragraphs, forced into two chunks; the first chunk errors.
        let text = "最初の段落はこの文です。\n\n二番目の段落はこの文です。";
        let mut backend = MockBackend::new("not json");
        backend.add_error(extraction_prompt("最初の段落はこの文です。"));
        backend.add_response(
            extraction_prompt("二番目の段落はこの文です。"),
            SAMPLE_RESPONSE,
        );

        let analyzer = TenderAnalyzer::new(backend.clone(), config).unwrap();
        let record = analyzer.analyze(text).unwrap();

        // Fallback to the surviving chunk's record after the consolidation
        // call fails on the "not json" default.
        assert_eq!(record.content("案件名"), Some("公共施設案内システム構築"));
        // Two extraction calls plus one consolidation call.
        assert_eq!(backend.call_count(), 3);
    }

    #[test]
    fn test_multi_chunk_consolidation() {
        let config = AnalyzerConfig {
            max_chunk_size: 20,
            ..AnalyzerConfig::default()
        };

        let text = "最初の段落はこの文です。\n\n二番目の段落はこの文です。";
        let backend = MockBackend::new(SAMPLE_RESPONSE);

        let analyzer = TenderAnalyzer::new(backend.clone(), config).unwrap();
        let record = analyzer.analyze(text).unwrap();

        assert_eq!(record.content("案件名"), Some("公共施設案内システム構築"));
        assert_eq!(backend.call_count(), 3);
    }

    #[test]
    fn test_messy_input_is_normalized_before_chunking() {
        let backend = MockBackend::new(SAMPLE_RESPONSE);
        let messy = "案件名は「公共施設案内システム構築」です。\r\n\r\n\r\n発注機関は○○省です。\x07";

        let record = analyzer(backend).analyze(messy).unwrap();
        assert_eq!(record.content("案件名"), Some("公共施設案内システム構築"));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = AnalyzerConfig {
            max_chunk_size: 0,
            ..AnalyzerConfig::default()
        };

        let result = TenderAnalyzer::new(MockBackend::default(), config);
        assert!(matches!(result, Err(AnalyzerError::Config(_))));
    }
}
