//! Tender analysis CLI - reads tender documents from a directory, runs the
//! extraction pipeline, and writes the result sheet.

mod config;
mod error;
mod sink;
mod source;

use crate::config::Config;
use crate::error::{CliError, Result};
use crate::sink::CsvSink;
use crate::source::DirSource;
use tender_analyzer::{AnalyzerConfig, TenderAnalyzer};
use tender_domain::RecordSink;
use tender_llm::OpenAiBackend;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    config::load_dotenv();
    let config = Config::from_env()?;

    let source = DirSource::new(&config.input_dir);
    let all_text = source::gather_text(&source)?;
    if all_text.trim().is_empty() {
        error!("処理対象のテキストが見つかりませんでした");
        return Err(CliError::NoInput);
    }

    let mut backend = OpenAiBackend::new(&config.api_key)?;
    if let Some(model) = &config.model {
        backend = backend.with_model(model);
    }
    info!(model = backend.model(), "Starting tender analysis");

    let analyzer = TenderAnalyzer::new(backend, AnalyzerConfig::default())?;
    let record = analyzer.analyze(&all_text)?;

    let sheet_name = record
        .project_name()
        .unwrap_or(&config.default_sheet_name)
        .to_string();

    let mut sink = CsvSink::new(&config.output_dir);
    if let Err(e) = sink.write_record(&sheet_name, &record.to_rows()) {
        // The analysis itself succeeded; keep the result visible even when
        // persistence fails, and report the failure distinctly.
        match serde_json::to_string_pretty(&record) {
            Ok(json) => println!("{}", json),
            Err(_) => println!("{:?}", record),
        }
        return Err(CliError::Sink(e.to_string()));
    }

    info!("案件「{}」の分析が完了しました", sheet_name);
    Ok(())
}
