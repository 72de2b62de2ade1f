use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};

// Import from docbrief-core
use docbrief_core::{DocumentProcessor, DocumentResult, PipelineConfig};

#[derive(Parser)]
#[command(name = "docbrief")]
#[command(about = "Persona-targeted section summaries for PDF documents")]
struct Args {
    /// Path to a PDF file, or a directory of PDFs to process as a batch
    #[arg(short, long)]
    input: String,

    /// Path to custom config file (YAML format)
    #[arg(short, long)]
    config: Option<String>,

    /// Persona the summaries are written for (overrides config)
    #[arg(long)]
    persona: Option<String>,

    /// Job-to-be-done the persona is working on (overrides config)
    #[arg(long)]
    job: Option<String>,

    /// Sentences kept per section by the truncation fallback (overrides config)
    #[arg(long)]
    max_sents: Option<usize>,

    /// Output file path (if not specified, auto-generated based on input)
    #[arg(short, long)]
    output: Option<String>,

    /// Enable detailed profiling of all pipeline steps
    #[arg(long)]
    profile: bool,

    /// Skip the batch-level executive summary
    #[arg(long)]
    no_executive_summary: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("🦀 Docbrief Document Summarizer");

    // Check if input exists
    let input_path = Path::new(&args.input);
    if !input_path.exists() {
        println!("⚠️  Input not found at: {}", args.input);
        println!("   Please check the file path.");
        return Ok(());
    }

    // Load config using the functional pattern, then apply CLI overrides
    let mut config = PipelineConfig::load_with_fallback(args.config.as_deref());

    if let Some(config_path) = &args.config {
        println!("📋 Loaded config from: {}", config_path);
    } else {
        println!("📋 Using default config");
    }

    if let Some(persona) = &args.persona {
        config.persona = persona.clone();
    }
    if let Some(job) = &args.job {
        config.job = job.clone();
    }
    if let Some(max_sents) = args.max_sents {
        config.summary.max_sents = max_sents;
    }

    println!("👤 Persona: {} — {}", config.persona, config.job);

    let processor = create_processor(config)?;
    let inputs = collect_inputs(input_path)?;

    if inputs.is_empty() {
        println!("⚠️  No PDF files found at: {}", args.input);
        return Ok(());
    }

    // Process each document; one failure must not stop the batch
    let mut processed: Vec<(String, DocumentResult)> = Vec::new();
    let mut failed: Vec<String> = Vec::new();

    for path in &inputs {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();
        let path_str = path.to_string_lossy().to_string();

        match processor.process_file_with_profiling(&path_str, args.profile) {
            Ok(result) => processed.push((name, result)),
            Err(e) => {
                eprintln!("❌ Error processing {}: {:#}", name, e);
                failed.push(name);
            }
        }
    }

    if processed.is_empty() {
        eprintln!("❌ All {} document(s) failed to process", failed.len());
        std::process::exit(1);
    }

    let report = build_report(&processor, &processed, &failed, !args.no_executive_summary);

    // Generate output path
    let output_path = if let Some(output) = &args.output {
        output.clone()
    } else {
        let input_name = input_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("output");
        format!("{input_name}_docbrief.json")
    };

    std::fs::write(&output_path, serde_json::to_string_pretty(&report)?)?;
    println!("💾 Results saved to: {}", output_path);

    Ok(())
}

/// Create DocumentProcessor with the lopdf backend
#[cfg(feature = "lopdf-backend")]
fn create_processor(config: PipelineConfig) -> Result<DocumentProcessor> {
    let processor = DocumentProcessor::new_cli(config)?;
    println!("🚀 Using {} backend", processor.extractor_name());
    Ok(processor)
}

/// Fallback when no backend is compiled in
#[cfg(not(feature = "lopdf-backend"))]
fn create_processor(_config: PipelineConfig) -> Result<DocumentProcessor> {
    Err(anyhow::anyhow!(
        "No PDF backend compiled in!\n\
         Compile with: --features lopdf-backend"
    ))
}

/// A single file, or every *.pdf directly inside a directory (sorted by name)
fn collect_inputs(input: &Path) -> Result<Vec<PathBuf>> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }

    let mut pdfs: Vec<PathBuf> = std::fs::read_dir(input)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext.eq_ignore_ascii_case("pdf"))
                .unwrap_or(false)
        })
        .collect();
    pdfs.sort();
    Ok(pdfs)
}

fn build_report(
    processor: &DocumentProcessor,
    processed: &[(String, DocumentResult)],
    failed: &[String],
    include_executive_summary: bool,
) -> serde_json::Value {
    let total_time: f64 = processed.iter().map(|(_, r)| r.processing_time).sum();
    let avg_time = total_time / processed.len() as f64;

    let executive_summary = if include_executive_summary {
        let results: Vec<DocumentResult> =
            processed.iter().map(|(_, r)| r.clone()).collect();
        Some(processor.executive_summary(&results))
    } else {
        None
    };

    serde_json::json!({
        "generated_at": chrono::Utc::now().to_rfc3339(),
        "documents": processed
            .iter()
            .map(|(name, result)| serde_json::json!({ "file": name, "result": result }))
            .collect::<Vec<_>>(),
        "failed_documents": failed,
        "executive_summary": executive_summary,
        "totals": {
            "documents": processed.len(),
            "total_time": total_time,
            "avg_time": avg_time,
        }
    })
}
