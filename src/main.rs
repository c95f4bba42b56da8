use car_ai_rust::api::{display_value, AnalysisClient, AnalysisOutcome};
use car_ai_rust::cli::{Cli, Commands};
use car_ai_rust::config::Config;
use car_ai_rust::error::{CarAiError, Result};
use car_ai_rust::report::{self, format_confidence, format_grouped, title_case_key};
use car_ai_rust::session::Session;
use car_ai_rust::{preview, scanner};
use chrono::Local;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze { images, output, report: export, report_dir, server } => {
            println!("🚗 car-ai - photo analysis\n");

            println!("[1/3] Collecting images...");
            let paths = scanner::collect_image_paths(&images)?;
            if paths.is_empty() {
                return Err(CarAiError::NoImagesFound(
                    "no image files among the provided paths".into(),
                ));
            }

            let mut candidates = Vec::with_capacity(paths.len());
            for path in &paths {
                candidates.push(scanner::load_candidate(path)?);
            }

            let mut session = Session::new();
            session.add_files(candidates);
            if let Some(message) = session.last_error() {
                eprintln!("⚠ {message}");
            }
            if session.selection().is_empty() {
                return Err(CarAiError::NoImagesFound(
                    "none of the provided files passed intake validation".into(),
                ));
            }
            println!("✔ {} image(s) selected\n", session.selection().len());

            if cli.verbose {
                for item in preview::decode_previews(session.selection()).await {
                    match item {
                        Ok(p) => println!("  {} ({}x{})", p.file_name, p.width, p.height),
                        Err(e) => println!("  preview failed: {e}"),
                    }
                }
                println!();
            }

            println!("[2/3] Analyzing...");
            let base_url = server.unwrap_or_else(|| config.server_url());
            let client = AnalysisClient::new(base_url.as_str())?;

            let Some(frozen) = session.begin_submit() else {
                return Ok(());
            };

            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::with_template("{spinner} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            spinner.set_message(format!("request in flight → {base_url}"));
            spinner.enable_steady_tick(Duration::from_millis(120));

            let outcome = match client.analyze(&frozen).await {
                Ok(outcome) => {
                    spinner.finish_and_clear();
                    session.complete_success(outcome.clone());
                    outcome
                }
                Err(e) => {
                    spinner.finish_and_clear();
                    session.complete_failure(e.to_string());
                    return Err(e);
                }
            };
            println!("✔ Analysis complete\n");

            print_outcome(&outcome);

            if let Some(path) = output {
                std::fs::write(&path, serde_json::to_string_pretty(&outcome)?)?;
                println!("\n✔ Outcome saved: {}", path.display());
            }

            if export {
                println!("\n[3/3] Generating report...");
                let dir = report_dir
                    .or_else(|| config.report_dir.clone())
                    .unwrap_or_else(|| PathBuf::from("."));
                export_report(&outcome, &dir);
            }

            println!("\n✅ Done");
        }

        Commands::Report { input, output } => {
            println!("📄 car-ai - report generation\n");

            let content = std::fs::read_to_string(&input)?;
            let outcome: AnalysisOutcome = serde_json::from_str(&content)?;

            let dir = output.unwrap_or_else(|| {
                input
                    .parent()
                    .filter(|p| !p.as_os_str().is_empty())
                    .unwrap_or(Path::new("."))
                    .to_path_buf()
            });
            export_report(&outcome, &dir);
        }

        Commands::Config { set_server_url, show } => {
            let mut config = config;

            if let Some(url) = set_server_url {
                config.set_server_url(url)?;
                println!("✔ Server URL saved");
            }

            if show {
                println!("Settings:");
                println!("  server URL: {}", config.server_url());
                println!(
                    "  report dir: {}",
                    config
                        .report_dir
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "(current directory)".to_string())
                );
                println!("  config file: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}

/// Report failures never abort: the session stays in Results and the user
/// can retry the export.
fn export_report(outcome: &AnalysisOutcome, dir: &Path) {
    match report::export_report(outcome, dir, Local::now()) {
        Ok(path) => println!("✔ Report saved: {}", path.display()),
        Err(e) => eprintln!("⚠ Report generation failed: {e}"),
    }
}

fn print_outcome(outcome: &AnalysisOutcome) {
    println!("Car Characteristics:");
    for (key, value) in outcome.characteristics() {
        println!("  {:<24} {}", title_case_key(key), display_value(value));
    }

    let price = outcome.price_estimation();
    println!("\nPrice Estimation:");
    println!("  {:<24} {}", "Estimated Price Range", price.estimated_price_range);
    println!("  {:<24} {}", "Base Price", format_grouped(price.base_price));
    println!("  {:<24} {}x", "Brand Factor", price.brand_factor);
    println!("  {:<24} {}x", "Condition Factor", price.condition_factor);

    if let AnalysisOutcome::Batch(batch) = outcome {
        println!("\nAnalysis Confidence Metrics:");
        println!("  {:<24} {}", "Images Processed", batch.images_processed);
        println!("  {:<24} {}", "Analysis Quality", batch.analysis_summary.analysis_quality);
        println!(
            "  {:<24} {}",
            "Overall Confidence",
            format_confidence(batch.analysis_summary.overall_confidence)
        );

        println!("\nIndividual Analyses:");
        for analysis in &batch.individual_analyses {
            println!(
                "  {} (confidence {})",
                analysis.image_name,
                format_confidence(analysis.confidence_score)
            );
        }
    }
}
