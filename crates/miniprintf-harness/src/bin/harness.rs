//! CLI entrypoint for the miniprintf conformance harness.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use miniprintf_conformance::{execute_inputs, printf_cases};
use miniprintf_harness::capture::capture_printf_fixtures;
use miniprintf_harness::diff::status_label;
use miniprintf_harness::fixtures::load_fixture_sets;
use miniprintf_harness::structured_log::{ArtifactIndex, LogEmitter, LogLevel};
use miniprintf_harness::{ConformanceReport, HarnessError, TestRunner, VerificationSummary};

const SUITE: &str = "miniprintf";

/// Conformance tooling for miniprintf.
#[derive(Debug, Parser)]
#[command(name = "miniprintf-harness")]
#[command(about = "Conformance testing harness for miniprintf")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Capture host snprintf behavior for the case catalog as a fixture file.
    Capture {
        /// Output directory for fixture JSON files.
        #[arg(long)]
        output: PathBuf,
        /// Optional fixed timestamp string for deterministic fixtures.
        #[arg(long)]
        timestamp: Option<String>,
    },
    /// Verify the engine against captured fixtures.
    Verify {
        /// Fixture JSON file, or a directory of them.
        #[arg(long)]
        fixture: PathBuf,
        /// Output report path (markdown); JSON and artifact index land beside it.
        #[arg(long)]
        report: Option<PathBuf>,
        /// Structured JSONL log path.
        #[arg(long)]
        log: Option<PathBuf>,
        /// Optional fixed timestamp string for deterministic report generation.
        #[arg(long)]
        timestamp: Option<String>,
    },
    /// Render every catalog case through the engine and the host side by side.
    Compare {
        /// Emit ANSI color for the status column.
        #[arg(long)]
        ansi: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Capture { output, timestamp } => {
            eprintln!("Capturing printf fixtures to {}", output.display());
            std::fs::create_dir_all(&output)?;
            let set = capture_printf_fixtures(timestamp)?;
            let path = output.join("printf.json");
            std::fs::write(&path, set.to_json()?)?;
            let undefined = set.cases.iter().filter(|c| !c.host_defined).count();
            eprintln!(
                "Wrote {} cases ({undefined} host-undefined) to {}",
                set.cases.len(),
                path.display()
            );
        }
        Command::Verify {
            fixture,
            report,
            log,
            timestamp,
        } => {
            verify(&fixture, report.as_deref(), log.as_deref(), timestamp)?;
        }
        Command::Compare { ansi } => {
            println!("case                       impl   host  status");
            let mut mismatches = 0;
            for case in printf_cases() {
                let run = execute_inputs(&case.inputs)?;
                let host = run
                    .host_count
                    .map_or_else(|| String::from("undef"), |n| n.to_string());
                if !run.host_parity {
                    mismatches += 1;
                }
                println!(
                    "{:<24} {:>6} {:>6}  {}",
                    case.name,
                    run.impl_count,
                    host,
                    status_label(run.host_parity, ansi)
                );
            }
            if mismatches > 0 {
                return Err(format!("{mismatches} cases differ from the host").into());
            }
        }
    }

    Ok(())
}

fn verify(
    fixture: &Path,
    report: Option<&Path>,
    log: Option<&Path>,
    timestamp: Option<String>,
) -> Result<(), HarnessError> {
    eprintln!("Verifying against fixtures in {}", fixture.display());
    let (fixture_sets, skipped) = load_fixture_sets(fixture)?;
    for (path, err) in &skipped {
        eprintln!("Skipping {}: {}", path.display(), err);
    }

    let run_id = timestamp
        .clone()
        .unwrap_or_else(|| format!("pid{}", std::process::id()));
    let mut emitter = match log {
        Some(path) => Some(LogEmitter::to_file(path, SUITE, &run_id)?),
        None => None,
    };

    let runner = TestRunner::new("fixture-verify");
    let mut results = Vec::new();
    for set in &fixture_sets {
        match emitter.as_mut() {
            Some(emitter) => results.extend(runner.run_logged(set, emitter)?),
            None => results.extend(runner.run(set)),
        }
    }
    // Stable ordering keeps report digests reproducible.
    results.sort_by(|a, b| a.case_name.cmp(&b.case_name));

    let report_doc = ConformanceReport {
        title: String::from("miniprintf Conformance Report"),
        timestamp: timestamp.unwrap_or_else(miniprintf_harness::structured_log::now_utc),
        summary: VerificationSummary::from_results(results),
    };
    let (total, passed, failed) = (
        report_doc.summary.total,
        report_doc.summary.passed,
        report_doc.summary.failed,
    );
    eprintln!("Verification complete: total={total}, passed={passed}, failed={failed}");

    let mut artifacts = Vec::new();
    if let Some(report_path) = report {
        eprintln!("Writing report to {}", report_path.display());
        std::fs::write(report_path, report_doc.to_markdown())?;
        let json_path = report_path.with_extension("json");
        std::fs::write(&json_path, report_doc.to_json()?)?;
        artifacts.push((report_path.to_path_buf(), "report_markdown"));
        artifacts.push((json_path, "report_json"));
    }

    if let Some(emitter) = emitter.as_mut() {
        let refs = artifacts
            .iter()
            .map(|(path, _)| path.display().to_string())
            .collect();
        let entry = emitter
            .entry(LogLevel::Info, "verify_complete")
            .with_artifacts(refs)
            .with_details(serde_json::json!({
                "total": total,
                "passed": passed,
                "failed": failed,
            }));
        emitter.emit_entry(entry)?;
        emitter.flush()?;
    }

    // Hash the log only after its final flush.
    if let Some(report_path) = report {
        let mut index = ArtifactIndex::new(&run_id, SUITE);
        for (path, kind) in &artifacts {
            index.add_file(path, *kind)?;
        }
        if let Some(log_path) = log {
            index.add_file(log_path, "log")?;
        }
        let index_path = report_path.with_extension("artifacts.json");
        index.write_checked(&index_path)?;
        eprintln!("Wrote artifact index to {}", index_path.display());
    }

    if !report_doc.summary.all_passed() {
        return Err(HarnessError::VerificationFailed { failed, total });
    }
    Ok(())
}
