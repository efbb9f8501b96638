//! full subcommand
//!
//! Integration suite: web app accessibility, model availability, and a
//! document-context generation query with an extraction question.

use chrono::Utc;
use clap::Args;

use crate::checks::SmokeChecker;
use crate::config::DEFAULT_GENERATE_TIMEOUT;
use crate::report::SuiteSummary;

use super::{print_result, ProbeArgs};

/// Fixture document for the context-extraction query.
const DOCUMENT_CONTEXT: &str = "\
Document: Visa Extension Approved - USCIS Case Update
Content: Your OPT extension application (Receipt #MSC2310312345) has been approved.
Your new employment authorization is valid until December 15, 2025.
Status: APPROVED.";

/// Date literal the model should extract from the document.
/// Absence is a warning, not a failure.
const EXPECTED_DATE: &str = "December 15, 2025";

/// Arguments for the full subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct FullArgs {
    /// Probe target overrides
    #[command(flatten)]
    pub probe: ProbeArgs,
}

/// Build the document-context prompt.
fn document_prompt() -> String {
    format!(
        "Based on this document:\n{}\n\nQuestion: When does my employment authorization expire?",
        DOCUMENT_CONTEXT
    )
}

/// Execute the full suite. Checks run strictly one after another; each
/// failure is already converted into a failed result, so the suite always
/// runs to the summary.
pub async fn execute(args: &FullArgs) -> SuiteSummary {
    let config = args.probe.resolve(DEFAULT_GENERATE_TIMEOUT);
    let checker = SmokeChecker::new(config);
    let mut summary = SuiteSummary::default();

    println!("🚀 MyAI smoke suite (full)");
    println!("Started at {}", Utc::now().format("%Y-%m-%d %H:%M:%S UTC"));
    println!("{}", "=".repeat(50));

    println!();
    println!("🧪 Checking web app...");
    let result = checker.check_webapp().await;
    print_result(&result);
    summary.record(&result);

    println!();
    println!("🧪 Checking model service...");
    let result = checker.check_model_service().await;
    print_result(&result);
    summary.record(&result);

    println!();
    println!("🧪 Checking document query...");
    let result = checker
        .check_generation(&document_prompt(), Some(EXPECTED_DATE))
        .await;
    print_result(&result);
    summary.record(&result);

    println!();
    println!("📊 Summary");
    println!("{}", "=".repeat(30));
    if summary.all_passed() {
        println!(
            "🎉 All checks passed ({}/{})",
            summary.passed, summary.total
        );
        println!();
        println!("✨ MyAI stack is fully operational");
        println!(
            "🤖 Inference: {} at {}",
            checker.config().model,
            checker.config().ollama_url
        );
        println!("🌐 Web interface: {}", checker.config().web_url);
    } else {
        println!("⚠️  {}/{} checks passed", summary.passed, summary.total);
        println!("Check the failure lines above for details.");
    }

    summary
}
