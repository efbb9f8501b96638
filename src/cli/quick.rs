//! quick subcommand
//!
//! Short reachability pass over the stack, one line per check, with a terse
//! prompt and a tighter generation deadline than the full suite.

use std::time::Duration;

use clap::Args;

use crate::checks::SmokeChecker;
use crate::report::SuiteSummary;

use super::{print_result, ProbeArgs};

/// Generation deadline used when no override is given.
const QUICK_GENERATE_TIMEOUT: Duration = Duration::from_secs(30);

/// One-line prompt with a well-known answer.
const QUICK_PROMPT: &str = "What is the capital of France?";

/// Arguments for the quick subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct QuickArgs {
    /// Probe target overrides
    #[command(flatten)]
    pub probe: ProbeArgs,
}

/// Execute the quick suite.
pub async fn execute(args: &QuickArgs) -> SuiteSummary {
    let config = args.probe.resolve(QUICK_GENERATE_TIMEOUT);
    let checker = SmokeChecker::new(config);
    let mut summary = SuiteSummary::default();

    println!("MyAI smoke suite (quick)");
    println!("{}", "=".repeat(30));

    let result = checker.check_webapp().await;
    print_result(&result);
    summary.record(&result);

    let result = checker.check_model_service().await;
    print_result(&result);
    summary.record(&result);

    let result = checker.check_generation(QUICK_PROMPT, None).await;
    print_result(&result);
    summary.record(&result);

    // The quick pass always closes with the access hint, pass or fail.
    println!();
    println!(
        "System status: {}/{} checks passed",
        summary.passed, summary.total
    );
    println!("Access at: {}", checker.config().web_url);

    summary
}
