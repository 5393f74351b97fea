//! Check command: run the verification flow and print the report.

use anyhow::Result;
use voxcheck_core::config::CheckConfig;
use voxcheck_core::verify::{self, Outcome};

/// Run verification against the configured data root and print the report.
/// A `Fail` outcome is returned as an error so the process exits nonzero.
pub fn run_check(cfg: &CheckConfig, json: bool) -> Result<()> {
    let report = verify::run_check(cfg);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("data root: {}", report.data_root.display());
        for name in &report.available {
            println!("available    {}", name);
        }
        for name in &report.unavailable {
            println!("unavailable  {}", name);
        }
        println!(
            "{} of {} voices installed",
            report.available.len(),
            report.available.len() + report.unavailable.len()
        );
    }

    if report.outcome == Outcome::Fail {
        anyhow::bail!("voice data verification failed");
    }
    Ok(())
}
