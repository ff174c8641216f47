mod batch;
mod calc;
mod provenance;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use statik::quantity::relations;
use statik::Value;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

use crate::calc::{evaluate, Op};
use crate::provenance::Payload;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Dimensional arithmetic runner")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Evaluate one operation, e.g. `calc "100e2 F" add "200e2 F"`
    Calc {
        #[arg(allow_hyphen_values = true)]
        lhs: Value,
        #[arg(value_enum)]
        op: Op,
        #[arg(allow_hyphen_values = true)]
        rhs: Value,
        /// Fail on any error instead of only reporting it
        #[arg(long)]
        strict: bool,
    },
    /// Print the registered quantity relations
    Relations,
    /// Evaluate a CSV of `lhs,op,rhs` rows into a JSON array
    Batch {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Calc {
            lhs,
            op,
            rhs,
            strict,
        } => calc(lhs, op, rhs, strict),
        Action::Relations => print_relations(),
        Action::Batch { input, out } => run_batch(&input, &out),
        Action::Report => report(),
    }
}

fn calc(lhs: Value, op: Op, rhs: Value, strict: bool) -> Result<()> {
    tracing::info!(%lhs, op = op.as_str(), %rhs, "calc");
    let evaluation = evaluate(lhs, op, rhs);
    println!("{}", serde_json::to_string_pretty(&evaluation)?);
    if let Some(error) = &evaluation.error {
        tracing::warn!(error = %error, "calc");
        if strict {
            bail!("{error}");
        }
    }
    Ok(())
}

fn print_relations() -> Result<()> {
    let facts: Vec<_> = relations()
        .iter()
        .map(|r| {
            json!({
                "lhs": r.lhs.name(),
                "rhs": r.rhs.name(),
                "result": r.result.name(),
                "symbols": format!("{} × {} = {}", r.lhs, r.rhs, r.result)
            })
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&facts)?);
    Ok(())
}

fn run_batch(input: &Path, out: &Path) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), "batch");
    let rows = batch::read_rows(input)?;
    let evaluations = batch::evaluate_rows(&rows);
    let errors = evaluations.iter().filter(|e| e.is_err()).count();
    if errors > 0 {
        tracing::warn!(errors, rows = rows.len(), "batch rows with errors");
    }

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(&evaluations)?)?;

    let payload = Payload::new(json!({ "rows": rows.len(), "errors": errors }))
        .with_input(input.to_string_lossy());
    let sidecar = provenance::write_sidecar(out, payload)?;
    tracing::info!(sidecar = %sidecar.display(), "provenance written");
    Ok(())
}

fn report() -> Result<()> {
    let doc = provenance::document(Payload::new(json!({})), &[]);
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
