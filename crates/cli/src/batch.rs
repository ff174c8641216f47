//! CSV batches: columns `lhs,op,rhs`, one operation per row.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use clap::ValueEnum;
use polars::prelude::*;
use statik::Value;

use crate::calc::{evaluate, Evaluation, Op};

/// Operands and operator of one CSV row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    pub lhs: Value,
    pub op: Op,
    pub rhs: Value,
}

pub fn read_rows(input: &Path) -> Result<Vec<Row>> {
    let df = LazyCsvReader::new(input)
        .with_infer_schema_length(Some(100))
        .finish()
        .and_then(|lf| lf.collect())
        .with_context(|| format!("reading {}", input.display()))?;
    let lhs = string_column(&df, "lhs")?;
    let op = string_column(&df, "op")?;
    let rhs = string_column(&df, "rhs")?;

    lhs.into_iter()
        .zip(op)
        .zip(rhs)
        .enumerate()
        .map(|(i, ((lhs, op), rhs))| {
            parse_row(&lhs, &op, &rhs).with_context(|| format!("row {}", i + 1))
        })
        .collect()
}

fn parse_row(lhs: &str, op: &str, rhs: &str) -> Result<Row> {
    Ok(Row {
        lhs: lhs.parse()?,
        op: Op::from_str(op.trim(), true).map_err(|e| anyhow!(e))?,
        rhs: rhs.parse()?,
    })
}

fn string_column(df: &DataFrame, name: &str) -> Result<Vec<String>> {
    let series = df
        .column(name)
        .with_context(|| format!("missing column {name:?}"))?
        .cast(&DataType::String)?;
    series
        .str()?
        .into_iter()
        .enumerate()
        .map(|(i, cell)| {
            cell.map(str::to_string)
                .ok_or_else(|| anyhow!("row {}: empty {name}", i + 1))
        })
        .collect()
}

pub fn evaluate_rows(rows: &[Row]) -> Vec<Evaluation> {
    rows.iter().map(|r| evaluate(r.lhs, r.op, r.rhs)).collect()
}
