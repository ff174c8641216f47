//! Single evaluations and their JSON shape.

use clap::ValueEnum;
use serde::Serialize;
use statik::{ArithmeticError, Value};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    pub fn apply(self, lhs: Value, rhs: Value) -> Result<Value, ArithmeticError> {
        match self {
            Op::Add => lhs.add(rhs),
            Op::Sub => lhs.subtract(rhs),
            Op::Mul => lhs.multiply(rhs),
            Op::Div => lhs.divide(rhs),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Op::Add => "add",
            Op::Sub => "sub",
            Op::Mul => "mul",
            Op::Div => "div",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ValueRecord {
    pub magnitude: i64,
    pub exponent: i32,
    pub quantity: String,
}

impl From<Value> for ValueRecord {
    fn from(v: Value) -> Self {
        Self {
            magnitude: v.magnitude,
            exponent: v.exponent,
            quantity: v.quantity.to_string(),
        }
    }
}

/// One evaluated operation. `value` is present for dimensional errors too.
#[derive(Clone, Debug, Serialize)]
pub struct Evaluation {
    pub lhs: String,
    pub op: &'static str,
    pub rhs: String,
    pub value: Option<ValueRecord>,
    pub error: Option<String>,
}

impl Evaluation {
    pub fn is_err(&self) -> bool {
        self.error.is_some()
    }
}

pub fn evaluate(lhs: Value, op: Op, rhs: Value) -> Evaluation {
    let (value, error) = match op.apply(lhs, rhs) {
        Ok(v) => (Some(ValueRecord::from(v)), None),
        Err(e) => (e.value().map(ValueRecord::from), Some(e.to_string())),
    };
    Evaluation {
        lhs: lhs.to_string(),
        op: op.as_str(),
        rhs: rhs.to_string(),
        value,
        error,
    }
}
