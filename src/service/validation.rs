//! Request validation from per-view field lists.

use crate::error::{AppError, FieldError};
use serde_json::{Map, Value};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Str,
    Int,
}

/// One declared field of a request view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldRule {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub nullable: bool,
}

impl FieldRule {
    /// Required, non-null string.
    pub const fn string(name: &'static str) -> Self {
        FieldRule {
            name,
            kind: FieldKind::Str,
            required: true,
            nullable: false,
        }
    }

    /// Optional integer that may be sent as `null`.
    pub const fn nullable_int(name: &'static str) -> Self {
        FieldRule {
            name,
            kind: FieldKind::Int,
            required: false,
            nullable: true,
        }
    }

    pub const fn optional(self) -> Self {
        FieldRule {
            required: false,
            ..self
        }
    }
}

pub struct RequestValidator;

impl RequestValidator {
    /// Validate a JSON body against `rules`, collecting every field error.
    /// Returns only the declared fields that were present, with values coerced to their kind.
    pub fn validate(body: &Value, rules: &[FieldRule]) -> Result<Map<String, Value>, AppError> {
        let obj = body.as_object().ok_or_else(|| {
            AppError::invalid(
                &["body"],
                "Input should be a valid dictionary or object to extract fields from",
                "model_attributes_type",
            )
        })?;
        let mut out = Map::new();
        let mut errors = Vec::new();
        for rule in rules {
            match obj.get(rule.name) {
                None => {
                    if rule.required {
                        errors.push(FieldError::new(&["body", rule.name], "Field required", "missing"));
                    }
                }
                Some(Value::Null) if rule.nullable => {
                    out.insert(rule.name.to_string(), Value::Null);
                }
                Some(v) => match coerce(rule.kind, v) {
                    Ok(v) => {
                        out.insert(rule.name.to_string(), v);
                    }
                    Err((msg, kind)) => errors.push(FieldError::new(&["body", rule.name], msg, kind)),
                },
            }
        }
        if errors.is_empty() {
            Ok(out)
        } else {
            Err(AppError::Validation(errors))
        }
    }
}

/// Parse an integer from a path or query string.
pub fn parse_int(loc: &[&str], raw: &str) -> Result<i64, FieldError> {
    raw.trim().parse().map_err(|_| {
        FieldError::new(
            loc,
            "Input should be a valid integer, unable to parse string as an integer",
            "int_parsing",
        )
    })
}

fn coerce(kind: FieldKind, v: &Value) -> Result<Value, (&'static str, &'static str)> {
    match kind {
        FieldKind::Str => match v {
            Value::String(_) => Ok(v.clone()),
            _ => Err(("Input should be a valid string", "string_type")),
        },
        FieldKind::Int => coerce_int(v).map(|n| Value::Number(n.into())),
    }
}

fn coerce_int(v: &Value) -> Result<i64, (&'static str, &'static str)> {
    const NOT_INT: (&str, &str) = ("Input should be a valid integer", "int_type");
    match v {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(i);
            }
            let f = n.as_f64().ok_or(NOT_INT)?;
            if f.fract() != 0.0 {
                return Err((
                    "Input should be a valid integer, got a number with a fractional part",
                    "int_from_float",
                ));
            }
            if f < i64::MIN as f64 || f >= i64::MAX as f64 {
                return Err(NOT_INT);
            }
            Ok(f as i64)
        }
        Value::String(s) => s.trim().parse().map_err(|_| {
            (
                "Input should be a valid integer, unable to parse string as an integer",
                "int_parsing",
            )
        }),
        _ => Err(NOT_INT),
    }
}
