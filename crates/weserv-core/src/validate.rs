//! Declarative value rules for API parameters.
//!
//! Every setter on the builder goes through [`rule_for`]; keys without a rule
//! are accepted as-is. A value that fails its rule is dropped, never raised,
//! unless the caller opts into [`ValidationMode::Strict`].

use serde::{Deserialize, Serialize};

use crate::params::ParamValue;

/// How the builder reacts to values that fail their rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Drop the value and carry on (the API's historical behaviour).
    #[default]
    Silent,
    /// Drop the value and make `try_build_url` fail.
    Strict,
}

/// A value rule for one parameter key.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub key: &'static str,
    /// Human-readable description of accepted values.
    pub expected: &'static str,
    check: fn(&ParamValue) -> bool,
}

impl Rule {
    pub fn accepts(&self, value: &ParamValue) -> bool {
        (self.check)(value)
    }
}

/// A value dropped by a setter.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    pub key: String,
    pub value: ParamValue,
    pub expected: &'static str,
}

const RULES: &[Rule] = &[
    Rule {
        key: "dpr",
        expected: "a number in 1..=8",
        check: dpr,
    },
    Rule {
        key: "trim",
        expected: "a number in 1..=254",
        check: trim,
    },
    Rule {
        key: "bri",
        expected: "a number in -100..=100",
        check: percent_delta,
    },
    Rule {
        key: "con",
        expected: "a number in -100..=100",
        check: percent_delta,
    },
    Rule {
        key: "gam",
        expected: "a number in 1..=3",
        check: gamma,
    },
    Rule {
        key: "q",
        expected: "a number in 1..=100",
        check: quality,
    },
    Rule {
        key: "ro",
        expected: "`auto` or a multiple of 90",
        check: rotation,
    },
];

/// Returns the rule for `key`, if the key has one.
pub fn rule_for(key: &str) -> Option<&'static Rule> {
    RULES.iter().find(|r| r.key == key)
}

fn within(value: &ParamValue, min: f64, max: f64) -> bool {
    value.as_f64().is_some_and(|n| n >= min && n <= max)
}

fn dpr(v: &ParamValue) -> bool {
    within(v, 1.0, 8.0)
}

fn trim(v: &ParamValue) -> bool {
    within(v, 1.0, 254.0)
}

fn percent_delta(v: &ParamValue) -> bool {
    within(v, -100.0, 100.0)
}

fn gamma(v: &ParamValue) -> bool {
    within(v, 1.0, 3.0)
}

fn quality(v: &ParamValue) -> bool {
    within(v, 1.0, 100.0)
}

fn rotation(v: &ParamValue) -> bool {
    match v {
        ParamValue::Text(s) => s == "auto",
        ParamValue::Int(n) => n % 90 == 0,
        ParamValue::Float(f) => f.fract() == 0.0 && f % 90.0 == 0.0,
        ParamValue::Bool(_) => false,
    }
}
