//! Shared certificate fixtures for integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use wfar_types::Certificate;

/// One-state machine writing 1 and moving right. The left half counts ones,
/// the right half is known to be blank, so Δ only grows.
pub fn counting_json() -> Value {
    json!({
        "machine": {
            "states": 1,
            "symbols": 2,
            "rules": [[
                { "kind": "step", "write": 1, "direction": "right", "next": 0 },
                { "kind": "halt" }
            ]]
        },
        "left": {
            "states": 1, "symbols": 2, "start": 0,
            "transitions": [[{ "next": 0, "weight": 0 }, { "next": 0, "weight": 1 }]]
        },
        "right": {
            "states": 2, "symbols": 2, "start": 0,
            "transitions": [
                [{ "next": 0, "weight": 0 }, { "next": 1, "weight": 0 }],
                [{ "next": 1, "weight": 0 }, { "next": 1, "weight": 0 }]
            ]
        },
        "accept": [
            { "state": 0, "symbol": 0, "left": 0, "right": 0, "mode": "at_least", "threshold": 0 }
        ]
    })
}

/// A machine that writes 1 and moves left forever. Δ is the number of ones
/// on the left, which only the sign-stable sets can show is non-negative.
pub fn sign_bounded_json() -> Value {
    json!({
        "machine": {
            "states": 1,
            "symbols": 2,
            "rules": [[
                { "kind": "step", "write": 1, "direction": "left", "next": 0 },
                { "kind": "step", "write": 1, "direction": "left", "next": 0 }
            ]]
        },
        "left": {
            "states": 1, "symbols": 2, "start": 0,
            "transitions": [[{ "next": 0, "weight": 0 }, { "next": 0, "weight": 1 }]]
        },
        "right": {
            "states": 1, "symbols": 2, "start": 0,
            "transitions": [[{ "next": 0, "weight": 0 }, { "next": 0, "weight": 0 }]]
        },
        "left_signs": { "non_negative": [0] },
        "right_signs": { "non_negative": [0], "non_positive": [0] },
        "accept": [
            { "state": 0, "symbol": 0, "left": 0, "right": 0, "mode": "always" },
            { "state": 0, "symbol": 1, "left": 0, "right": 0, "mode": "at_least", "threshold": 0 }
        ]
    })
}

pub fn certificate(value: Value) -> Certificate {
    serde_json::from_value(value).expect("fixture certificate deserializes")
}

pub fn write_json(dir: &Path, name: &str, value: &Value) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, serde_json::to_string_pretty(value).expect("fixture serializes"))
        .expect("fixture file writes");
    path
}
