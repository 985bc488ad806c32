//! Whole-certificate verdicts, including single-point corruptions of valid
//! certificates.

use serde_json::json;
use wfar_core::{Check, verify};
use wfar_types::{AcceptSet, AutomatonState, Condition, ConfigKey, Machine, MachineState, Symbol};

use crate::common::{certificate, counting_json, sign_bounded_json};

fn key(state: u32, symbol: u32) -> ConfigKey {
    ConfigKey::new(
        MachineState(state),
        Symbol(symbol),
        AutomatonState(0),
        AutomatonState(0),
    )
}

#[test]
fn counting_certificate_is_valid() {
    assert!(verify(&certificate(counting_json())));
}

#[test]
fn sign_bounded_certificate_is_valid() {
    assert!(verify(&certificate(sign_bounded_json())));
}

#[test]
fn trivial_automata_prove_a_total_machine() {
    let mut cert = certificate(counting_json());
    cert.machine = Machine::parse_standard("1RB1LB_1LA0RA").unwrap();
    cert.left.transitions[0][1].weight = 0;
    cert.right = cert.left.clone();
    cert.accept = AcceptSet::from_entries(
        [(0, 0), (0, 1), (1, 0), (1, 1)].map(|(s, y)| (key(s, y), Condition::always())),
    )
    .unwrap();
    assert!(verify(&cert));

    cert.accept.remove(&key(1, 1));
    assert!(!verify(&cert));
    assert!(!Check::ForwardClosed.run(&cert));
}

#[test]
fn wrong_transition_is_rejected() {
    let mut value = counting_json();
    value["machine"]["rules"][0][0]["direction"] = json!("left");
    assert!(!verify(&certificate(value)));

    let mut value = counting_json();
    value["machine"]["rules"][0][0]["next"] = json!(1);
    assert!(!verify(&certificate(value)));
}

#[test]
fn wrong_threshold_is_rejected() {
    let mut value = counting_json();
    value["accept"][0]["threshold"] = json!(1);
    assert!(!verify(&certificate(value)));

    let mut value = sign_bounded_json();
    value["accept"][1]["threshold"] = json!(1);
    assert!(!verify(&certificate(value)));
}

#[test]
fn wrong_weight_is_rejected() {
    let mut value = counting_json();
    value["left"]["transitions"][0][1]["weight"] = json!(-1);
    assert!(!verify(&certificate(value)));

    let mut value = sign_bounded_json();
    value["left"]["transitions"][0][1]["weight"] = json!(-1);
    let cert = certificate(value);
    assert!(!Check::SignSetsLeft.run(&cert));
    assert!(!verify(&cert));
}

#[test]
fn missing_sign_set_is_rejected() {
    let mut value = sign_bounded_json();
    value["left_signs"] = json!({});
    let cert = certificate(value);
    assert!(Check::SignSetsLeft.run(&cert));
    assert!(!verify(&cert));
}

#[test]
fn missing_key_is_rejected() {
    let mut value = sign_bounded_json();
    value["accept"]
        .as_array_mut()
        .expect("accept is an array")
        .remove(1);
    assert!(!verify(&certificate(value)));
}

#[test]
fn mismatched_alphabet_is_rejected() {
    let mut value = counting_json();
    value["machine"]["symbols"] = json!(3);
    let cert = certificate(value);
    assert!(!Check::SymbolCompatibility.run(&cert));
    assert!(!verify(&cert));
}
