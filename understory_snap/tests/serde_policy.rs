// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loading snap policy overrides from host configuration.

#![cfg(feature = "serde")]

use understory_snap::{CorrectionPlan, SnapPolicy, Transform};

#[test]
fn partial_policy_falls_back_to_production_values() {
    let policy: SnapPolicy = serde_json::from_str(r#"{ "post_snap_allowance": 3.0 }"#).unwrap();
    assert_eq!(policy.gap_threshold, SnapPolicy::GAP_THRESHOLD);
    assert_eq!(policy.post_snap_allowance, 3.0);
    assert_eq!(policy.default_transform, Transform::DEFAULT);
}

#[test]
fn reset_transform_is_configurable() {
    let json = r#"{
        "default_transform": { "offset_x": 0.0, "offset_y": 0.0, "scale": 0.5 }
    }"#;
    let policy: SnapPolicy = serde_json::from_str(json).unwrap();
    assert_eq!(policy.default_transform, Transform::new(0.0, 0.0, 0.5));
}

#[test]
fn plans_serialize_as_tagged_variants() {
    let plan = CorrectionPlan::Translate { dx: 0.25, dy: -0.5 };
    let json = serde_json::to_string(&plan).unwrap();
    assert_eq!(json, r#"{"Translate":{"dx":0.25,"dy":-0.5}}"#);
    assert_eq!(serde_json::to_string(&CorrectionPlan::NoOp).unwrap(), r#""NoOp""#);
}
