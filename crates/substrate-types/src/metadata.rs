// Copyright 2026 Substrate Contributors.
// SPDX-License-Identifier: Apache-2.0

//! Typed metadata payload attached to component records.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A small closed set of metadata value kinds, deliberately not
/// `serde_json::Value`: call sites know ahead of time what they are
/// storing, and a `BTreeMap` keeps `ComponentInfo` deterministically
/// comparable in tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MetadataValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<bool> for MetadataValue {
    fn from(v: bool) -> Self {
        MetadataValue::Bool(v)
    }
}

impl From<i64> for MetadataValue {
    fn from(v: i64) -> Self {
        MetadataValue::Int(v)
    }
}

impl From<f64> for MetadataValue {
    fn from(v: f64) -> Self {
        MetadataValue::Float(v)
    }
}

impl From<&str> for MetadataValue {
    fn from(v: &str) -> Self {
        MetadataValue::Text(v.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(v: String) -> Self {
        MetadataValue::Text(v)
    }
}

/// String-keyed metadata map, as referenced throughout the data model.
pub type Metadata = BTreeMap<String, MetadataValue>;
