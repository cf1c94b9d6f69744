//! JSON test vector loader shared by status/response tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use std::fs;

use serde::de::DeserializeOwned;
use serde::Deserialize;

pub fn load<T: DeserializeOwned>(name: &str) -> T {
    let s = fs::read_to_string(format!("tests/vectors/{name}")).unwrap();
    serde_json::from_str(&s).unwrap()
}

#[derive(Debug, Deserialize)]
pub struct StatusVectors {
    pub success: Vec<i32>,
    pub known: Vec<KnownStatus>,
    pub unknown: Vec<i32>,
}

#[derive(Debug, Deserialize)]
pub struct KnownStatus {
    pub code: i32,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ResponseVector {
    pub description: String,
    pub status_code: i32,
    pub payload: String,
    #[serde(default)]
    pub expect: Option<serde_json::Value>,
    #[serde(default)]
    pub expect_error: Option<ExpectError>,
}

#[derive(Debug, Deserialize)]
pub struct ExpectError {
    pub kind: String,
    #[serde(default)]
    pub status: Option<i32>,
}
