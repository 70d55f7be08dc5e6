//! Data Transfer Objects for the HTTP API.
//!
//! Response keys use camelCase to match the public API contract of the
//! convert endpoint.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::UnitDescriptor;
use crate::services::Conversion;

/// Query parameters for the convert endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConvertQuery {
    /// Combined number and unit string, e.g. "3.5L"
    #[serde(default)]
    pub input: Option<String>,
    /// Optional explicit conversion target symbol
    #[serde(default)]
    pub target: Option<String>,
}

/// Successful conversion response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResponse {
    /// Evaluated source magnitude, unrounded
    pub init_num: f64,
    /// Canonical source symbol
    pub init_unit: String,
    /// Converted value, rounded to five decimal places
    pub return_num: f64,
    /// Canonical target symbol
    pub return_unit: String,
    /// Human-readable result sentence
    pub string: String,
}

impl ConversionResponse {
    pub fn new(conversion: &Conversion, sentence: String) -> Self {
        Self {
            init_num: conversion.source_value,
            init_unit: conversion.source_unit.clone(),
            return_num: conversion.target_value,
            return_unit: conversion.target_unit.clone(),
            string: sentence,
        }
    }
}

/// One unit in the catalog listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitInfoDto {
    pub symbol: String,
    pub name: String,
    pub plural: String,
    /// Lower-cased key of the default partner, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_target: Option<String>,
    /// Explicit conversion partners, keyed by lower-cased target
    pub ratios: BTreeMap<String, f64>,
    pub countries: Vec<String>,
    pub description: String,
}

impl From<&UnitDescriptor> for UnitInfoDto {
    fn from(unit: &UnitDescriptor) -> Self {
        Self {
            symbol: unit.symbol.clone(),
            name: unit.name.clone(),
            plural: unit.plural.clone(),
            default_target: unit.default_target.as_ref().map(|t| t.unit.clone()),
            ratios: unit.ratios.clone(),
            countries: unit.usage.countries.clone(),
            description: unit.usage.description.clone(),
        }
    }
}

/// Catalog listing response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitListResponse {
    pub units: Vec<UnitInfoDto>,
    pub total: usize,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Active catalog profile
    pub profile: String,
    /// Number of units in the active table
    pub units: usize,
}
