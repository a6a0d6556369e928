//! Catalog record types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Governance type of a university.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Owned and run by the state.
    Public,
    /// Owned by the private sector.
    Private,
    /// Non-profit national universities.
    National,
    /// Religious (Al-Azhar) universities.
    Azhar,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Public,
        Category::Private,
        Category::National,
        Category::Azhar,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Public => "public",
            Category::Private => "private",
            Category::National => "national",
            Category::Azhar => "azhar",
        }
    }
}

/// Coarse geographic grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    Cairo,
    Alexandria,
    Delta,
    UpperEgypt,
    SuezCanal,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::Cairo,
        Region::Alexandria,
        Region::Delta,
        Region::UpperEgypt,
        Region::SuezCanal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Cairo => "cairo",
            Region::Alexandria => "alexandria",
            Region::Delta => "delta",
            Region::UpperEgypt => "upper-egypt",
            Region::SuezCanal => "suez-canal",
        }
    }
}

/// A string did not name a known category or region.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseEnumError {
    #[error("unknown category: {0}")]
    Category(String),

    #[error("unknown region: {0}")]
    Region(String),
}

impl FromStr for Category {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ParseEnumError::Category(s.to_string()))
    }
}

impl FromStr for Region {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| ParseEnumError::Region(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Annual fee range in EGP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeRange {
    pub min: u64,
    pub max: u64,
}

impl FeeRange {
    /// Midpoint of the range, used for fee averages and sorting.
    pub fn midpoint(&self) -> f64 {
        (self.min as f64 + self.max as f64) / 2.0
    }
}

/// A university as served by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct University {
    pub id: String,
    pub name: String,
    pub name_en: String,
    #[serde(rename = "type")]
    pub category: Category,
    pub location: String,
    pub location_en: String,
    pub region: Region,
    pub established: i32,
    pub rating: f64,
    pub fees: FeeRange,
    #[serde(default)]
    pub faculties: Vec<String>,
    #[serde(default)]
    pub faculties_en: Vec<String>,
    #[serde(default)]
    pub specialties: Vec<String>,
    pub description: String,
    pub description_en: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub min_grade: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_grade: Option<u32>,
    pub students: u64,
    #[serde(default)]
    pub acceptance_rate: u32,
    #[serde(default)]
    pub employment_rate: u32,
    /// Per-faculty detail, keyed by the Arabic faculty name. Served as-is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detailed_faculties: Option<BTreeMap<String, Faculty>>,
}

/// Detailed description of one faculty within a university.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faculty {
    pub name_en: String,
    pub description: String,
    pub description_en: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_fees: Option<FeeRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_fees_en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_en: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub departments: Vec<Department>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub specializations: Vec<Specialization>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub name: String,
    pub name_en: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fees: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fees_en: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub degrees: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub degrees_en: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Specialization {
    pub name: String,
    pub name_en: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fees: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fees_en: Option<String>,
}
