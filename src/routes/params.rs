// src/routes/params.rs

use std::str::FromStr;

use serde::Deserialize;

use crate::error::ApiError;
use crate::services::IndexScope;

/// Raw `?regionId=&domainId=&year=` query. Kept as strings so binding errors
/// are reported by name instead of as a generic extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct ScopeQ {
    #[serde(rename = "regionId")]
    pub region_id: Option<String>,
    #[serde(rename = "domainId")]
    pub domain_id: Option<String>,
    pub year: Option<String>,
}

impl ScopeQ {
    pub fn bind(self) -> Result<IndexScope, ApiError> {
        Ok(IndexScope {
            region_id: required(self.region_id, "regionId")?,
            domain_id: required(self.domain_id, "domainId")?,
            year: required(self.year, "year")?,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct RegionQ {
    pub region: Option<String>,
}

impl RegionQ {
    pub fn code(self) -> Result<String, ApiError> {
        self.region
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .ok_or(ApiError::MissingParameter("region"))
    }
}

fn required<T: FromStr>(raw: Option<String>, name: &'static str) -> Result<T, ApiError> {
    let raw = raw
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or(ApiError::MissingParameter(name))?;
    raw.parse().map_err(|_| ApiError::Invalid { name, value: raw })
}
