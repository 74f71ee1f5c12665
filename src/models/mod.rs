// src/models/mod.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ───────────────────────────────────────
// Index types
// ───────────────────────────────────────
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndexType {
    Subjective,
    Statistical,
}

impl IndexType {
    /// Code stored in `index_types.hl_code`.
    pub fn code(self) -> &'static str {
        match self {
            IndexType::Subjective => "SubjectiveIndex",
            IndexType::Statistical => "StatisticalIndex",
        }
    }

    /// Display bounds the map renders averages against.
    pub fn bounds(self) -> (i32, i32) {
        match self {
            IndexType::Subjective => (0, 1),
            IndexType::Statistical => (-1, 1),
        }
    }
}

// ───────────────────────────────────────
// Taxonomy
// ───────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Region {
    pub id: i64,
    pub parent_id: Option<i64>,
    pub name: String,
    pub code: String,
    pub sort: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Domain {
    pub id: i64,
    pub index_id: i64,
    pub xml_id: Option<String>,
    pub name: String,
    pub file_id: Option<i64>,
    pub sort: i32,
}

// ───────────────────────────────────────
// Subjective index: survey
// ───────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub id: i64,
    pub domain_id: i64,
    pub name: String,
    pub is_additional: bool,
    pub sort: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AnswerOption {
    pub id: i64,
    pub question_id: i64,
    pub text: String,
    pub sort: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AnswerValue {
    pub id: i64,
    pub region_id: i64,
    pub question_id: i64,
    pub answer_option_id: i64,
    pub year: i32,
    pub value: String,            // NUMERIC rendered as text
}

// ───────────────────────────────────────
// Statistical index: result types & indicators
// ───────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResultType {
    pub id: i64,
    pub xml_id: Option<String>,
    pub name: String,
    pub description: String,
    pub file_id: Option<i64>,
    pub sort: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Indicator {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub result_type_xml_id: String,
    pub domain_xml_id: String,
}

/// Cross key joining indicators to a (result type, domain) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorKey {
    pub result_type_xml_id: String,
    pub domain_xml_id: String,
}

// ───────────────────────────────────────
// Pre-computed averages
// ───────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct YearAverage {
    pub id: i64,
    pub year: i32,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DomainAverage {
    pub id: i64,
    pub domain_id: i64,
    pub value: String,
}

// ───────────────────────────────────────
// DTOs returned by the endpoints
// ───────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AverageYearValue {
    pub title: i32,
    pub min: i32,
    pub max: i32,
    pub val: String,
}

#[derive(Debug, Serialize)]
pub struct RegionData {
    pub name: String,
    pub link: String,
    pub sub: Vec<AverageYearValue>,
    pub stat: Vec<AverageYearValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainItem {
    pub id: i64,
    pub name: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainValue {
    pub id: i64,
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct AverageValues {
    pub region: String,
    pub domains: Vec<DomainValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Answer {
    pub txt: String,
    pub val: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionAnswers {
    pub qs: String,
    pub ans: Vec<Answer>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MunicipalityAnswer {
    pub title: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MunicipalityAnswers {
    pub title: String,
    pub items: Vec<MunicipalityAnswer>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MunicipalityQuestion {
    pub title: String,
    pub data: Vec<MunicipalityAnswers>,
}

/// Main and additional question lists, keyed the way the dashboard reads them.
#[derive(Debug, Serialize)]
pub struct QuestionGroups<T> {
    pub main: Vec<T>,
    pub sub: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorRow {
    pub row_title: String,
    pub text: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultTypeIndicators {
    pub title: String,
    pub notes: String,
    pub header_aside: String,
    pub icon: String,
    pub data: Vec<IndicatorRow>,
}
