// src/db/repository.rs
//
// Typed read interfaces over the statistics tables. Every method is a single
// filtered read; absence of rows is `None` / empty, never an error.

use async_trait::async_trait;

use super::StoreResult;
use crate::models::{
    AnswerOption, AnswerValue, Domain, DomainAverage, Indicator, IndicatorKey, IndexType,
    Question, Region, ResultType, YearAverage,
};

#[async_trait]
pub trait RegionRepository: Send + Sync {
    async fn find_region_by_code(&self, code: &str) -> StoreResult<Option<Region>>;

    /// Direct children of `parent_id`, by sort then id.
    async fn list_municipalities(&self, parent_id: i64) -> StoreResult<Vec<Region>>;
}

#[async_trait]
pub trait DomainRepository: Send + Sync {
    /// Id of the index type row, first by sort when several share a code.
    async fn find_index_id(&self, index: IndexType) -> StoreResult<Option<i64>>;

    /// Domains of an index, by sort then id.
    async fn list_domains(&self, index_id: i64) -> StoreResult<Vec<Domain>>;

    async fn domain_xml_id(&self, domain_id: i64) -> StoreResult<Option<String>>;
}

#[async_trait]
pub trait SurveyRepository: Send + Sync {
    async fn list_questions(&self, domain_id: i64, additional: bool) -> StoreResult<Vec<Question>>;

    async fn list_answer_options(&self, question_id: i64) -> StoreResult<Vec<AnswerOption>>;

    /// Values for one question restricted to the given options, regions and
    /// year, in insertion (id) order.
    async fn list_answer_values(
        &self,
        question_id: i64,
        option_ids: &[i64],
        region_ids: &[i64],
        year: i32,
    ) -> StoreResult<Vec<AnswerValue>>;
}

#[async_trait]
pub trait IndicatorRepository: Send + Sync {
    /// All result types, by sort then id.
    async fn list_result_types(&self) -> StoreResult<Vec<ResultType>>;

    async fn result_type_xml_id(&self, result_type_id: i64) -> StoreResult<Option<String>>;

    /// Indicators carrying both halves of `key`, by id.
    async fn list_indicators(&self, key: &IndicatorKey) -> StoreResult<Vec<Indicator>>;

    /// Latest value of an indicator for a region and year.
    async fn find_indicator_value(
        &self,
        indicator_id: i64,
        region_id: i64,
        year: i32,
    ) -> StoreResult<Option<String>>;
}

#[async_trait]
pub trait AverageRepository: Send + Sync {
    /// Every yearly average of an index for a region.
    async fn list_region_averages(&self, region_id: i64, index_id: i64) -> StoreResult<Vec<YearAverage>>;

    /// Highest-id row for (region, index, year).
    async fn latest_region_average(
        &self,
        region_id: i64,
        index_id: i64,
        year: i32,
    ) -> StoreResult<Option<String>>;

    /// Domain averages for (region, index, year), by id descending.
    async fn list_domain_averages(
        &self,
        region_id: i64,
        index_id: i64,
        year: i32,
    ) -> StoreResult<Vec<DomainAverage>>;

    /// Highest-id row for (region, result type, year).
    async fn find_result_type_average(
        &self,
        region_id: i64,
        result_type_id: i64,
        year: i32,
    ) -> StoreResult<Option<String>>;
}

#[async_trait]
pub trait FileRepository: Send + Sync {
    /// Public URL of a stored file.
    async fn file_url(&self, file_id: i64) -> StoreResult<Option<String>>;
}

/// Everything the handlers read from.
pub trait Store:
    RegionRepository
    + DomainRepository
    + SurveyRepository
    + IndicatorRepository
    + AverageRepository
    + FileRepository
{
}

impl<T> Store for T where
    T: RegionRepository
        + DomainRepository
        + SurveyRepository
        + IndicatorRepository
        + AverageRepository
        + FileRepository
{
}
