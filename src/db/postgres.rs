// src/db/postgres.rs

use async_trait::async_trait;
use sqlx::{query_as, query_scalar, PgPool};

use super::{
    AverageRepository, DomainRepository, FileRepository, IndicatorRepository, RegionRepository,
    StoreResult, SurveyRepository,
};
use crate::models::{
    AnswerOption, AnswerValue, Domain, DomainAverage, Indicator, IndicatorKey, IndexType,
    Question, Region, ResultType, YearAverage,
};

/// PostgreSQL-backed store. Numeric values are selected as `value::text` so
/// the API echoes them exactly as stored.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
    upload_url_prefix: String,
}

impl PgStore {
    pub fn new(pool: PgPool, upload_url_prefix: impl Into<String>) -> Self {
        Self { pool, upload_url_prefix: upload_url_prefix.into() }
    }
}

#[async_trait]
impl RegionRepository for PgStore {
    async fn find_region_by_code(&self, code: &str) -> StoreResult<Option<Region>> {
        let row = query_as::<_, Region>(
            r#"SELECT id, parent_id, name, code, sort
               FROM public.regions
               WHERE code = $1
               ORDER BY id
               LIMIT 1"#)
            .bind(code)
            .fetch_optional(&self.pool).await?;
        Ok(row)
    }

    async fn list_municipalities(&self, parent_id: i64) -> StoreResult<Vec<Region>> {
        let rows = query_as::<_, Region>(
            r#"SELECT id, parent_id, name, code, sort
               FROM public.regions
               WHERE parent_id = $1
               ORDER BY sort, id"#)
            .bind(parent_id)
            .fetch_all(&self.pool).await?;
        Ok(rows)
    }
}

#[async_trait]
impl DomainRepository for PgStore {
    async fn find_index_id(&self, index: IndexType) -> StoreResult<Option<i64>> {
        let id = query_scalar::<_, i64>(
            r#"SELECT id FROM public.index_types
               WHERE hl_code = $1
               ORDER BY sort, id
               LIMIT 1"#)
            .bind(index.code())
            .fetch_optional(&self.pool).await?;
        Ok(id)
    }

    async fn list_domains(&self, index_id: i64) -> StoreResult<Vec<Domain>> {
        let rows = query_as::<_, Domain>(
            r#"SELECT id, index_id, xml_id, name, file_id, sort
               FROM public.domains
               WHERE index_id = $1
               ORDER BY sort, id"#)
            .bind(index_id)
            .fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn domain_xml_id(&self, domain_id: i64) -> StoreResult<Option<String>> {
        let xml_id = query_scalar::<_, Option<String>>(
            r#"SELECT xml_id FROM public.domains WHERE id = $1"#)
            .bind(domain_id)
            .fetch_optional(&self.pool).await?;
        Ok(xml_id.flatten())
    }
}

#[async_trait]
impl SurveyRepository for PgStore {
    async fn list_questions(&self, domain_id: i64, additional: bool) -> StoreResult<Vec<Question>> {
        let rows = query_as::<_, Question>(
            r#"SELECT id, domain_id, name, is_additional, sort
               FROM public.questions
               WHERE domain_id = $1 AND is_additional = $2
               ORDER BY sort, id"#)
            .bind(domain_id).bind(additional)
            .fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn list_answer_options(&self, question_id: i64) -> StoreResult<Vec<AnswerOption>> {
        let rows = query_as::<_, AnswerOption>(
            r#"SELECT id, question_id, text, sort
               FROM public.answer_options
               WHERE question_id = $1
               ORDER BY sort, id"#)
            .bind(question_id)
            .fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn list_answer_values(
        &self,
        question_id: i64,
        option_ids: &[i64],
        region_ids: &[i64],
        year: i32,
    ) -> StoreResult<Vec<AnswerValue>> {
        if option_ids.is_empty() || region_ids.is_empty() {
            return Ok(Vec::new());
        }
        let rows = query_as::<_, AnswerValue>(
            r#"SELECT id, region_id, question_id, answer_option_id, year, value::text AS value
               FROM public.subjective_values
               WHERE question_id = $1
                 AND answer_option_id = ANY($2)
                 AND region_id = ANY($3)
                 AND year = $4
               ORDER BY id"#)
            .bind(question_id).bind(option_ids).bind(region_ids).bind(year)
            .fetch_all(&self.pool).await?;
        Ok(rows)
    }
}

#[async_trait]
impl IndicatorRepository for PgStore {
    async fn list_result_types(&self) -> StoreResult<Vec<ResultType>> {
        let rows = query_as::<_, ResultType>(
            r#"SELECT id, xml_id, name, description, file_id, sort
               FROM public.result_types
               ORDER BY sort, id"#)
            .fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn result_type_xml_id(&self, result_type_id: i64) -> StoreResult<Option<String>> {
        let xml_id = query_scalar::<_, Option<String>>(
            r#"SELECT xml_id FROM public.result_types WHERE id = $1"#)
            .bind(result_type_id)
            .fetch_optional(&self.pool).await?;
        Ok(xml_id.flatten())
    }

    async fn list_indicators(&self, key: &IndicatorKey) -> StoreResult<Vec<Indicator>> {
        let rows = query_as::<_, Indicator>(
            r#"SELECT id, name, description, result_type_xml_id, domain_xml_id
               FROM public.indicators
               WHERE result_type_xml_id = $1 AND domain_xml_id = $2
               ORDER BY id"#)
            .bind(&key.result_type_xml_id).bind(&key.domain_xml_id)
            .fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn find_indicator_value(
        &self,
        indicator_id: i64,
        region_id: i64,
        year: i32,
    ) -> StoreResult<Option<String>> {
        let value = query_scalar::<_, String>(
            r#"SELECT value::text FROM public.statistical_values
               WHERE indicator_id = $1 AND region_id = $2 AND year = $3
               ORDER BY id DESC
               LIMIT 1"#)
            .bind(indicator_id).bind(region_id).bind(year)
            .fetch_optional(&self.pool).await?;
        Ok(value)
    }
}

#[async_trait]
impl AverageRepository for PgStore {
    async fn list_region_averages(&self, region_id: i64, index_id: i64) -> StoreResult<Vec<YearAverage>> {
        let rows = query_as::<_, YearAverage>(
            r#"SELECT id, year, value::text AS value
               FROM public.average_region_values
               WHERE region_id = $1 AND index_id = $2
               ORDER BY year, id"#)
            .bind(region_id).bind(index_id)
            .fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn latest_region_average(
        &self,
        region_id: i64,
        index_id: i64,
        year: i32,
    ) -> StoreResult<Option<String>> {
        let value = query_scalar::<_, String>(
            r#"SELECT value::text FROM public.average_region_values
               WHERE region_id = $1 AND index_id = $2 AND year = $3
               ORDER BY id DESC
               LIMIT 1"#)
            .bind(region_id).bind(index_id).bind(year)
            .fetch_optional(&self.pool).await?;
        Ok(value)
    }

    async fn list_domain_averages(
        &self,
        region_id: i64,
        index_id: i64,
        year: i32,
    ) -> StoreResult<Vec<DomainAverage>> {
        let rows = query_as::<_, DomainAverage>(
            r#"SELECT id, domain_id, value::text AS value
               FROM public.average_domain_values
               WHERE region_id = $1 AND index_id = $2 AND year = $3
               ORDER BY id DESC"#)
            .bind(region_id).bind(index_id).bind(year)
            .fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn find_result_type_average(
        &self,
        region_id: i64,
        result_type_id: i64,
        year: i32,
    ) -> StoreResult<Option<String>> {
        let value = query_scalar::<_, String>(
            r#"SELECT value::text FROM public.average_result_type_values
               WHERE region_id = $1 AND result_type_id = $2 AND year = $3
               ORDER BY id DESC
               LIMIT 1"#)
            .bind(region_id).bind(result_type_id).bind(year)
            .fetch_optional(&self.pool).await?;
        Ok(value)
    }
}

#[async_trait]
impl FileRepository for PgStore {
    async fn file_url(&self, file_id: i64) -> StoreResult<Option<String>> {
        let row: Option<(String, String)> = query_as(
            r#"SELECT subdir, file_name FROM public.files WHERE id = $1"#)
            .bind(file_id)
            .fetch_optional(&self.pool).await?;
        Ok(row.map(|(subdir, file_name)| {
            format!("{}/{}/{}", self.upload_url_prefix, subdir.trim_matches('/'), file_name)
        }))
    }
}
