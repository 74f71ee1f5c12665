// src/db/memory.rs
//
// In-memory store used by service and router tests. Filters and orderings
// mirror the SQL in `postgres.rs`.

use std::collections::HashMap;

use async_trait::async_trait;

use super::{
    AverageRepository, DomainRepository, FileRepository, IndicatorRepository, RegionRepository,
    StoreResult, SurveyRepository,
};
use crate::models::{
    AnswerOption, AnswerValue, Domain, DomainAverage, Indicator, IndicatorKey, IndexType,
    Question, Region, ResultType, YearAverage,
};

#[derive(Debug, Clone)]
pub struct IndexRow {
    pub id: i64,
    pub index: IndexType,
    pub sort: i32,
}

#[derive(Debug, Clone)]
pub struct ValueRow {
    pub id: i64,
    pub region_id: i64,
    pub key: i64,
    pub year: i32,
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct DomainValueRow {
    pub id: i64,
    pub region_id: i64,
    pub index_id: i64,
    pub domain_id: i64,
    pub year: i32,
    pub value: String,
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    pub regions: Vec<Region>,
    pub indexes: Vec<IndexRow>,
    pub domains: Vec<Domain>,
    pub questions: Vec<Question>,
    pub answer_options: Vec<AnswerOption>,
    pub answer_values: Vec<AnswerValue>,
    pub result_types: Vec<ResultType>,
    pub indicators: Vec<Indicator>,
    /// `key` is the indicator id.
    pub indicator_values: Vec<ValueRow>,
    /// `key` is the index id.
    pub region_averages: Vec<ValueRow>,
    pub domain_averages: Vec<DomainValueRow>,
    /// `key` is the result type id.
    pub result_type_averages: Vec<ValueRow>,
    pub files: HashMap<i64, String>,
}

impl MemoryStore {
    fn next_id(&self) -> i64 {
        let ids = self.answer_values.iter().map(|r| r.id)
            .chain(self.indicator_values.iter().map(|r| r.id))
            .chain(self.region_averages.iter().map(|r| r.id))
            .chain(self.domain_averages.iter().map(|r| r.id))
            .chain(self.result_type_averages.iter().map(|r| r.id));
        ids.max().unwrap_or(0) + 1
    }

    pub fn region(mut self, id: i64, parent_id: Option<i64>, name: &str, code: &str, sort: i32) -> Self {
        self.regions.push(Region { id, parent_id, name: name.into(), code: code.into(), sort });
        self
    }

    pub fn index(mut self, id: i64, index: IndexType) -> Self {
        self.indexes.push(IndexRow { id, index, sort: 100 });
        self
    }

    pub fn domain(mut self, id: i64, index_id: i64, xml_id: &str, name: &str, file_id: Option<i64>, sort: i32) -> Self {
        self.domains.push(Domain {
            id,
            index_id,
            xml_id: Some(xml_id.to_string()).filter(|x| !x.is_empty()),
            name: name.into(),
            file_id,
            sort,
        });
        self
    }

    pub fn question(mut self, id: i64, domain_id: i64, name: &str, is_additional: bool) -> Self {
        let sort = self.questions.len() as i32 * 10;
        self.questions.push(Question { id, domain_id, name: name.into(), is_additional, sort });
        self
    }

    pub fn answer(mut self, id: i64, question_id: i64, text: &str) -> Self {
        let sort = self.answer_options.len() as i32 * 10;
        self.answer_options.push(AnswerOption { id, question_id, text: text.into(), sort });
        self
    }

    pub fn answer_value(mut self, region_id: i64, question_id: i64, answer_option_id: i64, year: i32, value: &str) -> Self {
        let id = self.next_id();
        self.answer_values.push(AnswerValue {
            id,
            region_id,
            question_id,
            answer_option_id,
            year,
            value: value.into(),
        });
        self
    }

    pub fn result_type(mut self, id: i64, xml_id: &str, name: &str, description: &str, file_id: Option<i64>, sort: i32) -> Self {
        self.result_types.push(ResultType {
            id,
            xml_id: Some(xml_id.to_string()).filter(|x| !x.is_empty()),
            name: name.into(),
            description: description.into(),
            file_id,
            sort,
        });
        self
    }

    pub fn indicator(mut self, id: i64, name: &str, description: &str, result_type_xml_id: &str, domain_xml_id: &str) -> Self {
        self.indicators.push(Indicator {
            id,
            name: name.into(),
            description: description.into(),
            result_type_xml_id: result_type_xml_id.into(),
            domain_xml_id: domain_xml_id.into(),
        });
        self
    }

    pub fn indicator_value(mut self, region_id: i64, indicator_id: i64, year: i32, value: &str) -> Self {
        let id = self.next_id();
        self.indicator_values.push(ValueRow { id, region_id, key: indicator_id, year, value: value.into() });
        self
    }

    pub fn region_average(mut self, region_id: i64, index_id: i64, year: i32, value: &str) -> Self {
        let id = self.next_id();
        self.region_averages.push(ValueRow { id, region_id, key: index_id, year, value: value.into() });
        self
    }

    pub fn domain_average(mut self, region_id: i64, index_id: i64, domain_id: i64, year: i32, value: &str) -> Self {
        let id = self.next_id();
        self.domain_averages.push(DomainValueRow { id, region_id, index_id, domain_id, year, value: value.into() });
        self
    }

    pub fn result_type_average(mut self, region_id: i64, result_type_id: i64, year: i32, value: &str) -> Self {
        let id = self.next_id();
        self.result_type_averages.push(ValueRow { id, region_id, key: result_type_id, year, value: value.into() });
        self
    }

    pub fn file(mut self, id: i64, url: &str) -> Self {
        self.files.insert(id, url.into());
        self
    }
}

fn latest(rows: &[ValueRow], region_id: i64, key: i64, year: i32) -> Option<String> {
    rows.iter()
        .filter(|r| r.region_id == region_id && r.key == key && r.year == year)
        .max_by_key(|r| r.id)
        .map(|r| r.value.clone())
}

#[async_trait]
impl RegionRepository for MemoryStore {
    async fn find_region_by_code(&self, code: &str) -> StoreResult<Option<Region>> {
        Ok(self.regions.iter().filter(|r| r.code == code).min_by_key(|r| r.id).cloned())
    }

    async fn list_municipalities(&self, parent_id: i64) -> StoreResult<Vec<Region>> {
        let mut rows: Vec<Region> = self.regions.iter()
            .filter(|r| r.parent_id == Some(parent_id))
            .cloned()
            .collect();
        rows.sort_by_key(|r| (r.sort, r.id));
        Ok(rows)
    }
}

#[async_trait]
impl DomainRepository for MemoryStore {
    async fn find_index_id(&self, index: IndexType) -> StoreResult<Option<i64>> {
        Ok(self.indexes.iter()
            .filter(|r| r.index == index)
            .min_by_key(|r| (r.sort, r.id))
            .map(|r| r.id))
    }

    async fn list_domains(&self, index_id: i64) -> StoreResult<Vec<Domain>> {
        let mut rows: Vec<Domain> = self.domains.iter()
            .filter(|d| d.index_id == index_id)
            .cloned()
            .collect();
        rows.sort_by_key(|d| (d.sort, d.id));
        Ok(rows)
    }

    async fn domain_xml_id(&self, domain_id: i64) -> StoreResult<Option<String>> {
        Ok(self.domains.iter().find(|d| d.id == domain_id).and_then(|d| d.xml_id.clone()))
    }
}

#[async_trait]
impl SurveyRepository for MemoryStore {
    async fn list_questions(&self, domain_id: i64, additional: bool) -> StoreResult<Vec<Question>> {
        let mut rows: Vec<Question> = self.questions.iter()
            .filter(|q| q.domain_id == domain_id && q.is_additional == additional)
            .cloned()
            .collect();
        rows.sort_by_key(|q| (q.sort, q.id));
        Ok(rows)
    }

    async fn list_answer_options(&self, question_id: i64) -> StoreResult<Vec<AnswerOption>> {
        let mut rows: Vec<AnswerOption> = self.answer_options.iter()
            .filter(|a| a.question_id == question_id)
            .cloned()
            .collect();
        rows.sort_by_key(|a| (a.sort, a.id));
        Ok(rows)
    }

    async fn list_answer_values(
        &self,
        question_id: i64,
        option_ids: &[i64],
        region_ids: &[i64],
        year: i32,
    ) -> StoreResult<Vec<AnswerValue>> {
        let mut rows: Vec<AnswerValue> = self.answer_values.iter()
            .filter(|v| {
                v.question_id == question_id
                    && v.year == year
                    && option_ids.contains(&v.answer_option_id)
                    && region_ids.contains(&v.region_id)
            })
            .cloned()
            .collect();
        rows.sort_by_key(|v| v.id);
        Ok(rows)
    }
}

#[async_trait]
impl IndicatorRepository for MemoryStore {
    async fn list_result_types(&self) -> StoreResult<Vec<ResultType>> {
        let mut rows = self.result_types.clone();
        rows.sort_by_key(|r| (r.sort, r.id));
        Ok(rows)
    }

    async fn result_type_xml_id(&self, result_type_id: i64) -> StoreResult<Option<String>> {
        Ok(self.result_types.iter().find(|r| r.id == result_type_id).and_then(|r| r.xml_id.clone()))
    }

    async fn list_indicators(&self, key: &IndicatorKey) -> StoreResult<Vec<Indicator>> {
        let mut rows: Vec<Indicator> = self.indicators.iter()
            .filter(|i| i.result_type_xml_id == key.result_type_xml_id && i.domain_xml_id == key.domain_xml_id)
            .cloned()
            .collect();
        rows.sort_by_key(|i| i.id);
        Ok(rows)
    }

    async fn find_indicator_value(&self, indicator_id: i64, region_id: i64, year: i32) -> StoreResult<Option<String>> {
        Ok(latest(&self.indicator_values, region_id, indicator_id, year))
    }
}

#[async_trait]
impl AverageRepository for MemoryStore {
    async fn list_region_averages(&self, region_id: i64, index_id: i64) -> StoreResult<Vec<YearAverage>> {
        let mut rows: Vec<YearAverage> = self.region_averages.iter()
            .filter(|r| r.region_id == region_id && r.key == index_id)
            .map(|r| YearAverage { id: r.id, year: r.year, value: r.value.clone() })
            .collect();
        rows.sort_by_key(|r| (r.year, r.id));
        Ok(rows)
    }

    async fn latest_region_average(&self, region_id: i64, index_id: i64, year: i32) -> StoreResult<Option<String>> {
        Ok(latest(&self.region_averages, region_id, index_id, year))
    }

    async fn list_domain_averages(&self, region_id: i64, index_id: i64, year: i32) -> StoreResult<Vec<DomainAverage>> {
        let mut rows: Vec<DomainAverage> = self.domain_averages.iter()
            .filter(|r| r.region_id == region_id && r.index_id == index_id && r.year == year)
            .map(|r| DomainAverage { id: r.id, domain_id: r.domain_id, value: r.value.clone() })
            .collect();
        rows.sort_by_key(|r| std::cmp::Reverse(r.id));
        Ok(rows)
    }

    async fn find_result_type_average(&self, region_id: i64, result_type_id: i64, year: i32) -> StoreResult<Option<String>> {
        Ok(latest(&self.result_type_averages, region_id, result_type_id, year))
    }
}

#[async_trait]
impl FileRepository for MemoryStore {
    async fn file_url(&self, file_id: i64) -> StoreResult<Option<String>> {
        Ok(self.files.get(&file_id).cloned())
    }
}
