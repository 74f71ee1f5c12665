// src/services/subjective.rs

use crate::db::{Store, StoreResult};
use crate::models::{
    AverageValues, DomainItem, DomainValue, IndexType, MunicipalityQuestion, QuestionAnswers,
    QuestionGroups,
};

use super::pivot::{municipality_answers, single_region_answers};
use super::IndexScope;

const INDEX: IndexType = IndexType::Subjective;

pub struct SubjectiveIndexService<'a, S: ?Sized> {
    store: &'a S,
    scope: IndexScope,
}

impl<'a, S: Store + ?Sized> SubjectiveIndexService<'a, S> {
    pub fn new(store: &'a S, scope: IndexScope) -> Self {
        Self { store, scope }
    }

    pub async fn domains(&self) -> StoreResult<Vec<DomainItem>> {
        super::domains(self.store, INDEX).await
    }

    /// Questions of the scoped domain with their answers for the scoped
    /// region. Questions without any recorded answer are omitted.
    pub async fn questions(&self, additional: bool) -> StoreResult<Vec<QuestionAnswers>> {
        let region_ids = [self.scope.region_id];
        let mut out = Vec::new();

        for question in self.store.list_questions(self.scope.domain_id, additional).await? {
            let options = self.store.list_answer_options(question.id).await?;
            let option_ids: Vec<i64> = options.iter().map(|o| o.id).collect();
            let values = self
                .store
                .list_answer_values(question.id, &option_ids, &region_ids, self.scope.year)
                .await?;

            let ans = single_region_answers(&options, &values);
            if !ans.is_empty() {
                out.push(QuestionAnswers { qs: question.name, ans });
            }
        }
        Ok(out)
    }

    /// Questions pivoted over the municipalities of the scoped region. Values
    /// for all municipalities are fetched in one query per question.
    pub async fn questions_for_municipalities(
        &self,
        additional: bool,
    ) -> StoreResult<Vec<MunicipalityQuestion>> {
        let municipalities = self.store.list_municipalities(self.scope.region_id).await?;
        if municipalities.is_empty() {
            tracing::debug!(region_id = self.scope.region_id, "region has no municipalities");
            return Ok(Vec::new());
        }
        let municipality_ids: Vec<i64> = municipalities.iter().map(|m| m.id).collect();

        let mut out = Vec::new();
        for question in self.store.list_questions(self.scope.domain_id, additional).await? {
            let options = self.store.list_answer_options(question.id).await?;
            let option_ids: Vec<i64> = options.iter().map(|o| o.id).collect();
            let values = self
                .store
                .list_answer_values(question.id, &option_ids, &municipality_ids, self.scope.year)
                .await?;

            if let Some(data) = municipality_answers(&options, &values, &municipalities) {
                out.push(MunicipalityQuestion { title: question.name, data });
            }
        }
        Ok(out)
    }

    pub async fn question_groups(&self) -> StoreResult<QuestionGroups<QuestionAnswers>> {
        Ok(QuestionGroups {
            main: self.questions(false).await?,
            sub: self.questions(true).await?,
        })
    }

    pub async fn municipality_question_groups(
        &self,
    ) -> StoreResult<QuestionGroups<MunicipalityQuestion>> {
        Ok(QuestionGroups {
            main: self.questions_for_municipalities(false).await?,
            sub: self.questions_for_municipalities(true).await?,
        })
    }

    pub async fn average_value_for_region(&self) -> StoreResult<String> {
        super::average_value_for_region(self.store, INDEX, &self.scope).await
    }

    pub async fn average_values_for_domains(&self) -> StoreResult<Vec<DomainValue>> {
        super::average_values_for_domains(self.store, INDEX, &self.scope).await
    }

    pub async fn average_values(&self) -> StoreResult<AverageValues> {
        Ok(AverageValues {
            region: self.average_value_for_region().await?,
            domains: self.average_values_for_domains().await?,
        })
    }
}
