// src/services/statistical.rs

use crate::db::{Store, StoreResult};
use crate::models::{
    AverageValues, DomainItem, DomainValue, Indicator, IndicatorKey, IndicatorRow, IndexType,
    ResultTypeIndicators,
};

use super::IndexScope;

const INDEX: IndexType = IndexType::Statistical;

/// Indicators live in a separate table family and reference result types and
/// domains by their xml id. No key when either side lacks one.
pub fn indicator_key(
    result_type_xml_id: Option<String>,
    domain_xml_id: Option<String>,
) -> Option<IndicatorKey> {
    match (result_type_xml_id, domain_xml_id) {
        (Some(rt), Some(d)) if !rt.is_empty() && !d.is_empty() => Some(IndicatorKey {
            result_type_xml_id: rt,
            domain_xml_id: d,
        }),
        _ => None,
    }
}

/// Keeps only indicators that have a value for the requested region and year.
pub fn valued_indicators(indicators: Vec<(Indicator, Option<String>)>) -> Vec<IndicatorRow> {
    indicators
        .into_iter()
        .filter_map(|(indicator, value)| {
            value.map(|value| IndicatorRow {
                row_title: indicator.name,
                text: indicator.description,
                value,
            })
        })
        .collect()
}

pub struct StatisticalIndexService<'a, S: ?Sized> {
    store: &'a S,
    scope: IndexScope,
}

impl<'a, S: Store + ?Sized> StatisticalIndexService<'a, S> {
    pub fn new(store: &'a S, scope: IndexScope) -> Self {
        Self { store, scope }
    }

    pub async fn domains(&self) -> StoreResult<Vec<DomainItem>> {
        super::domains(self.store, INDEX).await
    }

    /// Result types with the indicators that carry data for the scope.
    /// Result types left without indicators are omitted.
    pub async fn results_with_indicators(&self) -> StoreResult<Vec<ResultTypeIndicators>> {
        let domain_xml_id = self.store.domain_xml_id(self.scope.domain_id).await?;
        if domain_xml_id.is_none() {
            tracing::debug!(domain_id = self.scope.domain_id, "domain has no xml id");
        }

        let mut results = Vec::new();
        for rt in self.store.list_result_types().await? {
            let key = indicator_key(
                self.store.result_type_xml_id(rt.id).await?,
                domain_xml_id.clone(),
            );
            let Some(key) = key else { continue };

            let data = self.indicator_rows(&key).await?;
            if data.is_empty() {
                continue;
            }

            results.push(ResultTypeIndicators {
                title: rt.name,
                notes: rt.description,
                header_aside: self
                    .store
                    .find_result_type_average(self.scope.region_id, rt.id, self.scope.year)
                    .await?
                    .unwrap_or_default(),
                icon: super::icon_url(self.store, rt.file_id).await?,
                data,
            });
        }
        Ok(results)
    }

    async fn indicator_rows(&self, key: &IndicatorKey) -> StoreResult<Vec<IndicatorRow>> {
        let mut with_values = Vec::new();
        for indicator in self.store.list_indicators(key).await? {
            let value = self
                .store
                .find_indicator_value(indicator.id, self.scope.region_id, self.scope.year)
                .await?;
            with_values.push((indicator, value));
        }
        Ok(valued_indicators(with_values))
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
