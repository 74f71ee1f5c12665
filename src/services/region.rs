// src/services/region.rs

use crate::db::{AverageRepository, DomainRepository, RegionRepository, StoreResult};
use crate::error::ApiError;
use crate::models::{AverageYearValue, IndexType, Region, RegionData};

/// A region resolved from its code, plus the yearly index averages the map
/// shows for it.
pub struct RegionLookup<'a, S: ?Sized> {
    store: &'a S,
    region: Region,
}

impl<'a, S> RegionLookup<'a, S>
where
    S: RegionRepository + DomainRepository + AverageRepository + ?Sized,
{
    pub async fn resolve_by_code(store: &'a S, code: &str) -> Result<Self, ApiError> {
        let region = store
            .find_region_by_code(code)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("region '{code}' not found")))?;
        Ok(Self { store, region })
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    pub fn name(&self) -> &str {
        &self.region.name
    }

    /// Relative link to the region page.
    pub fn link(&self) -> String {
        format!("{}/", self.region.code)
    }

    pub async fn subjective_index_average_values(&self) -> StoreResult<Vec<AverageYearValue>> {
        self.average_values(IndexType::Subjective).await
    }

    pub async fn statistical_index_average_values(&self) -> StoreResult<Vec<AverageYearValue>> {
        self.average_values(IndexType::Statistical).await
    }

    async fn average_values(&self, index: IndexType) -> StoreResult<Vec<AverageYearValue>> {
        let Some(index_id) = self.store.find_index_id(index).await? else {
            tracing::debug!(index = index.code(), "index type is not configured");
            return Ok(Vec::new());
        };

        let (min, max) = index.bounds();
        let mut rows = self.store.list_region_averages(self.region.id, index_id).await?;
        rows.sort_by_key(|r| (r.year, r.id));

        Ok(rows
            .into_iter()
            .map(|r| AverageYearValue { title: r.year, min, max, val: r.value })
            .collect())
    }

    pub async fn region_data(&self) -> StoreResult<RegionData> {
        Ok(RegionData {
            name: self.name().to_string(),
            link: self.link(),
            sub: self.subjective_index_average_values().await?,
            stat: self.statistical_index_average_values().await?,
        })
    }
}
