// src/services/mod.rs

pub mod pivot;
pub mod region;
pub mod statistical;
pub mod subjective;

pub use region::RegionLookup;
pub use statistical::StatisticalIndexService;
pub use subjective::SubjectiveIndexService;

use crate::db::{AverageRepository, DomainRepository, FileRepository, StoreResult};
use crate::models::{DomainItem, DomainValue, IndexType};

/// (region, domain, year) triple every index query is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexScope {
    pub region_id: i64,
    pub domain_id: i64,
    pub year: i32,
}

/// Icon URL for an optional file reference, `""` when there is none.
pub(crate) async fn icon_url<S>(store: &S, file_id: Option<i64>) -> StoreResult<String>
where
    S: FileRepository + ?Sized,
{
    match file_id {
        Some(id) => Ok(store.file_url(id).await?.unwrap_or_default()),
        None => Ok(String::new()),
    }
}

async fn index_id<S>(store: &S, index: IndexType) -> StoreResult<Option<i64>>
where
    S: DomainRepository + ?Sized,
{
    let id = store.find_index_id(index).await?;
    if id.is_none() {
        tracing::debug!(index = index.code(), "index type is not configured");
    }
    Ok(id)
}

pub(crate) async fn domains<S>(store: &S, index: IndexType) -> StoreResult<Vec<DomainItem>>
where
    S: DomainRepository + FileRepository + ?Sized,
{
    let Some(index_id) = index_id(store, index).await? else {
        return Ok(Vec::new());
    };

    let mut items = Vec::new();
    for d in store.list_domains(index_id).await? {
        items.push(DomainItem {
            id: d.id,
            name: d.name,
            icon: icon_url(store, d.file_id).await?,
        });
    }
    Ok(items)
}

pub(crate) async fn average_value_for_region<S>(
    store: &S,
    index: IndexType,
    scope: &IndexScope,
) -> StoreResult<String>
where
    S: DomainRepository + AverageRepository + ?Sized,
{
    let Some(index_id) = index_id(store, index).await? else {
        return Ok(String::new());
    };
    Ok(store
        .latest_region_average(scope.region_id, index_id, scope.year)
        .await?
        .unwrap_or_default())
}

pub(crate) async fn average_values_for_domains<S>(
    store: &S,
    index: IndexType,
    scope: &IndexScope,
) -> StoreResult<Vec<DomainValue>>
where
    S: DomainRepository + AverageRepository + ?Sized,
{
    let Some(index_id) = index_id(store, index).await? else {
        return Ok(Vec::new());
    };
    Ok(store
        .list_domain_averages(scope.region_id, index_id, scope.year)
        .await?
        .into_iter()
        .map(|r| DomainValue { id: r.domain_id, value: r.value })
        .collect())
}
