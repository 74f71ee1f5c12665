// src/services/pivot.rs
//
// Reshaping of raw answer values into the structures the dashboard renders.
// Both pivots are pure functions over rows already fetched from the store.

use std::collections::HashMap;

use crate::models::{
    Answer, AnswerOption, AnswerValue, MunicipalityAnswer, MunicipalityAnswers, Region,
};

/// Percentages are the stored value with a literal `%` appended.
pub fn percent(raw: &str) -> String {
    format!("{raw}%")
}

/// Latest value per answer option among `values` (rows come in id order).
fn latest_by_option<'v>(values: impl IntoIterator<Item = &'v AnswerValue>) -> HashMap<i64, &'v str> {
    let mut by_option = HashMap::new();
    for v in values {
        by_option.insert(v.answer_option_id, v.value.as_str());
    }
    by_option
}

/// Single-region pivot: options without a value are dropped, the rest keep
/// option order. An empty result means the question should be dropped.
pub fn single_region_answers(options: &[AnswerOption], values: &[AnswerValue]) -> Vec<Answer> {
    let by_option = latest_by_option(values);
    options
        .iter()
        .filter_map(|o| {
            by_option.get(&o.id).map(|v| Answer { txt: o.text.clone(), val: percent(v) })
        })
        .collect()
}

/// Multi-region pivot over a municipality list. Every municipality appears
/// once, in list order, with `items: []` when it has no values. Returns
/// `None` when no municipality has any value.
pub fn municipality_answers(
    options: &[AnswerOption],
    values: &[AnswerValue],
    municipalities: &[Region],
) -> Option<Vec<MunicipalityAnswers>> {
    let mut by_region: HashMap<i64, Vec<&AnswerValue>> = HashMap::new();
    for v in values {
        by_region.entry(v.region_id).or_default().push(v);
    }

    let data: Vec<MunicipalityAnswers> = municipalities
        .iter()
        .map(|m| {
            let latest = latest_by_option(by_region.remove(&m.id).unwrap_or_default());
            let items = options
                .iter()
                .filter_map(|o| {
                    latest.get(&o.id).map(|v| MunicipalityAnswer {
                        title: o.text.clone(),
                        value: percent(v),
                    })
                })
                .collect();
            MunicipalityAnswers { title: m.name.clone(), items }
        })
        .collect();

    if data.iter().all(|m| m.items.is_empty()) {
        return None;
    }
    Some(data)
}
