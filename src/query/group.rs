use crate::error::Result;
use crate::table::Table;
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// One group produced by [`group_sum`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupTotal {
    pub key: String,
    pub total: i64,
}

impl GroupTotal {
    pub fn new(key: impl Into<String>, total: i64) -> Self {
        Self {
            key: key.into(),
            total,
        }
    }
}

/// Sum `sum_field` per distinct value of `group_field`.
///
/// Groups come out in the order their key is first seen. Missing values
/// count as 0; a null key groups under `""`. `sum_field` must already be
/// coerced.
pub fn group_sum(table: &Table, group_field: &str, sum_field: &str) -> Result<Vec<GroupTotal>> {
    let keys = table.utf8_column(group_field)?;
    let values = table.int64_column(sum_field)?;

    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<GroupTotal> = Vec::new();
    for (key, value) in keys.iter().zip(values.iter()) {
        let key = key.map(str::trim).unwrap_or_default();
        let slot = *slots.entry(key).or_insert_with(|| {
            groups.push(GroupTotal::new(key, 0));
            groups.len() - 1
        });
        groups[slot].total = groups[slot].total.saturating_add(value.unwrap_or(0));
    }

    debug!(group_field, sum_field, groups = groups.len(), "group_sum");
    Ok(groups)
}
