//! Aggregate queries: busiest interchanges and longest lines.

use std::collections::BTreeMap;

use ug_model::Model;

use crate::error::{QueryError, QueryResult};

/// The maximum of some per-entity count, and every entity achieving it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Extremum {
    pub count: usize,
    /// Entity names in model insertion order.
    pub names: Vec<String>,
}

/// Group names by count and keep the highest group.
fn max_group<'a>(
    counts: impl Iterator<Item = (&'a str, usize)>,
    what: &'static str,
) -> QueryResult<Extremum> {
    let mut groups: BTreeMap<usize, Vec<String>> = BTreeMap::new();
    for (name, count) in counts {
        groups.entry(count).or_default().push(name.to_string());
    }

    groups
        .pop_last()
        .map(|(count, names)| Extremum { count, names })
        .ok_or(QueryError::EmptyModel { what })
}

/// The station(s) served by the most lines.
///
/// Fails with [`QueryError::EmptyModel`] if the model has no stations.
pub fn most_interchanges(model: &Model) -> QueryResult<Extremum> {
    let mut counts = Vec::with_capacity(model.station_count());
    for name in model.stations() {
        counts.push((name, model.station(name)?.interchange_count()));
    }
    max_group(counts.into_iter(), "stations")
}

/// The line(s) with the most stations.
///
/// Fails with [`QueryError::EmptyModel`] if the model has no lines.
pub fn longest_line(model: &Model) -> QueryResult<Extremum> {
    let mut counts = Vec::with_capacity(model.line_count());
    for name in model.lines() {
        counts.push((name, model.line(name)?.stations().len()));
    }
    max_group(counts.into_iter(), "lines")
}
