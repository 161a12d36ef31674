//! Sorted listings for display.

use ug_model::Model;

use crate::error::QueryResult;

/// Lines serving a station, alphabetically.
pub fn station_interchanges(model: &Model, station: &str) -> QueryResult<Vec<String>> {
    let mut lines = model.station(station)?.lines().to_vec();
    lines.sort();
    Ok(lines)
}

/// Stations on a line, alphabetically.
pub fn line_stations(model: &Model, line: &str) -> QueryResult<Vec<String>> {
    let mut stations = model.line(line)?.stations().to_vec();
    stations.sort();
    Ok(stations)
}
