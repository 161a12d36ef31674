//! Shortest-route search over lines.
//!
//! The network carries no travel times, so the cost of a journey is inferred
//! from zones and districts. The search settles whole lines rather than
//! individual station-to-station edges:
//!
//! - Lines serving the start station are reachable at cost zero.
//! - The cheapest reachable line is settled. Every station on it is priced
//!   at the line's cost plus the station's lowest zone, less a discount when
//!   the station shares a district with the station used to board the line.
//! - A station whose price improves records the line, and offers each of its
//!   other unsettled lines at that price, boarding there.
//! - The search stops once the destination is priced no higher than the line
//!   just settled.
//!
//! The journey is then read backwards from the destination: the line that
//! priced it, the station that line was boarded at, and so on to the start.

use std::collections::{HashMap, HashSet};

use tracing::{debug, trace};
use ug_model::Model;

use crate::error::{QueryError, QueryResult};

/// Tuning for the route cost heuristic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteConfig {
    /// Subtracted from a station's cost when it is in the same district as
    /// the station where the line was boarded.
    pub same_district_discount: f64,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            same_district_discount: 0.5,
        }
    }
}

impl RouteConfig {
    /// Check the discount keeps every station cost strictly positive.
    ///
    /// Zones start at 1, so the discount must lie in `[0, 1)`.
    pub fn validate(&self) -> QueryResult<()> {
        let d = self.same_district_discount;
        if !d.is_finite() || !(0.0..1.0).contains(&d) {
            return Err(QueryError::InvalidConfig {
                what: format!("same_district_discount must be in [0, 1), got {}", d),
            });
        }
        Ok(())
    }
}

/// One leg of a journey: ride `line` from `start` to `destination`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JourneySegment {
    pub start: String,
    pub destination: String,
    pub line: String,
}

/// A cost and the name that produced it.
///
/// For a line, `via` is the station it is boarded at; for a station, the
/// line that reaches it.
#[derive(Debug, Clone, Copy)]
struct Label<'a> {
    cost: f64,
    via: &'a str,
}

/// The cheapest frontier line; equal costs go to the smallest line name.
fn cheapest_line<'a>(frontier: &HashMap<&'a str, Label<'a>>) -> Option<&'a str> {
    frontier
        .iter()
        .min_by(|(a_name, a), (b_name, b)| {
            a.cost
                .total_cmp(&b.cost)
                .then_with(|| a_name.cmp(b_name))
        })
        .map(|(&name, _)| name)
}

fn internal(what: String) -> QueryError {
    QueryError::Internal { what }
}

/// Recommended journey between two stations using the default cost
/// heuristic.
///
/// Returns an empty journey when `start == destination`. Fails with
/// [`QueryError::Model`] naming the missing station if either does not
/// exist, and with [`QueryError::RouteNotFound`] if no line path connects
/// them.
pub fn shortest_route(
    model: &Model,
    start: &str,
    destination: &str,
) -> QueryResult<Vec<JourneySegment>> {
    shortest_route_with_config(model, start, destination, &RouteConfig::default())
}

/// Recommended journey between two stations.
pub fn shortest_route_with_config(
    model: &Model,
    start: &str,
    destination: &str,
    config: &RouteConfig,
) -> QueryResult<Vec<JourneySegment>> {
    config.validate()?;

    let start_station = model.station(start)?;
    model.station(destination)?;

    if start == destination {
        return Ok(Vec::new());
    }

    debug!(start, destination, "searching for route");

    // Settled lines: cost and boarding station
    let mut processed_lines: HashMap<&str, Label<'_>> = HashMap::new();
    // Reachable but unsettled lines: cost and boarding station
    let mut frontier_lines: HashMap<&str, Label<'_>> = HashMap::new();
    // Priced stations: cost and the line reaching them
    let mut processed_stations: HashMap<&str, Label<'_>> = HashMap::new();

    for line in start_station.lines() {
        frontier_lines.insert(
            line.as_str(),
            Label {
                cost: 0.0,
                via: start_station.name(),
            },
        );
    }

    while let Some(line_name) = cheapest_line(&frontier_lines) {
        let Some(line_label) = frontier_lines.remove(line_name) else {
            break;
        };
        processed_lines.insert(line_name, line_label);

        let line = model.line(line_name)?;
        let access_district = model.station(line_label.via)?.district();

        for station_name in line.stations() {
            let station = model.station(station_name)?;

            let mut cost = line_label.cost + f64::from(station.min_zone());
            if station.district() == access_district {
                cost -= config.same_district_discount;
            }

            let improves = processed_stations
                .get(station.name())
                .is_none_or(|known| known.cost > cost);
            if !improves {
                continue;
            }

            processed_stations.insert(
                station.name(),
                Label {
                    cost,
                    via: line_name,
                },
            );

            for next_line in station.lines() {
                if processed_lines.contains_key(next_line.as_str()) {
                    continue;
                }
                let cheaper = frontier_lines
                    .get(next_line.as_str())
                    .is_none_or(|offered| offered.cost > cost);
                if cheaper {
                    frontier_lines.insert(
                        next_line.as_str(),
                        Label {
                            cost,
                            via: station.name(),
                        },
                    );
                }
            }
        }

        trace!(
            line = line_name,
            cost = line_label.cost,
            boarded_at = line_label.via,
            frontier = frontier_lines.len(),
            "settled line"
        );

        if processed_stations
            .get(destination)
            .is_some_and(|reached| reached.cost <= line_label.cost)
        {
            break;
        }
    }

    if !processed_stations.contains_key(destination) {
        debug!(start, destination, lines = processed_lines.len(), "no route");
        return Err(QueryError::RouteNotFound {
            start: start.to_string(),
            destination: destination.to_string(),
        });
    }

    let mut segments = Vec::new();
    let mut visited = HashSet::new();
    let mut station = destination;
    while station != start {
        if !visited.insert(station) {
            return Err(internal(format!(
                "route reconstruction revisited '{}'",
                station
            )));
        }
        let arrival = processed_stations
            .get(station)
            .ok_or_else(|| internal(format!("'{}' was never priced", station)))?;
        let boarding = processed_lines
            .get(arrival.via)
            .ok_or_else(|| internal(format!("line '{}' was never settled", arrival.via)))?;

        segments.push(JourneySegment {
            start: boarding.via.to_string(),
            destination: station.to_string(),
            line: arrival.via.to_string(),
        });
        station = boarding.via;
    }
    segments.reverse();

    debug!(
        start,
        destination,
        segments = segments.len(),
        lines = processed_lines.len(),
        "found route"
    );
    Ok(segments)
}
