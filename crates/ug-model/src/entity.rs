//! Network entities: stations, lines, districts and zones.
//!
//! Entities are owned by the [`Model`](crate::Model). Callers only ever see
//! shared references, and no entity exposes a mutator outside this crate, so
//! every cross-reference update goes through the model's own operations.

use core::fmt;

/// Zone identifier (a positive fare band number).
pub type ZoneId = u32;

/// The four kinds of entity held by a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Station,
    Line,
    District,
    Zone,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntityKind::Station => "station",
            EntityKind::Line => "line",
            EntityKind::District => "district",
            EntityKind::Zone => "zone",
        };
        f.write_str(s)
    }
}

/// A station in the network.
///
/// Belongs to exactly one district and one or more zones, and is served by
/// the lines in `lines` (in the order they were associated).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Station {
    name: String,
    district: String,
    zones: Vec<ZoneId>,
    lines: Vec<String>,
}

impl Station {
    pub(crate) fn new(name: String, district: String, zones: Vec<ZoneId>) -> Self {
        Self {
            name,
            district,
            zones,
            lines: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the district the station is in.
    pub fn district(&self) -> &str {
        &self.district
    }

    /// Zones the station is in, in the order given when it was added.
    pub fn zones(&self) -> &[ZoneId] {
        &self.zones
    }

    /// The cheapest zone the station belongs to.
    pub fn min_zone(&self) -> ZoneId {
        // zones is never empty: add_station rejects an empty list
        self.zones.iter().copied().min().unwrap_or_default()
    }

    /// Names of the lines serving this station.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines serving this station.
    pub fn interchange_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_on_line(&self, line: &str) -> bool {
        self.lines.iter().any(|l| l == line)
    }

    pub(crate) fn push_line(&mut self, line: String) {
        self.lines.push(line);
    }
}

/// A named line and the stations on it.
///
/// Station order is association order, not geographic order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Line {
    name: String,
    stations: Vec<String>,
}

impl Line {
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            stations: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stations(&self) -> &[String] {
        &self.stations
    }

    pub(crate) fn push_station(&mut self, station: String) {
        self.stations.push(station);
    }
}

/// An administrative district grouping stations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct District {
    name: String,
    stations: Vec<String>,
}

impl District {
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            stations: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stations(&self) -> &[String] {
        &self.stations
    }

    pub(crate) fn push_station(&mut self, station: String) {
        self.stations.push(station);
    }
}

/// A fare zone and the stations within it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Zone {
    id: ZoneId,
    stations: Vec<String>,
}

impl Zone {
    pub(crate) fn new(id: ZoneId) -> Self {
        Self {
            id,
            stations: Vec::new(),
        }
    }

    pub fn id(&self) -> ZoneId {
        self.id
    }

    pub fn stations(&self) -> &[String] {
        &self.stations
    }

    pub(crate) fn push_station(&mut self, station: String) {
        self.stations.push(station);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_kind_display() {
        assert_eq!(EntityKind::Station.to_string(), "station");
        assert_eq!(EntityKind::Zone.to_string(), "zone");
    }

    #[test]
    fn station_accessors() {
        let mut station = Station::new("Earl's Court".into(), "Kensington".into(), vec![2, 1]);
        assert_eq!(station.min_zone(), 1);
        assert_eq!(station.interchange_count(), 0);

        station.push_line("District".into());
        station.push_line("Piccadilly".into());
        assert!(station.is_on_line("District"));
        assert!(!station.is_on_line("Central"));
        assert_eq!(station.lines(), ["District", "Piccadilly"]);
    }
}
