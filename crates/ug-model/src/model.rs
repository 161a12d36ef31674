//! The network model: entity collections and the operations that keep
//! their cross-references consistent.

use std::collections::HashMap;
use std::hash::Hash;

use tracing::trace;

use crate::entity::{District, EntityKind, Line, Station, Zone, ZoneId};
use crate::error::{ModelError, ModelResult};
use crate::validate;

/// Insertion-ordered storage for one entity kind.
///
/// Entities live in `items` in the order they were created; `index` maps
/// each key to its slot.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Arena<K: Eq + Hash, V> {
    items: Vec<V>,
    index: HashMap<K, usize>,
}

impl<K: Eq + Hash, V> Default for Arena<K, V> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash, V> Arena<K, V> {
    fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: std::borrow::Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.index.get(key).map(|&i| &self.items[i])
    }

    fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: std::borrow::Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let i = *self.index.get(key)?;
        Some(&mut self.items[i])
    }

    fn contains<Q>(&self, key: &Q) -> bool
    where
        K: std::borrow::Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Return the entity for `key`, creating it with `make` if absent.
    fn get_or_insert_with(&mut self, key: K, make: impl FnOnce() -> V) -> &mut V {
        let i = match self.index.get(&key).copied() {
            Some(i) => i,
            None => {
                let i = self.items.len();
                self.items.push(make());
                self.index.insert(key, i);
                i
            }
        };
        &mut self.items[i]
    }

    fn insert(&mut self, key: K, value: V) {
        let i = self.items.len();
        self.items.push(value);
        self.index.insert(key, i);
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn iter(&self) -> std::slice::Iter<'_, V> {
        self.items.iter()
    }
}

/// A transit network of stations, lines, districts and zones.
///
/// The model only grows: stations are added with [`Model::add_station`] and
/// associated with lines with [`Model::add_station_to_line`]. Districts,
/// zones and lines are created the first time they are referenced. Every
/// mutation either succeeds completely or leaves the model untouched.
///
/// # Example
///
/// ```
/// use ug_model::Model;
///
/// let mut model = Model::new();
/// model.add_station("Aldgate", "City of London", [1]).unwrap();
/// model.add_station_to_line("Aldgate", "Metropolitan").unwrap();
///
/// assert_eq!(model.station("Aldgate").unwrap().lines(), ["Metropolitan"]);
/// assert_eq!(model.line("Metropolitan").unwrap().stations(), ["Aldgate"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Model {
    stations: Arena<String, Station>,
    lines: Arena<String, Line>,
    districts: Arena<String, District>,
    zones: Arena<ZoneId, Zone>,
}

impl Model {
    /// Create an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Station names in insertion order.
    pub fn stations(&self) -> impl Iterator<Item = &str> + '_ {
        self.stations.iter().map(Station::name)
    }

    /// Line names in insertion order.
    pub fn lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.lines.iter().map(Line::name)
    }

    /// District names in insertion order.
    pub fn districts(&self) -> impl Iterator<Item = &str> + '_ {
        self.districts.iter().map(District::name)
    }

    /// Zone ids in insertion order.
    pub fn zones(&self) -> impl Iterator<Item = ZoneId> + '_ {
        self.zones.iter().map(Zone::id)
    }

    pub fn station(&self, name: &str) -> ModelResult<&Station> {
        self.stations
            .get(name)
            .ok_or_else(|| ModelError::not_found(EntityKind::Station, name))
    }

    pub fn line(&self, name: &str) -> ModelResult<&Line> {
        self.lines
            .get(name)
            .ok_or_else(|| ModelError::not_found(EntityKind::Line, name))
    }

    pub fn district(&self, name: &str) -> ModelResult<&District> {
        self.districts
            .get(name)
            .ok_or_else(|| ModelError::not_found(EntityKind::District, name))
    }

    pub fn zone(&self, id: ZoneId) -> ModelResult<&Zone> {
        self.zones
            .get(&id)
            .ok_or_else(|| ModelError::not_found(EntityKind::Zone, id))
    }

    pub fn contains_station(&self, name: &str) -> bool {
        self.stations.contains(name)
    }

    pub fn contains_line(&self, name: &str) -> bool {
        self.lines.contains(name)
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn district_count(&self) -> usize {
        self.districts.len()
    }

    pub fn zone_count(&self) -> usize {
        self.zones.len()
    }

    /// Add a new station.
    ///
    /// The district and any zones not yet present are created. `zones` must
    /// be non-empty and contain only positive ids; a zone repeated in the
    /// list is recorded once.
    ///
    /// Fails with [`ModelError::DuplicateStation`] if the name is taken and
    /// with [`ModelError::InvalidZones`] if the zones are unusable. Neither
    /// failure changes the model.
    pub fn add_station(
        &mut self,
        name: impl Into<String>,
        district: impl Into<String>,
        zones: impl IntoIterator<Item = ZoneId>,
    ) -> ModelResult<()> {
        let name = name.into();
        let district = district.into();

        if self.stations.contains(&name) {
            return Err(ModelError::DuplicateStation { name });
        }

        let mut station_zones: Vec<ZoneId> = Vec::new();
        for zone in zones {
            if zone == 0 {
                return Err(ModelError::InvalidZones {
                    station: name,
                    what: "zone ids must be positive",
                });
            }
            if !station_zones.contains(&zone) {
                station_zones.push(zone);
            }
        }
        if station_zones.is_empty() {
            return Err(ModelError::InvalidZones {
                station: name,
                what: "at least one zone is required",
            });
        }

        self.districts
            .get_or_insert_with(district.clone(), || District::new(district.clone()))
            .push_station(name.clone());

        for &zone in &station_zones {
            self.zones
                .get_or_insert_with(zone, || Zone::new(zone))
                .push_station(name.clone());
        }

        trace!(station = %name, district = %district, zones = ?station_zones, "added station");
        self.stations
            .insert(name.clone(), Station::new(name, district, station_zones));
        Ok(())
    }

    /// Associate an existing station with a line, creating the line if
    /// needed.
    ///
    /// Fails with [`ModelError::NotFound`] if the station does not exist and
    /// with [`ModelError::DuplicateMembership`] if it is already on the line.
    pub fn add_station_to_line(&mut self, station_name: &str, line: &str) -> ModelResult<()> {
        let station = self
            .stations
            .get_mut(station_name)
            .ok_or_else(|| ModelError::not_found(EntityKind::Station, station_name))?;

        if station.is_on_line(line) {
            return Err(ModelError::DuplicateMembership {
                station: station_name.to_string(),
                line: line.to_string(),
            });
        }
        station.push_line(line.to_string());

        self.lines
            .get_or_insert_with(line.to_string(), || Line::new(line.to_string()))
            .push_station(station_name.to_string());

        trace!(station = %station_name, line = %line, "added station to line");
        Ok(())
    }

    /// Check every cross-reference in the model.
    pub fn validate(&self) -> ModelResult<()> {
        validate::check_invariants(self)
    }

    pub(crate) fn station_entities(&self) -> &[Station] {
        &self.stations.items
    }

    pub(crate) fn line_entities(&self) -> &[Line] {
        &self.lines.items
    }

    pub(crate) fn district_entities(&self) -> &[District] {
        &self.districts.items
    }

    pub(crate) fn zone_entities(&self) -> &[Zone] {
        &self.zones.items
    }
}
