//! Distribution zones and the catalogue the optimizer iterates over.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::error::{ValidationError, ensure_identifier};
use crate::stop::Location;

/// A geographic distribution region. Routes are grouped and ranked per zone.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Zone {
    id: String,
    name: String,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    depot: Option<Location>,
}

impl Zone {
    /// Validate and construct a zone.
    ///
    /// # Errors
    /// Returns [`ValidationError::EmptyIdentifier`] when `id` is blank.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        ensure_identifier("zone_id", &id)?;
        Ok(Self {
            id,
            name: name.into(),
            depot: None,
        })
    }

    /// Set the depot vehicles leave from.
    #[must_use]
    pub const fn with_depot(mut self, depot: Location) -> Self {
        self.depot = Some(depot);
        self
    }

    /// Zone identifier, e.g. `ZONE_A`.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-readable zone name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Depot location, when known.
    #[must_use]
    pub const fn depot(&self) -> Option<Location> {
        self.depot
    }

    /// Name of the `index`-th (0-based) route planned in this zone.
    ///
    /// Routes are labelled with the final character of the zone id, so
    /// `ZONE_A` yields `Route A1`, `Route A2` and so on.
    ///
    /// # Examples
    /// ```
    /// use lastmile_core::Zone;
    ///
    /// # fn main() -> Result<(), lastmile_core::ValidationError> {
    /// let zone = Zone::new("ZONE_B", "Central")?;
    /// assert_eq!(zone.route_name(0), "Route B1");
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn route_name(&self, index: usize) -> String {
        let suffix = self.id.chars().last().unwrap_or('R');
        format!("Route {suffix}{}", index + 1)
    }

    fn unchecked(id: &str, name: &str) -> Self {
        Self {
            id: id.to_owned(),
            name: name.to_owned(),
            depot: None,
        }
    }
}

/// Ordered set of zones with unique identifiers.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneCatalog {
    zones: Vec<Zone>,
}

impl ZoneCatalog {
    /// Build a catalogue, preserving the given order.
    ///
    /// # Errors
    /// Returns [`ValidationError::DuplicateZone`] when an id repeats.
    pub fn new(zones: Vec<Zone>) -> Result<Self, ValidationError> {
        for (index, zone) in zones.iter().enumerate() {
            let repeated = zones
                .iter()
                .take(index)
                .any(|earlier| earlier.id == zone.id);
            if repeated {
                return Err(ValidationError::DuplicateZone {
                    id: zone.id.clone(),
                });
            }
        }
        Ok(Self { zones })
    }

    /// Give every zone the same depot.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use lastmile_core::{Zone, ZoneCatalog};
    ///
    /// let depot = Coord { x: -87.63, y: 41.88 };
    /// let catalog = ZoneCatalog::default().with_depot(depot);
    /// assert!(catalog.iter().all(|zone| zone.depot() == Some(depot)));
    /// ```
    #[must_use]
    pub fn with_depot(self, depot: Location) -> Self {
        Self {
            zones: self
                .zones
                .into_iter()
                .map(|zone| zone.with_depot(depot))
                .collect(),
        }
    }

    /// Look up a zone by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Zone> {
        self.zones.iter().find(|zone| zone.id == id)
    }

    /// Iterate zones in catalogue order.
    pub fn iter(&self) -> std::slice::Iter<'_, Zone> {
        self.zones.iter()
    }

    /// Number of zones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Whether the catalogue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

impl Default for ZoneCatalog {
    fn default() -> Self {
        Self {
            zones: vec![
                Zone::unchecked("ZONE_A", "North Distribution Zone"),
                Zone::unchecked("ZONE_B", "Central Distribution Zone"),
                Zone::unchecked("ZONE_C", "South Distribution Zone"),
            ],
        }
    }
}

impl<'a> IntoIterator for &'a ZoneCatalog {
    type Item = &'a Zone;
    type IntoIter = std::slice::Iter<'a, Zone>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_catalogue_lists_three_zones_in_order() {
        let catalog = ZoneCatalog::default();
        let ids: Vec<_> = catalog.iter().map(Zone::id).collect();
        assert_eq!(ids, ["ZONE_A", "ZONE_B", "ZONE_C"]);
        assert_eq!(
            catalog.get("ZONE_B").map(Zone::name),
            Some("Central Distribution Zone")
        );
    }

    #[rstest]
    fn catalogue_rejects_duplicate_ids() {
        let zones = vec![
            Zone::new("ZONE_A", "North").expect("valid zone"),
            Zone::new("ZONE_A", "Also north").expect("valid zone"),
        ];
        let err = ZoneCatalog::new(zones).expect_err("duplicate id");
        assert_eq!(
            err,
            ValidationError::DuplicateZone {
                id: "ZONE_A".into()
            }
        );
    }

    #[rstest]
    fn catalogue_depot_applies_to_every_zone() {
        let depot = Location { x: -87.63, y: 41.88 };
        let catalog = ZoneCatalog::default().with_depot(depot);
        assert_eq!(catalog.len(), 3);
        assert!(catalog.iter().all(|zone| zone.depot() == Some(depot)));
    }

    #[rstest]
    #[case(0, "Route C1")]
    #[case(9, "Route C10")]
    fn route_names_use_zone_suffix(#[case] index: usize, #[case] expected: &str) {
        let zone = Zone::new("ZONE_C", "South").expect("valid zone");
        assert_eq!(zone.route_name(index), expected);
    }
}
