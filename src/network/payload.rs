use serde::{Deserialize, Serialize};
use std::collections::{btree_map::Entry, BTreeMap};
use tracing::warn;

use super::Network;
use crate::domain::{NetworkSource, Substation, SubstationCategory};
use crate::projection::{LatLon, Nztm};

/// JSON body consumed by the web map
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapData {
    pub substations: BTreeMap<String, SubstationView>,
    pub lines: Vec<LineView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubstationView {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub category: SubstationCategory,
    pub source: NetworkSource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineView {
    pub name: String,
    pub from_bus: String,
    pub to_bus: String,
    pub voltage: String,
    pub description: String,
    pub source: NetworkSource,
}

impl From<&Substation> for SubstationView {
    fn from(s: &Substation) -> Self {
        Self {
            name: s.name.clone(),
            lat: s.position.lat,
            lon: s.position.lon,
            kind: s.kind.clone(),
            description: s.description.clone(),
            category: s.category,
            source: s.source,
        }
    }
}

impl MapData {
    pub fn from_network(network: &Network) -> Self {
        let mut data = Self::default();
        data.extend(network);
        data
    }

    /// Append one network. On a name clash across sources the first entry is kept.
    pub fn extend(&mut self, network: &Network) {
        for sub in network.substations() {
            match self.substations.entry(sub.name.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(SubstationView::from(sub));
                }
                Entry::Occupied(existing) => {
                    warn!(
                        name = %sub.name,
                        kept = %existing.get().source,
                        dropped = %sub.source,
                        "substation name clash across sources"
                    );
                }
            }
        }

        self.lines.extend(network.lines().map(|(from, to, line)| LineView {
            name: line.name.clone(),
            from_bus: from.name.clone(),
            to_bus: to.name.clone(),
            voltage: line.voltage.to_string(),
            description: line.description.clone(),
            source: line.source,
        }));
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub nztm: Nztm,
    pub wgs84: LatLon,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectedLine {
    pub name: String,
    pub connected_to: String,
    pub voltage_kv: f64,
    pub length_km: f64,
}

/// One substation with its coordinates in both systems and its connections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubstationDetail {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub category: SubstationCategory,
    pub source: NetworkSource,
    pub voltage_kv: f64,
    pub coordinates: Coordinates,
    pub connected_lines: Vec<ConnectedLine>,
}

impl SubstationDetail {
    pub fn from_network(network: &Network, name: &str) -> Option<Self> {
        let sub = network.substation(name)?;
        let connected_lines = network
            .connections(name)
            .into_iter()
            .map(|(line, other)| ConnectedLine {
                name: line.name.clone(),
                connected_to: other.name.clone(),
                voltage_kv: line.voltage.as_kv(),
                length_km: line.length.as_km(),
            })
            .collect();

        Some(Self {
            name: sub.name.clone(),
            kind: sub.kind.clone(),
            description: sub.description.clone(),
            category: sub.category,
            source: sub.source,
            voltage_kv: sub.nominal_kv.as_kv(),
            coordinates: Coordinates {
                nztm: sub.nztm,
                wgs84: sub.position,
            },
            connected_lines,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Kilovolts, Line};
    use serde_json::json;

    fn sub(name: &str, source: NetworkSource) -> Substation {
        Substation::new(
            name,
            source,
            Nztm { x: 1_751_478.0, y: 5_921_654.0 },
            LatLon { lat: -36.8, lon: 174.7 },
        )
        .with_kind("Substation")
        .with_description("desc")
    }

    fn sample() -> Network {
        let mut net = Network::new(NetworkSource::Transpower);
        net.add_substation(sub("AHA", NetworkSource::Transpower)).unwrap();
        net.add_substation(sub("DOB", NetworkSource::Transpower)).unwrap();
        net.add_line(
            "AHA",
            "DOB",
            Line::new("AHA-DOB-A", NetworkSource::Transpower, Kilovolts::kv(220.0)),
        )
        .unwrap();
        net
    }

    #[test]
    fn test_map_data_json_shape() {
        let value = serde_json::to_value(MapData::from_network(&sample())).unwrap();

        assert_eq!(
            value["substations"]["AHA"],
            json!({
                "name": "AHA",
                "lat": -36.8,
                "lon": 174.7,
                "type": "Substation",
                "description": "desc",
                "category": "transmission",
                "source": "transpower",
            })
        );
        assert_eq!(
            value["lines"],
            json!([{
                "name": "AHA-DOB-A",
                "from_bus": "AHA",
                "to_bus": "DOB",
                "voltage": "220kV",
                "description": "",
                "source": "transpower",
            }])
        );
    }

    #[test]
    fn test_extend_keeps_first_on_clash() {
        let mut other = Network::new(NetworkSource::Vector);
        other.add_substation(sub("AHA", NetworkSource::Vector)).unwrap();

        let mut data = MapData::from_network(&sample());
        data.extend(&other);

        assert_eq!(data.substations.len(), 2);
        assert_eq!(data.substations["AHA"].source, NetworkSource::Transpower);
    }

    #[test]
    fn test_substation_detail() {
        let net = sample();
        let detail = SubstationDetail::from_network(&net, "DOB").unwrap();

        assert_eq!(detail.voltage_kv, 110.0);
        assert_eq!(detail.coordinates.nztm.x, 1_751_478.0);
        assert_eq!(
            detail.connected_lines,
            vec![ConnectedLine {
                name: "AHA-DOB-A".into(),
                connected_to: "AHA".into(),
                voltage_kv: 220.0,
                length_km: 1.0,
            }]
        );
        assert!(SubstationDetail::from_network(&net, "HEN").is_none());
    }
}
