//! Normalization of provider legs into domain types.
//!
//! This is where the provider's free-form `mode` string becomes the closed
//! `Leg` enum, decided exactly once. The mapping is total: recognized modes
//! get a typed variant, anything else lands in `Leg::Other` with the raw
//! provider leg preserved.

use crate::domain::{
    Itinerary, Leg, OtherLeg, Place, RideLeg, RouteSource, Stop, WalkLeg, WalkStep,
};

use super::types::{TransitItinerary, TransitLeg, TransitPlace};

/// Normalize one provider itinerary.
///
/// Missing numeric fields become 0; missing collections become empty. Leg
/// and step ordering are preserved exactly as received. `total_time` stays
/// optional because selection must be able to reject candidates without a
/// usable time.
pub fn normalize_itinerary(raw: &TransitItinerary) -> Itinerary {
    let legs = raw
        .legs
        .as_deref()
        .unwrap_or(&[])
        .iter()
        .map(normalize_leg)
        .collect();

    Itinerary {
        total_time: raw.total_time,
        total_distance: raw.total_distance.unwrap_or(0),
        total_walk_time: raw.total_walk_time.unwrap_or(0),
        transfer_count: raw.transfer_count.unwrap_or(0),
        fare: raw
            .fare
            .as_ref()
            .and_then(|f| f.regular.as_ref())
            .and_then(|r| r.total_fare)
            .unwrap_or(0),
        legs,
        source: RouteSource::Transit,
    }
}

/// Normalize one provider leg into exactly one `Leg` variant.
pub fn normalize_leg(raw: &TransitLeg) -> Leg {
    match raw.mode.as_deref() {
        Some("WALK") => Leg::Walk(walk_leg(raw)),
        Some("SUBWAY") => Leg::Subway(ride_leg(raw)),
        Some("BUS") => Leg::Bus(ride_leg(raw)),
        other => Leg::Other(OtherLeg {
            mode: other.unwrap_or("UNKNOWN").to_string(),
            raw: serde_json::to_value(raw).unwrap_or(serde_json::Value::Null),
        }),
    }
}

fn walk_leg(raw: &TransitLeg) -> WalkLeg {
    let steps = raw
        .steps
        .as_deref()
        .unwrap_or(&[])
        .iter()
        .map(|step| WalkStep {
            street_name: step.street_name.clone().unwrap_or_default(),
            distance: step.distance.unwrap_or(0),
            description: step.description.clone().unwrap_or_default(),
            linestring: step.linestring.clone(),
        })
        .collect();

    WalkLeg {
        section_time: raw.section_time.unwrap_or(0),
        distance: raw.distance.unwrap_or(0),
        start: place(raw.start.as_ref()),
        end: place(raw.end.as_ref()),
        steps,
    }
}

fn ride_leg(raw: &TransitLeg) -> RideLeg {
    let stops = raw
        .pass_stop_list
        .as_ref()
        .and_then(|l| l.station_list.as_deref())
        .unwrap_or(&[])
        .iter()
        .map(|stop| Stop {
            name: stop.station_name.clone().unwrap_or_default(),
            lon: stop.lon.unwrap_or(0.0),
            lat: stop.lat.unwrap_or(0.0),
            index: stop.index.unwrap_or(0),
        })
        .collect();

    RideLeg {
        route: raw.route.clone().unwrap_or_default(),
        route_id: raw.route_id.clone().unwrap_or_default(),
        route_color: raw.route_color.clone().unwrap_or_default(),
        service: raw.service.unwrap_or(0),
        section_time: raw.section_time.unwrap_or(0),
        distance: raw.distance.unwrap_or(0),
        start: place(raw.start.as_ref()),
        end: place(raw.end.as_ref()),
        stops,
    }
}

fn place(raw: Option<&TransitPlace>) -> Place {
    match raw {
        Some(p) => Place {
            name: p.name.clone().unwrap_or_default(),
            lon: p.lon.unwrap_or(0.0),
            lat: p.lat.unwrap_or(0.0),
        },
        None => Place {
            name: String::new(),
            lon: 0.0,
            lat: 0.0,
        },
    }
}
