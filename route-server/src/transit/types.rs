//! Transit provider request/response DTOs.
//!
//! These types map directly to the provider's JSON. `Option` is used
//! liberally because the provider omits fields rather than sending null in
//! many cases, and coordinates arrive stringly-typed in some fields and
//! numeric in others, so both are accepted.

use serde::{Deserialize, Deserializer, Serialize};

/// Request body for the multi-modal itinerary endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitRouteRequest {
    /// Start longitude, decimal string.
    pub start_x: String,

    /// Start latitude, decimal string.
    pub start_y: String,

    /// End longitude, decimal string.
    pub end_x: String,

    /// End latitude, decimal string.
    pub end_y: String,

    /// Response language (0 = provider default).
    pub lang: u32,

    /// Response format, always "json".
    pub format: &'static str,

    /// Maximum number of candidate itineraries.
    pub count: u32,

    /// Request the full per-leg stop lists.
    pub include_detailed_stops: bool,
}

/// Top-level response envelope.
///
/// On success `meta_data` is present; on provider-side rejection the
/// envelope instead carries `status` and/or `error`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitResponse {
    /// Present on success.
    pub meta_data: Option<MetaData>,

    /// Provider status code; 11 means the endpoints are too close for
    /// transit routing.
    pub status: Option<i64>,

    /// Provider error message.
    pub error: Option<String>,
}

/// Response metadata wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaData {
    /// The routing plan.
    pub plan: Option<Plan>,
}

/// A routing plan: the candidate itineraries.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    /// Candidate itineraries, fastest not necessarily first.
    pub itineraries: Option<Vec<TransitItinerary>>,
}

/// One candidate itinerary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitItinerary {
    /// Total duration in seconds.
    pub total_time: Option<u32>,

    /// Total distance in metres.
    pub total_distance: Option<u32>,

    /// Total walking time in seconds.
    pub total_walk_time: Option<u32>,

    /// Total walking distance in metres.
    pub total_walk_distance: Option<u32>,

    /// Number of transfers.
    pub transfer_count: Option<u32>,

    /// Provider path-type discriminator.
    pub path_type: Option<u32>,

    /// Fare information.
    pub fare: Option<Fare>,

    /// Legs in travel order.
    pub legs: Option<Vec<TransitLeg>>,
}

/// Fare wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fare {
    /// Regular adult fare.
    pub regular: Option<RegularFare>,
}

/// Regular fare detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegularFare {
    /// Total fare in provider currency units.
    pub total_fare: Option<u32>,
}

/// One provider leg, tagged by `mode`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitLeg {
    /// Mode tag: "WALK", "SUBWAY", "BUS", or something else.
    pub mode: Option<String>,

    /// Leg duration in seconds.
    pub section_time: Option<u32>,

    /// Leg distance in metres.
    pub distance: Option<u32>,

    /// Leg start location.
    pub start: Option<TransitPlace>,

    /// Leg end location.
    pub end: Option<TransitPlace>,

    /// Walking steps (WALK legs only).
    pub steps: Option<Vec<TransitStep>>,

    /// Shape of the leg path.
    pub pass_shape: Option<PassShape>,

    /// Stops passed (vehicle legs only).
    pub pass_stop_list: Option<PassStopList>,

    /// Route display name.
    pub route: Option<String>,

    /// Provider route identifier.
    pub route_id: Option<String>,

    /// Route display color.
    pub route_color: Option<String>,

    /// Service-running flag.
    pub service: Option<u32>,

    /// Provider route-type discriminator.
    #[serde(rename = "type")]
    pub route_type: Option<u32>,
}

/// A leg boundary location.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitPlace {
    /// Location name.
    pub name: Option<String>,

    /// Longitude; the provider sends numbers here but strings elsewhere.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub lon: Option<f64>,

    /// Latitude.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub lat: Option<f64>,
}

/// One step of a WALK leg.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitStep {
    /// Street or path name.
    pub street_name: Option<String>,

    /// Step distance in metres.
    pub distance: Option<u32>,

    /// Instruction text.
    pub description: Option<String>,

    /// Partial path as polyline text.
    pub linestring: Option<String>,
}

/// Shape of a leg path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassShape {
    /// Polyline text of the whole leg.
    pub line_string: Option<String>,
}

/// Stops passed by a vehicle leg.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassStopList {
    /// Stops in travel order.
    pub station_list: Option<Vec<TransitStop>>,
}

/// One stop in a pass-stop list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitStop {
    /// Position within the leg.
    pub index: Option<u32>,

    /// Stop name.
    pub station_name: Option<String>,

    /// Longitude, stringly-typed from the provider.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub lon: Option<f64>,

    /// Latitude, stringly-typed from the provider.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub lat: Option<f64>,

    /// Provider stop identifier.
    #[serde(rename = "stationID")]
    pub station_id: Option<String>,
}

/// Accepts a number, a decimal string, or null.
///
/// The provider mixes numeric and string coordinates across fields;
/// unparseable strings become `None` (normalized to 0 downstream).
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumOrStr {
        Num(f64),
        Str(String),
    }

    Ok(match Option::<NumOrStr>::deserialize(deserializer)? {
        Some(NumOrStr::Num(n)) => Some(n),
        Some(NumOrStr::Str(s)) => s.trim().parse().ok(),
        None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_itinerary_with_mixed_legs() {
        let json = r#"{
            "metaData": {
                "plan": {
                    "itineraries": [
                        {
                            "totalTime": 1740,
                            "totalDistance": 8200,
                            "totalWalkTime": 420,
                            "transferCount": 1,
                            "fare": {"regular": {"totalFare": 1550}},
                            "legs": [
                                {
                                    "mode": "WALK",
                                    "sectionTime": 180,
                                    "distance": 240,
                                    "start": {"name": "출발지", "lon": 127.001, "lat": 37.501},
                                    "end": {"name": "강남역", "lon": 127.0276, "lat": 37.4979},
                                    "steps": [
                                        {"streetName": "테헤란로", "distance": 240, "description": "직진", "linestring": "127.001,37.501 127.0276,37.4979"}
                                    ]
                                },
                                {
                                    "mode": "SUBWAY",
                                    "sectionTime": 540,
                                    "distance": 4200,
                                    "route": "수도권2호선",
                                    "routeId": "110",
                                    "routeColor": "00A84D",
                                    "service": 1,
                                    "type": 2,
                                    "start": {"name": "강남", "lon": 127.0276, "lat": 37.4979},
                                    "end": {"name": "삼성", "lon": 127.0631, "lat": 37.5088},
                                    "passStopList": {
                                        "stationList": [
                                            {"index": 0, "stationName": "강남", "lon": "127.0276", "lat": "37.4979", "stationID": "218"},
                                            {"index": 1, "stationName": "역삼", "lon": "127.0364", "lat": "37.5006", "stationID": "219"}
                                        ]
                                    }
                                }
                            ]
                        }
                    ]
                }
            }
        }"#;

        let response: TransitResponse = serde_json::from_str(json).unwrap();
        let plan = response.meta_data.unwrap().plan.unwrap();
        let itineraries = plan.itineraries.unwrap();
        assert_eq!(itineraries.len(), 1);

        let itinerary = &itineraries[0];
        assert_eq!(itinerary.total_time, Some(1740));
        assert_eq!(
            itinerary
                .fare
                .as_ref()
                .and_then(|f| f.regular.as_ref())
                .and_then(|r| r.total_fare),
            Some(1550)
        );

        let legs = itinerary.legs.as_ref().unwrap();
        assert_eq!(legs[0].mode.as_deref(), Some("WALK"));
        assert_eq!(legs[0].steps.as_ref().unwrap().len(), 1);

        assert_eq!(legs[1].mode.as_deref(), Some("SUBWAY"));
        let stops = legs[1]
            .pass_stop_list
            .as_ref()
            .unwrap()
            .station_list
            .as_ref()
            .unwrap();
        assert_eq!(stops.len(), 2);
        // String coordinates parse to f64
        assert_eq!(stops[0].lon, Some(127.0276));
    }

    #[test]
    fn deserialize_too_close_envelope() {
        let json = r#"{"status": 11, "error": "출발지와 도착지가 너무 가까움"}"#;
        let response: TransitResponse = serde_json::from_str(json).unwrap();

        assert!(response.meta_data.is_none());
        assert_eq!(response.status, Some(11));
        assert!(response.error.unwrap().contains("너무 가까움"));
    }

    #[test]
    fn deserialize_empty_plan() {
        let json = r#"{"metaData": {"plan": {}}}"#;
        let response: TransitResponse = serde_json::from_str(json).unwrap();
        let plan = response.meta_data.unwrap().plan.unwrap();
        assert!(plan.itineraries.is_none());
    }

    #[test]
    fn lenient_coordinates_tolerate_garbage() {
        let json = r#"{"index": 0, "stationName": "강남", "lon": "not-a-number", "lat": 37.4979}"#;
        let stop: TransitStop = serde_json::from_str(json).unwrap();

        assert_eq!(stop.lon, None);
        assert_eq!(stop.lat, Some(37.4979));
    }

    #[test]
    fn request_serializes_camel_case() {
        let request = TransitRouteRequest {
            start_x: "127.00".into(),
            start_y: "37.50".into(),
            end_x: "127.01".into(),
            end_y: "37.51".into(),
            lang: 0,
            format: "json",
            count: 10,
            include_detailed_stops: true,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["startX"], "127.00");
        assert_eq!(value["includeDetailedStops"], true);
    }
}
