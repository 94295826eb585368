//! Response types, serialized in the shape the JSON format expects.

use serde::Serialize;

/// Answer to one [`StatRequest`](crate::StatRequest).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatResponse {
    Bus {
        request_id:        i64,
        curvature:         f64,
        route_length:      f64,
        stop_count:        usize,
        unique_stop_count: usize,
    },
    Stop {
        request_id: i64,
        buses:      Vec<String>,
    },
    Route {
        request_id: i64,
        total_time: f64,
        items:      Vec<RouteItem>,
    },
    NotFound {
        request_id:    i64,
        error_message: String,
    },
}

impl StatResponse {
    pub fn not_found(request_id: i64) -> Self {
        StatResponse::NotFound { request_id, error_message: "not found".to_owned() }
    }
}

/// One step of a route answer: wait at a stop, then ride a bus.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum RouteItem {
    Wait { stop_name: String, time: f64 },
    Bus { bus: String, span_count: u32, time: f64 },
}
