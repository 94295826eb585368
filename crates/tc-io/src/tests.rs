//! Unit tests for tc-io.
//!
//! Inputs are in-memory documents read through `std::io::Cursor`.

#[cfg(test)]
mod fixtures {
    /// Same network as the tc-routing tests: 6 min wait, 40 km/h.
    ///
    /// Bus "1": A - B - C (2 km hops), bus "2": C > D > C (4 km hops),
    /// stop E unserved.
    pub const ROUTING_DOC: &str = r#"{
        "base_requests": [
            {"type": "Bus", "name": "1", "stops": ["A", "B", "C"], "is_roundtrip": false},
            {"type": "Stop", "name": "A", "latitude": 55.60, "longitude": 37.20,
             "road_distances": {"B": 2000}},
            {"type": "Stop", "name": "B", "latitude": 55.61, "longitude": 37.21,
             "road_distances": {"C": 2000}},
            {"type": "Stop", "name": "C", "latitude": 55.62, "longitude": 37.22,
             "road_distances": {"D": 4000}},
            {"type": "Stop", "name": "D", "latitude": 55.63, "longitude": 37.23},
            {"type": "Stop", "name": "E", "latitude": 55.70, "longitude": 37.30,
             "road_distances": {}},
            {"type": "Bus", "name": "2", "stops": ["C", "D", "C"], "is_roundtrip": true}
        ],
        "routing_settings": {"bus_wait_time": 6, "bus_velocity": 40},
        "render_settings": {"width": 1200},
        "stat_requests": [
            {"id": 1, "type": "Bus", "name": "1"},
            {"id": 2, "type": "Bus", "name": "9"},
            {"id": 3, "type": "Stop", "name": "C"},
            {"id": 4, "type": "Stop", "name": "E"},
            {"id": 5, "type": "Stop", "name": "Z"},
            {"id": 6, "type": "Route", "from": "A", "to": "D"},
            {"id": 7, "type": "Route", "from": "A", "to": "E"},
            {"id": 8, "type": "Route", "from": "B", "to": "B"}
        ]
    }"#;

    /// The classic line-format sample.
    pub const TEXT_INPUT: &str = "\
13
Stop Tolstopaltsevo: 55.611087, 37.20829, 3900m to Marushkino
Stop Marushkino: 55.595884, 37.209755, 9900m to Rasskazovka, 100m to Marushkino
Bus 256: Biryulyovo Zapadnoye > Biryusinka > Universam > Biryulyovo Tovarnaya > Biryulyovo Passazhirskaya > Biryulyovo Zapadnoye
Bus 750: Tolstopaltsevo - Marushkino - Marushkino - Rasskazovka
Stop Rasskazovka: 55.632761, 37.333324, 9500m to Marushkino
Stop Biryulyovo Zapadnoye: 55.574371, 37.6517, 7500m to Rossoshanskaya ulitsa, 1800m to Biryusinka, 2400m to Universam
Stop Biryusinka: 55.581065, 37.64839, 750m to Universam
Stop Universam: 55.587655, 37.645687, 5600m to Rossoshanskaya ulitsa, 900m to Biryulyovo Tovarnaya
Stop Biryulyovo Tovarnaya: 55.592028, 37.653656, 1300m to Biryulyovo Passazhirskaya
Stop Biryulyovo Passazhirskaya: 55.580999, 37.659164, 1200m to Biryulyovo Zapadnoye
Bus 828: Biryulyovo Zapadnoye > Universam > Rossoshanskaya ulitsa > Biryulyovo Zapadnoye
Stop Rossoshanskaya ulitsa: 55.595579, 37.605757
Stop Prazhskaya: 55.611678, 37.603831
6
Bus 256
Bus 750
Bus 751
Stop Samara
Stop Prazhskaya
Stop Biryulyovo Zapadnoye
";
}

// ── JSON documents ────────────────────────────────────────────────────────────

#[cfg(test)]
mod json_doc {
    use std::io::Cursor;

    use approx::assert_abs_diff_eq;
    use serde_json::{Value, json};

    use crate::{BaseRequest, RouteItem, StatRequest, StatResponse, TransitSystem, process_json, read_document};

    fn system() -> (TransitSystem, Vec<StatRequest>) {
        let doc = read_document(Cursor::new(super::fixtures::ROUTING_DOC)).unwrap();
        let system = TransitSystem::build(&doc.base_requests, doc.routing_settings).unwrap();
        (system, doc.stat_requests)
    }

    #[test]
    fn document_parses() {
        let doc = read_document(Cursor::new(super::fixtures::ROUTING_DOC)).unwrap();
        assert_eq!(doc.base_requests.len(), 7);
        assert_eq!(doc.stat_requests.len(), 8);
        let settings = doc.routing_settings.unwrap();
        assert_eq!(settings.bus_wait_time, 6.0);
        assert_eq!(settings.bus_velocity, 40.0);
        assert!(matches!(
            &doc.base_requests[0],
            BaseRequest::Bus { name, is_roundtrip: false, .. } if name == "1"
        ));
        assert_eq!(
            doc.stat_requests[5],
            StatRequest::Route { id: 6, from: "A".into(), to: "D".into() }
        );
    }

    #[test]
    fn buses_are_expanded_on_ingest() {
        let (system, _) = system();
        let cat = system.catalogue();
        let bus = cat.find_bus("1").unwrap();
        assert_eq!(bus.stops.len(), 5);
        assert_eq!(cat.find_bus("2").unwrap().stops.len(), 3);
    }

    #[test]
    fn bus_and_stop_answers() {
        let (mut system, requests) = system();
        let responses = system.answer_all(&requests);

        match &responses[0] {
            StatResponse::Bus { request_id, route_length, stop_count, unique_stop_count, curvature } => {
                assert_eq!(*request_id, 1);
                assert_eq!(*route_length, 8_000.0);
                assert_eq!(*stop_count, 5);
                assert_eq!(*unique_stop_count, 3);
                assert!(*curvature > 0.0);
            }
            other => panic!("unexpected response {other:?}"),
        }
        assert_eq!(responses[1], StatResponse::not_found(2));
        assert_eq!(
            responses[2],
            StatResponse::Stop { request_id: 3, buses: vec!["1".into(), "2".into()] }
        );
        assert_eq!(responses[3], StatResponse::Stop { request_id: 4, buses: vec![] });
        assert_eq!(responses[4], StatResponse::not_found(5));
    }

    #[test]
    fn route_answer() {
        let (mut system, requests) = system();
        let responses = system.answer_all(&requests);

        let StatResponse::Route { request_id, total_time, items } = &responses[5] else {
            panic!("expected a route, got {:?}", responses[5]);
        };
        assert_eq!(*request_id, 6);
        assert_abs_diff_eq!(*total_time, 24.0, epsilon = 1e-9);
        assert_eq!(items.len(), 4);
        assert_eq!(items[0], RouteItem::Wait { stop_name: "A".into(), time: 6.0 });
        match &items[1] {
            RouteItem::Bus { bus, span_count, time } => {
                assert_eq!(bus, "1");
                assert_eq!(*span_count, 2);
                assert_abs_diff_eq!(*time, 6.0, epsilon = 1e-9);
            }
            other => panic!("expected a bus ride, got {other:?}"),
        }
        assert_eq!(items[2], RouteItem::Wait { stop_name: "C".into(), time: 6.0 });
        assert!(matches!(&items[3], RouteItem::Bus { bus, span_count: 1, .. } if bus == "2"));

        assert_eq!(responses[6], StatResponse::not_found(7));
        assert_eq!(
            responses[7],
            StatResponse::Route { request_id: 8, total_time: 0.0, items: vec![] }
        );
    }

    #[test]
    fn route_without_settings_is_not_found() {
        let doc = read_document(Cursor::new(super::fixtures::ROUTING_DOC)).unwrap();
        let mut system = TransitSystem::build(&doc.base_requests, None).unwrap();
        let response = system.answer(&StatRequest::Route { id: 1, from: "A".into(), to: "D".into() });
        assert_eq!(response, StatResponse::not_found(1));
    }

    #[test]
    fn serialized_shape() {
        let mut out = Vec::new();
        let written = process_json(Cursor::new(super::fixtures::ROUTING_DOC), &mut out, false).unwrap();
        assert_eq!(written, 8);

        let value: Value = serde_json::from_slice(&out).unwrap();
        let arr = value.as_array().unwrap();
        assert_eq!(arr[1], json!({"request_id": 2, "error_message": "not found"}));
        assert_eq!(arr[2], json!({"request_id": 3, "buses": ["1", "2"]}));
        assert_eq!(arr[0]["stop_count"], json!(5));
        assert_eq!(arr[5]["items"][0], json!({"type": "Wait", "stop_name": "A", "time": 6.0}));
        assert_eq!(arr[5]["items"][1]["type"], json!("Bus"));
        assert_eq!(arr[5]["items"][1]["span_count"], json!(2));
        assert_eq!(arr[7], json!({"request_id": 8, "total_time": 0.0, "items": []}));
    }

    #[test]
    fn map_request_answered_in_place() {
        let doc = r#"{
            "base_requests": [
                {"type": "Stop", "name": "A", "latitude": 0.0, "longitude": 0.0}
            ],
            "render_settings": {"width": 600},
            "stat_requests": [
                {"id": 1, "type": "Stop", "name": "A"},
                {"id": 2, "type": "Map"},
                {"id": 3, "type": "Bus", "name": "none"}
            ]
        }"#;
        let mut out = Vec::new();
        assert_eq!(process_json(Cursor::new(doc), &mut out, false).unwrap(), 3);

        let value: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value, json!([
            {"request_id": 1, "buses": []},
            {"request_id": 2, "error_message": "not found"},
            {"request_id": 3, "error_message": "not found"}
        ]));
    }

    #[test]
    fn broken_bus_does_not_block_other_answers() {
        // "broken" rides B - C, which has no road distance in either direction.
        let doc = r#"{
            "base_requests": [
                {"type": "Stop", "name": "A", "latitude": 55.60, "longitude": 37.20,
                 "road_distances": {"B": 1000}},
                {"type": "Stop", "name": "B", "latitude": 55.61, "longitude": 37.21},
                {"type": "Stop", "name": "C", "latitude": 55.62, "longitude": 37.22},
                {"type": "Bus", "name": "ok", "stops": ["A", "B"], "is_roundtrip": false},
                {"type": "Bus", "name": "broken", "stops": ["B", "C"], "is_roundtrip": false}
            ],
            "routing_settings": {"bus_wait_time": 6, "bus_velocity": 40},
            "stat_requests": [
                {"id": 1, "type": "Bus", "name": "ok"},
                {"id": 2, "type": "Bus", "name": "broken"},
                {"id": 3, "type": "Stop", "name": "C"},
                {"id": 4, "type": "Route", "from": "A", "to": "B"},
                {"id": 5, "type": "Route", "from": "B", "to": "C"}
            ]
        }"#;
        let doc = read_document(Cursor::new(doc)).unwrap();
        let mut system = TransitSystem::build(&doc.base_requests, doc.routing_settings).unwrap();
        let responses = system.answer_all(&doc.stat_requests);

        assert!(matches!(
            responses[0],
            StatResponse::Bus { request_id: 1, stop_count: 3, route_length, .. } if route_length == 2_000.0
        ));
        assert_eq!(responses[1], StatResponse::not_found(2));
        assert_eq!(responses[2], StatResponse::Stop { request_id: 3, buses: vec!["broken".into()] });
        let StatResponse::Route { total_time, items, .. } = &responses[3] else {
            panic!("expected a route, got {:?}", responses[3]);
        };
        // 6 min wait + 1 km at 40 km/h.
        assert_abs_diff_eq!(*total_time, 7.5, epsilon = 1e-9);
        assert_eq!(items.len(), 2);
        assert_eq!(responses[4], StatResponse::not_found(5));
    }

    #[test]
    fn unknown_stop_in_bus_aborts() {
        let doc = r#"{"base_requests": [
            {"type": "Stop", "name": "A", "latitude": 0.0, "longitude": 0.0},
            {"type": "Bus", "name": "x", "stops": ["A", "Q"], "is_roundtrip": false}
        ]}"#;
        let err = process_json(Cursor::new(doc), Vec::new(), false).unwrap_err();
        assert!(matches!(err, crate::IoError::Catalogue(_)));
    }

    #[test]
    fn invalid_settings_abort() {
        let doc = r#"{"base_requests": [], "routing_settings": {"bus_wait_time": 0, "bus_velocity": 40}}"#;
        let err = process_json(Cursor::new(doc), Vec::new(), false).unwrap_err();
        assert!(matches!(err, crate::IoError::Routing(_)));
    }

    #[test]
    fn malformed_json_is_error() {
        let err = process_json(Cursor::new("{\"base_requests\": ["), Vec::new(), false).unwrap_err();
        assert!(matches!(err, crate::IoError::Json(_)));
    }
}

// ── Legacy text format ────────────────────────────────────────────────────────

#[cfg(test)]
mod text_format {
    use std::io::Cursor;

    use crate::text::{TextQuery, parse_base_line, parse_query, significant};
    use crate::{BaseRequest, IoError, process_text};

    #[test]
    fn classic_sample() {
        let mut out = Vec::new();
        let answered = process_text(Cursor::new(super::fixtures::TEXT_INPUT), &mut out).unwrap();
        assert_eq!(answered, 6);
        let expected = "\
Bus 256: 6 stops on route, 5 unique stops, 5950 route length, 1.36124 curvature
Bus 750: 7 stops on route, 3 unique stops, 27400 route length, 1.30853 curvature
Bus 751: not found
Stop Samara: not found
Stop Prazhskaya: no buses
Stop Biryulyovo Zapadnoye: buses 256 828
";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn stop_line_with_distances() {
        let req = parse_base_line(
            1,
            "Stop Marushkino: 55.595884, 37.209755, 9900m to Rasskazovka, 100m to Marushkino",
        )
        .unwrap();
        let BaseRequest::Stop { name, latitude, longitude, road_distances } = req else {
            panic!("expected a stop");
        };
        assert_eq!(name, "Marushkino");
        assert_eq!((latitude, longitude), (55.595884, 37.209755));
        assert_eq!(road_distances["Rasskazovka"], 9900);
        assert_eq!(road_distances["Marushkino"], 100);
    }

    #[test]
    fn bus_lines() {
        let ring = parse_base_line(1, "Bus 256: A > B > A").unwrap();
        assert_eq!(
            ring,
            BaseRequest::Bus { name: "256".into(), stops: vec!["A".into(), "B".into(), "A".into()], is_roundtrip: true }
        );
        let line = parse_base_line(1, "Bus 750 express: Upper Town - Lower Town").unwrap();
        assert_eq!(
            line,
            BaseRequest::Bus {
                name: "750 express".into(),
                stops: vec!["Upper Town".into(), "Lower Town".into()],
                is_roundtrip: false,
            }
        );
    }

    #[test]
    fn malformed_lines() {
        assert!(matches!(
            parse_base_line(4, "Stop Nowhere 55.0, 37.0"),
            Err(IoError::Parse { line: 4, .. })
        ));
        assert!(parse_base_line(1, "Tram 5: A > B").is_err());
        assert!(parse_base_line(1, "Stop X: 55.0, 37.0, 12km to Y").is_err());
        assert!(parse_base_line(1, "Stop X: north, 37.0").is_err());
    }

    #[test]
    fn queries() {
        assert_eq!(parse_query(1, "Bus 256").unwrap(), TextQuery::Bus("256".into()));
        assert_eq!(
            parse_query(1, "  Stop Biryulyovo Zapadnoye  ").unwrap(),
            TextQuery::Stop("Biryulyovo Zapadnoye".into())
        );
        assert!(parse_query(1, "Route A B").is_err());
    }

    #[test]
    fn truncated_input() {
        let err = process_text(Cursor::new("2\nStop A: 0.0, 0.0\n"), Vec::new()).unwrap_err();
        assert!(matches!(err, IoError::Parse { .. }));
    }

    #[test]
    fn six_significant_digits() {
        assert_eq!(significant(5950.0), "5950");
        assert_eq!(significant(27400.0), "27400");
        assert_eq!(significant(1.361239194), "1.36124");
        assert_eq!(significant(100.5), "100.5");
        assert_eq!(significant(0.0), "0");
        assert_eq!(significant(1_234_567.0), "1.23457e+06");
        assert_eq!(significant(0.0000123456), "1.23456e-05");
    }
}
