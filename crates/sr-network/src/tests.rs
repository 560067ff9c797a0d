//! Unit tests for sr-network.

#[cfg(test)]
mod helpers {
    use sr_core::{Coord, GeoPoint};

    use crate::{AddressRecord, Intersection, IntersectionRecord};

    pub fn row(x: i64, y: i64, street: &str, crossing: &str, code: u32) -> IntersectionRecord {
        IntersectionRecord {
            x_cm: x,
            y_cm: y,
            street: street.to_owned(),
            crossing_street: crossing.to_owned(),
            longitude: -3.7 + x as f64 * 1e-7,
            latitude: 40.4 + y as f64 * 1e-7,
            street_code: code,
        }
    }

    pub fn address(code: u32, class: &str, name: &str, number: &str, x: i64, y: i64) -> AddressRecord {
        AddressRecord {
            street_code: code,
            street_class: class.to_owned(),
            street_particle: String::new(),
            street_name: name.to_owned(),
            number_literal: number.to_owned(),
            x_cm: x,
            y_cm: y,
        }
    }

    /// Lookup key: intersections compare by coordinate only.
    pub fn at(x: i64, y: i64) -> Intersection {
        Intersection::new(Coord::new(x, y), GeoPoint::default(), Vec::<String>::new())
    }

    /// Two streets forming a T.
    ///
    /// ```text
    ///              (100m,100m)
    ///                   │ CALLE B (2)
    /// (0,0) ─────── (100m,0) ─────── (200m,0)    CALLE A (1)
    /// ```
    pub fn tee() -> Vec<IntersectionRecord> {
        vec![
            row(0, 0, "CALLE A", "CALLE C", 1),
            row(10_000, 0, "CALLE A", "CALLE B", 1),
            row(20_000, 0, "CALLE A", "CALLE D", 1),
            row(10_000, 0, "CALLE B", "CALLE A", 2),
            row(10_000, 10_000, "CALLE B", "CALLE E", 2),
        ]
    }
}

// ── Intersection & index ──────────────────────────────────────────────────────

#[cfg(test)]
mod intersection {
    use std::collections::HashSet;

    use sr_core::{Coord, GeoPoint};

    use super::helpers::{at, row};
    use crate::{Intersection, IntersectionIndex, NetworkError};

    #[test]
    fn equality_and_hash_ignore_streets() {
        let a = Intersection::new(Coord::new(5, 5), GeoPoint::default(), ["CALLE A"]);
        let b = Intersection::new(Coord::new(5, 5), GeoPoint::new(1.0, 2.0), ["CALLE B", "CALLE C"]);
        assert_eq!(a, b);

        let set: HashSet<Intersection> = [a, b, at(6, 5)].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn shared_street_is_lexicographically_first() {
        let a = Intersection::new(Coord::new(0, 0), GeoPoint::default(), ["ZURITA", "ALCALA", "MAYOR"]);
        let b = Intersection::new(Coord::new(1, 0), GeoPoint::default(), ["MAYOR", "ZURITA"]);
        assert_eq!(a.shared_street(&b), Some("MAYOR"));
        assert_eq!(a.shared_street(&at(2, 2)), None);
    }

    #[test]
    fn same_coordinate_rows_collapse_with_union_of_names() {
        let index = IntersectionIndex::from_records(&[
            row(500, 500, "CALLE A", "CALLE B", 1),
            row(500, 500, "CALLE B", "CALLE C", 2),
            row(500, 500, "CALLE C", "CALLE A", 3),
        ]);
        assert_eq!(index.len(), 1);
        let only = index.get(Coord::new(500, 500)).unwrap();
        let names: Vec<&str> = only.streets().collect();
        assert_eq!(names, ["CALLE A", "CALLE B", "CALLE C"]);
        assert_eq!(only.street_count(), 3);
    }

    #[test]
    fn location_comes_from_first_row() {
        let mut second = row(0, 0, "B", "C", 2);
        second.latitude = 99.0;
        let index = IntersectionIndex::from_records(&[row(0, 0, "A", "B", 1), second]);
        assert!((index.get(Coord::new(0, 0)).unwrap().location().lat - 40.4).abs() < 1e-9);
    }

    #[test]
    fn iteration_follows_first_seen_order() {
        let index = IntersectionIndex::from_records(&[
            row(30, 0, "A", "B", 1),
            row(10, 0, "A", "C", 1),
            row(30, 0, "B", "A", 2),
            row(20, 0, "A", "D", 1),
        ]);
        let xs: Vec<i64> = index.iter().map(|i| i.coord().x).collect();
        assert_eq!(xs, [30, 10, 20]);
    }

    #[test]
    fn require_reports_unknown_coordinate() {
        let index = IntersectionIndex::from_records(&[row(0, 0, "A", "B", 1)]);
        assert!(matches!(
            index.require(Coord::new(7, 8)),
            Err(NetworkError::UnknownCoordinate { x: 7, y: 8 })
        ));
    }

    #[test]
    fn nearest_breaks_ties_towards_last_scanned() {
        let index = IntersectionIndex::from_records(&[
            row(0, 0, "A", "B", 1),
            row(200, 0, "A", "C", 1),
        ]);
        let (hit, d) = index.nearest(Coord::new(100, 0)).unwrap();
        assert_eq!(hit.coord(), Coord::new(200, 0));
        assert_eq!(d, 100.0);

        let (hit, d) = index.nearest(Coord::new(-30, 40)).unwrap();
        assert_eq!(hit.coord(), Coord::new(0, 0));
        assert_eq!(d, 50.0);
    }

    #[test]
    fn nearest_on_empty_index_fails() {
        let index = IntersectionIndex::default();
        assert!(matches!(index.nearest(Coord::new(0, 0)), Err(NetworkError::EmptyNetwork)));
    }
}

// ── Dedup ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod dedup {
    use sr_core::Coord;

    use super::helpers::row;
    use crate::{DEFAULT_MERGE_RADIUS_CM, MergeMode, merge_nearby};

    #[test]
    fn last_cluster_collapses_onto_first_member() {
        let rows = vec![
            row(0, 0, "A", "B", 1),
            row(1_000, 0, "A", "C", 1),
            row(50_000, 0, "D", "E", 2),
            row(500, 0, "F", "A", 3),
        ];
        let out = merge_nearby(rows, DEFAULT_MERGE_RADIUS_CM, MergeMode::LastClusterOnly);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].coord(), Coord::new(500, 0));
        assert_eq!(out[0].street, "A");
        assert_eq!(out[1].coord(), Coord::new(50_000, 0));
    }

    #[test]
    fn last_cluster_only_leaves_earlier_clusters_alone() {
        let rows = vec![
            row(0, 0, "A", "B", 1),
            row(100, 0, "A", "C", 1),
            row(90_000, 0, "D", "E", 2),
        ];
        let out = merge_nearby(rows.clone(), DEFAULT_MERGE_RADIUS_CM, MergeMode::LastClusterOnly);
        assert_eq!(out, rows);
    }

    #[test]
    fn every_cluster_keeps_all_rows_on_the_mean() {
        let rows = vec![
            row(0, 0, "A", "B", 1),
            row(1_000, 0, "A", "C", 1),
            row(50_000, 0, "D", "E", 2),
            row(51_001, 0, "D", "F", 2),
        ];
        let out = merge_nearby(rows, DEFAULT_MERGE_RADIUS_CM, MergeMode::EveryCluster);
        let coords: Vec<Coord> = out.iter().map(|r| r.coord()).collect();
        assert_eq!(
            coords,
            [
                Coord::new(500, 0),
                Coord::new(500, 0),
                Coord::new(50_501, 0),
                Coord::new(50_501, 0),
            ]
        );
        let names: Vec<&str> = out.iter().map(|r| r.crossing_street.as_str()).collect();
        assert_eq!(names, ["B", "C", "E", "F"]);
    }

    #[test]
    fn radius_is_exclusive() {
        let rows = vec![row(0, 0, "A", "B", 1), row(3_000, 0, "A", "C", 1)];
        for mode in [MergeMode::LastClusterOnly, MergeMode::EveryCluster] {
            let out = merge_nearby(rows.clone(), 3_000.0, mode);
            assert_eq!(out, rows, "{mode:?}");
        }
    }

    #[test]
    fn empty_input_is_fine() {
        assert!(merge_nearby(Vec::new(), 3_000.0, MergeMode::LastClusterOnly).is_empty());
        assert!(merge_nearby(Vec::new(), 3_000.0, MergeMode::EveryCluster).is_empty());
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use sr_core::{Coord, StreetCode};

    use crate::{NetworkError, load_addresses_reader, load_intersections_reader};

    #[test]
    fn intersections_csv_is_trimmed() {
        let csv = "\
x_cm,y_cm,street,crossing_street,longitude,latitude,street_code
44120000, 447470000 , CALLE MAYOR ,CALLE TOLEDO,-3.7077,40.4153,31001337
44130000,447480000,CALLE MAYOR,CALLE BOLSA,-3.7070,40.4160,31001337
";
        let rows = load_intersections_reader(Cursor::new(csv)).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].coord(), Coord::new(44_120_000, 447_470_000));
        assert_eq!(rows[0].street, "CALLE MAYOR");
        assert_eq!(rows[1].code(), StreetCode(31_001_337));
    }

    #[test]
    fn addresses_csv_allows_empty_particle() {
        let csv = "\
street_code,street_class,street_particle,street_name,number_literal,x_cm,y_cm
31001337,CALLE,,MAYOR,NUM0012,44118000,447469000
31001338,CALLE,DE,ALCALA,NUM0001,44200000,447500000
";
        let rows = load_addresses_reader(Cursor::new(csv)).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].label(), "CALLE MAYOR NUM0012");
        assert_eq!(rows[1].label(), "CALLE DE ALCALA NUM0001");
    }

    #[test]
    fn malformed_row_is_a_parse_error() {
        let csv = "\
x_cm,y_cm,street,crossing_street,longitude,latitude,street_code
not-a-number,0,A,B,0.0,0.0,1
";
        assert!(matches!(
            load_intersections_reader(Cursor::new(csv)),
            Err(NetworkError::Parse(_))
        ));
    }
}

// ── Streets ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod street {
    use sr_core::{Coord, StreetCode};

    use super::helpers::{row, tee};
    use crate::{IntersectionIndex, StreetIndex};

    #[test]
    fn streets_keep_scan_order() {
        let rows = tee();
        let index = IntersectionIndex::from_records(&rows);
        let streets = StreetIndex::from_records(&rows, &index).unwrap();

        assert_eq!(streets.len(), 2);
        let codes: Vec<StreetCode> = streets.iter().map(|s| s.code()).collect();
        assert_eq!(codes, [StreetCode(1), StreetCode(2)]);

        let a = streets.get(StreetCode(1)).unwrap();
        assert_eq!(a.name(), "CALLE A");
        let xs: Vec<i64> = a.intersections().iter().map(|i| i.coord().x).collect();
        assert_eq!(xs, [0, 10_000, 20_000]);
        assert_eq!(a.segments().count(), 2);
    }

    #[test]
    fn shared_intersection_carries_every_name() {
        let rows = tee();
        let index = IntersectionIndex::from_records(&rows);
        let streets = StreetIndex::from_records(&rows, &index).unwrap();
        let b = streets.get(StreetCode(2)).unwrap();
        assert_eq!(b.intersections()[0].coord(), Coord::new(10_000, 0));
        assert!(b.intersections()[0].has_street("CALLE A"));
        assert!(b.intersections()[0].has_street("CALLE B"));
    }

    #[test]
    fn repeated_crossing_is_kept_but_not_a_segment() {
        let rows = vec![
            row(0, 0, "A", "B", 1),
            row(0, 0, "A", "C", 1),
            row(100, 0, "A", "D", 1),
        ];
        let index = IntersectionIndex::from_records(&rows);
        let streets = StreetIndex::from_records(&rows, &index).unwrap();
        let a = streets.get(StreetCode(1)).unwrap();
        assert_eq!(a.len(), 3);
        assert_eq!(a.segments().count(), 1);
    }
}

// ── Weights ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod weight {
    use sr_core::StreetCode;

    use super::helpers::address;
    use crate::{STANDARD_SPEED_KMH, SpeedTable, StreetClasses};

    #[test]
    fn default_table() {
        let table = SpeedTable::default();
        assert_eq!(table.speed_for(Some("AUTOVIA")), 100);
        assert_eq!(table.speed_for(Some(" AVENIDA ")), 90);
        assert_eq!(table.speed_for(Some("PLAZUELA")), 20);
        assert_eq!(table.speed_for(Some("CALLE")), STANDARD_SPEED_KMH);
        assert_eq!(table.speed_for(None), STANDARD_SPEED_KMH);
        assert!(!table.is_mapped("CALLE"));
    }

    #[test]
    fn classes_take_first_row_per_code() {
        let classes = StreetClasses::from_addresses(&[
            address(1, " AVENIDA ", "X", "NUM0001", 0, 0),
            address(1, "CALLE", "X", "NUM0002", 0, 0),
            address(2, "CAMINO", "Y", "NUM0001", 0, 0),
        ]);
        assert_eq!(classes.len(), 2);
        assert_eq!(classes.get(StreetCode(1)), Some("AVENIDA"));
        assert_eq!(classes.get(StreetCode(2)), Some("CAMINO"));
        assert_eq!(classes.get(StreetCode(3)), None);
    }
}

// ── Network assembly ──────────────────────────────────────────────────────────

#[cfg(test)]
mod network {
    use sr_core::{Coord, StreetCode};

    use super::helpers::{address, at, row, tee};
    use crate::{
        MergeMode, NetworkConfig, SpeedTable, StreetClasses, StreetNetwork, WeightModel,
    };

    #[test]
    fn distance_graph() {
        let net = StreetNetwork::build(&tee(), &NetworkConfig::default()).unwrap();
        assert_eq!(net.intersections().len(), 4);
        assert_eq!(net.streets().len(), 2);

        let g = net.graph(&WeightModel::Distance).unwrap();
        assert!(!g.is_directed());
        assert_eq!(g.vertex_count(), 4);
        assert_eq!(g.edge_count(), 3);

        let e = g.get_edge(&at(0, 0), &at(10_000, 0)).unwrap().unwrap();
        assert_eq!(e.weight, 10_000.0);
        assert_eq!(e.payload, StreetCode(1));
        let e = g.get_edge(&at(10_000, 10_000), &at(10_000, 0)).unwrap().unwrap();
        assert_eq!(e.payload, StreetCode(2));
        assert!(g.get_edge(&at(0, 0), &at(20_000, 0)).unwrap().is_none());
    }

    #[test]
    fn speed_graph_falls_back_to_standard() {
        let net = StreetNetwork::build(&tee(), &NetworkConfig::default()).unwrap();
        let classes = StreetClasses::from_addresses(&[address(1, "AVENIDA", "A", "NUM0001", 0, 0)]);
        let model = WeightModel::speed(SpeedTable::default(), classes);
        let g = net.graph(&model).unwrap();

        assert_eq!(g.get_edge(&at(0, 0), &at(10_000, 0)).unwrap().unwrap().weight, 90.0);
        assert_eq!(g.get_edge(&at(10_000, 0), &at(10_000, 10_000)).unwrap().unwrap().weight, 50.0);
    }

    #[test]
    fn route_across_the_tee() {
        let net = StreetNetwork::build(&tee(), &NetworkConfig::default()).unwrap();
        let g = net.graph(&WeightModel::Distance).unwrap();
        let path = g.shortest_path(&at(0, 0), &at(10_000, 10_000)).unwrap();
        let coords: Vec<Coord> = path.vertices().iter().map(|i| i.coord()).collect();
        assert_eq!(coords, [Coord::new(0, 0), Coord::new(10_000, 0), Coord::new(10_000, 10_000)]);
        assert_eq!(path.weight(), 20_000.0);
    }

    #[test]
    fn build_merges_trailing_cluster() {
        let mut rows = tee();
        rows.push(row(10_000, 10_500, "CALLE E", "CALLE B", 3));
        let net = StreetNetwork::build(&rows, &NetworkConfig::default()).unwrap();
        assert_eq!(net.intersections().len(), 4);
        assert!(net.intersections().get(Coord::new(10_000, 10_250)).is_some());

        let clean = StreetNetwork::from_clean_records(&rows).unwrap();
        assert_eq!(clean.intersections().len(), 5);
    }

    #[test]
    fn every_cluster_mode_keeps_merged_names() {
        let rows = vec![
            row(0, 0, "A", "B", 1),
            row(100, 0, "A", "C", 1),
            row(90_000, 0, "A", "D", 1),
        ];
        let config = NetworkConfig { merge_mode: MergeMode::EveryCluster, ..NetworkConfig::default() };
        let net = StreetNetwork::build(&rows, &config).unwrap();
        assert_eq!(net.intersections().len(), 2);
        let merged = net.intersections().get(Coord::new(50, 0)).unwrap();
        assert!(merged.has_street("B") && merged.has_street("C"));
    }

    #[test]
    fn nearest_intersection_delegates_to_index() {
        let net = StreetNetwork::build(&tee(), &NetworkConfig::default()).unwrap();
        let (hit, d) = net.nearest_intersection(Coord::new(19_000, 300)).unwrap();
        assert_eq!(hit.coord(), Coord::new(20_000, 0));
        assert!(d > 1_000.0 && d < 1_100.0);
    }
}

// ── Addresses ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod address {
    use sr_core::Coord;

    use super::helpers::address;
    use crate::{AddressBook, AddressKind, AddressRecord, NetworkError, parse_address};

    #[test]
    fn label_collapses_empty_parts() {
        let mut row = address(1, " CALLE ", " MAYOR", "NUM0012 ", 0, 0);
        assert_eq!(row.label(), "CALLE MAYOR NUM0012");
        row.street_particle = "DE".into();
        assert_eq!(row.label(), "CALLE DE MAYOR NUM0012");
    }

    #[test]
    fn book_resolves_and_later_rows_win() {
        let rows: Vec<AddressRecord> = vec![
            address(1, "CALLE", "MAYOR", "NUM0012", 10, 20),
            address(2, "AVENIDA", "AMERICA", "NUM0001", 30, 40),
            address(1, "CALLE", "MAYOR", "NUM0012", 11, 21),
        ];
        let book = AddressBook::from_records(&rows);
        assert_eq!(book.len(), 2);
        assert_eq!(book.resolve("CALLE MAYOR NUM0012").unwrap(), Coord::new(11, 21));
        assert_eq!(book.resolve("  AVENIDA AMERICA NUM0001 ").unwrap(), Coord::new(30, 40));

        let labels: Vec<&str> = book.labels().collect();
        assert_eq!(labels, ["CALLE MAYOR NUM0012", "AVENIDA AMERICA NUM0001"]);

        match book.resolve(" CALLE FALSA NUM0123 ") {
            Err(NetworkError::UnknownAddress(label)) => assert_eq!(label, "CALLE FALSA NUM0123"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn parses_numbered_street() {
        let parsed = parse_address("CALLE DE ALCALA NUM0012").unwrap();
        assert_eq!(parsed.name, "CALLE DE ALCALA");
        assert_eq!(parsed.kind, AddressKind::Street { number: "12".into() });

        let parsed = parse_address("PLAZA MAYOR NUM0000").unwrap();
        assert_eq!(parsed.kind, AddressKind::Street { number: "0".into() });

        let parsed = parse_address("CALLE TOLEDO NUM0007 DUP").unwrap();
        assert_eq!(parsed.kind, AddressKind::Street { number: "7".into() });
    }

    #[test]
    fn parses_motorway() {
        let parsed = parse_address("AUTOVIA  A-6 KM.12").unwrap();
        assert_eq!(parsed.name, "A-6");
        assert_eq!(parsed.kind, AddressKind::Motorway);
    }

    #[test]
    fn rejects_other_shapes() {
        for label in ["", "CALLE MAYOR", "CALLE 2 DE MAYO NUM0004", " NUM12", "AUTOVIA M-30", "AUTOVIAA-6"] {
            assert!(
                matches!(parse_address(label), Err(NetworkError::AddressFormat(_))),
                "{label:?}"
            );
        }
    }
}
