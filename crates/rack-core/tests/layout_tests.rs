// Host-side tests for rack row placement, bay partitioning and beam bands.

use rack_core::*;

fn default_racks() -> Vec<Rack> {
    generate_rack_rows(&WarehouseParams::default()).expect("default params are valid")
}

#[test]
fn default_layout_has_twelve_racks_in_id_order() {
    let racks = default_racks();
    assert_eq!(racks.len(), 12);
    let ids: Vec<u32> = racks.iter().map(|r| r.id).collect();
    assert_eq!(ids, (1..=12).collect::<Vec<_>>());
}

#[test]
fn rack_intervals_are_strictly_increasing_and_disjoint() {
    let racks = default_racks();
    for r in &racks {
        assert!((r.x_end - r.x_start - BAY_DEPTH).abs() < 1e-4);
    }
    for pair in racks.windows(2) {
        assert!(
            pair[0].x_end <= pair[1].x_start,
            "rack {} overlaps rack {}",
            pair[0].id,
            pair[1].id
        );
        assert!(pair[0].x_start < pair[1].x_start);
    }
}

#[test]
fn only_the_end_racks_are_single_sided() {
    let racks = default_racks();
    let single: Vec<&Rack> = racks.iter().filter(|r| r.single_sided).collect();
    assert_eq!(single.len(), 2);
    assert_eq!(single[0].id, 1);
    assert_eq!(single[0].facing, Facing::PositiveX);
    assert_eq!(single[1].id, 12);
    assert_eq!(single[1].facing, Facing::NegativeX);
}

#[test]
fn paired_racks_stand_back_to_back_across_the_separation() {
    let racks = default_racks();
    for pair in racks[1..11].chunks(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert_eq!(a.facing, Facing::NegativeX);
        assert_eq!(b.facing, Facing::PositiveX);
        assert!((b.x_start - a.x_end - SEPARATION).abs() < 1e-4);
    }
}

#[test]
fn aisle_width_is_added_once_per_aisle() {
    let racks = default_racks();
    // Facing fronts across an aisle: +X rack then -X rack
    let mut aisles = 0;
    for pair in racks.windows(2) {
        if pair[0].facing == Facing::PositiveX && pair[1].facing == Facing::NegativeX {
            assert!((pair[1].x_start - pair[0].x_end - AISLE_WIDTH).abs() < 1e-4);
            aisles += 1;
        }
    }
    assert_eq!(aisles, 6);
}

#[test]
fn known_rack_positions() {
    let racks = default_racks();
    let spans: Vec<(f32, f32)> = racks.iter().map(|r| (r.x_start, r.x_end)).collect();
    assert_eq!(spans[0], (0.0, 50.0));
    assert_eq!(spans[1], (178.0, 228.0));
    assert_eq!(spans[2], (246.0, 296.0));
    assert_eq!(spans[11], (1408.0, 1458.0));
}

#[test]
fn front_face_follows_facing() {
    let racks = default_racks();
    let first = &racks[0];
    let last = &racks[11];
    assert_eq!(first.front_x(), first.x_end);
    assert_eq!(last.front_x(), last.x_start);
}

#[test]
fn front_and_back_spans_sit_on_opposite_faces() {
    let racks = default_racks();
    let t = BEAM_THICKNESS;
    assert_eq!(racks[0].front_span(t), (46.0, 50.0));
    assert_eq!(racks[0].back_span(t), (0.0, 4.0));
    assert_eq!(racks[1].front_span(t), (178.0, 182.0));
    assert_eq!(racks[1].back_span(t), (224.0, 228.0));
}

#[test]
fn pair_count_controls_rack_count() {
    let params = WarehouseParams {
        back_to_back_pairs: 2,
        ..WarehouseParams::default()
    };
    let racks = generate_rack_rows(&params).unwrap();
    assert_eq!(racks.len(), 6);
    assert_eq!(racks.last().unwrap().id, 6);
    let none = WarehouseParams {
        back_to_back_pairs: 0,
        ..WarehouseParams::default()
    };
    let racks = generate_rack_rows(&none).unwrap();
    assert_eq!(racks.len(), 2);
    assert!(racks.iter().all(|r| r.single_sided));
}

#[test]
fn bay_boundaries_partition_the_row() {
    for n in 1..=12 {
        let b = bay_boundaries(n, BAY_WIDTH);
        assert_eq!(b.len(), n + 1);
        assert_eq!(b[0], 0.0);
        assert!((b[n] - n as f32 * BAY_WIDTH).abs() < 1e-3);
        for w in b.windows(2) {
            assert!((w[1] - w[0] - BAY_WIDTH).abs() < 1e-3);
        }
    }
}

#[test]
fn bay_five_spans_404_to_505() {
    let bay = bays(10, 101.0).nth(4).unwrap();
    assert_eq!(bay.number, 5);
    assert_eq!((bay.y_start, bay.y_end), (404.0, 505.0));
    assert!((bay.center_y() - 454.5).abs() < 1e-4);
}

#[test]
fn beam_bands_rise_with_constant_thickness() {
    let params = WarehouseParams::default();
    let bands = beam_bands(&params);
    let names: String = bands.iter().map(|b| b.level).collect();
    assert_eq!(names, "BCDEFG");
    for b in &bands {
        assert!((b.z_top - b.z_bottom - BEAM_THICKNESS).abs() < 1e-4);
        assert!(b.z_top <= RACK_HEIGHT);
    }
    for w in bands.windows(2) {
        assert!(w[0].z_top < w[1].z_bottom);
    }
    assert_eq!((bands[0].z_bottom, bands[0].z_top), (52.0, 56.0));
    assert_eq!((bands[5].z_bottom, bands[5].z_top), (283.0, 287.0));
    assert_eq!(params.level('G').map(|l| l.elevation), Some(283.0));
    assert!(params.level('A').unwrap().is_floor());
    assert!(params.level('H').is_none());
}

#[test]
fn negative_width_is_rejected() {
    let params = WarehouseParams {
        bay_width: -101.0,
        ..WarehouseParams::default()
    };
    assert_eq!(
        generate_rack_rows(&params).unwrap_err(),
        LayoutError::InvalidParameter {
            name: "bay_width",
            value: -101.0
        }
    );
    let params = WarehouseParams {
        aisle_width: f32::NAN,
        ..WarehouseParams::default()
    };
    assert!(matches!(
        params.validate(),
        Err(LayoutError::InvalidParameter { name: "aisle_width", .. })
    ));
}

#[test]
fn zero_bays_is_rejected() {
    let params = WarehouseParams {
        bays_per_row: 0,
        ..WarehouseParams::default()
    };
    assert_eq!(params.validate(), Err(LayoutError::NoBays));
}

#[test]
fn beam_above_rack_height_is_rejected() {
    let mut params = WarehouseParams::default();
    params.rack_height = 280.0;
    assert!(matches!(
        params.validate(),
        Err(LayoutError::LevelAboveRack { level: 'G', .. })
    ));
}

#[test]
fn levels_out_of_order_are_rejected() {
    let mut params = WarehouseParams::default();
    params.levels.swap(2, 3);
    assert!(matches!(
        params.validate(),
        Err(LayoutError::LevelsNotIncreasing { .. })
    ));
}
