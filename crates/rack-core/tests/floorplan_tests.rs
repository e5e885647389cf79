// Host-side tests for the 2D floor plan model and plot transform.

use glam::Vec2;
use rack_core::*;

#[test]
fn category_colors_with_gray_fallback() {
    let palette = Palette::default();
    assert_eq!(palette.color_for("storage").css_name(), "lightblue");
    assert_eq!(palette.color_for("pickup").css_name(), "lightgreen");
    assert_eq!(palette.color_for("shipping").css_name(), "salmon");
    assert_eq!(palette.color_for("returns").css_name(), "gray");
    assert_eq!(palette.color_for("").css_name(), "gray");
    // lookups are case sensitive like the category names themselves
    assert_eq!(palette.color_for("Storage"), NamedColor::Gray);
}

#[test]
fn sample_plan_draws_every_rack_centered_label() {
    let plan = draw_warehouse_layout(
        &sample_racks(),
        &FloorPlanOptions::default(),
        &Palette::default(),
    )
    .unwrap();
    assert_eq!(plan.racks.len(), 4);
    let r3 = &plan.racks[2];
    assert_eq!(r3.id, "R3");
    assert_eq!(r3.fill, NamedColor::LightGreen);
    assert_eq!(r3.edge, NamedColor::Black);
    assert_eq!(r3.label_anchor, Vec2::new(44.0, 26.5));
    assert_eq!(plan.racks[0].fill, NamedColor::LightBlue);
    assert_eq!(plan.extent, Vec2::new(100.0, 50.0));
    assert_eq!(plan.title, "Warehouse Layout");
}

#[test]
fn legend_lists_palette_in_order() {
    let plan = draw_warehouse_layout(&[], &FloorPlanOptions::default(), &Palette::default()).unwrap();
    let labels: Vec<&str> = plan.legend.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, ["storage", "pickup", "shipping"]);
    assert!(plan.racks.is_empty());
}

#[test]
fn overlays_follow_options() {
    let on = draw_warehouse_layout(&sample_racks(), &FloorPlanOptions::default(), &Palette::default())
        .unwrap();
    assert!(on.grid.is_some());
    assert_eq!(on.bands.len(), 2);
    assert_eq!((on.bands[0].y0, on.bands[0].y1), (15.0, 20.0));
    assert_eq!(on.bands[0].label.as_deref(), Some("Main Aisle"));
    assert_eq!((on.bands[1].y0, on.bands[1].y1), (35.0, 40.0));
    assert!(on.bands[1].label.is_none());
    assert!(on.bands.iter().all(|b| b.color == NamedColor::Yellow && b.alpha == 0.2));

    let off = FloorPlanOptions {
        warehouse_length: 150.0,
        warehouse_width: 80.0,
        show_grid: false,
        highlight_aisles: false,
    };
    let plan = draw_warehouse_layout(&sample_racks(), &off, &Palette::default()).unwrap();
    assert!(plan.grid.is_none());
    assert!(plan.bands.is_empty());
    assert_eq!(plan.extent, Vec2::new(150.0, 80.0));
}

#[test]
fn invalid_racks_and_extents_are_rejected() {
    let bad = vec![FloorRack::new("R9", 1.0, 1.0, -5.0, 2.0, "storage")];
    let err = draw_warehouse_layout(&bad, &FloorPlanOptions::default(), &Palette::default())
        .unwrap_err();
    assert!(matches!(err, LayoutError::InvalidRack { ref id, .. } if id == "R9"));

    let opts = FloorPlanOptions {
        warehouse_width: 0.0,
        ..FloorPlanOptions::default()
    };
    assert!(draw_warehouse_layout(&sample_racks(), &opts, &Palette::default()).is_err());
}

#[test]
fn nice_ticks_cover_extent() {
    assert_eq!(nice_step(100.0, 10), 10.0);
    assert_eq!(nice_step(50.0, 10), 5.0);
    assert_eq!(nice_step(80.0, 10), 10.0);
    assert_eq!(nice_step(150.0, 10), 20.0);
    let t = nice_ticks(0.0, 100.0, 10);
    assert_eq!(t.len(), 11);
    assert_eq!(t[0], 0.0);
    assert_eq!(*t.last().unwrap(), 100.0);
}

#[test]
fn plot_transform_keeps_aspect_and_flips_y() {
    let extent = Vec2::new(100.0, 50.0);
    let tf = PlotTransform::fit(extent, Vec2::new(1200.0, 800.0), [80.0, 60.0, 20.0, 60.0]);
    // 1100 x 680 available: width limits the scale
    assert!((tf.scale - 11.0).abs() < 1e-4);
    let origin = tf.to_px(Vec2::ZERO);
    let corner = tf.to_px(extent);
    assert!((corner.x - origin.x - 1100.0).abs() < 1e-3);
    assert!((origin.y - corner.y - 550.0).abs() < 1e-3);
    // data origin is the bottom-left of the plot area
    let [x, y, w, h] = tf.plot_area_px();
    assert!((origin.x - x).abs() < 1e-3);
    assert!((origin.y - (y + h)).abs() < 1e-3);
    assert!((w - 1100.0).abs() < 1e-3);
    // centred vertically in the 680 px band
    assert!((y - (60.0 + 65.0)).abs() < 1e-3);
}

#[test]
fn rect_px_uses_top_edge() {
    let tf = PlotTransform {
        scale: 2.0,
        origin_px: Vec2::new(10.0, 110.0),
        extent: Vec2::new(50.0, 50.0),
    };
    assert_eq!(tf.rect_px(Vec2::new(5.0, 10.0), Vec2::new(4.0, 2.0)), [20.0, 86.0, 8.0, 4.0]);
    assert_eq!(tf.len_px(0.5), 1.0);
}
