// Host-side tests for the orbit camera and screen projection.

use glam::{Mat4, Vec3};
use rack_core::*;

fn scene_bounds() -> Bounds {
    build_scene(
        &WarehouseParams::default(),
        &RackAddressing::default(),
        SceneVariant::Plain,
    )
    .unwrap()
    .bounds()
    .unwrap()
}

#[test]
fn default_view_looks_from_the_eye_direction() {
    let bounds = scene_bounds();
    let orbit = OrbitCamera::for_scene(&bounds);
    let dir = (orbit.eye() - orbit.target).normalize();
    let expected = Vec3::from(CAMERA_EYE_DIRECTION).normalize();
    assert!(dir.distance(expected) < 1e-4);
    assert_eq!(orbit.target, bounds.center());
}

#[test]
fn target_projects_to_viewport_centre() {
    let orbit = OrbitCamera::for_scene(&scene_bounds());
    let cam = orbit.camera(1280.0 / 720.0);
    let p = project_to_screen(cam.view_proj(), orbit.target, 1280.0, 720.0).unwrap();
    assert!((p.x - 640.0).abs() < 0.5);
    assert!((p.y - 360.0).abs() < 0.5);
}

#[test]
fn whole_scene_is_in_view_at_default_framing() {
    let bounds = scene_bounds();
    let orbit = OrbitCamera::for_scene(&bounds);
    let cam = orbit.camera(1.0);
    let vp = cam.view_proj();
    for corner in create_box(
        bounds.min.x,
        bounds.max.x,
        bounds.min.y,
        bounds.max.y,
        bounds.min.z,
        bounds.max.z,
    )
    .vertices
    {
        let p = project_to_screen(vp, corner, 100.0, 100.0).expect("corner in depth range");
        assert!((-0.5..=100.5).contains(&p.x), "x {p:?}");
        assert!((-0.5..=100.5).contains(&p.y), "y {p:?}");
    }
}

#[test]
fn points_behind_the_eye_do_not_project() {
    let orbit = OrbitCamera::for_scene(&scene_bounds());
    let cam = orbit.camera(1.0);
    let behind = cam.eye + (cam.eye - cam.target);
    assert!(project_to_screen(cam.view_proj(), behind, 100.0, 100.0).is_none());
}

#[test]
fn higher_points_project_higher_on_screen() {
    let orbit = OrbitCamera::for_scene(&scene_bounds());
    let vp = orbit.camera(1.0).view_proj();
    let low = project_to_screen(vp, orbit.target, 100.0, 100.0).unwrap();
    let high = project_to_screen(vp, orbit.target + Vec3::Z * 50.0, 100.0, 100.0).unwrap();
    assert!(high.y < low.y);
}

#[test]
fn orbit_clamps_pitch_and_reset_restores_home() {
    let mut orbit = OrbitCamera::for_scene(&scene_bounds());
    let home_eye = orbit.eye();
    orbit.orbit(0.0, 100_000.0);
    assert!(orbit.pitch < std::f32::consts::FRAC_PI_2);
    orbit.orbit(0.0, -200_000.0);
    assert!(orbit.pitch > -std::f32::consts::FRAC_PI_2);
    orbit.orbit(250.0, 0.0);
    orbit.zoom(0.5);
    orbit.reset();
    assert!(orbit.eye().distance(home_eye) < 1e-2);
}

#[test]
fn zoom_is_clamped_and_ignores_bad_factors() {
    let mut orbit = OrbitCamera::for_scene(&scene_bounds());
    let d0 = orbit.distance;
    orbit.zoom(0.5);
    assert!((orbit.distance - d0 * 0.5).abs() < 1e-2);
    orbit.zoom(f32::NAN);
    orbit.zoom(-2.0);
    assert!((orbit.distance - d0 * 0.5).abs() < 1e-2);
    for _ in 0..100 {
        orbit.zoom(0.5);
    }
    assert!(orbit.distance > 0.0);
    for _ in 0..100 {
        orbit.zoom_by_wheel(500.0);
    }
    assert!(orbit.distance <= d0 * 6.0 + 1e-2);
}

#[test]
fn camera_matrices_match_glam_helpers() {
    let cam = Camera {
        eye: Vec3::new(0.0, -10.0, 5.0),
        target: Vec3::ZERO,
        up: Vec3::Z,
        aspect: 1.5,
        fovy_radians: 0.8,
        znear: 0.1,
        zfar: 100.0,
    };
    let expected = Mat4::perspective_rh(0.8, 1.5, 0.1, 100.0)
        * Mat4::look_at_rh(cam.eye, cam.target, cam.up);
    assert!(cam.view_proj().abs_diff_eq(expected, 1e-6));
}
