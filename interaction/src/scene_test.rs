#![allow(clippy::float_cmp)]

use super::*;

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Load(Vec<String>),
    Camera(CameraPlacement),
    Layout(SceneLayout),
    SkyYaw(f64),
    IslandYaw(f64),
    Play(String),
    Stop(String),
}

#[derive(Debug, Default)]
struct Recorder {
    calls: Vec<Call>,
}

impl SceneRenderer for Recorder {
    fn load(&mut self, assets: &[&str]) {
        self.calls.push(Call::Load(assets.iter().map(|a| (*a).to_owned()).collect()));
    }

    fn place_camera(&mut self, camera: &CameraPlacement) {
        self.calls.push(Call::Camera(*camera));
    }

    fn apply_layout(&mut self, layout: &SceneLayout) {
        self.calls.push(Call::Layout(*layout));
    }

    fn set_sky_yaw(&mut self, yaw: f64) {
        self.calls.push(Call::SkyYaw(yaw));
    }

    fn set_island_yaw(&mut self, yaw: f64) {
        self.calls.push(Call::IslandYaw(yaw));
    }

    fn play_animation(&mut self, name: &str) {
        self.calls.push(Call::Play(name.to_owned()));
    }

    fn stop_animation(&mut self, name: &str) {
        self.calls.push(Call::Stop(name.to_owned()));
    }
}

fn mounted(width: f64) -> SceneController<Recorder> {
    SceneController::mount(Recorder::default(), width)
}

fn animation_calls(c: &SceneController<Recorder>) -> Vec<&Call> {
    c.renderer().calls.iter().filter(|call| matches!(call, Call::Play(_) | Call::Stop(_))).collect()
}

// =============================================================
// Layout and camera
// =============================================================

#[test]
fn mount_loads_assets_then_places_camera_once() {
    let c = mounted(1280.0);
    let calls = &c.renderer().calls;
    assert_eq!(
        calls[0],
        Call::Load(vec![
            "/assets/3D/sky.glb".to_owned(),
            "/assets/3D/plane.glb".to_owned(),
            "/assets/3D/island.glb".to_owned(),
        ])
    );
    assert_eq!(calls[1], Call::Camera(MOUNTED_CAMERA));
    assert_eq!(calls.iter().filter(|call| matches!(call, Call::Camera(_))).count(), 1);
}

#[test]
fn mounted_camera_looks_at_island() {
    assert_eq!(INITIAL_CAMERA.position, Vec3::new(0.0, 130.0, 25.0));
    assert_eq!(MOUNTED_CAMERA.position, Vec3::new(0.0, 110.0, 130.0));
    assert_eq!(MOUNTED_CAMERA.look_at, Some(Vec3::new(0.0, 80.0, 20.0)));
    assert_eq!(MOUNTED_CAMERA.fov, 75.0);
    assert_eq!(MOUNTED_CAMERA.near, 0.1);
    assert_eq!(MOUNTED_CAMERA.far, 1000.0);
}

#[test]
fn compact_viewport_shrinks_island_and_moves_plane() {
    let compact = layout_for_width(767.0);
    assert_eq!(compact.island_scale, 0.9);
    assert_eq!(compact.plane_position, Vec3::new(0.0, 107.0, 123.0));

    let wide = layout_for_width(768.0);
    assert_eq!(wide.island_scale, 1.0);
    assert_eq!(wide.plane_position, Vec3::new(0.0, 110.0, 120.0));

    for layout in [compact, wide] {
        assert_eq!(layout.plane_scale, 3.0);
        assert_eq!(layout.plane_rotation, Vec3::new(0.0, 1.5, 0.0));
    }
}

#[test]
fn resize_reapplies_layout_only_across_breakpoint() {
    let mut c = mounted(1280.0);
    let layouts = |c: &SceneController<Recorder>| {
        c.renderer().calls.iter().filter(|call| matches!(call, Call::Layout(_))).count()
    };
    c.resize(1000.0);
    assert_eq!(layouts(&c), 1);
    c.resize(500.0);
    assert_eq!(layouts(&c), 2);
    assert_eq!(c.renderer().calls.last(), Some(&Call::Layout(layout_for_width(500.0))));
}

// =============================================================
// Rotation, sky and plane animation
// =============================================================

#[test]
fn sky_turns_only_while_rotating() {
    let mut c = mounted(1280.0);
    c.frame(1.0);
    assert_eq!(c.sky_yaw(), 0.0);

    c.set_rotating(true);
    c.frame(2.0);
    assert!((c.sky_yaw() - 0.3).abs() < 1e-12);

    c.set_rotating(false);
    c.frame(5.0);
    assert!((c.sky_yaw() - 0.3).abs() < 1e-12);
}

#[test]
fn plane_animation_issued_only_on_change() {
    let mut c = mounted(1280.0);
    c.set_rotating(false);
    c.set_rotating(true);
    c.set_rotating(true);
    c.set_rotating(false);
    c.set_rotating(false);
    assert_eq!(
        animation_calls(&c),
        vec![&Call::Play("Take 001".to_owned()), &Call::Stop("Take 001".to_owned())]
    );
}

#[test]
fn drag_rotates_island_and_toggles_rotating() {
    let mut c = mounted(1000.0);
    c.drag_start(100.0);
    assert!(c.is_rotating());
    c.drag_move(600.0);
    assert!((c.island_yaw() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    c.drag_end();
    assert!(!c.is_rotating());

    c.drag_move(900.0);
    assert!((c.island_yaw() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
}

#[test]
fn drag_selects_stage_from_yaw() {
    let mut c = mounted(1000.0);
    assert_eq!(c.stage(), None);
    c.drag_start(0.0);
    // 0.35 of the width is 0.35π ≈ 1.0996 rad.
    c.drag_move(350.0);
    c.drag_end();
    assert_eq!(c.stage(), Some(Stage::Craft));
}

// =============================================================
// Stages
// =============================================================

#[test]
fn stage_ranges_cover_the_four_panels() {
    assert_eq!(Stage::for_yaw(4.5), Some(Stage::Greeting));
    assert_eq!(Stage::for_yaw(2.5), Some(Stage::Interests));
    assert_eq!(Stage::for_yaw(1.0), Some(Stage::Craft));
    assert_eq!(Stage::for_yaw(5.6), Some(Stage::Farewell));
    assert_eq!(Stage::for_yaw(3.5), None);
    assert_eq!(Stage::for_yaw(4.5 - TAU), Some(Stage::Greeting));
}

#[test]
fn stage_links_route_to_pages() {
    assert_eq!(Stage::Greeting.link(), None);
    assert_eq!(Stage::Interests.link().map(|l| l.href), Some("/about"));
    assert_eq!(Stage::Craft.link().map(|l| l.href), Some("/projects"));
    assert_eq!(Stage::Farewell.link().map(|l| l.href), Some("/contact"));
}

#[test]
fn stage_index_round_trips() {
    for i in 1..=4 {
        assert_eq!(Stage::from_index(i).map(Stage::index), Some(i));
    }
    assert_eq!(Stage::from_index(0), None);
    assert_eq!(Stage::from_index(5), None);
}

#[test]
fn normalize_yaw_wraps_into_one_turn() {
    assert_eq!(normalize_yaw(0.0), 0.0);
    assert!((normalize_yaw(TAU + 1.0) - 1.0).abs() < 1e-12);
    assert!((normalize_yaw(-1.0) - (TAU - 1.0)).abs() < 1e-12);
    assert!(normalize_yaw(-1e-18) < TAU);
}

// =============================================================
// Loader progress
// =============================================================

#[test]
fn progress_label_formats_two_decimals_and_clamps() {
    assert_eq!(progress_label(0.0), "0.00%");
    assert_eq!(progress_label(42.456), "42.46%");
    assert_eq!(progress_label(100.0), "100.00%");
    assert_eq!(progress_label(140.0), "100.00%");
    assert_eq!(progress_label(-3.0), "0.00%");
    assert_eq!(progress_label(f64::NAN), "0.00%");
}

#[test]
fn loader_dismissed_only_at_full_progress() {
    assert!(!loading_complete(0.0));
    assert!(!loading_complete(99.99));
    assert!(!loading_complete(f64::NAN));
    assert!(loading_complete(100.0));
}

// =============================================================
// Renderer payloads
// =============================================================

#[test]
fn layout_serializes_with_camel_case_keys() {
    let value = serde_json::to_value(layout_for_width(500.0)).unwrap();
    assert_eq!(value["islandScale"], 0.9);
    assert_eq!(value["planePosition"]["y"], 107.0);
    assert_eq!(value["planeRotation"]["y"], 1.5);
}

#[test]
fn camera_serializes_look_at() {
    let value = serde_json::to_value(MOUNTED_CAMERA).unwrap();
    assert_eq!(value["lookAt"]["z"], 20.0);
    assert_eq!(value["fov"], 75.0);
    assert!(serde_json::to_value(INITIAL_CAMERA).unwrap()["lookAt"].is_null());
}
