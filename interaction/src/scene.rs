//! Home scene rules over an external 3D renderer.
//!
//! The renderer itself (model loading, draw loop, lighting) is an external
//! collaborator reached through [`SceneRenderer`]. This module owns only the
//! rules the page depends on: where the camera goes, how the layout responds
//! to viewport width, how dragging turns the island, when the sky spins,
//! when the plane animates, and which info stage the island yaw selects.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use std::f64::consts::TAU;

use serde::Serialize;

use crate::timing::{COMPACT_VIEWPORT_PX, ISLAND_DRAG_YAW, SKY_YAW_PER_SEC};

/// Model files loaded at mount, in load order.
pub const SCENE_ASSETS: [&str; 3] = ["/assets/3D/sky.glb", "/assets/3D/plane.glb", "/assets/3D/island.glb"];

/// Plane sub-animation that runs while the island is rotating.
pub const PLANE_ANIMATION: &str = "Take 001";

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraPlacement {
    pub position: Vec3,
    pub look_at: Option<Vec3>,
    pub fov: f64,
    pub near: f64,
    pub far: f64,
}

/// Camera the canvas is created with.
pub const INITIAL_CAMERA: CameraPlacement = CameraPlacement {
    position: Vec3::new(0.0, 130.0, 25.0),
    look_at: None,
    fov: 75.0,
    near: 0.1,
    far: 1000.0,
};

/// Camera applied once after mount.
pub const MOUNTED_CAMERA: CameraPlacement = CameraPlacement {
    position: Vec3::new(0.0, 110.0, 130.0),
    look_at: Some(Vec3::new(0.0, 80.0, 20.0)),
    ..INITIAL_CAMERA
};

/// Model transforms for one viewport class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneLayout {
    pub island_scale: f64,
    pub plane_scale: f64,
    pub plane_position: Vec3,
    pub plane_rotation: Vec3,
}

#[must_use]
pub fn is_compact(viewport_width: f64) -> bool {
    viewport_width < COMPACT_VIEWPORT_PX
}

#[must_use]
pub fn layout_for_width(viewport_width: f64) -> SceneLayout {
    let compact = is_compact(viewport_width);
    SceneLayout {
        island_scale: if compact { 0.9 } else { 1.0 },
        plane_scale: 3.0,
        plane_position: if compact { Vec3::new(0.0, 107.0, 123.0) } else { Vec3::new(0.0, 110.0, 120.0) },
        plane_rotation: Vec3::new(0.0, 1.5, 0.0),
    }
}

/// Loader text for a progress percentage, clamped to `0..=100`.
#[must_use]
pub fn progress_label(progress: f64) -> String {
    let clamped = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 100.0) };
    format!("{clamped:.2}%")
}

/// Whether the loader can be dismissed.
#[must_use]
pub fn loading_complete(progress: f64) -> bool {
    progress >= 100.0
}

/// Call to action shown under a stage's copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Info panel selected by the island's orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Greeting,
    Interests,
    Craft,
    Farewell,
}

impl Stage {
    #[must_use]
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(Self::Greeting),
            2 => Some(Self::Interests),
            3 => Some(Self::Craft),
            4 => Some(Self::Farewell),
            _ => None,
        }
    }

    #[must_use]
    pub fn index(self) -> u8 {
        match self {
            Self::Greeting => 1,
            Self::Interests => 2,
            Self::Craft => 3,
            Self::Farewell => 4,
        }
    }

    #[must_use]
    pub fn link(self) -> Option<StageLink> {
        match self {
            Self::Greeting => None,
            Self::Interests => Some(StageLink { label: "About Me", href: "/about" }),
            Self::Craft => Some(StageLink { label: "View My Projects", href: "/projects" }),
            Self::Farewell => Some(StageLink { label: "Get In Touch", href: "/contact" }),
        }
    }

    /// Stage facing the camera at `yaw` radians, if any.
    #[must_use]
    pub fn for_yaw(yaw: f64) -> Option<Self> {
        let yaw = normalize_yaw(yaw);
        match yaw {
            y if (4.25..=4.75).contains(&y) => Some(Self::Greeting),
            y if (2.4..=2.6).contains(&y) => Some(Self::Interests),
            y if (0.85..=1.3).contains(&y) => Some(Self::Craft),
            y if (5.45..=5.85).contains(&y) => Some(Self::Farewell),
            _ => None,
        }
    }
}

/// Wrap `yaw` into `[0, 2π)`.
#[must_use]
pub fn normalize_yaw(yaw: f64) -> f64 {
    let wrapped = yaw.rem_euclid(TAU);
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Operations the page needs from the 3D renderer.
pub trait SceneRenderer {
    /// Start loading the models; progress is reported out of band.
    fn load(&mut self, assets: &[&str]);
    fn place_camera(&mut self, camera: &CameraPlacement);
    fn apply_layout(&mut self, layout: &SceneLayout);
    fn set_sky_yaw(&mut self, yaw: f64);
    fn set_island_yaw(&mut self, yaw: f64);
    fn play_animation(&mut self, name: &str);
    fn stop_animation(&mut self, name: &str);
}

#[derive(Debug)]
pub struct SceneController<R> {
    renderer: R,
    viewport_width: f64,
    rotating: bool,
    drag_x: Option<f64>,
    sky_yaw: f64,
    island_yaw: f64,
    stage: Option<Stage>,
}

impl<R: SceneRenderer> SceneController<R> {
    /// Load the models, place the camera and apply the initial layout.
    pub fn mount(mut renderer: R, viewport_width: f64) -> Self {
        renderer.load(&SCENE_ASSETS);
        renderer.place_camera(&MOUNTED_CAMERA);
        renderer.apply_layout(&layout_for_width(viewport_width));
        Self {
            renderer,
            viewport_width,
            rotating: false,
            drag_x: None,
            sky_yaw: 0.0,
            island_yaw: 0.0,
            stage: None,
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn is_rotating(&self) -> bool {
        self.rotating
    }

    #[must_use]
    pub fn stage(&self) -> Option<Stage> {
        self.stage
    }

    #[must_use]
    pub fn sky_yaw(&self) -> f64 {
        self.sky_yaw
    }

    #[must_use]
    pub fn island_yaw(&self) -> f64 {
        self.island_yaw
    }

    /// Re-apply the layout when the viewport crosses the compact breakpoint.
    pub fn resize(&mut self, viewport_width: f64) {
        let crossed = is_compact(viewport_width) != is_compact(self.viewport_width);
        self.viewport_width = viewport_width;
        if crossed {
            self.renderer.apply_layout(&layout_for_width(viewport_width));
        }
    }

    /// Toggle rotation. The plane animation is only started or stopped on change.
    pub fn set_rotating(&mut self, rotating: bool) {
        if self.rotating == rotating {
            return;
        }
        self.rotating = rotating;
        if rotating {
            self.renderer.play_animation(PLANE_ANIMATION);
        } else {
            self.renderer.stop_animation(PLANE_ANIMATION);
        }
    }

    pub fn drag_start(&mut self, x: f64) {
        self.drag_x = Some(x);
        self.set_rotating(true);
    }

    pub fn drag_move(&mut self, x: f64) {
        let Some(last) = self.drag_x else {
            return;
        };
        self.drag_x = Some(x);
        if self.viewport_width <= 0.0 {
            return;
        }
        let delta = (x - last) / self.viewport_width * ISLAND_DRAG_YAW;
        self.island_yaw = normalize_yaw(self.island_yaw + delta);
        self.renderer.set_island_yaw(self.island_yaw);
        self.stage = Stage::for_yaw(self.island_yaw);
    }

    pub fn drag_end(&mut self) {
        self.drag_x = None;
        self.set_rotating(false);
    }

    /// Per-frame hook. Only the sky moves, and only while rotating.
    pub fn frame(&mut self, delta_seconds: f64) {
        if !self.rotating {
            return;
        }
        self.sky_yaw += SKY_YAW_PER_SEC * delta_seconds;
        self.renderer.set_sky_yaw(self.sky_yaw);
    }
}
