//! Bridge to the external 3D renderer.
//!
//! The page loads `/assets/js/island-scene.js`, which installs an
//! `islandScene` global wrapping the WebGL renderer. This module implements
//! the core's `SceneRenderer` over that global. Structured arguments cross the
//! boundary as JSON; renderer failures are logged and never interrupt the page.

use interaction::scene::{CameraPlacement, INITIAL_CAMERA, SceneLayout, SceneRenderer};
use serde::Serialize;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

#[wasm_bindgen(js_namespace = islandScene)]
extern "C" {
    #[wasm_bindgen(catch, js_name = mount)]
    fn js_mount(
        canvas: &HtmlCanvasElement,
        camera_json: &str,
        on_progress: &Closure<dyn FnMut(f64)>,
    ) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_name = unmount)]
    fn js_unmount(canvas: &HtmlCanvasElement) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_name = load)]
    fn js_load(canvas: &HtmlCanvasElement, assets_json: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_name = placeCamera)]
    fn js_place_camera(canvas: &HtmlCanvasElement, camera_json: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_name = applyLayout)]
    fn js_apply_layout(canvas: &HtmlCanvasElement, layout_json: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_name = setSkyYaw)]
    fn js_set_sky_yaw(canvas: &HtmlCanvasElement, yaw: f64) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_name = setIslandYaw)]
    fn js_set_island_yaw(canvas: &HtmlCanvasElement, yaw: f64) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_name = playAnimation)]
    fn js_play_animation(canvas: &HtmlCanvasElement, name: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_name = stopAnimation)]
    fn js_stop_animation(canvas: &HtmlCanvasElement, name: &str) -> Result<(), JsValue>;
}

/// `SceneRenderer` backed by the `islandScene` global, bound to one canvas.
pub struct JsSceneRenderer {
    canvas: HtmlCanvasElement,
    _on_progress: Closure<dyn FnMut(f64)>,
}

impl JsSceneRenderer {
    /// Create the renderer on `canvas`. `on_progress` receives load progress
    /// in percent for as long as the renderer lives.
    ///
    /// # Errors
    ///
    /// Returns the JS exception when the global is missing or mounting fails.
    pub fn attach(canvas: HtmlCanvasElement, on_progress: impl FnMut(f64) + 'static) -> Result<Self, JsValue> {
        let on_progress = Closure::<dyn FnMut(f64)>::new(on_progress);
        js_mount(&canvas, &to_json(&INITIAL_CAMERA), &on_progress)?;
        Ok(Self { canvas, _on_progress: on_progress })
    }
}

impl Drop for JsSceneRenderer {
    fn drop(&mut self) {
        report("unmount", js_unmount(&self.canvas));
    }
}

impl SceneRenderer for JsSceneRenderer {
    fn load(&mut self, assets: &[&str]) {
        report("load", js_load(&self.canvas, &to_json(&assets)));
    }

    fn place_camera(&mut self, camera: &CameraPlacement) {
        report("placeCamera", js_place_camera(&self.canvas, &to_json(camera)));
    }

    fn apply_layout(&mut self, layout: &SceneLayout) {
        report("applyLayout", js_apply_layout(&self.canvas, &to_json(layout)));
    }

    fn set_sky_yaw(&mut self, yaw: f64) {
        report("setSkyYaw", js_set_sky_yaw(&self.canvas, yaw));
    }

    fn set_island_yaw(&mut self, yaw: f64) {
        report("setIslandYaw", js_set_island_yaw(&self.canvas, yaw));
    }

    fn play_animation(&mut self, name: &str) {
        report("playAnimation", js_play_animation(&self.canvas, name));
    }

    fn stop_animation(&mut self, name: &str) {
        report("stopAnimation", js_stop_animation(&self.canvas, name));
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        log::warn!("scene payload not encoded: {e}");
        "null".to_owned()
    })
}

fn report(call: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        log::warn!("islandScene.{call} failed: {e:?}");
    }
}
