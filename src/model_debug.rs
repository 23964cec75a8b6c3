//! `<model-viewer>` inspection and metal correction, bound to the JS
//! model graph through `Reflect`.

use crate::dom;
use js_sys::{Array, Function, Reflect};
use portfolio_core::constants::{ADJUST_RECHECK_MS, INSPECT_RECHECK_MS, MODEL_VIEWER_SELECTOR};
use portfolio_core::materials;
use portfolio_core::{FactorAccess, FxError, FxResult, ImageInfo, Material, ModelGraph, PbrFactors};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

const TEXTURE_SLOTS: [&str; 3] = ["baseColorTexture", "metallicRoughnessTexture", "normalTexture"];

fn prop(target: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

fn method(target: &JsValue, key: &str) -> Option<Function> {
    prop(target, key).and_then(|v| v.dyn_into::<Function>().ok())
}

fn list(target: &JsValue, key: &str) -> Vec<JsValue> {
    prop(target, key)
        .filter(|v| Array::is_array(v))
        .map(|v| Array::from(&v).iter().collect())
        .unwrap_or_default()
}

fn js_err(e: JsValue) -> FxError {
    FxError::Js(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}

/// One entry of `model.materials`.
pub struct JsMaterial {
    obj: JsValue,
}

impl JsMaterial {
    fn pbr(&self) -> Option<JsValue> {
        prop(&self.obj, "pbrMetallicRoughness")
    }

    fn read_factor(pbr: &JsValue, field: &str, getter: &str) -> Option<f64> {
        prop(pbr, field).and_then(|v| v.as_f64()).or_else(|| {
            method(pbr, getter)
                .and_then(|f| f.call0(pbr).ok())
                .and_then(|v| v.as_f64())
        })
    }

    fn call_setter(&self, target: &JsValue, name: &str, value: f64) -> FxResult<()> {
        let f = method(target, name).ok_or_else(|| FxError::MaterialMutation {
            material: self.name(),
            reason: format!("{name} missing"),
        })?;
        f.call1(target, &JsValue::from_f64(value))
            .map(|_| ())
            .map_err(|e| FxError::MaterialMutation {
                material: self.name(),
                reason: js_err(e).to_string(),
            })
    }

    fn set_field(&self, field: &str, value: f64) -> FxResult<()> {
        Reflect::set(&self.obj, &JsValue::from_str(field), &JsValue::from_f64(value))
            .map_err(|e| FxError::MaterialMutation {
                material: self.name(),
                reason: js_err(e).to_string(),
            })
            .map(|_| ())
    }
}

impl Material for JsMaterial {
    fn name(&self) -> String {
        prop(&self.obj, "name").and_then(|v| v.as_string()).unwrap_or_default()
    }

    fn factors(&self) -> PbrFactors {
        match self.pbr() {
            Some(pbr) => PbrFactors {
                metallic: Self::read_factor(&pbr, "metallicFactor", "getMetallicFactor"),
                roughness: Self::read_factor(&pbr, "roughnessFactor", "getRoughnessFactor"),
            },
            None => PbrFactors::default(),
        }
    }

    fn texture_slots(&self) -> Vec<&'static str> {
        let pbr = self.pbr();
        TEXTURE_SLOTS
            .into_iter()
            .filter(|slot| {
                let on_pbr = pbr.as_ref().and_then(|p| prop(p, slot)).is_some();
                on_pbr || (*slot == "normalTexture" && prop(&self.obj, slot).is_some())
            })
            .collect()
    }

    fn factor_access(&self) -> FactorAccess {
        let has_setter = self
            .pbr()
            .and_then(|p| method(&p, "setMetallicFactor"))
            .is_some();
        let has_field = |k: &str| Reflect::has(&self.obj, &JsValue::from_str(k)).unwrap_or(false);
        if has_setter {
            FactorAccess::Setters
        } else if has_field("metallicFactor") && has_field("roughnessFactor") {
            FactorAccess::Fields
        } else {
            FactorAccess::ReadOnly
        }
    }

    fn write_factors(&mut self, access: FactorAccess, metallic: f64, roughness: f64) -> FxResult<()> {
        match access {
            FactorAccess::Setters => {
                let pbr = self.pbr().ok_or_else(|| FxError::MaterialMutation {
                    material: self.name(),
                    reason: "pbrMetallicRoughness missing".into(),
                })?;
                self.call_setter(&pbr, "setMetallicFactor", metallic)?;
                self.call_setter(&pbr, "setRoughnessFactor", roughness)
            }
            FactorAccess::Fields => {
                self.set_field("metallicFactor", metallic)?;
                self.set_field("roughnessFactor", roughness)
            }
            FactorAccess::ReadOnly => Ok(()),
        }
    }
}

/// The viewer's loaded `model` object.
pub struct JsModel {
    obj: JsValue,
}

impl ModelGraph for JsModel {
    type Mat = JsMaterial;

    fn materials(&self) -> Vec<JsMaterial> {
        list(&self.obj, "materials")
            .into_iter()
            .map(|obj| JsMaterial { obj })
            .collect()
    }

    fn texture_names(&self) -> Vec<String> {
        list(&self.obj, "textures")
            .iter()
            .map(|t| {
                prop(t, "name")
                    .and_then(|n| n.as_string())
                    .unwrap_or_else(|| format!("{:?}", t))
            })
            .collect()
    }

    fn images(&self) -> Vec<ImageInfo> {
        list(&self.obj, "images")
            .iter()
            .enumerate()
            .map(|(index, img)| ImageInfo {
                index,
                mime_type: prop(img, "mimeType").and_then(|v| v.as_string()),
                buffer_view: prop(img, "bufferView").map(|v| v.as_string().unwrap_or_else(|| format!("{:?}", v))),
                uri: prop(img, "uri").and_then(|v| v.as_string()),
            })
            .collect()
    }

    fn update_scene(&self) -> bool {
        match method(&self.obj, "updateScene") {
            Some(f) => f.call0(&self.obj).is_ok(),
            None => false,
        }
    }
}

/// Inspection helpers bound to one `<model-viewer>` element. Exported so a
/// page button can re-run either pass.
#[wasm_bindgen]
#[derive(Clone)]
pub struct ModelDebug {
    viewer: web::Element,
}

#[wasm_bindgen]
impl ModelDebug {
    #[wasm_bindgen(constructor)]
    pub fn new(selector: &str) -> Result<ModelDebug, JsValue> {
        let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
        let viewer = document
            .query_selector(selector)
            .map_err(|e| JsValue::from_str(&js_err(e).to_string()))?
            .ok_or_else(|| JsValue::from_str(&FxError::MissingElement(selector.to_owned()).to_string()))?;
        Ok(ModelDebug { viewer })
    }

    #[wasm_bindgen(js_name = inspectModel)]
    pub fn inspect_model(&self) {
        if let Err(e) = materials::inspect_model(self.model().as_ref()) {
            if e != FxError::ModelNotLoaded {
                log::warn!("[model] inspection failed: {}", e);
            }
        }
    }

    #[wasm_bindgen(js_name = adjustMetallicFallback)]
    pub fn adjust_metallic(&self) {
        if let Err(e) = materials::adjust_metallic(self.model().as_ref()) {
            log::debug!("[model] correction skipped: {}", e);
        }
    }
}

impl ModelDebug {
    fn model(&self) -> Option<JsModel> {
        prop(&self.viewer, "model").map(|obj| JsModel { obj })
    }
}

fn defer(ms: i32, f: impl FnOnce() + 'static) {
    if let Some(window) = web::window() {
        let cb = Closure::once(f);
        _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), ms);
        cb.forget();
    }
}

/// Run both passes on every viewer `load`, plus one delayed re-check of
/// each to catch resources that resolve late.
pub fn wire(document: &web::Document) -> Option<ModelDebug> {
    let Ok(Some(viewer)) = document.query_selector(MODEL_VIEWER_SELECTOR) else {
        log::info!("[model] no {} on page, model debug disabled", MODEL_VIEWER_SELECTOR);
        return None;
    };
    let debug = ModelDebug { viewer };

    let on_load = debug.clone();
    let closure = Closure::wrap(Box::new(move |_: web::Event| {
        log::info!("[model] load event fired");
        on_load.inspect_model();
        on_load.adjust_metallic();
    }) as Box<dyn FnMut(_)>);
    _ = debug
        .viewer
        .add_event_listener_with_callback("load", closure.as_ref().unchecked_ref());
    closure.forget();

    let later = debug.clone();
    defer(INSPECT_RECHECK_MS, move || later.inspect_model());
    let later = debug.clone();
    defer(ADJUST_RECHECK_MS, move || later.adjust_metallic());

    Some(debug)
}
