//! Model inspection and the metal material correction pass.
//!
//! The host viewer's model is reached through [`ModelGraph`]; each material
//! reports once how its PBR factors can be written ([`FactorAccess`]) and
//! the correction pass uses that path for the write.

use crate::constants::{METAL_KEYWORDS, METAL_METALLIC_FACTOR, METAL_ROUGHNESS_FACTOR};
use crate::error::{FxError, FxResult};

/// How a material's metallic/roughness factors can be written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FactorAccess {
    /// `setMetallicFactor` / `setRoughnessFactor` on the PBR block.
    Setters,
    /// Plain `metallicFactor` / `roughnessFactor` fields on the material.
    Fields,
    /// Neither is available; the material is left alone.
    ReadOnly,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PbrFactors {
    pub metallic: Option<f64>,
    pub roughness: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageInfo {
    pub index: usize,
    pub mime_type: Option<String>,
    pub buffer_view: Option<String>,
    pub uri: Option<String>,
}

pub trait Material {
    fn name(&self) -> String;
    fn factors(&self) -> PbrFactors;
    /// Names of the texture slots that are populated.
    fn texture_slots(&self) -> Vec<&'static str>;
    fn factor_access(&self) -> FactorAccess;
    fn write_factors(&mut self, access: FactorAccess, metallic: f64, roughness: f64) -> FxResult<()>;
}

pub trait ModelGraph {
    type Mat: Material;

    fn materials(&self) -> Vec<Self::Mat>;
    fn texture_names(&self) -> Vec<String>;
    fn images(&self) -> Vec<ImageInfo>;
    /// Ask the viewer to re-render. Returns false when it cannot.
    fn update_scene(&self) -> bool;
}

/// Case-insensitive metal keyword match on a material name.
pub fn is_metal_name(name: &str) -> bool {
    let lower = name.to_lowercase();
    METAL_KEYWORDS.iter().any(|k| lower.contains(k))
}

#[derive(Clone, Debug, PartialEq)]
pub struct MaterialReport {
    pub index: usize,
    pub name: String,
    pub factors: PbrFactors,
    pub textures: Vec<&'static str>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModelReport {
    pub materials: Vec<MaterialReport>,
    pub textures: Vec<String>,
    pub images: Vec<ImageInfo>,
}

/// Non-mutating pass: collect and log the model's material metadata.
/// A missing model is logged and reported as [`FxError::ModelNotLoaded`].
pub fn inspect_model<G: ModelGraph>(model: Option<&G>) -> FxResult<ModelReport> {
    let model = model.ok_or_else(|| {
        log::info!("[model] model not yet available");
        FxError::ModelNotLoaded
    })?;
    let materials: Vec<MaterialReport> = model
        .materials()
        .iter()
        .enumerate()
        .map(|(index, m)| MaterialReport {
            index,
            name: m.name(),
            factors: m.factors(),
            textures: m.texture_slots(),
        })
        .collect();
    let report = ModelReport {
        materials,
        textures: model.texture_names(),
        images: model.images(),
    };

    log::info!(
        "[model] inspection: materials={} textures={} images={}",
        report.materials.len(),
        report.textures.len(),
        report.images.len()
    );
    for m in &report.materials {
        log::info!(
            "[model] material[{}] {:?} metallic={:?} roughness={:?} textures={:?}",
            m.index,
            m.name,
            m.factors.metallic,
            m.factors.roughness,
            m.textures
        );
    }
    if !report.textures.is_empty() {
        log::info!("[model] textures: {:?}", report.textures);
    }
    for img in &report.images {
        log::info!(
            "[model] image[{}] mime={:?} bufferView={:?} uri={:?}",
            img.index,
            img.mime_type,
            img.buffer_view,
            img.uri
        );
    }
    Ok(report)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdjustReport {
    pub matched: usize,
    pub adjusted: usize,
    pub failed: usize,
    pub skipped: usize,
    pub scene_updated: bool,
}

/// Force metal-looking materials to fully metallic with moderate
/// roughness, then ask the viewer to refresh. A failing material is logged
/// at debug level and the pass moves on.
pub fn adjust_metallic<G: ModelGraph>(model: Option<&G>) -> FxResult<AdjustReport> {
    let model = model.ok_or(FxError::ModelNotLoaded)?;
    let mut report = AdjustReport::default();
    for mut mat in model.materials() {
        let name = mat.name();
        if !is_metal_name(&name) {
            continue;
        }
        report.matched += 1;
        let access = mat.factor_access();
        if access == FactorAccess::ReadOnly {
            report.skipped += 1;
            log::debug!("[model] {:?} exposes no writable factors", name);
            continue;
        }
        match mat.write_factors(access, METAL_METALLIC_FACTOR, METAL_ROUGHNESS_FACTOR) {
            Ok(()) => report.adjusted += 1,
            Err(e) => {
                report.failed += 1;
                log::debug!("[model] adjust per-material failed: {}", e);
            }
        }
    }
    report.scene_updated = model.update_scene();
    log::info!(
        "[model] metal correction: matched={} adjusted={} failed={}",
        report.matched,
        report.adjusted,
        report.failed
    );
    Ok(report)
}
