//! Paint-layer classification migration (schema 2.50).
//!
//! Before 2.50 a vehicle material only carried a flat diffuse color
//! node; the paintable region was implied by a bracketed label in the
//! material name. 2.50 makes the classification explicit. This step
//! fills in the paint-layer field from the name label, falling back to
//! `Default`/`Custom` by comparing the diffuse color against the stock
//! default. The color itself is left untouched.

use tracing::debug;

use crate::doc::{Document, PaintLayer, SchemaVersion};
use crate::util::Result;

use super::{MigrationReport, MigrationStep};

/// Upgrades legacy documents to schema 2.50.
pub struct PaintLayersStep;

impl MigrationStep for PaintLayersStep {
    fn name(&self) -> &'static str {
        "paint_layers"
    }

    fn source(&self) -> SchemaVersion {
        SchemaVersion::Legacy
    }

    fn target(&self) -> SchemaVersion {
        SchemaVersion::V250
    }

    fn applies_to(&self, doc: &Document) -> bool {
        let diffuse_node = &doc.config().diffuse_node;
        doc.schema_version < SchemaVersion::V250
            && doc
                .materials
                .iter()
                .any(|m| m.paint_layer.is_none() && m.has_node(diffuse_node))
    }

    fn apply(&self, doc: &mut Document, report: &mut MigrationReport) -> Result<()> {
        let diffuse_node = doc.config().diffuse_node.clone();
        let default_diffuse = doc.config().default_paint_diffuse;
        let diagnostics_before = report.diagnostics.len();

        for mat in &mut doc.materials {
            if mat.paint_layer.is_some() || !mat.has_node(&diffuse_node) {
                // already classified, or unrelated content: pass through
                continue;
            }

            let layer = match PaintLayer::from_material_name(&mat.name) {
                Some(layer) => layer,
                None => match mat.vec3(&diffuse_node) {
                    Ok(diffuse) if diffuse == default_diffuse => PaintLayer::Default,
                    Ok(_) => PaintLayer::Custom,
                    // wrong node type: skip this material, keep going
                    Err(e) => {
                        report.diagnostics.push(e.in_entry(mat.name.clone()));
                        continue;
                    }
                },
            };

            debug!(material = %mat.name, ?layer, "classified paint layer");
            mat.paint_layer = Some(layer);
        }

        // the version only advances once every entry migrated cleanly;
        // a partially migrated document stays visible to diagnostics
        if report.diagnostics.len() == diagnostics_before {
            doc.schema_version = SchemaVersion::V250;
        }
        Ok(())
    }
}
