//! Schema migration of loaded documents.
//!
//! Old project files are rewritten in place to the current schema before
//! any other processing. Each migration step pairs a structural predicate
//! with an in-place, idempotent rewrite and declares the version span it
//! upgrades. Steps run once, in registration order, with no fixpoint
//! loop; the registration-time ordering check guarantees an earlier step
//! can never re-enable a later step's predicate.
//!
//! Migration never hard-fails a whole document: entries that cannot be
//! migrated are passed through untouched and reported as diagnostics.

pub mod paint_layers;

pub use paint_layers::PaintLayersStep;

use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::doc::{Document, SchemaVersion};
use crate::util::{Error, Result};

/// One ordered, idempotent upgrade step.
pub trait MigrationStep {
    /// Step name, used in reports and diagnostics.
    fn name(&self) -> &'static str;

    /// Lowest version this step upgrades from.
    fn source(&self) -> SchemaVersion;

    /// Version stamped on the document after a successful apply.
    fn target(&self) -> SchemaVersion;

    /// Structural predicate: does this document still carry the old shape?
    fn applies_to(&self, doc: &Document) -> bool;

    /// Rewrite the document in place. Must be idempotent; per-entry
    /// problems go into the report, not into the error return.
    fn apply(&self, doc: &mut Document, report: &mut MigrationReport) -> Result<()>;
}

/// Outcome of a migration pass.
#[derive(Debug, Default)]
pub struct MigrationReport {
    /// Names of steps that ran.
    pub applied: Vec<&'static str>,
    /// Non-fatal issues: skipped entries, unrecognized shapes.
    pub diagnostics: SmallVec<[Error; 4]>,
}

impl MigrationReport {
    /// True when the pass produced no diagnostics.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Ordered registry of migration steps.
#[derive(Default)]
pub struct Migrator {
    steps: Vec<Box<dyn MigrationStep>>,
}

impl Migrator {
    /// Create an empty migrator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a step after the previously registered ones.
    ///
    /// Rejects steps whose span does not move the version forward, and
    /// steps that would run before a version an earlier step produces -
    /// that ordering could let an earlier apply re-enable a later
    /// predicate, which the single-pass contract forbids.
    pub fn register(&mut self, step: Box<dyn MigrationStep>) -> Result<()> {
        if step.target() <= step.source() {
            return Err(Error::MigrationOrder {
                step: step.name().to_string(),
                reason: format!(
                    "target {:?} does not advance past source {:?}",
                    step.target(),
                    step.source()
                ),
            });
        }
        if let Some(prev) = self.steps.last() {
            if step.source() < prev.target() {
                return Err(Error::MigrationOrder {
                    step: step.name().to_string(),
                    reason: format!(
                        "source {:?} is below previous step '{}' target {:?}",
                        step.source(),
                        prev.name(),
                        prev.target()
                    ),
                });
            }
        }
        self.steps.push(step);
        Ok(())
    }

    /// Run a single migration pass over the document.
    ///
    /// Steps whose predicate holds are applied in registration order.
    /// Afterwards, a document still below [`SchemaVersion::CURRENT`] is
    /// stamped current if its shape already looks current, otherwise an
    /// [`Error::UnrecognizedShape`] diagnostic is recorded. The document
    /// is never rolled back.
    pub fn run(&self, doc: &mut Document) -> MigrationReport {
        let mut report = MigrationReport::default();

        for step in &self.steps {
            if !step.applies_to(doc) {
                continue;
            }
            debug!(step = step.name(), "applying migration step");
            match step.apply(doc, &mut report) {
                Ok(()) => report.applied.push(step.name()),
                Err(e) => {
                    warn!(step = step.name(), error = %e, "migration step failed");
                    report.diagnostics.push(e);
                }
            }
        }

        if doc.schema_version < SchemaVersion::CURRENT {
            if shape_is_current(doc) {
                doc.schema_version = SchemaVersion::CURRENT;
                debug!("document shape already current, stamping version");
            } else {
                report.diagnostics.push(Error::UnrecognizedShape(
                    "document is below the current schema version and no \
                     migration rule matched"
                        .to_string(),
                ));
            }
        }

        report
    }
}

/// Best-effort check that a document already has the current shape.
///
/// Every material with a diffuse color node must carry a paint layer;
/// materials without one are unrelated content and pass through.
fn shape_is_current(doc: &Document) -> bool {
    let diffuse_node = &doc.config().diffuse_node;
    doc.materials
        .iter()
        .all(|m| m.paint_layer.is_some() || !m.has_node(diffuse_node))
}

/// Migrate a freshly loaded document to the current schema.
///
/// Builds the default step registry and runs one pass. Idempotent;
/// intended to be called once per document immediately after load.
pub fn do_versions(doc: &mut Document) -> MigrationReport {
    let mut migrator = Migrator::new();
    // default registry is internally consistent, register cannot fail
    if let Err(e) = migrator.register(Box::new(PaintLayersStep)) {
        let mut report = MigrationReport::default();
        report.diagnostics.push(e);
        return report;
    }
    migrator.run(doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SpanStep {
        name: &'static str,
        source: SchemaVersion,
        target: SchemaVersion,
    }

    impl MigrationStep for SpanStep {
        fn name(&self) -> &'static str {
            self.name
        }
        fn source(&self) -> SchemaVersion {
            self.source
        }
        fn target(&self) -> SchemaVersion {
            self.target
        }
        fn applies_to(&self, _doc: &Document) -> bool {
            false
        }
        fn apply(&self, _doc: &mut Document, _report: &mut MigrationReport) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_register_rejects_non_advancing_step() {
        let mut migrator = Migrator::new();
        let err = migrator
            .register(Box::new(SpanStep {
                name: "noop",
                source: SchemaVersion::V250,
                target: SchemaVersion::V250,
            }))
            .unwrap_err();
        assert!(matches!(err, Error::MigrationOrder { .. }));
    }

    #[test]
    fn test_register_rejects_backwards_chain() {
        let mut migrator = Migrator::new();
        migrator
            .register(Box::new(SpanStep {
                name: "first",
                source: SchemaVersion::Legacy,
                target: SchemaVersion::V250,
            }))
            .unwrap();
        let err = migrator
            .register(Box::new(SpanStep {
                name: "second",
                source: SchemaVersion::Legacy,
                target: SchemaVersion::V250,
            }))
            .unwrap_err();
        assert!(matches!(err, Error::MigrationOrder { .. }));
    }

    #[test]
    fn test_empty_document_stamped_current() {
        let mut doc = Document::default();
        let report = do_versions(&mut doc);
        assert!(report.is_clean());
        assert!(report.applied.is_empty());
        assert_eq!(doc.schema_version, SchemaVersion::CURRENT);
    }
}
