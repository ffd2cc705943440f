//! Materials and their node values.
//!
//! A material carries a flat list of named node values standing in for
//! the host's shader graph (name plus typed field lookup), and an
//! optional paint-layer classification written by the versioning pass.

use glam::{Vec3, Vec4};

use crate::util::{Error, Result};

/// Typed value held by a material node.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeValue {
    Float(f32),
    Bool(bool),
    Vec3(Vec3),
    Vec4(Vec4),
    Str(String),
}

impl NodeValue {
    /// Human-readable type name, used in type-mismatch errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Float(_) => "Float",
            Self::Bool(_) => "Bool",
            Self::Vec3(_) => "Vec3",
            Self::Vec4(_) => "Vec4",
            Self::Str(_) => "String",
        }
    }
}

/// A named node value in a material.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub name: String,
    pub value: NodeValue,
}

/// Classification of a vehicle material's color source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaintLayer {
    /// Not paintable, diffuse matches the stock default.
    Default,
    /// Not paintable, author-chosen diffuse.
    Custom,
    Primary,
    Secondary,
    Wheel,
    InteriorTrim,
    InteriorDash,
}

impl PaintLayer {
    /// Classify from a bracketed region label in a material name,
    /// e.g. `"vehicle_paint1 [PRIMARY]"`.
    pub fn from_material_name(name: &str) -> Option<Self> {
        if name.contains("[PRIMARY]") {
            Some(Self::Primary)
        } else if name.contains("[SECONDARY]") {
            Some(Self::Secondary)
        } else if name.contains("[WHEEL]") {
            Some(Self::Wheel)
        } else if name.contains("[INTERIOR TRIM]") {
            Some(Self::InteriorTrim)
        } else if name.contains("[DASHBOARD]") {
            Some(Self::InteriorDash)
        } else {
            None
        }
    }
}

/// A named material with node values and an optional paint layer.
#[derive(Clone, Debug, Default)]
pub struct Material {
    pub name: String,
    nodes: Vec<Node>,
    /// Present on documents at schema version 2.50 and later.
    pub paint_layer: Option<PaintLayer>,
}

impl Material {
    /// Create an empty material.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nodes: Vec::new(),
            paint_layer: None,
        }
    }

    /// Add or replace a node value.
    pub fn set_node(&mut self, name: impl Into<String>, value: NodeValue) {
        let name = name.into();
        for node in &mut self.nodes {
            if node.name == name {
                node.value = value;
                return;
            }
        }
        self.nodes.push(Node { name, value });
    }

    /// Look up a node by name.
    pub fn node(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.name == name)
    }

    /// Check if a node exists.
    pub fn has_node(&self, name: &str) -> bool {
        self.node(name).is_some()
    }

    /// Typed lookup of a Vec3 node.
    pub fn vec3(&self, name: &str) -> Result<Vec3> {
        match self.node(name) {
            Some(Node {
                value: NodeValue::Vec3(v),
                ..
            }) => Ok(*v),
            Some(node) => Err(Error::TypeMismatch {
                expected: "Vec3",
                actual: node.value.type_name(),
            }),
            None => Err(Error::NodeNotFound(name.to_string())),
        }
    }

    /// Typed lookup of a float node.
    pub fn float(&self, name: &str) -> Result<f32> {
        match self.node(name) {
            Some(Node {
                value: NodeValue::Float(v),
                ..
            }) => Ok(*v),
            Some(node) => Err(Error::TypeMismatch {
                expected: "Float",
                actual: node.value.type_name(),
            }),
            None => Err(Error::NodeNotFound(name.to_string())),
        }
    }

    /// Set a Vec3 node value.
    pub fn set_vec3(&mut self, name: impl Into<String>, value: Vec3) {
        self.set_node(name, NodeValue::Vec3(value));
    }

    /// Iterate over nodes.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_lookup() {
        let mut mat = Material::new("vehicle_paint1");
        mat.set_vec3("matDiffuseColor", Vec3::new(2.0, 1.0, 1.0));
        mat.set_node("alpha", NodeValue::Float(0.5));

        assert_eq!(mat.vec3("matDiffuseColor").unwrap(), Vec3::new(2.0, 1.0, 1.0));
        assert!(matches!(
            mat.vec3("alpha"),
            Err(Error::TypeMismatch { expected: "Vec3", actual: "Float" })
        ));
        assert!(matches!(mat.vec3("missing"), Err(Error::NodeNotFound(_))));
    }

    #[test]
    fn test_set_node_replaces() {
        let mut mat = Material::new("m");
        mat.set_vec3("c", Vec3::ZERO);
        mat.set_vec3("c", Vec3::ONE);
        assert_eq!(mat.nodes().count(), 1);
        assert_eq!(mat.vec3("c").unwrap(), Vec3::ONE);
    }

    #[test]
    fn test_paint_layer_from_name() {
        assert_eq!(
            PaintLayer::from_material_name("vehicle_paint1 [PRIMARY]"),
            Some(PaintLayer::Primary)
        );
        assert_eq!(
            PaintLayer::from_material_name("vehicle_paint1 [INTERIOR TRIM]"),
            Some(PaintLayer::InteriorTrim)
        );
        assert_eq!(
            PaintLayer::from_material_name("vehicle_paint1 [DASHBOARD]"),
            Some(PaintLayer::InteriorDash)
        );
        assert_eq!(PaintLayer::from_material_name("plain_material"), None);
    }
}
