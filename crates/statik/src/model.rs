//! Structural-analysis records.
//!
//! These describe a framework of beams for later static calculation. They hold
//! data only: no stiffness assembly, no solving, no validation of units.
//! Materials and sections are shared between beams through `Arc`.

use std::sync::Arc;

use crate::point::Point;
use crate::value::Value;

/// A named model of nodes and beams.
#[derive(Clone, Debug, Default)]
pub struct StaticSystem {
    name: String,
    beams: Vec<Beam>,
    nodes: Vec<Node>,
}

impl StaticSystem {
    /// Empty system.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            beams: Vec::new(),
            nodes: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn beams(&self) -> &[Beam] {
        &self.beams
    }

    pub fn add_node(&mut self, node: Node) {
        self.nodes.push(node);
    }

    pub fn add_beam(&mut self, beam: Beam) {
        self.beams.push(beam);
    }
}

/// A point of the system that beams and supports refer to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Node {
    pub position: Point,
}

/// A member between two points, loadable with force.
#[derive(Clone, Debug)]
pub struct Beam {
    pub start: Point,
    pub end: Point,
    pub material: Arc<Material>,
    pub section: Arc<Section>,
}

/// Physical material a beam is made of.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Material {
    pub name: String,
    pub group: String,
    pub elastic_modulus: Value,
    pub strength: Value,
}

/// Geometric definition of a beam cross-section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    pub area: Value,
    pub iy: Value,
    pub iz: Value,
    pub h: Value,
    pub b: Value,
    pub ys: Value,
    pub zs: Value,
}
