//! Schematic hexagon icons for candidate molecules.
//!
//! The drawing is decorative: a ring with three alternating double bonds and
//! one to three substituent stubs. Geometry is a pure function of the name
//! and the pixel size, so the same candidate always gets the same picture.

use aurora_common::hash::stable_hash;
use aurora_common::{AuroraError, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::f64::consts::FRAC_PI_3;
use svg::node::element::{Circle, Line};
use svg::Document;

const PRIMARY_SEED_MODULUS: u64 = 10_000_000;
const SECONDARY_SEED_MODULUS: u64 = 1_000_000;

const RING_RADIUS: f64 = 0.26;
const BACKGROUND_RADIUS: f64 = 0.44;
const SUBSTITUENT_LENGTH: f64 = 0.24;
const DOUBLE_BOND_OFFSET: f64 = 2.0;

const STROKE: &str = "#111827";
const DOUBLE_BOND_STROKE: &str = "#1F2937";
const SUBSTITUENT_STROKE: &str = "#243045";
const DOT_FILL: &str = "#0F172A";
const BACKGROUND_FILL: &str = "#27B3B111";

/// A straight line between two points, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Segment {
    fn length(&self) -> f64 {
        (self.x2 - self.x1).hypot(self.y2 - self.y1)
    }
}

/// A stub drawn outward from one ring vertex, ending in a dot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Substituent {
    pub vertex: usize,
    pub bond: Segment,
}

/// Resolved geometry of one icon, before serialization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IconGeometry {
    pub size: u32,
    pub center: (f64, f64),
    pub rotation: f64,
    pub vertices: [(f64, f64); 6],
    pub edges: Vec<Segment>,
    pub double_bonds: Vec<Segment>,
    pub substituents: Vec<Substituent>,
}

impl IconGeometry {
    /// Lay out the icon for `name` at `size` pixels.
    ///
    /// Two ChaCha streams are seeded from the same FNV-1a hash: the primary
    /// one drives rotation and substituent placement, the secondary one only
    /// the substituent count.
    pub fn build(name: &str, size: u32) -> Result<Self> {
        if size == 0 {
            return Err(AuroraError::invalid("icon size must be positive"));
        }

        let hash = stable_hash(name);
        let mut primary = ChaCha8Rng::seed_from_u64(hash % PRIMARY_SEED_MODULUS);
        let mut secondary = ChaCha8Rng::seed_from_u64(hash % SECONDARY_SEED_MODULUS);

        let px = f64::from(size);
        let (cx, cy) = (px / 2.0, px / 2.0);
        let r = px * RING_RADIUS;
        let rotation = primary.gen_range(0.0..FRAC_PI_3);

        let mut vertices = [(0.0, 0.0); 6];
        for (k, vertex) in vertices.iter_mut().enumerate() {
            let theta = rotation + k as f64 * FRAC_PI_3;
            *vertex = (cx + r * theta.cos(), cy + r * theta.sin());
        }

        let edges: Vec<Segment> = (0..6)
            .map(|i| {
                let (x1, y1) = vertices[i];
                let (x2, y2) = vertices[(i + 1) % 6];
                Segment { x1, y1, x2, y2 }
            })
            .collect();

        let double_bonds = edges
            .iter()
            .step_by(2)
            .map(|edge| {
                let len = nonzero(edge.length());
                let ox = -(edge.y2 - edge.y1) / len * DOUBLE_BOND_OFFSET;
                let oy = (edge.x2 - edge.x1) / len * DOUBLE_BOND_OFFSET;
                Segment {
                    x1: edge.x1 + ox,
                    y1: edge.y1 + oy,
                    x2: edge.x2 + ox,
                    y2: edge.y2 + oy,
                }
            })
            .collect();

        let n_sub: u32 = secondary.gen_range(1..=3);
        let substituents = (0..n_sub)
            .map(|_| {
                let vertex = primary.gen_range(0..6usize);
                let (x1, y1) = vertices[vertex];
                let (vx, vy) = (x1 - cx, y1 - cy);
                let len = nonzero(vx.hypot(vy));
                let reach = px * SUBSTITUENT_LENGTH;
                Substituent {
                    vertex,
                    bond: Segment {
                        x1,
                        y1,
                        x2: x1 + vx / len * reach,
                        y2: y1 + vy / len * reach,
                    },
                }
            })
            .collect();

        Ok(Self {
            size,
            center: (cx, cy),
            rotation,
            vertices,
            edges,
            double_bonds,
            substituents,
        })
    }

    /// Serialize to a standalone SVG document.
    pub fn render(&self) -> String {
        let size = self.size;
        let (cx, cy) = self.center;

        let mut doc = Document::new()
            .set("width", size)
            .set("height", size)
            .set("viewBox", (0, 0, size, size))
            .add(
                Circle::new()
                    .set("cx", format!("{cx:.1}"))
                    .set("cy", format!("{cy:.1}"))
                    .set("r", format!("{:.1}", f64::from(size) * BACKGROUND_RADIUS))
                    .set("fill", BACKGROUND_FILL),
            );

        for edge in &self.edges {
            doc = doc.add(line(edge, 1.8, STROKE));
        }
        for bond in &self.double_bonds {
            doc = doc.add(line(bond, 1.2, DOUBLE_BOND_STROKE));
        }
        for sub in &self.substituents {
            doc = doc.add(line(&sub.bond, 1.5, SUBSTITUENT_STROKE)).add(
                Circle::new()
                    .set("cx", format!("{:.2}", sub.bond.x2))
                    .set("cy", format!("{:.2}", sub.bond.y2))
                    .set("r", 1.8)
                    .set("fill", DOT_FILL),
            );
        }

        doc.to_string()
    }
}

fn nonzero(len: f64) -> f64 {
    if len == 0.0 { 1.0 } else { len }
}

fn line(seg: &Segment, width: f64, stroke: &str) -> Line {
    Line::new()
        .set("x1", format!("{:.2}", seg.x1))
        .set("y1", format!("{:.2}", seg.y1))
        .set("x2", format!("{:.2}", seg.x2))
        .set("y2", format!("{:.2}", seg.y2))
        .set("stroke", stroke)
        .set("stroke-width", width)
        .set("stroke-linecap", "round")
}

/// A rendered icon with its caption.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoleculeIcon {
    pub caption: String,
    pub svg: String,
}

/// Draw the icon for `name` at `size` pixels.
pub fn synthesize(name: &str, size: u32) -> Result<MoleculeIcon> {
    let geometry = IconGeometry::build(name, size)?;
    Ok(MoleculeIcon {
        caption: name.to_string(),
        svg: geometry.render(),
    })
}
