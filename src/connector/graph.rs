use rand::Rng;

use crate::{
    foundation::core::{Point, Vec2},
    glyph::entity::{Edge, Glyph},
};

/// Draws offered per edge during pairing.
pub const DRAWS_PER_EDGE: u8 = 2;

/// Default upper bound on realized connectors.
pub const DEFAULT_MAX_CONNECTORS: usize = 12;

/// A logical endpoint offered for pairing: one draw of one edge of one glyph.
///
/// `glyph` indexes the roster the slot was built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct SlotId {
    pub glyph: usize,
    pub edge: Edge,
    pub draw: u8,
}

impl SlotId {
    /// Human-readable label such as `O1_e2_1`.
    pub fn label(&self, names: &[&str]) -> String {
        let name = names.get(self.glyph).copied().unwrap_or("?");
        format!("{name}_{}_{}", self.edge.tag(), self.draw)
    }
}

/// A realized pairing. Only the source's edge matters when drawing; the source draw number is
/// kept for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Connector {
    pub source: SlotId,
    pub target: SlotId,
}

/// Every slot for a roster of `glyph_count` glyphs, in roster order:
/// `e1_1, e1_2, e2_1, e2_2` per glyph.
pub fn offered_slots(glyph_count: usize) -> Vec<SlotId> {
    let mut slots = Vec::with_capacity(glyph_count * 2 * usize::from(DRAWS_PER_EDGE));
    for glyph in 0..glyph_count {
        for edge in Edge::BOTH {
            for draw in 1..=DRAWS_PER_EDGE {
                slots.push(SlotId { glyph, edge, draw });
            }
        }
    }
    slots
}

/// Randomly pair slots of differently named glyphs, producing at most `capacity` connectors.
///
/// Each round draws a source uniformly from the remaining slots and removes it. If any
/// remaining slot belongs to a glyph with a different name, one of those is drawn uniformly as
/// the target and removed too. A source with no candidate is simply dropped.
///
/// Exclusion is by glyph name only. Both draws of one edge may end up connected, and the same
/// two glyphs may be connected more than once.
pub fn pair_slots<R: Rng + ?Sized>(
    names: &[&str],
    capacity: usize,
    rng: &mut R,
) -> Vec<Connector> {
    let mut remaining = offered_slots(names.len());
    let mut out = Vec::new();

    while !remaining.is_empty() && out.len() < capacity {
        let source = remaining.remove(rng.random_range(0..remaining.len()));
        let source_name = names[source.glyph];
        let candidates: Vec<SlotId> = remaining
            .iter()
            .copied()
            .filter(|s| names[s.glyph] != source_name)
            .collect();
        if candidates.is_empty() {
            continue;
        }

        let target = candidates[rng.random_range(0..candidates.len())];
        remaining.retain(|s| *s != target);
        out.push(Connector { source, target });
    }
    out
}

/// The fixed connector set plus its per-frame vertex buffer.
///
/// Connectors are stored in draw order: roster order of the source glyph, then its start edge
/// before its end edge, then the order targets were recorded.
#[derive(Clone, Debug, Default)]
pub struct ConnectorGraph {
    connectors: Vec<Connector>,
    vertices: Vec<Point>,
    dirty: bool,
}

impl ConnectorGraph {
    /// Pair slots across `glyphs` and record each target on its source glyph's edge.
    pub fn build<R: Rng + ?Sized>(glyphs: &mut [Glyph], capacity: usize, rng: &mut R) -> Self {
        let names: Vec<&str> = glyphs.iter().map(Glyph::name).collect();
        let pairs = pair_slots(&names, capacity, rng);
        for c in &pairs {
            tracing::debug!(
                source = %c.source.label(&names),
                target = %c.target.label(&names),
                "connector"
            );
        }
        for c in &pairs {
            glyphs[c.source.glyph].push_target(c.source.edge, c.target);
        }

        // Stable sort keeps recording order within one edge, matching `Glyph::targets`.
        let mut connectors = pairs;
        connectors.sort_by_key(|c| (c.source.glyph, c.source.edge));

        Self {
            vertices: vec![Point::ORIGIN; connectors.len() * 2],
            connectors,
            dirty: true,
        }
    }

    pub fn len(&self) -> usize {
        self.connectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connectors.is_empty()
    }

    pub fn connectors(&self) -> &[Connector] {
        &self.connectors
    }

    /// Flat vertex pairs `[a0, b0, a1, b1, ...]`, exactly two per connector.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.vertices.chunks_exact(2).map(|pair| (pair[0], pair[1]))
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag after the buffer has been consumed.
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Rewrite every vertex pair from the glyphs' current anchors, offset by `translation`.
    ///
    /// Must run after all glyphs have been updated for the frame. Anchors of glyphs without
    /// points resolve to the composition origin.
    pub fn sync(&mut self, glyphs: &[Glyph], translation: Vec2) {
        let mut k = 0;
        for glyph in glyphs {
            for edge in Edge::BOTH {
                let from = glyph.edge(edge).unwrap_or(Point::ORIGIN);
                for target in glyph.targets(edge) {
                    let to = glyphs
                        .get(target.glyph)
                        .and_then(|t| t.edge(target.edge))
                        .unwrap_or(Point::ORIGIN);
                    if let Some(pair) = self.vertices.get_mut(k..k + 2) {
                        pair[0] = from + translation;
                        pair[1] = to + translation;
                    }
                    k += 2;
                }
            }
        }
        self.dirty = true;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/connector/graph.rs"]
mod tests;
