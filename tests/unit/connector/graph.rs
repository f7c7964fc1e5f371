use std::collections::HashSet;

use rand::{SeedableRng, rngs::StdRng};

use super::*;
use crate::glyph::entity::GlyphMotion;

const NAMES: [&str; 9] = ["T", "O1", "K", "Y", "O2", "N", "O3", "D", "E"];

fn glyphs(n: usize) -> Vec<Glyph> {
    (0..n)
        .map(|g| {
            let points: Vec<Point> = (0..40)
                .map(|i| Point::new(g as f64 * 10.0 + i as f64 * 0.1, i as f64 * 0.05))
                .collect();
            Glyph::from_points(
                NAMES[g],
                &points,
                GlyphMotion {
                    speed: 7.0 + g as f64,
                    span: 5.0,
                    phase_offset: g as f64 * 3.0,
                },
            )
        })
        .collect()
}

#[test]
fn slots_are_offered_four_per_glyph_in_roster_order() {
    let slots = offered_slots(2);
    let labels: Vec<String> = slots.iter().map(|s| s.label(&["A", "B"])).collect();
    assert_eq!(
        labels,
        [
            "A_e1_1", "A_e1_2", "A_e2_1", "A_e2_2", "B_e1_1", "B_e1_2", "B_e2_1", "B_e2_2"
        ]
    );
}

#[test]
fn pairing_respects_capacity_and_name_exclusion() {
    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let pairs = pair_slots(&NAMES, DEFAULT_MAX_CONNECTORS, &mut rng);
        assert!(pairs.len() <= DEFAULT_MAX_CONNECTORS);
        let mut used = HashSet::new();
        for c in &pairs {
            assert_ne!(NAMES[c.source.glyph], NAMES[c.target.glyph]);
            assert!(used.insert(c.source), "slot reused: {:?}", c.source);
            assert!(used.insert(c.target), "slot reused: {:?}", c.target);
        }
    }
}

#[test]
fn nine_glyphs_always_fill_capacity() {
    // 36 slots across 9 names cannot run out of cross-glyph candidates before 12 pairs.
    for seed in 0..100 {
        let mut rng = StdRng::seed_from_u64(seed);
        assert_eq!(pair_slots(&NAMES, 12, &mut rng).len(), 12);
    }
}

#[test]
fn pairing_is_reproducible_for_a_seed() {
    let a = pair_slots(&NAMES, 12, &mut StdRng::seed_from_u64(7));
    let b = pair_slots(&NAMES, 12, &mut StdRng::seed_from_u64(7));
    assert_eq!(a, b);
}

#[test]
fn single_glyph_produces_no_connectors() {
    let mut rng = StdRng::seed_from_u64(1);
    assert!(pair_slots(&["T"], 12, &mut rng).is_empty());
}

#[test]
fn equal_names_are_never_paired() {
    let mut rng = StdRng::seed_from_u64(3);
    assert!(pair_slots(&["O", "O"], 12, &mut rng).is_empty());
}

#[test]
fn two_glyphs_exhaust_slots_before_capacity() {
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let pairs = pair_slots(&["A", "B"], 12, &mut rng);
        assert!(pairs.len() <= 4);
    }
}

#[test]
fn zero_capacity_makes_no_draws() {
    let mut rng = StdRng::seed_from_u64(5);
    assert!(pair_slots(&NAMES, 0, &mut rng).is_empty());
}

#[test]
fn build_records_targets_and_sizes_buffer() {
    let mut gs = glyphs(9);
    let graph = ConnectorGraph::build(&mut gs, 12, &mut StdRng::seed_from_u64(11));
    assert_eq!(graph.vertices().len(), graph.len() * 2);

    let recorded: usize = gs
        .iter()
        .map(|g| g.targets(Edge::Start).len() + g.targets(Edge::End).len())
        .sum();
    assert_eq!(recorded, graph.len());

    let keys: Vec<_> = graph
        .connectors()
        .iter()
        .map(|c| (c.source.glyph, c.source.edge))
        .collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
}

#[test]
fn sync_reads_current_anchors_plus_translation() {
    let mut gs = glyphs(9);
    let mut graph = ConnectorGraph::build(&mut gs, 12, &mut StdRng::seed_from_u64(99));
    let translation = Vec2::new(-5.3, 0.25);

    for _ in 0..3 {
        for g in gs.iter_mut() {
            g.update(1.0 / 30.0);
        }
        graph.sync(&gs, translation);
        assert!(graph.is_dirty());

        let mut segments = graph.segments();
        for g in &gs {
            for edge in Edge::BOTH {
                for target in g.targets(edge) {
                    let (a, b) = segments.next().unwrap();
                    assert_eq!(a, g.edge(edge).unwrap() + translation);
                    assert_eq!(b, gs[target.glyph].edge(target.edge).unwrap() + translation);
                }
            }
        }
        assert!(segments.next().is_none());
        drop(segments);
        graph.mark_clean();
        assert!(!graph.is_dirty());
    }
}
