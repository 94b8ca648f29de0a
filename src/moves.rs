//! Random move generation: picking a movable vertex and a nearby target
//! chip. Both draw from the `State`'s own seeded PRNG so that a whole
//! annealing run is reproducible given the state's construction seed.

use rand::Rng;

use crate::graph::VertexId;
use crate::state::State;

/// Uniformly draws one of the first `num_movable_vertices` positions of the
/// vertex table.
///
/// Undefined when there are no movable vertices; the caller must not invoke
/// this on a state with zero movable vertices.
pub(crate) fn random_movable_vertex(state: &mut State) -> VertexId {
    let m = state.num_movable_vertices();
    debug_assert!(m > 0, "random_movable_vertex called with no movable vertices");
    let i = state.rng_mut().gen_range(0..m);
    VertexId(i as u32)
}

/// Draws a chip distinct from `(ox, oy)`, uniformly from the set of chips
/// within Chebyshev distance `distance_limit`, intersected with (mesh) or
/// wrapped into (torus) the grid. Uses rejection sampling.
pub(crate) fn random_nearby_chip(
    state: &mut State,
    ox: usize,
    oy: usize,
    distance_limit: usize,
) -> (usize, usize) {
    let d = distance_limit as i64;
    let width = state.width() as i64;
    let height = state.height() as i64;
    let wrap_around = state.wrap_around();

    loop {
        let dx = state.rng_mut().gen_range(-d..=d);
        let dy = state.rng_mut().gen_range(-d..=d);
        if dx == 0 && dy == 0 {
            continue;
        }

        let candidate = if wrap_around {
            Some((
                wrap(ox as i64 + dx, width),
                wrap(oy as i64 + dy, height),
            ))
        } else {
            let nx = ox as i64 + dx;
            let ny = oy as i64 + dy;
            if nx < 0 || nx >= width || ny < 0 || ny >= height {
                None
            } else {
                Some((nx as usize, ny as usize))
            }
        };

        if let Some((x, y)) = candidate {
            if (x, y) != (ox, oy) {
                return (x, y);
            }
        }
    }
}

fn wrap(v: i64, extent: i64) -> usize {
    (((v % extent) + extent) % extent) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::State;

    #[test]
    fn random_movable_vertex_stays_in_movable_prefix() {
        let mut state = State::new(4, 4, 1, 4, 0, 7).unwrap();
        for _ in 0..4 {
            state.new_vertex(0).unwrap();
        }
        state.set_num_movable_vertices(2);
        for _ in 0..50 {
            let v = random_movable_vertex(&mut state);
            assert!(v.0 < 2);
        }
    }

    #[test]
    fn random_nearby_chip_never_returns_origin_mesh() {
        let mut state = State::new(5, 5, 1, 0, 0, 42).unwrap();
        for _ in 0..200 {
            let (x, y) = random_nearby_chip(&mut state, 2, 2, 1);
            assert!(x <= 4 && y <= 4);
            assert!((x, y) != (2, 2));
            assert!((x as i64 - 2).abs() <= 1 && (y as i64 - 2).abs() <= 1);
        }
    }

    #[test]
    fn random_nearby_chip_covers_whole_torus() {
        let mut state = State::new(3, 3, 1, 0, 0, 5).unwrap();
        state.set_wrap_around(true);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(random_nearby_chip(&mut state, 0, 0, 2));
        }
        // every chip except the origin should be reachable within a couple
        // hundred draws over a 3x3 torus
        assert_eq!(seen.len(), 8);
    }
}
