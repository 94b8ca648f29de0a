//! Per-net bounding-box cost, the swap-cost estimator, and grid distance.
//!
//! Total placement cost is never maintained globally; `step` only ever
//! needs the *delta* incurred by the nets touched by one swap, which is why
//! every function here takes an explicit list of nets or vertices to
//! restrict its work to rather than walking the whole net table.

use crate::graph::{NetId, VertexId};
use crate::state::State;

/// Half-perimeter bounding-box span of `coords` along one axis of length
/// `extent`.
///
/// Mesh: `max - min`. Torus: the axis is cyclic, so the span is `extent`
/// minus the largest gap between consecutive (sorted, deduplicated) points,
/// where the wrap-around gap closing the cycle is included as a candidate
/// gap. A single distinct coordinate has span zero on both topologies.
fn axis_span(coords: &[usize], extent: usize, wrap_around: bool) -> f64 {
    if !wrap_around {
        let min = *coords.iter().min().expect("non-empty coordinate list");
        let max = *coords.iter().max().expect("non-empty coordinate list");
        return (max - min) as f64;
    }

    let mut sorted: Vec<usize> = coords.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    if sorted.len() == 1 {
        return 0.0;
    }

    let mut largest_gap = extent - (sorted[sorted.len() - 1] - sorted[0]);
    for pair in sorted.windows(2) {
        let gap = pair[1] - pair[0];
        if gap > largest_gap {
            largest_gap = gap;
        }
    }
    (extent - largest_gap) as f64
}

/// Looks up the position of `v`, unless an override for `v` is present in
/// `overrides` — used by [`swap_cost`] to evaluate a hypothetical swap
/// without mutating the real vertex coordinates.
fn position_with_overrides(
    state: &State,
    v: VertexId,
    overrides: &[(VertexId, (usize, usize))],
) -> (usize, usize) {
    for &(ov, pos) in overrides {
        if ov == v {
            return pos;
        }
    }
    state.vertex_position(v)
}

fn net_span_with_overrides(
    state: &State,
    members: &[VertexId],
    overrides: &[(VertexId, (usize, usize))],
) -> (f64, f64) {
    let xs: Vec<usize> = members
        .iter()
        .map(|&v| position_with_overrides(state, v, overrides).0)
        .collect();
    let ys: Vec<usize> = members
        .iter()
        .map(|&v| position_with_overrides(state, v, overrides).1)
        .collect();
    (
        axis_span(&xs, state.width(), state.wrap_around()),
        axis_span(&ys, state.height(), state.wrap_around()),
    )
}

/// `weight × (x_span + y_span)` under the state's currently configured
/// topology. Zero for single-vertex nets.
pub fn net_cost(state: &State, net: NetId) -> f64 {
    let members = state.net_members(net);
    if members.len() <= 1 {
        return 0.0;
    }
    let weight = state.net_weight(net);
    let (dx, dy) = net_span_with_overrides(state, members, &[]);
    weight * (dx + dy)
}

/// Change in total weighted bounding-box cost that would result from
/// swapping the coordinates of `a` and `b`, summing over nets incident on
/// either vertex (a net shared by both is counted once).
///
/// Reads `a` and `b`'s current coordinates off the vertex table and
/// evaluates the hypothetical swap without mutating state.
pub fn swap_cost(state: &State, a: VertexId, b: VertexId) -> f64 {
    let pos_a = state.vertex_position(a);
    let pos_b = state.vertex_position(b);
    let overrides = [(a, pos_b), (b, pos_a)];

    let mut nets: Vec<NetId> = state.vertex_nets(a).to_vec();
    for &n in state.vertex_nets(b) {
        if !nets.contains(&n) {
            nets.push(n);
        }
    }

    let mut delta = 0.0;
    for net in nets {
        let members = state.net_members(net);
        if members.len() <= 1 {
            continue;
        }
        let weight = state.net_weight(net);
        let (old_dx, old_dy) = net_span_with_overrides(state, members, &[]);
        let (new_dx, new_dy) = net_span_with_overrides(state, members, &overrides);
        delta += weight * ((new_dx + new_dy) - (old_dx + old_dy));
    }
    delta
}

/// Chebyshev (L∞) distance between two chip coordinates, wrapped if the
/// state has wrap-around links enabled.
pub fn grid_distance(
    state: &State,
    (xa, ya): (usize, usize),
    (xb, yb): (usize, usize),
) -> usize {
    let dx = axis_distance(xa, xb, state.width(), state.wrap_around());
    let dy = axis_distance(ya, yb, state.height(), state.wrap_around());
    dx.max(dy)
}

fn axis_distance(a: usize, b: usize, extent: usize, wrap_around: bool) -> usize {
    let diff = a.abs_diff(b);
    if wrap_around {
        diff.min(extent - diff)
    } else {
        diff
    }
}

#[cfg(test)]
mod tests {
    use crate::state::State;

    fn net_of(
        state: &mut State,
        weight: f64,
        vertices: &[(usize, usize)],
    ) -> crate::graph::NetId {
        let n = state.new_net(vertices.len()).unwrap();
        state.set_net_weight(n, weight);
        for &(x, y) in vertices {
            let v = state.new_vertex(1).unwrap();
            state.set_num_movable_vertices(state.num_vertices());
            state.add_vertex_to_chip(v, x, y, true);
            state.add_vertex_to_net(n, v).unwrap();
        }
        n
    }

    #[test]
    fn s1_distance_torus_and_mesh() {
        let mut state = State::new(4, 5, 1, 2, 0, 1).unwrap();
        let a = state.new_vertex(0).unwrap();
        let b = state.new_vertex(0).unwrap();
        state.set_num_movable_vertices(2);
        state.add_vertex_to_chip(a, 0, 0, true);
        state.add_vertex_to_chip(b, 3, 4, true);

        state.set_wrap_around(true);
        assert_eq!(state.get_distance_between(a, b), 1);

        state.set_wrap_around(false);
        assert_eq!(state.get_distance_between(a, b), 4);
    }

    #[test]
    fn s2_net_cost_mesh() {
        let mut state = State::new(20, 10, 1, 4, 1, 1).unwrap();
        let net = net_of(&mut state, 2.0, &[(2, 0), (15, 7), (3, 1), (19, 8)]);
        state.set_wrap_around(false);
        assert_eq!(state.get_net_cost(net), (17.0 + 8.0) * 2.0);
    }

    #[test]
    fn s2_prime_net_cost_torus() {
        let mut state = State::new(20, 10, 1, 4, 1, 1).unwrap();
        let net = net_of(&mut state, 2.0, &[(2, 0), (15, 7), (3, 1), (19, 8)]);
        state.set_wrap_around(true);
        assert_eq!(state.get_net_cost(net), (8.0 + 4.0) * 2.0);
    }

    #[test]
    fn s3_swap_cost() {
        let mut state = State::new(2, 2, 1, 4, 4, 1).unwrap();
        let a = state.new_vertex(2).unwrap();
        let b = state.new_vertex(2).unwrap();
        let c = state.new_vertex(2).unwrap();
        let d = state.new_vertex(2).unwrap();
        state.set_num_movable_vertices(4);
        state.add_vertex_to_chip(a, 0, 0, true);
        state.add_vertex_to_chip(b, 1, 0, true);
        state.add_vertex_to_chip(c, 0, 1, true);
        state.add_vertex_to_chip(d, 1, 1, true);

        let w = state.new_net(2).unwrap();
        state.set_net_weight(w, 1.0);
        let x = state.new_net(2).unwrap();
        state.set_net_weight(x, 1.0);
        let y = state.new_net(2).unwrap();
        state.set_net_weight(y, 1.0);
        let z = state.new_net(2).unwrap();
        state.set_net_weight(z, 1.0);
        state.add_vertex_to_net(w, a).unwrap();
        state.add_vertex_to_net(w, b).unwrap();
        state.add_vertex_to_net(x, a).unwrap();
        state.add_vertex_to_net(x, d).unwrap();
        state.add_vertex_to_net(y, b).unwrap();
        state.add_vertex_to_net(y, c).unwrap();
        state.add_vertex_to_net(z, c).unwrap();
        state.add_vertex_to_net(z, d).unwrap();

        assert_eq!(state.get_swap_cost(a, b), -2.0);
    }
}
