//! The grid/net/vertex graph and the simulated-annealing step/batch driver.
//!
//! Everything the engine does in its hot path goes through this one struct:
//! no I/O, no allocation beyond the vertex/net tables set up at
//! construction. See the module docs on [`crate::resource`], [`crate::cost`]
//! and [`crate::moves`] for the primitives `State` composes.

use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cost;
use crate::error::PlacementError;
use crate::graph::{Net, NetId, Vertex, VertexId};
use crate::moves;
use crate::resource;

/// Outcome and statistics of a single accepted/rejected `step` call.
pub type StepOutcome = (bool, f64);

/// Accumulated statistics of a `run_steps` batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchStats {
    pub num_accepted: usize,
    pub mean_delta: f64,
    pub stddev_delta: f64,
}

/// The placement engine's state: grid, vertex/net tables, and the PRNG used
/// to drive move generation and Metropolis acceptance.
pub struct State {
    width: usize,
    height: usize,
    num_resource_types: usize,
    wrap_around: bool,

    vertices: Vec<Vertex>,
    nets: Vec<Net>,
    vertex_capacity: usize,
    net_capacity: usize,
    num_movable_vertices: usize,

    chip_resources: Vec<i32>,
    chip_occupants: Vec<Option<VertexId>>,

    rng: StdRng,
}

impl State {
    /// Builds an empty `width` × `height` grid with `num_resource_types`
    /// resource dimensions per chip, all chips initialised dead (`-1` in
    /// every component, per the engine's lifecycle rules), and vertex/net
    /// tables sized to hold up to `num_vertices`/`num_nets` records.
    ///
    /// `seed` drives the state's own PRNG, making two states built with the
    /// same seed draw from independent, reproducible random streams.
    pub fn new(
        width: usize,
        height: usize,
        num_resource_types: usize,
        num_vertices: usize,
        num_nets: usize,
        seed: u64,
    ) -> Result<Self, PlacementError> {
        if width == 0 || height == 0 {
            return Err(PlacementError::DimensionMismatch(
                "grid width and height must both be non-zero".into(),
            ));
        }
        if num_resource_types == 0 {
            return Err(PlacementError::DimensionMismatch(
                "num_resource_types must be non-zero".into(),
            ));
        }

        let num_chips = width * height;
        let mut chip_resources = Vec::with_capacity(num_chips * num_resource_types);
        chip_resources.resize(num_chips * num_resource_types, -1);

        trace!(
            "State::new: {}x{} grid, {} resource types, {} vertex / {} net capacity",
            width, height, num_resource_types, num_vertices, num_nets
        );

        Ok(State {
            width,
            height,
            num_resource_types,
            wrap_around: false,
            vertices: Vec::with_capacity(num_vertices),
            nets: Vec::with_capacity(num_nets),
            vertex_capacity: num_vertices,
            net_capacity: num_nets,
            num_movable_vertices: 0,
            chip_resources,
            chip_occupants: vec![None; num_chips],
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Like [`State::new`] but seeds the PRNG from system entropy, for
    /// callers that don't need reproducibility.
    pub fn new_with_entropy(
        width: usize,
        height: usize,
        num_resource_types: usize,
        num_vertices: usize,
        num_nets: usize,
    ) -> Result<Self, PlacementError> {
        let seed = rand::thread_rng().gen();
        Self::new(width, height, num_resource_types, num_vertices, num_nets, seed)
    }

    // -- accessors ----------------------------------------------------

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn num_resource_types(&self) -> usize {
        self.num_resource_types
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_nets(&self) -> usize {
        self.nets.len()
    }

    pub fn num_movable_vertices(&self) -> usize {
        self.num_movable_vertices
    }

    /// Declares the first `m` positions of the vertex table movable. The
    /// caller is responsible for having created movable vertices before
    /// immovable ones (movability is purely positional).
    pub fn set_num_movable_vertices(&mut self, m: usize) {
        debug_assert!(m <= self.vertices.len());
        self.num_movable_vertices = m;
    }

    pub fn wrap_around(&self) -> bool {
        self.wrap_around
    }

    pub fn set_wrap_around(&mut self, wrap_around: bool) {
        self.wrap_around = wrap_around;
    }

    pub(crate) fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    // -- graph construction ---------------------------------------------

    /// Allocates a new vertex with a fixed-capacity net-membership list of
    /// `num_nets` and zeroed resource demand, returning its table index.
    pub fn new_vertex(&mut self, num_nets: usize) -> Result<VertexId, PlacementError> {
        if self.vertices.len() >= self.vertex_capacity {
            return Err(PlacementError::VertexTableFull(format!(
                "vertex table capacity {} exhausted",
                self.vertex_capacity
            )));
        }
        let id = VertexId(self.vertices.len() as u32);
        self.vertices.push(Vertex::new(self.num_resource_types, num_nets));
        Ok(id)
    }

    /// Allocates a new net with a fixed-capacity member list of
    /// `num_vertices` and weight `0.0`, returning its table index.
    pub fn new_net(&mut self, num_vertices: usize) -> Result<NetId, PlacementError> {
        if self.nets.len() >= self.net_capacity {
            return Err(PlacementError::NetTableFull(format!(
                "net table capacity {} exhausted",
                self.net_capacity
            )));
        }
        let id = NetId(self.nets.len() as u32);
        self.nets.push(Net::new(0.0, num_vertices));
        Ok(id)
    }

    /// Appends `vertex` to `net`'s membership and `net` to `vertex`'s net
    /// list. Errors if `net` has already received its declared number of
    /// members.
    pub fn add_vertex_to_net(&mut self, net: NetId, vertex: VertexId) -> Result<(), PlacementError> {
        let capacity = self.nets[net.0 as usize].declared_members;
        if self.nets[net.0 as usize].vertices.len() >= capacity {
            return Err(PlacementError::NetTableFull(format!(
                "net {} already has its declared {} members",
                net.0, capacity
            )));
        }
        self.nets[net.0 as usize].vertices.push(vertex);
        self.vertices[vertex.0 as usize].nets.push(net);
        Ok(())
    }

    pub fn set_net_weight(&mut self, net: NetId, weight: f64) {
        self.nets[net.0 as usize].weight = weight;
    }

    pub fn get_net_weight(&self, net: NetId) -> f64 {
        self.nets[net.0 as usize].weight
    }

    pub fn set_vertex_resources(&mut self, vertex: VertexId, r: usize, value: i32) {
        self.vertices[vertex.0 as usize].demand[r] = value;
    }

    pub fn get_vertex_resources(&self, vertex: VertexId, r: usize) -> i32 {
        self.vertices[vertex.0 as usize].demand[r]
    }

    pub fn set_chip_resources(&mut self, x: usize, y: usize, r: usize, value: i32) {
        let idx = self.chip_resource_index(x, y, r);
        self.chip_resources[idx] = value;
    }

    pub fn get_chip_resources(&self, x: usize, y: usize, r: usize) -> i32 {
        self.chip_resources[self.chip_resource_index(x, y, r)]
    }

    /// Attaches `v` to chip `(x, y)` unconditionally, updating resources and
    /// the occupant list without checking feasibility. Used only during
    /// initial placement; `movable` documents the caller's intent but does
    /// not itself affect `num_movable_vertices` (set that separately, before
    /// or after, since movability is purely positional).
    pub fn add_vertex_to_chip(&mut self, v: VertexId, x: usize, y: usize, movable: bool) {
        let _ = movable;
        self.attach_chain(Some(v), x, y);
    }

    // -- public query API -------------------------------------------------

    pub fn vertex_position(&self, v: VertexId) -> (usize, usize) {
        (self.vertices[v.0 as usize].x, self.vertices[v.0 as usize].y)
    }

    pub(crate) fn vertex_nets(&self, v: VertexId) -> &[NetId] {
        &self.vertices[v.0 as usize].nets
    }

    pub(crate) fn net_members(&self, n: NetId) -> &[VertexId] {
        &self.nets[n.0 as usize].vertices
    }

    pub(crate) fn net_weight(&self, n: NetId) -> f64 {
        self.nets[n.0 as usize].weight
    }

    pub fn get_net_cost(&self, net: NetId) -> f64 {
        cost::net_cost(self, net)
    }

    pub fn get_swap_cost(&self, a: VertexId, b: VertexId) -> f64 {
        cost::swap_cost(self, a, b)
    }

    pub fn get_distance_between(&self, a: VertexId, b: VertexId) -> usize {
        cost::grid_distance(self, self.vertex_position(a), self.vertex_position(b))
    }

    // -- chip/resource plumbing -------------------------------------------

    fn chip_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    fn chip_resource_index(&self, x: usize, y: usize, r: usize) -> usize {
        self.chip_index(x, y) * self.num_resource_types + r
    }

    fn chip_resource_slice(&self, x: usize, y: usize) -> &[i32] {
        let start = self.chip_index(x, y) * self.num_resource_types;
        &self.chip_resources[start..start + self.num_resource_types]
    }

    fn chip_resource_slice_mut(&mut self, x: usize, y: usize) -> &mut [i32] {
        let start = self.chip_index(x, y) * self.num_resource_types;
        &mut self.chip_resources[start..start + self.num_resource_types]
    }

    fn chip_is_live(&self, x: usize, y: usize) -> bool {
        resource::positive(self.chip_resource_slice(x, y))
    }

    // -- placement manipulation (§4.4) -------------------------------------

    /// Splices the chain headed at `head` onto the front of chip `(x, y)`'s
    /// occupant list and sets every member's coordinates, without touching
    /// resources. Internal helper shared by [`State::attach_chain`] and
    /// [`State::attach_chain_if_fits`].
    fn splice_chain_onto_chip(&mut self, head: VertexId, x: usize, y: usize) {
        let idx = self.chip_index(x, y);
        let old_head = self.chip_occupants[idx];

        let mut tail = head;
        self.vertices[tail.0 as usize].x = x;
        self.vertices[tail.0 as usize].y = y;
        while let Some(next) = self.vertices[tail.0 as usize].next {
            tail = next;
            self.vertices[tail.0 as usize].x = x;
            self.vertices[tail.0 as usize].y = y;
        }

        self.vertices[tail.0 as usize].next = old_head;
        self.chip_occupants[idx] = Some(head);
    }

    /// Walks the chain linked by `next`, subtracting each member's demand
    /// from chip `(x, y)`'s resources and splicing the whole chain onto the
    /// chip. Does not test feasibility.
    pub(crate) fn attach_chain(&mut self, head: Option<VertexId>, x: usize, y: usize) {
        let Some(h) = head else { return };

        let mut cur = Some(h);
        while let Some(v) = cur {
            let demand = self.vertices[v.0 as usize].demand.clone();
            resource::subtract(self.chip_resource_slice_mut(x, y), &demand);
            cur = self.vertices[v.0 as usize].next;
        }

        self.splice_chain_onto_chip(h, x, y);
    }

    /// Sums the demands of every vertex in the chain, subtracts the total
    /// from chip `(x, y)`, and attaches the chain only if the result is
    /// non-negative in every component; otherwise restores the chip and
    /// returns `false`. An empty chain always succeeds trivially. Dead
    /// chips always fail (their resources are `-1` in every component, so
    /// subtracting any non-negative demand leaves them negative).
    pub(crate) fn attach_chain_if_fits(&mut self, head: Option<VertexId>, x: usize, y: usize) -> bool {
        let Some(h) = head else { return true };

        let mut total = vec![0i32; self.num_resource_types];
        let mut cur = Some(h);
        while let Some(v) = cur {
            resource::add(&mut total, &self.vertices[v.0 as usize].demand.clone());
            cur = self.vertices[v.0 as usize].next;
        }

        resource::subtract(self.chip_resource_slice_mut(x, y), &total);
        if resource::positive(self.chip_resource_slice(x, y)) {
            self.splice_chain_onto_chip(h, x, y);
            true
        } else {
            resource::add(self.chip_resource_slice_mut(x, y), &total);
            false
        }
    }

    /// Unlinks `v` from its chip's occupant list (O(occupant-list length)),
    /// adds its demand back to the chip's resources, and clears its `next`
    /// link. Coordinates are left stale (not cleared) so a caller can still
    /// read a just-detached vertex's former position, which the `step` cost
    /// accounting relies on.
    pub(crate) fn detach(&mut self, v: VertexId) {
        let (x, y) = self.vertex_position(v);
        let idx = self.chip_index(x, y);

        if self.chip_occupants[idx] == Some(v) {
            self.chip_occupants[idx] = self.vertices[v.0 as usize].next;
        } else {
            let mut cur = self.chip_occupants[idx];
            while let Some(c) = cur {
                let next = self.vertices[c.0 as usize].next;
                if next == Some(v) {
                    self.vertices[c.0 as usize].next = self.vertices[v.0 as usize].next;
                    break;
                }
                cur = next;
            }
        }

        let demand = self.vertices[v.0 as usize].demand.clone();
        resource::add(self.chip_resource_slice_mut(x, y), &demand);
        self.vertices[v.0 as usize].next = None;
    }

    /// Ensures chip `(x, y)` has at least `demand` free resources, evicting
    /// occupants from the head of its list one at a time until the
    /// positivity test passes. Returns the evicted chain (possibly empty)
    /// on success. On failure the chip and all its occupants are restored
    /// exactly as before and `None` is returned — this all-or-nothing
    /// guarantee is the keystone of `step`'s roll-back logic.
    pub(crate) fn make_room(&mut self, x: usize, y: usize, demand: &[i32]) -> Option<Option<VertexId>> {
        resource::subtract(self.chip_resource_slice_mut(x, y), demand);
        if resource::positive(self.chip_resource_slice(x, y)) {
            return Some(None);
        }

        let idx = self.chip_index(x, y);
        let mut evicted = Vec::new();
        loop {
            let occupant = match self.chip_occupants[idx] {
                Some(v) => v,
                None => {
                    // Every occupant evicted and still not enough room: undo.
                    resource::add(self.chip_resource_slice_mut(x, y), demand);
                    let head = self.relink_chain(&evicted);
                    self.attach_chain(head, x, y);
                    return None;
                }
            };
            self.detach(occupant);
            evicted.push(occupant);
            if resource::positive(self.chip_resource_slice(x, y)) {
                break;
            }
        }

        Some(self.relink_chain(&evicted))
    }

    /// Collects the members of a chain (by walking `next`) into a `Vec`, in
    /// chain order.
    pub(crate) fn chain_members(&self, head: Option<VertexId>) -> Vec<VertexId> {
        let mut members = Vec::new();
        let mut cur = head;
        while let Some(v) = cur {
            members.push(v);
            cur = self.vertices[v.0 as usize].next;
        }
        members
    }

    /// Re-links `members` into a chain in the given order (`members[i].next
    /// = members[i + 1]`, last is `None`) and returns its head.
    pub(crate) fn relink_chain(&mut self, members: &[VertexId]) -> Option<VertexId> {
        for pair in members.windows(2) {
            self.vertices[pair[0].0 as usize].next = Some(pair[1]);
        }
        if let Some(&last) = members.last() {
            self.vertices[last.0 as usize].next = None;
        }
        members.first().copied()
    }

    fn affected_nets(&self, a: VertexId, b_members: &[VertexId]) -> Vec<NetId> {
        let mut nets: Vec<NetId> = self.vertices[a.0 as usize].nets.clone();
        for &v in b_members {
            for &n in &self.vertices[v.0 as usize].nets {
                if !nets.contains(&n) {
                    nets.push(n);
                }
            }
        }
        nets
    }

    fn sum_net_costs(&self, nets: &[NetId]) -> f64 {
        nets.iter().map(|&n| self.get_net_cost(n)).sum()
    }

    // -- acceptance (§4.7, §9) ---------------------------------------------

    fn accept(&mut self, delta: f64, temperature: f64) -> bool {
        if delta <= 0.0 {
            return true;
        }
        if temperature == 0.0 {
            return false;
        }
        if temperature.is_infinite() {
            return true;
        }
        let probability = (-delta / temperature).exp();
        self.rng.gen::<f64>() < probability
    }

    // -- the single SA step (§4.7) ------------------------------------------

    /// Attempts one simulated-annealing swap: picks a movable vertex `A`, a
    /// nearby chip, evicts whatever chain of occupants `make_room` needs to
    /// evict to fit `A` there, tries to place the evicted chain back on
    /// `A`'s old chip, and accepts or rolls back the whole exchange via
    /// Metropolis acceptance. Returns `(accepted, cost_delta)`; `cost_delta`
    /// is `0.0` whenever `accepted` is `false`.
    pub fn step(&mut self, distance_limit: usize, temperature: f64) -> StepOutcome {
        if self.num_movable_vertices == 0 {
            debug_assert!(false, "step called with no movable vertices");
            return (false, 0.0);
        }

        let a = moves::random_movable_vertex(self);
        let (xa, ya) = self.vertex_position(a);

        if !self.chip_is_live(xa, ya) {
            trace!("step: vertex on a dead chip, skipping");
            return (false, 0.0);
        }

        let (xb, yb) = moves::random_nearby_chip(self, xa, ya, distance_limit);

        self.detach(a);
        let demand = self.vertices[a.0 as usize].demand.clone();

        let b_members = match self.make_room(xb, yb, &demand) {
            Some(head) => self.chain_members(head),
            None => {
                self.attach_chain(Some(a), xa, ya);
                return (false, 0.0);
            }
        };

        let affected = self.affected_nets(a, &b_members);
        let old_cost = self.sum_net_costs(&affected);

        let head = self.relink_chain(&b_members);
        if !self.attach_chain_if_fits(head, xa, ya) {
            let head = self.relink_chain(&b_members);
            self.attach_chain(head, xb, yb);
            self.attach_chain(Some(a), xa, ya);
            return (false, 0.0);
        }
        self.attach_chain(Some(a), xb, yb);

        let new_cost = self.sum_net_costs(&affected);
        let delta = new_cost - old_cost;

        if self.accept(delta, temperature) {
            debug!("step: accepted, cost_delta={:.6}", delta);
            (true, delta)
        } else {
            self.detach(a);
            for &v in &b_members {
                self.detach(v);
            }
            let head = self.relink_chain(&b_members);
            self.attach_chain(head, xb, yb);
            self.attach_chain(Some(a), xa, ya);
            (false, 0.0)
        }
    }

    /// Performs `n` steps, accumulating the count of accepted swaps and the
    /// running mean/population standard deviation of `cost_delta` over
    /// accepted steps only, via Welford's online algorithm.
    pub fn run_steps(&mut self, n: usize, distance_limit: usize, temperature: f64) -> BatchStats {
        let mut num_accepted = 0usize;
        let mut mean = 0.0f64;
        let mut m2 = 0.0f64;

        for _ in 0..n {
            let (accepted, delta) = self.step(distance_limit, temperature);
            if accepted {
                num_accepted += 1;
                let delta_from_old_mean = delta - mean;
                mean += delta_from_old_mean / num_accepted as f64;
                let delta_from_new_mean = delta - mean;
                m2 += delta_from_old_mean * delta_from_new_mean;
            }
        }

        let stddev_delta = if num_accepted > 0 {
            (m2 / num_accepted as f64).sqrt()
        } else {
            0.0
        };

        let stats = BatchStats {
            num_accepted,
            mean_delta: mean,
            stddev_delta,
        };
        info!(
            "run_steps: {}/{} accepted, mean_delta={:.6}, stddev_delta={:.6}",
            stats.num_accepted, n, stats.mean_delta, stats.stddev_delta
        );
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_initialises_dead_chips_and_empty_tables() {
        let w = 2;
        let h = 3;
        let state = State::new(w, h, 2, 4, 4, 1).unwrap();
        for x in 0..w {
            for y in 0..h {
                for r in 0..2 {
                    assert_eq!(state.get_chip_resources(x, y, r), -1);
                }
                assert!(state.chip_occupants[state.chip_index(x, y)].is_none());
            }
        }
        assert_eq!(state.num_vertices(), 0);
        assert_eq!(state.num_nets(), 0);
    }

    #[test]
    fn attaching_movable_vertices_tracks_occupants_and_net_membership() {
        // Mirrors the constructor scenario: a 2x3 problem, 4 vertices, 4
        // nets, 2 resource types, all but the last vertex movable.
        let w = 2;
        let h = 3;
        let nv = 4;
        let nn = 4;
        let nr = 2;
        let nm = nv - 1;

        let mut s = State::new(w, h, nr, nv, nn, 99).unwrap();
        s.set_num_movable_vertices(nm);

        let mut vertices = Vec::new();
        for i in 0..nv {
            let v = s.new_vertex(i + 1).unwrap();
            for j in 0..nr {
                s.set_vertex_resources(v, j, j as i32);
            }
            let movable = i != nv - 1;
            s.add_vertex_to_chip(v, 0, 1, movable);
            assert_eq!(s.vertex_position(v), (0, 1));
            vertices.push(v);
        }

        let chip_members = s.chain_members(s.chip_occupants[s.chip_index(0, 1)]);
        assert_eq!(chip_members.len(), nv);
        for &v in &vertices {
            assert!(chip_members.contains(&v));
        }

        let mut nets = Vec::new();
        for i in 0..nn {
            let n = s.new_net(nv - i).unwrap();
            s.set_net_weight(n, (i + 1) as f64);
            for j in i..nv {
                s.add_vertex_to_net(n, vertices[j]).unwrap();
            }
            assert_eq!(s.net_members(n).len(), nv - i);
            nets.push(n);
        }

        for (i, &v) in vertices.iter().enumerate() {
            assert_eq!(s.vertex_nets(v).len(), i + 1);
        }
    }

    #[test]
    fn s4_no_room_step_never_accepts_and_never_mutates() {
        // 2x1 grid, one movable vertex with demand [1], both chips have
        // capacity [0]: there is never room to swap anywhere.
        let mut s = State::new(2, 1, 1, 1, 0, 3).unwrap();
        s.set_chip_resources(0, 0, 0, 0);
        s.set_chip_resources(1, 0, 0, 0);
        let v = s.new_vertex(0).unwrap();
        s.set_vertex_resources(v, 0, 1);
        s.set_num_movable_vertices(1);
        s.add_vertex_to_chip(v, 0, 0, true);

        for _ in 0..10 {
            let (accepted, delta) = s.step(1, 1.0);
            assert!(!accepted);
            assert_eq!(delta, 0.0);
            assert_eq!(s.vertex_position(v), (0, 0));
            assert_eq!(s.get_chip_resources(0, 0, 0), 0);
            assert_eq!(s.get_chip_resources(1, 0, 0), 0);
        }
    }

    #[test]
    fn make_room_restores_chip_exactly_on_failure() {
        let mut s = State::new(1, 1, 1, 3, 0, 11).unwrap();
        s.set_chip_resources(0, 0, 0, 2);
        let v0 = s.new_vertex(0).unwrap();
        let v1 = s.new_vertex(0).unwrap();
        s.set_vertex_resources(v0, 0, 1);
        s.set_vertex_resources(v1, 0, 1);
        s.add_vertex_to_chip(v0, 0, 0, true);
        s.add_vertex_to_chip(v1, 0, 0, true);

        let before_head = s.chip_occupants[s.chip_index(0, 0)];
        let before_resources = s.get_chip_resources(0, 0, 0);

        // Demanding more than the total capacity can ever supply must fail
        // and leave everything exactly as it was.
        let result = s.make_room(0, 0, &[10]);
        assert!(result.is_none());
        assert_eq!(s.chip_occupants[s.chip_index(0, 0)], before_head);
        assert_eq!(s.get_chip_resources(0, 0, 0), before_resources);
    }

    #[test]
    fn s5_cold_run_converges_adjacent_with_negative_mean_delta() {
        // 4x4 mesh, each chip capacity [1], two unit-weight-connected
        // movable vertices starting at opposite corners.
        let mut s = State::new(4, 4, 1, 2, 1, 1234).unwrap();
        for x in 0..4 {
            for y in 0..4 {
                s.set_chip_resources(x, y, 0, 1);
            }
        }
        let a = s.new_vertex(1).unwrap();
        let b = s.new_vertex(1).unwrap();
        s.set_vertex_resources(a, 0, 1);
        s.set_vertex_resources(b, 0, 1);
        s.set_num_movable_vertices(2);
        s.add_vertex_to_chip(a, 0, 0, true);
        s.add_vertex_to_chip(b, 3, 3, true);

        let n = s.new_net(2).unwrap();
        s.set_net_weight(n, 1.0);
        s.add_vertex_to_net(n, a).unwrap();
        s.add_vertex_to_net(n, b).unwrap();

        s.run_steps(1000, 4, f64::INFINITY);
        let cold = s.run_steps(1000, 4, 0.0);

        assert_eq!(s.get_net_cost(n), 1.0);
        assert!(cold.mean_delta < 0.0 || cold.num_accepted == 0);
    }
}
