//! The vertex/net graph: fixed-size tables of records addressed by index,
//! per the engine's re-architecture guidance (back-references become
//! indices into the `State`'s own tables; no entity owns another entity).

/// Index of a vertex in the `State`'s vertex table.
///
/// Movability is positional: a vertex is movable iff its index is less than
/// `State::num_movable_vertices()`. Callers arrange this by creating all
/// movable vertices before any immovable ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexId(pub(crate) u32);

/// Index of a net in the `State`'s net table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NetId(pub(crate) u32);

/// A placeable unit of work.
///
/// `next` is the intrusive singly-linked-list pointer used for a chip's
/// occupant chain; it is `None` whenever the vertex is detached. `x`/`y` are
/// only meaningful while the vertex is attached to a chip.
#[derive(Debug, Clone)]
pub struct Vertex {
    pub(crate) demand: Vec<i32>,
    pub(crate) x: usize,
    pub(crate) y: usize,
    pub(crate) next: Option<VertexId>,
    pub(crate) nets: Vec<NetId>,
}

impl Vertex {
    pub(crate) fn new(num_resource_types: usize, num_nets: usize) -> Self {
        Vertex {
            demand: vec![0; num_resource_types],
            x: 0,
            y: 0,
            next: None,
            nets: Vec::with_capacity(num_nets),
        }
    }
}

/// A weighted hyperedge connecting a set of vertices.
///
/// Membership is append-only: vertices are added during construction via
/// `State::add_vertex_to_net` and never removed or reordered during
/// annealing.
#[derive(Debug, Clone)]
pub struct Net {
    pub weight: f64,
    pub(crate) declared_members: usize,
    pub(crate) vertices: Vec<VertexId>,
}

impl Net {
    pub(crate) fn new(weight: f64, num_vertices: usize) -> Self {
        Net {
            weight,
            declared_members: num_vertices,
            vertices: Vec::with_capacity(num_vertices),
        }
    }

    /// Declared member count (the capacity given to `State::new_net`), not
    /// necessarily the number of members added so far.
    pub fn capacity(&self) -> usize {
        self.declared_members
    }

    pub fn members(&self) -> &[VertexId] {
        &self.vertices
    }
}
