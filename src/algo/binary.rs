use itertools::iproduct;

use super::*;

/// Binary operations that combine two graphs into a third one.
///
/// The inputs may have different numbers of nodes; each operation has its own rule for the
/// size of the result. Empty inputs are allowed and simply lead to small or empty results.
pub trait GraphCombinators: Sized {
    /// Union of both edge sets.
    ///
    /// The result has `max(n1, n2)` nodes and starts as a copy of the larger graph (`self` if
    /// both have the same size). Within the common `min(n1, n2)` nodes an edge exists if it
    /// exists in either graph; edges touching the remaining nodes are those of the larger graph.
    fn union(&self, other: &Self) -> Self;

    /// Intersection of both edge sets restricted to the common `min(n1, n2)` nodes.
    /// Nodes beyond that are dropped.
    fn intersection(&self, other: &Self) -> Self;

    /// Ring sum (symmetric difference) of both edge sets restricted to the common
    /// `min(n1, n2)` nodes. Nodes beyond that are dropped.
    fn ring_sum(&self, other: &Self) -> Self;

    /// Cartesian (box) product with `n1 * n2` nodes.
    ///
    /// Node `(i1, i2)` of the product is numbered `i1 * n2 + i2`. Nodes `(i1, i2)` and
    /// `(j1, j2)` are adjacent iff `i1 == j1` and `{i2, j2}` is an edge of `other`, or
    /// `i2 == j2` and `{i1, j1}` is an edge of `self`.
    ///
    /// ** Panics if `n1 * n2` exceeds `NumNodes::MAX` **
    fn cartesian_product(&self, other: &Self) -> Self;
}

impl<G> GraphCombinators for G
where
    G: AdjacencyList + AdjacencyTest + GraphEdgeEditing + Clone,
{
    fn union(&self, other: &Self) -> Self {
        let overlap = self.number_of_nodes().min(other.number_of_nodes());

        let mut result = if self.number_of_nodes() >= other.number_of_nodes() {
            self.clone()
        } else {
            other.clone()
        };

        for u in 0..overlap {
            for v in u..overlap {
                if self.has_edge(u, v) || other.has_edge(u, v) {
                    result.try_add_edge(u, v);
                }
            }
        }

        result
    }

    fn intersection(&self, other: &Self) -> Self {
        combine_overlap(self, other, |a, b| a && b)
    }

    fn ring_sum(&self, other: &Self) -> Self {
        combine_overlap(self, other, |a, b| a ^ b)
    }

    fn cartesian_product(&self, other: &Self) -> Self {
        let (n1, n2) = (self.number_of_nodes(), other.number_of_nodes());
        let n = n1 as u64 * n2 as u64;
        assert!(
            n <= NumNodes::MAX as u64,
            "Cartesian product of {n1} and {n2} nodes is too large"
        );

        let id = |i1: Node, i2: Node| i1 * n2 + i2;
        let mut result = G::new(n as NumNodes);

        for (i1, i2) in iproduct!(0..n1, 0..n2) {
            // edges inside the copy of `other` belonging to `i1`
            for j2 in other.neighbors_of(i2) {
                result.try_add_edge(id(i1, i2), id(i1, j2));
            }

            // edges inside the copy of `self` belonging to `i2`
            for j1 in self.neighbors_of(i1) {
                result.try_add_edge(id(i1, i2), id(j1, i2));
            }
        }

        result
    }
}

/// Builds a graph on the common nodes of `g1` and `g2` where cell `(u, v)` is
/// `op(g1[u][v], g2[u][v])`
fn combine_overlap<G, F>(g1: &G, g2: &G, op: F) -> G
where
    G: AdjacencyTest + GraphEdgeEditing,
    F: Fn(bool, bool) -> bool,
{
    let overlap = g1.number_of_nodes().min(g2.number_of_nodes());
    let mut result = G::new(overlap);

    for u in 0..overlap {
        for v in u..overlap {
            if op(g1.has_edge(u, v), g2.has_edge(u, v)) {
                result.try_add_edge(u, v);
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::{gens::*, testing::*};

    /// `K2` and two isolated nodes
    fn edge_and_empty() -> (AdjMatrix, AdjMatrix) {
        (AdjMatrix::from_edges(2, [(0, 1)]), AdjMatrix::new(2))
    }

    #[test]
    fn union_of_edge_and_empty() {
        let (g1, g2) = edge_and_empty();
        let union = g1.union(&g2);

        assert_eq!(union.number_of_nodes(), 2);
        assert_eq!(union.ordered_edges(true), vec![Edge(0, 1)]);
    }

    #[test]
    fn intersection_of_edge_and_empty() {
        let (g1, g2) = edge_and_empty();
        let intersection = g1.intersection(&g2);

        assert_eq!(intersection.number_of_nodes(), 2);
        assert!(intersection.is_singleton_graph());
    }

    #[test]
    fn ring_sum_of_edge_and_empty() {
        let (g1, g2) = edge_and_empty();
        let ring_sum = g1.ring_sum(&g2);

        assert_eq!(ring_sum.number_of_nodes(), 2);
        assert_eq!(ring_sum.ordered_edges(true), vec![Edge(0, 1)]);
    }

    #[test]
    fn cartesian_product_of_edge_and_empty() {
        let (g1, g2) = edge_and_empty();
        let product = g1.cartesian_product(&g2);

        // (0,0)=0, (0,1)=1, (1,0)=2, (1,1)=3
        assert_eq!(product.number_of_nodes(), 4);
        assert_eq!(product.ordered_edges(true), vec![Edge(0, 2), Edge(1, 3)]);

        // swapping the factors transposes the numbering
        let swapped = g2.cartesian_product(&g1);
        assert_eq!(swapped.ordered_edges(true), vec![Edge(0, 1), Edge(2, 3)]);
    }

    #[test]
    fn cartesian_product_of_paths_is_grid() {
        let p2 = AdjMatrix::from_edges(2, [(0, 1)]);
        let p3 = AdjMatrix::from_edges(3, [(0, 1), (1, 2)]);
        let grid = p2.cartesian_product(&p3);

        assert_eq!(grid.number_of_nodes(), 6);
        assert_eq!(
            grid.ordered_edges(true),
            vec![
                Edge(0, 1),
                Edge(0, 3),
                Edge(1, 2),
                Edge(1, 4),
                Edge(2, 5),
                Edge(3, 4),
                Edge(4, 5)
            ]
        );
    }

    #[test]
    fn cartesian_products_of_cycles_and_cliques() {
        let mut c4 = AdjMatrix::new(4);
        c4.connect_cycle(0..4);
        let mut k2 = AdjMatrix::new(2);
        k2.connect_path([0, 1]);

        let cube = c4.cartesian_product(&k2);
        assert_eq!(cube.number_of_nodes(), 8);
        assert_eq!(cube.number_of_edges(), 12);
        assert!(cube.degrees().all(|d| d == 3));

        let mut k3 = AdjMatrix::new(3);
        k3.connect_clique(&[0, 1, 2], false);

        let rook = k3.cartesian_product(&k3);
        assert_eq!(rook.number_of_nodes(), 9);
        assert_eq!(rook.number_of_edges(), 18);
        assert!(rook.degrees().all(|d| d == 4));
    }

    #[test]
    fn cartesian_product_carries_loops() {
        let looped = AdjMatrix::from_edges(1, [(0, 0)]);
        let k2 = AdjMatrix::from_edges(2, [(0, 1)]);

        let product = looped.cartesian_product(&k2);
        assert_eq!(
            product.ordered_edges(true),
            vec![Edge(0, 0), Edge(0, 1), Edge(1, 1)]
        );
    }

    #[test]
    fn union_keeps_larger_graph_outside_overlap() {
        let small = AdjMatrix::from_edges(2, [(0, 0)]);
        let large = AdjMatrix::from_edges(4, [(0, 1), (1, 3), (2, 3)]);

        let expected = vec![Edge(0, 0), Edge(0, 1), Edge(1, 3), Edge(2, 3)];
        assert_eq!(small.union(&large).ordered_edges(true), expected);
        assert_eq!(large.union(&small).ordered_edges(true), expected);
        assert_eq!(small.union(&large).number_of_nodes(), 4);
    }

    #[test]
    fn overlap_drops_extra_nodes() {
        let small = AdjMatrix::from_edges(2, [(0, 1)]);
        let large = AdjMatrix::from_edges(4, [(0, 1), (1, 1), (2, 3)]);

        let intersection = small.intersection(&large);
        assert_eq!(intersection.number_of_nodes(), 2);
        assert_eq!(intersection.ordered_edges(true), vec![Edge(0, 1)]);

        let ring_sum = large.ring_sum(&small);
        assert_eq!(ring_sum.number_of_nodes(), 2);
        assert_eq!(ring_sum.ordered_edges(true), vec![Edge(1, 1)]);
    }

    #[test]
    fn empty_operands() {
        let empty = AdjMatrix::new(0);
        let graph = AdjMatrix::from_edges(3, [(0, 1), (2, 2)]);

        assert_eq!(graph.union(&empty), graph);
        assert_eq!(empty.union(&graph), graph);
        assert!(graph.intersection(&empty).is_empty());
        assert!(empty.ring_sum(&graph).is_empty());
        assert!(graph.cartesian_product(&empty).is_empty());
        assert!(empty.cartesian_product(&empty).is_empty());
    }

    #[test]
    fn random_sizes_and_symmetry() {
        let rng = &mut Pcg64Mcg::seed_from_u64(21);

        for n1 in [0 as NumNodes, 1, 3, 6] {
            for n2 in [0 as NumNodes, 2, 5] {
                let g1 = AdjMatrix::gn(rng, n1);
                let g2 = AdjMatrix::gn(rng, n2);

                let union = g1.union(&g2);
                let intersection = g1.intersection(&g2);
                let ring_sum = g1.ring_sum(&g2);
                let product = g1.cartesian_product(&g2);

                assert_eq!(union.number_of_nodes(), n1.max(n2));
                assert_eq!(intersection.number_of_nodes(), n1.min(n2));
                assert_eq!(ring_sum.number_of_nodes(), n1.min(n2));
                assert_eq!(product.number_of_nodes(), n1 * n2);

                for graph in [&union, &intersection, &ring_sum, &product] {
                    assert_symmetric(graph);
                }

                for u in 0..n1.min(n2) {
                    for v in 0..n1.min(n2) {
                        let (a, b) = (g1.has_edge(u, v), g2.has_edge(u, v));
                        assert_eq!(union.has_edge(u, v), a || b);
                        assert_eq!(intersection.has_edge(u, v), a && b);
                        assert_eq!(ring_sum.has_edge(u, v), a != b);
                    }
                }

                for (i1, i2, j1, j2) in iproduct!(0..n1, 0..n2, 0..n1, 0..n2) {
                    let expected = (i1 == j1 && g2.has_edge(i2, j2))
                        || (i2 == j2 && g1.has_edge(i1, j1));
                    assert_eq!(
                        product.has_edge(i1 * n2 + i2, j1 * n2 + j2),
                        expected
                    );
                }
            }
        }
    }
}
