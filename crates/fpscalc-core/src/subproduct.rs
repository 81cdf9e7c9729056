//! Subproduct tree: multi-point evaluation and fast interpolation.
//!
//! Node `i` covers a contiguous range of points and holds the product of
//! `(x - p)` over that range. Children of node `i` are `2i + 1` and `2i + 2`.
//! Node slices live in a [`NodeArena`] that is dropped when the pass ends.

use fpscalc_memory::NodeArena;
use fpscalc_ntt::ModInt;
use tracing::debug;

use crate::constants::TREE_BYTES_PER_POINT;
use crate::engine::PolyEngine;
use crate::error::PolyError;
use crate::series::Series;

/// Ranges at most this wide are finished by Horner's rule.
const HORNER_LEAF: usize = 8;

/// Balanced product tree over a point set.
pub(crate) struct SubproductTree<'a> {
    nodes: Vec<&'a [ModInt]>,
    points: &'a [ModInt],
}

impl<'a> SubproductTree<'a> {
    /// `M(x) = prod (x - p)` over every point.
    pub(crate) fn root(&self) -> &'a [ModInt] {
        self.nodes[0]
    }
}

fn horner(poly: &[ModInt], x: ModInt) -> ModInt {
    poly.iter().rev().fold(ModInt::ZERO, |acc, &c| acc * x + c)
}

impl PolyEngine {
    pub(crate) fn build_subproduct_tree<'a>(
        &self,
        arena: &'a NodeArena,
        points: &'a [ModInt],
    ) -> Result<SubproductTree<'a>, PolyError> {
        let empty: &'a [ModInt] = &[];
        let mut nodes = vec![empty; 4 * points.len().max(1)];
        if !points.is_empty() {
            self.build_node(arena, points, &mut nodes, 0, 0, points.len())?;
        }
        Ok(SubproductTree { nodes, points })
    }

    fn build_node<'a>(
        &self,
        arena: &'a NodeArena,
        points: &[ModInt],
        nodes: &mut [&'a [ModInt]],
        idx: usize,
        lo: usize,
        hi: usize,
    ) -> Result<(), PolyError> {
        if hi - lo == 1 {
            nodes[idx] = arena.alloc_copy(&[-points[lo], ModInt::ONE]);
            return Ok(());
        }
        let mid = lo + (hi - lo) / 2;
        self.build_node(arena, points, nodes, 2 * idx + 1, lo, mid)?;
        self.build_node(arena, points, nodes, 2 * idx + 2, mid, hi)?;
        let product = self.mul_slices(nodes[2 * idx + 1], nodes[2 * idx + 2])?;
        nodes[idx] = arena.alloc_copy(&product);
        Ok(())
    }

    /// Evaluate `poly` at every point of `tree`, writing into `out`.
    pub(crate) fn eval_on_tree(
        &self,
        tree: &SubproductTree<'_>,
        poly: &[ModInt],
        out: &mut [ModInt],
    ) -> Result<(), PolyError> {
        if tree.points.is_empty() {
            return Ok(());
        }
        let reduced = self.rem_slices(poly, tree.root())?;
        self.eval_node(tree, &reduced, 0, 0, tree.points.len(), out)
    }

    fn eval_node(
        &self,
        tree: &SubproductTree<'_>,
        poly: &[ModInt],
        idx: usize,
        lo: usize,
        hi: usize,
        out: &mut [ModInt],
    ) -> Result<(), PolyError> {
        if hi - lo <= HORNER_LEAF {
            for i in lo..hi {
                out[i] = horner(poly, tree.points[i]);
            }
            return Ok(());
        }
        let mid = lo + (hi - lo) / 2;
        let left = self.rem_slices(poly, tree.nodes[2 * idx + 1])?;
        self.eval_node(tree, &left, 2 * idx + 1, lo, mid, out)?;
        let right = self.rem_slices(poly, tree.nodes[2 * idx + 2])?;
        self.eval_node(tree, &right, 2 * idx + 2, mid, hi, out)
    }

    /// Evaluate `poly` at every point.
    pub fn eval_many(&self, poly: &Series, points: &[ModInt]) -> Result<Vec<ModInt>, PolyError> {
        debug!(op = "eval_many", len = poly.len(), points = points.len(), "series operation");
        let mut out = vec![ModInt::ZERO; points.len()];
        if points.is_empty() {
            return Ok(out);
        }
        let arena = NodeArena::with_capacity(points.len() * TREE_BYTES_PER_POINT);
        let tree = self.build_subproduct_tree(&arena, points)?;
        self.eval_on_tree(&tree, poly, &mut out)?;
        Ok(out)
    }

    /// The polynomial of degree below `xs.len()` through every `(xs[i], ys[i])`.
    ///
    /// Nodes must be distinct.
    pub fn interpolate(&self, xs: &[ModInt], ys: &[ModInt]) -> Result<Series, PolyError> {
        debug!(op = "interpolate", points = xs.len(), "series operation");
        if xs.len() != ys.len() {
            return Err(PolyError::InvalidArgument(format!(
                "{} nodes but {} values",
                xs.len(),
                ys.len()
            )));
        }
        if xs.is_empty() {
            return Ok(Series::default());
        }
        let arena = NodeArena::with_capacity(xs.len() * TREE_BYTES_PER_POINT);
        let tree = self.build_subproduct_tree(&arena, xs)?;

        // w_i = y_i / M'(x_i)
        let m_prime = crate::calculus::derivative(tree.root());
        let mut weights = vec![ModInt::ZERO; xs.len()];
        self.eval_on_tree(&tree, &m_prime, &mut weights)?;
        for (i, (w, &y)) in weights.iter_mut().zip(ys).enumerate() {
            let inv = w.checked_inv().ok_or_else(|| {
                PolyError::InvalidArgument(format!("repeated interpolation node {}", xs[i]))
            })?;
            *w = y * inv;
        }

        let mut poly = self.combine_node(&tree, &weights, 0, 0, xs.len())?;
        poly.resize(xs.len(), ModInt::ZERO);
        Ok(Series::new(poly))
    }

    /// `sum w_i * prod_{j != i} (x - x_j)` over one node's range.
    fn combine_node(
        &self,
        tree: &SubproductTree<'_>,
        weights: &[ModInt],
        idx: usize,
        lo: usize,
        hi: usize,
    ) -> Result<Vec<ModInt>, PolyError> {
        if hi - lo == 1 {
            return Ok(vec![weights[lo]]);
        }
        let mid = lo + (hi - lo) / 2;
        let left = self.combine_node(tree, weights, 2 * idx + 1, lo, mid)?;
        let right = self.combine_node(tree, weights, 2 * idx + 2, mid, hi)?;
        let mut out = self.mul_slices(&left, tree.nodes[2 * idx + 2])?;
        let other = self.mul_slices(&right, tree.nodes[2 * idx + 1])?;
        if other.len() > out.len() {
            out.resize(other.len(), ModInt::ZERO);
        }
        for (x, &y) in out.iter_mut().zip(&other) {
            *x += y;
        }
        Ok(out)
    }
}
