//! Spatial indexing of snake segments.
//!
//! The index is a snapshot: it is built from the snakes' segments at one
//! instant and is not updated as snakes move afterwards, so the simulation
//! rebuilds it before each snake thinks.
//!
//! The tree is sized to a single leaf bucket and never splits, so every
//! query is a linear scan over all segments. With a handful of snakes that
//! is a few hundred points per query.

use kdtree::KdTree;
use kdtree::distance::squared_euclidean;

use super::snake::Snake;
use super::vector::Vector2D;

/// Type alias for the 2D KD-tree, storing the owning snake index per point.
pub type Tree2D = KdTree<f32, usize, [f32; 2]>;

/// Result of a radius query: (`distance_squared`, owner index) pairs.
pub type SpatialQueryResult = Vec<(f32, usize)>;

/// Snapshot of every segment of every snake.
pub struct SegmentIndex {
    segments: Tree2D,
    len: usize,
}

impl SegmentIndex {
    /// Builds an index from the current segments of `snakes`.
    ///
    /// Each point is tagged with its snake's position in the slice.
    /// Segments with non-finite coordinates are skipped.
    pub fn build(snakes: &[Snake]) -> Self {
        let total: usize = snakes.iter().map(Snake::len).sum();
        // A single bucket: coincident segments (fresh resets) must never force a split.
        let mut segments = KdTree::with_capacity(2, total.max(1));
        let mut len = 0;

        for (owner, snake) in snakes.iter().enumerate() {
            for segment in snake.segments() {
                if let Err(e) = segments.add([segment.x, segment.y], owner) {
                    log::warn!("skipping segment of snake {}: {:?}", owner, e);
                    continue;
                }
                len += 1;
            }
        }

        Self { segments, len }
    }

    /// Number of indexed segments.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no segments are indexed.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Query segments strictly closer than `radius` to `pos`.
    ///
    /// # Returns
    ///
    /// Vector of (`distance_squared`, owner) pairs, nearest first. A non-finite
    /// `pos` yields no hits.
    pub fn query(&self, pos: Vector2D, radius: f32) -> SpatialQueryResult {
        if self.is_empty() {
            return Vec::new();
        }
        let radius_sq = radius.powi(2);
        self.segments
            .within(&[pos.x, pos.y], radius_sq, &squared_euclidean)
            .unwrap_or_default()
            .into_iter()
            .filter(|(dist, _)| *dist < radius_sq)
            .map(|(dist, &owner)| (dist, owner))
            .collect()
    }

    /// Returns `true` if a segment not owned by `owner` lies strictly within `radius` of `pos`.
    pub fn any_foreign_within(&self, pos: Vector2D, radius: f32, owner: usize) -> bool {
        self.query(pos, radius)
            .iter()
            .any(|&(_, other)| other != owner)
    }
}
