//! Index orderings over a [`PointSet`](crate::geometry::PointSet).

mod index_sequence;

pub use index_sequence::IndexSequence;
