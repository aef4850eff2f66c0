//! Index variant configuration
//!
//! - `metric`: the similarity-metric taxonomy and its two families
//! - `kind`: the closed set of index variant tags and their classification
//! - `params`: numeric bounds and backend key names, in one table
//! - `variants`: the concrete index configurations and their projections

pub mod kind;
pub mod metric;
pub mod params;
pub mod variants;

pub use kind::IndexKind;
pub use metric::{BinaryMetric, FloatMetric, MetricFamily, SimilarityMetric};
pub use variants::{
    BinFlat, BinIvfFlat, Flat, Hnsw, IndexConfig, IvfFlat, IvfPq, IvfSq8, VectorIndex,
};
