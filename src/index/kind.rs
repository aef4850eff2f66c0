/*
 * Copyright 2025 vectordb-index contributors
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! Index variant tags and their family classification
//!
//! [`IndexKind::family`] is the authoritative registry mapping every variant
//! to its metric family. The match is total, so adding a variant without
//! classifying it is a compile error rather than a runtime surprise.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::index::metric::{BinaryMetric, FloatMetric, MetricFamily, SimilarityMetric};

/// The closed set of index variants the backend can build.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IndexKind {
    /// Exhaustive scan over floating-point vectors
    Flat,
    /// Inverted-file clustering with full-precision residuals
    IvfFlat,
    /// Inverted-file clustering with 8-bit scalar quantization
    IvfSq8,
    /// Inverted-file clustering with product quantization
    IvfPq,
    /// Hierarchical navigable small-world graph
    Hnsw,
    /// Exhaustive scan over binary vectors
    BinFlat,
    /// Inverted-file clustering over binary vectors
    BinIvfFlat,
}

impl IndexKind {
    /// The `index_type` string literal sent to the backend.
    ///
    /// These seven strings are a fixed vocabulary; casing is part of the
    /// compatibility surface.
    pub const fn as_str(self) -> &'static str {
        match self {
            IndexKind::Flat => "FLAT",
            IndexKind::IvfFlat => "IVF_FLAT",
            IndexKind::IvfSq8 => "IVF_SQ8",
            IndexKind::IvfPq => "IVF_PQ",
            IndexKind::Hnsw => "HNSW",
            IndexKind::BinFlat => "BIN_FLAT",
            IndexKind::BinIvfFlat => "BIN_IVF_FLAT",
        }
    }

    /// The metric family this variant supports.
    pub const fn family(self) -> MetricFamily {
        match self {
            IndexKind::Flat
            | IndexKind::IvfFlat
            | IndexKind::IvfSq8
            | IndexKind::IvfPq
            | IndexKind::Hnsw => MetricFamily::Floating,
            IndexKind::BinFlat | IndexKind::BinIvfFlat => MetricFamily::Binary,
        }
    }

    /// The metric used when the caller does not supply one.
    ///
    /// Fixed policy: floating-family variants default to L2, binary-family
    /// variants to Jaccard. Existing deployments depend on these exact
    /// defaults.
    pub const fn default_metric(self) -> SimilarityMetric {
        match self.family() {
            MetricFamily::Floating => SimilarityMetric::Float(FloatMetric::L2),
            MetricFamily::Binary => SimilarityMetric::Binary(BinaryMetric::Jaccard),
        }
    }
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
