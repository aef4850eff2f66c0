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

//! Numeric parameter bounds and backend key names
//!
//! One table drives both validation and the parameter projections, so the
//! documented bounds and the keys the backend expects cannot drift apart.

use crate::core::error::{IndexError, Result};

/// Bound metadata for one numeric index parameter.
#[derive(Debug, Clone, Copy)]
pub struct FieldBound {
    /// Field name as exposed by the constructors
    pub field: &'static str,
    /// Key the backend expects for this field
    pub backend_key: &'static str,
    /// Inclusive lower bound
    pub min: u32,
    /// Inclusive upper bound
    pub max: u32,
}

/// Number of inverted-file clusters (`nlist`).
pub const CLUSTER_UNITS: FieldBound = FieldBound {
    field: "cluster_units",
    backend_key: "nlist",
    min: 1,
    max: 65536,
};

/// Number of clusters probed per query (`nprobe`). The effective upper bound
/// is the governing cluster count, not `max`.
pub const PROBE_COUNT: FieldBound = FieldBound {
    field: "probe_count",
    backend_key: "nprobe",
    min: 1,
    max: 65536,
};

/// Bits per product-quantization code (`nbits`).
pub const CODE_BITS: FieldBound = FieldBound {
    field: "code_bits",
    backend_key: "nbits",
    min: 1,
    max: 16,
};

/// Maximum graph degree per node (`M`).
pub const MAX_DEGREE: FieldBound = FieldBound {
    field: "max_degree",
    backend_key: "M",
    min: 4,
    max: 64,
};

/// Candidate-list breadth while building the graph (`efConstruction`).
pub const SEARCH_SCOPE_BUILD: FieldBound = FieldBound {
    field: "search_scope_build",
    backend_key: "efConstruction",
    min: 8,
    max: 512,
};

/// Candidate-list breadth per query (`ef`). The true lower bound is the
/// query's top-K, which is unknown at configuration time, so 1 stands.
pub const SEARCH_SCOPE_QUERY: FieldBound = FieldBound {
    field: "search_scope_query",
    backend_key: "ef",
    min: 1,
    max: 32768,
};

/// Number of product-quantization subquantizers; unconstrained.
pub const SUBQUANTIZERS_KEY: &str = "m";

/// Key carrying the metric wire name for variants with no tunable query
/// behavior.
pub const METRIC_TYPE_KEY: &str = "metric_type";

/// Validate `value` against an inclusive bound.
pub fn check(bound: FieldBound, value: u32) -> Result<u32> {
    if value < bound.min || value > bound.max {
        return Err(IndexError::ParameterRange {
            field: bound.field,
            value,
            min: bound.min,
            max: bound.max,
        });
    }
    Ok(value)
}

/// Validate a probe count against its governing cluster count.
pub fn check_probe_count(value: u32, cluster_units: u32) -> Result<u32> {
    if value < PROBE_COUNT.min || value > cluster_units {
        return Err(IndexError::ParameterRange {
            field: PROBE_COUNT.field,
            value,
            min: PROBE_COUNT.min,
            max: cluster_units,
        });
    }
    Ok(value)
}
