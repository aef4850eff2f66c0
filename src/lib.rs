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

//! # vectordb-index
//!
//! Index configuration and validation for vector database clients.
//!
//! This crate defines the closed set of index variants a client can ask a
//! vector database backend to build, validates each variant's construction
//! parameters against their documented bounds, enforces compatibility between
//! the chosen similarity metric and the variant's metric family, and derives
//! the two parameter projections the backend consumes:
//!
//! - **Build parameters**: sent when the index is physically constructed
//! - **Query parameters**: merged into every search request against the index
//!
//! ## Example
//!
//! ```
//! use vectordb_index::{IvfFlat, VectorIndex};
//!
//! let index = IvfFlat::new(128, None, None).unwrap();
//! assert_eq!(index.index_type(), "IVF_FLAT");
//! assert_eq!(index.build_params()["nlist"], 128);
//! assert_eq!(index.query_params()["nprobe"], 128);
//! ```
//!
//! Configurations are immutable value objects: construction either returns a
//! fully validated instance or an [`IndexError`], never a partially
//! initialized one. Instances can be shared freely across threads.

pub mod core;
pub mod index;

pub use self::core::error::{IndexError, Result};
pub use self::index::kind::IndexKind;
pub use self::index::metric::{BinaryMetric, FloatMetric, MetricFamily, SimilarityMetric};
pub use self::index::variants::{
    BinFlat, BinIvfFlat, Flat, Hnsw, IndexConfig, IvfFlat, IvfPq, IvfSq8, VectorIndex,
};
