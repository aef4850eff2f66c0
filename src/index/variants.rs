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

//! Concrete index configurations
//!
//! Every variant follows the same construction sequence:
//! 1. resolve the metric (explicit, or the family default)
//! 2. check the metric's family against the variant's family
//! 3. check numeric bounds and fill derived defaults
//! 4. freeze the instance
//!
//! A constructed value is immutable and exposes only its two projections
//! plus read accessors, so it can be shared across threads without
//! synchronization.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;
use tracing::debug;

use crate::core::error::{IndexError, Result};
use crate::index::kind::IndexKind;
use crate::index::metric::SimilarityMetric;
use crate::index::params;

/// Shared surface of every index configuration.
pub trait VectorIndex {
    /// Which variant this configuration is for.
    fn kind(&self) -> IndexKind;

    /// The similarity metric, resolved at construction.
    fn metric(&self) -> SimilarityMetric;

    /// String literal identifying the index algorithm to the backend.
    fn index_type(&self) -> &'static str {
        self.kind().as_str()
    }

    /// Parameters consumed when the index is physically built.
    fn build_params(&self) -> HashMap<String, Value>;

    /// Parameters merged into each search request against the built index.
    fn query_params(&self) -> HashMap<String, Value>;
}

/// Resolve the metric for `kind`, defaulting by family and rejecting
/// cross-family combinations.
fn resolve_metric(kind: IndexKind, metric: Option<SimilarityMetric>) -> Result<SimilarityMetric> {
    let metric = metric.unwrap_or_else(|| kind.default_metric());
    if metric.family() != kind.family() {
        return Err(IndexError::IncompatibleMetric {
            index: kind.as_str(),
            metric: metric.as_str(),
        });
    }
    Ok(metric)
}

/// Exhaustive scan. No build-time tuning; best for small collections that
/// need exact recall.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Flat {
    metric: SimilarityMetric,
}

impl Flat {
    pub fn new(metric: Option<SimilarityMetric>) -> Result<Self> {
        let metric = resolve_metric(IndexKind::Flat, metric)?;
        debug!(metric = metric.as_str(), "configured FLAT index");
        Ok(Self { metric })
    }
}

impl VectorIndex for Flat {
    fn kind(&self) -> IndexKind {
        IndexKind::Flat
    }

    fn metric(&self) -> SimilarityMetric {
        self.metric
    }

    fn build_params(&self) -> HashMap<String, Value> {
        HashMap::new()
    }

    fn query_params(&self) -> HashMap<String, Value> {
        HashMap::from([(params::METRIC_TYPE_KEY.to_string(), json!(self.metric.as_str()))])
    }
}

/// Exhaustive scan over binary vectors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BinFlat {
    metric: SimilarityMetric,
}

impl BinFlat {
    pub fn new(metric: Option<SimilarityMetric>) -> Result<Self> {
        let metric = resolve_metric(IndexKind::BinFlat, metric)?;
        debug!(metric = metric.as_str(), "configured BIN_FLAT index");
        Ok(Self { metric })
    }
}

impl VectorIndex for BinFlat {
    fn kind(&self) -> IndexKind {
        IndexKind::BinFlat
    }

    fn metric(&self) -> SimilarityMetric {
        self.metric
    }

    fn build_params(&self) -> HashMap<String, Value> {
        HashMap::new()
    }

    fn query_params(&self) -> HashMap<String, Value> {
        HashMap::from([(params::METRIC_TYPE_KEY.to_string(), json!(self.metric.as_str()))])
    }
}

/// Inverted-file index with full-precision residuals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IvfFlat {
    metric: SimilarityMetric,
    nlist: u32,
    nprobe: u32,
}

impl IvfFlat {
    /// `cluster_units` is the number of partitions built (`nlist`);
    /// `probe_count` is how many are examined per query (`nprobe`) and
    /// defaults to `cluster_units` when omitted.
    pub fn new(
        cluster_units: u32,
        probe_count: Option<u32>,
        metric: Option<SimilarityMetric>,
    ) -> Result<Self> {
        let metric = resolve_metric(IndexKind::IvfFlat, metric)?;
        let (nlist, nprobe) = resolve_ivf(cluster_units, probe_count)?;
        debug!(nlist, nprobe, metric = metric.as_str(), "configured IVF_FLAT index");
        Ok(Self { metric, nlist, nprobe })
    }

    pub fn cluster_units(&self) -> u32 {
        self.nlist
    }

    pub fn probe_count(&self) -> u32 {
        self.nprobe
    }
}

impl VectorIndex for IvfFlat {
    fn kind(&self) -> IndexKind {
        IndexKind::IvfFlat
    }

    fn metric(&self) -> SimilarityMetric {
        self.metric
    }

    fn build_params(&self) -> HashMap<String, Value> {
        ivf_build_params(self.nlist)
    }

    fn query_params(&self) -> HashMap<String, Value> {
        ivf_query_params(self.nprobe)
    }
}

/// Inverted-file index with 8-bit scalar quantization. Same tuning surface
/// as [`IvfFlat`], trading recall for memory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IvfSq8 {
    metric: SimilarityMetric,
    nlist: u32,
    nprobe: u32,
}

impl IvfSq8 {
    pub fn new(
        cluster_units: u32,
        probe_count: Option<u32>,
        metric: Option<SimilarityMetric>,
    ) -> Result<Self> {
        let metric = resolve_metric(IndexKind::IvfSq8, metric)?;
        let (nlist, nprobe) = resolve_ivf(cluster_units, probe_count)?;
        debug!(nlist, nprobe, metric = metric.as_str(), "configured IVF_SQ8 index");
        Ok(Self { metric, nlist, nprobe })
    }

    pub fn cluster_units(&self) -> u32 {
        self.nlist
    }

    pub fn probe_count(&self) -> u32 {
        self.nprobe
    }
}

impl VectorIndex for IvfSq8 {
    fn kind(&self) -> IndexKind {
        IndexKind::IvfSq8
    }

    fn metric(&self) -> SimilarityMetric {
        self.metric
    }

    fn build_params(&self) -> HashMap<String, Value> {
        ivf_build_params(self.nlist)
    }

    fn query_params(&self) -> HashMap<String, Value> {
        ivf_query_params(self.nprobe)
    }
}

/// Inverted-file index over binary vectors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BinIvfFlat {
    metric: SimilarityMetric,
    nlist: u32,
    nprobe: u32,
}

impl BinIvfFlat {
    pub fn new(
        cluster_units: u32,
        probe_count: Option<u32>,
        metric: Option<SimilarityMetric>,
    ) -> Result<Self> {
        let metric = resolve_metric(IndexKind::BinIvfFlat, metric)?;
        let (nlist, nprobe) = resolve_ivf(cluster_units, probe_count)?;
        debug!(nlist, nprobe, metric = metric.as_str(), "configured BIN_IVF_FLAT index");
        Ok(Self { metric, nlist, nprobe })
    }

    pub fn cluster_units(&self) -> u32 {
        self.nlist
    }

    pub fn probe_count(&self) -> u32 {
        self.nprobe
    }
}

impl VectorIndex for BinIvfFlat {
    fn kind(&self) -> IndexKind {
        IndexKind::BinIvfFlat
    }

    fn metric(&self) -> SimilarityMetric {
        self.metric
    }

    fn build_params(&self) -> HashMap<String, Value> {
        ivf_build_params(self.nlist)
    }

    fn query_params(&self) -> HashMap<String, Value> {
        ivf_query_params(self.nprobe)
    }
}

/// Inverted-file index with product quantization. Compresses residuals into
/// `subquantizers` codes of `code_bits` bits each.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IvfPq {
    metric: SimilarityMetric,
    nlist: u32,
    nprobe: u32,
    m: Option<u32>,
    nbits: u32,
}

impl IvfPq {
    /// `subquantizers` (`m`) must divide the vector dimensionality, which is
    /// unknown here, so it is passed through unchecked. `code_bits` (`nbits`)
    /// defaults to 8.
    pub fn new(
        cluster_units: u32,
        subquantizers: Option<u32>,
        probe_count: Option<u32>,
        code_bits: Option<u32>,
        metric: Option<SimilarityMetric>,
    ) -> Result<Self> {
        let metric = resolve_metric(IndexKind::IvfPq, metric)?;
        let (nlist, nprobe) = resolve_ivf(cluster_units, probe_count)?;
        let nbits = match code_bits {
            Some(bits) => params::check(params::CODE_BITS, bits)?,
            None => 8,
        };
        debug!(
            nlist,
            nprobe,
            nbits,
            m = subquantizers,
            metric = metric.as_str(),
            "configured IVF_PQ index"
        );
        Ok(Self {
            metric,
            nlist,
            nprobe,
            m: subquantizers,
            nbits,
        })
    }

    pub fn cluster_units(&self) -> u32 {
        self.nlist
    }

    pub fn probe_count(&self) -> u32 {
        self.nprobe
    }

    pub fn subquantizers(&self) -> Option<u32> {
        self.m
    }

    pub fn code_bits(&self) -> u32 {
        self.nbits
    }
}

impl VectorIndex for IvfPq {
    fn kind(&self) -> IndexKind {
        IndexKind::IvfPq
    }

    fn metric(&self) -> SimilarityMetric {
        self.metric
    }

    fn build_params(&self) -> HashMap<String, Value> {
        HashMap::from([
            (params::CLUSTER_UNITS.backend_key.to_string(), json!(self.nlist)),
            (params::SUBQUANTIZERS_KEY.to_string(), json!(self.m)),
            (params::CODE_BITS.backend_key.to_string(), json!(self.nbits)),
        ])
    }

    fn query_params(&self) -> HashMap<String, Value> {
        ivf_query_params(self.nprobe)
    }
}

/// Hierarchical navigable small-world graph index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hnsw {
    metric: SimilarityMetric,
    m: u32,
    ef_construction: u32,
    ef: u32,
}

impl Hnsw {
    /// All three parameters are required: `max_degree` (`M`) bounds the
    /// links per node, `search_scope_build` (`efConstruction`) the
    /// candidate list while building, `search_scope_query` (`ef`) the
    /// candidate list per query.
    pub fn new(
        max_degree: u32,
        search_scope_build: u32,
        search_scope_query: u32,
        metric: Option<SimilarityMetric>,
    ) -> Result<Self> {
        let metric = resolve_metric(IndexKind::Hnsw, metric)?;
        let m = params::check(params::MAX_DEGREE, max_degree)?;
        let ef_construction = params::check(params::SEARCH_SCOPE_BUILD, search_scope_build)?;
        // The real floor for ef is the per-query top-K, which is unknown at
        // configuration time; the documented [1, 32768] bound stands.
        let ef = params::check(params::SEARCH_SCOPE_QUERY, search_scope_query)?;
        debug!(m, ef_construction, ef, metric = metric.as_str(), "configured HNSW index");
        Ok(Self {
            metric,
            m,
            ef_construction,
            ef,
        })
    }

    pub fn max_degree(&self) -> u32 {
        self.m
    }

    pub fn search_scope_build(&self) -> u32 {
        self.ef_construction
    }

    pub fn search_scope_query(&self) -> u32 {
        self.ef
    }
}

impl VectorIndex for Hnsw {
    fn kind(&self) -> IndexKind {
        IndexKind::Hnsw
    }

    fn metric(&self) -> SimilarityMetric {
        self.metric
    }

    fn build_params(&self) -> HashMap<String, Value> {
        HashMap::from([
            (params::MAX_DEGREE.backend_key.to_string(), json!(self.m)),
            (
                params::SEARCH_SCOPE_BUILD.backend_key.to_string(),
                json!(self.ef_construction),
            ),
        ])
    }

    fn query_params(&self) -> HashMap<String, Value> {
        HashMap::from([(
            params::SEARCH_SCOPE_QUERY.backend_key.to_string(),
            json!(self.ef),
        )])
    }
}

/// Shared nlist/nprobe validation for the inverted-file variants.
fn resolve_ivf(cluster_units: u32, probe_count: Option<u32>) -> Result<(u32, u32)> {
    let nlist = params::check(params::CLUSTER_UNITS, cluster_units)?;
    let nprobe = match probe_count {
        Some(probes) => params::check_probe_count(probes, nlist)?,
        None => nlist,
    };
    Ok((nlist, nprobe))
}

fn ivf_build_params(nlist: u32) -> HashMap<String, Value> {
    HashMap::from([(params::CLUSTER_UNITS.backend_key.to_string(), json!(nlist))])
}

fn ivf_query_params(nprobe: u32) -> HashMap<String, Value> {
    HashMap::from([(params::PROBE_COUNT.backend_key.to_string(), json!(nprobe))])
}

/// Any index configuration, tagged by variant.
///
/// Useful when a collection definition has to hold one of the seven
/// configurations uniformly; delegates every [`VectorIndex`] operation to
/// the wrapped value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "index_type")]
pub enum IndexConfig {
    #[serde(rename = "FLAT")]
    Flat(Flat),
    #[serde(rename = "IVF_FLAT")]
    IvfFlat(IvfFlat),
    #[serde(rename = "IVF_SQ8")]
    IvfSq8(IvfSq8),
    #[serde(rename = "IVF_PQ")]
    IvfPq(IvfPq),
    #[serde(rename = "HNSW")]
    Hnsw(Hnsw),
    #[serde(rename = "BIN_FLAT")]
    BinFlat(BinFlat),
    #[serde(rename = "BIN_IVF_FLAT")]
    BinIvfFlat(BinIvfFlat),
}

impl VectorIndex for IndexConfig {
    fn kind(&self) -> IndexKind {
        match self {
            IndexConfig::Flat(c) => c.kind(),
            IndexConfig::IvfFlat(c) => c.kind(),
            IndexConfig::IvfSq8(c) => c.kind(),
            IndexConfig::IvfPq(c) => c.kind(),
            IndexConfig::Hnsw(c) => c.kind(),
            IndexConfig::BinFlat(c) => c.kind(),
            IndexConfig::BinIvfFlat(c) => c.kind(),
        }
    }

    fn metric(&self) -> SimilarityMetric {
        match self {
            IndexConfig::Flat(c) => c.metric(),
            IndexConfig::IvfFlat(c) => c.metric(),
            IndexConfig::IvfSq8(c) => c.metric(),
            IndexConfig::IvfPq(c) => c.metric(),
            IndexConfig::Hnsw(c) => c.metric(),
            IndexConfig::BinFlat(c) => c.metric(),
            IndexConfig::BinIvfFlat(c) => c.metric(),
        }
    }

    fn build_params(&self) -> HashMap<String, Value> {
        match self {
            IndexConfig::Flat(c) => c.build_params(),
            IndexConfig::IvfFlat(c) => c.build_params(),
            IndexConfig::IvfSq8(c) => c.build_params(),
            IndexConfig::IvfPq(c) => c.build_params(),
            IndexConfig::Hnsw(c) => c.build_params(),
            IndexConfig::BinFlat(c) => c.build_params(),
            IndexConfig::BinIvfFlat(c) => c.build_params(),
        }
    }

    fn query_params(&self) -> HashMap<String, Value> {
        match self {
            IndexConfig::Flat(c) => c.query_params(),
            IndexConfig::IvfFlat(c) => c.query_params(),
            IndexConfig::IvfSq8(c) => c.query_params(),
            IndexConfig::IvfPq(c) => c.query_params(),
            IndexConfig::Hnsw(c) => c.query_params(),
            IndexConfig::BinFlat(c) => c.query_params(),
            IndexConfig::BinIvfFlat(c) => c.query_params(),
        }
    }
}

impl From<Flat> for IndexConfig {
    fn from(config: Flat) -> Self {
        IndexConfig::Flat(config)
    }
}

impl From<IvfFlat> for IndexConfig {
    fn from(config: IvfFlat) -> Self {
        IndexConfig::IvfFlat(config)
    }
}

impl From<IvfSq8> for IndexConfig {
    fn from(config: IvfSq8) -> Self {
        IndexConfig::IvfSq8(config)
    }
}

impl From<IvfPq> for IndexConfig {
    fn from(config: IvfPq) -> Self {
        IndexConfig::IvfPq(config)
    }
}

impl From<Hnsw> for IndexConfig {
    fn from(config: Hnsw) -> Self {
        IndexConfig::Hnsw(config)
    }
}

impl From<BinFlat> for IndexConfig {
    fn from(config: BinFlat) -> Self {
        IndexConfig::BinFlat(config)
    }
}

impl From<BinIvfFlat> for IndexConfig {
    fn from(config: BinIvfFlat) -> Self {
        IndexConfig::BinIvfFlat(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::metric::{BinaryMetric, FloatMetric};

    #[test]
    fn test_default_metric_per_family() {
        assert_eq!(
            Flat::new(None).unwrap().metric(),
            SimilarityMetric::Float(FloatMetric::L2)
        );
        assert_eq!(
            IvfFlat::new(64, None, None).unwrap().metric(),
            SimilarityMetric::Float(FloatMetric::L2)
        );
        assert_eq!(
            Hnsw::new(16, 200, 64, None).unwrap().metric(),
            SimilarityMetric::Float(FloatMetric::L2)
        );
        assert_eq!(
            BinFlat::new(None).unwrap().metric(),
            SimilarityMetric::Binary(BinaryMetric::Jaccard)
        );
        assert_eq!(
            BinIvfFlat::new(64, None, None).unwrap().metric(),
            SimilarityMetric::Binary(BinaryMetric::Jaccard)
        );
    }

    #[test]
    fn test_cross_family_metric_rejected() {
        let err = Flat::new(Some(BinaryMetric::Hamming.into())).unwrap_err();
        assert_eq!(
            err,
            IndexError::IncompatibleMetric {
                index: "FLAT",
                metric: "HAMMING",
            }
        );

        let err = BinIvfFlat::new(64, None, Some(FloatMetric::Ip.into())).unwrap_err();
        assert_eq!(
            err,
            IndexError::IncompatibleMetric {
                index: "BIN_IVF_FLAT",
                metric: "IP",
            }
        );

        assert!(IvfSq8::new(64, None, Some(BinaryMetric::Tanimoto.into())).is_err());
        assert!(Hnsw::new(16, 200, 64, Some(BinaryMetric::Jaccard.into())).is_err());
        assert!(BinFlat::new(Some(FloatMetric::L2.into())).is_err());
    }

    #[test]
    fn test_ivf_cluster_bounds() {
        assert!(IvfFlat::new(1, None, None).is_ok());
        assert!(IvfFlat::new(65536, None, None).is_ok());
        assert!(IvfFlat::new(0, None, None).is_err());
        assert!(IvfFlat::new(65537, None, None).is_err());

        assert!(IvfSq8::new(0, None, None).is_err());
        assert!(BinIvfFlat::new(65537, None, None).is_err());
        assert!(IvfPq::new(0, None, None, None, None).is_err());
    }

    #[test]
    fn test_probe_count_defaults_to_cluster_units() {
        let index = IvfFlat::new(128, None, None).unwrap();
        assert_eq!(index.probe_count(), 128);
        assert_eq!(index.query_params()["nprobe"], 128);

        let index = IvfSq8::new(32, Some(8), None).unwrap();
        assert_eq!(index.probe_count(), 8);
    }

    #[test]
    fn test_probe_count_capped_by_cluster_units() {
        assert!(IvfFlat::new(16, Some(16), None).is_ok());
        let err = IvfFlat::new(16, Some(17), None).unwrap_err();
        assert_eq!(
            err,
            IndexError::ParameterRange {
                field: "probe_count",
                value: 17,
                min: 1,
                max: 16,
            }
        );
        assert!(BinIvfFlat::new(16, Some(17), None).is_err());
    }

    #[test]
    fn test_ivf_pq_code_bits() {
        let index = IvfPq::new(100, Some(4), None, None, None).unwrap();
        assert_eq!(index.code_bits(), 8);
        assert_eq!(index.probe_count(), 100);

        assert!(IvfPq::new(100, None, None, Some(1), None).is_ok());
        assert!(IvfPq::new(100, None, None, Some(16), None).is_ok());
        assert!(IvfPq::new(100, None, None, Some(0), None).is_err());
        assert!(IvfPq::new(100, None, None, Some(17), None).is_err());
    }

    #[test]
    fn test_ivf_pq_build_params() {
        let index = IvfPq::new(100, Some(4), None, None, None).unwrap();
        let build = index.build_params();
        assert_eq!(build["nlist"], 100);
        assert_eq!(build["m"], 4);
        assert_eq!(build["nbits"], 8);
        assert_eq!(index.query_params()["nprobe"], 100);

        // omitted subquantizers pass through as null
        let index = IvfPq::new(100, None, None, None, None).unwrap();
        assert_eq!(index.build_params()["m"], Value::Null);
    }

    #[test]
    fn test_hnsw_bounds() {
        assert!(Hnsw::new(4, 200, 64, None).is_ok());
        assert!(Hnsw::new(64, 200, 64, None).is_ok());
        assert!(Hnsw::new(3, 200, 64, None).is_err());
        assert!(Hnsw::new(65, 200, 64, None).is_err());

        assert!(Hnsw::new(16, 8, 64, None).is_ok());
        assert!(Hnsw::new(16, 512, 64, None).is_ok());
        assert!(Hnsw::new(16, 7, 64, None).is_err());
        assert!(Hnsw::new(16, 513, 64, None).is_err());

        assert!(Hnsw::new(16, 200, 1, None).is_ok());
        assert!(Hnsw::new(16, 200, 32768, None).is_ok());
        assert!(Hnsw::new(16, 200, 0, None).is_err());
        assert!(Hnsw::new(16, 200, 32769, None).is_err());
    }

    #[test]
    fn test_hnsw_projections() {
        let index = Hnsw::new(16, 200, 64, None).unwrap();
        let build = index.build_params();
        assert_eq!(build.len(), 2);
        assert_eq!(build["M"], 16);
        assert_eq!(build["efConstruction"], 200);
        let query = index.query_params();
        assert_eq!(query.len(), 1);
        assert_eq!(query["ef"], 64);
    }

    #[test]
    fn test_flat_projections() {
        let index = Flat::new(Some(FloatMetric::Ip.into())).unwrap();
        assert!(index.build_params().is_empty());
        assert_eq!(index.query_params()["metric_type"], "IP");

        let index = BinFlat::new(Some(BinaryMetric::Superstructure.into())).unwrap();
        assert!(index.build_params().is_empty());
        assert_eq!(index.query_params()["metric_type"], "SUPERSTRUCTURE");
    }

    #[test]
    fn test_projections_are_pure() {
        let index = IvfFlat::new(128, None, None).unwrap();
        assert_eq!(index.build_params(), index.build_params());
        assert_eq!(index.query_params(), index.query_params());
    }

    #[test]
    fn test_index_config_delegation() {
        let config: IndexConfig = IvfFlat::new(128, None, None).unwrap().into();
        assert_eq!(config.kind(), IndexKind::IvfFlat);
        assert_eq!(config.index_type(), "IVF_FLAT");
        assert_eq!(config.build_params()["nlist"], 128);
        assert_eq!(config.query_params()["nprobe"], 128);
    }
}
