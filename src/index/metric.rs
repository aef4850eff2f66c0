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

//! Similarity metric taxonomy
//!
//! Metrics are split into two disjoint families with no shared members:
//! - Floating: defined over dense floating-point vectors
//! - Binary: defined over bit-packed binary vectors
//!
//! The family of a [`SimilarityMetric`] is determined by which enumeration
//! the value is drawn from, so the lookup is O(1) and cannot drift out of
//! sync with the member lists.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::IndexError;

/// Metrics defined over dense floating-point vectors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum FloatMetric {
    /// Euclidean (L2) distance
    L2,
    /// Inner product similarity
    Ip,
}

impl FloatMetric {
    /// Wire name expected by the backend for `metric_type`.
    pub const fn as_str(self) -> &'static str {
        match self {
            FloatMetric::L2 => "L2",
            FloatMetric::Ip => "IP",
        }
    }
}

/// Metrics defined over bit-packed binary vectors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum BinaryMetric {
    /// Jaccard similarity
    Jaccard,
    /// Tanimoto coefficient
    Tanimoto,
    /// Hamming distance
    Hamming,
    /// Substructure containment
    Substructure,
    /// Superstructure containment
    Superstructure,
}

impl BinaryMetric {
    /// Wire name expected by the backend for `metric_type`.
    pub const fn as_str(self) -> &'static str {
        match self {
            BinaryMetric::Jaccard => "JACCARD",
            BinaryMetric::Tanimoto => "TANIMOTO",
            BinaryMetric::Hamming => "HAMMING",
            BinaryMetric::Substructure => "SUBSTRUCTURE",
            BinaryMetric::Superstructure => "SUPERSTRUCTURE",
        }
    }
}

/// The two disjoint metric families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricFamily {
    /// Metrics over dense floating-point vectors
    Floating,
    /// Metrics over bit-packed binary vectors
    Binary,
}

impl fmt::Display for MetricFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricFamily::Floating => write!(f, "floating"),
            MetricFamily::Binary => write!(f, "binary"),
        }
    }
}

/// A similarity metric from either family.
///
/// The arm a value sits in is its family classification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum SimilarityMetric {
    Float(FloatMetric),
    Binary(BinaryMetric),
}

impl SimilarityMetric {
    /// The family this metric belongs to.
    pub const fn family(self) -> MetricFamily {
        match self {
            SimilarityMetric::Float(_) => MetricFamily::Floating,
            SimilarityMetric::Binary(_) => MetricFamily::Binary,
        }
    }

    /// Wire name expected by the backend for `metric_type`.
    pub const fn as_str(self) -> &'static str {
        match self {
            SimilarityMetric::Float(m) => m.as_str(),
            SimilarityMetric::Binary(m) => m.as_str(),
        }
    }
}

impl From<FloatMetric> for SimilarityMetric {
    fn from(metric: FloatMetric) -> Self {
        SimilarityMetric::Float(metric)
    }
}

impl From<BinaryMetric> for SimilarityMetric {
    fn from(metric: BinaryMetric) -> Self {
        SimilarityMetric::Binary(metric)
    }
}

impl fmt::Display for SimilarityMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SimilarityMetric {
    type Err = IndexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "L2" => Ok(FloatMetric::L2.into()),
            "IP" => Ok(FloatMetric::Ip.into()),
            "JACCARD" => Ok(BinaryMetric::Jaccard.into()),
            "TANIMOTO" => Ok(BinaryMetric::Tanimoto.into()),
            "HAMMING" => Ok(BinaryMetric::Hamming.into()),
            "SUBSTRUCTURE" => Ok(BinaryMetric::Substructure.into()),
            "SUPERSTRUCTURE" => Ok(BinaryMetric::Superstructure.into()),
            other => Err(IndexError::UnknownMetric(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_lookup() {
        assert_eq!(
            SimilarityMetric::from(FloatMetric::L2).family(),
            MetricFamily::Floating
        );
        assert_eq!(
            SimilarityMetric::from(FloatMetric::Ip).family(),
            MetricFamily::Floating
        );
        assert_eq!(
            SimilarityMetric::from(BinaryMetric::Jaccard).family(),
            MetricFamily::Binary
        );
        assert_eq!(
            SimilarityMetric::from(BinaryMetric::Hamming).family(),
            MetricFamily::Binary
        );
    }

    #[test]
    fn test_wire_names_round_trip() {
        let metrics = [
            SimilarityMetric::from(FloatMetric::L2),
            SimilarityMetric::from(FloatMetric::Ip),
            SimilarityMetric::from(BinaryMetric::Jaccard),
            SimilarityMetric::from(BinaryMetric::Tanimoto),
            SimilarityMetric::from(BinaryMetric::Hamming),
            SimilarityMetric::from(BinaryMetric::Substructure),
            SimilarityMetric::from(BinaryMetric::Superstructure),
        ];
        for metric in metrics {
            assert_eq!(metric.as_str().parse::<SimilarityMetric>(), Ok(metric));
        }
    }

    #[test]
    fn test_unknown_metric_rejected() {
        let err = "COSINE".parse::<SimilarityMetric>().unwrap_err();
        assert_eq!(err, IndexError::UnknownMetric("COSINE".to_string()));
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let metric = SimilarityMetric::from(FloatMetric::Ip);
        assert_eq!(serde_json::to_value(metric).unwrap(), "IP");
        let back: SimilarityMetric = serde_json::from_str("\"JACCARD\"").unwrap();
        assert_eq!(back, SimilarityMetric::from(BinaryMetric::Jaccard));
    }
}
