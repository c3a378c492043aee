//! Vector distance function rendering

use serde::{Deserialize, Serialize};
use std::fmt;

/// SQL distance functions the server exposes for vector columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistanceFn {
    /// Euclidean distance (L2 norm)
    L2Distance,
    /// Cosine distance (1 - cosine similarity)
    CosineDistance,
    /// Negative inner product
    InnerProduct,
}

impl DistanceFn {
    /// SQL function name.
    pub fn function_name(&self) -> &'static str {
        match self {
            DistanceFn::L2Distance => "l2_distance",
            DistanceFn::CosineDistance => "cosine_distance",
            DistanceFn::InnerProduct => "inner_product",
        }
    }

    /// Short metric keyword used in index parameters, e.g. `distance=l2`.
    pub fn metric_keyword(&self) -> &'static str {
        match self {
            DistanceFn::L2Distance => "l2",
            DistanceFn::CosineDistance => "cosine",
            DistanceFn::InnerProduct => "inner_product",
        }
    }

    /// Render the SQL call text over arbitrary argument expressions.
    pub fn render_call(&self, args: &[&str]) -> String {
        format!("{}({})", self.function_name(), args.join(", "))
    }
}

impl fmt::Display for DistanceFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.function_name())
    }
}

impl Default for DistanceFn {
    fn default() -> Self {
        DistanceFn::L2Distance
    }
}
