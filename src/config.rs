use serde::Deserialize;
use serde::Serialize;

/// Parameters bounding the refinement of a tree.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// The maximum depth of the tree. Should be high enough for the
    /// refinement criterion to run to completion, but bounded to prevent
    /// "infinite subdivisions" when a criterion keeps firing on ever
    /// smaller cells.
    pub max_depth: usize,
    /// The smallest cell side length refinement is allowed to produce.
    /// Subdivisions that would create finer children are skipped. Zero
    /// disables the bound.
    pub min_side_length: f64,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            max_depth: 20,
            min_side_length: 0.0,
        }
    }
}
