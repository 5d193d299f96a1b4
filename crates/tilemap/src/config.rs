use crate::geometry::MapDimensions;

/// What box compilation does when there are no boxes to size the map from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EmptyInputPolicy {
    /// Fail with [`MapError::EmptyBoxList`](crate::MapError::EmptyBoxList).
    #[default]
    Reject,
    /// Produce a default-filled map of at least this size.
    ///
    /// With boxes present the inferred extent is grown to this floor.
    MinimumSize(MapDimensions),
}

/// Tunable parameters for compiling boxes into a grid.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompileConfig {
    pub empty_policy: EmptyInputPolicy,
    /// Skip rasterizing boxes whose tile equals the default fill.
    /// Switching this off changes cost only, never the resulting grid.
    pub skip_default_writes: bool,
}

impl CompileConfig {
    pub const DEFAULT_SKIP_DEFAULT_WRITES: bool = true;

    pub fn new() -> Self {
        Self {
            empty_policy: EmptyInputPolicy::default(),
            skip_default_writes: Self::DEFAULT_SKIP_DEFAULT_WRITES,
        }
    }

    #[must_use]
    pub fn with_empty_policy(mut self, empty_policy: EmptyInputPolicy) -> Self {
        self.empty_policy = empty_policy;
        self
    }

    #[must_use]
    pub fn with_skip_default_writes(mut self, skip: bool) -> Self {
        self.skip_default_writes = skip;
        self
    }
}

impl Default for CompileConfig {
    fn default() -> Self {
        Self::new()
    }
}
