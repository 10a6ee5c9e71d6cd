/// Configuration for step vector construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepVectorConfig {
    /// Allows writes outside the current extent to grow the vector.
    /// A strict vector rejects them with an out-of-range error.
    pub relaxed: bool,
    /// Number of boundary slots reserved up front by the default store.
    pub capacity: usize,
}

impl StepVectorConfig {
    /// Returns a configuration for a vector whose extent may grow.
    pub fn relaxed() -> Self {
        Self {
            relaxed: true,
            ..Default::default()
        }
    }

    /// Reserves room for `capacity` boundaries.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}
