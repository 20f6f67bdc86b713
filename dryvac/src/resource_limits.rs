/// Resource limits applied while loading DRY source
///
/// Expansion itself is unbounded: a template's fan-out is the product of its
/// group sizes and is left to the author to keep in check.
#[derive(Debug, Clone)]
pub struct ResourceLimits {
    /// Maximum source file size in bytes
    /// Real usage: ~10KB, Limit: 5MB (500x)
    pub max_file_size_bytes: usize,
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            max_file_size_bytes: 5 * 1024 * 1024, // 5 MB
        }
    }
}

impl ResourceLimits {
    /// Create a new ResourceLimits with default values
    pub fn new() -> Self {
        Self::default()
    }
}
