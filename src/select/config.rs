//! Selector configuration.

use crate::error::{Result, SelectError};

/// Configuration for a selection run.
///
/// # Examples
///
/// ```
/// use u_groupselect::select::SelectConfig;
///
/// let config = SelectConfig::default()
///     .with_min_group_size(2)
///     .with_top_k(5)
///     .with_parallel(false);
/// assert_eq!(config.min_group_size, 2);
/// assert_eq!(config.top_k, 5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SelectConfig {
    /// Fewest participants a chosen candidate may be assigned. Must be >= 1.
    pub min_group_size: usize,
    /// Whether to evaluate subsets in parallel using rayon.
    ///
    /// Has no effect unless the `parallel` feature is enabled. Results are
    /// identical either way.
    pub parallel: bool,
    /// How many ranked selections [`Selector::rank`](super::Selector::rank)
    /// keeps, best first.
    pub top_k: usize,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            min_group_size: 3,
            parallel: true,
            top_k: 3,
        }
    }
}

impl SelectConfig {
    /// Sets the minimum group size.
    pub fn with_min_group_size(mut self, n: usize) -> Self {
        self.min_group_size = n;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets how many ranked selections to keep.
    pub fn with_top_k(mut self, k: usize) -> Self {
        self.top_k = k;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.min_group_size == 0 {
            return Err(SelectError::InvalidConfig(
                "min_group_size must be at least 1".into(),
            ));
        }
        if self.top_k == 0 {
            return Err(SelectError::InvalidConfig("top_k must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = SelectConfig::default();
        assert_eq!(config.min_group_size, 3);
        assert!(config.parallel);
        assert_eq!(config.top_k, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = SelectConfig::default()
            .with_min_group_size(1)
            .with_parallel(false)
            .with_top_k(10);
        assert_eq!(config.min_group_size, 1);
        assert!(!config.parallel);
        assert_eq!(config.top_k, 10);
    }

    #[test]
    fn test_zero_min_group_size_rejected() {
        let err = SelectConfig::default()
            .with_min_group_size(0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, SelectError::InvalidConfig(_)));
    }

    #[test]
    fn test_zero_top_k_rejected() {
        assert!(SelectConfig::default().with_top_k(0).validate().is_err());
    }
}
