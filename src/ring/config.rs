//! Ring search configuration.

/// Configuration parameters for the ring search.
///
/// The defaults run an exhaustive search with last-slot closure pruning.
///
/// # Examples
///
/// ```
/// use ring_layout::ring::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_node_limit(10_000)
///     .with_closure_lookahead(false);
/// assert_eq!(config.node_limit, Some(10_000));
/// assert!(!config.closure_lookahead);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Maximum number of node expansions before the search gives up.
    ///
    /// When reached, the result carries the best layout found so far and
    /// status [`SearchStatus::NodeLimit`](super::SearchStatus::NodeLimit).
    /// `None` explores the whole pruned tree (the default).
    pub node_limit: Option<u64>,

    /// Whether the last slot is checked against the anchor before
    /// recursing.
    ///
    /// Disabling it leaves the optimum unchanged; the skipped candidates
    /// are then rejected as infeasible leaves instead.
    pub closure_lookahead: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            node_limit: None,
            closure_lookahead: true,
        }
    }
}

impl SearchConfig {
    /// Sets the node expansion budget.
    pub fn with_node_limit(mut self, n: u64) -> Self {
        self.node_limit = Some(n);
        self
    }

    /// Enables or disables last-slot closure pruning.
    pub fn with_closure_lookahead(mut self, enabled: bool) -> Self {
        self.closure_lookahead = enabled;
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.node_limit == Some(0) {
            return Err("node_limit must be positive or None".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = SearchConfig::default();
        assert!(config.node_limit.is_none());
        assert!(config.closure_lookahead);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = SearchConfig::default()
            .with_node_limit(500)
            .with_closure_lookahead(false);
        assert_eq!(config.node_limit, Some(500));
        assert!(!config.closure_lookahead);
    }

    #[test]
    fn test_zero_node_limit_invalid() {
        let config = SearchConfig::default().with_node_limit(0);
        assert!(config.validate().is_err());
    }
}
