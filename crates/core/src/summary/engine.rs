//! Statement engine facade.

use std::sync::Arc;

use coop_shared::AppConfig;
use coop_shared::config::ColumnPriority;

use super::builder::AggregationBuilder;
use super::cache::AggregationCache;
use super::types::MonthlyAggregation;
use crate::classify::{Classifier, ClassifyError};
use crate::render::{
    self, AccordionState, AccordionView, BankStatement, DetailGrid, RenderOutcome, YearlyRollup,
};
use crate::snapshot::StatementSnapshot;

/// Owns the classifier, the declared column order and the aggregation cache.
///
/// Every render method goes through [`StatementEngine::aggregate`], so all
/// views of one snapshot share one aggregation.
#[derive(Debug, Clone)]
pub struct StatementEngine {
    classifier: Classifier,
    priority: ColumnPriority,
    cache: AggregationCache,
}

impl StatementEngine {
    /// Creates an engine from its parts.
    #[must_use]
    pub fn new(classifier: Classifier, priority: ColumnPriority, cache: AggregationCache) -> Self {
        Self {
            classifier,
            priority,
            cache,
        }
    }

    /// Creates an engine from application configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured classification rule is invalid.
    pub fn from_config(config: &AppConfig) -> Result<Self, ClassifyError> {
        let classifier = Classifier::from_rules(&config.statement.classification)?;
        Ok(Self::new(
            classifier,
            config.statement.column_priority.clone(),
            AggregationCache::from_config(&config.cache),
        ))
    }

    /// The compiled classifier.
    #[must_use]
    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// The aggregation cache.
    #[must_use]
    pub fn cache(&self) -> &AggregationCache {
        &self.cache
    }

    /// Returns the aggregation for `snapshot`, built at most once per content.
    #[must_use]
    pub fn aggregate(&self, snapshot: &StatementSnapshot) -> Arc<MonthlyAggregation> {
        self.cache.get_or_build(snapshot, &self.builder())
    }

    /// Drops the cached aggregation of `snapshot`.
    pub fn invalidate(&self, snapshot: &StatementSnapshot) {
        self.cache.invalidate(snapshot, &self.builder());
    }

    fn builder(&self) -> AggregationBuilder<'_> {
        AggregationBuilder::new(&self.classifier, &self.priority)
    }

    /// Monthly detail grid.
    #[must_use]
    pub fn detail_grid(&self, snapshot: &StatementSnapshot) -> RenderOutcome<DetailGrid> {
        render::detail_grid(&self.aggregate(snapshot))
    }

    /// Condensed summary grid.
    #[must_use]
    pub fn condensed_grid(&self, snapshot: &StatementSnapshot) -> RenderOutcome<DetailGrid> {
        render::condensed_grid(&self.aggregate(snapshot))
    }

    /// Accordion view with the host's toggle state.
    #[must_use]
    pub fn accordion(
        &self,
        snapshot: &StatementSnapshot,
        state: &AccordionState,
    ) -> RenderOutcome<AccordionView> {
        render::accordion(&self.aggregate(snapshot), state)
    }

    /// Bank-statement layout.
    #[must_use]
    pub fn bank_statement(&self, snapshot: &StatementSnapshot) -> RenderOutcome<BankStatement> {
        render::bank_statement(&self.aggregate(snapshot), &self.classifier)
    }

    /// Yearly roll-up with the chart-of-accounts footer.
    #[must_use]
    pub fn yearly_rollup(&self, snapshot: &StatementSnapshot) -> RenderOutcome<YearlyRollup> {
        render::yearly_rollup(
            &self.aggregate(snapshot),
            snapshot.chart_of_accounts.as_ref(),
        )
    }
}

impl Default for StatementEngine {
    fn default() -> Self {
        Self::new(
            Classifier::standard(),
            ColumnPriority::default(),
            AggregationCache::new(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use coop_shared::config::ClassificationRule;

    #[test]
    fn test_views_share_one_aggregation() {
        let engine = StatementEngine::default();
        let snapshot = fixtures::two_months();

        let first = engine.aggregate(&snapshot);
        let _ = engine.detail_grid(&snapshot);
        let _ = engine.bank_statement(&snapshot);
        let again = engine.aggregate(&snapshot);

        assert!(Arc::ptr_eq(&first, &again));
    }

    #[test]
    fn test_invalidate_rebuilds() {
        let engine = StatementEngine::default();
        let snapshot = fixtures::two_months();

        let first = engine.aggregate(&snapshot);
        engine.invalidate(&snapshot);
        engine.cache().run_pending_tasks();
        let rebuilt = engine.aggregate(&snapshot);

        assert!(!Arc::ptr_eq(&first, &rebuilt));
        assert_eq!(*first, *rebuilt);
    }

    #[test]
    fn test_from_config_rejects_bad_pattern() {
        let mut config = AppConfig::default();
        config.statement.classification = vec![ClassificationRule::new("holiday", "(unclosed")];

        assert!(matches!(
            StatementEngine::from_config(&config),
            Err(ClassifyError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_from_config_defaults() {
        let engine = StatementEngine::from_config(&AppConfig::default()).unwrap();
        let statement = engine.bank_statement(&fixtures::two_months());

        assert!(!statement.is_no_data());
        assert!(engine.yearly_rollup(&fixtures::empty()).is_no_data());
    }
}
