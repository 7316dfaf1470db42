use std::sync::Arc;

use once_cell::sync::OnceCell;
use tracing::info;

use super::{HubSummarizer, SummarizationModel};
use crate::core::config::AppConfig;
use crate::errors::AppError;

type ModelFactory = dyn Fn() -> Result<Arc<dyn SummarizationModel>, AppError> + Send + Sync;

/// Process-wide summarization model, built on first use and kept for the
/// lifetime of the process.
///
/// A failed initialization leaves the holder empty, so the next request
/// tries again.
pub struct LazySummarizer {
    cell: OnceCell<Arc<dyn SummarizationModel>>,
    factory: Box<ModelFactory>,
}

impl LazySummarizer {
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn() -> Result<Arc<dyn SummarizationModel>, AppError> + Send + Sync + 'static,
    {
        Self {
            cell: OnceCell::new(),
            factory: Box::new(factory),
        }
    }

    /// Holder that builds a [`HubSummarizer`] from `config` on first use.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        let config = config.clone();
        Self::new(move || {
            let model = HubSummarizer::from_config(&config)?;
            info!(model_url = %model.model_url(), "Initialized summarization model");
            Ok(Arc::new(model) as Arc<dyn SummarizationModel>)
        })
    }

    /// Returns the model, initializing it if this is the first call.
    pub fn get(&self) -> Result<Arc<dyn SummarizationModel>, AppError> {
        self.cell.get_or_try_init(|| (self.factory)()).cloned()
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}
