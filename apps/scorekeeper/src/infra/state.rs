use crate::config::store::{store_kind_from_env, StoreKind};
use crate::error::AppError;
use crate::infra::db::connect_store;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used by embedding apps and tests)
pub struct StateBuilder {
    store: Option<StoreKind>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self { store: None }
    }

    pub fn with_store(mut self, kind: StoreKind) -> Self {
        self.store = Some(kind);
        self
    }

    /// Connects and migrates; without an explicit store, `WHIST_DB` decides.
    pub async fn build(self) -> Result<AppState, AppError> {
        let kind = match self.store {
            Some(kind) => kind,
            None => store_kind_from_env()?,
        };
        let conn = connect_store(&kind).await?;
        Ok(AppState::new(conn))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
