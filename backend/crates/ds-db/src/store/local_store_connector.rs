use crate::{LocalStore, Result as DbErrorResult};

use ds_core::Term;

use async_trait::async_trait;

/// Opens the course database for `(group, term)`.
#[async_trait]
pub trait LocalStoreConnector: Send + Sync {
    type Store: LocalStore;

    async fn connect(&self, group: &str, term: Term) -> DbErrorResult<Self::Store>;
}
