use crate::client::{path_id, BlockCypher};
use crate::context::CallContext;
use crate::error::BcyError;
use crate::types::Hook;

impl BlockCypher {
    /// Register a WebHook; the returned copy carries the service-assigned id.
    pub async fn create_hook(&self, ctx: &CallContext, hook: &Hook) -> Result<Hook, BcyError> {
        let target = self.url("/hooks", None)?;
        self.create(ctx, target, Some(hook)).await
    }

    pub async fn list_hooks(&self, ctx: &CallContext) -> Result<Vec<Hook>, BcyError> {
        let target = self.url("/hooks", None)?;
        self.fetch(ctx, target).await
    }

    pub async fn get_hook(&self, ctx: &CallContext, id: &str) -> Result<Hook, BcyError> {
        let id = path_id("hook id", id)?;
        let target = self.url(&format!("/hooks/{id}"), None)?;
        self.fetch(ctx, target).await
    }

    pub async fn delete_hook(&self, ctx: &CallContext, id: &str) -> Result<(), BcyError> {
        let id = path_id("hook id", id)?;
        let target = self.url(&format!("/hooks/{id}"), None)?;
        self.remove(ctx, target).await
    }
}
