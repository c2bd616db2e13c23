use crate::client::{path_id, BlockCypher};
use crate::context::CallContext;
use crate::error::BcyError;
use crate::types::PayFwd;

impl BlockCypher {
    /// Set up payment forwarding to `payment.destination`. The result holds
    /// the service-assigned id and the `input_address` to pay into.
    pub async fn create_payfwd(
        &self,
        ctx: &CallContext,
        payment: &PayFwd,
    ) -> Result<PayFwd, BcyError> {
        let target = self.url("/payments", None)?;
        self.create(ctx, target, Some(payment)).await
    }

    pub async fn list_payfwds(&self, ctx: &CallContext) -> Result<Vec<PayFwd>, BcyError> {
        let target = self.url("/payments", None)?;
        self.fetch(ctx, target).await
    }

    pub async fn get_payfwd(&self, ctx: &CallContext, id: &str) -> Result<PayFwd, BcyError> {
        let id = path_id("payment id", id)?;
        let target = self.url(&format!("/payments/{id}"), None)?;
        self.fetch(ctx, target).await
    }

    pub async fn delete_payfwd(&self, ctx: &CallContext, id: &str) -> Result<(), BcyError> {
        let id = path_id("payment id", id)?;
        let target = self.url(&format!("/payments/{id}"), None)?;
        self.remove(ctx, target).await
    }
}
