use crate::client::{path_id, query, BlockCypher};
use crate::context::CallContext;
use crate::error::BcyError;
use crate::types::{Meta, MetaKind};

impl BlockCypher {
    /// Metadata attached to an address, transaction, or block. `private`
    /// selects the token-scoped store instead of the public one.
    pub async fn get_meta(
        &self,
        ctx: &CallContext,
        hash: &str,
        kind: MetaKind,
        private: bool,
    ) -> Result<Meta, BcyError> {
        let hash = path_id("object hash", hash)?;
        let params = query([("private", private.to_string())]);
        let target = self.url(&format!("/{}/{hash}/meta", kind.collection()), Some(&params))?;
        self.fetch(ctx, target).await
    }

    /// Store `meta` on the object. Public metadata is immutable once set.
    pub async fn put_meta(
        &self,
        ctx: &CallContext,
        hash: &str,
        kind: MetaKind,
        private: bool,
        meta: &Meta,
    ) -> Result<(), BcyError> {
        let hash = path_id("object hash", hash)?;
        let params = query([("private", private.to_string())]);
        let target = self.url(&format!("/{}/{hash}/meta", kind.collection()), Some(&params))?;
        self.replace::<_, serde_json::Value>(ctx, target, meta)
            .await
            .map(drop)
    }

    /// Delete all private metadata on the object.
    pub async fn delete_meta(
        &self,
        ctx: &CallContext,
        hash: &str,
        kind: MetaKind,
    ) -> Result<(), BcyError> {
        let hash = path_id("object hash", hash)?;
        let target = self.url(&format!("/{}/{hash}/meta", kind.collection()), None)?;
        self.remove(ctx, target).await
    }
}
