//! Query interface between the validator and the repository database

use async_trait::async_trait;
use cstore_errors::Error;
use cstore_types::{ContentRecord, Node, Store};

/// Read-only view of the repository tables the validator needs
#[async_trait]
pub trait ContentCatalog: Send + Sync {
    /// Every content URL with its recorded size
    async fn content_records(&self) -> Result<Vec<ContentRecord>, Error>;

    /// Every store
    async fn stores(&self) -> Result<Vec<Store>, Error>;

    /// Id of the qualified name `local_name` in `namespace`
    async fn qname_id(&self, namespace: &str, local_name: &str) -> Result<Option<i64>, Error>;

    /// Node whose `qname_id` property points at the content URL identified
    /// by `short_form` and `checksum`
    async fn find_node(
        &self,
        short_form: &str,
        checksum: i64,
        qname_id: i64,
    ) -> Result<Option<Node>, Error>;
}
