//! Reverse lookup from content URLs to node references
//!
//! The store table and the content qualifier id are fetched at most once per
//! resolver and reused for every lookup of the run.

use crate::catalog::ContentCatalog;
use cstore_config::constants::{CONTENT_MODEL_NAMESPACE, CONTENT_QNAME};
use cstore_errors::{Error, StateError};
use cstore_types::{ContentUrl, Node, NodeRef, Store};
use std::collections::HashMap;
use tokio::sync::OnceCell;

/// Resolves content URLs to the nodes that own them
pub struct IdentifierResolver<'a, C: ContentCatalog + ?Sized> {
    catalog: &'a C,
    stores: OnceCell<HashMap<i64, Store>>,
    content_qid: OnceCell<i64>,
}

impl<'a, C: ContentCatalog + ?Sized> IdentifierResolver<'a, C> {
    pub fn new(catalog: &'a C) -> Self {
        Self {
            catalog,
            stores: OnceCell::new(),
            content_qid: OnceCell::new(),
        }
    }

    /// All stores keyed by id
    ///
    /// # Errors
    ///
    /// Returns an error if the store query fails.
    pub async fn resolve_store_table(&self) -> Result<&HashMap<i64, Store>, Error> {
        self.stores
            .get_or_try_init(|| async {
                let stores = self.catalog.stores().await?;
                tracing::debug!(count = stores.len(), "cached store table");
                Ok::<_, Error>(stores.into_iter().map(|s| (s.id, s)).collect())
            })
            .await
    }

    /// Id of the `content` property qualifier
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the qualifier does not exist.
    pub async fn content_qualifier_id(&self) -> Result<i64, Error> {
        self.content_qid
            .get_or_try_init(|| async {
                let id = self
                    .catalog
                    .qname_id(CONTENT_MODEL_NAMESPACE, CONTENT_QNAME)
                    .await?
                    .ok_or_else(|| StateError::QualifierNotFound {
                        namespace: CONTENT_MODEL_NAMESPACE.to_string(),
                        local_name: CONTENT_QNAME.to_string(),
                    })?;
                tracing::debug!(qname_id = id, "cached content qualifier id");
                Ok::<_, Error>(id)
            })
            .await
            .copied()
    }

    /// Node whose content property points at `content_url`
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails. No matching node is `Ok(None)`.
    pub async fn find_owning_node(&self, content_url: &ContentUrl) -> Result<Option<Node>, Error> {
        let qname_id = self.content_qualifier_id().await?;
        let short_form = content_url.short_form();
        let checksum = content_url.checksum();

        let node = self
            .catalog
            .find_node(short_form, checksum, qname_id)
            .await?;

        tracing::debug!(
            content_url = %content_url,
            short_form,
            checksum,
            found = node.is_some(),
            "owning node lookup"
        );
        Ok(node)
    }

    /// Reference string for `node`, or the "no node" sentinel
    ///
    /// # Errors
    ///
    /// Returns an error if the store table cannot be loaded or does not
    /// contain the node's store.
    pub async fn format_reference(&self, node: Option<&Node>) -> Result<NodeRef, Error> {
        let Some(node) = node else {
            return Ok(NodeRef::NotFound);
        };

        let stores = self.resolve_store_table().await?;
        let store = stores
            .get(&node.store_id)
            .ok_or_else(|| StateError::StoreNotFound {
                store_id: node.store_id,
                node_uuid: node.uuid.clone(),
            })?;
        Ok(NodeRef::for_node(store, node))
    }

    /// Look up the owning node of `content_url` and format its reference
    ///
    /// # Errors
    ///
    /// Returns an error if any lookup fails.
    pub async fn node_reference(&self, content_url: &ContentUrl) -> Result<NodeRef, Error> {
        let node = self.find_owning_node(content_url).await?;
        self.format_reference(node.as_ref()).await
    }
}
