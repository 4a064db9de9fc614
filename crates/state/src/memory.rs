//! In-memory content catalog for tests

use crate::catalog::ContentCatalog;
use async_trait::async_trait;
use cstore_config::constants::{CONTENT_MODEL_NAMESPACE, CONTENT_QNAME};
use cstore_errors::{Error, StateError};
use cstore_types::{ContentRecord, ContentUrl, Node, Store};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Clone)]
struct ContentLink {
    short_form: String,
    checksum: i64,
    qname_id: i64,
    node: Node,
}

/// Catalog holding its tables in memory and counting the queries it serves
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    records: Vec<ContentRecord>,
    stores: Vec<Store>,
    qnames: HashMap<(String, String), i64>,
    links: Vec<ContentLink>,
    failing: bool,
    store_queries: AtomicUsize,
    qname_queries: AtomicUsize,
    node_queries: AtomicUsize,
}

impl MemoryCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_record(mut self, record: ContentRecord) -> Self {
        self.records.push(record);
        self
    }

    #[must_use]
    pub fn with_store(mut self, store: Store) -> Self {
        self.stores.push(store);
        self
    }

    #[must_use]
    pub fn with_qname(mut self, namespace: &str, local_name: &str, id: i64) -> Self {
        self.qnames
            .insert((namespace.to_string(), local_name.to_string()), id);
        self
    }

    /// Register the `content` qualifier of the content model
    #[must_use]
    pub fn with_content_qname(self, id: i64) -> Self {
        self.with_qname(CONTENT_MODEL_NAMESPACE, CONTENT_QNAME, id)
    }

    /// Link `node` to `content_url` through a property with `qname_id`
    #[must_use]
    pub fn with_owning_node(mut self, content_url: &ContentUrl, qname_id: i64, node: Node) -> Self {
        self.links.push(ContentLink {
            short_form: content_url.short_form().to_string(),
            checksum: content_url.checksum(),
            qname_id,
            node,
        });
        self
    }

    /// Make every query fail
    #[must_use]
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    #[must_use]
    pub fn store_queries(&self) -> usize {
        self.store_queries.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn qname_queries(&self) -> usize {
        self.qname_queries.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn node_queries(&self) -> usize {
        self.node_queries.load(Ordering::Relaxed)
    }

    fn check(&self, query: &str) -> Result<(), Error> {
        if self.failing {
            return Err(StateError::query_failed(query, &"connection reset by peer").into());
        }
        Ok(())
    }
}

#[async_trait]
impl ContentCatalog for MemoryCatalog {
    async fn content_records(&self) -> Result<Vec<ContentRecord>, Error> {
        self.check("content_records")?;
        Ok(self.records.clone())
    }

    async fn stores(&self) -> Result<Vec<Store>, Error> {
        self.store_queries.fetch_add(1, Ordering::Relaxed);
        self.check("stores")?;
        Ok(self.stores.clone())
    }

    async fn qname_id(&self, namespace: &str, local_name: &str) -> Result<Option<i64>, Error> {
        self.qname_queries.fetch_add(1, Ordering::Relaxed);
        self.check("qname_id")?;
        Ok(self
            .qnames
            .get(&(namespace.to_string(), local_name.to_string()))
            .copied())
    }

    async fn find_node(
        &self,
        short_form: &str,
        checksum: i64,
        qname_id: i64,
    ) -> Result<Option<Node>, Error> {
        self.node_queries.fetch_add(1, Ordering::Relaxed);
        self.check("find_node")?;
        Ok(self
            .links
            .iter()
            .find(|link| {
                link.short_form == short_form
                    && link.checksum == checksum
                    && link.qname_id == qname_id
            })
            .map(|link| link.node.clone()))
    }
}
