//! PostgreSQL implementation of the content catalog

use crate::catalog::ContentCatalog;
use async_trait::async_trait;
use cstore_errors::{Error, StateError};
use cstore_types::{ContentRecord, Node, Store};
use sqlx::postgres::{PgConnection, PgRow};
use sqlx::{query, Connection, Row};
use tokio::sync::Mutex;

const CONTENT_RECORDS_SQL: &str = "SELECT content_url, content_size FROM alf_content_url";

const STORES_SQL: &str = "SELECT id, protocol, identifier FROM alf_store";

const QNAME_ID_SQL: &str = "SELECT q.id FROM alf_qname q
     JOIN alf_namespace ns ON q.ns_id = ns.id
     WHERE q.local_name = $1 AND ns.uri = $2";

const FIND_NODE_SQL: &str = "SELECT n.id, n.store_id, n.uuid
     FROM alf_content_url cu
     JOIN alf_content_data cd ON cd.content_url_id = cu.id
     JOIN alf_node_properties np ON np.long_value = cd.id AND np.qname_id = $3
     JOIN alf_node n ON n.id = np.node_id
     WHERE cu.content_url_short = $1 AND cu.content_url_crc = $2
     LIMIT 1";

/// Content catalog backed by the repository database
pub struct PostgresCatalog {
    conn: Mutex<PgConnection>,
}

impl PostgresCatalog {
    #[must_use]
    pub fn new(conn: PgConnection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    /// Close the underlying connection
    pub async fn close(self) {
        if let Err(e) = self.conn.into_inner().close().await {
            tracing::warn!(error = %e, "failed to close database connection");
        }
    }
}

fn content_record_from_row(row: &PgRow) -> Result<ContentRecord, sqlx::Error> {
    let content_url: String = row.try_get("content_url")?;
    let content_size: i64 = row.try_get("content_size")?;
    Ok(ContentRecord::new(content_url, content_size))
}

fn store_from_row(row: &PgRow) -> Result<Store, sqlx::Error> {
    Ok(Store {
        id: row.try_get("id")?,
        protocol: row.try_get("protocol")?,
        identifier: row.try_get("identifier")?,
    })
}

fn node_from_row(row: &PgRow) -> Result<Node, sqlx::Error> {
    Ok(Node {
        id: row.try_get("id")?,
        store_id: row.try_get("store_id")?,
        uuid: row.try_get("uuid")?,
    })
}

#[async_trait]
impl ContentCatalog for PostgresCatalog {
    async fn content_records(&self) -> Result<Vec<ContentRecord>, Error> {
        let rows = query(CONTENT_RECORDS_SQL)
            .fetch_all(&mut *self.conn.lock().await)
            .await
            .map_err(|e| StateError::query_failed("content_records", &e))?;

        let records = rows
            .iter()
            .map(content_record_from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| StateError::query_failed("content_records", &e))?;

        tracing::debug!(count = records.len(), "loaded content records");
        Ok(records)
    }

    async fn stores(&self) -> Result<Vec<Store>, Error> {
        let rows = query(STORES_SQL)
            .fetch_all(&mut *self.conn.lock().await)
            .await
            .map_err(|e| StateError::query_failed("stores", &e))?;

        let stores = rows
            .iter()
            .map(store_from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| StateError::query_failed("stores", &e))?;
        Ok(stores)
    }

    async fn qname_id(&self, namespace: &str, local_name: &str) -> Result<Option<i64>, Error> {
        let row = query(QNAME_ID_SQL)
            .bind(local_name)
            .bind(namespace)
            .fetch_optional(&mut *self.conn.lock().await)
            .await
            .map_err(|e| StateError::query_failed("qname_id", &e))?;

        match row {
            Some(r) => {
                let id: i64 = r
                    .try_get("id")
                    .map_err(|e| StateError::query_failed("qname_id", &e))?;
                Ok(Some(id))
            }
            None => Ok(None),
        }
    }

    async fn find_node(
        &self,
        short_form: &str,
        checksum: i64,
        qname_id: i64,
    ) -> Result<Option<Node>, Error> {
        let row = query(FIND_NODE_SQL)
            .bind(short_form)
            .bind(checksum)
            .bind(qname_id)
            .fetch_optional(&mut *self.conn.lock().await)
            .await
            .map_err(|e| StateError::query_failed("find_node", &e))?;

        row.as_ref()
            .map(node_from_row)
            .transpose()
            .map_err(|e| StateError::query_failed("find_node", &e).into())
    }
}
