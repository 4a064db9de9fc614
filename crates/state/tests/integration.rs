//! Integration tests for content catalog lookups

#[cfg(test)]
mod tests {
    use cstore_errors::{Error, StateError};
    use cstore_state::{ContentCatalog, IdentifierResolver, MemoryCatalog};
    use cstore_types::{ContentRecord, ContentUrl, Node, NodeRef, Store};

    fn catalog_with_two_stores() -> MemoryCatalog {
        MemoryCatalog::new()
            .with_store(Store {
                id: 1,
                protocol: "user".into(),
                identifier: "alfrescoUserStore".into(),
            })
            .with_store(Store {
                id: 6,
                protocol: "workspace".into(),
                identifier: "SpacesStore".into(),
            })
            .with_content_qname(51)
    }

    #[tokio::test]
    async fn test_resolve_across_stores() {
        let in_workspace = ContentUrl::new("store://2024/01/01/aaaaaaaaaaaa.bin");
        let in_user = ContentUrl::new("store://2024/01/02/bbbbbbbbbbbb.bin");
        let catalog = catalog_with_two_stores()
            .with_owning_node(
                &in_workspace,
                51,
                Node {
                    id: 10,
                    store_id: 6,
                    uuid: "abc-123".into(),
                },
            )
            .with_owning_node(
                &in_user,
                51,
                Node {
                    id: 11,
                    store_id: 1,
                    uuid: "def-456".into(),
                },
            );
        let resolver = IdentifierResolver::new(&catalog);

        assert_eq!(
            resolver.node_reference(&in_workspace).await.unwrap(),
            NodeRef::Resolved("workspace://SpacesStore/abc-123".into())
        );
        assert_eq!(
            resolver.node_reference(&in_user).await.unwrap(),
            NodeRef::Resolved("user://alfrescoUserStore/def-456".into())
        );
        assert_eq!(catalog.store_queries(), 1);
        assert_eq!(catalog.qname_queries(), 1);
        assert_eq!(catalog.node_queries(), 2);
    }

    #[tokio::test]
    async fn test_same_suffix_different_checksum_does_not_match() {
        let owned = ContentUrl::new("store://2024/01/01/abc123456789.bin");
        let other = ContentUrl::new("store://2023/12/31/abc123456789.bin");
        assert_eq!(owned.short_form(), other.short_form());

        let catalog = catalog_with_two_stores().with_owning_node(
            &owned,
            51,
            Node {
                id: 10,
                store_id: 6,
                uuid: "abc-123".into(),
            },
        );
        let resolver = IdentifierResolver::new(&catalog);

        assert!(resolver.find_owning_node(&other).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_records_come_back_in_insertion_order() {
        let catalog = MemoryCatalog::new()
            .with_record(ContentRecord::new("store://a/1.bin", 1))
            .with_record(ContentRecord::new("store://a/2.bin", 2));
        let records = catalog.content_records().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].content_size, 2);
    }

    #[tokio::test]
    async fn test_query_failure_propagates() {
        let catalog = catalog_with_two_stores().failing();
        let resolver = IdentifierResolver::new(&catalog);

        let err = resolver
            .node_reference(&ContentUrl::new("store://a/1.bin"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::State(StateError::QueryFailed { .. })));
    }
}
