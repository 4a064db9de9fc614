//! Integration tests for types crate

#[cfg(test)]
mod tests {
    use cstore_types::*;
    use proptest::prelude::*;

    #[test]
    fn test_report_json_shape() {
        let mut report = ValidationReport::default();
        report.record(ValidationOutcome::Orphan(Orphan {
            path: "/cs/2024/01/01/abc.bin".into(),
            reference: NodeRef::Resolved("workspace://SpacesStore/abc-123".into()),
        }));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["total"], 1);
        assert_eq!(json["validated"], 0);
        assert_eq!(json["orphans"][0]["path"], "/cs/2024/01/01/abc.bin");
        assert_eq!(json["orphans"][0]["reference"]["kind"], "resolved");
        assert_eq!(
            json["orphans"][0]["reference"]["reference"],
            "workspace://SpacesStore/abc-123"
        );
    }

    #[test]
    fn test_content_url_serializes_as_string() {
        let record = ContentRecord::new("store://2024/01/01/abc.bin", 100);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["content_url"], "store://2024/01/01/abc.bin");
        assert_eq!(json["content_size"], 100);
    }

    proptest! {
        #[test]
        fn checksum_is_deterministic(url in "store://[a-z0-9/]{0,40}\\.bin") {
            let a = ContentUrl::new(url.clone());
            let b = ContentUrl::new(url);
            prop_assert_eq!(a.checksum(), b.checksum());
        }

        #[test]
        fn short_form_is_suffix(url in "\\PC{0,40}") {
            let content_url = ContentUrl::new(url.clone());
            let short = content_url.short_form();
            prop_assert!(url.ends_with(short));
            prop_assert_eq!(short.chars().count(), url.chars().count().min(SHORT_FORM_LEN));
        }
    }
}
