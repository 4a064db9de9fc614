//! Fixed repository schema names and default settings
//!
//! The namespace and qualifier names are part of the repository data model
//! and are deliberately not configurable.

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5432;
pub const DEFAULT_DBNAME: &str = "alfresco";
pub const DEFAULT_USERNAME: &str = "alfresco";
pub const DEFAULT_PASSWORD: &str = "alfresco";

pub const DEFAULT_CONTENT_STORE: &str = "/opt/alfresco/alf_data/contentstore";

/// Namespace of the content model
pub const CONTENT_MODEL_NAMESPACE: &str = "http://www.alfresco.org/model/content/1.0";

/// Local name of the node property pointing at content data
pub const CONTENT_QNAME: &str = "content";
