//! Command line interface definition

use clap::Parser;
use cstore_config::{constants, Config, DatabaseConfig};
use std::path::PathBuf;

/// validate-contentstore - check content store files against the repository database
#[derive(Parser)]
#[command(name = "validate-contentstore")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Check that every content URL in the repository database has a file of the recorded size")]
#[command(long_about = None)]
pub struct Cli {
    /// Database server host
    #[arg(long, default_value = constants::DEFAULT_HOST)]
    pub host: String,

    /// Database server port
    #[arg(long, default_value_t = constants::DEFAULT_PORT)]
    pub port: u16,

    /// Database name to connect to
    #[arg(long, default_value = constants::DEFAULT_DBNAME)]
    pub dbname: String,

    /// Database user name
    #[arg(long, default_value = constants::DEFAULT_USERNAME)]
    pub username: String,

    /// User's password
    #[arg(long, default_value = constants::DEFAULT_PASSWORD)]
    pub password: String,

    /// Location of the content store
    #[arg(long, value_name = "PATH", default_value = constants::DEFAULT_CONTENT_STORE)]
    pub contentstore: PathBuf,

    /// Output the report in JSON format
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging on stderr
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Settings for this run
    pub fn to_config(&self) -> Config {
        Config {
            database: DatabaseConfig {
                host: self.host.clone(),
                port: self.port,
                dbname: self.dbname.clone(),
                username: self.username.clone(),
                password: self.password.clone(),
            },
            content_store: self.contentstore.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_config_defaults() {
        let cli = Cli::parse_from(["validate-contentstore"]);
        assert_eq!(cli.to_config(), Config::default());
        assert!(!cli.json);
        assert!(!cli.debug);
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from([
            "validate-contentstore",
            "--host",
            "db.internal",
            "--port",
            "6432",
            "--dbname",
            "ecm",
            "--username",
            "auditor",
            "--password",
            "hunter2",
            "--contentstore",
            "/srv/contentstore",
            "--json",
        ]);
        let config = cli.to_config();
        assert_eq!(config.database.host, "db.internal");
        assert_eq!(config.database.port, 6432);
        assert_eq!(config.database.dbname, "ecm");
        assert_eq!(config.database.username, "auditor");
        assert_eq!(config.database.password, "hunter2");
        assert_eq!(config.content_store, PathBuf::from("/srv/contentstore"));
        assert!(cli.json);
    }

    #[test]
    fn invalid_port_is_rejected() {
        assert!(Cli::try_parse_from(["validate-contentstore", "--port", "http"]).is_err());
    }
}
