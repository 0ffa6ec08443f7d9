//! Command-line and environment configuration for the `custbook` binary.

use clap::Parser;
use custbook_api::ServerConfig;
use custbook_core::DbOptions;
use std::path::PathBuf;

/// Customer and address REST backend over SQLite.
#[derive(Parser, Debug)]
#[command(name = "custbook", version, about)]
pub struct Cli {
    /// Interface to bind the HTTP listener to.
    #[arg(long, env = "CUSTBOOK_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port for the HTTP listener.
    #[arg(long, short = 'p', env = "CUSTBOOK_PORT", default_value_t = 5000)]
    pub port: u16,

    /// SQLite database file. Created on first run.
    #[arg(long, env = "CUSTBOOK_DB_PATH", default_value = "./database.db")]
    pub db_path: PathBuf,

    /// Reject addresses whose customer does not exist, and customer deletes
    /// that would orphan addresses.
    #[arg(long, env = "CUSTBOOK_ENFORCE_FOREIGN_KEYS")]
    pub enforce_foreign_keys: bool,

    /// One of trace|debug|info|warn|error. Defaults to debug in debug builds,
    /// info in release builds.
    #[arg(long, env = "CUSTBOOK_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files. Logs go to stderr when unset.
    #[arg(long, env = "CUSTBOOK_LOG_DIR")]
    pub log_dir: Option<String>,
}

impl Cli {
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            host: self.host.clone(),
            port: self.port,
        }
    }

    pub fn db_options(&self) -> DbOptions {
        DbOptions {
            enforce_foreign_keys: self.enforce_foreign_keys,
        }
    }

    pub fn log_level(&self) -> &str {
        match self.log_level.as_deref() {
            Some(level) => level,
            None => custbook_core::default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;
    use std::path::PathBuf;
    use std::sync::{Mutex, PoisonError};

    // Serializes tests that read or write process environment variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const ENV_VARS: [&str; 6] = [
        "CUSTBOOK_HOST",
        "CUSTBOOK_PORT",
        "CUSTBOOK_DB_PATH",
        "CUSTBOOK_ENFORCE_FOREIGN_KEYS",
        "CUSTBOOK_LOG_LEVEL",
        "CUSTBOOK_LOG_DIR",
    ];

    #[test]
    fn defaults_match_original_deployment() {
        let _env = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        let cli = Cli::try_parse_from(["custbook"]).unwrap();
        assert_eq!(cli.server_config().socket_addr(), "0.0.0.0:5000");
        assert_eq!(cli.db_path, PathBuf::from("./database.db"));
        assert!(!cli.db_options().enforce_foreign_keys);
        assert!(cli.log_dir.is_none());
        assert_eq!(cli.log_level(), custbook_core::default_log_level());
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "custbook",
            "--host",
            "127.0.0.1",
            "-p",
            "8080",
            "--db-path",
            "/tmp/customers.db",
            "--enforce-foreign-keys",
            "--log-level",
            "warn",
        ])
        .unwrap();
        assert_eq!(cli.server_config().socket_addr(), "127.0.0.1:8080");
        assert_eq!(cli.db_path, PathBuf::from("/tmp/customers.db"));
        assert!(cli.db_options().enforce_foreign_keys);
        assert_eq!(cli.log_level(), "warn");
    }

    #[test]
    fn environment_variables_fill_unset_flags() {
        let _env = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        std::env::set_var("CUSTBOOK_HOST", "127.0.0.2");
        std::env::set_var("CUSTBOOK_PORT", "7070");
        std::env::set_var("CUSTBOOK_DB_PATH", "/var/lib/custbook/customers.db");
        std::env::set_var("CUSTBOOK_ENFORCE_FOREIGN_KEYS", "true");
        std::env::set_var("CUSTBOOK_LOG_LEVEL", "error");
        std::env::set_var("CUSTBOOK_LOG_DIR", "/var/log/custbook");

        let from_env = Cli::try_parse_from(["custbook"]);
        let flag_wins = Cli::try_parse_from(["custbook", "--port", "9090"]);
        for name in ENV_VARS {
            std::env::remove_var(name);
        }

        let cli = from_env.unwrap();
        assert_eq!(cli.server_config().socket_addr(), "127.0.0.2:7070");
        assert_eq!(cli.db_path, PathBuf::from("/var/lib/custbook/customers.db"));
        assert!(cli.db_options().enforce_foreign_keys);
        assert_eq!(cli.log_level(), "error");
        assert_eq!(cli.log_dir.as_deref(), Some("/var/log/custbook"));

        assert_eq!(flag_wins.unwrap().server_config().socket_addr(), "127.0.0.2:9090");
    }

    #[test]
    fn invalid_port_is_rejected() {
        assert!(Cli::try_parse_from(["custbook", "--port", "70000"]).is_err());
    }
}
