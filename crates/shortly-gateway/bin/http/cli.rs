use clap::{Parser, ValueEnum};
use shortly_telemetry::{LogFormat, LOG_FORMAT_ENV};
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;

pub const LISTEN_ADDR_ENV: &str = "SHORTLY_GATEWAY_LISTEN_ADDR";
pub const BASE_URL_ENV: &str = "SHORTLY_BASE_URL";
pub const STORAGE_BACKEND_ENV: &str = "SHORTLY_STORAGE_BACKEND";
pub const TABLE_NAME_ENV: &str = "SHORTLY_TABLE_NAME";
pub const MYSQL_DSN_ENV: &str = "SHORTLY_MYSQL_DSN";
pub const CREATE_TABLE_ENV: &str = "SHORTLY_CREATE_TABLE";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackendArg {
    #[value(name = "in-memory")]
    InMemory,
    #[value(name = "mysql")]
    Mysql,
    #[value(name = "dynamodb")]
    DynamoDb,
}

impl Display for StorageBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackendArg::InMemory => write!(f, "in-memory"),
            StorageBackendArg::Mysql => write!(f, "mysql"),
            StorageBackendArg::DynamoDb => write!(f, "dynamodb"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "shortly-gateway")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Prefix placed in front of every short code.
    #[arg(long, env = BASE_URL_ENV, default_value = shortly_shortener::DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(
        long,
        env = STORAGE_BACKEND_ENV,
        value_enum,
        default_value_t = StorageBackendArg::InMemory
    )]
    pub storage: StorageBackendArg,

    #[arg(long, env = TABLE_NAME_ENV, default_value = shortly_storage::DEFAULT_TABLE_NAME)]
    pub table_name: String,

    #[arg(long, env = MYSQL_DSN_ENV, required_if_eq("storage", "mysql"))]
    pub mysql_dsn: Option<String>,

    /// Create the backing table on startup.
    #[arg(long, env = CREATE_TABLE_ENV)]
    pub create_table: bool,

    #[arg(long, env = LOG_FORMAT_ENV, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}
