mod cli;

use crate::cli::{StorageBackendArg, CLI};
use anyhow::Context;
use clap::Parser;
use shortly_core::{Repository, Shortener};
use shortly_gateway::{App, AppState};
use shortly_generator::RandomHexGenerator;
use shortly_shortener::{HandlerConfig, RequestHandler, ShortenerService};
use shortly_storage::{DynamoDbRepository, InMemoryRepository, MySqlRepository};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::try_parse()?;
    shortly_telemetry::init(config.log_format, true)?;

    info!(
        listen_addr = %config.listen_addr,
        base_url = %config.base_url,
        storage_backend = %config.storage,
        table = %config.table_name,
        "starting gateway server"
    );

    let shortener = match config.storage {
        StorageBackendArg::InMemory => shortener(InMemoryRepository::new()),
        StorageBackendArg::Mysql => {
            let mysql_dsn = config
                .mysql_dsn
                .as_deref()
                .context("mysql dsn is required when storage backend is mysql")?;
            let repository = MySqlRepository::connect(mysql_dsn, config.table_name.as_str())
                .await
                .context("connecting to mysql")?;
            info!(table = repository.table(), "connected to mysql");
            if config.create_table {
                repository.create_table().await.context("creating mysql table")?;
            }
            shortener(repository)
        }
        StorageBackendArg::DynamoDb => {
            let repository = DynamoDbRepository::from_env(config.table_name.as_str())
                .await
                .context("configuring dynamodb")?;
            info!(table = repository.table(), "configured dynamodb client");
            if config.create_table {
                repository
                    .create_table()
                    .await
                    .context("creating dynamodb table")?;
            }
            shortener(repository)
        }
    };

    let handler = RequestHandler::new(
        shortener,
        HandlerConfig::builder().base_url(config.base_url).build(),
    );
    let router = App::router(AppState::new(handler));

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "listening");

    axum::serve(listener, router).await?;
    Ok(())
}

fn shortener<R: Repository>(repository: R) -> Arc<dyn Shortener> {
    Arc::new(ShortenerService::new(repository, RandomHexGenerator::new()))
}
