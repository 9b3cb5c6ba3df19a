use clap::Parser;
use lambda_http::{run, service_fn, Error, Request};
use shortly_generator::RandomHexGenerator;
use shortly_shortener::{HandlerConfig, RequestHandler, ShortenerService};
use shortly_storage::DynamoDbRepository;
use shortly_telemetry::{LogFormat, LOG_FORMAT_ENV};
use std::sync::Arc;
use tracing::info;

const BASE_URL_ENV: &str = "SHORTLY_BASE_URL";
const TABLE_NAME_ENV: &str = "SHORTLY_TABLE_NAME";

/// Settings read from the function's environment.
#[derive(Debug, Parser)]
#[command(name = "shortly-lambda")]
struct Config {
    #[arg(long, env = BASE_URL_ENV, default_value = shortly_shortener::DEFAULT_BASE_URL)]
    base_url: String,

    #[arg(long, env = TABLE_NAME_ENV, default_value = shortly_storage::DEFAULT_TABLE_NAME)]
    table_name: String,

    #[arg(long, env = LOG_FORMAT_ENV, value_enum, default_value_t = LogFormat::Json)]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::try_parse()?;
    shortly_telemetry::init(config.log_format, false)?;

    info!(base_url = %config.base_url, "starting lambda handler");

    // one client per execution environment, shared by every invocation
    let repository = DynamoDbRepository::from_env(config.table_name.as_str()).await?;
    info!(table = repository.table(), "configured dynamodb client");
    let service = ShortenerService::new(repository, RandomHexGenerator::new());
    let handler = RequestHandler::new(
        Arc::new(service),
        HandlerConfig::builder().base_url(config.base_url).build(),
    );

    run(service_fn(move |event: Request| {
        let handler = handler.clone();
        async move { shortly_lambda::handle_event(&handler, event).await }
    }))
    .await
}
