use crate::Result;
use aws_sdk_dynamodb::config::{BehaviorVersion, Credentials, Region};
use aws_sdk_dynamodb::Client;
use testcontainers::core::{IntoContainerPort, WaitFor};
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, GenericImage};

const DYNAMODB_PORT: u16 = 8000;

/// A throwaway DynamoDB Local instance running in a container.
pub struct DynamoDbLocal {
    container: ContainerAsync<GenericImage>,
}

impl DynamoDbLocal {
    /// Starts `amazon/dynamodb-local` with an in-memory store.
    pub async fn start() -> Result<Self> {
        let container = GenericImage::new("amazon/dynamodb-local", "2.5.2")
            .with_exposed_port(DYNAMODB_PORT.tcp())
            .with_wait_for(WaitFor::message_on_stdout("Initializing DynamoDB Local"))
            .start()
            .await?;

        Ok(Self { container })
    }

    pub async fn endpoint_url(&self) -> Result<String> {
        let host = self.container.get_host().await?;
        let port = self.container.get_host_port_ipv4(DYNAMODB_PORT).await?;
        Ok(format!("http://{host}:{port}"))
    }

    /// Builds a client pointed at the container with dummy credentials.
    pub async fn client(&self) -> Result<Client> {
        let config = aws_sdk_dynamodb::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .credentials_provider(Credentials::new("local", "local", None, None, "test-infra"))
            .endpoint_url(self.endpoint_url().await?)
            .build();

        Ok(Client::from_conf(config))
    }
}
