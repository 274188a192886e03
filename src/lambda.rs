use aws_config::BehaviorVersion;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::Client as S3Client;
use golf_saju::utils::{logger, validation::Validate};
use golf_saju::{FortuneResponse, FortuneService, LambdaConfig, S3Storage};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use std::sync::Arc;

type Service = FortuneService<S3Storage, LambdaConfig>;

async fn function_handler(
    service: Arc<Service>,
    event: LambdaEvent<serde_json::Value>,
) -> Result<FortuneResponse, Error> {
    tracing::info!("Handling fortune request {}", event.context.request_id);

    let mut response = service.handle_value(event.payload).await;
    if !service.config().include_prompt {
        response.prompt = None;
    }

    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let lambda_config = LambdaConfig::from_env()?;
    lambda_config.validate()?;

    // 創建AWS配置和S3客戶端
    let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
        .region(Region::new(lambda_config.s3_region.clone()))
        .build();
    let s3_client = S3Client::from_conf(s3_config);

    let storage = S3Storage::new(s3_client, lambda_config.s3_bucket.clone());
    let service = Arc::new(FortuneService::new(storage, lambda_config));

    run(service_fn(move |event| {
        let service = Arc::clone(&service);
        async move { function_handler(service, event).await }
    }))
    .await
}
