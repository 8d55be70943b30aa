use aws_sdk_polly::Client as PollyClient;
use aws_sdk_s3::Client as S3Client;

const UNREACHABLE_ENDPOINT: &str = "http://localhost:9999";

pub fn create_mock_polly_client() -> PollyClient {
    let config = aws_sdk_polly::Config::builder()
        .behavior_version(aws_sdk_polly::config::BehaviorVersion::latest())
        .region(aws_sdk_polly::config::Region::new("us-east-1"))
        .endpoint_url(UNREACHABLE_ENDPOINT)
        .build();

    PollyClient::from_conf(config)
}

pub fn create_mock_s3_client() -> S3Client {
    let config = aws_sdk_s3::Config::builder()
        .behavior_version(aws_sdk_s3::config::BehaviorVersion::latest())
        .region(aws_sdk_s3::config::Region::new("us-east-1"))
        .endpoint_url(UNREACHABLE_ENDPOINT)
        .force_path_style(true)
        .build();

    S3Client::from_conf(config)
}
