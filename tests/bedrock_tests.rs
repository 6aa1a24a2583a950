//! Client construction against an environment with no AWS setup.

use agentchat::gateway::BedrockAgentRuntime;

/// Point every source in the default provider chains at nothing.
fn isolate_aws_environment(dir: &std::path::Path) {
    for var in [
        "AWS_ACCESS_KEY_ID",
        "AWS_SECRET_ACCESS_KEY",
        "AWS_SESSION_TOKEN",
        "AWS_PROFILE",
        "AWS_DEFAULT_PROFILE",
        "AWS_REGION",
        "AWS_DEFAULT_REGION",
        "AWS_WEB_IDENTITY_TOKEN_FILE",
        "AWS_ROLE_ARN",
        "AWS_CONTAINER_CREDENTIALS_RELATIVE_URI",
        "AWS_CONTAINER_CREDENTIALS_FULL_URI",
    ] {
        std::env::remove_var(var);
    }
    std::env::set_var("AWS_CONFIG_FILE", dir.join("missing-config"));
    std::env::set_var("AWS_SHARED_CREDENTIALS_FILE", dir.join("missing-credentials"));
    std::env::set_var("AWS_EC2_METADATA_DISABLED", "true");
}

// Both cases share one test so the process environment is mutated once.
#[tokio::test]
async fn from_env_reports_missing_region_and_credentials() {
    let dir = tempfile::TempDir::new().unwrap();
    isolate_aws_environment(dir.path());

    let err = BedrockAgentRuntime::from_env(None, None).await.unwrap_err();
    assert!(err.is_configuration(), "{err}");
    assert!(err.to_string().contains("no AWS region"), "{err}");

    let err = BedrockAgentRuntime::from_env(Some("us-east-1"), None)
        .await
        .unwrap_err();
    assert!(err.is_configuration(), "{err}");
    assert!(err.to_string().contains("no AWS credentials"), "{err}");
}
