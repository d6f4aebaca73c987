use std::time::Duration;

use anyhow::Result;
use rmcp::{
    model::{CallToolRequestParam, ClientInfo},
    serve_client,
};
use tempfile::tempdir;
use tokio::time::timeout;

use crate::common::{launcher_command, spawn_server_process, stub_broker};

#[tokio::test]
async fn nango_token_is_fetched_before_handshake() -> Result<()> {
    let (base_url, request) = stub_broker(
        "200 OK",
        r#"{"connection_id":"conn-7","credentials":{"type":"OAUTH2","access_token":"tok123"}}"#,
    )
    .await?;

    let workdir = tempdir()?;
    let mut command = launcher_command(workdir.path());
    command
        .env("NANGO_CONNECTION_ID", "conn-7")
        .env("NANGO_INTEGRATION_ID", "monday")
        .env("NANGO_BASE_URL", &base_url)
        .env("NANGO_SECRET_KEY", "nango-secret");
    let (mut child, transport, stderr_task) = spawn_server_process(command)?;

    let client = serve_client(ClientInfo::default(), transport).await?;
    let response = client
        .call_tool(CallToolRequestParam {
            name: "describe_configuration".into(),
            arguments: None,
        })
        .await?;
    let payload = response.structured_content.expect("structured_content");
    assert_eq!(payload["token_source"], "nango");

    let request = timeout(Duration::from_secs(5), request).await??;
    assert!(
        request.starts_with(
            "GET /connection/conn-7?provider_config_key=monday&refresh_token=true HTTP/1.1"
        ),
        "unexpected request: {request}"
    );
    assert!(
        request
            .to_ascii_lowercase()
            .contains("authorization: bearer nango-secret"),
        "missing bearer header: {request}"
    );

    client.cancel().await?;
    let status = timeout(Duration::from_secs(5), child.wait()).await??;
    assert!(status.success(), "expected clean server shutdown");
    if let Some(handle) = stderr_task {
        let _ = handle.await;
    }
    Ok(())
}

#[tokio::test]
async fn broker_rejection_exits_with_status_text() -> Result<()> {
    let (base_url, _request) = stub_broker("401 Unauthorized", r#"{"error":"bad key"}"#).await?;

    let workdir = tempdir()?;
    let mut command = launcher_command(workdir.path());
    command
        .env("NANGO_CONNECTION_ID", "conn-7")
        .env("NANGO_INTEGRATION_ID", "monday")
        .env("NANGO_BASE_URL", &base_url)
        .env("NANGO_SECRET_KEY", "wrong-secret");

    let output = timeout(Duration::from_secs(10), command.output()).await??;
    assert_eq!(output.status.code(), Some(1), "exit code 1 expected");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Fatal error: HTTP 401: Unauthorized"),
        "stderr: {stderr}"
    );
    Ok(())
}
