use std::time::Duration;

use anyhow::Result;
use rmcp::{
    model::{CallToolRequestParam, ClientInfo},
    serve_client, ServiceExt,
};
use serde_json::{json, Map};
use tempfile::tempdir;
use tokio::time::timeout;

use monday_mcp::{
    cli::FlagValue,
    server::{
        auth::TokenSource,
        config::{ToolkitConfig, ToolsConfiguration},
        runtime::MondayToolkitServer,
    },
};

use crate::common::{launcher_command, spawn_server_process, DIRECT_TOKEN};

#[tokio::test]
async fn direct_token_spawn_lists_and_describes_tools() -> Result<()> {
    let workdir = tempdir()?;
    let mut command = launcher_command(workdir.path());
    command.args([
        "--use-nango",
        "false",
        "--token",
        DIRECT_TOKEN,
        "--read-only-mode",
        "TRUE",
        "--enable-dynamic-api-tools",
        "Only",
    ]);
    let (mut child, transport, stderr_task) = spawn_server_process(command)?;

    let client = serve_client(ClientInfo::default(), transport).await?;
    let list = client.list_tools(None).await?;
    assert!(
        list.tools
            .iter()
            .any(|tool| tool.name.as_ref() == "describe_configuration"),
        "list_tools should include describe_configuration: {:?}",
        list.tools
    );

    let response = client
        .call_tool(CallToolRequestParam {
            name: "describe_configuration".into(),
            arguments: None,
        })
        .await?;
    let payload = response.structured_content.expect("structured_content");
    assert_eq!(payload["token_source"], "direct");
    assert_eq!(payload["read_only_mode"], true);
    assert_eq!(payload["dynamic_api_tools"], "only");
    assert_eq!(payload["mode"], "api");
    assert!(
        !payload.to_string().contains(DIRECT_TOKEN),
        "token must never be reported: {payload}"
    );

    client.cancel().await?;
    let status = timeout(Duration::from_secs(5), child.wait()).await??;
    assert!(
        status.success(),
        "server should exit cleanly but exit status was {status:?}"
    );
    if let Some(handle) = stderr_task {
        let _ = handle.await;
    }
    Ok(())
}

#[tokio::test]
async fn in_process_server_reports_configuration() -> Result<()> {
    let config = ToolkitConfig {
        api_token: "in-process-token".into(),
        token_source: TokenSource::Nango,
        api_version: Some("2025-04".into()),
        request_config: Map::new(),
        tools: ToolsConfiguration {
            read_only_mode: false,
            enable_dynamic_api_tools: FlagValue::Bool(true),
            mode: Some("apps".into()),
            enable_tool_manager: false,
        },
    };
    let server = MondayToolkitServer::new(config, "test instructions".into());
    let (server_transport, client_transport) = tokio::io::duplex(4096);
    let server_task = tokio::spawn(async move {
        server.serve(server_transport).await?.waiting().await?;
        Result::<_, anyhow::Error>::Ok(())
    });
    let client = serve_client(ClientInfo::default(), client_transport).await?;

    let response = client
        .call_tool(CallToolRequestParam {
            name: "describe_configuration".into(),
            arguments: None,
        })
        .await?;
    let _ = client.cancel().await;
    let _ = server_task.await;

    let payload = response.structured_content.expect("structured_content");
    assert_eq!(
        payload,
        json!({
            "token_source": "nango",
            "api_version": "2025-04",
            "read_only_mode": false,
            "dynamic_api_tools": "true",
            "mode": "apps",
            "tool_manager_enabled": false
        })
    );
    Ok(())
}
