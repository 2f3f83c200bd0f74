use std::sync::Arc;

use httpmock::prelude::*;
use torrdeck_client::{ClientConfig, QbitClient, parse_url};
use torrdeck_model::ControlService;

const HASH: &str = "8c4adbf9ebe66f1d";

fn service_for(server: &MockServer) -> anyhow::Result<Arc<dyn ControlService>> {
    let config = ClientConfig::new(parse_url(&server.base_url())?);
    Ok(Arc::new(QbitClient::new(&config)?))
}

#[tokio::test]
async fn remove_sends_delete_files_flag() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    let with_files = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v2/torrents/delete")
            .form_urlencoded_tuple("hashes", HASH)
            .form_urlencoded_tuple("deleteFiles", "true");
        then.status(200);
    });

    service_for(&server)?.remove(HASH, true).await?;
    with_files.assert();
    Ok(())
}

#[tokio::test]
async fn set_category_sends_name() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v2/torrents/setCategory")
            .form_urlencoded_tuple("hashes", HASH)
            .form_urlencoded_tuple("category", "linux isos");
        then.status(200);
    });

    service_for(&server)?
        .set_category(HASH, "linux isos")
        .await?;
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn resume_against_sub_path_install() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/qbit/api/v2/torrents/resume")
            .form_urlencoded_tuple("hashes", HASH);
        then.status(200);
    });

    let config = ClientConfig::new(parse_url(&format!("{}/qbit", server.base_url()))?);
    QbitClient::new(&config)?.resume(HASH).await?;
    mock.assert();
    Ok(())
}

#[tokio::test]
async fn rejected_request_surfaces_as_error() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/v2/torrents/pause");
        then.status(409);
    });

    let result = service_for(&server)?.pause(HASH).await;
    let message = result.err().map(|err| err.to_string()).unwrap_or_default();
    assert_eq!(message, "pause rejected with status 409 Conflict");
    mock.assert();
    Ok(())
}
