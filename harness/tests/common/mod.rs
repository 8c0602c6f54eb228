//! Shared setup for the integration suites: a mock server per test on a
//! random port, with fully isolated state.

use std::net::SocketAddr;

use player_harness::{HarnessConfig, PlayerApiClient};

/// Start the mock player service on a random port and return its address.
pub fn start_server() -> SocketAddr {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

pub fn client_for(addr: SocketAddr) -> PlayerApiClient {
    let config = HarnessConfig {
        base_url: format!("http://{addr}"),
        ..HarnessConfig::default()
    };
    PlayerApiClient::new(config)
}
