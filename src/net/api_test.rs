use super::*;

/// Base URL for a port that nothing listens on.
async fn closed_port_config() -> GatewayConfig {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    GatewayConfig::new(&format!("http://{addr}")).unwrap()
}

#[test]
fn endpoint_joins_base_and_path() {
    assert_eq!(endpoint("http://localhost:8080", LOGIN_PATH), "http://localhost:8080/api/login");
    assert_eq!(endpoint("https://x.test", "/api/auth"), "https://x.test/api/auth");
}

#[test]
fn new_copies_config() {
    let cfg = GatewayConfig::new("http://localhost:9000/").unwrap();
    let client = AuthClient::new(&cfg).unwrap();
    assert_eq!(client.base_url(), "http://localhost:9000");
}

#[tokio::test]
async fn login_fails_closed_on_transport_error() {
    let client = AuthClient::new(&closed_port_config().await).unwrap();
    assert_eq!(client.login("alice", "secret").await, Role::Failure);
}

#[tokio::test]
async fn logout_reports_false_on_transport_error() {
    let client = AuthClient::new(&closed_port_config().await).unwrap();
    assert!(!client.logout().await);
    assert!(!client.logout().await);
}

#[tokio::test]
async fn probe_fails_closed_on_transport_error() {
    let client = AuthClient::new(&closed_port_config().await).unwrap();
    assert!(!client.is_authenticated().await);
    assert!(!client.ping().await);
}
