//! 共享测试工具和辅助函数

#![allow(dead_code)]

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use dns_subdomain_provider::SubdomainProviderCredentials;

pub const ROOT_DOMAIN: &str = "example.com";
pub const TOKEN: &str = "test-token-123";
pub const CHALLENGE_DOMAIN: &str = "_acme-challenge.foo.example.com";
pub const CHALLENGE_VALUE: &str = "gfj9Xq...Rg85nM";

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Credentials pointing at `server`.
pub fn credentials_for(server: &MockServer) -> SubdomainProviderCredentials {
    SubdomainProviderCredentials::new(server.uri(), TOKEN)
}

/// Serve `{"root_domain": ROOT_DOMAIN}` on `GET /manifest`.
pub async fn mount_manifest(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/manifest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "root_domain": ROOT_DOMAIN
        })))
        .mount(server)
        .await;
}

/// Answer `verb path` with `status` and a JSON body.
pub async fn mount_json(server: &MockServer, verb: &str, route: &str, status: u16, body: Value) {
    Mock::given(method(verb))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

/// Every request the server has seen so far.
pub async fn received(server: &MockServer) -> Vec<Request> {
    server.received_requests().await.unwrap_or_default()
}

/// Requests sent to `route`, in arrival order.
pub async fn received_on(server: &MockServer, route: &str) -> Vec<Request> {
    received(server)
        .await
        .into_iter()
        .filter(|r| r.url.path() == route)
        .collect()
}

/// JSON body of a captured request (`Value::Null` if it is not JSON).
pub fn json_body(request: &Request) -> Value {
    serde_json::from_slice(&request.body).unwrap_or(Value::Null)
}
