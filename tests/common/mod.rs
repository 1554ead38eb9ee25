#![allow(dead_code)]

use std::collections::HashMap;

use filespot::{Client, ClientBuilder};
use wiremock::{Match, MockServer, Request};

pub const API_USER_ID: &str = "test";
pub const API_USER_KEY: &str = "APIUserKey";

/// Start a mock server and a client pointed at it.
pub async fn setup() -> (MockServer, Client) {
    let _ = env_logger::builder().is_test(true).try_init();

    let server = MockServer::start().await;
    let client = ClientBuilder::new()
        .api_user_id(API_USER_ID)
        .api_user_key(API_USER_KEY)
        .base_url(server.uri())
        .build()
        .expect("client must build");

    (server, client)
}

/// Matches requests whose `hash` is a valid signature for their method,
/// decoded path, `apiuserid` and `timestamp`, recomputed the way the service does.
pub struct SignedRequest {
    host: String,
}

pub fn signed(server: &MockServer) -> SignedRequest {
    SignedRequest {
        host: server.address().to_string(),
    }
}

impl Match for SignedRequest {
    fn matches(&self, request: &Request) -> bool {
        let query: HashMap<String, String> = request.url.query_pairs().into_owned().collect();
        let (Some(id), Some(ts), Some(hash)) = (
            query.get("apiuserid"),
            query.get("timestamp"),
            query.get("hash"),
        ) else {
            return false;
        };

        let expected = filespot::sign::signature(
            API_USER_KEY,
            request.method.as_str(),
            &self.host,
            &filespot::sign::signing_path(&request.url),
            id,
            ts,
        );
        id == API_USER_ID && *hash == expected
    }
}
