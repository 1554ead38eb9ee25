mod common;

use std::collections::HashMap;

use filespot::{Geo, Link, LinkCreateRequest, SecureLink, SecureLinkRequest, TempListParams};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use common::{setup, signed};

fn russia_only() -> Geo {
    HashMap::from([("EU".to_string(), HashMap::from([("RU".to_string(), true)]))])
}

#[tokio::test]
async fn list_links() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/1/temp"))
        .and(query_param("secure", "true"))
        .and(signed(&server))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{
                "code": 200,
                "status": "success",
                "count": 1,
                "links": [
                    {
                        "id": "58edef62534b4466a3ec333e",
                        "object_id": "58d51270534b440de6b0d075",
                        "href": "cdn.platformcraft.ru/temp/58edef62534b4466a3ec333e",
                        "secure": true,
                        "exp": 0,
                        "for_sale": false,
                        "geo": {"EU": {"RU": true}}
                    }
                ]
            }"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let params = TempListParams {
        secure: true,
        ..Default::default()
    };
    let list = client.temp().list(Some(&params)).await.unwrap();

    assert_eq!(list.count, 1);
    assert_eq!(
        list.links,
        vec![Link {
            id: "58edef62534b4466a3ec333e".into(),
            object_id: "58d51270534b440de6b0d075".into(),
            href: "cdn.platformcraft.ru/temp/58edef62534b4466a3ec333e".into(),
            secure: true,
            exp: 0,
            for_sale: false,
            geo: russia_only(),
        }]
    );
}

#[tokio::test]
async fn get_link_without_geo() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/1/temp/58edef62534b4466a3ec333e"))
        .and(signed(&server))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{
                "code": 200,
                "status": "success",
                "link": {
                    "id": "58edef62534b4466a3ec333e",
                    "object_id": "56787f0c044dfe226b000001",
                    "href": "cdn.platformcraft.ru/temp/58ee48ca534b4409844c8f7a",
                    "secure": true,
                    "exp": 1492008763,
                    "for_sale": false,
                    "geo": null
                }
            }"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let link = client
        .temp()
        .get("58edef62534b4466a3ec333e")
        .await
        .unwrap();

    assert_eq!(link.exp, 1492008763);
    assert!(link.geo.is_empty());
}

#[tokio::test]
async fn create_link() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/1/temp"))
        .and(signed(&server))
        .and(body_json(serde_json::json!({
            "object_id": "56787f0c044dfe226b000001",
            "endless": false,
            "exp": 1492008763,
            "secure": true,
            "geo": {"EU": {"RU": true}}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{
                "code": 200,
                "status": "success",
                "link": {
                    "id": "58ee48ca534b4409844c8f7a",
                    "object_id": "56787f0c044dfe226b000001",
                    "href": "cdn.platformcraft.ru/temp/58ee48ca534b4409844c8f7a",
                    "secure": true,
                    "exp": 1492008763,
                    "for_sale": false,
                    "geo": {"EU": {"RU": true}}
                }
            }"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let request = LinkCreateRequest {
        object_id: "56787f0c044dfe226b000001".into(),
        endless: false,
        exp: 1492008763,
        secure: true,
        geo: Some(russia_only()),
    };
    let link = client.temp().create(&request).await.unwrap();

    assert_eq!(link.id, "58ee48ca534b4409844c8f7a");
    assert_eq!(link.geo, russia_only());
}

#[tokio::test]
async fn delete_link() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/1/temp/58edef62534b4466a3ec333e"))
        .and(signed(&server))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"code": 200, "status": "success"}"#),
        )
        .expect(1)
        .mount(&server)
        .await;

    let status = client
        .temp()
        .delete("58edef62534b4466a3ec333e")
        .await
        .unwrap();
    assert_eq!(status.status, "success");
}

#[tokio::test]
async fn secure_link() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/1/temp/58ee48ca534b4409844c8f7a/secure"))
        .and(signed(&server))
        .and(body_json(serde_json::json!({"ip": "188.111.110.11", "ts": 1558030392})))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{
                "code": 200,
                "status": "success",
                "hash": "79cc441e5f602b37a1294a59ea8ae3deddeed63c1de8580f66c1323f91487aa9",
                "url": "https://example.com/temp/5cdd8082ef3db56742cd704a?hash=79cc441e5f602b37a1294a59ea8ae3deddeed63c1de8580f66c1323f91487aa9&timestamp=1558030392"
            }"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let request = SecureLinkRequest {
        ip: "188.111.110.11".into(),
        ts: 1558030392,
    };
    let secure = client
        .temp()
        .secure("58ee48ca534b4409844c8f7a", &request)
        .await
        .unwrap();

    assert_eq!(
        secure,
        SecureLink {
            hash: "79cc441e5f602b37a1294a59ea8ae3deddeed63c1de8580f66c1323f91487aa9".into(),
            url: "https://example.com/temp/5cdd8082ef3db56742cd704a?hash=79cc441e5f602b37a1294a59ea8ae3deddeed63c1de8580f66c1323f91487aa9&timestamp=1558030392".into(),
        }
    );
}
