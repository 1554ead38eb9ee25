//! Request signing.
//!
//! Every call carries three query parameters: the account identifier, the
//! Unix timestamp of the call and an HMAC-SHA256 signature over
//!
//! ```text
//! {METHOD}+{host[:port]}{path}?apiuserid={id}&timestamp={ts}
//! ```
//!
//! keyed with the account's secret. `path` is percent-decoded and the
//! account identifier is taken verbatim, as the service rebuilds it. Query
//! parameters other than the account identifier and timestamp are not
//! covered by the signature.

use std::borrow::Cow;

use hmac::Hmac;
use hmac::Mac;
use log::debug;
use percent_encoding::percent_decode_str;
use sha2::Sha256;
use url::Url;

pub(crate) const API_USER_ID_PARAM: &str = "apiuserid";
pub(crate) const TIMESTAMP_PARAM: &str = "timestamp";
pub(crate) const HASH_PARAM: &str = "hash";

const AUTH_PARAMS: [&str; 3] = [API_USER_ID_PARAM, TIMESTAMP_PARAM, HASH_PARAM];

/// Compute the request signature.
///
/// Pure function of its inputs: the same arguments always yield the same
/// lowercase hex digest. `host` includes the port when the URL carries an
/// explicit one, and `path` is the decoded path (see [`signing_path`]).
pub fn signature(
    key: &str,
    method: &str,
    host: &str,
    path: &str,
    api_user_id: &str,
    timestamp: &str,
) -> String {
    let canonical = canonical_string(method, host, path, &auth_query(api_user_id, timestamp));
    debug!("calculated canonical string: {canonical}");
    hex_hmac_sha256(key.as_bytes(), canonical.as_bytes())
}

/// Sign `url` in place for `method` at `timestamp` (Unix seconds).
///
/// Existing query parameters are kept; any caller-supplied auth parameters
/// are replaced. The final query is sorted by key.
pub(crate) fn sign_url(url: &mut Url, method: &str, api_user_id: &str, key: &str, timestamp: i64) {
    let timestamp = timestamp.to_string();
    let hash = signature(
        key,
        method,
        &host_of(url),
        &signing_path(url),
        api_user_id,
        &timestamp,
    );

    let mut pairs: Vec<(String, String)> = url
        .query_pairs()
        .into_owned()
        .filter(|(k, _)| !AUTH_PARAMS.contains(&k.as_str()))
        .collect();
    pairs.push((API_USER_ID_PARAM.to_string(), api_user_id.to_string()));
    pairs.push((TIMESTAMP_PARAM.to_string(), timestamp));
    pairs.push((HASH_PARAM.to_string(), hash));
    // Stable: values of a repeated key keep their order.
    pairs.sort_by(|a, b| a.0.cmp(&b.0));

    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish();
    url.set_query(Some(&query));
}

/// Host as it appears in the signature: `host` or `host:port`.
pub(crate) fn host_of(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    }
}

/// Path as it appears in the signature: percent-decoded.
pub fn signing_path(url: &Url) -> Cow<'_, str> {
    percent_decode_str(url.path()).decode_utf8_lossy()
}

// Not form-encoded: the service interpolates the raw values.
fn auth_query(api_user_id: &str, timestamp: &str) -> String {
    format!("{API_USER_ID_PARAM}={api_user_id}&{TIMESTAMP_PARAM}={timestamp}")
}

fn canonical_string(method: &str, host: &str, path: &str, auth_query: &str) -> String {
    format!("{method}+{host}{path}?{auth_query}")
}

/// Hex encoded HMAC with SHA256 hash.
fn hex_hmac_sha256(key: &[u8], content: &[u8]) -> String {
    // SAFETY: HMAC's new_from_slice always returns Ok - it handles any key length
    let mut h = Hmac::<Sha256>::new_from_slice(key).unwrap();
    h.update(content);

    hex::encode(h.finalize().into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_string_layout() {
        let q = auth_query("test", "1500000000");
        assert_eq!(
            canonical_string("GET", "api.platformcraft.ru", "/1/objects", &q),
            "GET+api.platformcraft.ru/1/objects?apiuserid=test&timestamp=1500000000"
        );
    }

    #[test]
    fn signature_vectors() {
        assert_eq!(
            signature("APIUserKey", "GET", "api.platformcraft.ru", "/1/objects", "test", "1500000000"),
            "16850929e91391cbb7af7a67eac18046a329ef932c0ccd7cc7a314efa0c98c72"
        );
        assert_eq!(
            signature("APIUserKey", "POST", "127.0.0.1:8080", "/1/transcoder", "test", "1500000000"),
            "fd3867915a83d1315e17b36b33238adfd74744bead6788832cfad79ed286479a"
        );
    }

    #[test]
    fn signature_depends_on_every_input() {
        let base = signature("k", "GET", "h", "/p", "u", "1");
        assert_eq!(base, signature("k", "GET", "h", "/p", "u", "1"));
        assert_ne!(base, signature("k2", "GET", "h", "/p", "u", "1"));
        assert_ne!(base, signature("k", "PUT", "h", "/p", "u", "1"));
        assert_ne!(base, signature("k", "GET", "h2", "/p", "u", "1"));
        assert_ne!(base, signature("k", "GET", "h", "/p2", "u", "1"));
        assert_ne!(base, signature("k", "GET", "h", "/p", "u2", "1"));
        assert_ne!(base, signature("k", "GET", "h", "/p", "u", "2"));
        assert_eq!(base.len(), 64);
        assert!(base.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn host_includes_explicit_port() {
        let url = Url::parse("http://127.0.0.1:8080/1/").unwrap();
        assert_eq!(host_of(&url), "127.0.0.1:8080");

        let url = Url::parse("https://api.platformcraft.ru/1/").unwrap();
        assert_eq!(host_of(&url), "api.platformcraft.ru");
    }

    #[test]
    fn sign_url_sorts_and_replaces_auth_params() {
        let mut url =
            Url::parse("https://api.platformcraft.ru/1/objects?limit=10&hash=stale&folder=%2Fvideos")
                .unwrap();
        sign_url(&mut url, "GET", "test", "APIUserKey", 1500000000);

        assert_eq!(
            url.query(),
            Some(
                "apiuserid=test&folder=%2Fvideos\
                 &hash=16850929e91391cbb7af7a67eac18046a329ef932c0ccd7cc7a314efa0c98c72\
                 &limit=10&timestamp=1500000000"
            )
        );
    }

    #[test]
    fn signs_decoded_path_and_raw_user_id() {
        assert_eq!(
            auth_query("ops+media@example.com", "1500000000"),
            "apiuserid=ops+media@example.com&timestamp=1500000000"
        );

        let url = Url::parse("https://api.platformcraft.ru/1/objects/my%20clip%C3%A9").unwrap();
        assert_eq!(signing_path(&url), "/1/objects/my clip\u{e9}");

        let mut signed = url.clone();
        sign_url(&mut signed, "GET", "ops+media@example.com", "APIUserKey", 1500000000);
        let hash = signed
            .query_pairs()
            .find(|(k, _)| k == HASH_PARAM)
            .map(|(_, v)| v.into_owned())
            .unwrap();
        assert_eq!(
            hash,
            hex_hmac_sha256(
                b"APIUserKey",
                "GET+api.platformcraft.ru/1/objects/my clip\u{e9}\
                 ?apiuserid=ops+media@example.com&timestamp=1500000000"
                    .as_bytes()
            )
        );
        assert!(signed
            .query()
            .unwrap()
            .starts_with("apiuserid=ops%2Bmedia%40example.com&"));
    }

    #[test]
    fn sign_url_keeps_valueless_params() {
        let mut url = Url::parse("http://127.0.0.1:8080/1/transcoder?concat").unwrap();
        sign_url(&mut url, "POST", "test", "APIUserKey", 1500000000);

        let keys: Vec<String> = url.query_pairs().map(|(k, _)| k.into_owned()).collect();
        assert_eq!(keys, ["apiuserid", "concat", "hash", "timestamp"]);
        assert!(url
            .query()
            .unwrap()
            .contains("hash=fd3867915a83d1315e17b36b33238adfd74744bead6788832cfad79ed286479a"));
    }
}
