//! Shared test helpers
//!
//! A `wiremock` server stands in for the REST Countries endpoint, so the
//! source is exercised end to end without the network.

#![allow(dead_code)]

use tokio::net::TcpListener;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Assert that a `Result` is `Ok` and unwrap it (fails the test otherwise).
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
}

/// Skip a live test when the given environment variable is not set.
#[macro_export]
macro_rules! skip_unless_env {
    ($var:expr) => {
        if std::env::var($var).is_err() {
            eprintln!("skipping: environment variable {} is not set", $var);
            return;
        }
    };
}

/// Three countries in the v3.1 schema, deliberately unsorted.
pub const SAMPLE_BODY: &str = r#"[
  {
    "name": {
      "common": "Germany",
      "official": "Federal Republic of Germany",
      "nativeName": {"deu": {"official": "Bundesrepublik Deutschland", "common": "Deutschland"}}
    },
    "cca2": "DE", "cca3": "DEU",
    "idd": {"root": "+4", "suffixes": ["9"]},
    "capital": ["Berlin"],
    "altSpellings": ["DE", "Federal Republic of Germany", "Bundesrepublik Deutschland"],
    "region": "Europe", "subregion": "Western Europe",
    "languages": {"deu": "German"},
    "population": 83240525,
    "flags": {"png": "https://flagcdn.com/w320/de.png", "svg": "https://flagcdn.com/de.svg"}
  },
  {
    "name": {"common": "Åland Islands", "official": "Åland Islands",
             "nativeName": {"swe": {"official": "Landskapet Åland", "common": "Åland"}}},
    "cca2": "AX", "cca3": "ALA",
    "idd": {"root": "+3", "suffixes": ["5818"]},
    "capital": ["Mariehamn"],
    "altSpellings": ["AX", "Aaland", "Aland", "Ahvenanmaa"],
    "region": "Europe", "subregion": "Northern Europe",
    "languages": {"swe": "Swedish"},
    "population": 29458,
    "flags": {"png": "https://flagcdn.com/w320/ax.png", "svg": "https://flagcdn.com/ax.svg"}
  },
  {
    "name": {"common": "Antarctica", "official": "Antarctica", "nativeName": {}},
    "cca2": "AQ", "cca3": "ATA",
    "idd": {},
    "altSpellings": ["AQ"],
    "region": "Antarctic",
    "population": 1000,
    "flags": {"png": "https://flagcdn.com/w320/aq.png", "svg": "https://flagcdn.com/aq.svg"}
  }
]"#;

/// Path the mocked endpoint answers on.
pub const COUNTRIES_PATH: &str = "/v3.1/all";

/// Start a mock server answering one `GET` on [`COUNTRIES_PATH`].
///
/// Returns the server (keep it alive for the test) and the full URL to
/// request. The server checks on drop that exactly one matching request
/// arrived.
pub async fn mock_endpoint(status: u16, body: &str) -> (MockServer, String) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(COUNTRIES_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_raw(body, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let url = format!("{}{COUNTRIES_PATH}", server.uri());
    (server, url)
}

/// URL of a local port nobody listens on.
pub async fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}{COUNTRIES_PATH}")
}
