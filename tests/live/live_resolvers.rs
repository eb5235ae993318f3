//! End-to-end queries against real public DoT resolvers.
//!
//! Run with: cargo test -p dotstub-e2e -- --ignored

use dotstub_client::{query, query_with, QueryOptions, ResolverDefaults};

#[tokio::test]
#[ignore]
async fn test_bare_name_against_default_resolver() {
    let answer = query("sagi.io").await.unwrap();

    assert!(!answer.is_nxdomain());
    assert!(
        !answer.addresses().is_empty(),
        "expected at least one A record"
    );
}

#[tokio::test]
#[ignore]
async fn test_triple_shape_against_cloudflare() {
    let answer = query(("1.1.1.1", "cloudflare-dns.com", "sagi.io"))
        .await
        .unwrap();

    assert!(!answer.addresses().is_empty());
}

#[tokio::test]
#[ignore]
async fn test_options_shape_with_explicit_type() {
    let options = QueryOptions {
        host: "1.1.1.1".to_string(),
        server_name: "cloudflare-dns.com".to_string(),
        name: "sagi.io".to_string(),
        record_type: Some("AAAA".to_string()),
        ..Default::default()
    };

    let answer = query(options).await.unwrap();
    assert!(!answer.is_server_error());
}

#[tokio::test]
#[ignore]
async fn test_quad9_preset() {
    let answer = query_with("example.com", &ResolverDefaults::QUAD9)
        .await
        .unwrap();

    assert!(!answer.addresses().is_empty());
    assert!(answer.min_ttl().is_some());
}

#[tokio::test]
#[ignore]
async fn test_wrong_server_name_fails_handshake() {
    // Certificate validation must reject a name the resolver's certificate
    // does not cover.
    let result = query(("1.1.1.1", "wrong.example.com", "example.com")).await;
    assert!(result.is_err());
}
