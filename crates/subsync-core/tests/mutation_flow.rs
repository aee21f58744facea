//! Mutate mode behavior: concurrent add/remove fan-out where every sibling
//! settles, followed by exactly one unconditional zone refresh.

mod common;

use common::MockZoneClient;
use std::net::Ipv4Addr;
use subsync_core::ops;
use subsync_core::{Action, SyncRequest};

fn request(add: &[&str], remove: &[&str], remove_all: bool) -> SyncRequest {
    SyncRequest::new(
        "example.com",
        None,
        add.iter().map(|s| s.to_string()).collect(),
        remove.iter().map(|s| s.to_string()).collect(),
        remove_all,
    )
    .unwrap()
}

#[tokio::test]
async fn single_add_issues_one_create_then_one_refresh() {
    let client = MockZoneClient::new();
    let req = request(&["foo"], &[], false);
    let ip: Ipv4Addr = "1.2.3.4".parse().unwrap();

    let report = ops::apply(&client, &req, ip).await;

    assert!(report.is_success());
    assert_eq!(client.create_calls(), 1);
    assert_eq!(client.refresh_calls(), 1);
    assert_eq!(
        client.created(),
        vec![("foo".to_string(), "1.2.3.4".to_string())]
    );
}

#[tokio::test]
async fn duplicate_adds_are_not_deduplicated() {
    // Two adds for the same subdomain issue two independent create calls;
    // duplicate handling is the remote API's responsibility.
    let client = MockZoneClient::new();
    let req = request(&["foo", "foo"], &[], false);

    let report = ops::apply(&client, &req, "1.2.3.4".parse().unwrap()).await;

    assert!(report.is_success());
    assert_eq!(client.create_calls(), 2);
    assert_eq!(client.refresh_calls(), 1);
}

#[tokio::test]
async fn failing_add_does_not_abort_siblings_or_refresh() {
    let client = MockZoneClient::with_records(&[("dev", "9.9.9.9")]);
    client.reject_create_for("foo");
    let req = request(&["foo", "bar"], &["dev"], false);

    let report = ops::apply(&client, &req, "1.2.3.4".parse().unwrap()).await;

    assert!(!report.is_success());
    // Both creates and the remove were still issued.
    assert_eq!(client.create_calls(), 2);
    assert_eq!(client.delete_calls(), 1);
    assert_eq!(client.refresh_calls(), 1);

    let failed: Vec<_> = report.failures().collect();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].action, Action::Add);
    assert_eq!(failed[0].sub_domain, "foo");
}

#[tokio::test]
async fn refresh_failure_fails_the_report() {
    let client = MockZoneClient::new();
    client.fail_refresh();
    let req = request(&["foo"], &[], false);

    let report = ops::apply(&client, &req, "1.2.3.4".parse().unwrap()).await;

    assert!(!report.is_success());
    assert!(report.refresh.is_err());
    assert_eq!(report.failures().count(), 0);
    assert_eq!(client.create_calls(), 1);
}

#[tokio::test]
async fn outcomes_keep_request_order_adds_first() {
    let client = MockZoneClient::with_records(&[("old", "9.9.9.9")]);
    let req = request(&["a", "b"], &["old"], false);

    let report = ops::apply(&client, &req, "1.2.3.4".parse().unwrap()).await;

    let names: Vec<(&Action, &str)> = report
        .outcomes
        .iter()
        .map(|o| (&o.action, o.sub_domain.as_str()))
        .collect();
    assert_eq!(
        names,
        vec![
            (&Action::Add, "a"),
            (&Action::Add, "b"),
            (&Action::Remove, "old")
        ]
    );
}
