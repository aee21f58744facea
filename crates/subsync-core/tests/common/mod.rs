//! Test doubles and common utilities for the operations tests
//!
//! [`MockZoneClient`] keeps an in-memory zone and counts every API call so
//! tests can assert exactly which remote requests an operation issued.

// Not every test binary uses every helper.
#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashSet;
use std::net::Ipv4Addr;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use subsync_core::error::{Error, Result};
use subsync_core::record::ZoneRecord;
use subsync_core::traits::ZoneClient;

/// A zone client double with an in-memory record set and call counters
#[derive(Default)]
pub struct MockZoneClient {
    records: Mutex<Vec<ZoneRecord>>,
    next_id: AtomicU64,

    list_calls: AtomicUsize,
    get_calls: AtomicUsize,
    create_calls: AtomicUsize,
    delete_calls: AtomicUsize,
    refresh_calls: AtomicUsize,

    /// Subdomains whose create calls are rejected
    fail_create_for: Mutex<HashSet<String>>,
    /// When set, every get_record call fails
    fail_get: AtomicUsize,
    /// When set, refresh_zone fails
    fail_refresh: AtomicUsize,

    /// (sub_domain, target) pairs of every create call
    created: Mutex<Vec<(String, String)>>,
    /// Identifiers of every delete call
    deleted: Mutex<Vec<u64>>,
}

impl MockZoneClient {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            ..Self::default()
        }
    }

    /// Seed the zone with "A" records for the given subdomains
    pub fn with_records(subs: &[(&str, &str)]) -> Self {
        let client = Self::new();
        {
            let mut records = client.records.lock().unwrap();
            for (sub, target) in subs {
                let id = client.next_id.fetch_add(1, Ordering::SeqCst);
                records.push(ZoneRecord {
                    id,
                    sub_domain: (*sub).to_string(),
                    target: (*target).to_string(),
                    field_type: "A".to_string(),
                });
            }
        }
        client
    }

    pub fn reject_create_for(&self, sub: &str) {
        self.fail_create_for.lock().unwrap().insert(sub.to_string());
    }

    pub fn fail_get_records(&self) {
        self.fail_get.store(1, Ordering::SeqCst);
    }

    pub fn fail_refresh(&self) {
        self.fail_refresh.store(1, Ordering::SeqCst);
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    pub fn refresh_calls(&self) -> usize {
        self.refresh_calls.load(Ordering::SeqCst)
    }

    pub fn created(&self) -> Vec<(String, String)> {
        self.created.lock().unwrap().clone()
    }

    pub fn deleted(&self) -> Vec<u64> {
        self.deleted.lock().unwrap().clone()
    }

    /// Identifiers currently in the zone, in insertion order
    pub fn record_ids(&self) -> Vec<u64> {
        self.records.lock().unwrap().iter().map(|r| r.id).collect()
    }
}

#[async_trait]
impl ZoneClient for MockZoneClient {
    async fn list_record_ids(
        &self,
        _domain: &str,
        sub_domain: Option<&str>,
    ) -> Result<Vec<u64>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);

        let records = self.records.lock().unwrap();
        Ok(records
            .iter()
            .filter(|r| sub_domain.is_none_or(|sub| r.sub_domain == sub))
            .map(|r| r.id)
            .collect())
    }

    async fn get_record(&self, _domain: &str, id: u64) -> Result<ZoneRecord> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_get.load(Ordering::SeqCst) != 0 {
            return Err(Error::http("connection reset"));
        }

        let records = self.records.lock().unwrap();
        records
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| Error::not_found(format!("record {}", id)))
    }

    async fn create_record(
        &self,
        _domain: &str,
        sub_domain: &str,
        target: Ipv4Addr,
    ) -> Result<ZoneRecord> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.created
            .lock()
            .unwrap()
            .push((sub_domain.to_string(), target.to_string()));

        if self.fail_create_for.lock().unwrap().contains(sub_domain) {
            return Err(Error::api(409, format!("'{}' conflicts", sub_domain)));
        }

        let record = ZoneRecord {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            sub_domain: sub_domain.to_string(),
            target: target.to_string(),
            field_type: "A".to_string(),
        };
        self.records.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn delete_record(&self, _domain: &str, id: u64) -> Result<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.deleted.lock().unwrap().push(id);

        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Err(Error::not_found(format!("record {}", id)));
        }
        Ok(())
    }

    async fn refresh_zone(&self, _domain: &str) -> Result<()> {
        self.refresh_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_refresh.load(Ordering::SeqCst) != 0 {
            return Err(Error::api(500, "refresh failed"));
        }
        Ok(())
    }
}
