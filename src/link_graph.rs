// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Outbound-link counts and the inverse reference map the ranker runs over.
//!
//! Four JSON sidecars: `link_out` (per-page outbound anchor count),
//! `reference_count` (per-URL list of referring pages), `url_mapper` and
//! `page_id_mapper` (the two halves of the page-id ↔ URL bijection).

use std::collections::HashMap;
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{IndexerError, Result};
use crate::types::{Anchor, PageId};

const LINK_OUT_FILE: &str = "link_out";
const REFERENCE_COUNT_FILE: &str = "reference_count";
const URL_MAPPER_FILE: &str = "url_mapper";
const PAGE_ID_MAPPER_FILE: &str = "page_id_mapper";

pub struct LinkGraph {
    dir: PathBuf,
    /// Raw anchor count per page, not de-duplicated by target URL.
    outbound_count: HashMap<PageId, u32>,
    /// Target URL → pages that reference it, built from unique anchor targets.
    referrers: HashMap<String, Vec<PageId>>,
    url_to_page: HashMap<String, PageId>,
    page_to_url: HashMap<PageId, String>,
}

fn read_json_map<T: serde::de::DeserializeOwned + Default>(path: &Path) -> Result<T> {
    match fs::read_to_string(path) {
        Ok(contents) => serde_json::from_str(&contents)
            .map_err(|e| IndexerError::Value(format!("malformed {}: {e}", path.display()))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(T::default()),
        Err(e) => Err(e.into()),
    }
}

fn write_json_map<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string(value)
        .map_err(|e| IndexerError::Value(format!("failed to serialize {}: {e}", path.display())))?;
    File::create(path)?.write_all(json.as_bytes())?;
    Ok(())
}

impl LinkGraph {
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;

        let outbound_raw: HashMap<String, u32> = read_json_map(&dir.join(LINK_OUT_FILE))?;
        let outbound_count = outbound_raw
            .into_iter()
            .map(|(k, v)| (PageId(k.parse().unwrap_or(0)), v))
            .collect();

        let referrers_raw: HashMap<String, Vec<u32>> = read_json_map(&dir.join(REFERENCE_COUNT_FILE))?;
        let referrers = referrers_raw
            .into_iter()
            .map(|(url, ids)| (url, ids.into_iter().map(PageId).collect()))
            .collect();

        let url_to_page_raw: HashMap<String, u32> = read_json_map(&dir.join(URL_MAPPER_FILE))?;
        let url_to_page = url_to_page_raw
            .into_iter()
            .map(|(url, id)| (url, PageId(id)))
            .collect();

        let page_to_url_raw: HashMap<String, String> = read_json_map(&dir.join(PAGE_ID_MAPPER_FILE))?;
        let page_to_url = page_to_url_raw
            .into_iter()
            .map(|(k, v)| (PageId(k.parse().unwrap_or(0)), v))
            .collect();

        Ok(LinkGraph {
            dir,
            outbound_count,
            referrers,
            url_to_page,
            page_to_url,
        })
    }

    pub fn page_for_url(&self, url: &str) -> Option<PageId> {
        self.url_to_page.get(url).copied()
    }

    pub fn url_for_page(&self, page_id: PageId) -> Option<&str> {
        self.page_to_url.get(&page_id).map(String::as_str)
    }

    /// Record the page-id ↔ url bijection. First-write-wins: a no-op if
    /// `url` is already mapped.
    pub fn map_page(&mut self, page_id: PageId, url: &str) {
        if self.url_to_page.contains_key(url) {
            return;
        }
        self.url_to_page.insert(url.to_string(), page_id);
        self.page_to_url.insert(page_id, url.to_string());
    }

    /// Record `page_id`'s raw anchor count and, for each unique anchor
    /// target, append `page_id` to that target's referrer list.
    pub fn record_links(&mut self, page_id: PageId, anchors: &[Anchor]) {
        self.outbound_count.insert(page_id, anchors.len() as u32);

        let mut seen = HashSet::new();
        for anchor in anchors {
            if seen.insert(anchor.url.clone()) {
                self.referrers
                    .entry(anchor.url.clone())
                    .or_default()
                    .push(page_id);
            }
        }
    }

    pub fn outbound_count(&self, page_id: PageId) -> u32 {
        self.outbound_count.get(&page_id).copied().unwrap_or(0)
    }

    pub fn referrers(&self, url: &str) -> &[PageId] {
        self.referrers.get(url).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every URL the graph currently knows a page-id for.
    pub fn known_urls(&self) -> impl Iterator<Item = &str> {
        self.url_to_page.keys().map(String::as_str)
    }

    pub fn close(&self) -> Result<()> {
        let outbound: HashMap<String, u32> = self
            .outbound_count
            .iter()
            .map(|(k, v)| (k.0.to_string(), *v))
            .collect();
        write_json_map(&self.dir.join(LINK_OUT_FILE), &outbound)?;

        let referrers: HashMap<String, Vec<u32>> = self
            .referrers
            .iter()
            .map(|(k, v)| (k.clone(), v.iter().map(|p| p.0).collect()))
            .collect();
        write_json_map(&self.dir.join(REFERENCE_COUNT_FILE), &referrers)?;

        let url_to_page: HashMap<String, u32> = self
            .url_to_page
            .iter()
            .map(|(k, v)| (k.clone(), v.0))
            .collect();
        write_json_map(&self.dir.join(URL_MAPPER_FILE), &url_to_page)?;

        let page_to_url: HashMap<String, String> = self
            .page_to_url
            .iter()
            .map(|(k, v)| (k.0.to_string(), v.clone()))
            .collect();
        write_json_map(&self.dir.join(PAGE_ID_MAPPER_FILE), &page_to_url)?;

        Ok(())
    }
}
