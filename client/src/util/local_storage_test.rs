#![cfg(not(feature = "hydrate"))]

// Server branch only. Draft load/save/clear over a working backend is
// covered by the `interaction` crate's `DraftStore` tests on `MemoryStorage`.

use interaction::draft::{ContactDraft, DraftStore};

use super::*;

#[test]
fn storage_reads_nothing_outside_browser() {
    assert!(matches!(BrowserStorage.get("contactFormData"), Ok(None)));
}

#[test]
fn writes_are_discarded_outside_browser() {
    assert!(BrowserStorage.set("contactFormData", "{}").is_ok());
    assert!(BrowserStorage.remove("contactFormData").is_ok());
    assert!(matches!(BrowserStorage.get("contactFormData"), Ok(None)));
}

#[test]
fn draft_store_over_server_storage_loads_empty() {
    let store = DraftStore::new(BrowserStorage);
    store.save(&ContactDraft { name: "Ada".to_owned(), ..ContactDraft::default() });
    assert!(store.load().is_empty());
    store.clear();
}
