use super::*;

// =============================================================
// MemoryCredentialStore
// =============================================================

#[test]
fn memory_store_starts_empty() {
    assert_eq!(MemoryCredentialStore::default().get(), None);
}

#[test]
fn memory_store_set_then_get() {
    let store = MemoryCredentialStore::default();
    store.set(&Token::new("a.b.c"));
    assert_eq!(store.get(), Some(Token::new("a.b.c")));
}

#[test]
fn memory_store_clear_removes_token() {
    let store = MemoryCredentialStore::with_token(Token::new("a.b.c"));
    store.clear();
    assert_eq!(store.get(), None);
}

#[test]
fn memory_store_blank_token_reads_as_absent() {
    let store = MemoryCredentialStore::with_token(Token::new(""));
    assert_eq!(store.get(), None);
}

#[test]
fn memory_store_clones_share_slot() {
    let store = MemoryCredentialStore::default();
    let other = store.clone();
    store.set(&Token::new("x.y.z"));
    assert_eq!(other.get(), Some(Token::new("x.y.z")));
    other.clear();
    assert_eq!(store.get(), None);
}

// =============================================================
// BrowserCredentialStore (outside the browser)
// =============================================================

#[test]
fn browser_store_without_window_reads_absent() {
    let store = BrowserCredentialStore::new("token");
    store.set(&Token::new("a.b.c"));
    assert_eq!(store.get(), None);
    store.clear();
    assert_eq!(store.key(), "token");
}

#[test]
fn browser_store_clear_without_storage_is_harmless() {
    let store = BrowserCredentialStore::new("token");
    store.clear();
    store.clear();
    assert_eq!(store.get(), None);
}
