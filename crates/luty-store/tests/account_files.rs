//! Account file load/save integration tests.

use std::collections::HashSet;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use luty_core::{Account, AccountStore};
use luty_store::{StoreError, load_account_store, save_account_store};

fn account(id: &str, roles: &[&str]) -> Account {
    Account {
        id: id.into(),
        user_id: format!("user-{id}"),
        hashed_secret: format!("$argon2id$v=19${id}"),
        roles: roles.iter().map(ToString::to_string).collect::<HashSet<_>>(),
    }
}

#[test]
fn serialization_is_independent_of_insertion_order() {
    let dir = TempDir::new().unwrap();
    let forward = dir.path().join("forward.json");
    let backward = dir.path().join("backward.json");

    let accounts = [
        account("whiskey", &["guest", "admin"]),
        account("alpha", &["writer", "guest", "reader"]),
        account("tango", &[]),
    ];

    let mut a = AccountStore::new();
    for acct in accounts.iter().cloned() {
        a.insert(acct);
    }
    let mut b = AccountStore::new();
    for acct in accounts.iter().rev().cloned() {
        b.insert(acct);
    }

    save_account_store(&forward, &a).unwrap();
    save_account_store(&backward, &b).unwrap();

    let forward_bytes = std::fs::read(&forward).unwrap();
    let backward_bytes = std::fs::read(&backward).unwrap();
    assert_eq!(forward_bytes, backward_bytes);

    let text = String::from_utf8(forward_bytes).unwrap();
    let alpha = text.find("\"alpha\"").unwrap();
    let tango = text.find("\"tango\"").unwrap();
    let whiskey = text.find("\"whiskey\"").unwrap();
    assert!(alpha < tango && tango < whiskey);
}

#[test]
fn file_uses_documented_field_names() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("accounts.json");
    let mut store = AccountStore::new();
    store.insert(account("a1", &["guest"]));

    save_account_store(&path, &store).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let entry = &value["accounts"][0];
    assert_eq!(entry["id"], "a1");
    assert_eq!(entry["user-id"], "user-a1");
    assert_eq!(entry["secret"], "$argon2id$v=19$a1");
    assert_eq!(entry["roles"], serde_json::json!(["guest"]));
}

#[test]
fn save_then_load_roundtrips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("accounts.json");
    let mut store = AccountStore::new();
    store.insert(account("a1", &["guest", "admin"]));
    store.insert(account("a2", &[]));

    save_account_store(&path, &store).unwrap();
    assert_eq!(load_account_store(&path).unwrap(), store);
}

#[test]
fn duplicate_ids_in_file_keep_last() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("accounts.json");
    std::fs::write(
        &path,
        r#"{"accounts": [
            {"id": "a1", "user-id": "first", "secret": "x", "roles": ["guest"]},
            {"id": "a1", "user-id": "second", "secret": "y", "roles": []}
        ]}"#,
    )
    .unwrap();

    let store = load_account_store(&path).unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.get("a1").unwrap().user_id, "second");
}

#[test]
fn missing_accounts_file_loads_empty() {
    let dir = TempDir::new().unwrap();
    assert!(load_account_store(&dir.path().join("accounts.json")).unwrap().is_empty());
}

#[test]
fn malformed_accounts_file_is_decode_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("accounts.json");
    std::fs::write(&path, r#"{"accounts": "nope"}"#).unwrap();

    let err = load_account_store(&path).unwrap_err();
    assert!(matches!(err, StoreError::Decode { .. }), "unexpected error: {err}");
}

#[test]
fn null_roles_load_as_no_roles() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("accounts.json");
    std::fs::write(
        &path,
        r#"{"accounts":[{"id":"a1","user-id":"u","secret":"h","roles":null}]}"#,
    )
    .unwrap();

    let store = load_account_store(&path).unwrap();
    let a1 = store.get("a1").unwrap();
    assert_eq!(a1.user_id, "u");
    assert!(a1.roles.is_empty());

    // Re-saving writes an empty list rather than null.
    save_account_store(&path, &store).unwrap();
    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["accounts"][0]["roles"], serde_json::json!([]));
}

#[test]
fn null_account_list_loads_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("accounts.json");
    std::fs::write(&path, r#"{"accounts":null}"#).unwrap();

    assert!(load_account_store(&path).unwrap().is_empty());
}
