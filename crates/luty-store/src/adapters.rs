//! Mapping between persisted records and in-memory stores.
//!
//! Every function here is total and never mutates its input: an empty
//! record tree yields an empty store and vice versa.
//!
//! - System coordinates pass through unchanged. Kinds use the canonical
//!   label table; unknown labels decode to `Empty`.
//! - Accounts are keyed by id on the way in (last record wins). On the way
//!   out they are sorted by id, with each role list sorted, so output is
//!   independent of insertion order.

use std::collections::HashSet;

use luty_core::{Account, AccountStore, GalaxyStore, System, SystemKind};

use crate::records::{AccountRecord, AccountsFile, GalaxyFile, GALAXY_VERSION, Meta, SystemRecord};

/// Build a galaxy store from its persisted form, preserving file order.
#[must_use]
pub fn galaxy_to_memory(file: &GalaxyFile) -> GalaxyStore {
    let mut unknown = 0usize;
    let store = file
        .systems
        .iter()
        .map(|record| {
            if !SystemKind::is_known_label(&record.kind) {
                unknown += 1;
            }
            System::new(
                record.x,
                record.y,
                record.z,
                SystemKind::from_label(&record.kind),
            )
        })
        .collect();

    if unknown > 0 {
        tracing::warn!(unknown, "unrecognized system kinds decoded as Empty");
    }
    store
}

/// Persisted form of a galaxy store. Always stamps the current schema version.
#[must_use]
pub fn galaxy_to_persisted(store: &GalaxyStore) -> GalaxyFile {
    GalaxyFile {
        meta: Meta {
            version: GALAXY_VERSION,
        },
        systems: store
            .iter()
            .map(|system| SystemRecord {
                x: system.x,
                y: system.y,
                z: system.z,
                kind: system.kind.label().to_string(),
            })
            .collect(),
    }
}

/// Build an account store from its persisted form.
///
/// Records sharing an id overwrite earlier ones.
#[must_use]
pub fn accounts_to_memory(file: &AccountsFile) -> AccountStore {
    let mut store = AccountStore::new();
    for record in &file.accounts {
        let account = Account {
            id: record.id.clone(),
            user_id: record.user_id.clone(),
            hashed_secret: record.secret.clone(),
            roles: record.roles.iter().cloned().collect::<HashSet<_>>(),
        };
        if store.insert(account).is_some() {
            tracing::warn!(id = %record.id, "duplicate account id; later record wins");
        }
    }
    store
}

/// Persisted form of an account store, sorted by id with sorted roles.
#[must_use]
pub fn accounts_to_persisted(store: &AccountStore) -> AccountsFile {
    let mut accounts: Vec<AccountRecord> = store
        .iter()
        .map(|account| {
            let mut roles: Vec<String> = account.roles.iter().cloned().collect();
            roles.sort();
            AccountRecord {
                id: account.id.clone(),
                user_id: account.user_id.clone(),
                secret: account.hashed_secret.clone(),
                roles,
            }
        })
        .collect();
    accounts.sort_by(|a, b| a.id.cmp(&b.id));
    AccountsFile { accounts }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn record(x: i64, y: i64, z: i64, kind: &str) -> SystemRecord {
        SystemRecord {
            x,
            y,
            z,
            kind: kind.into(),
        }
    }

    fn account_record(id: &str, user_id: &str, roles: &[&str]) -> AccountRecord {
        AccountRecord {
            id: id.into(),
            user_id: user_id.into(),
            secret: format!("hash-{id}"),
            roles: roles.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn empty_inputs_give_empty_outputs() {
        assert!(galaxy_to_memory(&GalaxyFile::default()).is_empty());
        assert!(accounts_to_memory(&AccountsFile::default()).is_empty());

        let galaxy = galaxy_to_persisted(&GalaxyStore::new());
        assert_eq!(galaxy.meta.version, GALAXY_VERSION);
        assert!(galaxy.systems.is_empty());
        assert!(accounts_to_persisted(&AccountStore::new()).accounts.is_empty());
    }

    #[test]
    fn systems_keep_coordinates_and_order() {
        let file = GalaxyFile {
            meta: Meta::default(),
            systems: vec![
                record(5, -3, 2, "Blue Super Giant"),
                record(-50, 50, 0, "Yellow Main Sequence"),
                record(0, 0, 0, "Medium Dust Cloud"),
            ],
        };

        let store = galaxy_to_memory(&file);
        assert_eq!(
            store.systems(),
            &[
                System::new(5, -3, 2, SystemKind::BlueSuperGiant),
                System::new(-50, 50, 0, SystemKind::YellowMainSequence),
                System::new(0, 0, 0, SystemKind::MediumDustCloud),
            ]
        );
    }

    #[test]
    fn unknown_kind_decodes_to_empty() {
        let file = GalaxyFile {
            meta: Meta::default(),
            systems: vec![record(1, 2, 3, "Nonexistent Type")],
        };
        let store = galaxy_to_memory(&file);
        assert_eq!(store.systems()[0].kind, SystemKind::Empty);

        // The unknown label is not retained.
        let saved = galaxy_to_persisted(&store);
        assert_eq!(saved.systems[0].kind, "Empty");
    }

    #[rstest]
    #[case("Blue Super Giant", SystemKind::BlueSuperGiant)]
    #[case("Dense Dust Cloud", SystemKind::DenseDustCloud)]
    #[case("Medium Dust Cloud", SystemKind::MediumDustCloud)]
    #[case("Yellow Main Sequence", SystemKind::YellowMainSequence)]
    #[case("Empty", SystemKind::Empty)]
    #[case("", SystemKind::Empty)]
    #[case("blue super giant", SystemKind::Empty)]
    fn kind_labels_decode(#[case] label: &str, #[case] expected: SystemKind) {
        let file = GalaxyFile {
            meta: Meta::default(),
            systems: vec![record(0, 0, 0, label)],
        };
        assert_eq!(galaxy_to_memory(&file).systems()[0].kind, expected);
    }

    #[test]
    fn galaxy_roundtrip_is_field_wise_equal() {
        let store: GalaxyStore = SystemKind::ALL
            .iter()
            .enumerate()
            .map(|(i, kind)| {
                let i = i64::try_from(i).unwrap();
                System::new(i, -i, i * 10, *kind)
            })
            .collect();

        assert_eq!(galaxy_to_memory(&galaxy_to_persisted(&store)), store);
    }

    #[test]
    fn duplicate_account_ids_last_wins() {
        let file = AccountsFile {
            accounts: vec![
                account_record("a1", "first", &["guest"]),
                account_record("a2", "other", &[]),
                account_record("a1", "second", &["admin"]),
            ],
        };

        let store = accounts_to_memory(&file);
        assert_eq!(store.len(), 2);
        let a1 = store.get("a1").unwrap();
        assert_eq!(a1.user_id, "second");
        assert!(a1.has_role("admin"));
        assert!(!a1.has_role("guest"));
    }

    #[test]
    fn duplicate_roles_collapse() {
        let file = AccountsFile {
            accounts: vec![account_record("a1", "u", &["guest", "guest", "admin"])],
        };
        let out = accounts_to_persisted(&accounts_to_memory(&file));
        assert_eq!(out.accounts[0].roles, vec!["admin", "guest"]);
    }

    #[test]
    fn accounts_are_sorted_on_the_way_out() {
        let file = AccountsFile {
            accounts: vec![
                account_record("zulu", "u3", &["writer", "admin", "guest"]),
                account_record("alpha", "u1", &["guest"]),
                account_record("mike", "u2", &[]),
            ],
        };

        let out = accounts_to_persisted(&accounts_to_memory(&file));
        let ids: Vec<&str> = out.accounts.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["alpha", "mike", "zulu"]);
        assert_eq!(out.accounts[2].roles, vec!["admin", "guest", "writer"]);
        assert_eq!(out.accounts[0].secret, "hash-alpha");
    }
}
