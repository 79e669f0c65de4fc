//! Backend-agnostic behaviour checks, instantiated per backend through
//! `store_conformance_tests!`.

#![allow(
    dead_code,
    clippy::allow_attributes,
    reason = "each test binary uses a subset"
)]

use borsh::{BorshDeserialize, BorshSerialize};
use typed_kv::{CodecError, Error, KeyKind, RawStore, TypedStore, ValueCodec, borsh_value_codec};

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: u64,
    pub body: String,
}

impl Note {
    pub fn new(id: u64, body: &str) -> Self {
        Self {
            id,
            body: body.to_string(),
        }
    }
}

borsh_value_codec!(Note);

/// Error a visitor uses to stop a scan.
#[derive(Debug)]
pub enum ScanError {
    Stop(u64),
    Store(Error),
}

impl From<Error> for ScanError {
    fn from(e: Error) -> Self {
        ScanError::Store(e)
    }
}

pub fn test_raw_point_ops(store: impl RawStore) {
    store.put(b"alpha", b"1").expect("test: put");
    assert_eq!(store.get(b"alpha").expect("test: get"), b"1".to_vec());
    assert!(store.has(b"alpha").expect("test: has"));

    store.put(b"alpha", b"2").expect("test: overwrite");
    assert_eq!(store.get(b"alpha").expect("test: get"), b"2".to_vec());

    store.delete(b"alpha").expect("test: delete");
    assert!(store.get(b"alpha").unwrap_err().is_not_found());
    assert!(!store.has(b"alpha").expect("test: has"));
    store.delete(b"alpha").expect("test: delete absent");

    store.close().expect("test: close");
}

pub fn test_raw_range_byte_order(store: impl RawStore) {
    let keys: [&[u8]; 6] = [&[0x02], &[0x01, 0x00], &[0x00, 0xff], &[0x01], &[0xff], &[0x00]];
    for key in keys {
        store.put(key, key).expect("test: put");
    }

    let mut seen = Vec::new();
    store
        .range::<_, Error>(&[0x00, 0xff], &[0xff], |k, v| {
            assert_eq!(k, v);
            seen.push(k.to_vec());
            Ok(())
        })
        .expect("test: range");
    assert_eq!(
        seen,
        vec![vec![0x00, 0xff], vec![0x01], vec![0x01, 0x00], vec![0x02]]
    );
}

pub fn test_put_get_delete_consistency<R: RawStore>(raw: R) {
    let store: TypedStore<u64, Note, R> = TypedStore::new(raw);
    let note = Note::new(1, "first");

    store.put(&1, &note).expect("test: put");
    assert_eq!(store.get(&1).expect("test: get"), note);
    assert!(store.has(&1).expect("test: has"));

    store.delete(&1).expect("test: delete");
    assert!(matches!(store.get(&1), Err(Error::NotFound)));
    assert!(!store.has(&1).expect("test: has"));

    store.delete(&1).expect("test: delete absent");
    store.delete(&999).expect("test: delete never written");

    store.close().expect("test: close");
}

pub fn test_range_half_open<R: RawStore>(raw: R) {
    let store: TypedStore<u32, Note, R> = TypedStore::new(raw);
    for id in 0..20u32 {
        store
            .put(&id, &Note::new(id.into(), "row"))
            .expect("test: put");
    }

    let count_rows = |from: u32, to: u32| {
        let mut rows = 0;
        store
            .range(&from, &to, |_, _| {
                rows += 1;
                Ok::<_, Error>(())
            })
            .expect("test: range");
        rows
    };
    assert_eq!(count_rows(5, 5), 0);
    assert_eq!(count_rows(10, 5), 0);
    assert_eq!(count_rows(0, 20), 20);

    let mut keys = Vec::new();
    store
        .range(&3, &8, |k, v| {
            assert_eq!(v.id, u64::from(k));
            keys.push(k);
            Ok::<_, Error>(())
        })
        .expect("test: range");
    assert_eq!(keys, vec![3, 4, 5, 6, 7]);
}

pub fn test_collect_scenario<R: RawStore>(raw: R) {
    let store: TypedStore<u8, Note, R> = TypedStore::new(raw);
    let a = Note::new(1, "A");
    let b = Note::new(2, "B");
    let c = Note::new(3, "C");

    store.put(&0x02, &b).expect("test: put");
    store.put(&0x03, &c).expect("test: put");
    store.put(&0x01, &a).expect("test: put");

    assert_eq!(store.collect(&0x00, &0x04).expect("test: collect"), vec![a, b, c]);
    assert_eq!(store.collect(&0x04, &0x10).expect("test: collect"), vec![]);
}

pub fn test_early_stop_propagation<R: RawStore>(raw: R) {
    let store: TypedStore<u64, Note, R> = TypedStore::new(raw);
    for id in 1..=5u64 {
        store.put(&id, &Note::new(id, "row")).expect("test: put");
    }

    let mut visited = Vec::new();
    let res = store.range(&0, &100, |k, _| {
        visited.push(k);
        if visited.len() == 2 {
            return Err(ScanError::Stop(k));
        }
        Ok(())
    });

    assert!(matches!(res, Err(ScanError::Stop(2))), "got {res:?}");
    assert_eq!(visited, vec![1, 2]);
}

pub fn test_ordering_over_256<R: RawStore>(raw: R) {
    let store: TypedStore<u16, Note, R> = TypedStore::new(raw);
    for id in (0..=300u16).rev() {
        store
            .put(&id, &Note::new(id.into(), "row"))
            .expect("test: put");
    }

    let notes = store.collect(&250, &260).expect("test: collect");
    let ids: Vec<u64> = notes.iter().map(|n| n.id).collect();
    assert_eq!(ids, (250..260u64).collect::<Vec<_>>());
}

pub fn test_signed_keys_ordering<R: RawStore>(raw: R) {
    let store: TypedStore<i64, Note, R> = TypedStore::new(raw);
    for id in [-300i64, -2, -1, 0, 1, 2, 300] {
        store
            .put(&id, &Note::new(id.unsigned_abs(), "row"))
            .expect("test: put");
    }

    let mut keys = Vec::new();
    store
        .range(&i64::MIN, &i64::MAX, |k, _| {
            keys.push(k);
            Ok::<_, Error>(())
        })
        .expect("test: range");
    assert_eq!(keys, vec![-300, -2, -1, 0, 1, 2, 300]);
}

pub fn test_text_keys<R: RawStore>(raw: R) {
    let store: TypedStore<String, Note, R> = TypedStore::new(raw);
    assert_eq!(store.key_kind(), KeyKind::Text);
    for (i, name) in ["carol", "alice", "bob", "dave", "ab"].into_iter().enumerate() {
        store
            .put(&name.to_string(), &Note::new(i as u64, name))
            .expect("test: put");
    }

    let bodies: Vec<String> = store
        .collect(&"a".to_string(), &"c".to_string())
        .expect("test: collect")
        .into_iter()
        .map(|n| n.body)
        .collect();
    assert_eq!(bodies, vec!["ab", "alice", "bob"]);
}

pub fn test_block_keys<R: RawStore>(raw: R) {
    let store: TypedStore<[u8; 32], Note, R> = TypedStore::new(raw);
    assert_eq!(store.key_kind(), KeyKind::Block(32));

    let mut hash = [0u8; 32];
    hash[31] = 7;
    store.put(&hash, &Note::new(7, "hash")).expect("test: put");
    assert_eq!(store.get(&hash).expect("test: get").body, "hash");

    // A stray 31-byte key inside the scanned interval cannot become a block.
    let stray = Note::new(0, "stray").encode_value().expect("test: encode");
    store.raw().put(&[0x01; 31], &stray).expect("test: raw put");
    let err = store.collect(&[0u8; 32], &[0xff; 32]).unwrap_err();
    assert!(matches!(
        err,
        Error::Codec(CodecError::IncorrectSize {
            expected: 32,
            actual: 31,
            ..
        })
    ));
}

/// Generates one `#[test]` per conformance check for the store built by
/// `$setup_expr`.
macro_rules! store_conformance_tests {
    ($setup_expr:expr) => {
        #[test]
        fn test_raw_point_ops() {
            $crate::common::test_raw_point_ops($setup_expr);
        }

        #[test]
        fn test_raw_range_byte_order() {
            $crate::common::test_raw_range_byte_order($setup_expr);
        }

        #[test]
        fn test_put_get_delete_consistency() {
            $crate::common::test_put_get_delete_consistency($setup_expr);
        }

        #[test]
        fn test_range_half_open() {
            $crate::common::test_range_half_open($setup_expr);
        }

        #[test]
        fn test_collect_scenario() {
            $crate::common::test_collect_scenario($setup_expr);
        }

        #[test]
        fn test_early_stop_propagation() {
            $crate::common::test_early_stop_propagation($setup_expr);
        }

        #[test]
        fn test_ordering_over_256() {
            $crate::common::test_ordering_over_256($setup_expr);
        }

        #[test]
        fn test_signed_keys_ordering() {
            $crate::common::test_signed_keys_ordering($setup_expr);
        }

        #[test]
        fn test_text_keys() {
            $crate::common::test_text_keys($setup_expr);
        }

        #[test]
        fn test_block_keys() {
            $crate::common::test_block_keys($setup_expr);
        }
    };
}
