use crate::{MemStore, SledStore};

pub fn get_test_sled_store() -> SledStore {
    SledStore::temporary().unwrap()
}

pub fn get_test_mem_store() -> MemStore {
    MemStore::new()
}
