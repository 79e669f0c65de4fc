use borsh::{BorshDeserialize, BorshSerialize};
use typed_kv::{
    CodecError, CodecResult, Error, KeyKind, SledStore, SledStoreConfig, StoreKey, TypedStore,
    borsh_value_codec, error::Result,
};

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone)]
struct User {
    id: u32,
    name: String,
    email: String,
}

borsh_value_codec!(User);

/// Account balances keyed by (user id, currency code).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct AccountKey {
    user_id: u32,
    currency: [u8; 3],
}

impl StoreKey for AccountKey {
    const KIND: KeyKind = KeyKind::Custom;

    fn encode_key(&self) -> CodecResult<Vec<u8>> {
        let mut out = self.user_id.encode_key()?;
        out.extend_from_slice(&self.currency);
        Ok(out)
    }

    fn decode_key(buf: &[u8]) -> CodecResult<Self> {
        if buf.len() != 7 {
            return Err(CodecError::IncorrectSize {
                kind: Self::KIND,
                expected: 7,
                actual: buf.len(),
            });
        }
        let (user_id, currency) = buf.split_at(4);
        Ok(Self {
            user_id: u32::decode_key(user_id)?,
            currency: <[u8; 3]>::decode_key(currency)?,
        })
    }
}

#[derive(BorshSerialize, BorshDeserialize, Debug, Clone)]
struct Balance {
    amount: u64,
}

borsh_value_codec!(Balance);

fn main() -> Result<()> {
    // Open the database, one tree per table
    let db = sled::open("example_db")?;
    let users: TypedStore<u32, User> =
        TypedStore::new(SledStore::from_db(db.clone(), Some("users"), true)?);
    let balances: TypedStore<AccountKey, Balance> =
        TypedStore::new(SledStore::from_db(db, Some("balances"), true)?);

    // Create some data
    let user = User {
        id: 1,
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
    };

    // Insert data using typed stores
    println!("Inserting user: {user:?}");
    users.put(&user.id, &user)?;
    for (currency, amount) in [(*b"EUR", 250), (*b"USD", 100)] {
        let key = AccountKey {
            user_id: user.id,
            currency,
        };
        balances.put(&key, &Balance { amount })?;
    }

    // Retrieve data
    println!("\nRetrieving user with id 1:");
    println!("Found user: {:?}", users.get(&1)?);

    // Try to get non-existent data
    println!("\nTrying to retrieve user with id 999:");
    match users.get(&999) {
        Ok(user) => println!("Found user: {user:?}"),
        Err(Error::NotFound) => println!("User not found (as expected)"),
        Err(e) => return Err(e),
    }

    // Scan all balances of user 1
    println!("\nBalances of user 1:");
    let from = AccountKey {
        user_id: 1,
        currency: [0; 3],
    };
    let to = AccountKey {
        user_id: 2,
        currency: [0; 3],
    };
    balances.range(&from, &to, |key, balance| {
        println!(
            "  {}: {}",
            String::from_utf8_lossy(&key.currency),
            balance.amount
        );
        Ok::<_, Error>(())
    })?;

    // Remove data
    println!("\nRemoving user 1");
    users.delete(&1)?;
    if users.has(&1)? {
        println!("User still exists (unexpected)");
    } else {
        println!("User successfully removed");
    }

    users.close()?;
    balances.close()?;

    // Stores can also be opened from a TOML config
    let config =
        SledStoreConfig::from_toml_str("path = \"example_db_config\"\ntree = \"users\"\n")?;
    let users: TypedStore<u32, User> = TypedStore::new(SledStore::open(&config)?);
    users.put(&user.id, &user)?;
    println!("\nUsers in config-opened store: {}", users.collect(&0, &u32::MAX)?.len());
    users.close()?;

    println!("\nExample completed successfully!");
    Ok(())
}
