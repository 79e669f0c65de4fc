/// Implements [`ValueCodec`](crate::ValueCodec) through borsh for each listed type.
///
/// The types must derive `BorshSerialize` and `BorshDeserialize`.
///
/// ```rust
/// use borsh::{BorshDeserialize, BorshSerialize};
///
/// #[derive(BorshSerialize, BorshDeserialize)]
/// struct Account {
///     balance: u64,
/// }
///
/// typed_kv::borsh_value_codec!(Account);
/// ```
#[macro_export]
macro_rules! borsh_value_codec {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::ValueCodec for $ty {
                fn encode_value(&self) -> $crate::CodecResult<Vec<u8>> {
                    $crate::__private::borsh::to_vec(self)
                        .map_err(|e| $crate::CodecError::serialization(e))
                }

                fn decode_value(buf: &[u8]) -> $crate::CodecResult<Self> {
                    $crate::__private::borsh::from_slice(buf)
                        .map_err(|e| $crate::CodecError::deserialization(e))
                }
            }
        )+
    };
}
