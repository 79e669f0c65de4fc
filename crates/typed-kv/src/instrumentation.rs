//! Instrumentation component identifiers for store operations.

/// Component identifiers for tracing spans and events.
pub mod components {
    /// Sled adapter open/close (DEBUG) and range scans (TRACE, field: rows).
    pub const KV_RAW_SLED: &str = "kv:raw:sled";

    /// In-memory adapter range scans. TRACE only, field: rows.
    pub const KV_RAW_MEM: &str = "kv:raw:mem";

    /// Typed store operations. Fields: key_kind.
    pub const KV_TYPED: &str = "kv:typed";
}
