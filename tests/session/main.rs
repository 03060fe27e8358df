//! Integration tests for Layer 2: Session
//!
//! Tests batching, the guest limit, and history stores in memory and on disk.

mod batching;
