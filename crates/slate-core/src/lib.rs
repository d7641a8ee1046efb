//! slate-core
//!
//! Core building blocks for the slate task list.
//!
//! # Module layout
//! - **domain**: task record, field normalization, view selection, manual ranking
//! - **ports**: abstraction seams (StorageSlot, Clock, IdGenerator)
//! - **impls**: slot implementations (MemorySlot for tests/dev, FileSlot for real use)
//! - **persist**: serialize/repair round-trip between the store and a slot
//! - **app**: the store itself, its wiring, and the read-only projection
//!
//! The store is the single mutator. A view layer (slate-cli here, anything
//! else elsewhere) calls its mutation methods and renders the projection it
//! exposes; no error from inside the core ever reaches that boundary.

pub mod app;
pub mod domain;
pub mod impls;
pub mod persist;
pub mod ports;
