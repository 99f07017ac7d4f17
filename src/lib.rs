//! Coin Dodge — a terminal arcade game.
//!
//! The pure simulation core lives in [`compute`] and the entity types in
//! [`entities`]; terminal I/O is confined to the binary.

pub mod compute;
pub mod entities;
