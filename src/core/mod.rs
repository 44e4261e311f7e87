/*!
 * Core hashing primitives
 */

pub mod checksum;

pub use checksum::{calculate_md5s, ChunkHasher};
