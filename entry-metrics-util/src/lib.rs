//! Helper types and functions used within the entry-metrics ecosystem.
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg), deny(rustdoc::broken_intra_doc_links))]

mod debugging;
pub use debugging::{DebuggingEmitter, Emission, Snapshotter};

pub mod layers;

#[cfg(test)]
mod test_util;
