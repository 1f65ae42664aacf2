//! # cdxscribe
//!
//! A streaming encoder that serializes in-memory molecular graphs into CDXML
//! documents for exchange with chemical drawing and editing tools, including
//! the page-layout and print-metadata computation needed when a document
//! targets a paginated canvas.
//!
//! ## Architecture
//!
//! The library is split into two layers with a deliberately thin seam
//! between them.
//!
//! - **[`models`]: The Vocabulary.** Read-only data contracts shared with
//!   callers: the [`MoleculeView`](models::graph::MoleculeView) trait through
//!   which graphs are observed, the chemical attribute enums (bond orders,
//!   radicals, stereo descriptors), and bounding-box geometry.
//!
//! - **[`io`]: The Encoder.** The [`CdxmlSaver`](io::cdxml::CdxmlSaver)
//!   writes documents to any [`std::io::Write`] sink in a single pass, one
//!   call per structural block, with drawing settings supplied directly or
//!   loaded from TOML presets ([`ExportConfig`](io::config::ExportConfig)).
//!
//! The encoder never owns molecular data and never buffers the document;
//! callers own both the graph store and the output sink.

pub mod io;
pub mod models;
