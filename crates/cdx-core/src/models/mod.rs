//! # Graph Model Module
//!
//! This module contains the vocabulary types and view contract used to read
//! molecular graphs during encoding, independent of any particular storage
//! backend.
//!
//! ## Overview
//!
//! The encoder does not own molecular data. Instead, these models describe
//! what it needs to observe about a graph:
//!
//! - **Read-only access** - The [`graph::MoleculeView`] trait exposes atoms
//!   and bonds by dense index without imposing a storage layout
//! - **Chemical vocabulary** - Bond orders, radicals, and stereo descriptors
//!   carry their conventional meanings as plain enums and structs
//! - **Geometric support** - Axis-aligned bounds accumulate atom positions
//!   during layout computations
//!
//! ## Key Components
//!
//! - [`atom`] - Per-atom attributes: radical states and stereocenter marks
//! - [`bond`] - Per-bond attributes: orders, wedges, and cis/trans descriptors
//! - [`geometry`] - Bounding-box arithmetic over 2-D points
//! - [`graph`] - The [`MoleculeView`](graph::MoleculeView) capability trait

pub mod atom;
pub mod bond;
pub mod geometry;
pub mod graph;
