//! country-picker-cli
//! ==================
//!
//! Command-line interface for the `country-picker-core` directory and
//! selection engine.
//!
//! This crate primarily provides a binary (`country-picker-cli`). We
//! include a small library target so that docs.rs renders a
//! documentation page and shows this overview. See the README for full
//! usage examples.
//!
//! Quick start
//! -----------
//!
//! ```text
//! country-picker-cli --help
//! country-picker-cli countries --locale=de
//! country-picker-cli search +4 --preferred=DE,AT
//! country-picker-cli auto --device=en_IN
//! ```
//!
//! For programmatic access to the directory, pipeline and
//! auto-selection APIs, use the [`country-picker-core`] crate directly.
//!
//! [`country-picker-core`]: https://docs.rs/country-picker-core

// This library target intentionally exposes no API; the binary is the
// primary deliverable.
