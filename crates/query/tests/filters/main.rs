//! End-to-end filter tests
//!
//! These tests chain the public builder API and check the produced
//! templates, parameters and rendered filters.

mod properties;
mod scenarios;
