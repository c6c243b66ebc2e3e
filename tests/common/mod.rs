//! Consolidated test utilities for catalog-navigator
//!
//! This module provides unified testing utilities for integration tests,
//! built around a throwaway workspace holding a catalog and a config home.

pub mod assertions;
pub mod fixtures;
pub mod workspace;
