// SPDX-License-Identifier: MPL-2.0
//! Application layer - capability ports.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The engine in [`crate::app`] consumes the ports

pub mod port;
