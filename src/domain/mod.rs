//! Domain Layer
//!
//! Pure deployment logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Values returned by providers and commands (StackOutput, Distribution, CommandOutput)
//! - `value_objects/` - Immutable value types (AwsCommand, OutputKey)
//! - `services/` - Lookup and matching functions
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never talks to AWS or spawns processes directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
