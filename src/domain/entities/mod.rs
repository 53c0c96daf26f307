//! Domain entities
//!
//! All entities are request-scoped: they are created by a single provider
//! call or command run and consumed by the operation that asked for them.

mod command_output;
mod distribution;
mod stack_output;

pub use command_output::CommandOutput;
pub use distribution::Distribution;
pub use stack_output::StackOutput;
