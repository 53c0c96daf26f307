//! Domain Services
//!
//! Stateless functions over provider responses.

mod lookup;

pub use lookup::{find_distribution, find_output};
