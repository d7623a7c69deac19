//! Event bus adapters.
//!
//! - `InMemoryEventBus` - In-process bus recording published events

mod in_memory;

pub use in_memory::InMemoryEventBus;
