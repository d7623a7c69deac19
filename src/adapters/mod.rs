//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `duck` - Duck catalogue readers
//! - `events` - Event bus implementations

pub mod duck;
pub mod events;

pub use duck::InMemoryPrimordialDuckReader;
pub use events::InMemoryEventBus;
