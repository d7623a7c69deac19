//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `PrimordialDuckReader` - Read access to catalogued ducks
//! - `EventPublisher` - Publishing domain events

mod event_publisher;
mod primordial_duck_reader;

pub use event_publisher::EventPublisher;
pub use primordial_duck_reader::PrimordialDuckReader;
