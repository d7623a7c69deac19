//! Duck catalogue adapters.

mod in_memory_reader;

pub use in_memory_reader::InMemoryPrimordialDuckReader;
