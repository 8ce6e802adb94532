pub mod group;
pub mod memory_store;
pub mod service_file;

pub use group::group_services;
pub use memory_store::InMemoryServiceStore;
