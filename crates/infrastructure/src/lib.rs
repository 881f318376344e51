//! Store implementations behind the application ports.

#![forbid(unsafe_code)]

mod in_memory_directory_repository;

pub use in_memory_directory_repository::InMemoryDirectoryRepository;
