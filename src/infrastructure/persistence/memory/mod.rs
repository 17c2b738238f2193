pub mod tax_object_repository;

pub use tax_object_repository::InMemoryTaxObjectRepository;
