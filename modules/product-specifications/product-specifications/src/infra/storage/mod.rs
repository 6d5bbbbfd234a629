//! `SeaORM` storage: entities, migrations and repository implementations.

pub mod assignments_repo;
pub mod entity;
pub mod mapper;
pub mod migrations;
pub mod products_repo;
pub mod specifications_repo;

pub use assignments_repo::SeaOrmAssignmentsRepository;
pub use products_repo::SeaOrmProductsRepository;
pub use specifications_repo::SeaOrmSpecificationsRepository;
