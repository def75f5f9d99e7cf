pub mod modules;
mod schema;
pub mod shared;

use modules::parent::{
    CreateParentInteractor, DefaultChildFactory, DefaultParentFactory, DeleteParentInteractor,
    ParentRepository, ParentRepositoryImpl, ReadParentsInteractor, UpdateParentInteractor,
};
use shared::{AppResult, Database, DatabaseConfig};
use std::sync::Arc;

/// The four interactor groups wired over one repository and the default factories.
///
/// A transport layer (CLI, HTTP) holds this and calls the use-case traits on
/// its fields; it never reaches the repository directly.
pub struct HouseholdServices {
    pub create: Arc<CreateParentInteractor>,
    pub read: Arc<ReadParentsInteractor>,
    pub update: Arc<UpdateParentInteractor>,
    pub delete: Arc<DeleteParentInteractor>,
    database: Arc<Database>,
}

impl HouseholdServices {
    /// Open the configured database, apply pending migrations and build the services
    pub fn initialize(config: &DatabaseConfig) -> AppResult<Self> {
        shared::utils::init_logger();

        let database = Arc::new(Database::connect(config)?);
        database.run_migrations()?;
        log::info!("Database migrations completed successfully");

        Ok(Self::from_database(database))
    }

    /// Build the services over an already migrated database
    pub fn from_database(database: Arc<Database>) -> Self {
        let repository: Arc<dyn ParentRepository> =
            Arc::new(ParentRepositoryImpl::new(Arc::clone(&database)));
        let parent_factory = Arc::new(DefaultParentFactory);
        let child_factory = Arc::new(DefaultChildFactory);

        Self {
            create: Arc::new(CreateParentInteractor::new(
                parent_factory,
                child_factory.clone(),
                Arc::clone(&repository),
            )),
            read: Arc::new(ReadParentsInteractor::new(Arc::clone(&repository))),
            update: Arc::new(UpdateParentInteractor::new(
                child_factory,
                Arc::clone(&repository),
            )),
            delete: Arc::new(DeleteParentInteractor::new(repository)),
            database,
        }
    }

    pub fn database(&self) -> &Arc<Database> {
        &self.database
    }
}
