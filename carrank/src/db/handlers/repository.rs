//! Base repository trait for database operations.

/// Contains the Repository trait.
///
/// A repository is a data access layer for one postgres table. Cars and ratings are
/// only ever created and read back, so the trait covers exactly those two operations.
///
/// Each repository wraps a `&mut PgConnection`, which in request handlers is always a
/// transaction so the whole unit of work commits or rolls back together.
use crate::db::errors::Result;

/// Base repository trait providing common database operations
#[async_trait::async_trait]
pub trait Repository {
    /// The request type for creating entities
    type CreateRequest;

    /// The response/DTO type returned by operations
    type Response;

    /// The identifier type for lookups
    type Id: Send + Sync;

    /// Create a new entity
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response>;

    /// Get an entity by ID. Absence is `Ok(None)`, not an error.
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>>;
}
