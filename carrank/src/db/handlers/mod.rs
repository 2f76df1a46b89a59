//! Repository implementations for database access.
//!
//! Each repository wraps a SQLx connection (in practice a transaction), provides
//! strongly-typed operations, and returns models from [`crate::db::models`].
//!
//! # Available Repositories
//!
//! - [`Cars`]: car creation and lookup by id
//! - [`Ratings`]: rating creation (guarded by a car existence check) and lookup
//! - [`Rankings`]: the top-rated aggregation
//!
//! # Common Pattern
//!
//! ```ignore
//! use carrank::db::handlers::{Cars, Repository};
//!
//! async fn example(pool: &sqlx::PgPool) -> Result<(), Box<dyn std::error::Error>> {
//!     // Start a transaction
//!     let mut tx = pool.begin().await?;
//!
//!     // Create repository from transaction
//!     let mut repo = Cars::new(&mut tx);
//!
//!     // Perform operations
//!     let car = repo.get_by_id(1).await?;
//!
//!     // Commit or rollback
//!     tx.commit().await?;
//!     Ok(())
//! }
//! ```

pub mod cars;
pub mod rankings;
pub mod ratings;
pub mod repository;

pub use cars::Cars;
pub use rankings::Rankings;
pub use ratings::Ratings;
pub use repository::Repository;
