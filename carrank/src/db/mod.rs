//! Database layer for data persistence and access.
//!
//! This module implements the data access layer using SQLx with PostgreSQL,
//! following the Repository pattern.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  (API request handlers)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │ Repositories│  (db::handlers - queries and existence checks)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │   Models    │  (db::models - database records)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │  PostgreSQL │
//! └─────────────┘
//! ```
//!
//! # Transactions
//!
//! Every request runs its repository calls inside one transaction. A
//! `sqlx::Transaction` that is dropped without `commit()` rolls back, so early
//! returns on validation or not-found errors release the connection cleanly:
//!
//! ```ignore
//! let mut tx = pool.begin().await?;
//! let car = Cars::new(&mut tx).create(&request).await?;
//! tx.commit().await?;
//! ```
//!
//! # Migrations
//!
//! The schema lives in the `migrations/` directory and is applied by
//! [`crate::migrator`]:
//!
//! ```ignore
//! carrank::migrator().run(&pool).await?;
//! ```

pub mod errors;
pub mod handlers;
pub mod models;
