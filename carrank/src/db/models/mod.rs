//! Database record models matching table schemas.
//!
//! These structs correspond directly to rows of the `car` and `car_rating` tables
//! (plus the aggregated ranking row). They are used by repositories to return
//! query results and accept insertion data.
//!
//! # Design Principles
//!
//! - **Schema Mapping**: Each model struct matches a table or query shape
//! - **SQLx Integration**: Models derive `sqlx::FromRow` for query results
//! - **Separation**: Database models are distinct from API models, which own
//!   request validation and the public JSON contract
//! - **No object graph**: a rating refers to its car by [`CarId`](crate::types::CarId);
//!   cars never hold their ratings in memory. Ownership lives in the foreign key
//!   and its `ON DELETE CASCADE`.
//!
//! # Conversion to API Models
//!
//! ```ignore
//! use carrank::db::models::cars::Car as DbCar;
//! use carrank::api::models::cars::CarResponse;
//!
//! let db_car: DbCar = /* ... */;
//! let api_response: CarResponse = db_car.into();
//! ```

pub mod cars;
pub mod ratings;
