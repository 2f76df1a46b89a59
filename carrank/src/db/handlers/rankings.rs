//! Ranking queries over car ratings.
//!
//! The whole ranking is a single aggregate statement: join, group, average, order,
//! limit all run inside PostgreSQL, so the cost does not grow with the number of
//! rating rows shipped to the application.
//!
//! # Ordering
//!
//! `AVG(integer)` yields an exact `numeric`, which is rounded to two decimals with
//! `ROUND(numeric, 2)` (half away from zero) before being cast to `float8`. Rows are
//! ordered by that rounded average descending, then by car id ascending, so equal
//! averages always come out in the same order and the list is sorted by exactly the
//! values it reports.

use crate::db::errors::Result;
use crate::db::models::cars::CarWithAverageRating;
use sqlx::PgConnection;
use tracing::instrument;

pub struct Rankings<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Rankings<'c> {
    /// Create a new Rankings repository instance
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    /// Cars with the highest mean rating, at most `limit` of them.
    ///
    /// Cars without any rating never appear (inner join).
    #[instrument(skip(self), err)]
    pub async fn top_rated(&mut self, limit: i64) -> Result<Vec<CarWithAverageRating>> {
        let rows = sqlx::query_as::<_, CarWithAverageRating>(
            r#"
            SELECT
                c.id,
                c.brand,
                c.model,
                c.production_year,
                ROUND(AVG(cr.rating), 2)::float8 AS average_rating
            FROM car c
            INNER JOIN car_rating cr ON cr.car_id = c.id
            GROUP BY c.id
            ORDER BY average_rating DESC, c.id ASC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&mut *self.db)
        .await?;

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::handlers::{Cars, Ratings, Repository};
    use crate::db::models::{cars::CarCreateDBRequest, ratings::RatingCreateDBRequest};
    use crate::types::{CarId, TOP_RATED_LIMIT};
    use sqlx::PgPool;

    async fn seed_cars(conn: &mut PgConnection, count: i32) {
        for i in 1..=count {
            let request = CarCreateDBRequest {
                brand: format!("Brand_{i}"),
                model: format!("Model_{i}"),
                production_year: 2000 + i,
            };
            Cars::new(&mut *conn).create(&request).await.unwrap();
        }
    }

    async fn rate(conn: &mut PgConnection, car_id: CarId, values: &[i32]) {
        for value in values {
            let request = RatingCreateDBRequest { car_id, rating: *value };
            Ratings::new(&mut *conn).create(&request).await.unwrap();
        }
    }

    fn ids(rows: &[CarWithAverageRating]) -> Vec<CarId> {
        rows.iter().map(|r| r.id).collect()
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_empty_store_ranks_nothing(pool: PgPool) {
        let mut conn = pool.acquire().await.unwrap();
        seed_cars(&mut conn, 3).await;

        let rows = Rankings::new(&mut conn).top_rated(TOP_RATED_LIMIT).await.unwrap();
        assert!(rows.is_empty());
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_unrated_cars_are_excluded(pool: PgPool) {
        let mut conn = pool.acquire().await.unwrap();
        seed_cars(&mut conn, 4).await;
        rate(&mut conn, 2, &[1]).await;
        rate(&mut conn, 4, &[3, 4]).await;

        let rows = Rankings::new(&mut conn).top_rated(TOP_RATED_LIMIT).await.unwrap();
        assert_eq!(ids(&rows), vec![4, 2]);
        assert_eq!(rows[0].average_rating, 3.5);
        assert_eq!(rows[1].average_rating, 1.0);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_ties_break_on_ascending_id(pool: PgPool) {
        let mut conn = pool.acquire().await.unwrap();
        seed_cars(&mut conn, 13).await;
        rate(&mut conn, 13, &[5, 5]).await;
        rate(&mut conn, 8, &[5, 5]).await;
        rate(&mut conn, 2, &[5]).await;
        rate(&mut conn, 1, &[4, 5]).await;

        let rows = Rankings::new(&mut conn).top_rated(TOP_RATED_LIMIT).await.unwrap();
        assert_eq!(ids(&rows), vec![2, 8, 13, 1]);
        assert!(rows[..3].iter().all(|r| r.average_rating == 5.0));
        assert_eq!(rows[3].average_rating, 4.5);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_average_is_rounded_to_two_decimals(pool: PgPool) {
        let mut conn = pool.acquire().await.unwrap();
        // 14/3 = 4.666.., 10/3 = 3.333.., 13/8 = 1.625 (half rounds away from zero)
        seed_cars(&mut conn, 3).await;
        rate(&mut conn, 1, &[5, 4, 5]).await;
        rate(&mut conn, 2, &[3, 3, 4]).await;
        rate(&mut conn, 3, &[1, 1, 1, 2, 2, 2, 2, 2]).await;

        let rows = Rankings::new(&mut conn).top_rated(TOP_RATED_LIMIT).await.unwrap();
        let averages: Vec<f64> = rows.iter().map(|r| r.average_rating).collect();
        assert_eq!(averages, vec![4.67, 3.33, 1.63]);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_limit_caps_result(pool: PgPool) {
        let mut conn = pool.acquire().await.unwrap();
        seed_cars(&mut conn, 12).await;
        for car_id in 1..=12 {
            rate(&mut conn, car_id, &[3]).await;
        }

        let rows = Rankings::new(&mut conn).top_rated(TOP_RATED_LIMIT).await.unwrap();
        assert_eq!(rows.len(), 10);
        assert_eq!(ids(&rows), (1..=10).collect::<Vec<_>>());

        let rows = Rankings::new(&mut conn).top_rated(3).await.unwrap();
        assert_eq!(ids(&rows), vec![1, 2, 3]);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_row_carries_car_columns(pool: PgPool) {
        let mut conn = pool.acquire().await.unwrap();
        seed_cars(&mut conn, 1).await;
        rate(&mut conn, 1, &[2, 3]).await;

        let rows = Rankings::new(&mut conn).top_rated(TOP_RATED_LIMIT).await.unwrap();
        assert_eq!(
            rows,
            vec![CarWithAverageRating {
                id: 1,
                brand: "Brand_1".to_string(),
                model: "Model_1".to_string(),
                production_year: 2001,
                average_rating: 2.5,
            }]
        );
    }
}
