use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryOrder, Set, SqlErr,
    TransactionTrait,
};
use tracing::debug;

use crate::{
    entities::movie,
    error::{AppError, AppResult},
};

#[derive(Clone)]
pub struct MovieStore {
    db: DatabaseConnection,
}

impl MovieStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// All movies ordered by rating ascending (unrated first). Rewrites
    /// the ranking column in the same pass: position i of n gets rank
    /// i + 1, so the lowest-rated movie carries rank 1 and the highest
    /// rank n. All updates commit in one transaction before returning.
    pub async fn list_ranked(&self) -> AppResult<Vec<movie::Model>> {
        let mut movies =
            movie::Entity::find().order_by_asc(movie::Column::Rating).all(&self.db).await?;

        let txn = self.db.begin().await?;
        for (idx, m) in movies.iter_mut().enumerate() {
            let rank = idx as i32 + 1;
            let update = movie::ActiveModel {
                id: Set(m.id),
                ranking: Set(Some(rank)),
                ..Default::default()
            };
            update.update(&txn).await?;
            m.ranking = Some(rank);
        }
        txn.commit().await?;

        debug!(count = movies.len(), "ranked movie list");

        Ok(movies)
    }

    pub async fn get(&self, id: i32) -> AppResult<movie::Model> {
        movie::Entity::find_by_id(id).one(&self.db).await?.ok_or(AppError::NotFound)
    }

    pub async fn create(&self, model: movie::Model) -> AppResult<()> {
        let active = movie::ActiveModel {
            id: Set(model.id),
            title: Set(model.title),
            year: Set(model.year),
            description: Set(model.description),
            rating: Set(model.rating),
            ranking: Set(model.ranking),
            review: Set(model.review),
            img_url: Set(model.img_url),
        };

        match movie::Entity::insert(active).exec(&self.db).await {
            Ok(_) => Ok(()),
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(AppError::DuplicateTitle),
                _ => Err(err.into()),
            },
        }
    }

    pub async fn set_rating_and_review(
        &self,
        id: i32,
        rating: f64,
        review: String,
    ) -> AppResult<movie::Model> {
        let movie = self.get(id).await?;
        let mut active: movie::ActiveModel = movie.into();
        active.rating = Set(Some(rating));
        active.review = Set(Some(review));
        Ok(active.update(&self.db).await?)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let movie = self.get(id).await?;
        movie.delete(&self.db).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use migration::Migrator;
    use sea_orm::Database;
    use sea_orm_migration::MigratorTrait;

    use super::*;

    async fn test_store() -> MovieStore {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        MovieStore::new(db)
    }

    fn sample(id: i32, title: &str, rating: Option<f64>) -> movie::Model {
        movie::Model {
            id,
            title: title.to_string(),
            year: "1999-10-15".to_string(),
            description: Some("synopsis".to_string()),
            rating,
            ranking: None,
            review: None,
            img_url: None,
        }
    }

    #[tokio::test]
    async fn ranking_runs_from_one_to_count() {
        let store = test_store().await;
        store.create(sample(1, "Middling", Some(7.0))).await.unwrap();
        store.create(sample(2, "Best", Some(9.1))).await.unwrap();
        store.create(sample(3, "Worst", Some(4.2))).await.unwrap();

        let movies = store.list_ranked().await.unwrap();

        let titles: Vec<_> = movies.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Worst", "Middling", "Best"]);
        assert_eq!(movies[0].ranking, Some(1));
        assert_eq!(movies[2].ranking, Some(3));

        // rankings are persisted, not just returned
        assert_eq!(store.get(2).await.unwrap().ranking, Some(3));
        assert_eq!(store.get(3).await.unwrap().ranking, Some(1));
    }

    #[tokio::test]
    async fn unrated_movies_sort_first() {
        let store = test_store().await;
        store.create(sample(1, "Rated", Some(5.0))).await.unwrap();
        store.create(sample(2, "Unrated", None)).await.unwrap();

        let movies = store.list_ranked().await.unwrap();
        assert_eq!(movies[0].title, "Unrated");
        assert_eq!(movies[0].ranking, Some(1));
        assert_eq!(movies[1].ranking, Some(2));
    }

    #[tokio::test]
    async fn ranking_reflects_reduced_count_after_delete() {
        let store = test_store().await;
        store.create(sample(1, "First", Some(6.0))).await.unwrap();
        store.create(sample(2, "Second", Some(8.0))).await.unwrap();
        store.create(sample(3, "Third", Some(7.0))).await.unwrap();
        store.list_ranked().await.unwrap();

        store.delete(2).await.unwrap();

        let movies = store.list_ranked().await.unwrap();
        assert_eq!(movies.len(), 2);
        assert_eq!(movies.last().unwrap().title, "Third");
        assert_eq!(movies.last().unwrap().ranking, Some(2));
    }

    #[tokio::test]
    async fn duplicate_title_is_rejected_and_original_kept() {
        let store = test_store().await;
        store.create(sample(1, "Fight Club", Some(8.8))).await.unwrap();

        let err = store.create(sample(2, "Fight Club", None)).await.unwrap_err();
        assert!(matches!(err, AppError::DuplicateTitle));

        let original = store.get(1).await.unwrap();
        assert_eq!(original.rating, Some(8.8));
        assert!(matches!(store.get(2).await.unwrap_err(), AppError::NotFound));
    }

    #[tokio::test]
    async fn update_touches_only_rating_and_review() {
        let store = test_store().await;
        store.create(sample(1, "Fight Club", None)).await.unwrap();

        let updated = store.set_rating_and_review(1, 7.5, "Great".to_string()).await.unwrap();
        assert_eq!(updated.rating, Some(7.5));
        assert_eq!(updated.review.as_deref(), Some("Great"));
        assert_eq!(updated.title, "Fight Club");
        assert_eq!(updated.year, "1999-10-15");
        assert_eq!(updated.description.as_deref(), Some("synopsis"));
    }

    #[tokio::test]
    async fn get_and_delete_missing_id_report_not_found() {
        let store = test_store().await;
        assert!(matches!(store.get(42).await.unwrap_err(), AppError::NotFound));
        assert!(matches!(store.delete(42).await.unwrap_err(), AppError::NotFound));
    }
}
