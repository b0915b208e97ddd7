//! Review use-case service.

use crate::model::review::Review;
use crate::model::EntityId;
use crate::repo::review_repo::ReviewRepository;
use crate::repo::RepoResult;

/// Use-case service wrapper for Review store operations.
pub struct ReviewService<R: ReviewRepository> {
    repo: R,
}

impl<R: ReviewRepository> ReviewService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Submits a new review from raw input.
    ///
    /// # Contract
    /// - Rating-range and required-field validation happens in the
    ///   repository write path.
    /// - Returns the stored record with its generated id.
    pub fn submit(
        &self,
        title: impl Into<String>,
        content: impl Into<String>,
        stars: i64,
    ) -> RepoResult<Review> {
        self.repo.save(&Review::new(title, content, stars))
    }

    /// Upserts an already-constructed Review.
    pub fn save(&self, review: &Review) -> RepoResult<Review> {
        self.repo.save(review)
    }

    /// Gets one Review by id.
    pub fn find_by_id(&self, id: EntityId) -> RepoResult<Option<Review>> {
        self.repo.find_by_id(id)
    }

    /// Lists every stored Review.
    pub fn find_all(&self) -> RepoResult<Vec<Review>> {
        self.repo.find_all()
    }

    /// Deletes one Review by id (idempotent).
    pub fn delete_by_id(&self, id: EntityId) -> RepoResult<()> {
        self.repo.delete_by_id(id)
    }
}
