//! Review operations

use sqlx::{Pool, Sqlite};

use super::{current_timestamp, get, get_all, insert, lookup, update};
use crate::database::error::{StoreError, StoreResult};
use crate::database::table::{Index, Key, Table};
use crate::database::{NewReview, Review, ReviewStatus};

pub const MIN_RATING: i64 = 1;
pub const MAX_RATING: i64 = 5;

/// Insert a review; user-created reviews are approved immediately
pub async fn create_review(pool: &Pool<Sqlite>, review: NewReview) -> StoreResult<i64> {
    if !(MIN_RATING..=MAX_RATING).contains(&review.rating) {
        return Err(StoreError::Invalid(format!(
            "rating must be between {} and {}, got {}",
            MIN_RATING, MAX_RATING, review.rating
        )));
    }

    let record = Review {
        id: 0,
        song_id: review.song_id,
        user_id: review.user_id,
        user_name: review.user_name,
        rating: review.rating,
        comment: review.comment,
        created_at: current_timestamp(),
        likes: 0,
        status: ReviewStatus::Approved,
    };
    insert(pool, &record).await
}

pub async fn get_reviews_by_song(pool: &Pool<Sqlite>, song_id: i64) -> StoreResult<Vec<Review>> {
    lookup(pool, Index::ReviewSong, Key::Int(song_id)).await
}

pub async fn get_reviews_by_user(pool: &Pool<Sqlite>, user_id: i64) -> StoreResult<Vec<Review>> {
    lookup(pool, Index::ReviewUser, Key::Int(user_id)).await
}

pub async fn get_all_reviews(pool: &Pool<Sqlite>) -> StoreResult<Vec<Review>> {
    get_all(pool).await
}

/// Mean rating of a set of reviews, 0.0 when there are none
pub fn average_rating(reviews: &[Review]) -> f64 {
    if reviews.is_empty() {
        return 0.0;
    }
    let sum: i64 = reviews.iter().map(|r| r.rating).sum();
    sum as f64 / reviews.len() as f64
}

pub async fn average_song_rating(pool: &Pool<Sqlite>, song_id: i64) -> StoreResult<f64> {
    let reviews = get_reviews_by_song(pool, song_id).await?;
    Ok(average_rating(&reviews))
}

/// Change a review's moderation status
pub async fn set_review_status(
    pool: &Pool<Sqlite>,
    review_id: i64,
    status: ReviewStatus,
) -> StoreResult<()> {
    let mut review: Review = get(pool, review_id).await?.ok_or(StoreError::NotFound {
        table: Table::Reviews,
        id: review_id,
    })?;
    review.status = status;
    update(pool, &review).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(rating: i64) -> Review {
        Review {
            id: 0,
            song_id: 1,
            user_id: 1,
            user_name: "RockFan".into(),
            rating,
            comment: String::new(),
            created_at: 0,
            likes: 0,
            status: ReviewStatus::Approved,
        }
    }

    #[test]
    fn average_of_no_reviews_is_zero() {
        let avg = average_rating(&[]);
        assert_eq!(avg, 0.0);
        assert!(!avg.is_nan());
    }

    #[test]
    fn average_is_mean_of_ratings() {
        assert_eq!(average_rating(&[review(5)]), 5.0);
        assert_eq!(average_rating(&[review(5), review(4)]), 4.5);
        assert_eq!(average_rating(&[review(1), review(2), review(3)]), 2.0);
    }
}
