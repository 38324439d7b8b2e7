pub mod cart_queries;
pub mod category_queries;
pub mod event_queries;
pub mod location_queries;
pub mod order_queries;
pub mod payment_queries;
pub mod product_queries;
pub mod user_queries;

use crate::error::AppError;

pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation())
}

/// Matches a violation of the default `<table>_<column>_fkey` constraint.
pub(crate) fn is_foreign_key_violation(err: &sqlx::Error, column: &str) -> bool {
    err.as_database_error().is_some_and(|db_err| {
        db_err.is_foreign_key_violation()
            && db_err
                .constraint()
                .is_some_and(|name| name.ends_with(&format!("_{column}_fkey")))
    })
}

/// Writes keyed by a token's user id fail on the foreign key once that user
/// is gone.
pub(crate) fn missing_user(err: sqlx::Error, column: &str) -> AppError {
    if is_foreign_key_violation(&err, column) {
        AppError::NotFound("User not found".to_string())
    } else {
        err.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_errors_pass_through() {
        assert!(!is_unique_violation(&sqlx::Error::RowNotFound));
        assert!(!is_foreign_key_violation(&sqlx::Error::RowNotFound, "user_id"));
        assert!(matches!(
            missing_user(sqlx::Error::PoolTimedOut, "user_id"),
            AppError::DatabaseError(_)
        ));
    }
}
