//! User service - listing logic for the Users API.
//!
//! The `userType` filter is validated like the transaction filter, but
//! profiles have no status, so a valid value never narrows the result.

use crate::{
    data::USERS,
    error::AppError,
    models::user::{User, UserType},
};

/// Parse an optional raw `userType` value.
///
/// # Errors
///
/// - `Validation`: any non-empty value other than `ACTIVE` / `INACTIVE`
pub fn parse_user_type(raw: Option<&str>) -> Result<Option<UserType>, AppError> {
    match raw {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(|_| {
            let valid: Vec<&str> = UserType::ALL.iter().map(|t| t.as_str()).collect();
            AppError::Validation(format!(
                "Invalid user type. Valid values are: {}",
                valid.join(", ")
            ))
        }),
    }
}

/// Returns every user regardless of the filter.
pub fn filter_users(users: &[User], _user_type: Option<UserType>) -> Vec<&User> {
    users.iter().collect()
}

/// Validate the raw filter value, then list the static dataset.
pub fn list_users(raw: Option<&str>) -> Result<Vec<&'static User>, AppError> {
    let user_type = parse_user_type(raw)?;
    let users = filter_users(&USERS, user_type);

    tracing::debug!(filter = ?user_type, count = users.len(), "Listed users");

    Ok(users)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_filter_returns_full_set() {
        let filters = [None, Some(UserType::Active), Some(UserType::Inactive)];
        for filter in filters {
            let ids: Vec<u32> = filter_users(&USERS, filter).iter().map(|u| u.id).collect();
            assert_eq!(ids, [1, 2, 3]);
        }
    }

    #[test]
    fn lowercase_is_accepted() {
        assert_eq!(list_users(Some("inactive")).unwrap().len(), 3);
    }

    #[test]
    fn invalid_filter_names_valid_values() {
        let err = list_users(Some("BOGUS")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid user type. Valid values are: ACTIVE, INACTIVE"
        );
    }
}
