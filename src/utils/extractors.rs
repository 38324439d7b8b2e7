use axum::extract::FromRequest;
use uuid::Uuid;

use crate::{
    error::{AppError, Result},
    utils::jwt::Claims,
};

/// `axum::Json` with rejections rendered as `AppError::Validation`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

pub fn extract_user_id(claims: &Claims) -> Result<Uuid> {
    Uuid::parse_str(&claims.sub).map_err(|_| AppError::Unauthorized("Invalid token".to_string()))
}

pub fn parse_product_id(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw.trim())
        .map_err(|_| AppError::Validation("Invalid product ID format".to_string()))
}

/// Treats `None` and whitespace-only strings alike.
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && !email.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_user_id() {
        let id = Uuid::new_v4();
        let claims = Claims {
            sub: id.to_string(),
            email: "a@b.com".to_string(),
            exp: 0,
        };
        assert_eq!(extract_user_id(&claims).unwrap(), id);

        let claims = Claims {
            sub: "42".to_string(),
            email: "a@b.com".to_string(),
            exp: 0,
        };
        assert!(matches!(
            extract_user_id(&claims),
            Err(AppError::Unauthorized(_))
        ));
    }

    #[test]
    fn test_parse_product_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_product_id(&id.to_string()).unwrap(), id);

        let err = parse_product_id("12345").unwrap_err();
        assert!(matches!(err, AppError::Validation(ref msg) if msg == "Invalid product ID format"));
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(None));
        assert!(is_blank(Some("")));
        assert!(is_blank(Some("   ")));
        assert!(!is_blank(Some("Visa")));
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("test@example.com"));
        assert!(is_valid_email("user.name@domain.co.uk"));
        assert!(is_valid_email("a@b.c"));

        assert!(!is_valid_email(""));
        assert!(!is_valid_email("@"));
        assert!(!is_valid_email("test@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("test@domain"));
        assert!(!is_valid_email("test@@example.com"));
        assert!(!is_valid_email("te st@example.com"));
    }
}
