use crate::domain::common::entities::app_errors::CoreError;

/// Collapse a policy decision into `Ok(())` or a `Forbidden` error with the
/// supplied message.
pub fn ensure_policy(allowed: bool, message: &str) -> Result<(), CoreError> {
    if allowed {
        Ok(())
    } else {
        Err(CoreError::Forbidden(message.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_policy_passes_through_allowed() {
        assert!(ensure_policy(true, "nope").is_ok());
    }

    #[test]
    fn ensure_policy_denies_with_message() {
        let err = ensure_policy(false, "insufficient permissions").unwrap_err();
        assert_eq!(
            err,
            CoreError::Forbidden("insufficient permissions".to_string())
        );
    }
}
