//! Assertion helpers for API responses

use crate::error::{E2eError, Result};
use std::fmt::Debug;

pub fn assert_status_code(actual: u16, expected: u16) -> Result<()> {
    log::info!("Checking that the response status code is {}", expected);
    if actual == expected {
        Ok(())
    } else {
        Err(E2eError::AssertionFailed(format!(
            "Incorrect response status code. Expected: '{}', received: '{}'",
            expected, actual
        )))
    }
}

pub fn assert_equal<T: PartialEq + Debug>(actual: &T, expected: &T, name: &str) -> Result<()> {
    log::info!("Checking that {} equals {:?}", name, expected);
    if actual == expected {
        Ok(())
    } else {
        Err(E2eError::AssertionFailed(format!(
            "Incorrect '{}'. Expected: '{:?}', received: '{:?}'",
            name, expected, actual
        )))
    }
}

pub fn assert_is_true(actual: bool, name: &str) -> Result<()> {
    log::info!("Checking that {} is true", name);
    if actual {
        Ok(())
    } else {
        Err(E2eError::AssertionFailed(format!("Incorrect value: '{}'. Expected true, got false", name)))
    }
}

/// Both slices have the same length
pub fn assert_length<A, B>(actual: &[A], expected: &[B], name: &str) -> Result<()> {
    log::info!("Checking that the length of {} is {}", name, expected.len());
    if actual.len() == expected.len() {
        Ok(())
    } else {
        Err(E2eError::AssertionFailed(format!(
            "Incorrect '{}' length. Expected: '{}', received: '{}'",
            name,
            expected.len(),
            actual.len()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assertions() {
        assert!(assert_status_code(200, 200).is_ok());
        let err = assert_status_code(404, 200).unwrap_err();
        assert!(err.to_string().contains("Expected: '200', received: '404'"));

        assert!(assert_equal(&"a", &"a", "title").is_ok());
        assert!(assert_equal(&1, &2, "page").is_err());
        assert!(assert_is_true(true, "flag").is_ok());
        assert!(assert_is_true(false, "flag").is_err());
        assert!(assert_length(&[1, 2], &["a", "b"], "items").is_ok());
        assert!(assert_length(&[1], &["a", "b"], "items").is_err());
    }
}
