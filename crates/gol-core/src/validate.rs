//! Structural validation of raw nested rows.

use crate::error::ValidationError;

/// Check that `rows` describes a non-empty rectangular grid.
///
/// Every row is compared against the first row's length, including the
/// last one. The first mismatch is reported.
///
/// # Examples
///
/// ```
/// use gol_core::{validate, ValidationError};
///
/// assert!(validate(&[[false, true], [true, false]]).is_ok());
///
/// let ragged = vec![vec![false, true], vec![true]];
/// assert_eq!(
///     validate(&ragged),
///     Err(ValidationError::RaggedRow { index: 1, actual_len: 1, expected_len: 2 }),
/// );
/// ```
pub fn validate<R: AsRef<[bool]>>(rows: &[R]) -> Result<(), ValidationError> {
    let first = rows.first().ok_or(ValidationError::EmptyGrid)?;
    let expected_len = first.as_ref().len();
    if expected_len == 0 {
        return Err(ValidationError::EmptyRow);
    }
    for (index, row) in rows.iter().enumerate().skip(1) {
        let actual_len = row.as_ref().len();
        if actual_len != expected_len {
            return Err(ValidationError::RaggedRow {
                index,
                actual_len,
                expected_len,
            });
        }
    }
    Ok(())
}
