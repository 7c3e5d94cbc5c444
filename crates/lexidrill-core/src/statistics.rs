//! Error-rate arithmetic and ordering shared by the store implementations.

use crate::model::ErrorRateEntry;

/// Fraction of attempts on a word that were incorrect.
///
/// `(total - correct) / total`; 0.0 when there are no attempts.
pub fn error_rate(total_attempts: i64, correct_attempts: i64) -> f64 {
    if total_attempts <= 0 {
        return 0.0;
    }
    (total_attempts - correct_attempts) as f64 / total_attempts as f64
}

/// Sort report entries descending by error rate. Ties keep their relative
/// order (stable sort), which the report contract leaves unspecified.
pub fn rank_by_error_rate(entries: &mut [ErrorRateEntry]) {
    entries.sort_by(|a, b| {
        b.error_rate
            .partial_cmp(&a.error_rate)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}
