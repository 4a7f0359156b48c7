//! Admission policy for newly selected batches.
//!
//! The list never holds more than a fixed number of files in `Pending` or
//! `Uploading` status; a new batch takes the remaining slots front-first.

/// Most files allowed in pending or uploading status at once
pub const MAX_ACTIVE_FILES: usize = 5;

/// Signal the UI surfaces after planning a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdmissionOutcome {
    /// The whole batch fits
    Accepted,
    /// Only the first `admitted` files fit
    Truncated,
    /// No slots left, nothing was admitted
    LimitReached,
}

/// How many files to take from the front of the batch, and why
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdmissionPlan {
    pub admitted: usize,
    pub outcome: AdmissionOutcome,
}

pub fn plan(batch_len: usize, active_count: usize, max_active: usize) -> AdmissionPlan {
    if batch_len == 0 {
        return AdmissionPlan {
            admitted: 0,
            outcome: AdmissionOutcome::Accepted,
        };
    }
    let remaining = max_active.saturating_sub(active_count);
    if remaining == 0 {
        return AdmissionPlan {
            admitted: 0,
            outcome: AdmissionOutcome::LimitReached,
        };
    }
    AdmissionPlan {
        admitted: batch_len.min(remaining),
        outcome: if batch_len > remaining {
            AdmissionOutcome::Truncated
        } else {
            AdmissionOutcome::Accepted
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_fitting_batch_is_accepted_whole() {
        let result = plan(3, 0, MAX_ACTIVE_FILES);
        assert_eq!(result.admitted, 3);
        assert_eq!(result.outcome, AdmissionOutcome::Accepted);
    }

    #[test]
    fn an_exactly_fitting_batch_is_not_truncated() {
        let result = plan(5, 0, MAX_ACTIVE_FILES);
        assert_eq!(result.admitted, 5);
        assert_eq!(result.outcome, AdmissionOutcome::Accepted);
    }

    #[test]
    fn oversized_batches_take_only_the_remaining_slots() {
        let result = plan(4, 3, MAX_ACTIVE_FILES);
        assert_eq!(result.admitted, 2);
        assert_eq!(result.outcome, AdmissionOutcome::Truncated);
    }

    #[test]
    fn a_full_list_admits_nothing() {
        let full = plan(1, 5, MAX_ACTIVE_FILES);
        assert_eq!(full.admitted, 0);
        assert_eq!(full.outcome, AdmissionOutcome::LimitReached);

        let over = plan(3, 7, MAX_ACTIVE_FILES);
        assert_eq!(over.admitted, 0);
        assert_eq!(over.outcome, AdmissionOutcome::LimitReached);
    }

    #[test]
    fn empty_batches_are_a_quiet_no_op() {
        let result = plan(0, 5, MAX_ACTIVE_FILES);
        assert_eq!(result.admitted, 0);
        assert_eq!(result.outcome, AdmissionOutcome::Accepted);
    }
}
