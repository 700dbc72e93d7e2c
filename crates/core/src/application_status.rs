//! Application review lifecycle.
//!
//! Discriminants match the seed order of the `application_statuses` lookup
//! table. Every application starts as [`ApplicationStatus::Pending`]; staff
//! move it to approved or rejected, and nothing moves it back.

/// Status ID type matching SMALLINT/SMALLSERIAL in the database.
pub type StatusId = i16;

#[repr(i16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApplicationStatus {
    #[default]
    Pending = 1,
    Approved = 2,
    Rejected = 3,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 3] = [Self::Pending, Self::Approved, Self::Rejected];

    /// Return the database status ID.
    pub fn id(self) -> StatusId {
        self as StatusId
    }

    /// Look up a status by its database ID.
    pub fn from_id(id: StatusId) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    /// Machine name, as stored in `application_statuses.name`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Human-facing label shown to applicants.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Čeká",
            Self::Approved => "Schváleno",
            Self::Rejected => "Zamítnuto",
        }
    }

    /// Approved and rejected are terminal.
    pub fn is_final(self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Whether staff may move an application from `self` to `next`.
    pub fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Approved) | (Self::Pending, Self::Rejected)
        )
    }
}

impl From<ApplicationStatus> for StatusId {
    fn from(value: ApplicationStatus) -> Self {
        value as StatusId
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn default_is_pending() {
        assert_eq!(ApplicationStatus::default(), ApplicationStatus::Pending);
        assert_eq!(ApplicationStatus::default().id(), 1);
    }

    #[test]
    fn ids_round_trip_and_unknown_ids_are_rejected() {
        for status in ApplicationStatus::ALL {
            assert_eq!(ApplicationStatus::from_id(status.id()), Some(status));
        }
        assert_matches!(ApplicationStatus::from_id(0), None);
        assert_matches!(ApplicationStatus::from_id(4), None);
        assert_matches!(ApplicationStatus::from_id(-1), None);
    }

    #[test]
    fn pending_moves_to_either_decision() {
        let pending = ApplicationStatus::Pending;
        assert!(pending.can_transition_to(ApplicationStatus::Approved));
        assert!(pending.can_transition_to(ApplicationStatus::Rejected));
        assert!(!pending.can_transition_to(ApplicationStatus::Pending));
    }

    #[test]
    fn decisions_never_return_to_pending() {
        for decided in [ApplicationStatus::Approved, ApplicationStatus::Rejected] {
            assert!(decided.is_final());
            for next in ApplicationStatus::ALL {
                assert!(!decided.can_transition_to(next), "{decided:?} -> {next:?}");
            }
        }
    }

    #[test]
    fn labels_and_names() {
        assert_eq!(ApplicationStatus::Approved.name(), "approved");
        assert_eq!(ApplicationStatus::Rejected.label(), "Zamítnuto");
    }
}
