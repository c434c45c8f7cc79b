use serde::{Deserialize, Serialize};

/// Lifecycle status of a tag category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Active,
    Inactive,
    Draft,
}

impl Status {
    /// Wire code, as stored in seed data
    pub fn code(&self) -> &'static str {
        match self {
            Status::Active => "ACTIVE",
            Status::Inactive => "INACTIVE",
            Status::Draft => "DRAFT",
        }
    }

    /// All statuses, in the order the form offers them
    pub fn all() -> Vec<Status> {
        vec![Status::Active, Status::Inactive, Status::Draft]
    }

    /// Parse from the wire code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ACTIVE" => Some(Status::Active),
            "INACTIVE" => Some(Status::Inactive),
            "DRAFT" => Some(Status::Draft),
            _ => None,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Status constraint applied by the list view's dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Only(Status),
}

impl StatusFilter {
    pub fn code(&self) -> &'static str {
        match self {
            StatusFilter::All => "ALL",
            StatusFilter::Only(status) => status.code(),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StatusFilter::All => "All Statuses",
            StatusFilter::Only(status) => status.code(),
        }
    }

    /// All filter choices, in the order the dropdown offers them
    pub fn all() -> Vec<StatusFilter> {
        let mut choices = vec![StatusFilter::All];
        choices.extend(Status::all().into_iter().map(StatusFilter::Only));
        choices
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ALL" => Some(StatusFilter::All),
            other => Status::from_code(other).map(StatusFilter::Only),
        }
    }

    /// Whether a record with the given status passes this filter
    pub fn matches(&self, status: Status) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(only) => *only == status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_round_trip() {
        for status in Status::all() {
            assert_eq!(Status::from_code(status.code()), Some(status));
        }
        assert_eq!(Status::from_code("PAUSED"), None);
    }

    #[test]
    fn test_filter_from_code() {
        assert_eq!(StatusFilter::from_code("ALL"), Some(StatusFilter::All));
        assert_eq!(
            StatusFilter::from_code("DRAFT"),
            Some(StatusFilter::Only(Status::Draft))
        );
        assert_eq!(StatusFilter::from_code("unknown"), None);
    }

    #[test]
    fn test_filter_matches() {
        assert!(StatusFilter::All.matches(Status::Inactive));
        assert!(StatusFilter::Only(Status::Active).matches(Status::Active));
        assert!(!StatusFilter::Only(Status::Active).matches(Status::Draft));
    }
}
