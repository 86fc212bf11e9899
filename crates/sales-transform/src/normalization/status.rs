use sales_model::OrderStatus;

/// Outcome of normalizing a raw status cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusOutcome {
    /// A recognized status value.
    Parsed(OrderStatus),
    /// The cell was empty and the default was applied.
    Filled,
    /// The cell held an unrecognized value and the default was applied.
    Unrecognized,
}

impl StatusOutcome {
    pub fn status(self) -> OrderStatus {
        match self {
            StatusOutcome::Parsed(status) => status,
            StatusOutcome::Filled | StatusOutcome::Unrecognized => OrderStatus::default(),
        }
    }
}

pub fn normalize_status(value: Option<&str>) -> StatusOutcome {
    match value.map(str::trim) {
        None | Some("") => StatusOutcome::Filled,
        Some(text) => match text.parse::<OrderStatus>() {
            Ok(status) => StatusOutcome::Parsed(status),
            Err(_) => StatusOutcome::Unrecognized,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_status_is_filled_with_pending() {
        assert_eq!(normalize_status(None), StatusOutcome::Filled);
        assert_eq!(normalize_status(Some("  ")), StatusOutcome::Filled);
        assert_eq!(normalize_status(None).status(), OrderStatus::Pending);
    }

    #[test]
    fn unknown_status_falls_back_to_pending() {
        let outcome = normalize_status(Some("shipped"));
        assert_eq!(outcome, StatusOutcome::Unrecognized);
        assert_eq!(outcome.status(), OrderStatus::Pending);
    }

    #[test]
    fn known_status_is_kept() {
        assert_eq!(
            normalize_status(Some("Completed")),
            StatusOutcome::Parsed(OrderStatus::Completed)
        );
    }
}
