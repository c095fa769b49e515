use super::form_validation::{validate_field_with, validate_form_with};
use super::types::*;
use crate::services::config::BookingPageConfig;
use crate::{console_debug, console_info, console_warn};

impl BookingState {
    pub fn with_config(config: BookingPageConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Reduces the state based on an action in-place (preserves Dioxus Signal reactivity)
    pub fn reduce_in_place(&mut self, action: BookingAction) {
        if self.view == BookingView::Submitted {
            // No edit flow exists once the summary is shown
            console_debug!("[REDUCER] Ignoring {:?} in submitted view", action);
            return;
        }

        match action {
            BookingAction::SetField(field, value) => {
                // Errors only appear after the first submit attempt, then track every change
                if self.submit_attempted {
                    match validate_field_with(field, &value, &self.config) {
                        Ok(()) => {
                            self.errors.remove(&field);
                        }
                        Err(error) => {
                            self.errors.insert(field, error);
                        }
                    }
                }
                self.values.set(field, value);
            }
            BookingAction::Submit => self.submit(),
        }
    }

    fn submit(&mut self) {
        self.submit_attempted = true;
        console_info!("[BOOKING] Submit requested");

        match validate_form_with(&self.values, &self.config) {
            Ok(booking) => {
                match serde_json::to_string(&booking) {
                    Ok(json) => console_debug!("[BOOKING] Submitted values: {}", json),
                    Err(e) => console_warn!("[BOOKING] Could not serialize booking: {}", e),
                }
                self.submitted = Some(booking);
                self.values = BookingFormValues::default();
                self.errors.clear();
                self.view = BookingView::Submitted;
                console_info!("[STATE] Booking view changing: Editing -> Submitted");
            }
            Err(errors) => {
                let fields: Vec<&str> = errors.keys().map(BookingField::name).collect();
                console_warn!("[BOOKING] Submission blocked, invalid fields: {:?}", fields);
                self.errors = errors;
            }
        }
    }

    pub fn error_for(&self, field: BookingField) -> Option<String> {
        self.errors.get(&field).map(ToString::to_string)
    }

    pub fn is_submitted(&self) -> bool {
        self.view == BookingView::Submitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::booking::errors::ValidationError;
    use crate::features::booking::fixtures::valid_values;

    fn state_with(values: BookingFormValues) -> BookingState {
        BookingState {
            values,
            ..BookingState::default()
        }
    }

    #[test]
    fn test_initial_state_is_editing() {
        let state = BookingState::default();
        assert_eq!(state.view, BookingView::Editing);
        assert!(state.submitted.is_none());
        assert!(state.errors.is_empty());
    }

    #[test]
    fn test_typing_before_submit_does_not_report_errors() {
        let mut state = BookingState::default();
        state.reduce_in_place(BookingAction::SetField(
            BookingField::Email,
            "not-an-email".to_string(),
        ));

        assert_eq!(state.values.email, "not-an-email");
        assert!(state.errors.is_empty());
    }

    #[test]
    fn test_blank_submit_is_blocked() {
        let mut state = BookingState::default();
        state.reduce_in_place(BookingAction::Submit);

        assert_eq!(state.view, BookingView::Editing);
        assert!(state.submitted.is_none());
        for field in BookingField::ALL {
            assert_eq!(
                state.error_for(field).as_deref(),
                Some("This field is required")
            );
        }
    }

    #[test]
    fn test_changes_after_failed_submit_revalidate_field() {
        let mut state = BookingState::default();
        state.reduce_in_place(BookingAction::Submit);

        state.reduce_in_place(BookingAction::SetField(
            BookingField::Email,
            "not-an-email".to_string(),
        ));
        assert_eq!(
            state.errors.get(&BookingField::Email),
            Some(&ValidationError::InvalidEmail)
        );

        state.reduce_in_place(BookingAction::SetField(
            BookingField::Email,
            "a@b.com".to_string(),
        ));
        assert!(state.error_for(BookingField::Email).is_none());
        // Untouched fields keep their errors
        assert!(state.error_for(BookingField::FullName).is_some());
    }

    #[test]
    fn test_valid_submit_moves_to_summary_and_resets_form() {
        let mut state = state_with(valid_values());
        state.reduce_in_place(BookingAction::Submit);

        assert!(state.is_submitted());
        assert!(state.errors.is_empty());
        assert_eq!(state.values, BookingFormValues::default());

        let booking = state.submitted.as_ref().unwrap();
        assert_eq!(booking.full_name, "Ada Obi");
        assert_eq!(booking.email, "a@b.com");
    }

    #[test]
    fn test_invalid_field_blocks_otherwise_valid_form() {
        let mut values = valid_values();
        values.message = "x".repeat(501);
        let mut state = state_with(values);
        state.reduce_in_place(BookingAction::Submit);

        assert_eq!(state.view, BookingView::Editing);
        assert_eq!(
            state.error_for(BookingField::Message).as_deref(),
            Some("Not more than 500 characters")
        );
        assert_eq!(state.errors.len(), 1);
    }

    #[test]
    fn test_submit_keeps_values_exactly_as_typed() {
        let mut values = valid_values();
        values.full_name = " Ada Obi ".to_string();
        let mut state = state_with(values);
        state.reduce_in_place(BookingAction::Submit);

        let booking = state.submitted.as_ref().unwrap();
        assert_eq!(booking.full_name, " Ada Obi ");
    }

    #[test]
    fn test_option_missing_from_config_blocks_submit() {
        let mut state = BookingState::with_config(BookingPageConfig {
            services: vec![ServiceType::GeneralCleaning],
            ..BookingPageConfig::default()
        });
        state.values = valid_values();
        state.reduce_in_place(BookingAction::Submit);

        assert_eq!(state.view, BookingView::Editing);
        assert_eq!(
            state.error_for(BookingField::ServiceType).as_deref(),
            Some("Please select a valid option")
        );

        state.reduce_in_place(BookingAction::SetField(
            BookingField::ServiceType,
            "General Cleaning".to_string(),
        ));
        assert!(state.error_for(BookingField::ServiceType).is_none());

        state.reduce_in_place(BookingAction::Submit);
        assert!(state.is_submitted());
    }

    #[test]
    fn test_submitted_view_is_terminal() {
        let mut state = state_with(valid_values());
        state.reduce_in_place(BookingAction::Submit);
        let submitted = state.submitted.clone();

        state.reduce_in_place(BookingAction::SetField(
            BookingField::FullName,
            "Someone Else".to_string(),
        ));
        state.reduce_in_place(BookingAction::Submit);

        assert!(state.is_submitted());
        assert_eq!(state.submitted, submitted);
        assert!(state.values.full_name.is_empty());
    }
}
