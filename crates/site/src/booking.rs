//! Consultation booking, gated at the action.
//!
//! Anyone can view a plant; asking for a consultation is what requires a
//! signed-in user. An anonymous request turns into a login redirect that
//! remembers the plant page so the user lands back where they started.

use greennest_core::{DomainError, DomainResult, ItemId};
use greennest_session::{SessionGate, SessionState};

use crate::nav::LoginRedirect;

/// The booking form on the plant details page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookingForm {
    pub name: String,
    pub email: String,
}

/// What happened to a consultation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingOutcome {
    /// Confirmed for the named visitor.
    Booked { plant_id: ItemId, visitor: String },
    /// Not signed in: go log in, then come back to this plant.
    LoginRequired(LoginRedirect),
    /// Auth check still in flight; try again once it resolves.
    Pending,
}

/// Handle a consultation request for a plant.
///
/// The session is checked first (matching the original flow), then the
/// form; a validation failure is reported immediately and nothing is
/// submitted anywhere.
pub fn request_consultation(
    gate: &SessionGate,
    plant_id: &ItemId,
    form: &BookingForm,
) -> DomainResult<BookingOutcome> {
    match gate.state() {
        SessionState::Unknown => Ok(BookingOutcome::Pending),
        SessionState::Anonymous => Ok(BookingOutcome::LoginRequired(LoginRedirect::returning_to(
            format!("/plants/{plant_id}"),
        ))),
        SessionState::Authenticated(_) => {
            if form.name.trim().is_empty() {
                return Err(DomainError::validation("name is required"));
            }
            if form.email.trim().is_empty() {
                return Err(DomainError::validation("email is required"));
            }
            tracing::info!(plant = %plant_id, visitor = %form.name, "consultation booked");
            Ok(BookingOutcome::Booked {
                plant_id: plant_id.clone(),
                visitor: form.name.clone(),
            })
        }
    }
}
