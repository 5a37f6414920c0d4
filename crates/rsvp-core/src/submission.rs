//! The raw `POST /rsvp` body and the checks it must pass before anything is
//! written.
//!
//! Every field is held as an untyped [`Value`] so that a wrong type is
//! reported as a validation failure with a readable message instead of a
//! deserialiser error.

use serde::Deserialize;
use serde_json::{Value, json};

use crate::{
  error::{Error, Result, ValidationError},
  rsvp::{NewAttendee, NewRsvp},
  validate::{IS_BOOL, IS_INTEGER, IS_NOT_BLANK, IS_STRING, validate},
};

pub const INVITE_CODE_MISMATCH: &str = "Sorry, I don't recognize this code. \
  Please double-check that it matches the one on your paper invitation \
  (case matters).";

pub const ATTENDEE_COUNT_MISMATCH: &str = "numberOfAttendees mismatch";

/// A submission exactly as received.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RsvpSubmission {
  #[serde(default)]
  pub invite_code:         Value,
  #[serde(default)]
  pub number_of_attendees: Value,
  /// Expected to be a list of `{"name": ..., "isAttending": ...}` objects.
  #[serde(default)]
  pub attendees:           Value,
  /// Omitted notes count as empty; an explicit `null` does not.
  #[serde(default = "empty_notes")]
  pub additional_notes:    Value,
}

fn empty_notes() -> Value { Value::String(String::new()) }

impl RsvpSubmission {
  /// Check the submission against `invite_code` and normalise it.
  ///
  /// Steps run in a fixed order and the first failure is returned:
  /// invite code, attendee count, notes, then each attendee in list order.
  pub fn validate(&self, invite_code: &str) -> Result<NewRsvp> {
    if self.invite_code.as_str() != Some(invite_code) {
      return Err(Error::Authorization(INVITE_CODE_MISMATCH.to_owned()));
    }

    let attendees = self.checked_attendees()?;

    validate("additionalNotes", &self.additional_notes, &[&IS_STRING])?;
    let additional_notes = self
      .additional_notes
      .as_str()
      .unwrap_or_default()
      .to_owned();

    let attendees = attendees
      .iter()
      .enumerate()
      .map(|(index, raw)| {
        parse_attendee(raw)
          .map_err(|e| e.with_extra(json!({ "attendee": index })))
      })
      .collect::<Result<Vec<_>, ValidationError>>()?;

    Ok(NewRsvp {
      additional_notes,
      attendees,
    })
  }

  /// `numberOfAttendees` must be a positive integer equal to the length of
  /// `attendees`, which must be a list.
  fn checked_attendees(&self) -> Result<&[Value], ValidationError> {
    let mismatch = || ValidationError::new(ATTENDEE_COUNT_MISMATCH);

    validate("numberOfAttendees", &self.number_of_attendees, &[&IS_INTEGER])
      .map_err(|_| mismatch())?;
    let declared = self
      .number_of_attendees
      .as_f64()
      .ok_or_else(mismatch)?;
    let attendees = self.attendees.as_array().ok_or_else(mismatch)?;

    if declared < 1.0 || declared != attendees.len() as f64 {
      return Err(mismatch());
    }
    Ok(attendees.as_slice())
  }
}

fn parse_attendee(raw: &Value) -> Result<NewAttendee, ValidationError> {
  let name = raw.get("name").unwrap_or(&Value::Null);
  let is_attending = raw.get("isAttending").unwrap_or(&Value::Null);

  validate("name", name, &[&IS_STRING, &IS_NOT_BLANK])?;
  validate("isAttending", is_attending, &[&IS_BOOL])?;

  Ok(NewAttendee {
    full_name:    name.as_str().unwrap_or_default().to_owned(),
    is_attending: is_attending.as_bool().unwrap_or_default(),
  })
}
