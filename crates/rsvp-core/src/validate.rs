//! Composable field checks over untyped JSON values.
//!
//! A [`Check`] pairs a predicate with a message template. [`validate`] runs a
//! list of checks in order and reports the first one that fails:
//!
//! ```rust
//! use rsvp_core::validate::{IS_NOT_BLANK, IS_STRING, validate};
//! use serde_json::json;
//!
//! let err = validate("name", &json!("  "), &[&IS_STRING, &IS_NOT_BLANK]).unwrap_err();
//! assert_eq!(err.message, "name cannot be blank");
//! ```

use serde_json::Value;

use crate::error::ValidationError;

/// Largest integer magnitude an IEEE-754 double represents exactly.
pub const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

/// A named predicate plus the message reported when it fails.
#[derive(Clone, Copy)]
pub struct Check {
  pub name:    &'static str,
  pub test:    fn(&Value) -> bool,
  pub message: fn(&str) -> String,
}

impl Check {
  pub fn passes(&self, value: &Value) -> bool { (self.test)(value) }

  pub fn message_for(&self, field: &str) -> String { (self.message)(field) }
}

impl std::fmt::Debug for Check {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Check").field("name", &self.name).finish()
  }
}

/// Run `checks` against `value` in order, stopping at the first failure.
pub fn validate(
  field: &str,
  value: &Value,
  checks: &[&Check],
) -> Result<(), ValidationError> {
  match checks.iter().find(|check| !check.passes(value)) {
    Some(failed) => Err(ValidationError::new(failed.message_for(field))),
    None => Ok(()),
  }
}

// ─── Primitives ──────────────────────────────────────────────────────────────

pub const IS_STRING: Check = Check {
  name:    "is_string",
  test:    Value::is_string,
  message: must_be_string,
};

/// Must only follow [`IS_STRING`]; a non-string here is a caller bug.
pub const IS_NOT_BLANK: Check = Check {
  name:    "is_not_blank",
  test:    is_not_blank,
  message: cannot_be_blank,
};

pub const IS_BOOL: Check = Check {
  name:    "is_bool",
  test:    Value::is_boolean,
  message: must_be_boolean,
};

pub const IS_INTEGER: Check = Check {
  name:    "is_integer",
  test:    is_safe_integer,
  message: must_be_integer,
};

fn must_be_string(field: &str) -> String { format!("{field} must be a string") }

fn cannot_be_blank(field: &str) -> String { format!("{field} cannot be blank") }

fn must_be_boolean(field: &str) -> String { format!("{field} must be a boolean") }

fn must_be_integer(field: &str) -> String { format!("{field} must be an integer") }

fn is_not_blank(value: &Value) -> bool {
  debug_assert!(value.is_string(), "is_not_blank applied to {value}");
  value.as_str().is_some_and(|s| !trim_blank(s).is_empty())
}

/// Strips Unicode whitespace and the byte-order mark from both ends.
fn trim_blank(s: &str) -> &str {
  s.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Finite, integral, and strictly inside the safe-integer range. The bounds
/// themselves are rejected.
fn is_safe_integer(value: &Value) -> bool {
  let Value::Number(n) = value else {
    return false;
  };
  if let Some(i) = n.as_i64() {
    return -MAX_SAFE_INTEGER < i && i < MAX_SAFE_INTEGER;
  }
  if n.is_u64() {
    // Anything that only fits in a u64 is already past the bound.
    return false;
  }
  n.as_f64().is_some_and(|f| {
    f.is_finite()
      && f.fract() == 0.0
      && f > -(MAX_SAFE_INTEGER as f64)
      && f < MAX_SAFE_INTEGER as f64
  })
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn validate_passes_silently() {
    assert!(validate("truth", &json!(true), &[&IS_BOOL]).is_ok());
    assert!(validate("name", &json!("Ada"), &[&IS_STRING, &IS_NOT_BLANK]).is_ok());
  }

  #[test]
  fn validate_reports_first_failure_only() {
    // A non-string never reaches IS_NOT_BLANK.
    let err = validate("fooField", &json!(1), &[&IS_STRING, &IS_NOT_BLANK])
      .unwrap_err();
    assert_eq!(err.message, "fooField must be a string");

    let err = validate("fooField", &json!(""), &[&IS_STRING, &IS_NOT_BLANK])
      .unwrap_err();
    assert_eq!(err.message, "fooField cannot be blank");
    assert_eq!(err.extra, None);
  }

  #[test]
  fn validate_with_no_checks_is_ok() {
    assert!(validate("anything", &Value::Null, &[]).is_ok());
  }

  #[test]
  fn is_string_accepts_only_strings() {
    assert!(IS_STRING.passes(&json!("")));
    assert!(IS_STRING.passes(&json!("foobar")));

    for v in [json!(true), json!(0), json!([]), json!({}), Value::Null, json!(1.5)] {
      assert!(!IS_STRING.passes(&v), "{v} should not be a string");
    }
    assert_eq!(IS_STRING.message_for("Yarn"), "Yarn must be a string");
  }

  #[test]
  fn is_not_blank_trims_whitespace() {
    assert!(IS_NOT_BLANK.passes(&json!("foo")));
    assert!(IS_NOT_BLANK.passes(&json!(" foo")));
    assert!(IS_NOT_BLANK.passes(&json!("   foo   ")));

    assert!(!IS_NOT_BLANK.passes(&json!("")));
    assert!(!IS_NOT_BLANK.passes(&json!(" ")));
    assert!(!IS_NOT_BLANK.passes(&json!("\u{c}\n\r\t\u{b} ")));
    assert!(!IS_NOT_BLANK.passes(&json!("\u{feff}")));
    assert!(!IS_NOT_BLANK.passes(&json!(" \u{feff}\u{a0}\u{2003} ")));
    assert!(IS_NOT_BLANK.passes(&json!("\u{feff}Ada")));
    assert_eq!(IS_NOT_BLANK.message_for("Stares"), "Stares cannot be blank");
  }

  #[test]
  fn is_bool_accepts_only_booleans() {
    assert!(IS_BOOL.passes(&json!(true)));
    assert!(IS_BOOL.passes(&json!(false)));

    for v in [json!(""), json!("true"), json!(0), json!([]), json!({}), Value::Null] {
      assert!(!IS_BOOL.passes(&v), "{v} should not be a boolean");
    }
    assert_eq!(IS_BOOL.message_for("Igotnothin"), "Igotnothin must be a boolean");
  }

  #[test]
  fn is_integer_accepts_safe_integers() {
    assert!(IS_INTEGER.passes(&json!(0)));
    assert!(IS_INTEGER.passes(&json!(1)));
    assert!(IS_INTEGER.passes(&json!(100000)));
    assert!(IS_INTEGER.passes(&json!(-42)));
    assert!(IS_INTEGER.passes(&json!(3.0)));
    assert!(IS_INTEGER.passes(&json!(MAX_SAFE_INTEGER - 1)));
    assert!(IS_INTEGER.passes(&json!(-MAX_SAFE_INTEGER + 1)));
  }

  #[test]
  fn is_integer_rejects_everything_else() {
    for v in [
      json!(""),
      json!("1"),
      json!([]),
      json!({}),
      json!(1.1),
      json!(MAX_SAFE_INTEGER),
      json!(-MAX_SAFE_INTEGER),
      json!(u64::MAX),
      json!(1e300),
      Value::Null,
    ] {
      assert!(!IS_INTEGER.passes(&v), "{v} should not be a safe integer");
    }
    assert_eq!(
      IS_INTEGER.message_for("\"Float On\""),
      "\"Float On\" must be an integer"
    );
  }
}
