//! Form validation
//!
//! A declarative validation layer for form-driven input: each field holds a
//! scalar [`FieldValue`], an ordered list of [`Rule`]s, and touched/dirty
//! flags. Errors only surface once a field has been interacted with
//! (touched) or edited (dirty), and every violated rule reports at once.
//!
//! # Example
//!
//! ```ignore
//! use postboard_lib::validation::{FormValidation, Rule};
//!
//! let mut form = FormValidation::new()
//!     .field("title", "", vec![Rule::required(), Rule::min_length(3)])
//!     .field("email", "", vec![Rule::email()]);
//!
//! form.update_field("title", "ab");
//! assert_eq!(form.validate_field("title").len(), 1);
//!
//! if form.validate_all_fields() {
//!     // Submit
//! }
//! ```

mod form;
mod rules;
mod value;

pub use form::*;
pub use rules::*;
pub use value::*;
