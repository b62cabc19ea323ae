//! Form validation walkthrough, no network involved.
//!
//! Run with: cargo run --example validate_form

use postboard_lib::validation::{FieldValue, FormValidation, Rule};

fn main() {
    let mut form = FormValidation::new()
        .field(
            "title",
            "",
            vec![
                Rule::required().with_message("Title is required"),
                Rule::min_length(3).with_message("Title must be at least 3 characters"),
            ],
        )
        .field("body", "", vec![Rule::min_length(30)])
        .field("email", "", vec![Rule::email()])
        .field("userId", FieldValue::Missing, vec![Rule::required()]);

    // Pristine fields stay quiet even though most are invalid.
    println!("pristine errors: {:?}", form.errors());

    // Typing marks a field dirty; its errors surface immediately.
    form.update_field("title", "ab");
    println!("after typing 'ab': {:?}", form.validate_field("title"));

    // Blurring a field marks it touched.
    form.touch_field("email");
    form.update_field("email", "someone@example");
    println!("email errors: {:?}", form.validate_field("email"));

    // Submit: everything gets touched, all errors materialize.
    let valid = form.validate_all_fields();
    println!("form valid: {valid}");
    for (field, errors) in form.errors() {
        println!("  {field}: {errors:?}");
    }

    // Fix the fields and the derived views follow.
    form.update_field("title", "A proper title");
    form.update_field("body", "A body long enough to satisfy the thirty character rule.");
    form.update_field("email", "someone@example.com");
    form.update_field("userId", 7i64);
    println!("after fixes, form valid: {}", form.is_valid());
}
