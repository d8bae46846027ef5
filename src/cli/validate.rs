use anyhow::Result;
use contact_guard::{FieldId, FieldValidator};

/// `validate <field> <value>` -- check one value against the rule table.
pub fn run(field: &str, value: &str) -> Result<()> {
    if FieldId::parse(field).is_none() {
        eprintln!("Note: '{}' has no rule, any value is accepted", field);
    }
    let result = FieldValidator::default().validate_field(field, value);
    match &result.error {
        None => println!("{}: valid", field),
        Some(e) => println!("{}: invalid ({})", field, e),
    }
    if !result.valid {
        std::process::exit(2);
    }
    Ok(())
}
