use crate::utils::error::{Result, RosterError};

// Presence/type checks for the free-text menu input. Nothing stricter lives
// here on purpose.

pub fn require_non_empty(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RosterError::InvalidInput {
            field: field_name.to_string(),
        });
    }
    Ok(())
}

pub fn parse_age(field_name: &str, value: &str) -> Result<u32> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| RosterError::InvalidInput {
            field: field_name.to_string(),
        })
}
