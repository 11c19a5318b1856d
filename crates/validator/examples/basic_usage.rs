//! Basic usage example for bulwark-validator

use bulwark_validator::prelude::*;

fn set_colour(colour: Option<&str>) -> Result<String, ValidationFailure> {
    let colour = validate("colour", colour)?.against_blank()?.require()?;
    Ok(colour.trim().to_owned())
}

fn set_age(age: &i32) -> Result<i32, ValidationFailure> {
    let age = bulwark_validator::validate!(age)?
        .against_invalid(|a| !(0..=150).contains(a))?
        .require()?;
    Ok(*age)
}

fn main() {
    for colour in [Some("teal"), Some(" "), Some(""), None] {
        match set_colour(colour) {
            Ok(c) => println!("✓ colour {c:?} accepted"),
            Err(e) => println!("✗ [{}] {e}", e.code()),
        }
    }

    for age in [42, -1] {
        match set_age(&age) {
            Ok(a) => println!("✓ age {a} accepted"),
            Err(e) => println!("✗ [{}] {e}", e.code()),
        }
    }
}
