use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{ParseError, ParseErrorKind};
use crate::models::{DidacticFunction, Employee};

pub const FIELD_DELIMITER: char = ';';
pub const FIELD_COUNT: usize = 6;
pub const CNP_LENGTH: usize = 13;

/// Convert one `;`-delimited line into a validated employee
///
/// Expected layout: `firstName;lastName;cnp;FUNCTION;salary;teachingLoad`.
/// Rules are checked in field order and the first violation is returned.
/// `line_index` only annotates the error.
pub fn parse_employee_line(line: &str, line_index: usize) -> Result<Employee, ParseError> {
    parse_fields(line).map_err(|kind| ParseError::new(line_index, kind))
}

fn parse_fields(line: &str) -> Result<Employee, ParseErrorKind> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();

    let &[first_name, last_name, cnp, function, salary, teaching_load] = fields.as_slice() else {
        return Err(ParseErrorKind::Shape {
            expected: FIELD_COUNT,
            found: fields.len(),
        });
    };

    require_text("first_name", first_name)?;
    require_text("last_name", last_name)?;

    if !is_valid_cnp(cnp) {
        return Err(ParseErrorKind::IdentityFormat {
            value: cnp.to_string(),
        });
    }

    let function = DidacticFunction::from_str(function)?;
    let salary = parse_salary(salary)?;
    let teaching_load = parse_teaching_load(teaching_load)?;

    Ok(Employee::new(
        first_name,
        last_name,
        cnp,
        function,
        salary,
        teaching_load,
    ))
}

fn require_text(field: &'static str, value: &str) -> Result<(), ParseErrorKind> {
    if value.trim().is_empty() {
        return Err(ParseErrorKind::BlankField { field });
    }
    Ok(())
}

/// A CNP is exactly `CNP_LENGTH` ASCII digits
pub fn is_valid_cnp(cnp: &str) -> bool {
    cnp.len() == CNP_LENGTH && cnp.bytes().all(|b| b.is_ascii_digit())
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Plain `digits[.digits]`; signs, exponents and `_` separators are rejected
fn parse_salary(value: &str) -> Result<Decimal, ParseErrorKind> {
    let well_formed = match value.split_once('.') {
        Some((whole, fraction)) => is_digits(whole) && is_digits(fraction),
        None => is_digits(value),
    };
    if !well_formed {
        return Err(numeric_error("salary", value));
    }

    value
        .parse::<Decimal>()
        .map_err(|_| numeric_error("salary", value))
}

fn parse_teaching_load(value: &str) -> Result<u32, ParseErrorKind> {
    if !is_digits(value) {
        return Err(numeric_error("teaching_load", value));
    }

    value
        .parse::<u32>()
        .map_err(|_| numeric_error("teaching_load", value))
}

fn numeric_error(field: &'static str, value: &str) -> ParseErrorKind {
    ParseErrorKind::NumericFormat {
        field,
        value: value.to_string(),
    }
}
