#![allow(dead_code)]

use employee_roster::models::{DidacticFunction, Employee};
use employee_roster::ImportMode;
use rust_decimal::Decimal;

pub const VALID_LINE: &str = "Ana;Ionescu;1234567891234;ASISTENT;1000.0;9";

/// Helper to create an employee with all fields
pub fn make_employee(
    first_name: &str,
    last_name: &str,
    cnp: &str,
    function: DidacticFunction,
    salary: Decimal,
    teaching_load: u32,
) -> Employee {
    Employee::new(first_name, last_name, cnp, function, salary, teaching_load)
}

/// Build a line from its six raw fields
pub fn build_line(fields: [&str; 6]) -> String {
    fields.join(";")
}

/// Process a roster string and return the written output
pub fn process_roster_string(
    input: &str,
    mode: ImportMode,
) -> Result<String, Box<dyn std::error::Error>> {
    let mut output = Vec::new();
    employee_roster::process_roster(input.as_bytes(), &mut output, mode)?;
    Ok(String::from_utf8(output)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_make_employee() {
        let employee = make_employee(
            "Marin",
            "Puscas",
            "1234567890876",
            DidacticFunction::Teacher,
            dec!(2800),
            5,
        );
        assert_eq!(employee.first_name, "Marin");
        assert_eq!(employee.salary, dec!(2800));
    }

    #[test]
    fn test_build_line() {
        let line = build_line(["a", "b", "c", "d", "e", "f"]);
        assert_eq!(line, "a;b;c;d;e;f");
    }
}
