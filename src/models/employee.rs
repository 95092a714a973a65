use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use super::function::DidacticFunction;

/// Employee record
///
/// Field order matches the delimited line format, so serializing with
/// the `;` delimiter produces a line the parser accepts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Employee {
    pub first_name: String,
    pub last_name: String,
    pub cnp: String,
    pub function: DidacticFunction,
    pub salary: Decimal,
    pub teaching_load: u32,
}

impl Employee {
    /// Create an employee directly, without validating any field
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        cnp: impl Into<String>,
        function: DidacticFunction,
        salary: Decimal,
        teaching_load: u32,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            cnp: cnp.into(),
            function,
            salary,
            teaching_load,
        }
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) {
        self.first_name = first_name.into();
    }

    pub fn set_last_name(&mut self, last_name: impl Into<String>) {
        self.last_name = last_name.into();
    }

    pub fn set_cnp(&mut self, cnp: impl Into<String>) {
        self.cnp = cnp.into();
    }

    pub fn set_function(&mut self, function: DidacticFunction) {
        self.function = function;
    }

    pub fn set_salary(&mut self, salary: Decimal) {
        self.salary = salary;
    }

    pub fn set_teaching_load(&mut self, teaching_load: u32) {
        self.teaching_load = teaching_load;
    }
}

// Inverse of `parser::parse_employee_line`
impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{};{};{};{};{};{}",
            self.first_name,
            self.last_name,
            self.cnp,
            self.function,
            self.salary,
            self.teaching_load
        )
    }
}
