use crate::error::ParseError;
use crate::models::{DidacticFunction, Employee};
use crate::parser::parse_employee_line;

/// In-memory collection of parsed employees, kept in insertion order
#[derive(Debug, Clone, Default)]
pub struct Roster {
    employees: Vec<Employee>,
}

impl Roster {
    /// Create an empty roster
    pub fn new() -> Self {
        Self {
            employees: Vec::new(),
        }
    }

    /// Add an already constructed employee
    pub fn add(&mut self, employee: Employee) {
        self.employees.push(employee);
    }

    /// Parse a line and add the resulting employee
    ///
    /// The roster is left untouched when the line is rejected.
    pub fn add_line(&mut self, line: &str, line_index: usize) -> Result<(), ParseError> {
        let employee = parse_employee_line(line, line_index)?;
        self.add(employee);
        Ok(())
    }

    /// Look up an employee by CNP
    pub fn find_by_cnp(&self, cnp: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.cnp == cnp)
    }

    /// All employees holding the given function
    pub fn with_function(&self, function: DidacticFunction) -> Vec<&Employee> {
        self.employees
            .iter()
            .filter(|e| e.function == function)
            .collect()
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Consume the roster and return all employees
    pub fn into_employees(self) -> Vec<Employee> {
        self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

impl Extend<Employee> for Roster {
    fn extend<I: IntoIterator<Item = Employee>>(&mut self, iter: I) {
        self.employees.extend(iter);
    }
}
