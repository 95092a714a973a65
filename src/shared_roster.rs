use std::sync::Arc;

use tokio::sync::RwLock;

use crate::error::ParseError;
use crate::models::Employee;
use crate::parser::parse_employee_line;
use crate::roster::Roster;

/// Roster handle that can be shared across tokio tasks
///
/// Parsing happens outside the lock; only the final insert takes the
/// write lock, so many tasks can feed lines at once.
///
/// # Example
///
/// ```no_run
/// use employee_roster::shared_roster::SharedRoster;
///
/// #[tokio::main]
/// async fn main() {
///     let roster = SharedRoster::new();
///     let handle = roster.clone_handle();
///
///     tokio::spawn(async move {
///         handle
///             .add_line("Marin;Puscas;1234567890876;TEACHER;2800;5", 0)
///             .await
///             .unwrap();
///     })
///     .await
///     .unwrap();
///
///     assert_eq!(roster.len().await, 1);
/// }
/// ```
pub struct SharedRoster {
    inner: Arc<RwLock<Roster>>,
}

impl SharedRoster {
    /// Create an empty shared roster
    pub fn new() -> Self {
        Self::from_roster(Roster::new())
    }

    /// Wrap an existing roster
    pub fn from_roster(roster: Roster) -> Self {
        Self {
            inner: Arc::new(RwLock::new(roster)),
        }
    }

    /// Parse a line and add the employee
    pub async fn add_line(&self, line: &str, line_index: usize) -> Result<(), ParseError> {
        let employee = parse_employee_line(line, line_index)?;
        self.inner.write().await.add(employee);
        Ok(())
    }

    /// Parse a batch of indexed lines concurrently
    ///
    /// Valid lines are added in a single write; every rejected line is
    /// returned, ordered by line index.
    pub async fn import_lines<I, S>(&self, lines: I) -> Vec<ParseError>
    where
        I: IntoIterator<Item = (usize, S)>,
        S: AsRef<str>,
    {
        let parses = lines
            .into_iter()
            .map(|(index, line)| async move { parse_employee_line(line.as_ref(), index) });

        let mut parsed = Vec::new();
        let mut rejected = Vec::new();
        for result in futures::future::join_all(parses).await {
            match result {
                Ok(employee) => parsed.push(employee),
                Err(err) => rejected.push(err),
            }
        }

        self.inner.write().await.extend(parsed);

        rejected.sort_by_key(|err| err.line_index);
        rejected
    }

    /// Look up an employee by CNP (read lock only)
    pub async fn find_by_cnp(&self, cnp: &str) -> Option<Employee> {
        self.inner.read().await.find_by_cnp(cnp).cloned()
    }

    /// Snapshot of all employees, sorted by CNP
    pub async fn all_employees(&self) -> Vec<Employee> {
        let mut employees = self.inner.read().await.employees().to_vec();
        employees.sort_by(|a, b| a.cnp.cmp(&b.cnp));
        employees
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    /// Clone handle for sharing across tasks
    ///
    /// Both handles point at the same roster.
    pub fn clone_handle(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Default for SharedRoster {
    fn default() -> Self {
        Self::new()
    }
}
