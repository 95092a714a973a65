pub mod book;
pub mod employee;
pub mod function;

pub use book::Book;
pub use employee::Employee;
pub use function::DidacticFunction;
