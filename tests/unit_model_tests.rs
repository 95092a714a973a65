use std::collections::HashSet;

use employee_roster::models::{Book, DidacticFunction, Employee};
use rust_decimal_macros::dec;

fn default_employee() -> Employee {
    Employee::new(
        "Marya",
        "Morevna",
        "2198720310011",
        DidacticFunction::Asistent,
        dec!(2000.0),
        4,
    )
}

#[test]
fn test_employee_creation() {
    let employee = Employee::new(
        "Baba",
        "Yaga",
        "2190020310011",
        DidacticFunction::Conferentiar,
        dec!(12000.0),
        2,
    );

    assert_eq!(employee.first_name, "Baba");
    assert_eq!(employee.last_name, "Yaga");
    assert_eq!(employee.cnp, "2190020310011");
    assert_eq!(employee.function, DidacticFunction::Conferentiar);
    assert_eq!(employee.salary, dec!(12000.0));
    assert_eq!(employee.teaching_load, 2);
}

#[test]
fn test_different_employees_are_not_equal() {
    let other = Employee::new(
        "Baba",
        "Yaga",
        "2190020310011",
        DidacticFunction::Conferentiar,
        dec!(12000.0),
        2,
    );

    assert_ne!(default_employee(), other);
}

#[test]
fn test_employee_equals_identical_employee() {
    assert_eq!(default_employee(), default_employee());
}

#[test]
fn test_equality_covers_every_field() {
    let base = default_employee();

    let mut changed = base.clone();
    changed.set_last_name("Marya");
    assert_ne!(base, changed);

    let mut changed = base.clone();
    changed.set_salary(dec!(2000.01));
    assert_ne!(base, changed);

    let mut changed = base.clone();
    changed.set_teaching_load(5);
    assert_ne!(base, changed);
}

#[test]
fn test_equal_employees_hash_equally() {
    let mut set = HashSet::new();
    set.insert(default_employee());
    set.insert(default_employee());

    assert_eq!(set.len(), 1);
}

#[test]
fn test_setters_update_fields() {
    let mut employee = default_employee();

    employee.set_first_name("Ana");
    employee.set_last_name("Blandiana");
    employee.set_cnp("1234567891234");
    employee.set_function(DidacticFunction::Lecturer);

    assert_eq!(employee.first_name, "Ana");
    assert_eq!(employee.last_name, "Blandiana");
    assert_eq!(employee.cnp, "1234567891234");
    assert_eq!(employee.function, DidacticFunction::Lecturer);
}

#[test]
fn test_display_joins_fields_with_semicolon() {
    assert_eq!(
        default_employee().to_string(),
        "Marya;Morevna;2198720310011;ASISTENT;2000.0;4"
    );
}

#[test]
fn test_new_book_is_empty() {
    let book = Book::default();

    assert!(book.title().is_empty());
    assert!(book.authors.is_empty());
    assert_eq!(book.year, None);
}

#[test]
fn test_book_title() {
    let mut book = Book::default();
    book.set_title("Deathless");

    assert_eq!(book.title(), "Deathless");
    assert_eq!(book, Book::new("Deathless"));
}

#[test]
fn test_book_details() {
    let mut book = Book::new("Deathless");
    book.add_author("Catherynne M. Valente");
    book.set_publisher("Tor");
    book.set_year(2011);
    book.add_keyword("Folklore");

    assert_eq!(book.authors, vec!["Catherynne M. Valente".to_string()]);
    assert_eq!(book.publisher, "Tor");
    assert_eq!(book.year, Some(2011));
    assert!(book.has_keyword("folklore"));
    assert!(!book.has_keyword("history"));
}
