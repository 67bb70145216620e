use anyhow::Result;
use small_roster::{InMemoryRoster, RosterError, RosterStore, Student};

fn student(name: &str, age: u32) -> Student {
    Student::new(name.to_string(), age)
}

fn names(roster: &InMemoryRoster, class: &str) -> Vec<String> {
    roster
        .students_by_class(class)
        .unwrap()
        .iter()
        .map(|s| s.name.clone())
        .collect()
}

#[test]
fn test_insertion_order_is_preserved_per_class() -> Result<()> {
    let mut roster = InMemoryRoster::new();

    // Interleave adds across two classes
    roster.add_student("A1", student("Alice", 10));
    roster.add_student("B2", student("Dora", 13));
    roster.add_student("A1", student("Bob", 11));
    roster.add_student("B2", student("Eric", 14));
    roster.add_student("A1", student("Carol", 12));

    assert_eq!(names(&roster, "A1"), vec!["Alice", "Bob", "Carol"]);
    assert_eq!(names(&roster, "B2"), vec!["Dora", "Eric"]);
    Ok(())
}

#[test]
fn test_lookup_returns_first_case_insensitive_match() -> Result<()> {
    let mut roster = InMemoryRoster::new();
    roster.add_student("A1", student("BOB", 10));
    roster.add_student("A1", student("bob", 12));

    // First match in insertion order wins, original casing is kept
    let found = roster.student_by_name("A1", "Bob")?;
    assert_eq!(found.name, "BOB");
    assert_eq!(found.age, 10);
    Ok(())
}

#[test]
fn test_not_found_messages_match_the_console_wording() {
    let mut roster = InMemoryRoster::new();
    roster.add_student("A1", student("Alice", 10));

    let err = roster.students_by_class("B2").unwrap_err();
    assert_eq!(err.to_string(), "B2 class is not found in the system");

    let err = roster.student_by_name("A1", "Carol").unwrap_err();
    assert_eq!(err.to_string(), "Carol not found in A1 class");
}

#[test]
fn test_failed_removals_mutate_nothing() {
    let mut roster = InMemoryRoster::new();
    roster.add_student("A1", student("Alice", 10));
    roster.add_student("A1", student("Bob", 11));

    // Unknown class
    assert!(matches!(
        roster.remove_student("B2", "Alice"),
        Err(RosterError::ClassNotFound { .. })
    ));
    assert_eq!(names(&roster, "A1"), vec!["Alice", "Bob"]);

    // Known class, no matching name
    assert!(matches!(
        roster.remove_student("A1", "Carol"),
        Err(RosterError::StudentNotFound { .. })
    ));
    assert_eq!(names(&roster, "A1"), vec!["Alice", "Bob"]);
}

#[test]
fn test_duplicate_name_removal_keeps_the_later_instance() -> Result<()> {
    let mut roster = InMemoryRoster::new();
    roster.add_student("A1", student("Bob", 10));
    roster.add_student("A1", student("Bob", 12));

    let removed = roster.remove_student("A1", "bob")?;
    assert_eq!(removed.age, 10);

    let students = roster.students_by_class("A1")?;
    assert_eq!(students, &[student("Bob", 12)]);
    Ok(())
}

#[test]
fn test_emptied_class_stays_known_and_reusable() -> Result<()> {
    let mut roster = InMemoryRoster::new();
    roster.add_student("A1", student("Alice", 10));
    roster.remove_student("A1", "ALICE")?;

    // Still answers with an empty list, not ClassNotFound
    assert!(roster.students_by_class("A1")?.is_empty());

    // And keeps accepting students under the same key
    roster.add_student("A1", student("Bob", 11));
    assert_eq!(names(&roster, "A1"), vec!["Bob"]);
    Ok(())
}

#[test]
fn test_roster_walkthrough() -> Result<()> {
    let mut roster = InMemoryRoster::new();
    roster.add_student("A1", student("Alice", 10));
    roster.add_student("A1", student("Bob", 11));

    let students = roster.students_by_class("A1")?;
    assert_eq!(students, &[student("Alice", 10), student("Bob", 11)]);

    let bob = roster.student_by_name("A1", "bob")?;
    assert_eq!(bob, &student("Bob", 11));

    roster.remove_student("A1", "alice")?;
    assert_eq!(roster.students_by_class("A1")?, &[student("Bob", 11)]);
    Ok(())
}
