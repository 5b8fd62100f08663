use crate::Student;

#[test]
fn test_student_new() {
    let student = Student::new(
        "Alice Doe".to_string(),
        "alice@example.com".to_string(),
        Some(21),
    );

    assert_eq!(student.name, "Alice Doe");
    assert_eq!(student.email, "alice@example.com");
    assert_eq!(student.age, Some(21));
}

#[test]
fn test_student_new_without_age() {
    let student = Student::new("Bob".to_string(), "bob@example.com".to_string(), None);

    assert_eq!(student.age, None);
}

#[test]
fn test_student_ids_are_unique() {
    let a = Student::new("A".to_string(), "a@example.com".to_string(), None);
    let b = Student::new("B".to_string(), "b@example.com".to_string(), None);

    assert_ne!(a.id, b.id);
}

#[test]
fn test_student_serializes_optional_age() {
    let student = Student::new("A".to_string(), "a@example.com".to_string(), None);
    let json = serde_json::to_value(&student).unwrap();

    assert_eq!(json["name"], "A");
    assert_eq!(json["age"], serde_json::Value::Null);
}
