#![forbid(unsafe_code)]
#![cfg(feature = "serde")]
use repertoire::{ContactBook, PhoneNumber, Record};

#[test]
fn book_serializes_as_record_list() {
    let mut book = ContactBook::new();
    book.add_record(Record::new("Alice", Some("1111111111"), Some("15.06.1990")).unwrap());
    let json = serde_json::to_value(&book).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "name": "Alice", "phones": ["1111111111"], "birthday": "15.06.1990" }
        ])
    );
    let back: ContactBook = serde_json::from_value(json).unwrap();
    assert_eq!(back, book);
}

#[test]
fn deserialization_enforces_validation() {
    assert!(serde_json::from_str::<PhoneNumber>("\"12-34\"").is_err());
    let bad = r#"{ "name": "Alice", "phones": [], "birthday": "2024-06-15" }"#;
    assert!(serde_json::from_str::<Record>(bad).is_err());
    let nameless = r#"{ "name": "" }"#;
    assert!(serde_json::from_str::<Record>(nameless).is_err());
}
