#![forbid(unsafe_code)]
use chrono::NaiveDate;
use repertoire::birthdays::NO_BIRTHDAYS;
use repertoire::{greeting_date, plan_greetings, upcoming_birthdays, ContactBook, Record};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn book(entries: &[(&str, Option<&str>)]) -> ContactBook {
    entries
        .iter()
        .map(|(name, birthday)| Record::new(name, Some("1234567890"), *birthday).unwrap())
        .collect()
}

#[test]
fn weekend_birthday_is_greeted_on_monday() {
    // 2024-06-10 est un lundi
    let today = date(2024, 6, 10);
    let book = book(&[("A", Some("15.06.1990")), ("B", Some("11.06.1995"))]);

    let plan = plan_greetings(&book, today);
    assert_eq!(plan.names_on(date(2024, 6, 11)), ["B"]);
    assert_eq!(plan.names_on(date(2024, 6, 17)), ["A"]);
    assert!(plan.names_on(date(2024, 6, 15)).is_empty());

    insta::assert_snapshot!(upcoming_birthdays(&book, today), @r###"
    Greeting plan for the week:
    2024-06-11: B
    2024-06-17: A
    "###);
}

#[test]
fn saturday_and_sunday_share_the_monday_group() {
    let today = date(2024, 6, 10);
    let book = book(&[
        ("Sunday", Some("16.06.2001")),
        ("Saturday", Some("15.06.1980")),
        ("Today", Some("10.06.1970")),
    ]);
    insta::assert_snapshot!(upcoming_birthdays(&book, today), @r###"
    Greeting plan for the week:
    2024-06-10: Today
    2024-06-17: Saturday, Sunday
    "###);
}

#[test]
fn window_is_seven_days_inclusive() {
    let today = date(2024, 6, 10);
    let book = book(&[
        ("Yesterday", Some("09.06.1990")),
        ("First", Some("10.06.1990")),
        ("Last", Some("16.06.1990")),
        ("Beyond", Some("17.06.1990")),
        ("NoBirthday", None),
    ]);
    let plan = plan_greetings(&book, today);
    let names: Vec<&str> = plan
        .iter()
        .flat_map(|(_, names)| names.iter().map(String::as_str))
        .collect();
    assert_eq!(names, ["First", "Last"]);
}

#[test]
fn empty_window_gives_fixed_message() {
    let today = date(2024, 6, 10);
    assert_eq!(upcoming_birthdays(&ContactBook::new(), today), NO_BIRTHDAYS);

    let book = book(&[("Winter", Some("15.01.1990")), ("Nobody", None)]);
    assert!(plan_greetings(&book, today).is_empty());
    assert_eq!(upcoming_birthdays(&book, today), NO_BIRTHDAYS);
}

#[test]
fn leap_day_falls_back_to_feb_28() {
    // 2025-02-24 est un lundi, 2025-02-28 un vendredi
    let today = date(2025, 2, 24);
    let book = book(&[("Leap", Some("29.02.2000"))]);
    let plan = plan_greetings(&book, today);
    assert_eq!(plan.names_on(date(2025, 2, 28)), ["Leap"]);
}

#[test]
fn leap_day_kept_in_leap_year() {
    // 2024-02-29 est un jeudi
    let today = date(2024, 2, 26);
    let book = book(&[("Leap", Some("29.02.2000"))]);
    let plan = plan_greetings(&book, today);
    assert_eq!(plan.names_on(date(2024, 2, 29)), ["Leap"]);
}

#[test]
fn birthdays_are_compared_within_the_current_year() {
    let today = date(2024, 12, 30);
    let book = book(&[("NewYear", Some("02.01.1990"))]);
    assert!(plan_greetings(&book, today).is_empty());
}

#[test]
fn greeting_date_only_moves_weekends() {
    assert_eq!(greeting_date(date(2024, 6, 14)), date(2024, 6, 14));
    assert_eq!(greeting_date(date(2024, 6, 15)), date(2024, 6, 17));
    assert_eq!(greeting_date(date(2024, 6, 16)), date(2024, 6, 17));
    assert_eq!(greeting_date(date(2024, 6, 17)), date(2024, 6, 17));
}

#[test]
fn end_of_calendar_does_not_overflow() {
    let book = book(&[("Last", Some("31.12.1990")), ("Other", Some("01.06.1990"))]);
    let plan = plan_greetings(&book, NaiveDate::MAX);
    assert_eq!(plan.names_on(NaiveDate::MAX), ["Last"]);
    assert!(upcoming_birthdays(&book, NaiveDate::MAX).contains("Last"));
    assert_eq!(greeting_date(NaiveDate::MAX), NaiveDate::MAX);
}
