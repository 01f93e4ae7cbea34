use gradebook::{Letter, StudentRecord};

fn demo_record() -> StudentRecord {
    let mut record = StudentRecord::new("S001", "Alice").expect("build record");
    for g in [95.0, 82.5, 77.0] {
        record.add_grade(g).expect("add grade");
    }
    record.remove_grade_by_value(77.0).expect("remove");
    record
}

#[test]
fn letter_boundaries_round_up_into_the_higher_band() {
    assert_eq!(Letter::from_average(90.0), Letter::A);
    assert_eq!(Letter::from_average(89.999), Letter::B);
    assert_eq!(Letter::from_average(80.0), Letter::B);
    assert_eq!(Letter::from_average(69.999), Letter::C);
    assert_eq!(Letter::from_average(60.0), Letter::D);
    assert_eq!(Letter::from_average(59.999), Letter::F);
    assert_eq!(Letter::from_average(0.0), Letter::F);
}

#[test]
fn report_carries_the_seven_facts_in_order() {
    let mut record = demo_record();
    let report = record.summary_report();

    assert!(report.contains("Student Summary"));

    let position = |needle: &str| {
        report
            .find(needle)
            .unwrap_or_else(|| panic!("report missing `{needle}`:\n{report}"))
    };

    let id = position("S001");
    let name = position("Alice");
    let average = position("88.75");
    let status = position("Passed");
    assert!(id < name);
    assert!(name < average);
    assert!(average < status);

    // count and letter for the two remaining grades
    assert!(report.contains('2'));
    assert!(report.contains('B'));
    assert!(report.contains("No"));
}

#[test]
fn report_refreshes_the_honor_roll_flag() {
    let mut record = StudentRecord::new("S002", "Bob").expect("build record");
    record.add_grade(95.0).expect("add grade");

    assert!(!record.honor_roll());
    let report = record.summary_report();
    assert!(record.honor_roll());
    assert!(report.contains("Yes"));
}

#[test]
fn failing_record_reports_failed_status() {
    let mut record = StudentRecord::new("S003", "Carol").expect("build record");
    record.add_grade(40.0).expect("add grade");

    assert_eq!(record.letter(), Letter::F);
    let report = record.summary_report();
    assert!(report.contains("Failed"));
    assert!(report.contains("40.00"));
}

#[test]
fn empty_record_reports_zero_average() {
    let mut record = StudentRecord::new("S004", "Dan").expect("build record");
    let report = record.summary_report();
    assert!(report.contains("0.00"));
    assert!(report.contains("Failed"));
}

#[test]
fn record_survives_a_json_round_trip() {
    let mut record = demo_record();
    record.check_honor_roll();

    let json = serde_json::to_string(&record).expect("serialize");
    let back: StudentRecord = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(back.id(), record.id());
    assert_eq!(back.name(), record.name());
    assert_eq!(back.grades(), record.grades());
    assert_eq!(back.honor_roll(), record.honor_roll());
}
