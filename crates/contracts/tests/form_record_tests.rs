use contracts::shared::form_record::{FieldValue, FormError, FormRecord, Section};
use pretty_assertions::assert_eq;

fn basic_record() -> FormRecord {
    FormRecord::new()
        .with_section(
            "basicInfo",
            Section::fields([
                ("title", FieldValue::text("")),
                ("slug", FieldValue::text("")),
                ("description", FieldValue::text("")),
            ]),
        )
        .with_section("features", Section::list([""]))
}

fn features(record: &FormRecord) -> Vec<String> {
    record
        .list("features", None)
        .unwrap()
        .iter()
        .cloned()
        .collect()
}

#[test]
fn scenario_create_form_editing() {
    let mut record = basic_record();

    record.set_field("basicInfo", "title", "Demo").unwrap();
    assert_eq!(record.text("basicInfo", "title").unwrap(), "Demo");

    record.append_array_element("features", None).unwrap();
    assert_eq!(features(&record), vec!["", ""]);

    record.set_array_element("features", 1, "Fast", None).unwrap();
    assert_eq!(features(&record), vec!["", "Fast"]);

    record.remove_array_element("features", 0, None).unwrap();
    assert_eq!(features(&record), vec!["Fast"]);
}

#[test]
fn mutating_one_section_leaves_siblings_untouched() {
    let mut record = basic_record();
    record.set_field("basicInfo", "slug", "demo").unwrap();
    let before = record.clone();

    record.append_array_element("features", None).unwrap();
    record.set_array_element("features", 0, "Offline", None).unwrap();
    assert_eq!(record.section("basicInfo"), before.section("basicInfo"));

    let before = record.clone();
    record.set_field("basicInfo", "title", "Other").unwrap();
    assert_eq!(record.section("features"), before.section("features"));
    // The earlier snapshot still sees the old title.
    assert_eq!(before.text("basicInfo", "title").unwrap(), "");
}

fn full_record() -> FormRecord {
    basic_record()
        .with_section(
            "overview",
            Section::fields([
                ("context", FieldValue::text("Side project")),
                ("objectives", FieldValue::list(["ship", "learn", "teach"])),
            ]),
        )
        .with_section("lessonsLearned", Section::list(["Measure first", "Cache less"]))
}

fn assert_only_changed(before: &FormRecord, after: &FormRecord, changed: &str) {
    for (name, section) in before.sections() {
        if name != changed {
            assert_eq!(after.section(name), Some(section), "section `{}` changed", name);
        }
    }
    assert_ne!(before.section(changed), after.section(changed));
}

#[test]
fn remove_leaves_sibling_sections_untouched() {
    let mut record = full_record();
    let before = record.clone();

    record.remove_array_element("lessonsLearned", 0, None).unwrap();

    assert_only_changed(&before, &record, "lessonsLearned");
}

#[test]
fn nested_list_ops_leave_sibling_sections_untouched() {
    let mut record = full_record();

    let before = record.clone();
    record
        .set_array_element("overview", 1, "grow", Some("objectives"))
        .unwrap();
    assert_only_changed(&before, &record, "overview");

    let before = record.clone();
    record
        .append_array_element("overview", Some("objectives"))
        .unwrap();
    assert_only_changed(&before, &record, "overview");

    let before = record.clone();
    record
        .remove_array_element("overview", 0, Some("objectives"))
        .unwrap();
    assert_only_changed(&before, &record, "overview");

    assert_eq!(record.text("overview", "context").unwrap(), "Side project");
    let objectives: Vec<String> = record
        .list("overview", Some("objectives"))
        .unwrap()
        .iter()
        .cloned()
        .collect();
    assert_eq!(objectives, vec!["grow", "teach", ""]);
}

#[test]
fn append_adds_one_empty_element() {
    let mut record = basic_record();
    record.set_array_element("features", 0, "Search", None).unwrap();
    let len = record.list("features", None).unwrap().len();

    record.append_array_element("features", None).unwrap();

    let items = features(&record);
    assert_eq!(items.len(), len + 1);
    assert_eq!(items.last().map(String::as_str), Some(""));
}

#[test]
fn remove_keeps_relative_order() {
    let mut record = basic_record();
    for _ in 0..4 {
        record.append_array_element("features", None).unwrap();
    }
    for (i, value) in ["a", "b", "c", "d", "e"].iter().enumerate() {
        record
            .set_array_element("features", i as isize, *value, None)
            .unwrap();
    }

    record.remove_array_element("features", 2, None).unwrap();

    assert_eq!(features(&record), vec!["a", "b", "d", "e"]);
}

#[test]
fn out_of_range_index_fails_without_change() {
    let mut record = basic_record();
    record.append_array_element("features", None).unwrap();
    let before = record.clone();

    assert_eq!(
        record.set_array_element("features", -1, "x", None),
        Err(FormError::IndexOutOfRange { index: -1, len: 2 })
    );
    assert_eq!(
        record.set_array_element("features", 2, "x", None),
        Err(FormError::IndexOutOfRange { index: 2, len: 2 })
    );
    assert_eq!(
        record.remove_array_element("features", 5, None),
        Err(FormError::IndexOutOfRange { index: 5, len: 2 })
    );
    assert_eq!(record, before);
}

#[test]
fn replace_then_read_returns_the_same_record() {
    let mut record = basic_record();
    let next = FormRecord::new()
        .with_section(
            "overview",
            Section::fields([
                ("context", FieldValue::text("Internal tool")),
                ("objectives", FieldValue::list(["a", "b"])),
            ]),
        )
        .with_section("lessonsLearned", Section::list(["Measure first"]));

    record.replace_record(next.clone());

    assert_eq!(record, next);
    assert!(record.section("basicInfo").is_none());
}
