use contracts::shared::form_record::{FormError, FormRecord, Section};
use leptos::prelude::*;

/// FormStateStore holds the values of one form as a path-addressed record.
///
/// Widgets bind to `(section, field)` or `(section, index, field?)` paths and
/// call the mutating methods from their event handlers. Each successful call
/// notifies subscribers exactly once; a failed call leaves the record as it
/// was and notifies nobody. The store is `Copy` and lives as long as the
/// reactive owner that created it (the form component).
#[derive(Clone, Copy)]
pub struct FormStateStore {
    record: RwSignal<FormRecord>,
}

impl FormStateStore {
    pub fn new(initial: FormRecord) -> Self {
        Self {
            record: RwSignal::new(initial),
        }
    }

    /// Current record (tracked)
    pub fn record(&self) -> FormRecord {
        self.record.get()
    }

    /// Current record without subscribing, for submit handlers
    pub fn record_untracked(&self) -> FormRecord {
        self.record.get_untracked()
    }

    /// Replace the whole record, e.g. when hydrating from a fetched entity
    pub fn replace_record(&self, next: FormRecord) {
        self.record.set(next);
    }

    pub fn set_field(&self, section: &str, field: &str, value: String) -> Result<(), FormError> {
        self.apply("set_field", |record| record.set_field(section, field, value))
    }

    pub fn set_array_element(
        &self,
        section: &str,
        index: isize,
        value: String,
        field: Option<&str>,
    ) -> Result<(), FormError> {
        self.apply("set_array_element", |record| {
            record.set_array_element(section, index, value, field)
        })
    }

    pub fn append_array_element(&self, section: &str, field: Option<&str>) -> Result<(), FormError> {
        self.apply("append_array_element", |record| {
            record.append_array_element(section, field)
        })
    }

    pub fn remove_array_element(
        &self,
        section: &str,
        index: isize,
        field: Option<&str>,
    ) -> Result<(), FormError> {
        self.apply("remove_array_element", |record| {
            record.remove_array_element(section, index, field)
        })
    }

    /// Text bound to `(section, field)`. Reports a bad path and renders it empty.
    pub fn text(&self, section: &str, field: &str) -> String {
        self.record.with(|record| match record.text(section, field) {
            Ok(text) => text.to_string(),
            Err(e) => {
                log::warn!("form binding {}.{}: {}", section, field, e);
                String::new()
            }
        })
    }

    /// List bound to `(section, field?)`. Reports a bad path and renders it empty.
    pub fn list(&self, section: &str, field: Option<&str>) -> Vec<String> {
        self.record.with(|record| match record.list(section, field) {
            Ok(items) => items.iter().cloned().collect(),
            Err(e) => {
                log::warn!("form binding {}/{:?}: {}", section, field, e);
                Vec::new()
            }
        })
    }

    /// Memo over a single section.
    ///
    /// It only propagates when that section's value changes, so views bound to
    /// it skip re-rendering when sibling sections are edited.
    pub fn section(&self, name: &'static str) -> Memo<Option<Section>> {
        let record = self.record;
        Memo::new(move |_| record.with(|r| r.section(name).cloned()))
    }

    /// Memo over one text field, for input bindings
    pub fn text_memo(&self, section: &'static str, field: &'static str) -> Memo<String> {
        let store = *self;
        Memo::new(move |_| store.text(section, field))
    }

    /// Memo over one list, for list editors
    pub fn list_memo(
        &self,
        section: &'static str,
        field: Option<&'static str>,
    ) -> Memo<Vec<String>> {
        let store = *self;
        Memo::new(move |_| store.list(section, field))
    }

    fn apply(
        &self,
        op: &str,
        mutate: impl FnOnce(&mut FormRecord) -> Result<(), FormError>,
    ) -> Result<(), FormError> {
        let outcome = self.record.try_maybe_update(|record| {
            let result = mutate(record);
            (result.is_ok(), result)
        });
        match outcome {
            Some(Ok(())) => Ok(()),
            Some(Err(e)) => {
                log::warn!("{} rejected: {}", op, e);
                Err(e)
            }
            None => {
                log::warn!("{} dropped: form store already disposed", op);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::form_record::FieldValue;
    use leptos::reactive::owner::Owner;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn record() -> FormRecord {
        FormRecord::new()
            .with_section(
                "basicInfo",
                Section::fields([("title", FieldValue::text(""))]),
            )
            .with_section("features", Section::list([""]))
    }

    #[test]
    fn test_mutations_are_visible_through_the_store() {
        let owner = Owner::new();
        owner.with(|| {
            let store = FormStateStore::new(record());
            store.set_field("basicInfo", "title", "Demo".into()).unwrap();
            store.append_array_element("features", None).unwrap();
            store
                .set_array_element("features", 1, "Fast".into(), None)
                .unwrap();
            store.remove_array_element("features", 0, None).unwrap();

            assert_eq!(store.text("basicInfo", "title"), "Demo");
            assert_eq!(store.list("features", None), vec!["Fast".to_string()]);
        });
    }

    #[test]
    fn test_failed_mutation_keeps_record() {
        let owner = Owner::new();
        owner.with(|| {
            let store = FormStateStore::new(record());
            let before = store.record_untracked();
            assert_eq!(
                store.set_array_element("features", 3, "x".into(), None),
                Err(FormError::IndexOutOfRange { index: 3, len: 1 })
            );
            assert!(matches!(
                store.set_field("missing", "title", "x".into()),
                Err(FormError::UnknownSection(_))
            ));
            assert_eq!(store.record_untracked(), before);
        });
    }

    #[test]
    fn test_memos_follow_their_path() {
        let owner = Owner::new();
        owner.with(|| {
            let store = FormStateStore::new(record());
            let title = store.text_memo("basicInfo", "title");
            let features = store.list_memo("features", None);
            let section = store.section("features");

            store.set_field("basicInfo", "title", "Demo".into()).unwrap();
            store.append_array_element("features", None).unwrap();

            assert_eq!(title.get_untracked(), "Demo");
            assert_eq!(features.get_untracked(), vec![String::new(), String::new()]);
            assert_eq!(section.get_untracked(), Some(Section::list(["", ""])));
        });
    }

    #[test]
    fn test_notifies_once_per_successful_call() {
        let owner = Owner::new();
        owner.with(|| {
            let store = FormStateStore::new(record());
            let runs = Arc::new(AtomicUsize::new(0));
            let len = Memo::new({
                let runs = Arc::clone(&runs);
                move |_| {
                    runs.fetch_add(1, Ordering::SeqCst);
                    store.record().len()
                }
            });
            len.get_untracked();
            let initial = runs.load(Ordering::SeqCst);

            assert!(store.set_array_element("features", 9, "x".into(), None).is_err());
            assert!(store.set_field("basicInfo", "missing", "x".into()).is_err());
            len.get_untracked();
            assert_eq!(runs.load(Ordering::SeqCst), initial);

            store.append_array_element("features", None).unwrap();
            len.get_untracked();
            assert_eq!(runs.load(Ordering::SeqCst), initial + 1);
        });
    }

    #[test]
    fn test_mutation_after_disposal_is_dropped() {
        let owner = Owner::new();
        owner.with(|| {
            let store = FormStateStore::new(record());
            store.record.dispose();
            assert_eq!(store.set_field("basicInfo", "title", "Late".into()), Ok(()));
            assert_eq!(store.append_array_element("features", None), Ok(()));
        });
    }

    #[test]
    fn test_replace_record() {
        let owner = Owner::new();
        owner.with(|| {
            let store = FormStateStore::new(FormRecord::new());
            store.replace_record(record());
            assert_eq!(store.record_untracked(), record());
        });
    }
}
