//! Integration tests for a full task session: create, suggest, complete, review.

use chrono::NaiveDate;
use smartdo_core::{
    aggregate, build_classifier, create_task, month_view, rank, suggest, ClassifierConfig,
    ClassifierKind, CoreError, PriorityLabel, Recurrence, TaskInput, TaskStore,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn input(title: &str, due: &str, minutes: &str, importance: &str, category: &str) -> TaskInput {
    TaskInput {
        title: title.into(),
        description: String::new(),
        due_date: due.into(),
        estimated_time: minutes.into(),
        importance: importance.into(),
        category: category.into(),
        recurrence: "none".into(),
    }
}

#[test]
fn test_full_session_workflow() {
    let classifier = build_classifier(&ClassifierConfig {
        kind: ClassifierKind::Rules,
        ..ClassifierConfig::default()
    })
    .unwrap();
    let mut store = TaskStore::new();

    let inputs = [
        input("Gym", "2024-01-20", "60", "low", "fitness"),
        input("Report", "2024-01-02", "30", "high", "work"),
        input("Flashcards", "2024-01-03", "15", "medium", "study"),
    ];
    for raw in &inputs {
        store.add(create_task(raw, today(), classifier.as_ref()).unwrap());
    }

    let order: Vec<_> = rank(store.active()).iter().map(|t| (t.title.as_str(), t.priority)).collect();
    assert_eq!(
        order,
        [
            ("Report", PriorityLabel::High),
            ("Flashcards", PriorityLabel::Medium),
            ("Gym", PriorityLabel::Low),
        ]
    );
    assert_eq!(suggest(store.active()).unwrap().title, "Report");

    // Report is second in store order.
    store.complete(2).unwrap();
    assert_eq!(suggest(store.active()).unwrap().title, "Flashcards");

    store.complete(1).unwrap();
    let report = aggregate(store.completed()).unwrap();
    assert_eq!(report.total_completed, 2);
    // 2024-01-02 is a Tuesday, 2024-01-20 a Saturday.
    assert_eq!(report.most_productive_weekday, "Tuesday");
    let categories: Vec<_> = report.counts_by_category.keys().map(String::as_str).collect();
    assert_eq!(categories, ["Work", "Fitness"]);

    let view = month_view(2024, 1, store.active()).unwrap();
    assert_eq!(view.marked_days(), [3]);
}

#[test]
fn test_invalid_input_leaves_store_untouched() {
    let classifier = build_classifier(&ClassifierConfig::default()).unwrap();
    let mut store = TaskStore::new();

    let err = create_task(&input("Bad", "2024-01-05", "abc", "high", "work"), today(), classifier.as_ref())
        .unwrap_err();
    assert!(matches!(err, CoreError::InvalidInput { .. }));
    assert!(store.active().is_empty());

    assert!(matches!(suggest(store.active()), Err(CoreError::EmptyCollection(_))));
    assert!(matches!(aggregate(store.completed()), Err(CoreError::EmptyCollection(_))));
    assert!(matches!(store.complete(1), Err(CoreError::IndexOutOfRange { .. })));
}

#[test]
fn test_priority_is_not_recomputed_later() {
    let classifier = build_classifier(&ClassifierConfig {
        kind: ClassifierKind::Rules,
        ..ClassifierConfig::default()
    })
    .unwrap();

    let task = create_task(&input("Later", "2024-03-01", "30", "low", "home"), today(), classifier.as_ref()).unwrap();
    assert_eq!(task.priority, PriorityLabel::Low);

    // Long after the due date the stored label is unchanged.
    let much_later = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    assert!(task.is_overdue(much_later));
    assert_eq!(task.priority, PriorityLabel::Low);
    assert_eq!(task.recurrence, Recurrence::None);
}

#[test]
fn test_seed_model_classifies_seed_like_tasks() {
    let classifier = build_classifier(&ClassifierConfig::default()).unwrap();
    let task = create_task(&input("Urgent", "2024-01-02", "30", "High", "Work"), today(), classifier.as_ref()).unwrap();
    assert_eq!(task.priority, PriorityLabel::High);
}
