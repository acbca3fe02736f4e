use rstest::rstest;
use taskpad::domain::task::{Filter, Priority};
use taskpad::services::TaskList;

/// Four tasks, the second and fourth completed.
fn sample_list() -> TaskList {
    let mut list = TaskList::new();
    let mut ids = Vec::new();
    for text in ["Write report", "Buy milk", "Review PR", "Book flights"] {
        ids.push(list.add_task(text, Priority::Low).unwrap());
    }
    list.toggle_completion(ids[1]);
    list.toggle_completion(ids[3]);
    list
}

#[rstest]
#[case(Filter::All, vec!["Write report", "Buy milk", "Review PR", "Book flights"])]
#[case(Filter::Active, vec!["Write report", "Review PR"])]
#[case(Filter::Completed, vec!["Buy milk", "Book flights"])]
fn test_visible_tasks_match_filter(#[case] filter: Filter, #[case] expected: Vec<&str>) {
    let mut list = sample_list();
    list.set_filter(filter);

    let visible: Vec<_> = list.visible_tasks().map(|t| t.text.as_str()).collect();
    assert_eq!(visible, expected);
}

#[rstest]
#[case(Filter::All)]
#[case(Filter::Active)]
#[case(Filter::Completed)]
fn test_visible_tasks_agree_with_filter_predicate(#[case] filter: Filter) {
    let mut list = sample_list();
    list.set_filter(filter);

    let expected: Vec<_> = list.tasks().iter().filter(|t| filter.matches(t)).cloned().collect();
    let visible: Vec<_> = list.visible_tasks().cloned().collect();
    assert_eq!(visible, expected);
}

#[test]
fn test_filtering_leaves_collection_untouched() {
    let mut list = sample_list();
    let before = list.tasks().to_vec();

    for filter in [Filter::Active, Filter::Completed, Filter::All] {
        list.set_filter(filter);
        let _ = list.visible_tasks().count();
    }

    assert_eq!(list.tasks(), &before[..]);
}
