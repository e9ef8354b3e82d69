//! Record store and view pipeline tests

mod common;

use common::{test_model, visible_ids};
use gridlite::messages::{Action, Msg};
use gridlite::records::{
    derive_view, seed_records, Field, FilterDirective, Record, SortDirection, SortDirective,
};
use gridlite::update::update;

fn sort(field: Field, direction: SortDirection) -> SortDirective {
    SortDirective::new(field, direction)
}

// ========================================================================
// derive_view properties
// ========================================================================

#[test]
fn test_derive_view_is_pure() {
    let records = seed_records();
    let snapshot = records.clone();
    let directive = sort(Field::DueDate, SortDirection::Desc);
    let filter = FilterDirective::new(Field::Status, "o");

    let first = derive_view(&records, Some(&directive), Some(&filter));
    let second = derive_view(&records, Some(&directive), Some(&filter));

    assert_eq!(first, second);
    assert_eq!(records, snapshot);
}

#[test]
fn test_sort_is_monotonic_for_every_field() {
    let records = seed_records();
    for field in Field::ALL {
        for direction in [SortDirection::Asc, SortDirection::Desc] {
            let view = derive_view(&records, Some(&sort(field, direction)), None);
            let values: Vec<&str> = view.records(&records).map(|r| r.get(field)).collect();
            for pair in values.windows(2) {
                match direction {
                    SortDirection::Asc => assert!(pair[0] <= pair[1], "{field} {pair:?}"),
                    SortDirection::Desc => assert!(pair[0] >= pair[1], "{field} {pair:?}"),
                }
            }
        }
    }
}

#[test]
fn test_sort_ties_keep_canonical_order() {
    let records = seed_records();
    let view = derive_view(&records, Some(&sort(Field::Priority, SortDirection::Asc)), None);
    // High, Low(4), Low(5), Medium(1), Medium(3)
    assert_eq!(view.indices(), &[1, 3, 4, 0, 2]);
}

#[test]
fn test_filter_keeps_exactly_the_matching_records() {
    let records = seed_records();
    let filter = FilterDirective::new(Field::Submitter, "AN");
    let view = derive_view(&records, None, Some(&filter));

    for (i, record) in records.iter().enumerate() {
        let contains = record.submitter.to_lowercase().contains("an");
        assert_eq!(view.indices().contains(&i), contains, "{}", record.submitter);
    }
}

#[test]
fn test_filter_on_empty_store() {
    let view = derive_view(&[], None, Some(&FilterDirective::new(Field::Id, "1")));
    assert!(view.is_empty());
}

#[test]
fn test_empty_filter_matches_everything() {
    let records = seed_records();
    let view = derive_view(&records, None, Some(&FilterDirective::new(Field::Url, "")));
    assert_eq!(view.len(), records.len());
}

#[test]
fn test_sort_compares_text_not_numbers() {
    let records: Vec<Record> = ["9", "10", "2"]
        .iter()
        .map(|id| Record::default().with(Field::Id, *id))
        .collect();
    let view = derive_view(&records, Some(&sort(Field::Id, SortDirection::Asc)), None);
    let ids: Vec<&str> = view.records(&records).map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["10", "2", "9"]);
}

// ========================================================================
// Through the command surface
// ========================================================================

#[test]
fn test_sort_priority_desc_then_filter_in_progress() {
    let mut model = test_model();
    update(
        &mut model,
        Msg::Action(Action::Sort(sort(Field::Priority, SortDirection::Desc))),
    );
    update(
        &mut model,
        Msg::Action(Action::Filter(FilterDirective::new(Field::Status, "progress"))),
    );

    assert_eq!(visible_ids(&model), ["1", "3"]);

    let view = model.record_view();
    let rows: Vec<_> = view.record_rows().collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].cells[0].value, "1");
    assert_eq!(rows[1].cells[0].value, "3");
}

#[test]
fn test_view_never_reorders_the_store() {
    let mut model = test_model();
    update(
        &mut model,
        Msg::Action(Action::Sort(sort(Field::Id, SortDirection::Desc))),
    );
    assert_eq!(visible_ids(&model), ["5", "4", "3", "2", "1"]);

    let canonical: Vec<&str> = model.records.records().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(canonical, ["1", "2", "3", "4", "5"]);
}

#[test]
fn test_hidden_fields_drop_columns_only() {
    let mut model = test_model();
    update(&mut model, Msg::Action(Action::HideField(Field::Url)));
    update(&mut model, Msg::Action(Action::HideField(Field::Assigned)));

    let view = model.record_view();
    assert_eq!(view.columns.len(), 8);
    assert!(!view.columns.contains(&Field::Url));
    assert!(view.rows.iter().all(|row| row.cells.len() == 8));
    assert_eq!(visible_ids(&model), ["1", "2", "3", "4", "5"]);
}

#[test]
fn test_rendered_rows_cover_store_plus_budget() {
    let mut model = test_model();
    update(
        &mut model,
        Msg::Action(Action::Filter(FilterDirective::new(Field::Status, "blocked"))),
    );

    let view = model.record_view();
    assert_eq!(view.rows.len(), 5 + 20);
    assert_eq!(view.record_rows().count(), 1);
    assert!(view.rows[1..]
        .iter()
        .all(|row| row.record.is_none() && row.cells.iter().all(|c| c.value.is_empty())));
}
