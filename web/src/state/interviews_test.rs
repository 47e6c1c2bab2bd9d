use time::macros::datetime;

use super::*;

fn interview(id: i64, scheduled_at: Option<&str>) -> Interview {
    serde_json::from_value(serde_json::json!({ "id": id, "scheduled_at": scheduled_at })).unwrap()
}

fn ids(items: &[Interview]) -> Vec<i64> {
    items.iter().map(|i| i.id).collect()
}

// =============================================================
// InterviewBoard
// =============================================================

#[test]
fn splits_sorted_interviews_around_now() {
    let board = InterviewBoard::build(
        vec![
            interview(1, Some("2024-01-05")),
            interview(2, Some("2024-03-01")),
            interview(3, None),
            interview(4, Some("2023-12-31")),
        ],
        datetime!(2024-01-10 0:00 UTC),
    );

    assert_eq!(ids(board.tab(InterviewTab::Upcoming)), vec![2]);
    assert_eq!(ids(board.tab(InterviewTab::Past)), vec![4, 1]);
    assert_eq!(board.count(InterviewTab::Past), 2);
}

#[test]
fn empty_board_has_empty_tabs() {
    let board = InterviewBoard::build(Vec::new(), datetime!(2024-01-10 0:00 UTC));
    assert_eq!(board.count(InterviewTab::Upcoming), 0);
    assert_eq!(InterviewTab::default(), InterviewTab::Upcoming);
}

// =============================================================
// format_when
// =============================================================

#[test]
fn formats_scheduled_time_in_utc() {
    let item = interview(1, Some("2024-03-01T10:30:00+01:00"));
    assert_eq!(format_when(&item), "2024-03-01 09:30 UTC");
}

#[test]
fn unscheduled_shows_placeholder() {
    assert_eq!(format_when(&interview(1, None)), "Not scheduled");
    assert_eq!(format_when(&interview(2, Some("soon"))), "Not scheduled");
}
