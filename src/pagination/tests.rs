//! Tests for pagination module

use super::*;
use crate::error::Error;
use crate::types::LIMIT;
use proptest::prelude::*;
use test_case::test_case;

// ============================================================================
// PageCursor Tests
// ============================================================================

#[test]
fn test_cursor_first() {
    let cursor = PageCursor::first();
    assert_eq!(cursor.offset(), 0);
    assert_eq!(cursor.page(), 1);
    assert_eq!(cursor.limit(), 10);
    assert!(!cursor.has_previous());
    assert_eq!(cursor, PageCursor::default());
}

#[test_case(1, 0 ; "first page")]
#[test_case(2, 10 ; "second page")]
#[test_case(15, 140 ; "fifteenth page")]
fn test_cursor_from_page(page: u64, offset: u64) {
    let cursor = PageCursor::from_page(page).unwrap();
    assert_eq!(cursor.offset(), offset);
    assert_eq!(cursor.page(), page);
}

#[test]
fn test_cursor_from_page_zero_rejected() {
    assert!(matches!(
        PageCursor::from_page(0),
        Err(Error::InvalidPage { .. })
    ));
}

#[test]
fn test_cursor_from_page_overflow_rejected() {
    assert!(PageCursor::from_page(u64::MAX).is_err());
}

#[test]
fn test_cursor_from_offset() {
    assert_eq!(PageCursor::from_offset(30).unwrap().page(), 4);
    assert!(PageCursor::from_offset(15).is_err());
}

#[test]
fn test_back_is_noop_on_first_page() {
    let cursor = PageCursor::first();
    assert_eq!(cursor.previous(), None);
    assert_eq!(cursor.navigate(Navigation::Back), cursor);
}

#[test]
fn test_next_advances_one_page() {
    let cursor = PageCursor::first().navigate(Navigation::Next);
    assert_eq!(cursor.offset(), 10);
    assert_eq!(cursor.page(), 2);

    let cursor = cursor.navigate(Navigation::Next);
    assert_eq!(cursor.offset(), 20);
    assert_eq!(cursor.page(), 3);
}

#[test]
fn test_back_after_next_returns() {
    let cursor = PageCursor::first()
        .navigate(Navigation::Next)
        .navigate(Navigation::Next)
        .navigate(Navigation::Back);
    assert_eq!(cursor.offset(), 10);
    assert_eq!(cursor.page(), 2);
}

#[test]
fn test_next_has_no_upper_bound() {
    let mut cursor = PageCursor::first();
    for _ in 0..10_000 {
        cursor = cursor.next();
    }
    assert_eq!(cursor.offset(), 100_000);
    assert_eq!(cursor.page(), 10_001);
}

fn arb_navigation() -> impl Strategy<Value = Navigation> {
    any::<bool>().prop_map(|next| if next { Navigation::Next } else { Navigation::Back })
}

proptest! {
    #[test]
    fn prop_page_and_offset_move_in_lockstep(
        actions in prop::collection::vec(arb_navigation(), 0..200)
    ) {
        let mut cursor = PageCursor::first();

        for action in actions {
            let before = cursor;
            cursor = cursor.navigate(action);

            prop_assert_eq!((cursor.page() - 1) * u64::from(LIMIT), cursor.offset());
            match action {
                Navigation::Next => prop_assert_eq!(cursor.offset(), before.offset() + 10),
                Navigation::Back if before.offset() == 0 => prop_assert_eq!(cursor, before),
                Navigation::Back => prop_assert_eq!(cursor.offset(), before.offset() - 10),
            }
        }
    }

    #[test]
    fn prop_from_page_round_trips_offset(page in 1u64..1_000_000) {
        let cursor = PageCursor::from_page(page).unwrap();
        prop_assert_eq!(cursor.page(), page);
        prop_assert_eq!(PageCursor::from_offset(cursor.offset()).unwrap(), cursor);
    }
}

#[test]
fn test_cursor_serde_as_offset() {
    let cursor = PageCursor::from_page(3).unwrap();
    assert_eq!(serde_json::to_string(&cursor).unwrap(), "20");

    let parsed: PageCursor = serde_json::from_str("40").unwrap();
    assert_eq!(parsed.page(), 5);

    assert!(serde_json::from_str::<PageCursor>("7").is_err());
}

#[test]
fn test_cursor_display() {
    assert_eq!(
        PageCursor::from_page(2).unwrap().to_string(),
        "page 2 (offset 10)"
    );
}

// ============================================================================
// Navigation Tests
// ============================================================================

#[test_case("back", Navigation::Back)]
#[test_case("NEXT", Navigation::Next)]
fn test_navigation_from_str(input: &str, expected: Navigation) {
    assert_eq!(input.parse::<Navigation>().unwrap(), expected);
}

#[test]
fn test_navigation_from_str_unknown() {
    assert!("forward".parse::<Navigation>().is_err());
}

#[test]
fn test_navigation_display() {
    assert_eq!(Navigation::Back.to_string(), "back");
    assert_eq!(Navigation::Next.as_str(), "next");
}
