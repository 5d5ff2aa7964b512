use libranet::adapters::mock::NotificationService as MockNotificationService;
use libranet::application::catalog::Catalog;
use libranet::cli::Session;
use libranet::domain::{DomainEvent, Fine, ItemId};
use std::io::Cursor;

mod common;

use common::sample_catalog;

// ============================================================================
// セッション実行ヘルパー
// ============================================================================

/// 入力行を流し込んでセッションを最後まで実行し、出力を返す
fn run_session(catalog: &mut Catalog, notifier: &MockNotificationService, lines: &[&str]) -> String {
    let input = Cursor::new(lines.join("\n") + "\n");
    let mut output = Vec::new();

    Session::new(catalog, notifier, input, &mut output)
        .run()
        .expect("in-memory i/o does not fail");

    String::from_utf8(output).expect("session output is utf-8")
}

// ============================================================================
// メニュー操作
// ============================================================================

#[test]
fn test_exit_ends_session() {
    let mut catalog = sample_catalog();
    let notifier = MockNotificationService::new();

    let output = run_session(&mut catalog, &notifier, &["0", "1"]);

    assert!(output.contains("LIBRANET LIBRARY MANAGEMENT SYSTEM"));
    assert!(output.contains("Thank you for using LibraNet! Come again."));
    assert!(!output.contains("ALL LIBRARY ITEMS"));
}

#[test]
fn test_end_of_input_ends_session() {
    let mut catalog = sample_catalog();
    let notifier = MockNotificationService::new();

    let output = run_session(&mut catalog, &notifier, &["1"]);

    assert!(output.contains("ALL LIBRARY ITEMS"));
    assert!(!output.contains("Thank you"));
}

#[test]
fn test_display_all_lists_items_in_id_order() {
    let mut catalog = sample_catalog();
    let notifier = MockNotificationService::new();

    let output = run_session(&mut catalog, &notifier, &["1", "0"]);

    let first = output.find("ID: 1, Title: The Great Gatsby").unwrap();
    let last = output.find("ID: 6, Title: Scientific American").unwrap();
    assert!(first < last);
    assert!(output.contains(
        "ID: 3, Title: The Alchemist, Author: Paulo Coelho, Available: Yes, Type: Audiobook, Duration: 4.50 hours"
    ));
}

#[test]
fn test_invalid_menu_input_keeps_session_running() {
    let mut catalog = sample_catalog();
    let notifier = MockNotificationService::new();

    let output = run_session(&mut catalog, &notifier, &["abc", "42", "0"]);

    assert!(output.contains("Please enter a valid number."));
    assert!(output.contains("Invalid choice. Please try again."));
    assert!(output.contains("Thank you for using LibraNet!"));
}

#[test]
fn test_borrow_and_return_through_menu() {
    let mut catalog = sample_catalog();
    let notifier = MockNotificationService::new();

    let output = run_session(
        &mut catalog,
        &notifier,
        &["2", "1", "2024-01-01", "8", "3", "1", "2024-01-20", "9", "0"],
    );

    assert!(output.contains("Item borrowed successfully. Due date: 2024-01-15"));
    assert!(output.contains(
        "ID: 1, Title: The Great Gatsby, Author: F. Scott Fitzgerald, Available: No, Type: Book, Pages: 180, Due: 2024-01-15"
    ));
    assert!(output.contains("Item returned successfully. 5 days overdue. Fine: 50.0 rs"));
    assert!(output.contains("Total fines collected: 50.0 rs"));
    assert!(output.contains("  Item 1: 50.0 rs"));
    assert_eq!(catalog.total_fines().amount(), 50.0);
    assert!(catalog.get_item(ItemId::new(1)).unwrap().is_available());
}

#[test]
fn test_on_time_return_reports_no_fines() {
    let mut catalog = sample_catalog();
    let notifier = MockNotificationService::new();

    let output = run_session(
        &mut catalog,
        &notifier,
        &["2", "4", "2024-01-01", "3", "4", "2024-01-15", "0"],
    );

    assert!(output.contains("Item returned successfully. No fines."));
    assert_eq!(catalog.total_fines(), Fine::ZERO);
}

#[test]
fn test_catalog_errors_are_reported() {
    let mut catalog = sample_catalog();
    let notifier = MockNotificationService::new();

    let output = run_session(
        &mut catalog,
        &notifier,
        &[
            "2", "999", "2024-01-01", // 存在しない資料
            "2", "1", "01-01-2024", // 日付形式が不正
            "3", "2", "2024-01-01", // 貸出されていない
            "2", "x", // IDが数値でない
            "0",
        ],
    );

    assert!(output.contains("Error: Item with ID 999 not found"));
    assert!(output.contains("Error: Invalid date format '01-01-2024'. Please use YYYY-MM-DD"));
    assert!(output.contains("Error: Item 2 was not borrowed"));
    assert!(output.contains("Please enter a valid number for ID."));
    assert!(catalog.borrowed_items().is_empty());
}

#[test]
fn test_searches_through_menu() {
    let mut catalog = sample_catalog();
    let notifier = MockNotificationService::new();

    let output = run_session(
        &mut catalog,
        &notifier,
        &["4", "GATSBY", "5", "tolkien", "6", "3", "6", "7", "0"],
    );

    assert!(output.contains("ID: 1, Title: The Great Gatsby"));
    assert!(output.contains("No items found by that author."));
    assert!(output.contains("ID: 5, Title: National Geographic"));
    assert!(output.contains("ID: 6, Title: Scientific American"));
    assert!(output.contains("Invalid choice."));
}

// ============================================================================
// 種別固有の操作
// ============================================================================

#[test]
fn test_page_count_and_type_mismatch() {
    let mut catalog = sample_catalog();
    let notifier = MockNotificationService::new();

    let output = run_session(
        &mut catalog,
        &notifier,
        &["10", "1", "2", "10", "1", "3", "0"],
    );

    assert!(output.contains("Page count: 281"));
    assert!(output.contains("This item is not a book."));
}

#[test]
fn test_play_audiobook_sends_announcement() {
    let mut catalog = sample_catalog();
    let notifier = MockNotificationService::new();

    let output = run_session(&mut catalog, &notifier, &["10", "2", "3", "0"]);

    assert!(output.contains("Duration: 4.5 hours"));
    let sent = notifier.sent();
    assert_eq!(sent.len(), 1);
    assert!(matches!(&sent[0], DomainEvent::AudiobookPlayed(e) if e.title == "The Alchemist"));
}

#[test]
fn test_archive_announces_only_once() {
    let mut catalog = sample_catalog();
    let notifier = MockNotificationService::new();

    let output = run_session(
        &mut catalog,
        &notifier,
        &["10", "3", "5", "10", "3", "5", "10", "3", "1", "0"],
    );

    assert!(output.contains("Item 5 is already archived."));
    assert!(output.contains("This item is not an e-magazine."));
    let sent = notifier.sent();
    assert_eq!(sent.len(), 1);
    assert!(matches!(&sent[0], DomainEvent::IssueArchived(e) if e.issue_number == 256));
    assert!(
        catalog
            .get_item(ItemId::new(5))
            .unwrap()
            .to_string()
            .ends_with("Archived: Yes")
    );
}
