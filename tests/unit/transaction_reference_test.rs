// Uniqueness of transaction references under concurrent checkout renders

use lazerpay_gateway::checkout::TransactionReference;
use std::collections::HashSet;
use std::thread;

#[test]
fn test_references_unique_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(|| {
                (0..500)
                    .map(|_| TransactionReference::generate(77).to_string())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut seen = HashSet::new();
    for handle in handles {
        for reference in handle.join().unwrap() {
            assert!(reference.starts_with("CLDLP_77_"));
            assert!(seen.insert(reference), "duplicate reference issued");
        }
    }

    assert_eq!(seen.len(), 8 * 500);
}

#[test]
fn test_reference_timestamp_is_current() {
    let before = chrono::Utc::now();
    let reference = TransactionReference::generate(5);

    let issued_at = reference.issued_at().unwrap();
    // The monotonic bump may push a stamp a few ms ahead of the wall clock
    assert!(issued_at >= before - chrono::Duration::seconds(1));
    assert!(issued_at <= chrono::Utc::now() + chrono::Duration::seconds(5));
}

#[test]
fn test_reference_parses_back_to_invoice() {
    let reference = TransactionReference::generate(123_456);
    let parsed: TransactionReference = reference.to_string().parse().unwrap();

    assert_eq!(parsed.invoice_id(), 123_456);
    assert_eq!(parsed, reference);
}
