//! Snapshot tests for rendered skeletons.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

mod common;

use common::{INVOICE, render, rich_host};

#[test]
fn test_invoice_pretty() {
    let output = render(&rich_host(), INVOICE, true);
    insta::assert_snapshot!("invoice_pretty", output);
}

#[test]
fn test_invoice_compact() {
    let output = render(&rich_host(), INVOICE, false);
    insta::assert_snapshot!("invoice_compact", output);
}
