//! Quote stripping tests
//!
//! Covers the behaviors callers rely on:
//! 1. Block partition and line accounting
//! 2. Per-block truncation with elision markers
//! 3. Hard length cap
//! 4. Pass-through of text without quotes

use mailquote::strip::{split_blocks, Block, BlockKind};
use mailquote::{QuoteStripper, StripMetadata};

fn quoted_lines(n: usize) -> String {
    (1..=n)
        .map(|i| format!("> line {}", i))
        .collect::<Vec<_>>()
        .join("\n")
}

fn quote_line_total(text: &str) -> usize {
    split_blocks(text)
        .iter()
        .filter(|b| b.is_quote())
        .map(Block::line_count)
        .sum()
}

const THREAD: &str = "Thanks, that works for me.

On Tue, Jan 7, 2025 at 9:14 AM Carol wrote:
> Here is the revised schedule.
> Week 1: design review
> Week 2: implementation
> Week 3: testing
> Week 4: rollout
> Let me know if anything conflicts.
> Carol

-----Original Message-----
From: Dave
Sent: Monday, January 6, 2025
Subject: schedule

Can we move the review?
__________
2025年1月5日 周日 上午10:00 Erin 写道：
> 好的
> 没问题";

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_empty_input_has_no_metadata() {
    let result = QuoteStripper::new(10).strip("", 0);
    assert_eq!(result.text, "");
    assert_eq!(result.metadata, None);
}

#[test]
fn test_single_content_line() {
    let result = QuoteStripper::new(10).strip("hello", 0);
    assert_eq!(result.text, "hello");
    insta::assert_json_snapshot!(result.metadata.unwrap(), @r###"
    {
      "original_length": 5,
      "stripped_length": 5,
      "quote_lines_stripped": 0,
      "quote_lines_kept": 0,
      "hard_truncated": false
    }
    "###);
}

#[test]
fn test_fifteen_quoted_lines_keep_ten() {
    let text = format!("hi\n{}", quoted_lines(15));
    let result = QuoteStripper::new(10).strip(&text, 0);

    assert!(result.text.starts_with(&format!("hi\n{}\n", quoted_lines(10))));
    assert!(result.text.contains("[... 5 行引用内容已省略 ...]"));
    assert!(!result.text.contains("> line 11"));

    let meta = result.metadata.unwrap();
    assert_eq!(meta.quote_lines_kept, 10);
    assert_eq!(meta.quote_lines_stripped, 5);
}

#[test]
fn test_fifteen_quoted_lines_hard_cap() {
    let text = format!("hi\n{}", quoted_lines(15));
    let result = QuoteStripper::new(10).strip(&text, 20);

    assert_eq!(result.text.chars().count(), 20);
    let meta = result.metadata.unwrap();
    assert!(meta.hard_truncated);
    assert_eq!(meta.stripped_length, 20);
    assert_eq!(meta.quote_lines_stripped, 5);
}

#[test]
fn test_quote_block_of_exactly_keep_lines() {
    let text = format!("reply\n{}\nsignature", quoted_lines(4));
    let result = QuoteStripper::new(4).strip(&text, 0);

    assert_eq!(result.text, text);
    let meta = result.metadata.unwrap();
    assert_eq!(meta.quote_lines_kept, 4);
    assert_eq!(meta.quote_lines_stripped, 0);
}

// =============================================================================
// Properties
// =============================================================================

#[test]
fn test_blocks_partition_thread() {
    let blocks = split_blocks(THREAD);
    let rebuilt = blocks.iter().map(Block::text).collect::<Vec<_>>().join("\n");
    assert_eq!(rebuilt, THREAD);

    // Neighbouring blocks always differ in kind
    for pair in blocks.windows(2) {
        assert_ne!(pair[0].kind, pair[1].kind);
    }
}

#[test]
fn test_thread_block_layout() {
    let kinds: Vec<BlockKind> = split_blocks(THREAD).iter().map(|b| b.kind).collect();
    assert_eq!(
        kinds,
        vec![
            BlockKind::Content, // thanks + blank
            BlockKind::Quote,   // On ... wrote: + 7 quoted lines
            BlockKind::Content, // blank
            BlockKind::Quote,   // Original Message, From:, Sent:
            BlockKind::Content, // Subject, blank, question
            BlockKind::Quote,   // rule, Chinese header, 2 quoted lines
        ]
    );
}

#[test]
fn test_line_accounting_across_keep_counts() {
    let total = quote_line_total(THREAD);
    assert_eq!(total, 8 + 3 + 4);

    for keep in [0, 1, 2, 3, 5, 8, 20] {
        let meta = QuoteStripper::new(keep).strip(THREAD, 0).metadata.unwrap();
        assert_eq!(
            meta.quote_lines_kept + meta.quote_lines_stripped,
            total,
            "keep = {}",
            keep
        );
    }
}

#[test]
fn test_thread_keep_two() {
    let result = QuoteStripper::new(2).strip(THREAD, 0);
    let meta = result.metadata.unwrap();

    assert_eq!(meta.quote_lines_kept, 6);
    assert_eq!(meta.quote_lines_stripped, 6 + 1 + 2);
    assert!(result.text.contains("> Here is the revised schedule."));
    assert!(!result.text.contains("Week 1"));
    assert!(result.text.contains("[... 6 行引用内容已省略 ...]"));
    assert!(result.text.contains("[... 1 行引用内容已省略 ...]"));
    assert!(result.text.contains("[... 2 行引用内容已省略 ...]"));
    // Content blocks survive untouched
    assert!(result.text.contains("Subject: schedule\n\nCan we move the review?"));
    assert!(meta.stripped_length < meta.original_length);
}

#[test]
fn test_content_only_text_is_unchanged() {
    let text = "Hi team,\n\nThe build is green again.\n>not a quote\n  > indented\n";
    let result = QuoteStripper::new(1).strip(text, 0);

    assert_eq!(result.text, text);
    let meta = result.metadata.unwrap();
    assert_eq!(meta.quote_lines_stripped, 0);
    assert_eq!(meta.quote_lines_kept, 0);
    assert_eq!(meta.original_length, meta.stripped_length);
}

#[test]
fn test_short_oversized_block_grows_output() {
    // The marker is longer than the single dropped line
    let result = QuoteStripper::new(1).strip("> a\n> b", 0);

    assert_eq!(result.text, "> a\n\n[... 1 行引用内容已省略 ...]\n");
    let meta = result.metadata.unwrap();
    assert_eq!(meta.original_length, 7);
    assert_eq!(meta.stripped_length, 26);
    assert_eq!(meta.quote_lines_stripped, 1);
    assert!(meta.reduction_percent() < 0.0);
}

#[test]
fn test_no_oversized_block_preserves_length() {
    let result = QuoteStripper::new(10).strip(THREAD, 0);
    assert_eq!(result.text, THREAD);
    let meta = result.metadata.unwrap();
    assert_eq!(meta.stripped_length, meta.original_length);
}

#[test]
fn test_hard_cap_bounds_output() {
    let stripper = QuoteStripper::new(3);
    let uncapped = stripper.strip(THREAD, 0).metadata.unwrap().stripped_length;

    for cap in [1, 10, 57, uncapped - 1, uncapped, uncapped + 1, 10_000] {
        let result = stripper.strip(THREAD, cap);
        let meta = result.metadata.unwrap();
        assert!(result.text.chars().count() <= cap);
        assert_eq!(meta.hard_truncated, uncapped > cap, "cap = {}", cap);
    }
}

#[test]
fn test_hard_cap_is_prefix_of_uncapped() {
    let stripper = QuoteStripper::new(2);
    let full = stripper.strip(THREAD, 0).text;
    let capped = stripper.strip(THREAD, 120).text;
    assert!(full.starts_with(&capped));
}

#[test]
fn test_metadata_roundtrip_keys() {
    let meta = StripMetadata {
        original_length: 10,
        stripped_length: 8,
        quote_lines_stripped: 2,
        quote_lines_kept: 1,
        hard_truncated: true,
    };
    let value = serde_json::to_value(meta).unwrap();
    let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
    assert_eq!(keys.len(), 5);
}
