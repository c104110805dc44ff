//! Cross-module behaviour exercised through the public API.

use catalogue::complement::two_sum;
use catalogue::grouping::{group_anagrams, group_by, Groups};
use catalogue::sets::{is_valid_sudoku, longest_consecutive};
use catalogue::sets::problems::parse_board;
use catalogue::strings::{analyze, apply_pipeline, Transform};
use catalogue::systems::{Deduplicator, EdgeWeights, LruCache};
use catalogue::two_pointer::is_palindrome_alnum;
use catalogue::walkthrough::{self, Topic};
use catalogue::CatalogueError;

#[test]
fn headline_examples() {
    assert_eq!(two_sum(&[2, 7, 11, 15], 9), Some((0, 1)));
    assert!(is_palindrome_alnum("A man a plan a canal Panama"));
    assert_eq!(longest_consecutive(&[100, 4, 200, 1, 3, 2]), 4);
    assert_eq!(
        group_anagrams(&["eat", "tea", "tan", "ate", "nat", "bat"]),
        vec![vec!["eat", "tea", "ate"], vec!["tan", "nat"], vec!["bat"]]
    );
}

#[test]
fn group_by_with_custom_key() {
    let parity: Groups<bool, i32> = group_by(1..=6, |n| n % 2 == 0);
    assert_eq!(parity.get(&false), Some(&[1, 3, 5][..]));
    assert_eq!(parity.get(&true), Some(&[2, 4, 6][..]));
}

#[test]
fn sudoku_rejects_repeated_digit_in_box() {
    let mut rows = vec!["........."; 9];
    rows[0] = "5........";
    rows[1] = ".5.......";
    let board = parse_board(&rows).unwrap();
    assert_eq!(is_valid_sudoku(&board), Ok(false));
    assert!(matches!(parse_board(&rows[..8]), Err(CatalogueError::InvalidBoard(_))));
}

#[test]
fn pipeline_and_profile_compose() {
    let cleaned = apply_pipeline("Mississippi River", &[Transform::Lower, Transform::RemoveSpaces]);
    assert_eq!(cleaned, "mississippiriver");
    let profile = analyze(&cleaned);
    assert_eq!(profile.max_occurring, Some(('i', 5)));
    assert_eq!(profile.first_non_repeating, Some('m'));
}

#[test]
fn systems_track_state() {
    let mut cache = LruCache::new(2);
    cache.put("a", 1);
    cache.put("b", 2);
    assert_eq!(cache.get(&"a"), Some(&1));
    assert_eq!(cache.put("c", 3), Some("b"));

    let mut dedup = Deduplicator::new();
    assert_eq!(dedup.process_stream(vec![3, 1, 3, 2, 1]), vec![3, 1, 2]);

    let mut edges = EdgeWeights::new();
    edges.add_edge("x", "y", 4);
    assert_eq!(edges.weight(&"y", &"x"), Some(&4));
}

#[test]
fn walkthrough_covers_each_topic() {
    for topic in Topic::ALL {
        let report = walkthrough::run(Some(topic));
        assert!(!report.outcomes.is_empty(), "{topic}");
        assert!(report.all_passed(), "{}", report.render_text());
    }
}
