use super::*;
use crate::error::CatalogError;
use crate::media::MediaRecord;

fn r(title: &str) -> MediaRecord {
    MediaRecord::new(title, "Artist", 180, "mp3")
}

fn seq(name: &str, titles: &[&str]) -> TrackSequence {
    let mut s = TrackSequence::new(name);
    for t in titles {
        s.append(r(t)).unwrap();
    }
    s
}

fn titles(s: &TrackSequence) -> Vec<String> {
    s.iter().map(|m| m.title().to_string()).collect()
}

/// Walk the arena links in both directions and check they agree with `len`.
fn assert_links_consistent(s: &TrackSequence) {
    let mut forward = Vec::new();
    let mut prev = None;
    let mut cursor = s.head;
    while let Some(idx) = cursor {
        let node = s.nodes[idx].as_ref().unwrap();
        assert_eq!(node.prev, prev, "backward link mismatch at slot {idx}");
        forward.push(idx);
        prev = Some(idx);
        cursor = node.next;
    }
    assert_eq!(s.tail, prev);
    assert_eq!(forward.len(), s.len());
    if s.is_empty() {
        assert!(s.head.is_none());
        assert!(s.tail.is_none());
    }
}

#[test]
fn road_trip_next_after_wraps_to_head() {
    let mut s = TrackSequence::new("Road Trip");
    s.append(MediaRecord::new("Song A", "Artist X", 125, "mp3"))
        .unwrap();
    s.append(MediaRecord::new("Song B", "Artist Y", 61, "mp3"))
        .unwrap();

    assert_eq!(s.next_after(None).unwrap().title(), "Song A");
    assert_eq!(s.next_after(Some("Song A")).unwrap().title(), "Song B");
    assert_eq!(s.next_after(Some("Song B")).unwrap().title(), "Song A");
}

#[test]
fn previous_before_wraps_to_tail() {
    let s = seq("p", &["A", "B", "C"]);
    assert_eq!(s.previous_before(None).unwrap().title(), "C");
    assert_eq!(s.previous_before(Some("A")).unwrap().title(), "C");
    assert_eq!(s.previous_before(Some("C")).unwrap().title(), "B");
    assert_eq!(s.previous_before(Some("B")).unwrap().title(), "A");
}

#[test]
fn next_then_previous_returns_to_start() {
    let s = seq("p", &["A", "B", "C", "D"]);
    for t in ["A", "B", "C", "D"] {
        let next = s.next_after(Some(t)).unwrap();
        let back = s.previous_before(Some(next.title())).unwrap();
        assert_eq!(back.title(), t);
    }
}

#[test]
fn single_track_navigates_to_itself() {
    let s = seq("solo", &["Only"]);
    assert_eq!(s.next_after(Some("Only")).unwrap().title(), "Only");
    assert_eq!(s.previous_before(Some("Only")).unwrap().title(), "Only");
}

#[test]
fn navigation_on_empty_sequence_fails() {
    let s = TrackSequence::new("empty");
    assert_eq!(
        s.next_after(None),
        Err(CatalogError::EmptySequence("empty".into()))
    );
    assert_eq!(
        s.previous_before(Some("x")),
        Err(CatalogError::EmptySequence("empty".into()))
    );
}

#[test]
fn navigation_with_unknown_title_fails() {
    let s = seq("p", &["A"]);
    assert_eq!(
        s.next_after(Some("Z")),
        Err(CatalogError::TitleNotFound("Z".into()))
    );
    assert_eq!(
        s.previous_before(Some("Z")),
        Err(CatalogError::TitleNotFound("Z".into()))
    );
}

#[test]
fn append_grows_by_one_and_keeps_order() {
    let mut s = TrackSequence::new("p");
    for (i, t) in ["A", "B", "C"].iter().enumerate() {
        s.append(r(t)).unwrap();
        assert_eq!(s.len(), i + 1);
        assert_links_consistent(&s);
    }
    assert_eq!(titles(&s), vec!["A", "B", "C"]);
    assert_eq!(s.head().unwrap().title(), "A");
    assert_eq!(s.tail().unwrap().title(), "C");
}

#[test]
fn append_rejects_duplicate_title_and_keeps_size() {
    let mut s = seq("p", &["A", "B"]);
    let err = s.append(MediaRecord::new("B", "Someone Else", 1, "flac"));
    assert_eq!(err, Err(CatalogError::DuplicateTitle("B".into())));
    assert_eq!(s.len(), 2);
    assert_eq!(s.get("B").unwrap().artist(), "Artist");
}

#[test]
fn title_comparison_is_case_sensitive() {
    let mut s = seq("p", &["Song"]);
    s.append(r("song")).unwrap();
    assert_eq!(s.len(), 2);
    assert!(s.contains("song"));
    assert!(!s.contains("SONG"));
}

#[test]
fn append_rejects_empty_title() {
    let mut s = TrackSequence::new("p");
    assert!(matches!(
        s.append(r("")),
        Err(CatalogError::InvalidArgument(_))
    ));
    assert!(s.is_empty());
}

#[test]
fn append_accepts_whitespace_only_title() {
    let mut s = TrackSequence::new("p");
    s.append(r("   ")).unwrap();
    assert_eq!(s.len(), 1);
    assert!(s.contains("   "));
}

#[test]
fn append_then_remove_restores_size_and_returns_record() {
    let mut s = seq("p", &["A", "B"]);
    let rec = MediaRecord::new("C", "Band", 61, "ogg");
    s.append(rec.clone()).unwrap();
    let removed = s.remove("C").unwrap();
    assert_eq!(removed, rec);
    assert_eq!(s.len(), 2);
    assert_links_consistent(&s);
}

#[test]
fn remove_head_clears_new_head_backlink() {
    let mut s = seq("p", &["A", "B", "C"]);
    assert_eq!(s.remove("A").unwrap().title(), "A");
    assert_eq!(titles(&s), vec!["B", "C"]);
    assert_eq!(s.head().unwrap().title(), "B");
    assert_eq!(s.previous_before(Some("B")).unwrap().title(), "C");
    assert_links_consistent(&s);
}

#[test]
fn remove_tail_moves_tail_to_predecessor() {
    let mut s = seq("p", &["A", "B", "C"]);
    assert_eq!(s.remove("C").unwrap().title(), "C");
    assert_eq!(s.tail().unwrap().title(), "B");
    assert_eq!(s.next_after(Some("B")).unwrap().title(), "A");
    assert_links_consistent(&s);

    s.append(r("D")).unwrap();
    assert_eq!(titles(&s), vec!["A", "B", "D"]);
    assert_links_consistent(&s);
}

#[test]
fn remove_interior_relinks_neighbours() {
    let mut s = seq("p", &["A", "B", "C"]);
    s.remove("B").unwrap();
    assert_eq!(s.next_after(Some("A")).unwrap().title(), "C");
    assert_eq!(s.previous_before(Some("C")).unwrap().title(), "A");
    assert_links_consistent(&s);
}

#[test]
fn remove_only_track_empties_sequence() {
    let mut s = seq("p", &["A"]);
    s.remove("A").unwrap();
    assert!(s.is_empty());
    assert_links_consistent(&s);
    assert_eq!(s.remove("A"), Err(CatalogError::EmptySequence("p".into())));
}

#[test]
fn remove_errors() {
    let mut empty = TrackSequence::new("e");
    assert_eq!(empty.remove("A"), Err(CatalogError::EmptySequence("e".into())));

    let mut s = seq("p", &["A"]);
    assert_eq!(s.remove("B"), Err(CatalogError::TitleNotFound("B".into())));
    assert_eq!(s.len(), 1);
}

#[test]
fn freed_slots_are_reused_without_reordering() {
    let mut s = seq("p", &["A", "B", "C", "D"]);
    s.remove("B").unwrap();
    s.remove("A").unwrap();
    s.append(r("E")).unwrap();
    s.append(r("F")).unwrap();
    s.append(r("G")).unwrap();

    assert_eq!(s.nodes.len(), 5);
    assert_eq!(titles(&s), vec!["C", "D", "E", "F", "G"]);
    assert_links_consistent(&s);
}

#[test]
fn reverse_iteration_walks_backward_links() {
    let s = seq("p", &["A", "B", "C"]);
    let rev: Vec<&str> = s.iter().rev().map(|m| m.title()).collect();
    assert_eq!(rev, vec!["C", "B", "A"]);

    let mut it = s.iter();
    assert_eq!(it.len(), 3);
    assert_eq!(it.next().unwrap().title(), "A");
    assert_eq!(it.next_back().unwrap().title(), "C");
    assert_eq!(it.next().unwrap().title(), "B");
    assert!(it.next_back().is_none());
}

#[test]
fn display_lists_titles_one_based() {
    let s = seq("Road Trip", &["Song A", "Song B"]);
    assert_eq!(s.to_string(), "Playlist: Road Trip\n1. Song A\n2. Song B\n");
    assert_eq!(TrackSequence::new("Empty").to_string(), "Playlist: Empty\n");
}

#[test]
fn equality_ignores_arena_layout() {
    let mut a = seq("p", &["X", "A", "B"]);
    a.remove("X").unwrap();
    let b = seq("p", &["A", "B"]);
    assert_eq!(a, b);
    assert_ne!(a, seq("q", &["A", "B"]));
}
