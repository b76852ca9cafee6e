use super::*;

fn dict(words: &[&str]) -> WordDictionary {
    words.iter().copied().collect()
}

fn words(ladder: &Ladder) -> Vec<&str> {
    ladder.words().iter().map(String::as_str).collect()
}

#[test]
fn test_cat_to_dog_chain() {
    let dictionary = dict(&["cat", "cot", "cog", "dog"]);
    let ladder = find_shortest_ladder("cat", "dog", &dictionary).unwrap();
    assert_eq!(words(&ladder), vec!["cat", "cot", "cog", "dog"]);
}

#[test]
fn test_shortest_among_alternatives() {
    // Long route: cat-cot-cog-dog-... ; short route via a single hop word
    let dictionary = dict(&[
        "cat", "cot", "cog", "dog", "bat", "bag", "bog", "bot", "dot",
    ]);
    let ladder = find_shortest_ladder("cat", "dog", &dictionary).unwrap();

    assert_eq!(ladder.len(), 4);
    assert_eq!(ladder.words().first().map(String::as_str), Some("cat"));
    assert_eq!(ladder.words().last().map(String::as_str), Some("dog"));
    assert!(ladder.is_valid_chain());
}

#[test]
fn test_insertions_and_deletions_are_steps() {
    let dictionary = dict(&["at", "cat", "cats", "coats", "coat"]);
    let ladder = find_shortest_ladder("at", "coats", &dictionary).unwrap();
    assert_eq!(ladder.len(), 4);
    assert!(ladder.is_valid_chain());
}

#[test]
fn test_begin_word_need_not_be_in_dictionary() {
    let dictionary = dict(&["cot", "cog", "dog"]);
    let ladder = find_shortest_ladder("cat", "dog", &dictionary).unwrap();
    assert_eq!(words(&ladder), vec!["cat", "cot", "cog", "dog"]);
}

#[test]
fn test_single_step_ladder() {
    let dictionary = dict(&["cat", "cot"]);
    let ladder = find_shortest_ladder("cat", "cot", &dictionary).unwrap();
    assert_eq!(words(&ladder), vec!["cat", "cot"]);
    assert_eq!(ladder.steps(), 1);
}

#[test]
fn test_words_are_lowercased() {
    let dictionary = dict(&["cat", "cot", "cog", "dog"]);
    let ladder = find_shortest_ladder("CAT", "Dog", &dictionary).unwrap();
    assert_eq!(words(&ladder), vec!["cat", "cot", "cog", "dog"]);
}

#[test]
fn test_identical_words_rejected() {
    let dictionary = dict(&["same", "sane"]);
    let err = find_shortest_ladder("same", "same", &dictionary).unwrap_err();
    assert_eq!(
        err,
        LadderError::IdenticalWords {
            begin: "same".to_string(),
            end: "same".to_string(),
        }
    );

    // Regardless of dictionary contents, and after lowercasing
    let empty = WordDictionary::new();
    let err = find_shortest_ladder("Same", "sAME", &empty).unwrap_err();
    assert!(matches!(err, LadderError::IdenticalWords { .. }));
}

#[test]
fn test_end_word_missing_rejected() {
    let dictionary = dict(&["cat", "cot", "cog"]);
    let err = find_shortest_ladder("cat", "dog", &dictionary).unwrap_err();
    assert!(matches!(err, LadderError::EndWordNotFound { .. }));
    assert!(err.to_string().contains("end word not in dictionary"));
}

#[test]
fn test_no_ladder_is_empty_not_error() {
    let dictionary = dict(&["cat", "cot", "dog"]);
    let ladder = find_shortest_ladder("cat", "dog", &dictionary).unwrap();
    assert!(ladder.is_empty());
}

#[test]
fn test_same_level_ladders_may_share_a_word() {
    // Both "bat" and "cot" are one edit from "cat"; "bot" is reachable from
    // both at level two. Deferred marking keeps the search correct either way.
    let dictionary = dict(&["bat", "cot", "bot", "bog", "dog"]);
    let ladder = find_shortest_ladder("cat", "dog", &dictionary).unwrap();
    assert_eq!(ladder.len(), 5);
    assert!(ladder.is_valid_chain());
}

#[test]
fn test_found_ladder_is_deterministic() {
    let dictionary = dict(&[
        "cat", "cot", "cog", "dog", "bat", "bag", "bog", "bot", "dot", "cag",
    ]);
    let first = find_shortest_ladder("cat", "dog", &dictionary).unwrap();
    let second = find_shortest_ladder("cat", "dog", &dictionary).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 4);
}

#[test]
fn test_ladder_never_revisits_begin_word() {
    let dictionary = dict(&["cat", "cot", "cog", "dog"]);
    let ladder = find_shortest_ladder("cat", "dog", &dictionary).unwrap();
    let cat_count = ladder.words().iter().filter(|w| *w == "cat").count();
    assert_eq!(cat_count, 1);
}
