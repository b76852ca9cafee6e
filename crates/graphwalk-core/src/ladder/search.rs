use std::collections::{HashSet, VecDeque};

use tracing::{debug, trace};

use crate::ladder::dictionary::WordDictionary;
use crate::ladder::edit::is_one_edit_apart;
use crate::ladder::types::{Ladder, LadderError};

/// Find a shortest word ladder from `begin_word` to `end_word`.
///
/// Both words are lowercased first. The end word must be in the dictionary;
/// the start word need not be. Returns an empty ladder when none exists.
///
/// Breadth-first over whole partial ladders, one level at a time. Words
/// discovered during a level are only marked visited once the level is
/// done, so two ladders of the same length may both extend through the
/// same word.
#[tracing::instrument(skip(dictionary), fields(dictionary_size = dictionary.len()))]
pub fn find_shortest_ladder(
    begin_word: &str,
    end_word: &str,
    dictionary: &WordDictionary,
) -> Result<Ladder, LadderError> {
    let begin = begin_word.to_lowercase();
    let end = end_word.to_lowercase();

    if begin == end {
        return Err(LadderError::IdenticalWords {
            begin: begin_word.to_string(),
            end: end_word.to_string(),
        });
    }
    if !dictionary.contains(&end) {
        return Err(LadderError::EndWordNotFound {
            begin: begin_word.to_string(),
            end: end_word.to_string(),
        });
    }

    let mut visited: HashSet<&str> = HashSet::new();
    visited.insert(begin.as_str());

    let mut queue: VecDeque<Vec<&str>> = VecDeque::new();
    queue.push_back(vec![begin.as_str()]);

    let mut level = 0usize;
    while !queue.is_empty() {
        level += 1;
        let level_size = queue.len();
        let mut discovered: Vec<&str> = Vec::new();

        for _ in 0..level_size {
            let Some(partial) = queue.pop_front() else {
                break;
            };
            let Some(&last) = partial.last() else {
                continue;
            };

            for word in dictionary.iter() {
                if visited.contains(word) || !is_one_edit_apart(last, word) {
                    continue;
                }

                let mut extended = partial.clone();
                extended.push(word);

                if word == end {
                    debug!(level, words = extended.len(), "ladder_found");
                    return Ok(Ladder::new(
                        extended.into_iter().map(str::to_string).collect(),
                    ));
                }

                queue.push_back(extended);
                discovered.push(word);
            }
        }

        trace!(level, frontier = queue.len(), "ladder_level");
        visited.extend(discovered);
    }

    debug!(levels = level, "ladder_not_found");
    Ok(Ladder::default())
}

#[cfg(test)]
mod tests;
