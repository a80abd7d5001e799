//! Transformation of studiable items into numbered quiz blocks.
//!
//! # Format
//! A card's question side holds the prompt on its first line and lettered
//! options below it; the definition side holds the correct letter:
//! ```text
//! What is 2+2?        ->  1. What is 2+2?
//! a) three            ->  A. three;[*]
//! b) four             ->  B. four;[*] =
//! ```

use crate::types::{
    CardSide, FormattedItem, FormattedSet, QuestionBlock, StudiableItem, CORRECT_MARKER,
    DEFINITION_LABEL, OPTION_SUFFIX, WORD_LABEL,
};

/// Collect the cards that have both a question and an answer, keyed by `Q<id>`.
///
/// Items missing either side, or whose side has no text, are skipped.
pub fn format_items(items: &[StudiableItem]) -> FormattedSet {
    items
        .iter()
        .filter_map(|item| {
            let question = item.side(WORD_LABEL).and_then(CardSide::text)?;
            let answer = item.side(DEFINITION_LABEL).and_then(CardSide::text)?;
            Some((
                item.key(),
                FormattedItem {
                    question: question.to_string(),
                    answer: answer.to_string(),
                },
            ))
        })
        .collect()
}

/// Number every item from 1 in set order.
pub fn question_blocks(set: &FormattedSet) -> Vec<QuestionBlock> {
    set.values()
        .enumerate()
        .map(|(idx, item)| question_block(idx + 1, item))
        .collect()
}

/// Split one item's question into its prompt and formatted answer lines.
pub fn question_block(number: usize, item: &FormattedItem) -> QuestionBlock {
    let mut lines = item.question.split('\n').map(str::trim);
    let mut prompt = lines.next().unwrap_or_default().to_string();
    if !prompt.ends_with('?') && !prompt.ends_with(':') {
        prompt.push(':');
    }

    let options: Vec<&str> = lines.collect();
    let lines = if options.is_empty() {
        Vec::new()
    } else {
        format_answers(&options.join("\n"), &item.answer)
    };

    QuestionBlock {
        number,
        prompt,
        lines,
    }
}

/// Rewrite letter-prefixed lines as `"<LETTER>. <text>;[*]"`, marking the correct one.
///
/// Lines not starting with an ASCII letter are passed through trimmed but otherwise unchanged.
pub fn format_answers(option_text: &str, correct: &str) -> Vec<String> {
    let correct = correct.to_uppercase();
    option_text
        .split('\n')
        .map(str::trim)
        .map(|line| format_option(line, &correct))
        .collect()
}

fn format_option(line: &str, correct: &str) -> String {
    let Some(first) = line.chars().next().filter(char::is_ascii_alphabetic) else {
        return line.to_string();
    };

    let letter = first.to_ascii_uppercase();
    // Drops the label and its delimiter, e.g. "a)" or "b.".
    let rest: String = line.chars().skip(2).collect();
    let mut formatted = format!("{}. {}{}", letter, rest.trim(), OPTION_SUFFIX);

    if correct.chars().eq(std::iter::once(letter)) {
        formatted.push_str(CORRECT_MARKER);
    }
    formatted
}

/// Whether a formatted line carries the correct-answer marker.
pub fn is_correct_line(line: &str) -> bool {
    line.ends_with(CORRECT_MARKER)
}
