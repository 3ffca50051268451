/// Sentence boundaries for review text.
///
/// A run of terminators (`.`, `!`, `?`) followed by whitespace or the end of
/// input closes a sentence; trailing punctuation stays with the sentence so
/// the sentiment model can read the emphasis. Periods after common
/// abbreviations and dotted tokens ("dr.", "e.g.") do not split.
pub fn split_sentences(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut i = 0;

    while i < chars.len() {
        current.push(chars[i]);

        if is_terminator(chars[i]) {
            while i + 1 < chars.len() && is_terminator(chars[i + 1]) {
                i += 1;
                current.push(chars[i]);
            }

            let at_end = i + 1 >= chars.len();
            let before_space = !at_end && chars[i + 1].is_whitespace();
            if (at_end || before_space) && !ends_with_abbreviation(&current) {
                push_trimmed(&mut sentences, &current);
                current.clear();
            }
        }

        i += 1;
    }

    push_trimmed(&mut sentences, &current);
    sentences
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn push_trimmed(sentences: &mut Vec<String>, raw: &str) {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}

const ABBREVIATIONS: [&str; 10] = [
    "mr", "mrs", "ms", "dr", "prof", "vs", "etc", "eg", "ie", "approx",
];

fn ends_with_abbreviation(fragment: &str) -> bool {
    let Some(last) = fragment.split_whitespace().last() else {
        return false;
    };
    let token = last.trim_end_matches('.').to_ascii_lowercase();
    // Dotted tokens like "e.g" keep their period attached.
    token.contains('.') || ABBREVIATIONS.contains(&token.as_str())
}
