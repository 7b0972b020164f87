//! # Help Text
//!
//! The command overview shown by `/help`.

/// Help text listing every command and the genres `/top` understands.
pub fn overview<'a>(genres: impl IntoIterator<Item = &'a str>) -> String {
    let genres = genres
        .into_iter()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        concat!(
            "List of available commands:\n",
            "1. /help: Showing this message.\n",
            "2. /start: Starting bot query for your session.\n",
            "3. /weather <Your city or country>: Finding information about weather in your country or city.\n",
            "4. /top <film genre>: Will show top 20 films of current genre.\n",
            "\tAvailable choices: {genres}"
        ),
        genres = genres
    )
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
