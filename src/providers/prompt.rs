/// The instruction template sent ahead of every transcript.
///
/// Loaded from `prompt.txt` at compile time. It asks the model for the four numbered
/// sections understood by [`crate::parser::parse`].
pub const RECIPE_GENERATION_PROMPT: &str = include_str!("prompt.txt");

/// Append the transcript to the instruction template.
pub fn build_generation_input(transcript: &str) -> String {
    format!("{}\n{}", RECIPE_GENERATION_PROMPT, transcript)
}
