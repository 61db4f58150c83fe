// Rendering layer: pure functions from the content model to HTML strings.
// No I/O here; the pipeline's load stage decides where pages end up.

pub mod blocks;
pub mod html;
pub mod pages;
