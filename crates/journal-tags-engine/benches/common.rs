// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_tag_document(size: usize) -> String {
    let base = "<Title-- Day one --Title/>\n\nLoose note between blocks.\n\n<Points-- first\nsecond\nthird --Points/>\n\n<Code-- fn main() {\n    println!(\"hi\");\n} --Code/>\n\n<Quote-- Stay curious --Quote/>\n\n";
    base.repeat(size)
}

/// A document full of `<` that never close, the scanner's worst case.
#[allow(dead_code)]
pub fn generate_unterminated_tags(size: usize) -> String {
    "<Code-- a <Quote-- b <x-y-z-- c ".repeat(size)
}
