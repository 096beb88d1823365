// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_outline(sections: usize) -> String {
    let base = "# Heading\n\n- Topic\n  - Note: remember this\n    - Term | Definition\n    - Shipped in 2024 (finally)!\n  - \"Quoted\" child\n\nParagraph text between lists.\n\n";
    base.repeat(sections)
}

/// Strictly increasing indent ladder: the worst case for the forward scan.
#[allow(dead_code)]
pub fn generate_ladder(depth: usize) -> Vec<Option<usize>> {
    (1..=depth).map(|i| Some(i * 2)).collect()
}

#[allow(dead_code)]
pub fn generate_ladder_text(depth: usize) -> String {
    (1..=depth)
        .map(|i| format!("{}- step {i}", " ".repeat(i * 2)))
        .collect::<Vec<_>>()
        .join("\n")
}
