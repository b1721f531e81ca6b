// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_loose_list_note(sections: usize) -> String {
    let base = "# Section\n\nSome paragraph text.\n\n- First point\n\n- Second point\n\n\n  - Nested point\n\n1. Step one\n\n2. Step two\n\nClosing text.\n\n";
    base.repeat(sections)
}

#[allow(dead_code)]
pub fn generate_tight_list_note(sections: usize) -> String {
    let base = "# Section\n\nSome paragraph text.\n\n- First point\n- Second point\n  - Nested point\n1. Step one\n2. Step two\n\nClosing text.\n\n";
    base.repeat(sections)
}
