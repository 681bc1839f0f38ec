// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_chat_reply(size: usize) -> String {
    let base = "## Summary\n\nHere is **what** I found in `config.toml`:\n\n- first *point*\n- second ~~point~~ point\n\n1. open [the docs](https://example.com/docs?a=1&b=2)\n2. restart\n\n> quoted <advice> & more\n\n---\n\n";
    base.repeat(size)
}

/// A single long line dense with delimiters of every kind.
#[allow(dead_code)]
pub fn generate_delimiter_soup(len: usize) -> String {
    "**a _b ~~c `d [e](".repeat(len)
}
