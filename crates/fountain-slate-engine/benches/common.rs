// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_screenplay(scenes: usize) -> String {
    let mut content = String::new();
    content.push_str("FADE IN:\n\n");

    for scene in 0..scenes {
        let place = if scene % 2 == 0 { "INT" } else { "EXT" };
        content.push_str(&format!("{place}. LOCATION {scene} - DAY\n\n"));
        content.push_str("The room hums with fluorescent light. Papers everywhere.\n\n");
        content.push_str(&format!("CHARACTER {scene}\n"));
        content.push_str("We don't have much time.\nThey're already on their way.\n\n");
        content.push_str("RESPONSE\nThen we move now.\n\n");

        if scene % 5 == 0 {
            content.push_str("^MEANWHILE^\n\n");
        }
        if scene % 3 == 0 {
            content.push_str("CUT TO:\n\n");
        }
    }

    content.push_str("FADE OUT:\n");
    content
}
