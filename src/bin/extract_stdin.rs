//! Reads a post page's HTML from stdin and prints the extraction as JSON.
//!
//! Usage: `extract_stdin <post-url> < page.html`
//!
//! Logging goes to stderr and is controlled by `RUST_LOG`.

use std::io::{self, Read};
use std::process::ExitCode;

use booru_tags::extract_bytes;
use serde_json::json;

fn fail(message: &str) -> ExitCode {
    println!("{}", json!({ "error": message }));
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    env_logger::init();

    let Some(url) = std::env::args().nth(1) else {
        eprintln!("usage: extract_stdin <post-url> < page.html");
        return fail("missing post URL argument");
    };

    let mut html = Vec::new();
    if let Err(err) = io::stdin().read_to_end(&mut html) {
        return fail(&format!("failed to read stdin: {err}"));
    }

    match extract_bytes(&url, &html) {
        Ok(extraction) => match serde_json::to_string_pretty(&extraction) {
            Ok(output) => {
                println!("{output}");
                ExitCode::SUCCESS
            }
            Err(err) => fail(&err.to_string()),
        },
        Err(err) => fail(&err.to_string()),
    }
}
