#![no_main]

use libfuzzer_sys::fuzz_target;
use quizq::query::{classify, parse, tokenize};

fuzz_target!(|data: &str| {
    // The parser is total: it must never panic, and it must agree with
    // tokenize + classify on how many tokens the input holds
    let parsed = parse(data);
    let tokens = tokenize(data);

    match parsed {
        None => assert!(data.is_empty()),
        Some(q) => {
            assert_eq!(q.token_count(), tokens.len());
            for raw in &tokens {
                assert!(!raw.text.is_empty());
                let _ = classify(raw);
            }
            assert_eq!(Some(q), parse(data));
        }
    }
});
