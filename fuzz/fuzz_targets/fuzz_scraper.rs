#![no_main]

use libfuzzer_sys::fuzz_target;

use wavebench_core::scraper::parse_elapsed;
use wavebench_core::{MatchMode, Scraper};

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);

    // Should not panic, and accepted values are always usable as elapsed times
    let scraper = Scraper::new("completada en", MatchMode::All);
    for parsed in scraper.scrape(&text) {
        if let Ok(secs) = parsed {
            assert!(secs.is_finite() && secs >= 0.0);
        }
    }
    for line in text.lines() {
        let _ = parse_elapsed(line);
    }
});
