#![no_main]

use libfuzzer_sys::fuzz_target;
use url::Url;

use precis::extractor::extract_from_html;
use precis::summarizer::summarize;

fuzz_target!(|data: &[u8]| {
    let html = String::from_utf8_lossy(data);
    let Ok(url) = Url::parse("https://example.com/news/2024/fuzz") else {
        return;
    };

    // Neither stage may panic, whatever the page looks like.
    if let Ok(content) = extract_from_html(&url, &html) {
        let _ = summarize(&content.text);
    }
});
