#![no_main]

use libfuzzer_sys::fuzz_target;
use pdfsplice::pages::{PageRangeExpression, PageRangeSelector, SelectionPolicy};

fuzz_target!(|data: &[u8]| {
    let Some((&pages, rest)) = data.split_first() else {
        return;
    };
    let expression = String::from_utf8_lossy(rest);
    let total_pages = pages as usize;

    let strict = PageRangeSelector::new(SelectionPolicy::Strict).select(&expression, total_pages);
    let lenient = PageRangeSelector::new(SelectionPolicy::Lenient)
        .select(&expression, total_pages)
        .expect("lenient selection never fails");

    // Every resolved index is a real page.
    for group in &lenient {
        assert!(!group.is_empty());
        assert!(group.iter().all(|index| index < total_pages));
    }

    // Where strict succeeds, both policies agree.
    if let Ok(strict) = strict {
        assert_eq!(strict, lenient);
        assert!(PageRangeExpression::parse(&expression).is_ok());
    }
});
