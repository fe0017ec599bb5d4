#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let raw: Vec<&str> = data.split('\n').collect();
    if let Ok(set) = filters::normalize(&raw) {
        assert_eq!(set.segments().len(), set.len());
        for pattern in &set {
            assert_eq!(filters::clean(pattern.body()), pattern.body());
            assert_eq!(pattern.segments().join("/"), pattern.body());
        }
        let cleaned: Vec<&str> = set.patterns().collect();
        let _ = filters::normalize(&cleaned);
    }
});
