#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    patterns: Vec<&'a str>,
    paths: Vec<&'a str>,
}

fuzz_target!(|input: Input<'_>| {
    let Ok(set) = filters::PatternSet::new(&input.patterns) else {
        return;
    };
    for path in input.paths {
        let first = set.matches(path);
        let second = set.matches(path);
        assert_eq!(first.is_ok(), second.is_ok());
        if let (Ok(a), Ok(b)) = (first, second) {
            assert_eq!(a, b);
        }
        if filters::clean(path) == "." {
            assert!(matches!(set.matches(path), Ok(false)));
        }
    }
});
