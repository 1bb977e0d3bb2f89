use std::fs;

use shoal::Shell;
use walkdir::WalkDir;

#[test]
fn demo_scripts_run_clean() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "shoal"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        let output = Shell::new().submit(&source);
        if output.starts_with("Error") {
            panic!("Demo script {path:?} failed:\n{source}\nOutput: {output}");
        }
    }

    assert!(count > 0, "No demo scripts found in demos/");
}

#[test]
fn demo_scripts_produce_expected_results() {
    let cases = [("demos/fibonacci.shoal", "55"),
                 ("demos/primes.shoal", "15"),
                 ("demos/sort.shoal", "[4, 9, 15, 26, 31]"),
                 ("demos/strings.shoal", "one, two, three")];

    for (path, expected) in cases {
        let source = fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path}: {e}"));
        assert_eq!(Shell::new().submit(&source), expected, "script: {path}");
    }
}
