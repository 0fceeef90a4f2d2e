use listcraft_core::{BannedTermSet, DEFAULT_BANNED_TERMS, PolicyFilter, StripMode};

fn default_filter() -> PolicyFilter {
    PolicyFilter::new(BannedTermSet::default(), StripMode::SinglePass).expect("default policy")
}

const SAMPLES: &[&str] = &[
    "This premium product offers perfect UV protection with exclusive features",
    "Sturdy steel frame for everyday use",
    "Top-rated, FDA approved and clinically certified",
    "Number One choice: #1 in genuine LUXURY",
    "A mauve finish that will heal and cure",
    "   lots\t of\n whitespace   ",
    "",
];

#[test]
fn detects_reference_scenario() {
    let filter = default_filter();
    let text = "This premium product offers perfect UV protection with exclusive features";

    let found = filter.detect(text);
    assert_eq!(found, vec!["uv", "premium", "perfect", "exclusive"]);

    let cleaned = filter.strip(text).to_lowercase();
    for term in ["premium", "perfect", "uv", "exclusive"] {
        assert!(!cleaned.contains(term), "{term} left in {cleaned}");
    }
}

#[test]
fn detect_reports_exactly_the_occurring_terms() {
    let filter = default_filter();
    for sample in SAMPLES {
        let lower = sample.to_lowercase();
        let expected: Vec<&str> = DEFAULT_BANNED_TERMS
            .iter()
            .copied()
            .filter(|term| lower.contains(term))
            .collect();
        assert_eq!(filter.detect(sample), expected, "sample: {sample}");
    }
}

#[test]
fn strip_is_idempotent_and_clean() {
    let filter = default_filter();
    for sample in SAMPLES {
        let once = filter.strip(sample);
        assert_eq!(filter.strip(&once), once, "sample: {sample}");
        assert!(filter.detect(&once).is_empty(), "sample: {sample}");
    }
}

#[test]
fn until_stable_reaches_a_clean_fixed_point() {
    let filter = PolicyFilter::new(BannedTermSet::default(), StripMode::UntilStable)
        .expect("policy");
    let single = default_filter();
    assert_eq!(single.strip("cutopre quality"), "cure quality");

    let cleaned = filter.strip("cutopre quality");
    assert!(filter.detect(&cleaned).is_empty());
    assert_eq!(cleaned, "quality");
}
