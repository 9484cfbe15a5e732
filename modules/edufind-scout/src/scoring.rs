// Fixed, deterministic heuristics. Both scores land in [0, 1].

const BASE_CREDIBILITY: f64 = 0.2;
const TRUSTED_DOMAIN_BONUS: f64 = 0.3;
const KEYWORD_BONUS: f64 = 0.1;

const TRUSTED_DOMAINS: &[&str] = &[
    ".edu",
    "khan",
    "coursera",
    "udacity",
    "edx",
    "mit.edu",
    "stanford.edu",
    "youtube.com",
    "docs.python.org",
    "developer.mozilla.org",
];

const EDUCATIONAL_KEYWORDS: &[&str] = &[
    "course",
    "tutorial",
    "learn",
    "education",
    "lecture",
    "lesson",
];

/// Heuristic trustworthiness of a result.
///
/// Base 0.2, plus 0.3 once if the URL is on a trusted domain, plus 0.1 for
/// every educational keyword found in the title or description. Capped at 1.0.
pub fn credibility(url: &str, title: &str, description: &str) -> f64 {
    let url = url.to_lowercase();
    let title = title.to_lowercase();
    let description = description.to_lowercase();

    let mut score = BASE_CREDIBILITY;

    if TRUSTED_DOMAINS.iter().any(|d| url.contains(d)) {
        score += TRUSTED_DOMAIN_BONUS;
    }

    for keyword in EDUCATIONAL_KEYWORDS {
        if title.contains(keyword) || description.contains(keyword) {
            score += KEYWORD_BONUS;
        }
    }

    score.min(1.0)
}

/// Fraction of topic words that appear in the title or description.
///
/// Words are whitespace-separated and matched as case-insensitive substrings.
/// A topic with no words scores 0.0.
pub fn relevance(topic: &str, title: &str, description: &str) -> f64 {
    let topic = topic.to_lowercase();
    let words: Vec<&str> = topic.split_whitespace().collect();
    if words.is_empty() {
        return 0.0;
    }

    let title = title.to_lowercase();
    let description = description.to_lowercase();

    let matched = words
        .iter()
        .filter(|w| title.contains(*w) || description.contains(*w))
        .count();

    (matched as f64 / words.len() as f64).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn credibility_base_only() {
        assert!(approx(credibility("https://example.com", "Hello", "World"), 0.2));
    }

    #[test]
    fn trusted_domain_bonus_applies_once() {
        // matches both ".edu" and "mit.edu" but the bonus is added once
        let score = credibility("https://ocw.mit.edu/courses", "", "");
        assert!(approx(score, 0.5));
    }

    #[test]
    fn keywords_are_cumulative() {
        let score = credibility(
            "https://example.com",
            "Free online course",
            "A lecture series with a tutorial per lesson",
        );
        // course, tutorial, lecture, lesson
        assert!(approx(score, 0.6));
    }

    #[test]
    fn keyword_counts_once_even_if_in_both_fields() {
        let score = credibility("https://example.com", "Tutorial", "another tutorial");
        assert!(approx(score, 0.3));
    }

    #[test]
    fn credibility_is_capped() {
        let score = credibility(
            "https://www.coursera.org",
            "course tutorial learn education lecture lesson",
            "",
        );
        // 0.2 + 0.3 + 0.6 = 1.1
        assert!(approx(score, 1.0));
    }

    #[test]
    fn credibility_is_case_insensitive() {
        let score = credibility("https://DOCS.PYTHON.ORG/3/", "PYTHON TUTORIAL", "");
        assert!(approx(score, 0.6));
    }

    #[test]
    fn python_docs_scenario() {
        let url = "https://docs.python.org/3/tutorial";
        let title = "Python Tutorial";
        let snippet = "Learn Python basics";
        assert!(approx(credibility(url, title, snippet), 0.7));
        assert!(approx(relevance("python programming", title, snippet), 0.5));
    }

    #[test]
    fn relevance_full_match() {
        assert!(approx(
            relevance("Linear Algebra", "Intro to linear algebra", ""),
            1.0
        ));
    }

    #[test]
    fn relevance_matches_description_too() {
        assert!(approx(
            relevance("rust ownership", "The Book", "Understanding Ownership in Rust"),
            1.0
        ));
    }

    #[test]
    fn relevance_uses_substring_matching() {
        // "math" inside "mathematics"
        assert!(approx(relevance("math", "Mathematics for beginners", ""), 1.0));
    }

    #[test]
    fn relevance_empty_topic_is_zero() {
        assert!(approx(relevance("", "anything", "at all"), 0.0));
        assert!(approx(relevance("   \t", "anything", "at all"), 0.0));
    }

    #[test]
    fn relevance_no_match_is_zero() {
        assert!(approx(relevance("chemistry", "Poetry", "Verse"), 0.0));
    }

    #[test]
    fn relevance_uses_the_topic_not_the_title() {
        let cases = [
            ("rust", "Python course", "snakes and loops", 0.0),
            ("rust async", "Async Python", "event loops", 0.5),
            ("linear algebra", "Matrices", "intro to LINEAR ALGEBRA", 1.0),
            ("a b c d", "b", "d", 0.5),
        ];
        for (topic, title, desc, expected) in cases {
            let r = relevance(topic, title, desc);
            assert!(approx(r, expected), "relevance {r} for {topic:?}");
        }
    }

    fn text() -> impl Strategy<Value = String> {
        prop::string::string_regex("[ a-zA-Z.:/éß🙂]{0,80}").unwrap()
    }

    fn keyword_soup() -> impl Strategy<Value = String> {
        prop::collection::vec(
            prop::sample::select(vec![
                "course", "tutorial", "learn", "education", "lecture", "lesson", "edu",
                "youtube.com", "docs.python.org", "x",
            ]),
            0..20,
        )
        .prop_map(|words| words.join(" "))
    }

    proptest! {
        #[test]
        fn credibility_stays_in_unit_interval(
            url in prop_oneof![text(), keyword_soup()],
            title in prop_oneof![text(), keyword_soup()],
            desc in prop_oneof![text(), keyword_soup()],
        ) {
            let c = credibility(&url, &title, &desc);
            prop_assert!((BASE_CREDIBILITY..=1.0).contains(&c), "credibility {}", c);
        }

        #[test]
        fn relevance_stays_in_unit_interval(
            topic in prop_oneof![text(), keyword_soup()],
            title in prop_oneof![text(), keyword_soup()],
            desc in prop_oneof![text(), keyword_soup()],
        ) {
            let r = relevance(&topic, &title, &desc);
            prop_assert!((0.0..=1.0).contains(&r), "relevance {}", r);
        }
    }

    #[test]
    fn scores_are_deterministic() {
        let a = credibility("https://edx.org", "Learn", "course");
        let b = credibility("https://edx.org", "Learn", "course");
        assert_eq!(a.to_bits(), b.to_bits());

        let a = relevance("data science", "Data", "science");
        let b = relevance("data science", "Data", "science");
        assert_eq!(a.to_bits(), b.to_bits());
    }
}
