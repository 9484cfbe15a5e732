use edufind_common::ResourceType;

// Checked in order; a URL can carry markers from several groups and the
// first group to match decides.
const VIDEO_MARKERS: &[&str] = &["youtube.com", "youtu.be"];
const COURSE_MARKERS: &[&str] = &["coursera", "edx", "udacity", "khan"];
const DOCUMENTATION_MARKERS: &[&str] = &["docs.", "documentation", "guide"];
const PRACTICE_MARKERS: &[&str] = &["leetcode", "hackerrank", "quizlet", "practice"];

const RULES: &[(&[&str], ResourceType)] = &[
    (VIDEO_MARKERS, ResourceType::Video),
    (COURSE_MARKERS, ResourceType::Course),
    (DOCUMENTATION_MARKERS, ResourceType::Documentation),
    (PRACTICE_MARKERS, ResourceType::Practice),
];

/// Infer the resource category from the URL. Anything unrecognised is `Other`.
///
/// The title is part of the signature so callers pass the full hit, but only
/// URL markers currently decide the category.
pub fn classify(url: &str, _title: &str) -> ResourceType {
    let url = url.to_lowercase();
    RULES
        .iter()
        .find(|(markers, _)| markers.iter().any(|m| url.contains(m)))
        .map(|(_, t)| *t)
        .unwrap_or(ResourceType::Other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_hosts() {
        assert_eq!(
            classify("https://www.youtube.com/watch?v=abc", ""),
            ResourceType::Video
        );
        assert_eq!(classify("https://youtu.be/abc", ""), ResourceType::Video);
    }

    #[test]
    fn course_platforms() {
        assert_eq!(
            classify("https://www.coursera.org/learn/ml", ""),
            ResourceType::Course
        );
        assert_eq!(
            classify("https://www.edx.org/course/cs50", ""),
            ResourceType::Course
        );
        assert_eq!(
            classify("https://www.khanacademy.org/math", ""),
            ResourceType::Course
        );
    }

    #[test]
    fn documentation_markers() {
        assert_eq!(
            classify("https://docs.python.org/3/tutorial", "Python Tutorial"),
            ResourceType::Documentation
        );
        assert_eq!(
            classify("https://example.com/user-guide", ""),
            ResourceType::Documentation
        );
    }

    #[test]
    fn practice_sites() {
        assert_eq!(
            classify("https://leetcode.com/problems/two-sum", ""),
            ResourceType::Practice
        );
        assert_eq!(
            classify("https://quizlet.com/123/flashcards", ""),
            ResourceType::Practice
        );
    }

    #[test]
    fn unknown_falls_back_to_other() {
        assert_eq!(classify("https://example.com/blog", ""), ResourceType::Other);
        assert_eq!(classify("", ""), ResourceType::Other);
    }

    #[test]
    fn markers_are_case_insensitive() {
        assert_eq!(classify("https://WWW.YOUTUBE.COM/x", ""), ResourceType::Video);
        assert_eq!(classify("https://Docs.Rust-Lang.org", ""), ResourceType::Documentation);
    }

    #[test]
    fn earlier_rule_wins_on_overlap() {
        // video before course
        assert_eq!(
            classify("https://youtube.com/@khanacademy", ""),
            ResourceType::Video
        );
        // course before documentation
        assert_eq!(
            classify("https://www.coursera.org/guide", ""),
            ResourceType::Course
        );
        // documentation before practice
        assert_eq!(
            classify("https://docs.example.com/practice", ""),
            ResourceType::Documentation
        );
    }

    #[test]
    fn title_does_not_change_category() {
        assert_eq!(
            classify("https://example.com", "YouTube course documentation"),
            ResourceType::Other
        );
    }
}
