use regrep::Regex;

fn assert_match(pattern: &str, text: &str, expected: bool) {
    let regex = Regex::new(pattern)
        .unwrap_or_else(|err| panic!("pattern '{pattern}' failed to compile: {err}"));
    let got = regex.is_match(text);
    assert_eq!(
        got, expected,
        "pattern '{pattern}' against '{text}': expected {expected}, got {got}"
    );
}

#[cfg(test)]
mod literal_tests {
    use super::*;

    #[test]
    fn single_char_match() {
        assert_match("a", "abc", true);
    }

    #[test]
    fn single_char_no_match() {
        assert_match("x", "abc", false);
    }

    #[test]
    fn char_at_end_of_line() {
        assert_match("c", "abc", true);
    }

    #[test]
    fn empty_pattern_matches_empty_line() {
        assert_match("", "", true);
    }

    #[test]
    fn empty_pattern_matches_any_line() {
        assert_match("", "abc", true);
    }

    #[test]
    fn empty_line_no_match() {
        assert_match("a", "", false);
    }

    #[test]
    fn close_bracket_is_a_literal() {
        assert_match("]", "x]y", true);
    }
}

#[cfg(test)]
mod wildcard_tests {
    use super::*;

    #[test]
    fn dot_matches_any_char() {
        assert_match(".", "a", true);
    }

    #[test]
    fn dot_in_sequence() {
        assert_match("a.c", "abc", true);
    }

    #[test]
    fn dot_needs_a_char() {
        assert_match(".", "", false);
    }

    #[test]
    fn dot_does_not_match_absent_char() {
        assert_match("a.c", "ac", false);
    }

    #[test]
    fn three_dots() {
        assert_match("...", "abc", true);
    }

    #[test]
    fn four_dots_on_three_chars() {
        assert_match("....", "abc", false);
    }
}

#[cfg(test)]
mod escape_tests {
    use super::*;

    #[test]
    fn escaped_dot_is_literal() {
        assert_match("\\.", ".", true);
    }

    #[test]
    fn escaped_dot_rejects_other_chars() {
        assert_match("\\.", "x", false);
    }

    #[test]
    fn escaped_plus_is_literal() {
        assert_match("a\\+b", "a+b", true);
    }

    #[test]
    fn escaped_backslash_is_literal() {
        assert_match("\\\\", "\\", true);
    }

    #[test]
    fn escaped_zero_is_literal_digit() {
        assert_match("\\0", "0", true);
    }

    #[test]
    fn escaped_dollar_is_literal() {
        assert_match("a\\$", "a$b", true);
    }

    #[test]
    fn digit_class_matches_digits() {
        assert_match("\\d", "a1b", true);
    }

    #[test]
    fn digit_class_rejects_letters() {
        assert_match("\\d", "abc", false);
    }

    #[test]
    fn word_class_matches_underscore() {
        assert_match("\\w", "_", true);
    }

    #[test]
    fn word_class_rejects_punctuation() {
        assert_match("\\w", "!?.", false);
    }
}

#[cfg(test)]
mod anchor_tests {
    use super::*;

    #[test]
    fn start_anchor() {
        assert_match("^abc", "abc123", true);
    }

    #[test]
    fn start_anchor_rejects_offset_match() {
        assert_match("^abc", "123abc", false);
    }

    #[test]
    fn end_anchor() {
        assert_match("abc$", "123abc", true);
    }

    #[test]
    fn end_anchor_rejects_trailing_text() {
        assert_match("abc$", "abc123", false);
    }

    #[test]
    fn both_anchors() {
        assert_match("^abc$", "abc", true);
    }

    #[test]
    fn both_anchors_reject_longer_line() {
        assert_match("^abc$", "abcd", false);
    }

    #[test]
    fn empty_anchored_pattern_matches_empty_line() {
        assert_match("^$", "", true);
    }

    #[test]
    fn empty_anchored_pattern_rejects_content() {
        assert_match("^$", "a", false);
    }

    #[test]
    fn optional_char_before_end_anchor() {
        assert_match("a?$", "b", true);
    }

    #[test]
    fn quantifier_backtracks_against_end_anchor() {
        assert_match("a+$", "aaa", true);
        assert_match("a+$", "aaab", false);
    }

    #[test]
    fn start_anchor_scopes_over_alternation() {
        assert_match("^a|b", "ab", true);
        assert_match("^a|b", "xb", false);
    }

    #[test]
    fn end_anchor_scopes_over_alternation() {
        assert_match("a|b$", "xa", true);
        assert_match("a|b$", "xb", true);
        assert_match("a|b$", "ax", false);
    }
}

#[cfg(test)]
mod character_class_tests {
    use super::*;

    #[test]
    fn class_matches_member() {
        assert_match("[abc]", "banana", true);
    }

    #[test]
    fn class_rejects_non_members() {
        assert_match("[xyz]", "banana", false);
    }

    #[test]
    fn negated_class_matches_outsider() {
        assert_match("[^abc]", "def", true);
    }

    #[test]
    fn negated_class_rejects_members() {
        assert_match("[^abc]", "abc", false);
    }

    #[test]
    fn dash_in_class_is_a_literal() {
        assert_match("[a-c]", "-", true);
        assert_match("[a-c]", "b", false);
    }

    #[test]
    fn escaped_close_bracket_in_class() {
        assert_match("[\\]x]", "]", true);
    }

    #[test]
    fn caret_not_first_is_a_member() {
        assert_match("[a^]", "^", true);
    }
}

#[cfg(test)]
mod star_quantifier_tests {
    use super::*;

    #[test]
    fn star_allows_zero_occurrences() {
        assert_match("a*", "bbb", true);
    }

    #[test]
    fn star_matches_many() {
        assert_match("a*", "aaa", true);
    }

    #[test]
    fn star_after_char_optional() {
        assert_match("ab*", "a", true);
    }

    #[test]
    fn star_after_char_repeated() {
        assert_match("ab*", "abb", true);
    }

    #[test]
    fn star_is_greedy_with_backtrack() {
        assert_match("a*b", "aaab", true);
    }

    #[test]
    fn dot_star_matches_anything() {
        assert_match(".*", "anything", true);
    }

    #[test]
    fn star_in_middle_of_sequence() {
        assert_match("ab*c", "ac", true);
        assert_match("ab*c", "abc", true);
        assert_match("ab*c", "abbc", true);
    }
}

#[cfg(test)]
mod plus_quantifier_tests {
    use super::*;

    #[test]
    fn plus_matches_repeats() {
        assert_match("a+", "aaa", true);
    }

    #[test]
    fn plus_requires_one_occurrence() {
        assert_match("a+", "bbb", false);
    }

    #[test]
    fn plus_after_char() {
        assert_match("ab+", "abb", true);
        assert_match("ab+", "a", false);
    }

    #[test]
    fn plus_is_greedy_with_backtrack() {
        assert_match("a+b", "aaab", true);
    }

    #[test]
    fn plus_requires_occurrence_before_tail() {
        assert_match("a+b", "b", false);
    }
}

#[cfg(test)]
mod question_quantifier_tests {
    use super::*;

    #[test]
    fn question_allows_absence() {
        assert_match("a?", "b", true);
    }

    #[test]
    fn question_allows_presence() {
        assert_match("a?", "a", true);
    }

    #[test]
    fn question_after_char() {
        assert_match("ab?", "a", true);
        assert_match("ab?", "ab", true);
        assert_match("ab?", "ac", true);
    }

    #[test]
    fn question_in_middle_of_word() {
        assert_match("colou?r", "color", true);
        assert_match("colou?r", "colour", true);
        assert_match("colou?r", "colr", false);
    }
}

#[cfg(test)]
mod sequence_tests {
    use super::*;

    #[test]
    fn plain_sequence() {
        assert_match("abc", "abc", true);
    }

    #[test]
    fn sequence_anywhere_in_line() {
        assert_match("abc", "xabcy", true);
    }

    #[test]
    fn sequence_broken_in_middle() {
        assert_match("abc", "axc", false);
    }

    #[test]
    fn longer_word() {
        assert_match("hello", "hello world", true);
    }

    #[test]
    fn truncated_line_no_match() {
        assert_match("hello", "hell", false);
    }
}

#[cfg(test)]
mod alternation_tests {
    use super::*;

    #[test]
    fn first_branch() {
        assert_match("cat|dog", "cat", true);
    }

    #[test]
    fn second_branch() {
        assert_match("cat|dog", "dog", true);
    }

    #[test]
    fn no_branch_matches() {
        assert_match("cat|dog", "bird", false);
    }

    #[test]
    fn branch_inside_longer_line() {
        assert_match("cat|dog", "I have a cat", true);
    }

    #[test]
    fn many_branches() {
        assert_match("a|b|c", "banana", true);
    }

    #[test]
    fn empty_branch_matches_anything() {
        assert_match("a|", "zzz", true);
    }
}

#[cfg(test)]
mod nested_pattern_tests {
    use super::*;

    #[test]
    fn alternation_with_quantifier() {
        assert_match("(cat|dog)+", "catdog", true);
        assert_match("(cat|dog)+", "dogcat", true);
    }

    #[test]
    fn dot_plus_between_literals() {
        assert_match("a.+b", "aXXXb", true);
    }

    #[test]
    fn anchored_alternation_with_tail() {
        assert_match("^(hello|hi).* world$", "hello cruel world", true);
        assert_match("^(hello|hi).* world$", "goodbye world", false);
    }

    #[test]
    fn nested_groups_repeated() {
        assert_match("(a(b|c))+", "abac", true);
    }

    #[test]
    fn nested_quantifiers() {
        assert_match("(a+b*)+", "aaabbbaab", true);
    }

    #[test]
    fn anchored_repeated_group() {
        assert_match("^((a|b)+c)*$", "acbcac", true);
    }

    #[test]
    fn anchored_group_exact() {
        assert_match("^(test|demo)$", "test", true);
        assert_match("^(test|demo)$", "testing", false);
    }

    #[test]
    fn star_of_starred_group() {
        assert_match("(a*)*", "aaa", true);
    }

    #[test]
    fn plus_of_optional_group() {
        assert_match("(a?)+", "aaa", true);
    }

    #[test]
    fn plus_of_optional_group_on_empty_line() {
        assert_match("(a?)+", "", true);
    }
}

#[cfg(test)]
mod search_scenarios {
    use super::*;

    #[test]
    fn three_digits_inside_text() {
        assert_match("\\d\\d\\d", "abc123xyz", true);
    }

    #[test]
    fn log_prefix() {
        assert_match("^log", "log line", true);
        assert_match("^log", "xlog", false);
    }

    #[test]
    fn cat_suffix() {
        assert_match("cat$", "the cat", true);
        assert_match("cat$", "cats", false);
    }

    #[test]
    fn repeated_a_then_b() {
        assert_match("a+b", "aaab", true);
        assert_match("a+b", "b", false);
    }

    #[test]
    fn pet_suffix_alternation() {
        assert_match("(cat|dog)s", "dogs", true);
        assert_match("(cat|dog)s", "cows", false);
    }

    #[test]
    fn digits_in_phone_number() {
        assert_match("\\d+", "123-456-7890", true);
        assert_match("\\d+", "abcdef", false);
    }

    #[test]
    fn email_like_shape() {
        assert_match(".+@.+", "user@domain.com", true);
    }

    #[test]
    fn url_like_shape() {
        assert_match("http.+", "https://example.com", true);
    }

    #[test]
    fn word_run() {
        assert_match("\\w+", "hello_world", true);
    }

    #[test]
    fn stacked_quantifiers() {
        assert_match("a+b+c+", "aaabbbccc", true);
        assert_match("a*b*c*d*", "abcd", true);
    }
}
