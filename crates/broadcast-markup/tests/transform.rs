use broadcast_markup::{Ruleset, Transformer};
use proptest::prelude::*;

fn engine() -> Transformer {
    Transformer::new(Ruleset::builtin())
}

#[test]
fn newsletter_paragraph_end_to_end() {
    let input = "Read the **release notes** at [the site](https://example.com), \
                 then run `cargo update` _today_.";
    let output = engine().transform(input);

    assert_eq!(
        output,
        "Read the <b>release notes</b> at \
         <a href=\"https://example.com\" target=\"_blank\">the site</a>, \
         then run <code>cargo update</code> <i>today</i>."
    );
}

#[test]
fn repeated_spans_stay_consistent_across_rules() {
    let output = engine().transform("`x` or `x`, **y** or **y**");
    assert_eq!(
        output,
        "<code>x</code> or <code>x</code>, <b>y</b> or <b>y</b>"
    );
}

proptest! {
    // Alphabet deliberately excludes every rule delimiter.
    #[test]
    fn delimiter_free_input_is_identity(s in "[a-zA-Z0-9 .,;:!?#&<>=/-]{0,64}") {
        prop_assert_eq!(engine().transform(&s), s);
    }

    #[test]
    fn bold_span_wraps_exactly(s in "[a-zA-Z0-9 ]{1,32}") {
        let input = format!("**{s}**");
        prop_assert_eq!(engine().transform(&input), format!("<b>{s}</b>"));
    }

    #[test]
    fn code_span_wraps_exactly(s in "[a-zA-Z0-9 ]{1,32}") {
        let input = format!("`{s}`");
        prop_assert_eq!(engine().transform(&input), format!("<code>{s}</code>"));
    }

    #[test]
    fn transform_never_panics(s in "\\PC{0,128}") {
        let _ = engine().transform(&s);
    }
}
