use proptest::prelude::*;
use scopetint_resolve::{Color, Selector, Theme};

fn monokai_ish() -> Theme {
    Theme::from_yaml(
        r##"
        name: Monokai-ish
        settings:
          - settings:
              foreground: "#F8F8F2"
              background: "#272822"
          - scope: keyword
            settings: {foreground: "#F92672"}
          - scope: keyword.control
            settings: {fontStyle: bold}
          - scope: string, constant.numeric
            settings: {foreground: "#E6DB74"}
          - scope: comment
            settings: {foreground: "#75715E", fontStyle: italic}
        "##,
    )
    .unwrap()
}

#[test]
fn resolves_layered_style_through_the_whole_pipeline() {
    let theme = monokai_ish();
    let style = theme.style_for_scope("keyword.control.ruby");

    assert!(style.bold());
    assert_eq!(style.foreground, Some(Color::new(0xF9, 0x26, 0x72)));
    assert_eq!(style.background, Some(Color::new(0x27, 0x28, 0x22)));
}

#[test]
fn alternative_list_picks_the_matching_branch() {
    let theme = monokai_ish();
    let matched = theme.matching_rules("constant.numeric.integer");

    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].0, 2);
    assert_eq!(matched[0].1.selector.raw(), "string, constant.numeric");
}

#[test]
fn unmatched_scope_falls_back_to_global() {
    let theme = monokai_ish();
    let style = theme.style_for_scope("entity.name.function");

    assert_eq!(style, *theme.global_attributes());
    assert!(!style.bold());
}

#[test]
fn terminal_adapter_carries_resolved_attributes() {
    let theme = monokai_ish();
    let rendered = theme
        .style_for_scope("comment.line.number-sign")
        .to_console_style()
        .force_styling(true)
        .apply_to("# note")
        .to_string();

    assert!(rendered.contains("# note"));
    assert!(rendered.contains("\x1b["));
}

proptest! {
    // An exact-equality match returns the matched alternative's own atom
    // count, no matter how heavy the other alternatives are.
    #[test]
    fn exact_match_specificity_is_atom_count(scope in "[a-z]{1,8}(\\.[a-z]{1,8}){0,3}") {
        let raw = format!("zzzzzzzzzz.yyyyyyyyyy, {}", scope);
        let selector = Selector::parse(&raw).unwrap();
        let atoms = scope.split('.').count() as u32;
        prop_assert_eq!(selector.specificity_if_matches(&scope), Some(atoms));
    }

    // Resolution is a pure function of (theme, scope).
    #[test]
    fn resolution_is_idempotent(scope in "[a-z]{1,8}(\\.[a-z]{1,8}){0,3}") {
        let theme = monokai_ish();
        prop_assert_eq!(theme.style_for_scope(&scope), theme.style_for_scope(&scope));
    }

    // When nothing matches, the global attributes come back exactly.
    #[test]
    fn no_match_yields_global(scope in "[a-z]{1,8}(\\.[a-z]{1,8}){0,3}") {
        let theme = monokai_ish();
        if theme.matching_rules(&scope).is_empty() {
            prop_assert_eq!(theme.style_for_scope(&scope), *theme.global_attributes());
        }
    }

    // The cascade is exactly a reverse fold of the ordered match list over
    // the global base.
    #[test]
    fn cascade_agrees_with_matching_rules(scope in "[a-z]{1,8}(\\.[a-z]{1,8}){0,3}") {
        let theme = monokai_ish();
        let mut expected = *theme.global_attributes();
        for (_, rule) in theme.matching_rules(&scope).iter().rev() {
            expected.apply(&rule.attributes);
        }
        prop_assert_eq!(theme.style_for_scope(&scope), expected);
    }
}

#[test]
fn selector_noise_alternative_never_matches_generated_scopes() {
    // Guard for the proptest noise branch above: segments are capped at eight
    // characters, so a ten-character run cannot be contained.
    let selector = Selector::parse("zzzzzzzzzz.yyyyyyyyyy").unwrap();
    assert!(!selector.matches("zzzzzzzz.zzzzzzzz"));
}

#[test]
fn scopes_hitting_the_same_layers_resolve_equal() {
    let theme = monokai_ish();
    let a = theme.style_for_scope("string.quoted");
    let b = theme.style_for_scope("string.unquoted");
    assert_eq!(a, b);
}
