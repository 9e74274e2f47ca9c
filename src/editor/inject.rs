use crate::affix::Affix;

use super::selection::{InjectionResult, SelectionState};

/// What to do when the selection contains only blank lines.
#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlankSelection {
    /// Replace the selection with nothing.
    #[default]
    Discard,
    /// Insert the placeholder stub as if nothing were selected.
    Placeholder,
}

/// Wrap the selection in `affix`, or insert its placeholder at the caret.
///
/// A blank-only selection is replaced with an empty string; see
/// [`inject_with`] to choose otherwise.
pub fn inject(state: &SelectionState, affix: &Affix) -> InjectionResult {
    inject_with(state, affix, BlankSelection::Discard)
}

/// [`inject`] with an explicit policy for blank-only selections.
///
/// With a caret, the placeholder stub is inserted and the placeholder itself
/// is selected. With a selection, every non-empty line is wrapped on its own
/// and the caret lands after the injected block.
pub fn inject_with(
    state: &SelectionState,
    affix: &Affix,
    blank: BlankSelection,
) -> InjectionResult {
    let selected = state.selected_text();
    let line_count = selected.split('\n').count();

    let wrapped = if state.is_collapsed() {
        None
    } else {
        let lines: Vec<String> = selected
            .split('\n')
            .filter(|line| !line.is_empty())
            .map(|line| affix.with_selection(line))
            .collect();
        if lines.is_empty() && blank == BlankSelection::Placeholder {
            None
        } else {
            Some(lines.join("\n"))
        }
    };

    let placeholder_inserted = wrapped.is_none();
    let inserted = wrapped.unwrap_or_else(|| affix.as_placeholder());

    let mut new_text = String::with_capacity(state.text().len() + inserted.len());
    new_text.push_str(state.head());
    new_text.push_str(&inserted);
    new_text.push_str(state.tail());

    let (new_selection_start, new_selection_end) = if placeholder_inserted {
        let start = state.start() + affix.prefix_len();
        let end = (state.start() + inserted.chars().count()).saturating_sub(affix.suffix_len());
        (start, end.max(start))
    } else {
        // An n-line selection shifts by n - 1 prefix/suffix pairs, at least one.
        let repeats = line_count.saturating_sub(1).max(1);
        let shift = repeats * (affix.prefix_len() + affix.suffix_len());
        let caret = (state.end() + shift).min(new_text.chars().count());
        (caret, caret)
    };

    tracing::debug!(
        start = state.start(),
        end = state.end(),
        lines = line_count,
        placeholder = placeholder_inserted,
        new_selection_start,
        new_selection_end,
        "injected affix"
    );

    InjectionResult {
        new_text,
        new_selection_start,
        new_selection_end,
        inserted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::affix::{AffixCatalog, Construct, TABLE_TEMPLATE};

    fn affix(construct: Construct) -> Affix {
        AffixCatalog::builtin().affix(construct).unwrap().clone()
    }

    #[test]
    fn test_bold_wraps_single_line_selection() {
        let state = SelectionState::new("Hello world", 6, 11);
        let result = inject(&state, &affix(Construct::Bold));
        assert_eq!(result.new_text, "Hello *world*");
        assert_eq!(result.new_selection_start, 13);
        assert_eq!(result.new_selection_end, 13);
        assert_eq!(result.inserted, "*world*");
    }

    #[test]
    fn test_caret_inserts_placeholder_and_selects_it() {
        let state = SelectionState::caret("Say  now", 4);
        let result = inject(&state, &affix(Construct::Bold));
        assert_eq!(result.new_text, "Say *Bold text* now");
        assert_eq!(result.new_selection_start, 5);
        assert_eq!(result.new_selection_end, 14);
        assert_eq!(&result.new_text[5..14], "Bold text");
    }

    #[test]
    fn test_link_with_empty_placeholder_selects_empty_span() {
        let state = SelectionState::caret("Hello", 5);
        let result = inject(&state, &affix(Construct::Link));
        assert_eq!(result.new_text, "Hello\"\":http://");
        assert_eq!(result.new_selection_start, 6);
        assert_eq!(result.new_selection_end, 6);
    }

    #[test]
    fn test_list_ul_wraps_each_line() {
        let state = SelectionState::new("a\nb\nc", 0, 5);
        let result = inject(&state, &affix(Construct::ListUl));
        assert_eq!(result.new_text, "* a\n* b\n* c");
        // k = lines - 1 = 2
        assert_eq!(result.new_selection_start, 5 + 2 * 2);
        assert!(result.is_collapsed());
    }

    #[test]
    fn test_multi_line_bold_wraps_each_line_independently() {
        let state = SelectionState::new("x\none\ntwo\ny", 2, 9);
        let result = inject(&state, &affix(Construct::Bold));
        assert_eq!(result.new_text, "x\n*one*\n*two*\ny");
        // two lines: k = max(1, 1) = 1
        assert_eq!(result.new_selection_start, 9 + 2);
    }

    #[test]
    fn test_blank_lines_inside_selection_are_dropped() {
        let state = SelectionState::new("a\n\nb", 0, 4);
        let result = inject(&state, &affix(Construct::Quote));
        assert_eq!(result.new_text, "bq. a\nbq. b");
    }

    #[test]
    fn test_trailing_newline_is_consumed() {
        let state = SelectionState::new("item\nrest", 0, 5);
        let result = inject(&state, &affix(Construct::ListOl));
        assert_eq!(result.new_text, "# itemrest");
    }

    #[test]
    fn test_blank_only_selection_discards_by_default() {
        let state = SelectionState::new("a\n\n\nb", 1, 4);
        let result = inject(&state, &affix(Construct::Bold));
        assert_eq!(result.new_text, "ab");
        assert_eq!(result.inserted, "");
        assert_eq!((result.new_selection_start, result.new_selection_end), (2, 2));
    }

    #[test]
    fn test_blank_only_selection_placeholder_policy() {
        let state = SelectionState::new("a\n\nb", 1, 3);
        let result = inject_with(&state, &affix(Construct::Bold), BlankSelection::Placeholder);
        assert_eq!(result.new_text, "a*Bold text*b");
        assert_eq!(result.new_selection_start, 2);
        assert_eq!(result.new_selection_end, 11);
    }

    #[test]
    fn test_table_inserts_template_at_caret() {
        let state = SelectionState::caret("", 0);
        let result = inject(&state, &affix(Construct::Table));
        assert_eq!(result.new_text, TABLE_TEMPLATE);
        assert_eq!(result.new_selection_start, 0);
        assert_eq!(result.new_selection_end, TABLE_TEMPLATE.chars().count());
    }

    #[test]
    fn test_multibyte_text_uses_char_offsets() {
        let state = SelectionState::new("größe ok", 0, 5);
        let result = inject(&state, &affix(Construct::Italic));
        assert_eq!(result.new_text, "_größe_ ok");
        assert_eq!(result.new_selection_start, 7);
    }

    #[test]
    fn test_same_inputs_same_output() {
        let state = SelectionState::new("one two", 4, 7);
        let header = affix(Construct::Header);
        assert_eq!(inject(&state, &header), inject(&state, &header));
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn any_affix() -> impl Strategy<Value = Affix> {
            ("[*_#@\"$ ]{0,4}", "[A-Za-z ]{0,12}", "[*_#@\":/ ]{0,4}")
                .prop_map(|(p, ph, s)| Affix::new(p, ph, s))
        }

        proptest! {
            #[test]
            fn caret_inserts_placeholder_and_selects_it(
                text in "[a-z \\n]{0,40}",
                offset in 0..41usize,
                affix in any_affix(),
            ) {
                let state = SelectionState::caret(text.clone(), offset);
                let at = state.start();
                let result = inject(&state, &affix);

                let expected =
                    format!("{}{}{}", state.head(), affix.as_placeholder(), state.tail());
                prop_assert_eq!(&result.new_text, &expected);
                prop_assert_eq!(result.new_selection_start, at + affix.prefix_len());
                prop_assert_eq!(
                    result.new_selection_end,
                    at + affix.prefix_len() + affix.placeholder.chars().count()
                );
            }

            #[test]
            fn single_line_selection_wraps_and_places_caret(
                before in "[a-z ]{0,10}",
                selected in "[a-z]{1,10}",
                after in "[a-z ]{0,10}",
                affix in any_affix(),
            ) {
                let text = format!("{before}{selected}{after}");
                let start = before.chars().count();
                let end = start + selected.chars().count();
                let result = inject(&SelectionState::new(text, start, end), &affix);

                let expected = format!("{before}{}{after}", affix.with_selection(&selected));
                prop_assert_eq!(&result.new_text, &expected);
                prop_assert_eq!(
                    result.new_selection_start,
                    end + affix.prefix_len() + affix.suffix_len()
                );
                prop_assert!(result.is_collapsed());
            }

            #[test]
            fn stripping_affix_recovers_selection(
                before in "[a-z ]{0,10}",
                selected in "[a-z]{1,10}",
                affix in any_affix(),
            ) {
                let text = format!("{before}{selected}");
                let start = before.chars().count();
                let end = start + selected.chars().count();
                let result = inject(&SelectionState::new(text, start, end), &affix);

                let span = SelectionState::new(
                    result.new_text.clone(),
                    start,
                    start + result.inserted.chars().count(),
                );
                let recovered = span
                    .selected_text()
                    .strip_prefix(affix.prefix.as_str())
                    .and_then(|s| s.strip_suffix(affix.suffix.as_str()));
                prop_assert_eq!(recovered, Some(selected.as_str()));
            }

            #[test]
            fn selection_stays_within_new_text(
                text in "[a-z\\n]{0,30}",
                start in 0..31usize,
                len in 0..31usize,
                affix in any_affix(),
            ) {
                let state = SelectionState::new(text, start, start + len);
                let result = inject(&state, &affix);
                let new_len = result.new_text.chars().count();
                prop_assert!(result.new_selection_start <= result.new_selection_end);
                prop_assert!(result.new_selection_end <= new_len);
            }
        }
    }
}
