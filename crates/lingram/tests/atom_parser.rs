use lingram::{
    ArrayValue, Count, Gender, OrdKey, Person, UnitMode, parse_atom, parse_atom_bytes,
};

#[test]
fn prefix_becomes_key() {
    let atom = parse_atom("cheval[g:m/n:2]");
    assert_eq!(atom.key.as_deref(), Some("cheval"));
    assert_eq!(atom.gender, Some(Gender::Masculine));
    assert_eq!(atom.count, Some(Count::Int(2)));
}

#[test]
fn bare_prefix_is_a_plain_key() {
    let atom = parse_atom("cheval");
    assert_eq!(atom.key.as_deref(), Some("cheval"));
    assert!(atom.alt.is_none());
}

#[test]
fn escaped_bracket_stays_in_key() {
    let atom = parse_atom(r"a\[b");
    assert_eq!(atom.key.as_deref(), Some("a[b"));
}

#[test]
fn literal_operator() {
    let atom = parse_atom("[s:hello world]");
    assert_eq!(atom.literal.as_deref(), Some("hello world"));
}

#[test]
fn count_alias_takes_remainder_as_alternation() {
    let atom = parse_atom("pomme[n?|s]");
    assert_eq!(atom.ord, vec![OrdKey::Count]);
    assert_eq!(
        atom.alt,
        Some(vec![
            ArrayValue::Str(String::new()),
            ArrayValue::Str("s".to_string()),
        ])
    );
}

#[test]
fn compound_alias_orders_fields() {
    let atom = parse_atom("[gn?(a|b)|(c|d)]");
    assert_eq!(
        atom.ord,
        vec![OrdKey::Prop("g".to_string()), OrdKey::Count]
    );
    let alt = atom.alt.unwrap();
    assert_eq!(alt.len(), 2);
    assert!(matches!(alt[0], ArrayValue::List(_)));
}

#[test]
fn bare_question_mark_selects_boolean() {
    let atom = parse_atom("[?yes|no]");
    assert_eq!(atom.ord, vec![OrdKey::Bool]);
}

#[test]
fn offset_free_count_alias() {
    let atom = parse_atom("[n0?no|an|many]");
    assert_eq!(atom.ord, vec![OrdKey::CountZero]);
}

#[test]
fn unknown_alias_becomes_function_call() {
    let atom = parse_atom("[q?x|y]");
    assert!(atom.alt.is_none());
    assert_eq!(atom.fns.len(), 1);
    assert_eq!(atom.fns[0].name, "q?");
    assert_eq!(atom.fns[0].args.len(), 2);
}

#[test]
fn unknown_key_becomes_function_call() {
    let atom = parse_atom("[make:a|b]");
    assert_eq!(atom.fns.len(), 1);
    assert_eq!(atom.fns[0].name, "make");
    assert_eq!(atom.fns[0].args.len(), 2);
}

#[test]
fn flags() {
    assert!(parse_atom("[+]").carry);
    assert!(parse_atom("[x]").raw);
    let both = parse_atom("word[+/x]");
    assert!(both.carry && both.raw);
}

#[test]
fn fallback_operator_accepts_long_names() {
    assert_eq!(parse_atom("[d:none]").fallback.as_deref(), Some("none"));
    assert_eq!(parse_atom("[def:none]").fallback.as_deref(), Some("none"));
}

#[test]
fn operator_values_may_escape_terminators() {
    let atom = parse_atom(r"[d:what\?]");
    assert_eq!(atom.fallback.as_deref(), Some("what?"));
}

#[test]
fn person_defaults_to_third() {
    assert_eq!(parse_atom("[p]").person, Some(Person::Third));
    assert_eq!(parse_atom("[p:2]").person, Some(Person::Second));
}

#[test]
fn filter_directives_sort_by_stage() {
    let atom = parse_atom("[s:x/cap/trim]");
    assert_eq!(atom.post_filters.len(), 1);
    assert_eq!(atom.post_filters[0].id, "cap");
    assert_eq!(atom.pre_filters.len(), 1);
    assert_eq!(atom.pre_filters[0].id, "trim");
}

#[test]
fn unit_operators() {
    let atom = parse_atom("[um:N+/uv:3600|60|x|1/uf:h|m|s]");
    assert_eq!(atom.unit_mode, UnitMode::Greedy);
    // Non-numeric thresholds are dropped, not zeroed.
    assert_eq!(atom.unit_values, vec![3600.0, 60.0, 1.0]);
    assert_eq!(atom.unit_forms.len(), 3);
    assert_eq!(atom.unit_forms[0].key.as_deref(), Some("h"));
}

#[test]
fn numeric_list_entries_sum_into_the_count() {
    let atom = parse_atom("[list:3|4]");
    assert_eq!(atom.list.len(), 2);
    assert_eq!(atom.list[0].count, Some(Count::Int(3)));
    assert_eq!(atom.effective_count(), Some(Count::Int(7)));
}

#[test]
fn infinite_count_sentinel() {
    assert_eq!(parse_atom("[n:*]").count, Some(Count::Infinite));
    assert_eq!(parse_atom("[n:inf]").count, Some(Count::Infinite));
}

#[test]
fn malformed_count_is_absent_not_zero() {
    assert_eq!(parse_atom("[n:lots]").count, None);
}

#[test]
fn count_parse_variants() {
    assert_eq!(Count::parse("2.5"), Some(Count::Float(2.5)));
    assert_eq!(Count::parse(" 7 "), Some(Count::Int(7)));
    assert_eq!(Count::parse("NaN"), None);
    assert_eq!(Count::parse(""), None);
}

#[test]
fn bytes_entry_point_rejects_invalid_utf8() {
    assert!(parse_atom_bytes(b"pomme[n?|s]").is_ok());
    assert!(parse_atom_bytes(&[0xff, 0xfe]).is_err());
}

#[test]
fn unclosed_body_yields_bare_key() {
    let atom = parse_atom("pomme[n?|s");
    assert_eq!(atom.key.as_deref(), Some("pomme"));
    assert!(atom.alt.is_none());
}
