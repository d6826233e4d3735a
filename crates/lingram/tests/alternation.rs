use lingram::LocaleContext;

fn gendered_ctx() -> LocaleContext {
    let mut ctx = LocaleContext::new("fr");
    ctx.set_property_index(
        "g",
        [
            ("m".to_string(), 0),
            ("f".to_string(), 1),
            ("default".to_string(), 0),
        ],
    );
    ctx
}

#[test]
fn count_indexes_with_offset() {
    let ctx = LocaleContext::new("en");
    assert_eq!(ctx.resolve_str("[n:0/n?horse|horses]"), "horse");
    assert_eq!(ctx.resolve_str("[n:1/n?horse|horses]"), "horse");
    assert_eq!(ctx.resolve_str("[n:2/n?horse|horses]"), "horses");
    assert_eq!(ctx.resolve_str("[n:3/n?horse|horses]"), "horses");
}

#[test]
fn offset_free_count_distinguishes_zero() {
    let ctx = LocaleContext::new("en");
    assert_eq!(ctx.resolve_str("[n:0/n0?no|an|many]"), "no");
    assert_eq!(ctx.resolve_str("[n:1/n0?no|an|many]"), "an");
    assert_eq!(ctx.resolve_str("[n:2/n0?no|an|many]"), "many");
    assert_eq!(ctx.resolve_str("[n:9/n0?no|an|many]"), "many");
}

#[test]
fn fractional_counts_round() {
    let ctx = LocaleContext::new("en");
    assert_eq!(ctx.resolve_str("[n:1.4/n?one|many]"), "one");
    assert_eq!(ctx.resolve_str("[n:1.6/n?one|many]"), "many");
}

#[test]
fn infinite_count_selects_the_last_branch() {
    let ctx = LocaleContext::new("en");
    assert_eq!(ctx.resolve_str("[n:*/n?one|many]"), "many");
}

#[test]
fn gender_indexes_through_the_property_map() {
    let ctx = gendered_ctx();
    assert_eq!(ctx.resolve_str("[g:m/g?le|la]"), "le");
    assert_eq!(ctx.resolve_str("[g:f/g?le|la]"), "la");
    // Unmapped value falls back to the field's default slot.
    assert_eq!(ctx.resolve_str("[g:n/g?le|la]"), "le");
}

#[test]
fn missing_gender_uses_the_default_slot() {
    let ctx = gendered_ctx();
    assert_eq!(ctx.resolve_str("[g?le|la]"), "le");
}

#[test]
fn boolean_alternation() {
    let ctx = LocaleContext::new("en");
    assert_eq!(ctx.resolve_str("[b:1/?yes|no]"), "yes");
    assert_eq!(ctx.resolve_str("[b:0/?yes|no]"), "no");
}

#[test]
fn missing_boolean_derives_from_count_or_text() {
    let ctx = LocaleContext::new("en");
    assert_eq!(ctx.resolve_str("[n:3/?yes|no]"), "yes");
    assert_eq!(ctx.resolve_str("[n:0/?yes|no]"), "no");
    assert_eq!(ctx.resolve_str("[s:word/?yes|no]"), "yes");
    assert_eq!(ctx.resolve_str("[?yes|no]"), "no");
}

#[test]
fn nested_tree_descends_one_field_per_level() {
    let ctx = gendered_ctx();
    assert_eq!(
        ctx.resolve_str("[g:f/n:2/gn?(chat|chats)|(chatte|chattes)]"),
        "chattes"
    );
    assert_eq!(
        ctx.resolve_str("[g:m/n:1/gn?(chat|chats)|(chatte|chattes)]"),
        "chat"
    );
}

#[test]
fn exhausted_ord_takes_the_first_leaf() {
    let ctx = LocaleContext::new("en");
    assert_eq!(ctx.resolve_str("[n:1/n?(a|b)|c]"), "a");
}

#[test]
fn missing_count_defaults_to_plural() {
    let ctx = LocaleContext::new("en");
    assert_eq!(ctx.resolve_str("[n?|s]"), "s");
}

#[test]
fn explicit_ord_and_alt_operators() {
    let ctx = gendered_ctx();
    assert_eq!(ctx.resolve_str("[g:f/ord:g/alt:le|la]"), "la");
}
