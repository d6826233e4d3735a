use lingram::{ArrayValue, Atom, FnOutcome, LocaleContext};

#[test]
fn dictionary_supplies_the_translated_form() {
    let mut ctx = LocaleContext::new("fr");
    ctx.define("horse", "[s:cheval/g:m]");
    assert_eq!(ctx.resolve_str("horse"), "cheval");
}

#[test]
fn prefix_style_entries_translate_through_their_key() {
    let mut ctx = LocaleContext::new("fr");
    ctx.define("horse", "cheval[g:m]");
    assert_eq!(ctx.resolve_str("horse"), "cheval");
}

#[test]
fn local_fields_win_over_the_dictionary() {
    let mut ctx = LocaleContext::new("en");
    ctx.define("horse", "[s:horse/n:5]");
    assert_eq!(ctx.resolve_str("horse[n:1/n?one|many]"), "one");
    // Without a local count the dictionary's applies.
    assert_eq!(ctx.resolve_str("horse[n?one|many]"), "many");
}

#[test]
fn dictionary_entries_are_never_mutated() {
    let mut ctx = LocaleContext::new("en");
    ctx.define("w", "[s:word]");
    let before = ctx.atom("w").cloned();
    assert_eq!(ctx.resolve_str("w[cap]"), "Word");
    assert_eq!(ctx.resolve_str("w[cap]"), "Word");
    assert_eq!(ctx.atom("w").cloned(), before);
}

#[test]
fn matching_source_locale_skips_the_lookup() {
    let mut ctx = LocaleContext::new("en");
    ctx.define("horse", "[s:cheval]");
    assert_eq!(ctx.resolve_str("horse[l:en]"), "horse");
    assert_eq!(ctx.resolve_str("horse[l:fr]"), "cheval");
    assert_eq!(ctx.resolve_str("horse"), "cheval");
}

#[test]
fn raw_flag_skips_the_lookup() {
    let mut ctx = LocaleContext::new("en");
    ctx.define("horse", "[s:cheval]");
    assert_eq!(ctx.resolve_str("horse[x]"), "horse");
}

fn mark_one(mut atom: Atom, _args: &[ArrayValue], _prev: Option<&Atom>, _ctx: &LocaleContext) -> FnOutcome {
    atom.after.push('1');
    FnOutcome::Continue(atom)
}

fn mark_two(mut atom: Atom, _args: &[ArrayValue], _prev: Option<&Atom>, _ctx: &LocaleContext) -> FnOutcome {
    atom.after.push('2');
    FnOutcome::Continue(atom)
}

#[test]
fn dictionary_functions_run_before_local_ones() {
    let mut ctx = LocaleContext::new("en");
    ctx.register_function("one", lingram::FnEntry::Call(mark_one));
    ctx.register_function("two", lingram::FnEntry::Call(mark_two));
    ctx.define("w", "[s:a/one]");
    assert_eq!(ctx.resolve_str("w[two]"), "a12");
}

#[test]
fn unknown_key_resolves_to_itself() {
    let ctx = LocaleContext::new("en");
    assert_eq!(ctx.resolve_str("gryphon"), "gryphon");
}
