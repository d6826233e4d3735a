use lingram::{ArrayValue, Atom, FnEntry, FnOutcome, LocaleContext, Resolved, parse_atom, resolve};

fn exclaim(mut atom: Atom, _args: &[ArrayValue], _prev: Option<&Atom>, _ctx: &LocaleContext) -> FnOutcome {
    atom.after.push('!');
    FnOutcome::Continue(atom)
}

fn shout(_atom: Atom, _args: &[ArrayValue], _prev: Option<&Atom>, _ctx: &LocaleContext) -> FnOutcome {
    FnOutcome::Final("hey".to_string())
}

fn swap(_atom: Atom, _args: &[ArrayValue], _prev: Option<&Atom>, _ctx: &LocaleContext) -> FnOutcome {
    FnOutcome::Replace(Atom::keyed("horse"))
}

fn pick(_atom: Atom, args: &[ArrayValue], _prev: Option<&Atom>, _ctx: &LocaleContext) -> FnOutcome {
    let first = args.first().and_then(ArrayValue::as_str).unwrap_or("");
    FnOutcome::Final(first.to_string())
}

fn echo_preceding(mut atom: Atom, _args: &[ArrayValue], prev: Option<&Atom>, _ctx: &LocaleContext) -> FnOutcome {
    if let Some(prev) = prev {
        atom.literal = prev.literal.clone();
    }
    FnOutcome::Continue(atom)
}

#[test]
fn continue_keeps_resolving_the_mutated_atom() {
    let mut ctx = LocaleContext::new("en");
    ctx.register_function("excl", FnEntry::Call(exclaim));
    assert_eq!(ctx.resolve_str("[s:hi/excl]"), "hi!");
}

#[test]
fn final_short_circuits_but_still_filters() {
    let mut ctx = LocaleContext::new("en");
    ctx.register_function("shout", FnEntry::Call(shout));
    assert_eq!(ctx.resolve_str("[s:x/shout]"), "hey");
    assert_eq!(ctx.resolve_str("[s:x/shout/cap]"), "Hey");
}

#[test]
fn replace_re_localizes_the_replacement() {
    let mut ctx = LocaleContext::new("fr");
    ctx.define("horse", "[s:cheval]");
    ctx.register_function("swap", FnEntry::Call(swap));
    assert_eq!(ctx.resolve_str("[s:anything/swap]"), "cheval");
}

#[test]
fn merge_entries_overlay_a_partial_atom() {
    let mut ctx = LocaleContext::new("fr");
    ctx.set_property_index(
        "g",
        [("m".to_string(), 0), ("f".to_string(), 1)],
    );
    ctx.register_function("fem", FnEntry::Merge(parse_atom("[g:f]")));
    assert_eq!(ctx.resolve_str("[g?le|la/fem]"), "la");
}

#[test]
fn unknown_functions_are_ignored() {
    let ctx = LocaleContext::new("en");
    assert_eq!(ctx.resolve_str("[s:ok/nosuch]"), "ok");
}

#[test]
fn arguments_arrive_array_parsed() {
    let mut ctx = LocaleContext::new("en");
    ctx.register_function("pick", FnEntry::Call(pick));
    assert_eq!(ctx.resolve_str("[pick:first|second]"), "first");
}

#[test]
fn functions_see_the_preceding_atom() {
    let mut ctx = LocaleContext::new("en");
    ctx.register_function("copy", FnEntry::Call(echo_preceding));
    let atom = parse_atom("[copy]");
    let prev = parse_atom("[s:neighbor]");
    let out = resolve(&atom, &ctx, Some(&prev));
    assert!(matches!(out, Resolved::Text(ref t) if t == "neighbor"));
}

#[test]
fn carry_flag_defers_resolution() {
    let ctx = LocaleContext::new("en");
    let out = resolve(&parse_atom("[s:beau/+]"), &ctx, None);
    assert!(matches!(out, Resolved::Deferred(_)));
    // The string entry point renders a deferred atom as empty.
    assert_eq!(ctx.resolve_str("[s:beau/+]"), "");
}
