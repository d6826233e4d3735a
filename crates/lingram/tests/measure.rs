use lingram::LocaleContext;

#[test]
fn greedy_decomposition() {
    let ctx = LocaleContext::new("en");
    assert_eq!(
        ctx.resolve_str("[n:3661/um:N+/uv:3600|60|1/uf:h|m|s/uenum:|$| $| $]"),
        "1h 1m 1s"
    );
}

#[test]
fn greedy_skips_units_that_do_not_fit() {
    let ctx = LocaleContext::new("en");
    assert_eq!(
        ctx.resolve_str("[n:7200/um:N+/uv:3600|60|1/uf:h|m|s/uenum:|$| $| $]"),
        "2h"
    );
    assert_eq!(
        ctx.resolve_str("[n:61/um:N+/uv:3600|60|1/uf:h|m|s/uenum:|$| $| $]"),
        "1m 1s"
    );
}

#[test]
fn nearest_picks_the_closest_threshold() {
    let ctx = LocaleContext::new("en");
    assert_eq!(ctx.resolve_str("[n:90/uv:3600|60|1/uf:h|m|s]"), "1.5m");
    assert_eq!(ctx.resolve_str("[n:45/uv:3600|60|1/uf:h|m|s]"), "0.75m");
}

#[test]
fn nearest_above_penalizes_rounding_below_a_unit() {
    let ctx = LocaleContext::new("en");
    // Plain nearest would round 45s up to 0.75m.
    assert_eq!(ctx.resolve_str("[n:45/um:R1+/uv:3600|60|1/uf:h|m|s]"), "45s");
    assert_eq!(ctx.resolve_str("[n:90/um:R1+/uv:3600|60|1/uf:h|m|s]"), "1.5m");
}

#[test]
fn unit_forms_pluralize_with_their_quantity() {
    let ctx = LocaleContext::new("en");
    assert_eq!(
        ctx.resolve_str("[n:7200/um:N+/uv:3600/uf:[n? hour| hours]]"),
        "2 hours"
    );
    assert_eq!(
        ctx.resolve_str("[n:3600/um:N+/uv:3600/uf:[n? hour| hours]]"),
        "1 hour"
    );
}

#[test]
fn empty_unit_forms_yield_the_empty_string() {
    let ctx = LocaleContext::new("en");
    assert_eq!(ctx.resolve_str("[n:5/uv:60]"), "");
}

#[test]
fn infinite_count_declines_measurement() {
    let ctx = LocaleContext::new("en");
    assert_eq!(ctx.resolve_str("[n:*/uv:60/uf:m]"), "\u{221e}");
}

#[test]
fn unit_connectors_can_escape_dollars() {
    let ctx = LocaleContext::new("en");
    assert_eq!(
        ctx.resolve_str(r"[n:61/um:N+/uv:60|1/uf:m|s/uenum:|$| \$ $]"),
        "1m $ 1s"
    );
}

#[test]
fn zero_thresholds_are_ignored() {
    let ctx = LocaleContext::new("en");
    assert_eq!(
        ctx.resolve_str("[n:120/um:N+/uv:0|60/uf:x|m/uenum:|$| $| $]"),
        "2m"
    );
}
