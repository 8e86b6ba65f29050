use core::fmt;
use std::fmt::Write as _;

use error_loom::format::{render_error, FormatFlags, FormatState, GenericState, Printer, Verb};
use error_loom::prelude::*;

/// Fallback-only error: implements nothing beyond the base capability.
#[derive(Debug)]
struct Plain(&'static str);

impl fmt::Display for Plain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl core::error::Error for Plain {}
impl ChainError for Plain {}

/// Fallback-only error that also exposes a `source()` relation.
#[derive(Debug)]
struct Outer {
    source: Plain,
}

impl fmt::Display for Outer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("outer failed")
    }
}

impl core::error::Error for Outer {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&self.source)
    }
}

impl ChainError for Outer {}

/// Error speaking both the raw and the chain protocol.
#[derive(Debug)]
struct RawCapable;

impl fmt::Display for RawCapable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("raw capable")
    }
}

impl core::error::Error for RawCapable {}

impl ChainError for RawCapable {
    fn as_raw(&self) -> Option<&dyn RawFormat> {
        Some(self)
    }

    fn as_chain(&self) -> Option<&dyn ChainFormat> {
        Some(self)
    }
}

impl RawFormat for RawCapable {
    fn raw_form(&self) -> String {
        "RawCapable { code: 7 }".to_string()
    }
}

impl ChainFormat for RawCapable {
    fn format<'a>(&'a self, p: &mut Printer<'_>) -> Option<&'a dyn ChainError> {
        p.print("chain path taken");
        None
    }
}

/// Error implementing both chain protocols; the current one must win.
#[derive(Debug)]
struct BothProtocols;

impl fmt::Display for BothProtocols {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("both")
    }
}

impl core::error::Error for BothProtocols {}

impl ChainError for BothProtocols {
    fn as_chain(&self) -> Option<&dyn ChainFormat> {
        Some(self)
    }

    fn as_legacy_chain(&self) -> Option<&dyn LegacyChainFormat> {
        Some(self)
    }
}

impl ChainFormat for BothProtocols {
    fn format<'a>(&'a self, p: &mut Printer<'_>) -> Option<&'a dyn ChainError> {
        p.print("new protocol");
        None
    }
}

impl LegacyChainFormat for BothProtocols {
    fn format_error<'a>(&'a self, p: &mut Printer<'_>) -> Option<&'a dyn ChainError> {
        p.print("legacy protocol");
        None
    }
}

/// Error speaking only the compatibility protocol.
#[derive(Debug)]
struct LegacyOnly;

impl fmt::Display for LegacyOnly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("legacy")
    }
}

impl core::error::Error for LegacyOnly {}

impl ChainError for LegacyOnly {
    fn as_legacy_chain(&self) -> Option<&dyn LegacyChainFormat> {
        Some(self)
    }
}

impl LegacyChainFormat for LegacyOnly {
    fn format_error<'a>(&'a self, p: &mut Printer<'_>) -> Option<&'a dyn ChainError> {
        p.print("legacy level");
        None
    }
}

/// Chain-unaware delegate that owns the output once dispatched.
#[derive(Debug)]
struct GenericOwned;

impl fmt::Display for GenericOwned {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("generic owned")
    }
}

impl core::error::Error for GenericOwned {}

impl ChainError for GenericOwned {
    fn as_generic(&self) -> Option<&dyn GenericFormat> {
        Some(self)
    }
}

impl GenericFormat for GenericOwned {
    fn format(&self, state: &mut GenericState<'_>, verb: Verb) {
        // The renderer always discards the outer verb before delegating.
        assert_eq!(verb, Verb::Display);
        let _ = write!(state, "generic owns output");
    }
}

/// Error with an explicit detail section.
#[derive(Debug)]
struct WithDetail;

impl fmt::Display for WithDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("headline")
    }
}

impl core::error::Error for WithDetail {}

impl ChainError for WithDetail {
    fn as_chain(&self) -> Option<&dyn ChainFormat> {
        Some(self)
    }
}

impl ChainFormat for WithDetail {
    fn format<'a>(&'a self, p: &mut Printer<'_>) -> Option<&'a dyn ChainError> {
        p.print("headline");
        if p.detail() {
            p.print("expensive detail\nsecond line");
        } else {
            // Written regardless; the surface must discard it.
            p.print("should be discarded");
        }
        None
    }
}

#[test]
fn wrapped_default_rendering_joins_with_colon() {
    let err = errorf!("open %s: %v", "/tmp/f", errorf!("permission denied"));
    assert_eq!(format!("{err}"), "open /tmp/f: permission denied");
}

#[test]
fn detail_mode_separates_segments() {
    let inner = errorf!("permission denied");
    let err = errorf!("open %s: %v", "/tmp/f", inner);
    let text = format!("{err:+}");

    let segments: Vec<&str> = text.split("\n--- ").collect();
    assert_eq!(segments.len(), 2);
    assert!(segments[0].starts_with("open /tmp/f:"));
    assert!(segments[1].starts_with("permission denied:"));
    // Each segment carries its own capture site.
    assert_eq!(text.matches(file!()).count(), 2);
    // No dangling detail indent at the segment boundary.
    assert!(!text.contains("\n    \n--- "));
}

#[test]
fn raw_verb_bypasses_chain_walk() {
    let mut state = FormatState::with_flags(FormatFlags {
        sharp: true,
        ..FormatFlags::default()
    });

    assert!(render_error(&mut state, Verb::Display, &RawCapable));
    assert_eq!(state.as_str(), "RawCapable { code: 7 }");
}

#[test]
fn raw_verb_without_capability_falls_back_to_debug() {
    let mut state = FormatState::with_flags(FormatFlags {
        sharp: true,
        ..FormatFlags::default()
    });

    assert!(render_error(&mut state, Verb::Display, &Plain("x")));
    assert_eq!(state.as_str(), "Plain(\"x\")");
}

#[test]
fn invalid_verb_produces_diagnostic() {
    let err = errorf!("just text");
    let mut state = FormatState::new();

    assert!(render_error(&mut state, Verb::Other('d'), &err));
    assert_eq!(state.as_str(), "%!d(error=just text)");
}

#[test]
fn fallback_terminates_after_one_level() {
    // `Outer` exposes a source() relation, but the walk follows only the
    // chain capabilities; a fallback-only error ends it immediately.
    let err = Outer {
        source: Plain("inner"),
    };
    assert_eq!(render_to_string(&err), "outer failed");
}

#[test]
fn new_chain_protocol_wins_over_legacy() {
    assert_eq!(render_to_string(&BothProtocols), "new protocol");
}

#[test]
fn legacy_protocol_is_honored_alone() {
    assert_eq!(render_to_string(&LegacyOnly), "legacy level");
}

#[test]
fn generic_format_owns_output_under_quote_verb() {
    let mut state = FormatState::new();
    render_error(&mut state, Verb::Quote, &GenericOwned);
    assert_eq!(state.as_str(), "\"generic owns output\"");
}

#[test]
fn generic_format_ends_the_walk() {
    // A generic delegate as the cause: the outer level renders, the
    // delegate renders, and nothing walks past it.
    let err = errorf!("wrap: %v", Arg::error(GenericOwned));
    assert_eq!(render_to_string(&err), "wrap: generic owns output");
}

#[test]
fn unrequested_detail_is_discarded() {
    assert_eq!(render_to_string(&WithDetail), "headline");
}

#[test]
fn requested_detail_is_indented() {
    let text = render_detailed(&WithDetail);
    assert_eq!(text, "headline:\n    expensive detail\n    second line");
}

#[test]
fn quote_verb_escapes_the_chain_text() {
    let err = errorf!("tab\there");
    let mut state = FormatState::new();
    render_error(&mut state, Verb::Quote, &err);
    assert_eq!(state.as_str(), "\"tab\\there\"");
}

#[test]
fn hex_verbs_encode_utf8_bytes() {
    let err = errorf!("failed");

    let mut lower = FormatState::new();
    render_error(&mut lower, Verb::LowerHex, &err);
    assert_eq!(lower.as_str(), "6661696c6564");

    let mut upper = FormatState::new();
    render_error(&mut upper, Verb::UpperHex, &err);
    assert_eq!(upper.as_str(), "6661696C6564");
}

#[test]
fn width_pads_and_precision_truncates() {
    let err = errorf!("failed");

    assert_eq!(format!("{err:10}"), "    failed");
    assert_eq!(format!("{err:.3}"), "fai");
}

#[test]
fn custom_cause_chains_via_arg_error() {
    let err = errorf!("wrap: %v", Arg::error(Plain("inner cause")));

    assert!(err.is_wrapped());
    assert_eq!(err.to_string(), "wrap: inner cause");
}

#[test]
fn source_exposes_the_wrapped_cause() {
    use core::error::Error as _;

    let err = errorf!("outer: %v", errorf!("root"));
    let source = err.source().expect("wrapped errors expose a source");
    assert_eq!(source.to_string(), "root");
}

#[test]
fn three_level_chain_renders_in_order() {
    let err = errorf!(
        "a: %v",
        errorf!("b: %v", errorf!("c"))
    );
    assert_eq!(err.to_string(), "a: b: c");

    let detail = format!("{err:+}");
    assert_eq!(detail.split("\n--- ").count(), 3);
}
