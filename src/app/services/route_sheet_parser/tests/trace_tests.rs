//! Tests for debug trace events

use super::*;
use crate::app::services::route_sheet_parser::{
    CollectingSink, Delimiter, RouteSheetParser, TraceEvent, TraceSink,
};

fn is_skip(event: &TraceEvent) -> bool {
    matches!(event, TraceEvent::LineSkipped { .. })
}

fn is_unknown_status(event: &TraceEvent) -> bool {
    matches!(event, TraceEvent::UnknownStatus { .. })
}

fn is_summary(event: &TraceEvent) -> bool {
    matches!(event, TraceEvent::Summary { .. })
}

#[test]
fn test_no_events_without_debug() {
    let mut sink = CollectingSink::new();
    RouteSheetParser::new(strict()).parse_traced(&create_mixed_sheet(), &mut sink);
    assert!(sink.events().is_empty());
}

#[test]
fn test_one_event_per_skipped_line_and_unknown_status() {
    let input = "\tactive\n1 Main St\tbogus\n\t\tcall ahead\n2 Oak Dr\tactive";
    let mut sink = CollectingSink::new();

    RouteSheetParser::new(strict().with_debug(true)).parse_traced(input, &mut sink);

    assert_eq!(sink.count(is_skip), 2);
    assert_eq!(sink.count(is_unknown_status), 1);
    assert_eq!(sink.count(is_summary), 1);
    assert!(sink.events().iter().any(|event| {
        *event
            == TraceEvent::UnknownStatus {
                line: 2,
                raw_status: "bogus".to_string(),
            }
    }));
}

#[test]
fn test_summary_is_last_event() {
    let mut sink = CollectingSink::new();
    RouteSheetParser::new(lenient().with_debug(true)).parse_traced(&create_mixed_sheet(), &mut sink);

    let events = sink.into_events();
    assert_eq!(
        events.last(),
        Some(&TraceEvent::Summary {
            stops: 3,
            lines: 4,
            skipped: 1,
        })
    );
}

#[test]
fn test_line_split_events_carry_delimiter() {
    let mut sink = CollectingSink::new();
    RouteSheetParser::new(lenient().with_debug(true))
        .parse_traced("1 Main St    active", &mut sink);

    assert_eq!(
        sink.events()[0],
        TraceEvent::LineSplit {
            line: 1,
            delimiter: Delimiter::WhitespaceRun,
            fields: vec!["1 Main St".to_string(), "active".to_string()],
        }
    );
}

#[test]
fn test_unknown_status_not_traced_in_lenient_mode() {
    let mut sink = CollectingSink::new();
    RouteSheetParser::new(lenient().with_debug(true)).parse_traced("1 Main St\tbogus", &mut sink);
    assert_eq!(sink.count(is_unknown_status), 0);
}

#[test]
fn test_header_events() {
    let mut sink = CollectingSink::new();
    RouteSheetParser::new(with_header().with_debug(true))
        .parse_traced(&create_header_sheet(), &mut sink);
    assert!(matches!(
        sink.events()[0],
        TraceEvent::HeaderDetected { line: 1, .. }
    ));

    let mut sink = CollectingSink::new();
    RouteSheetParser::new(with_header().with_debug(true))
        .parse_traced("1 Main St\tactive", &mut sink);
    assert_eq!(sink.events()[0], TraceEvent::HeaderNotRecognized { line: 1 });
}

#[test]
fn test_closure_sink() {
    let mut messages = Vec::new();
    {
        let mut sink = |event: TraceEvent| messages.push(event.to_string());
        RouteSheetParser::new(strict().with_debug(true)).parse_traced("\tx\n1 A St\tnope", &mut sink);
    }

    assert_eq!(
        messages.last().map(String::as_str),
        Some("Parsed 1 stops from 2 lines (1 skipped)")
    );
    assert!(messages.iter().any(|m| m == "Line 2 has invalid status 'nope'; marked as unknown"));
}

#[test]
fn test_closure_implements_trace_sink() {
    fn record_into(sink: &mut dyn TraceSink) {
        sink.record(TraceEvent::HeaderNotRecognized { line: 7 });
    }

    let mut seen = 0;
    record_into(&mut |_event: TraceEvent| seen += 1);
    assert_eq!(seen, 1);
}

#[test]
fn test_event_display() {
    let event = TraceEvent::LineSkipped {
        line: 3,
        content: "\tactive".to_string(),
    };
    assert_eq!(event.to_string(), "Line 3 skipped: missing address (\"\\tactive\")");
}
