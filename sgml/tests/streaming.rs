//! Streaming flushes must add up to a single render of the finished tree.

use facet_testhelpers::test;
use sgml::{Element, Value};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy)]
enum Op {
    Write(&'static str),
    Child(&'static str, &'static str),
    Void(&'static str),
    Comment(&'static str),
    Nested,
}

const MIXED_OPS: &[Op] = &[
    Op::Write("text"),
    Op::Child("li", "item"),
    Op::Void("br"),
    Op::Comment("note"),
    Op::Nested,
];

const CHILD_OPS: &[Op] = &[
    Op::Child("li", "item"),
    Op::Void("hr"),
    Op::Comment("note"),
    Op::Nested,
];

fn apply(elem: &mut Element, op: Op) {
    match op {
        Op::Write(text) => {
            elem.write(text);
        }
        Op::Child(name, text) => {
            elem.child(name, text).unwrap();
        }
        Op::Void(name) => {
            elem.void_child(name, ()).unwrap();
        }
        Op::Comment(text) => {
            elem.comment(text);
        }
        Op::Nested => {
            let section = elem.element("section");
            section.attribute("class", "inner");
            section.child("p", "deep").unwrap();
            section.write("tail");
        }
    }
}

fn root() -> Element {
    Element::with_args("div", Value::map().named("id", "root")).unwrap()
}

fn full_render(phases: &[&[Op]], minimize: bool) -> String {
    let mut elem = root();
    for phase in phases {
        for &op in *phase {
            apply(&mut elem, op);
        }
    }
    elem.render(minimize, 0)
}

fn streamed_render(phases: &[&[Op]], minimize: bool) -> String {
    let mut elem = root();
    let mut out = Vec::new();
    for (i, phase) in phases.iter().enumerate() {
        for &op in *phase {
            apply(&mut elem, op);
        }
        if i + 1 < phases.len() {
            elem.block();
        } else {
            elem.unblock();
        }
        elem.flush(minimize, &mut out).unwrap();
    }
    String::from_utf8(out).unwrap()
}

/// Every sequence of `len` ops drawn from `alphabet`.
fn sequences(alphabet: &[Op], len: usize) -> Vec<Vec<Op>> {
    let mut seqs = vec![Vec::new()];
    for _ in 0..len {
        seqs = seqs
            .into_iter()
            .flat_map(|seq| {
                alphabet.iter().map(move |&op| {
                    let mut next = seq.clone();
                    next.push(op);
                    next
                })
            })
            .collect();
    }
    seqs
}

#[test]
fn test_two_phase_minimized_equivalence() {
    for len in 0..=4 {
        for seq in sequences(MIXED_OPS, len) {
            for split in 0..=seq.len() {
                let (p1, p2) = seq.split_at(split);
                let expected = full_render(&[p1, p2], true);
                let actual = streamed_render(&[p1, p2], true);
                assert_eq!(actual, expected, "ops {p1:?} | {p2:?}");
            }
        }
    }
}

#[test]
fn test_many_phase_minimized_equivalence() {
    for seq in sequences(MIXED_OPS, 4) {
        let phases: Vec<&[Op]> = seq.chunks(1).collect();
        let mut with_empty = phases.clone();
        with_empty.insert(2, &[]);

        assert_eq!(
            streamed_render(&phases, true),
            full_render(&phases, true),
            "ops {seq:?}"
        );
        assert_eq!(
            streamed_render(&with_empty, true),
            full_render(&with_empty, true),
            "ops {seq:?} with an empty phase"
        );
    }
}

#[test]
fn test_pretty_equivalence_for_child_lists() {
    for len in 1..=4 {
        for seq in sequences(CHILD_OPS, len) {
            for split in 1..=seq.len() {
                let (p1, p2) = seq.split_at(split);
                let expected = full_render(&[p1, p2], false);
                let actual = streamed_render(&[p1, p2], false);
                assert_eq!(actual, expected, "ops {p1:?} | {p2:?}");
            }
        }
    }
}

#[test]
fn test_pretty_equivalence_for_content() {
    let phases: [&[Op]; 3] = [&[Op::Write("a")], &[Op::Write("b")], &[Op::Write("c")]];
    assert_eq!(streamed_render(&phases, false), full_render(&phases, false));
    assert_eq!(streamed_render(&phases, false), "<div id=\"root\">abc</div>\n");
}

#[test]
fn test_table_rows_streamed_in_batches() {
    let mut table = Element::new("table");
    table.attribute("class", "data").block();

    let mut out = Vec::new();
    table.flush(false, &mut out).unwrap();
    assert_eq!(String::from_utf8_lossy(&out), "<table class=\"data\">");

    for batch in 0..3 {
        for row in 0..2 {
            let tr = table.element("tr");
            tr.child("td", Value::from(batch * 2 + row)).unwrap();
        }
        table.flush(true, &mut out).unwrap();
    }
    table.unblock().flush(true, &mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        concat!(
            "<table class=\"data\">",
            "<tr><td>0</td></tr><tr><td>1</td></tr>",
            "<tr><td>2</td></tr><tr><td>3</td></tr>",
            "<tr><td>4</td></tr><tr><td>5</td></tr>",
            "</table>",
        )
    );
}

#[test]
fn test_attributes_after_first_flush_are_not_emitted() {
    let mut div = Element::new("div");
    div.attribute("id", "a").block();

    let mut out = Vec::new();
    div.flush(true, &mut out).unwrap();
    div.attribute("class", "late");
    div.unblock().flush(true, &mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "<div id=\"a\"></div>");
}

struct FlakySink {
    fail_next: bool,
    written: Vec<u8>,
}

impl Write for FlakySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.fail_next {
            self.fail_next = false;
            return Err(io::Error::other("transient failure"));
        }
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_retry_after_sink_failure() {
    let mut ul = Element::new("ul");
    ul.block();
    ul.child("li", "one").unwrap();

    let mut sink = FlakySink {
        fail_next: true,
        written: Vec::new(),
    };
    let err = ul.flush(true, &mut sink).unwrap_err();
    assert!(err.is_io());
    assert!(!ul.is_start_flushed());
    assert_eq!(ul.children().len(), 1);

    ul.flush(true, &mut sink).unwrap();
    ul.child("li", "two").unwrap();
    ul.unblock().flush(true, &mut sink).unwrap();

    assert_eq!(
        String::from_utf8(sink.written).unwrap(),
        "<ul><li>one</li><li>two</li></ul>"
    );
}

#[test]
fn test_flush_stdout_marks_flushed() {
    let mut span = Element::new("span");
    span.write("to stdout");
    span.flush_stdout(true).unwrap();
    assert!(span.is_start_flushed());
    assert!(span.content().is_none());
}
