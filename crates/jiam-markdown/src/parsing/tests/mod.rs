//! Integration tests for the parsing module.
//!
//! Uses snapshot testing of the rendered markup (unstyled theme) for
//! readability. Fixtures (.md) and snapshots (.snap) are co-located in
//! `fixtures/`.


use pretty_assertions::assert_eq;

use crate::{
    parsing::{
        blocks::{Block, ListKind},
        inline::InlineNode,
        parse_message,
    },
    render::Renderer,
    theme::Theme,
};

// Fixture-based snapshot tests

#[test]
fn fixture_chat_reply() {
    assert_fixture("chat_reply");
}

#[test]
fn fixture_hostile_input() {
    assert_fixture("hostile_input");
}

fn fixtures_dir() -> String {
    format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"))
}

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("{}/{name}.md", fixtures_dir())).unwrap()
}

fn assert_fixture(name: &str) {
    let md = read_fixture(name);

    let message = parse_message(&md);
    invariants::check(&md, &message.blocks);

    let html = Renderer::new(Theme::unstyled()).render(&md);
    insta::with_settings!({
        snapshot_path => fixtures_dir(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_snapshot!(name, html);
    });
}

// Structural tests

/// Same input, same output: nothing leaks between calls.
#[test]
fn parsing_is_deterministic() {
    for name in ["chat_reply", "hostile_input"] {
        let md = read_fixture(name);
        assert_eq!(parse_message(&md), parse_message(&md));
    }
}

#[test]
fn empty_message() {
    let message = parse_message("");
    assert!(message.is_empty());
}

#[test]
fn blank_lines_only() {
    assert!(parse_message("\n\n\n").is_empty());
    assert!(parse_message(" \t\n\t \n").is_empty());
}

#[test]
fn too_deep_heading_is_paragraph() {
    let message = parse_message("#### Too Deep");
    assert_eq!(
        message.blocks,
        vec![Block::Paragraph {
            lines: vec![vec![InlineNode::Text("#### Too Deep")]],
        }]
    );
}

#[test]
fn list_kind_switch_makes_two_lists() {
    let message = parse_message("- a\n1. b");
    assert_eq!(
        message.blocks,
        vec![
            Block::List {
                kind: ListKind::Unordered,
                items: vec![vec![InlineNode::Text("a")]],
            },
            Block::List {
                kind: ListKind::Ordered,
                items: vec![vec![InlineNode::Text("b")]],
            },
        ]
    );
}

#[test]
fn structural_line_ends_paragraph() {
    let message = parse_message("hello\n# heading");
    assert_eq!(
        message.blocks,
        vec![
            Block::Paragraph {
                lines: vec![vec![InlineNode::Text("hello")]],
            },
            Block::Heading {
                level: 1,
                content: vec![InlineNode::Text("heading")],
            },
        ]
    );
}

#[test]
fn every_structural_line_ends_paragraph() {
    for next in ["# h", "> q", "---", "- i", "1. i"] {
        let input = format!("para\n{next}");
        let message = parse_message(&input);
        assert_eq!(message.blocks.len(), 2, "input: {input:?}");
        assert!(matches!(message.blocks[0], Block::Paragraph { ref lines } if lines.len() == 1));
    }
}

#[test]
fn blockquote_lines_join() {
    let message = parse_message("> line1\n>line2\n>   line3  ");
    assert_eq!(
        message.blocks,
        vec![Block::BlockQuote {
            lines: vec![
                vec![InlineNode::Text("line1")],
                vec![InlineNode::Text("line2")],
                vec![InlineNode::Text("line3")],
            ],
        }]
    );
}

#[test]
fn blockquote_ends_at_first_unprefixed_line() {
    let message = parse_message("> q\n- item\n> again");
    assert_eq!(message.blocks.len(), 3);
    assert!(matches!(message.blocks[0], Block::BlockQuote { .. }));
    assert!(matches!(message.blocks[1], Block::List { .. }));
    assert!(matches!(message.blocks[2], Block::BlockQuote { .. }));
}

#[test]
fn crlf_line_endings() {
    let message = parse_message("# Title\r\nbody\r\n");
    assert_eq!(
        message.blocks,
        vec![
            Block::Heading {
                level: 1,
                content: vec![InlineNode::Text("Title")],
            },
            Block::Paragraph {
                lines: vec![vec![InlineNode::Text("body")]],
            },
        ]
    );
}

/// Test that raw zones (code spans) don't produce formatting.
#[test]
fn raw_zones_suppress_inline_parsing() {
    let message = parse_message("`**not bold**`");
    assert_eq!(
        message.blocks,
        vec![Block::Paragraph {
            lines: vec![vec![InlineNode::Code("**not bold**")]],
        }]
    );
}

/// Test unclosed constructs become plain text.
#[test]
fn unclosed_constructs_become_text() {
    let md = "**unclosed and `also unclosed [and](this";
    let message = parse_message(md);
    assert_eq!(
        message.blocks,
        vec![Block::Paragraph {
            lines: vec![vec![InlineNode::Text(md)]],
        }]
    );
}

#[test]
fn inline_does_not_span_lines() {
    let message = parse_message("**a\nb**");
    assert_eq!(
        message.blocks,
        vec![Block::Paragraph {
            lines: vec![vec![InlineNode::Text("**a")], vec![InlineNode::Text("b**")]],
        }]
    );
}
