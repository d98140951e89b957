use outline_blocks_engine::{Block, normalize, parse_lines, parse_str, serialize, to_text};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn shape(forest: &[Block]) -> Vec<(String, usize)> {
    fn walk(blocks: &[Block], depth: usize, out: &mut Vec<(String, usize)>) {
        for b in blocks {
            out.push((b.head().to_string(), depth));
            walk(&b.children, depth + 1, out);
        }
    }
    let mut out = Vec::new();
    walk(forest, 0, &mut out);
    out
}

#[rstest]
#[case::single_leaf(vec![Block::new("a")])]
#[case::siblings(vec![Block::new("a"), Block::new("b"), Block::new("c")])]
#[case::deep_chain(vec![Block::with_children(
    "a",
    vec![Block::with_children("b", vec![Block::with_children("c", vec![Block::new("d")])])],
)])]
#[case::mixed(vec![
    Block::with_children("a", vec![Block::new("b"), Block::with_children("c", vec![Block::new("d")])]),
    Block::new("e"),
    Block::with_children("f", vec![Block::new("g")]),
])]
#[case::multi_line(vec![Block::with_children("a\nsecond\nthird", vec![Block::new("b\nmore")])])]
fn serialized_tree_parses_back_to_same_shape(#[case] tree: Vec<Block>) {
    let lines = serialize(&tree, 0);
    let reparsed = normalize(&parse_lines(&lines));

    assert_eq!(shape(&reparsed), shape(&tree));
    assert_eq!(reparsed, tree);
}

#[test]
fn outline_text_survives_parse_normalize_serialize() {
    let text = "- a\n  - b\n    note on b\n  - c\n- d";
    assert_eq!(to_text(&normalize(&parse_str(text))), text);
}

#[test]
fn collapse_state_is_not_written_back() {
    let text = "- a\n  collapsed:: true\n  - b";
    assert_eq!(to_text(&normalize(&parse_str(text))), "- a\n  - b");
}

#[test]
fn page_properties_keep_no_bullet() {
    let text = "title:: Page\ntags:: one, two\n\n- first\n- second";
    assert_eq!(
        to_text(&normalize(&parse_str(text))),
        "title:: Page\ntags:: one, two\n- first\n- second"
    );
}

#[test]
fn raw_parser_output_doubles_markers_without_normalizing() {
    let parsed = parse_str("- a\n  - b");
    assert_eq!(serialize(&parsed, 0), vec!["- - a", "  -   - b"]);
}

#[test]
fn tabs_come_back_as_spaces() {
    let text = "- a\n\t- b\n\t\t- c";
    assert_eq!(
        to_text(&normalize(&parse_str(text))),
        "- a\n  - b\n    - c"
    );
}
