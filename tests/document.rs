use mdsite::{
    BlockType, Error, HtmlNode, classify_block, extract_title, markdown_to_blocks,
    markdown_to_html, markdown_to_html_node,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

const MULTIBLOCK: &str = "
    # This is an **important** heading

    ###### This heading is
    far less important

    This is a simple
    multiline paragraph with
    _italic_ text

    1. First _ordered_ list item
    2. Second _ordered_ list item

    - First _unordered_ list item
    - Second _unordered_ list item

    > It was the **best** of times
    >It was the _worst_ of times

    ```
    def test():
    \tprint(\"testing\")
    \t# this is **not** parsed and _stays_ `the same
    ```
    ";

#[test]
fn multiblock_document() {
    let expected = concat!(
        "<div>",
        "<h1>This is an <b>important</b> heading</h1>",
        "<h6>This heading is far less important</h6>",
        "<p>This is a simple multiline paragraph with <i>italic</i> text</p>",
        "<ol><li>First <i>ordered</i> list item</li><li>Second <i>ordered</i> list item</li></ol>",
        "<ul><li>First <i>unordered</i> list item</li><li>Second <i>unordered</i> list item</li></ul>",
        "<pre><blockquote>It was the **best** of times It was the _worst_ of times</blockquote></pre>",
        "<pre><code>def test():\nprint(\"testing\")\n# this is **not** parsed and _stays_ `the same\n</code></pre>",
        "</div>",
    );
    assert_eq!(markdown_to_html(MULTIBLOCK).unwrap(), expected);
}

#[test]
fn multiblock_classification_order() {
    let types: Vec<BlockType> = markdown_to_blocks(MULTIBLOCK)
        .iter()
        .map(|block| classify_block(block))
        .collect();
    assert_eq!(
        types,
        vec![
            BlockType::Heading,
            BlockType::Heading,
            BlockType::Paragraph,
            BlockType::OrderedList,
            BlockType::UnorderedList,
            BlockType::Quote,
            BlockType::Code,
        ]
    );
}

#[test]
fn multiblock_title() {
    assert_eq!(
        extract_title(MULTIBLOCK).unwrap(),
        "This is an important heading"
    );
}

#[test]
fn one_child_per_block() {
    let tree = markdown_to_html_node(MULTIBLOCK).unwrap();
    let HtmlNode::Parent(root) = tree else {
        panic!("root must be a parent node");
    };
    assert_eq!(root.children.len(), markdown_to_blocks(MULTIBLOCK).len());
}

#[rstest]
#[case("")]
#[case("\n\n\n\n")]
#[case("a\n\n\n\nb")]
#[case("  lead\n\n\t\n\ntrail  \n\n")]
#[case(MULTIBLOCK)]
fn blocks_are_never_empty(#[case] markdown: &str) {
    for block in markdown_to_blocks(markdown) {
        assert!(!block.is_empty());
        assert!(block.lines().all(|line| line == line.trim() && !line.is_empty()));
    }
}

#[test]
fn blocks_keep_source_order() {
    let blocks = markdown_to_blocks("third?\n\nno, first\n\n\n\nsecond");
    assert_eq!(blocks, vec!["third?", "no, first", "second"]);
}

#[test]
fn rendering_twice_is_identical() {
    assert_eq!(
        markdown_to_html(MULTIBLOCK).unwrap(),
        markdown_to_html(MULTIBLOCK).unwrap()
    );
}

#[rstest]
#[case("## Not H1")]
#[case("###### Deep\n\n# Real title")]
#[case("Paragraph first\n\n# Title")]
#[case("- list first")]
fn title_errors(#[case] markdown: &str) {
    assert!(matches!(extract_title(markdown), Err(Error::MissingTitle)));
}

#[test]
fn links_and_images_in_list_items() {
    let md = "- see [docs](https://docs.rs)\n- ![badge](https://img.shields.io/badge.svg)";
    assert_eq!(
        markdown_to_html(md).unwrap(),
        concat!(
            "<div><ul>",
            r#"<li>see <a href="https://docs.rs">docs</a></li>"#,
            r#"<li><img src="https://img.shields.io/badge.svg" alt="badge"></img></li>"#,
            "</ul></div>",
        )
    );
}

#[test]
fn image_attributes_readable_from_tree() {
    let tree = markdown_to_html_node("![logo](/logo.png)").unwrap();
    let HtmlNode::Parent(root) = tree else {
        panic!("root must be a parent node");
    };
    let HtmlNode::Parent(paragraph) = &root.children[0] else {
        panic!("paragraph must be a parent node");
    };
    assert_eq!(paragraph.children.len(), 1);

    let image = &paragraph.children[0];
    assert_eq!(image.tag(), Some("img"));
    let attrs = image.attributes();
    assert_eq!(attrs.len(), 2);
    assert_eq!(attrs.get("alt"), Some("logo"));
    assert_eq!(attrs.get("href"), None);
    assert_eq!(
        attrs.iter().collect::<Vec<_>>(),
        vec![("src", "/logo.png"), ("alt", "logo")]
    );
}

#[test]
fn unnumbered_list_line_without_text_aborts_document() {
    assert!(matches!(
        markdown_to_html("1. a\nb"),
        Err(Error::Structural(_))
    ));
}
