use cardconv::{Block, CardConverter, Conversion, LinkStyle, Options, TextSize, TextWeight};

fn convert(html: &str) -> Conversion {
    CardConverter::new()
        .convert_sync(html)
        .expect("conversion must not fail on in-memory input")
}

/// Unwrap a body-level container into its item blocks.
fn container_items(block: &Block) -> &[Block] {
    match block {
        Block::Container(container) => &container.items,
        other => panic!("expected a container, got {other:?}"),
    }
}

fn text_of(block: &Block) -> &str {
    match block {
        Block::TextBlock(tb) => &tb.text,
        other => panic!("expected a text block, got {other:?}"),
    }
}

#[test]
fn ordered_list_numbers_from_the_start_attribute() {
    let conversion = convert(r#"<ol start="3"><li>alpha</li><li>beta</li><li>gamma</li></ol>"#);
    let body = &conversion.card.body;
    assert_eq!(body.len(), 1, "one list container. Got: {body:?}");

    let items = container_items(&body[0]);
    let texts: Vec<&str> = items.iter().map(text_of).collect();
    assert_eq!(texts, vec!["3. alpha", "4. beta", "5. gamma"]);
}

#[test]
fn non_numeric_start_defaults_to_one() {
    let conversion = convert(r#"<ol start="abc"><li>only</li></ol>"#);
    let items = container_items(&conversion.card.body[0]);
    assert_eq!(text_of(&items[0]), "1. only");
}

#[test]
fn zero_start_defaults_to_one() {
    let conversion = convert(r#"<ol start="0"><li>only</li></ol>"#);
    let items = container_items(&conversion.card.body[0]);
    assert_eq!(text_of(&items[0]), "1. only");
}

#[test]
fn missing_start_defaults_to_one() {
    let conversion = convert("<ol><li>only</li></ol>");
    let items = container_items(&conversion.card.body[0]);
    assert_eq!(text_of(&items[0]), "1. only");
}

#[test]
fn unordered_items_all_get_dash_markers() {
    let conversion = convert("<ul><li>one</li><li>two</li><li>three</li></ul>");
    let items = container_items(&conversion.card.body[0]);
    let texts: Vec<&str> = items.iter().map(text_of).collect();
    assert_eq!(texts, vec!["- one", "- two", "- three"]);
}

#[test]
fn source_indentation_never_becomes_phantom_blocks() {
    let html = "
        <ul>
            <li>one</li>
            <li>two</li>
        </ul>
    ";
    let conversion = convert(html);
    assert!(conversion.diagnostics.is_empty(), "{:?}", conversion.diagnostics);
    let items = container_items(&conversion.card.body[0]);
    let texts: Vec<&str> = items.iter().map(text_of).collect();
    assert_eq!(texts, vec!["- one", "- two"]);
}

#[test]
fn nested_list_folds_into_the_parent_item_text() {
    let conversion = convert("<ul><li>parent<ul><li>child</li></ul></li></ul>");
    let items = container_items(&conversion.card.body[0]);
    assert_eq!(items.len(), 1, "nested text folds into one block. Got: {items:?}");
    assert_eq!(text_of(&items[0]), "- parent\r\t- child");
}

#[test]
fn three_deep_nesting_escapes_the_line_markers() {
    let conversion =
        convert("<ul><li>top<ul><li>mid<ul><li>leaf</li></ul></li></ul></li></ul>");
    let items = container_items(&conversion.card.body[0]);
    assert_eq!(text_of(&items[0]), "- top\r\t- mid\r\t\t- leaf");
}

#[test]
fn item_starting_with_an_image_gets_no_marker() {
    let conversion = convert(r#"<ul><li><img src="http://x/pic.png" alt="pic"></li></ul>"#);
    let items = container_items(&conversion.card.body[0]);
    assert_eq!(items.len(), 1);
    let Block::Image(image) = &items[0] else {
        panic!("expected the sole image block, got {items:?}");
    };
    assert_eq!(image.url, "http://x/pic.png");
    assert_eq!(image.alt_text, "pic");
}

#[test]
fn multi_paragraph_item_content_indents_continued_lines() {
    let conversion = convert("<ul><li><p>first</p><p>second</p></li></ul>");
    let items = container_items(&conversion.card.body[0]);
    assert_eq!(text_of(&items[0]), "- first\n\n\tsecond");
}

#[test]
fn emphasis_uses_the_configured_delimiter() {
    let conversion = convert("<p><em>hello</em></p>");
    assert_eq!(text_of(&conversion.card.body[0]), "_hello_");

    let starred = CardConverter::new()
        .with_em_delimiter("*")
        .convert_sync("<p><em>hello</em></p>")
        .unwrap();
    assert_eq!(text_of(&starred.card.body[0]), "*hello*");
}

#[test]
fn strong_inside_emphasis_resolves_inside_out() {
    let conversion = convert("<p><em><strong>hello</strong></em></p>");
    assert_eq!(text_of(&conversion.card.body[0]), "_**hello**_");
}

#[test]
fn inline_link_renders_bracket_syntax_when_inlined() {
    let conversion = convert(r#"<p><a href="http://x">text</a></p>"#);
    assert_eq!(text_of(&conversion.card.body[0]), "[text](http://x)");
}

#[test]
fn link_without_href_contributes_only_its_text() {
    let conversion = convert("<p><a>text</a></p>");
    assert_eq!(text_of(&conversion.card.body[0]), "text");
}

#[test]
fn non_inlined_link_style_skips_the_link_rule() {
    let conversion = CardConverter::new()
        .with_link_style(LinkStyle::TextOnly)
        .convert_sync(r#"<p><a href="http://x">text</a></p>"#)
        .unwrap();
    assert_eq!(text_of(&conversion.card.body[0]), "text");
}

#[test]
fn heading_splits_text_from_non_text_children() {
    let conversion = convert(r#"<h2>Title<img src="http://x/pic.png"></h2>"#);
    let items = container_items(&conversion.card.body[0]);
    assert_eq!(items.len(), 2, "heading block then image. Got: {items:?}");

    let Block::TextBlock(heading) = &items[0] else {
        panic!("first block must be the heading text");
    };
    assert_eq!(heading.text, "Title");
    assert_eq!(heading.size, Some(TextSize::Large));
    assert_eq!(heading.weight, Some(TextWeight::Bolder));
    assert!(matches!(&items[1], Block::Image(_)));
}

#[test]
fn line_break_separates_paragraphs() {
    let conversion = convert("<p>above<br>below</p>");
    let texts: Vec<&str> = conversion.card.body.iter().map(text_of).collect();
    assert_eq!(texts, vec!["above", "below"]);
}

#[test]
fn sibling_paragraphs_become_separate_text_blocks() {
    let conversion = convert("<p>first</p><p>second</p>");
    let texts: Vec<&str> = conversion.card.body.iter().map(text_of).collect();
    assert_eq!(texts, vec!["first", "second"]);
}

#[test]
fn image_attributes_default_to_empty_strings() {
    let conversion = convert("<p><img></p>");
    let Block::Image(image) = &conversion.card.body[0] else {
        panic!("expected a bare image, got {:?}", conversion.card.body);
    };
    assert_eq!(image.url, "");
    assert_eq!(image.alt_text, "");
}

#[test]
fn loose_text_between_list_items_is_reported_not_dropped() {
    let conversion = convert("<ul>loose<li>item</li></ul>");
    assert_eq!(
        conversion.diagnostics.len(),
        1,
        "malformed list content must be diagnosed. Got: {:?}",
        conversion.diagnostics
    );
    // Best-effort output keeps the loose text as an item of its own.
    let items = container_items(&conversion.card.body[0]);
    let texts: Vec<&str> = items.iter().map(text_of).collect();
    assert_eq!(texts, vec!["- loose", "- item"]);
}

#[test]
fn well_formed_input_produces_no_diagnostics() {
    let conversion = convert("<h1>t</h1><p>p</p><ul><li>i</li></ul>");
    assert!(conversion.diagnostics.is_empty(), "{:?}", conversion.diagnostics);
}

#[test]
fn head_content_is_discarded() {
    let conversion = convert("<html><head><title>ignored</title></head><body><p>kept</p></body></html>");
    let texts: Vec<&str> = conversion.card.body.iter().map(text_of).collect();
    assert_eq!(texts, vec!["kept"]);
}

#[tokio::test]
async fn async_conversion_matches_the_sync_result() {
    let html = "<h1>Title</h1><p>Body</p>";
    let sync = convert(html);
    let converter = CardConverter::new();
    let via_task = converter.convert(html).await.unwrap();
    assert_eq!(sync, via_task);
}

#[test]
fn free_function_entry_point_honors_options() {
    let options = Options {
        em_delimiter: "~".to_string(),
        ..Options::default()
    };
    let conversion = cardconv::convert_html_sync("<p><em>x</em></p>", &options).unwrap();
    assert_eq!(text_of(&conversion.card.body[0]), "~x~");
}
