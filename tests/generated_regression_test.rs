use md2html::{markdown_to_html_node, Error, MarkdownToHtml};
use pretty_assertions::assert_eq;

fn to_html(markdown: &str) -> md2html::Result<String> {
    MarkdownToHtml::with_defaults().convert_to_string(markdown)
}

#[test]
fn regression_unterminated_fence_is_an_error() {
    let err = to_html("intro\n\n```rust\nfn main() {}\n").unwrap_err();
    assert!(matches!(err, Error::UnterminatedFence { ref fragment } if fragment == "```rust"));
}

#[test]
fn regression_mixed_list_markers_stay_one_list() {
    assert_eq!(
        to_html("- dash\n* star\n- dash").unwrap(),
        "<div><ul><li>dash</li><li>star</li><li>dash</li></ul></div>"
    );
}

#[test]
fn regression_list_marker_without_space_is_paragraph() {
    assert_eq!(to_html("-a\n-b").unwrap(), "<div><p>-a -b</p></div>");
}

#[test]
fn regression_heading_soft_wraps_following_lines() {
    assert_eq!(
        to_html("## Part one\ncontinued").unwrap(),
        "<div><h2>Part one continued</h2></div>"
    );
}

#[test]
fn regression_crlf_input() {
    assert_eq!(
        to_html("# Title\r\n\r\nbody line\r\nsecond\r\n").unwrap(),
        "<div><h1>Title</h1><p>body line second</p></div>"
    );
}

#[test]
fn regression_link_text_is_not_emphasis_split() {
    assert_eq!(
        to_html("see [a*b](https://x.y/a_b)").unwrap(),
        "<div><p>see <a href=\"https://x.y/a_b\">a*b</a></p></div>"
    );
}

#[test]
fn regression_error_in_later_block_discards_everything() {
    let result = markdown_to_html_node("# Fine\n\nstill fine\n\n`broken");
    assert!(matches!(
        result,
        Err(Error::UnterminatedDelimiter { ref delimiter, .. }) if delimiter == "`"
    ));
}

#[test]
fn regression_list_items_are_inline_split_individually() {
    // each item is balanced on its own line
    assert_eq!(
        to_html("1. *a*\n2. b*c*").unwrap(),
        "<div><ol><li><i>a</i></li><li>b<i>c</i></li></ol></div>"
    );
    assert!(to_html("- *a\n- b*").is_err());
}

#[test]
fn regression_fence_followed_directly_by_text() {
    assert_eq!(
        to_html("```\ncode\n```\nafter text").unwrap(),
        "<div><pre><code>code</code></pre><p>after text</p></div>"
    );
}

#[test]
fn regression_info_string_line_does_not_close_fence() {
    let err = to_html("```\na\n```js\n\npara").unwrap_err();
    assert!(matches!(err, Error::UnterminatedFence { ref fragment } if fragment == "```"));
}

#[test]
fn regression_bare_heading_marker_is_empty_heading() {
    assert_eq!(to_html("# ").unwrap(), "<div><h1></h1></div>");
}
