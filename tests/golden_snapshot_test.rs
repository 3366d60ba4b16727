use md2html::{markdown_to_html_node, BlockKind, ConvertOptions, Error, HtmlNode, MarkdownToHtml};
use pretty_assertions::assert_eq;

fn to_html(markdown: &str) -> String {
    MarkdownToHtml::with_defaults()
        .convert_to_string(markdown)
        .expect("conversion should succeed")
}

#[test]
fn golden_snapshot_full_document() {
    let md = r#"# Tolkien Fan Club

![JRR Tolkien sitting](/images/tolkien.png)

Here's the deal, **I like Tolkien**.

> "I am in fact a Hobbit in all but size."
>
> -- J.R.R. Tolkien

## Blog posts

- [Why Glorfindel is More Impressive than Legolas](/blog/glorfindel)
- [Why Tom Bombadil Was a Mistake](/blog/tom)

1. First *item*
2. Second `item`

```
func main(){
    fmt.Println("Hello, **World**!")
}
```
"#;
    let expected = concat!(
        "<div>",
        "<h1>Tolkien Fan Club</h1>",
        "<p><img src=\"/images/tolkien.png\" alt=\"JRR Tolkien sitting\"></img></p>",
        "<p>Here's the deal, <b>I like Tolkien</b>.</p>",
        "<blockquote>\"I am in fact a Hobbit in all but size.\"  -- J.R.R. Tolkien</blockquote>",
        "<h2>Blog posts</h2>",
        "<ul>",
        "<li><a href=\"/blog/glorfindel\">Why Glorfindel is More Impressive than Legolas</a></li>",
        "<li><a href=\"/blog/tom\">Why Tom Bombadil Was a Mistake</a></li>",
        "</ul>",
        "<ol><li>First <i>item</i></li><li>Second <code>item</code></li></ol>",
        "<pre><code>func main(){\n    fmt.Println(\"Hello, **World**!\")\n}</code></pre>",
        "</div>"
    );
    assert_eq!(to_html(md), expected);
}

#[test]
fn golden_snapshot_heading() {
    assert_eq!(to_html("# Title"), "<div><h1>Title</h1></div>");
}

#[test]
fn golden_snapshot_code_fence_is_verbatim() {
    assert_eq!(
        to_html("```\ncode here\n```"),
        "<div><pre><code>code here</code></pre></div>"
    );
    assert_eq!(
        to_html("```\n**not bold**\n```"),
        "<div><pre><code>**not bold**</code></pre></div>"
    );
}

#[test]
fn golden_snapshot_paragraph_bold_round_trip() {
    let root = markdown_to_html_node("**bold**").unwrap();
    let paragraph = &root.children()[0];
    assert_eq!(paragraph.tag(), Some("p"));
    assert_eq!(paragraph.children(), &[HtmlNode::leaf("b", "bold")]);
}

#[test]
fn golden_snapshot_image_leaf() {
    let root = markdown_to_html_node("![alt](http://x/y.png)").unwrap();
    let image = &root.children()[0].children()[0];
    assert_eq!(image.tag(), Some("img"));
    assert_eq!(image.value(), Some(""));
    let props: Vec<_> = image.props().iter().collect();
    assert_eq!(props, vec![("src", "http://x/y.png"), ("alt", "alt")]);
}

#[test]
fn golden_snapshot_unterminated_emphasis_fails() {
    let err = markdown_to_html_node("*unterminated").unwrap_err();
    assert!(matches!(err, Error::UnterminatedDelimiter { .. }));
}

#[test]
fn golden_snapshot_non_sequential_list_is_paragraph() {
    let blocks = md2html::adapters::markdown::markdown_to_blocks("1. a\n3. b").unwrap();
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].kind, BlockKind::Paragraph);
    assert_eq!(to_html("1. a\n3. b"), "<div><p>1. a 3. b</p></div>");
}

#[test]
fn golden_snapshot_custom_root() {
    let converter = MarkdownToHtml::new(ConvertOptions {
        root_tag: "section".to_string(),
    });
    assert_eq!(
        converter.convert_to_string("text").unwrap(),
        "<section><p>text</p></section>"
    );
}
