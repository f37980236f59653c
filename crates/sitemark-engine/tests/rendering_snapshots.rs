use sitemark_engine::{BlockKind, Error, classify, markdown_to_html, split_blocks};

#[test]
fn fixture_full_page() {
    let html = render_fixture("full_page").unwrap();
    insta::assert_snapshot!(html, @r#"
<div><h1>Field Notes</h1><p>Notes collected while *not* writing a parser. See the <a href="/guide.html">guide</a> for details, or the <img src="/img/logo.png" alt="logo"> in the corner.</p><h2>Lists</h2><ul><li>first <b>bold</b> item</li><li>second item with <code>code</code></li><li>third item</li></ul><ol><li>one</li><li>two</li><li>three</li></ol><blockquote>A quoted line and <i>another</i> one</blockquote><pre><code>fn main() {
    println!("**not bold**");
}
</code></pre></div>
"#);
}

#[test]
fn fixture_inline_only() {
    let html = render_fixture("inline_only").unwrap();
    insta::assert_snapshot!(html, @r#"<div><p><b>Bold</b> then <i>italic</i> then <code>code</code> then <a href="https://example.com/?q=1#frag">a link</a> then <img src="pic.png" alt="an image">.</p></div>"#);
}

/// Malformed block syntax degrades to paragraphs, never to errors.
#[test]
fn fixture_fallbacks() {
    let html = render_fixture("fallbacks").unwrap();
    insta::assert_snapshot!(html, @"<div><p>####### Too many hashes</p><p>#Missing space</p><p>1. one 3. three</p><p>- mixed * markers</p><p>> quoted not quoted</p><p>Plain [broken](link and ![nested [alt]](x.png) stay literal.</p></div>");
}

/// An unterminated fence is a paragraph with an odd backtick count.
#[test]
fn fixture_unbalanced() {
    let err = render_fixture("unbalanced").unwrap_err();
    assert!(matches!(err, Error::Inline(_)));
    insta::assert_snapshot!(err.to_string(), @r#"malformed inline markup: unbalanced "`" in "``` an unterminated fence""#);
}

#[test]
fn full_page_block_kinds() {
    let kinds: Vec<BlockKind> = split_blocks(&read_fixture("full_page"))
        .iter()
        .map(|b| classify(b))
        .collect();

    pretty_assertions::assert_eq!(
        kinds,
        vec![
            BlockKind::Heading,
            BlockKind::Paragraph,
            BlockKind::Heading,
            BlockKind::UnorderedList,
            BlockKind::OrderedList,
            BlockKind::Quote,
            BlockKind::Code,
        ]
    );
}

/// Every fixture that renders must render identically twice.
#[test]
fn rendering_is_deterministic() {
    for name in ["full_page", "inline_only", "fallbacks"] {
        let first = render_fixture(name).unwrap();
        let second = render_fixture(name).unwrap();
        assert_eq!(first, second, "{name} rendered differently");
        assert!(first.starts_with("<div>") && first.ends_with("</div>"));
    }
}

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}

fn render_fixture(name: &str) -> Result<String, Error> {
    markdown_to_html(&read_fixture(name))
}
