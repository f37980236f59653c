use crate::error::MalformedInlineMarkup;

use super::{
    kinds::{Bracketed, Delimiter},
    types::{TextKind, TextSpan},
};

/// Tokenizes a flat run of inline text into typed spans.
///
/// Runs the image, link, code, bold and italic passes in that order. Each
/// pass only rewrites `Plain` spans left over by the previous one.
///
/// Text containing no inline syntax comes back as a single `Plain` span equal
/// to the input (including the empty string).
///
/// # Errors
/// Returns [`MalformedInlineMarkup`] when a plain run contains an odd number
/// of any delimiter. Broken bracket syntax is never an error; it stays text.
pub fn tokenize(text: &str) -> Result<Vec<TextSpan>, MalformedInlineMarkup> {
    let spans = vec![TextSpan::plain(text)];
    let spans = split_images(spans);
    let spans = split_links(spans);

    Delimiter::PIPELINE
        .iter()
        .try_fold(spans, |spans, delimiter| split_delimiter(spans, delimiter))
}

/// Extracts `![alt](url)` images from every plain span.
pub fn split_images(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_bracketed(spans, Bracketed::Image)
}

/// Extracts `[text](url)` links from every plain span, leaving image syntax
/// untouched.
pub fn split_links(spans: Vec<TextSpan>) -> Vec<TextSpan> {
    split_bracketed(spans, Bracketed::Link)
}

fn split_bracketed(spans: Vec<TextSpan>, form: Bracketed) -> Vec<TextSpan> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let mut pieces = Vec::new();
        let mut last = 0;
        for caps in Bracketed::pattern().captures_iter(&span.text) {
            if !form.accepts(&caps) {
                continue;
            }
            let Some(whole) = caps.get(0) else {
                continue;
            };
            push_plain(&mut pieces, &span.text[last..whole.start()]);
            pieces.push(form.span(&caps));
            last = whole.end();
        }

        if pieces.is_empty() {
            // No match: keep the original span as-is
            out.push(span);
        } else {
            push_plain(&mut pieces, &span.text[last..]);
            out.extend(pieces);
        }
    }

    out
}

/// Splits every plain span on a paired delimiter.
///
/// Segments alternate plain / typed / plain / ... starting with plain. Empty
/// segments (adjacent markers, or a marker at either end) are dropped. Spans
/// that do not contain the marker pass through unchanged.
///
/// # Errors
/// Returns [`MalformedInlineMarkup`] if a plain span contains an odd number of
/// markers.
pub fn split_delimiter(
    spans: Vec<TextSpan>,
    delimiter: &Delimiter,
) -> Result<Vec<TextSpan>, MalformedInlineMarkup> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() || !span.text.contains(delimiter.marker) {
            out.push(span);
            continue;
        }

        if delimiter.count_in(&span.text) % 2 != 0 {
            return Err(MalformedInlineMarkup {
                delimiter: delimiter.marker,
                text: span.text,
            });
        }

        for (i, part) in span.text.split(delimiter.marker).enumerate() {
            if part.is_empty() {
                continue;
            }
            let kind = if i % 2 == 0 {
                TextKind::Plain
            } else {
                delimiter.kind.clone()
            };
            out.push(TextSpan::new(part, kind));
        }
    }

    Ok(out)
}

fn push_plain(out: &mut Vec<TextSpan>, text: &str) {
    if !text.is_empty() {
        out.push(TextSpan::plain(text));
    }
}
