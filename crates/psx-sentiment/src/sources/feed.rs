//! Syndication feed parsing and article-text extraction.
//!
//! Accepts RSS 0.9x/1.0/2.0 and Atom via `feed-rs`. Each entry keeps its
//! cleaned title, summary and publish date; callers decide whether the date
//! window applies.

use chrono::NaiveDate;

use crate::error::SentimentError;
use crate::types::DateWindow;

/// One feed entry, reduced to what scoring needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FeedEntry {
    pub title: String,
    pub summary: String,
    /// UTC date of the `published` timestamp, else `updated`.
    pub published: Option<NaiveDate>,
}

impl FeedEntry {
    /// Title and summary joined by one space.
    pub(crate) fn text(&self) -> String {
        format!("{} {}", self.title, self.summary).trim().to_string()
    }
}

/// Parse a feed body, keeping at most the first `max_entries` entries.
///
/// # Errors
///
/// Returns [`SentimentError::FeedParse`] if the body is not a recognizable feed.
pub(crate) fn parse_feed(
    body: &[u8],
    max_entries: usize,
) -> Result<Vec<FeedEntry>, SentimentError> {
    let feed = feed_rs::parser::parse(body)?;

    let entries = feed
        .entries
        .into_iter()
        .take(max_entries)
        .map(|entry| FeedEntry {
            title: entry
                .title
                .map(|t| strip_html(&t.content))
                .unwrap_or_default(),
            summary: entry
                .summary
                .map(|s| strip_html(&s.content))
                .unwrap_or_default(),
            published: entry
                .published
                .or(entry.updated)
                .map(|dt| dt.date_naive()),
        })
        .collect();

    Ok(entries)
}

/// Texts of entries dated inside `window`. Undated entries are dropped.
///
/// An entry with neither title nor summary still yields one (empty) text, so
/// it counts as an article that scores neutral.
pub(crate) fn texts_within(entries: &[FeedEntry], window: &DateWindow) -> Vec<String> {
    entries
        .iter()
        .filter(|entry| entry.published.is_some_and(|date| window.contains(date)))
        .map(FeedEntry::text)
        .collect()
}

/// Texts of all entries, dated or not.
pub(crate) fn all_texts(entries: &[FeedEntry]) -> Vec<String> {
    entries
        .iter()
        .map(FeedEntry::text)
        .collect()
}

/// Strip HTML tags from a string, decode common entities and normalize
/// whitespace.
pub(crate) fn strip_html(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                out.push(' ');
            }
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    decode_entities(&out)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decode the entities search feeds put inside CDATA summaries.
///
/// `&amp;` goes last so `&amp;lt;` stays a literal `&lt;`.
fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#039;", "'")
        .replace("&apos;", "'")
        .replace("&#8217;", "'")
        .replace("&#8216;", "'")
        .replace("&#8220;", "\"")
        .replace("&#8221;", "\"")
        .replace("&#8211;", "-")
        .replace("&amp;", "&")
}
