//! Parsing of refresh response bodies
//!
//! A refresh body is an HTML fragment whose top-level elements are the
//! entries, in server order:
//!
//! ```html
//! <div class="watched" data-id="17">[Group] Show - 01.mkv</div>
//! <div class="folder"><span>Season 2</span><span>3</span></div>
//! ```

use crate::listing::ListingNode;
use scraper::{ElementRef, Html};

/// Parse a fragment into one node per top-level element
///
/// Text between top-level elements is ignored.
#[must_use]
pub fn parse_fragment(body: &str) -> Vec<ListingNode> {
    let fragment = Html::parse_fragment(body);

    fragment
        .root_element()
        .children()
        .filter_map(ElementRef::wrap)
        .map(node_from_element)
        .collect()
}

fn node_from_element(element: ElementRef<'_>) -> ListingNode {
    let label = element.text().collect::<String>().trim().to_string();
    let child_count = element.children().filter_map(ElementRef::wrap).count();
    let classes = element.value().classes().map(str::to_string).collect();
    let key = element.value().attr("data-id").map(str::to_string);

    ListingNode {
        label,
        child_count,
        classes,
        key,
    }
}
