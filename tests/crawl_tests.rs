//! Integration tests for the crawl loop
//!
//! These tests script a fake page driver against the `PageDriver` seam,
//! so the full pagination cycle runs end-to-end without a browser.

use quotelines::browser::{BrowserError, PageDriver};
use quotelines::crawler::{CrawlOutcome, PageCrawler};
use quotelines::output::{read_records, write_records};
use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

const BASE_URL: &str = "https://quotes.example.test/";

/// Scripted driver: serves canned markup per URL and records navigations
struct FakeDriver {
    pages: HashMap<String, String>,
    current: RefCell<Option<String>>,
    visited: RefCell<Vec<String>>,
}

impl FakeDriver {
    fn new(pages: Vec<(String, String)>) -> Self {
        Self {
            pages: pages.into_iter().collect(),
            current: RefCell::new(None),
            visited: RefCell::new(Vec::new()),
        }
    }

    fn visited(&self) -> Vec<String> {
        self.visited.borrow().clone()
    }

    fn current_html(&self) -> Result<String, BrowserError> {
        let current = self.current.borrow();
        let url = current
            .as_deref()
            .ok_or_else(|| BrowserError::Navigation("no page loaded".to_string()))?;
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| BrowserError::Navigation(format!("unknown URL: {}", url)))
    }
}

impl PageDriver for &FakeDriver {
    fn navigate(&self, url: &str) -> Result<(), BrowserError> {
        self.visited.borrow_mut().push(url.to_string());
        *self.current.borrow_mut() = Some(url.to_string());
        Ok(())
    }

    fn page_source(&self) -> Result<String, BrowserError> {
        self.current_html()
    }

    fn wait_for_selector(&self, selector: &str, _budget: Duration) -> Result<bool, BrowserError> {
        // The fake renders instantly: the element is either in the canned
        // markup or it never appears, so the budget elapses immediately.
        assert_eq!(selector, ".quote");
        Ok(self.current_html()?.contains(r#"class="quote""#))
    }
}

fn quote_html(text: &str, author: &str, tags: &[&str]) -> String {
    let tag_html: String = tags
        .iter()
        .map(|t| format!(r#"<a class="tag" href="/tag/{}/">{}</a>"#, t, t))
        .collect();
    format!(
        r#"<div class="quote">
            <span class="text">{}</span>
            <span>by <small class="author">{}</small></span>
            <div class="tags">{}</div>
        </div>"#,
        text, author, tag_html
    )
}

fn page_html(quotes: &[(&str, &str, &[&str])], has_next: bool) -> String {
    let body: String = quotes
        .iter()
        .map(|(text, author, tags)| quote_html(text, author, tags))
        .collect();
    let pager = if has_next {
        r#"<ul class="pager"><li class="next"><a href="next">Next</a></li></ul>"#
    } else {
        r#"<ul class="pager"></ul>"#
    };
    format!("<html><body>{}{}</body></html>", body, pager)
}

fn page_url(n: u32) -> String {
    if n == 1 {
        BASE_URL.to_string()
    } else {
        format!("{}page/{}/", BASE_URL, n)
    }
}

fn crawler(driver: &FakeDriver) -> PageCrawler<&FakeDriver> {
    PageCrawler::new(
        driver,
        BASE_URL.to_string(),
        Duration::ZERO,
        Duration::from_secs(1),
    )
}

#[test]
fn three_page_crawl_preserves_order() {
    let driver = FakeDriver::new(vec![
        (
            page_url(1),
            page_html(&[("q1", "a1", &["t1", "t2"]), ("q2", "a2", &[])], true),
        ),
        (
            page_url(2),
            page_html(
                &[("q3", "a3", &["t3"]), ("q4", "a4", &[]), ("q5", "a5", &[])],
                true,
            ),
        ),
        (page_url(3), page_html(&[("q6", "a6", &["t4"])], false)),
    ]);

    let report = crawler(&driver).crawl().unwrap();

    assert_eq!(report.outcome, CrawlOutcome::Completed);
    assert_eq!(report.pages_visited, 3);
    assert_eq!(report.records.len(), 6);

    let texts: Vec<&str> = report.records.iter().map(|r| r.text.as_str()).collect();
    assert_eq!(texts, vec!["q1", "q2", "q3", "q4", "q5", "q6"]);
    assert_eq!(report.records[0].tags, vec!["t1", "t2"]);
    assert!(report.records[1].tags.is_empty());

    // Page URLs follow the <base>page/<n>/ template
    assert_eq!(driver.visited(), vec![page_url(1), page_url(2), page_url(3)]);
}

#[test]
fn stops_when_marker_absent() {
    let driver = FakeDriver::new(vec![(
        page_url(1),
        page_html(&[("only", "one", &[])], false),
    )]);

    let report = crawler(&driver).crawl().unwrap();

    assert_eq!(report.outcome, CrawlOutcome::Completed);
    assert_eq!(report.pages_visited, 1);
    assert_eq!(report.records.len(), 1);
    assert_eq!(driver.visited().len(), 1);
}

#[test]
fn timeout_keeps_prior_records() {
    // Page 2 never renders any quote content, so the readiness wait
    // runs out and the crawl stops with page 1's records only.
    let driver = FakeDriver::new(vec![
        (
            page_url(1),
            page_html(&[("kept1", "a", &[]), ("kept2", "b", &[])], true),
        ),
        (
            page_url(2),
            "<html><body><p>still loading...</p></body></html>".to_string(),
        ),
    ]);

    let report = crawler(&driver).crawl().unwrap();

    assert_eq!(report.outcome, CrawlOutcome::TimedOut);
    assert_eq!(report.pages_visited, 1);
    assert_eq!(report.records.len(), 2);
    assert_eq!(report.records[0].text, "kept1");
    assert_eq!(report.records[1].text, "kept2");

    // The timed-out page was navigated to, just never extracted
    assert_eq!(driver.visited(), vec![page_url(1), page_url(2)]);
}

#[test]
fn timeout_on_first_page_returns_empty() {
    let driver = FakeDriver::new(vec![(
        page_url(1),
        "<html><body></body></html>".to_string(),
    )]);

    let report = crawler(&driver).crawl().unwrap();

    assert_eq!(report.outcome, CrawlOutcome::TimedOut);
    assert_eq!(report.pages_visited, 0);
    assert!(report.records.is_empty());
}

#[test]
fn malformed_quote_aborts_run() {
    // Second quote on the page has no author element
    let html = format!(
        r#"<html><body>{}<div class="quote"><span class="text">orphan</span></div></body></html>"#,
        quote_html("fine", "a", &[]),
    );
    let driver = FakeDriver::new(vec![(page_url(1), html)]);

    let result = crawler(&driver).crawl();
    assert!(result.is_err());
}

#[test]
fn crawl_then_sink_round_trips() {
    let driver = FakeDriver::new(vec![
        (
            page_url(1),
            page_html(&[("q1", "a1", &["x"]), ("q2", "a2", &[])], true),
        ),
        (page_url(2), page_html(&[("q3", "a3", &["y", "z"])], false)),
    ]);

    let report = crawler(&driver).crawl().unwrap();

    let file = tempfile::NamedTempFile::new().unwrap();
    write_records(file.path(), &report.records).unwrap();
    let loaded = read_records(file.path()).unwrap();

    assert_eq!(loaded, report.records);
    assert_eq!(loaded.len(), 3);
    assert_eq!(loaded[2].tags, vec!["y", "z"]);
}
