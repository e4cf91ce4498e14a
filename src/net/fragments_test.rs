use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use futures::executor::block_on;

use super::*;

type Journal = Rc<RefCell<Vec<String>>>;

struct FakePlaceholder {
    src: Option<&'static str>,
    content: RefCell<String>,
    journal: Journal,
}

impl FakePlaceholder {
    fn new(src: Option<&'static str>, initial: &str, journal: &Journal) -> Self {
        Self { src, content: RefCell::new(initial.to_owned()), journal: Rc::clone(journal) }
    }

    fn content(&self) -> String {
        self.content.borrow().clone()
    }
}

impl Placeholder for FakePlaceholder {
    fn source(&self) -> Option<String> {
        self.src.map(str::to_owned)
    }

    fn set_content(&self, markup: &str) {
        self.journal.borrow_mut().push(format!("set {}", self.src.unwrap_or("?")));
        *self.content.borrow_mut() = markup.to_owned();
    }
}

struct FakeSource {
    responses: HashMap<&'static str, Result<String, FragmentError>>,
    journal: Journal,
}

impl FragmentSource for FakeSource {
    async fn fetch(&self, src: &str) -> Result<String, FragmentError> {
        self.journal.borrow_mut().push(format!("fetch {src}"));
        self.responses
            .get(src)
            .cloned()
            .unwrap_or(Err(FragmentError::Status(404)))
    }
}

fn source(journal: &Journal, responses: &[(&'static str, Result<String, FragmentError>)]) -> FakeSource {
    FakeSource { responses: responses.iter().cloned().collect(), journal: Rc::clone(journal) }
}

// =============================================================
// PlaceholderAction
// =============================================================

#[test]
fn success_replaces_content() {
    let action = PlaceholderAction::for_result(Ok("<nav></nav>".to_owned()));
    assert_eq!(action, PlaceholderAction::Replace("<nav></nav>".to_owned()));
}

#[test]
fn http_error_clears_and_network_error_leaves() {
    assert_eq!(PlaceholderAction::for_result(Err(FragmentError::Status(500))), PlaceholderAction::Clear);
    assert_eq!(
        PlaceholderAction::for_result(Err(FragmentError::Network("offline".to_owned()))),
        PlaceholderAction::Leave
    );
}

#[test]
fn errors_describe_their_cause() {
    assert_eq!(FragmentError::Status(404).to_string(), "fragment responded with status 404");
    assert_eq!(FragmentError::Network("reset".to_owned()).to_string(), "fragment request failed: reset");
}

// =============================================================
// load_sequential
// =============================================================

#[test]
fn fragments_load_in_document_order_one_at_a_time() {
    let journal = Journal::default();
    let placeholders = [
        FakePlaceholder::new(Some("header.html"), "", &journal),
        FakePlaceholder::new(Some("footer.html"), "", &journal),
    ];
    let src = source(
        &journal,
        &[("header.html", Ok("<header/>".to_owned())), ("footer.html", Ok("<footer/>".to_owned()))],
    );

    let report = block_on(load_sequential(&placeholders, &src));

    assert_eq!(report.inlined, 2);
    assert_eq!(placeholders[0].content(), "<header/>");
    assert_eq!(placeholders[1].content(), "<footer/>");
    assert_eq!(
        *journal.borrow(),
        vec!["fetch header.html", "set header.html", "fetch footer.html", "set footer.html"]
    );
}

#[test]
fn not_found_clears_placeholder_and_later_fragments_still_load() {
    let journal = Journal::default();
    let placeholders = [
        FakePlaceholder::new(Some("missing.html"), "Loading…", &journal),
        FakePlaceholder::new(Some("footer.html"), "", &journal),
    ];
    let src = source(&journal, &[("footer.html", Ok("<footer/>".to_owned()))]);

    let report = block_on(load_sequential(&placeholders, &src));

    assert_eq!(placeholders[0].content(), "");
    assert_eq!(placeholders[1].content(), "<footer/>");
    assert_eq!(report, LoadReport { inlined: 1, cleared: 1, failed: 0, skipped: 0 });
}

#[test]
fn network_failure_leaves_placeholder_untouched() {
    let journal = Journal::default();
    let placeholders = [
        FakePlaceholder::new(Some("pricing.html"), "Loading…", &journal),
        FakePlaceholder::new(Some("faq.html"), "", &journal),
    ];
    let src = source(
        &journal,
        &[
            ("pricing.html", Err(FragmentError::Network("connection reset".to_owned()))),
            ("faq.html", Ok("<dl/>".to_owned())),
        ],
    );

    let report = block_on(load_sequential(&placeholders, &src));

    assert_eq!(placeholders[0].content(), "Loading…");
    assert_eq!(placeholders[1].content(), "<dl/>");
    assert_eq!(report.failed, 1);
    assert_eq!(report.inlined, 1);
}

#[test]
fn placeholders_without_a_source_are_skipped() {
    let journal = Journal::default();
    let placeholders = [
        FakePlaceholder::new(None, "keep", &journal),
        FakePlaceholder::new(Some(""), "keep", &journal),
    ];
    let src = source(&journal, &[]);

    let report = block_on(load_sequential(&placeholders, &src));

    assert_eq!(report.skipped, 2);
    assert!(journal.borrow().is_empty());
    assert_eq!(placeholders[0].content(), "keep");
}

#[test]
fn empty_document_loads_nothing() {
    let journal = Journal::default();
    let placeholders: [FakePlaceholder; 0] = [];
    let report = block_on(load_sequential(&placeholders, &source(&journal, &[])));
    assert_eq!(report, LoadReport::default());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_source_is_unavailable_natively() {
    let result = block_on(HttpSource.fetch("header.html"));
    assert!(matches!(result, Err(FragmentError::Network(_))));
}
