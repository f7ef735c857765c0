//! Acting on a selection: key extraction, browse URL, browser hand-off.

use tracing::warn;

use crate::endpoint::Endpoint;
use crate::error::Result;
use crate::issue::extract_key;
use crate::selector::Selection;

/// Capability boundary for "open this URL somewhere".
///
/// The concrete implementation shells out to a browser launcher; tests
/// substitute a recording fake. Returns the launcher's exit code.
pub trait UrlOpener {
    fn open(&self, url: &str) -> std::io::Result<i32>;
}

/// Act on the operator's choice.
///
/// Cancelled and empty selections complete successfully with no action.
/// When multiple lines were chosen only the first is acted on; fanning out
/// to every choice is an open question, and dropping the rest is the
/// documented current behavior rather than an accident.
///
/// A failed browser launch is reported as a warning, not an error: once the
/// URL is constructed and printed the action is best-effort.
pub fn dispatch(selection: &Selection, endpoint: &Endpoint, opener: &dyn UrlOpener) -> Result<()> {
    let Some(line) = selection.first() else {
        return Ok(());
    };

    let key = extract_key(line);
    let url = endpoint.browse_url(key);
    println!("Launching: {url}");

    match opener.open(&url) {
        Ok(0) => {}
        Ok(code) => warn!("browser launcher exited with code {code}"),
        Err(e) => warn!("browser launcher failed to run: {e}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    /// Records opened URLs and returns a fixed exit code
    struct FakeOpener {
        opened: RefCell<Vec<String>>,
        exit_code: i32,
    }

    impl FakeOpener {
        fn new(exit_code: i32) -> Self {
            Self {
                opened: RefCell::new(Vec::new()),
                exit_code,
            }
        }
    }

    impl UrlOpener for FakeOpener {
        fn open(&self, url: &str) -> std::io::Result<i32> {
            self.opened.borrow_mut().push(url.to_string());
            Ok(self.exit_code)
        }
    }

    fn endpoint() -> Endpoint {
        Endpoint::new("https://jira.example.com", "t")
    }

    #[test]
    fn test_cancelled_selection_is_a_no_op() {
        let opener = FakeOpener::new(0);
        dispatch(&Selection::Cancelled, &endpoint(), &opener).unwrap();
        assert!(opener.opened.borrow().is_empty());
    }

    #[test]
    fn test_empty_selection_is_a_no_op() {
        let opener = FakeOpener::new(0);
        dispatch(&Selection::Chosen(vec![]), &endpoint(), &opener).unwrap();
        assert!(opener.opened.borrow().is_empty());
    }

    #[test]
    fn test_first_choice_opens_browse_url() {
        let opener = FakeOpener::new(0);
        let selection = Selection::Chosen(vec!["ABC-123 ('Open'): Fix bug".to_string()]);
        dispatch(&selection, &endpoint(), &opener).unwrap();
        assert_eq!(
            opener.opened.borrow().as_slice(),
            ["https://jira.example.com/browse/ABC-123"]
        );
    }

    #[test]
    fn test_multi_select_acts_on_first_only() {
        let opener = FakeOpener::new(0);
        let selection = Selection::Chosen(vec![
            "AB-1 ('Open'): one".to_string(),
            "AB-2 ('Open'): two".to_string(),
        ]);
        dispatch(&selection, &endpoint(), &opener).unwrap();
        assert_eq!(
            opener.opened.borrow().as_slice(),
            ["https://jira.example.com/browse/AB-1"]
        );
    }

    #[test]
    fn test_nonzero_launcher_exit_is_not_fatal() {
        let opener = FakeOpener::new(1);
        let selection = Selection::Chosen(vec!["AB-1 ('Open'): one".to_string()]);
        dispatch(&selection, &endpoint(), &opener).unwrap();
        assert_eq!(opener.opened.borrow().len(), 1);
    }
}
