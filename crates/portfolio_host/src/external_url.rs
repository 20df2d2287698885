//! External URL host-service contracts and the allow-list policy applied before navigation.

use std::{cell::RefCell, rc::Rc};

use thiserror::Error;
use url::Url;

use crate::Notifier;

/// Where an allowed URL is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenTarget {
    /// Navigate the current window (used for `mailto:`).
    CurrentWindow,
    /// Open a new tab without opener or referrer.
    NewTab,
}

/// Host service for opening URLs outside the terminal.
pub trait ExternalUrlService {
    /// Opens an already-validated absolute URL.
    fn open_url(&self, url: &str, target: OpenTarget) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op external URL service for unsupported targets.
pub struct NoopExternalUrlService;

impl ExternalUrlService for NoopExternalUrlService {
    fn open_url(&self, _url: &str, _target: OpenTarget) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Default)]
/// URL service that records every request instead of navigating.
pub struct RecordingUrlService {
    opened: RefCell<Vec<(String, OpenTarget)>>,
}

impl RecordingUrlService {
    /// Returns recorded `(url, target)` pairs in request order.
    pub fn opened(&self) -> Vec<(String, OpenTarget)> {
        self.opened.borrow().clone()
    }
}

impl ExternalUrlService for RecordingUrlService {
    fn open_url(&self, url: &str, target: OpenTarget) -> Result<(), String> {
        self.opened.borrow_mut().push((url.to_string(), target));
        Ok(())
    }
}

/// Failure to open a URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlOpenError {
    /// The href could not be parsed against the page base.
    #[error("Invalid URL")]
    Invalid,
    /// The URL scheme is not allowed and the URL is cross-origin.
    #[error("Blocked unsafe URL")]
    Blocked,
    /// The host refused to navigate.
    #[error("Could not open URL: {0}")]
    Host(String),
}

/// Scheme allow-list with a same-origin escape hatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlPolicy {
    schemes: &'static [&'static str],
}

impl UrlPolicy {
    /// Policy for clickable links in rendered output.
    pub const fn links() -> Self {
        Self {
            schemes: &["http", "https", "mailto"],
        }
    }

    /// Policy for programmatic navigation through [`SafeUrlOpener`].
    pub const fn navigation() -> Self {
        Self {
            schemes: &["https", "mailto"],
        }
    }

    /// Resolves `href` against `base` and checks it against the policy.
    ///
    /// # Errors
    ///
    /// Returns [`UrlOpenError::Invalid`] for unparsable input and [`UrlOpenError::Blocked`] for
    /// cross-origin URLs with a scheme outside the allow-list.
    pub fn check(&self, href: &str, base: &Url) -> Result<Url, UrlOpenError> {
        let url = base.join(href).map_err(|_| UrlOpenError::Invalid)?;
        if self.schemes.contains(&url.scheme()) || url.origin() == base.origin() {
            Ok(url)
        } else {
            Err(UrlOpenError::Blocked)
        }
    }

    /// Whether `href` passes the policy.
    pub fn allows(&self, href: &str, base: &Url) -> bool {
        self.check(href, base).is_ok()
    }
}

/// Opens URLs through an [`ExternalUrlService`] after applying [`UrlPolicy::navigation`].
///
/// Rejections are reported through the notifier and never followed.
#[derive(Clone)]
pub struct SafeUrlOpener {
    base: Url,
    service: Rc<dyn ExternalUrlService>,
    notifier: Rc<dyn Notifier>,
}

impl SafeUrlOpener {
    /// Creates an opener that resolves relative hrefs against `base`.
    pub fn new(base: Url, service: Rc<dyn ExternalUrlService>, notifier: Rc<dyn Notifier>) -> Self {
        Self {
            base,
            service,
            notifier,
        }
    }

    /// Page base URL used for resolution and same-origin checks.
    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Validates and opens `href`.
    ///
    /// # Errors
    ///
    /// Returns the rejection after it has been shown through the notifier.
    pub fn open(&self, href: &str) -> Result<(), UrlOpenError> {
        let result = UrlPolicy::navigation()
            .check(href, &self.base)
            .and_then(|url| {
                let target = if url.scheme() == "mailto" {
                    OpenTarget::CurrentWindow
                } else {
                    OpenTarget::NewTab
                };
                self.service
                    .open_url(url.as_str(), target)
                    .map_err(UrlOpenError::Host)
            });
        if let Err(err) = &result {
            self.notifier.notify(&err.to_string());
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::MemoryNotifier;

    fn base() -> Url {
        Url::parse("https://bwatson.uk/index.html").expect("base url")
    }

    fn opener() -> (SafeUrlOpener, Rc<RecordingUrlService>, Rc<MemoryNotifier>) {
        let service = Rc::new(RecordingUrlService::default());
        let notifier = Rc::new(MemoryNotifier::default());
        let opener = SafeUrlOpener::new(base(), service.clone(), notifier.clone());
        (opener, service, notifier)
    }

    #[test]
    fn navigation_policy_allows_https_mailto_and_same_origin() {
        let policy = UrlPolicy::navigation();
        assert!(policy.allows("https://github.com/x", &base()));
        assert!(policy.allows("mailto:a@b.c", &base()));
        assert!(policy.allows("./assets/cv.pdf", &base()));
        assert_eq!(
            policy.check("http://example.com", &base()),
            Err(UrlOpenError::Blocked)
        );
        assert_eq!(
            policy.check("javascript:alert(1)", &base()),
            Err(UrlOpenError::Blocked)
        );
    }

    #[test]
    fn link_policy_also_allows_plain_http() {
        assert!(UrlPolicy::links().allows("http://example.com", &base()));
        assert!(!UrlPolicy::links().allows("data:text/html,hi", &base()));
    }

    #[test]
    fn mailto_opens_in_current_window_and_others_in_new_tab() {
        let (opener, service, notifier) = opener();
        opener.open("mailto:a@b.c").expect("mailto");
        opener.open("./assets/cv.pdf").expect("relative");
        assert_eq!(
            service.opened(),
            vec![
                ("mailto:a@b.c".to_string(), OpenTarget::CurrentWindow),
                (
                    "https://bwatson.uk/assets/cv.pdf".to_string(),
                    OpenTarget::NewTab
                ),
            ]
        );
        assert!(notifier.messages().is_empty());
    }

    #[test]
    fn rejected_urls_are_announced_and_not_followed() {
        let (opener, service, notifier) = opener();
        assert_eq!(opener.open("ftp://example.com/x"), Err(UrlOpenError::Blocked));
        assert_eq!(opener.open("https://exa mple.com"), Err(UrlOpenError::Invalid));
        assert!(service.opened().is_empty());
        assert_eq!(
            notifier.messages(),
            vec!["Blocked unsafe URL".to_string(), "Invalid URL".to_string()]
        );
    }
}
