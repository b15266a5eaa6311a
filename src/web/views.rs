//! View models handed to the Askama templates.
//!
//! Templates only see plain strings, numbers and flags; all formatting
//! happens here.

use chrono::{DateTime, Utc};

use crate::domain::entities::{
    ClickRecord, EntryField, EntryStatus, Notification, Route, ShortenedResult, StatItem, Theme,
    UrlEntry,
};
use crate::domain::form::{MAX_ENTRIES, ShortenerForm};
use crate::domain::session::FormSession;
use crate::web::forms::input_name;

const DISPLAY_FORMAT: &str = "%b %-d, %Y %H:%M UTC";

fn display_time(at: DateTime<Utc>) -> String {
    at.format(DISPLAY_FORMAT).to_string()
}

pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
    pub active: bool,
}

pub struct NotificationView {
    pub kind: &'static str,
    pub title: String,
    pub description: String,
}

impl From<Notification> for NotificationView {
    fn from(n: Notification) -> Self {
        Self {
            kind: n.kind.as_str(),
            title: n.title,
            description: n.description,
        }
    }
}

/// Header, navigation and toast area shared by every page.
pub struct ShellView {
    pub theme: &'static str,
    pub is_dark: bool,
    pub current_path: &'static str,
    pub nav: Vec<NavItem>,
    pub notifications: Vec<NotificationView>,
    pub copied: NotificationView,
    pub copy_failed: NotificationView,
}

impl ShellView {
    pub fn new(theme: Theme, route: Route, notifications: Vec<Notification>) -> Self {
        Self {
            theme: theme.as_str(),
            is_dark: theme == Theme::Dark,
            current_path: route.path(),
            nav: Route::ALL
                .into_iter()
                .map(|r| NavItem {
                    href: r.path(),
                    label: r.label(),
                    active: r == route,
                })
                .collect(),
            notifications: notifications.into_iter().map(NotificationView::from).collect(),
            copied: Notification::copied().into(),
            copy_failed: Notification::copy_failed().into(),
        }
    }
}

pub struct EntryView {
    pub id: u64,
    pub position: usize,
    pub url_name: String,
    pub validity_name: String,
    pub shortcode_name: String,
    pub url: String,
    pub validity: String,
    pub shortcode: String,
    pub url_error: Option<String>,
    pub validity_error: Option<String>,
    pub shortcode_error: Option<String>,
    pub is_valid: bool,
    /// Counted by the submit button: valid with a non-empty URL.
    pub is_submittable: bool,
    pub status: &'static str,
    pub short_link: Option<String>,
    pub expiry: Option<String>,
}

impl EntryView {
    /// Errors of an untouched entry are not shown.
    fn from_entry(entry: &UrlEntry, position: usize) -> Self {
        let shown = |error: &Option<String>| if entry.touched { error.clone() } else { None };

        Self {
            id: entry.id.get(),
            position,
            url_name: input_name(EntryField::Url, entry.id),
            validity_name: input_name(EntryField::Validity, entry.id),
            shortcode_name: input_name(EntryField::Shortcode, entry.id),
            url: entry.url.clone(),
            validity: entry.validity.clone(),
            shortcode: entry.shortcode.clone(),
            url_error: shown(&entry.errors.url),
            validity_error: shown(&entry.errors.validity),
            shortcode_error: shown(&entry.errors.shortcode),
            is_valid: entry.is_valid(),
            is_submittable: entry.is_submittable(),
            status: match entry.status() {
                EntryStatus::Empty => "empty",
                EntryStatus::Editing => "editing",
                EntryStatus::Submitted => "submitted",
            },
            short_link: entry.result.as_ref().map(|r| r.short_link.clone()),
            expiry: entry.result.as_ref().map(|r| display_time(r.expiry)),
        }
    }
}

pub struct ResultView {
    pub url: String,
    pub short_code: String,
    pub short_link: String,
    pub expiry: String,
    pub expiry_iso: String,
}

impl From<&ShortenedResult> for ResultView {
    fn from(result: &ShortenedResult) -> Self {
        Self {
            url: result.url.clone(),
            short_code: result.short_code.clone(),
            short_link: result.short_link.clone(),
            expiry: display_time(result.expiry),
            expiry_iso: result.expiry_iso(),
        }
    }
}

fn submit_label(valid_count: usize) -> String {
    let plural = if valid_count == 1 { "" } else { "s" };
    format!("Shorten {} URL{}", valid_count, plural)
}

/// Everything the shortener page renders.
pub struct FormView {
    pub entries: Vec<EntryView>,
    pub max_entries: usize,
    pub can_add: bool,
    pub can_remove: bool,
    pub valid_count: usize,
    pub submit_label: String,
    pub recent: Vec<ResultView>,
    pub total_results: usize,
}

impl FormView {
    pub fn new(session: &FormSession) -> Self {
        let form: &ShortenerForm = &session.form;

        let valid_count = form.valid_count();

        Self {
            entries: form
                .entries()
                .iter()
                .enumerate()
                .map(|(i, entry)| EntryView::from_entry(entry, i + 1))
                .collect(),
            max_entries: MAX_ENTRIES,
            can_add: form.can_add(),
            can_remove: form.can_remove(),
            valid_count,
            submit_label: submit_label(valid_count),
            recent: session.recent_results().iter().map(ResultView::from).collect(),
            total_results: session.total_results(),
        }
    }
}

pub struct ClickView {
    pub timestamp: String,
    pub referrer: String,
    pub location: String,
    pub user_agent: String,
    pub is_direct: bool,
}

impl From<&ClickRecord> for ClickView {
    fn from(click: &ClickRecord) -> Self {
        Self {
            timestamp: display_time(click.timestamp),
            referrer: click.referrer.clone(),
            location: click.location.clone(),
            user_agent: click.user_agent.clone(),
            is_direct: click.is_direct(),
        }
    }
}

pub struct StatView {
    pub short_link: String,
    pub short_code: String,
    pub original_url: String,
    pub created_at: String,
    pub expires_at: String,
    pub expired: bool,
    pub total_clicks: u64,
    pub clicks: Vec<ClickView>,
}

impl StatView {
    pub fn new(item: &StatItem, now: DateTime<Utc>) -> Self {
        Self {
            short_link: item.short_link.clone(),
            short_code: item.short_code.clone(),
            original_url: item.original_url.clone(),
            created_at: display_time(item.created_at),
            expires_at: display_time(item.expires_at),
            expired: item.is_expired_at(now),
            total_clicks: item.total_clicks,
            clicks: item.clicks.iter().map(ClickView::from).collect(),
        }
    }
}
