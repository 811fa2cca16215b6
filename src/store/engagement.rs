// SPDX-License-Identifier: MPL-2.0
//! Per-page likes and comments persistence.
//!
//! One JSON file maps page identifiers (`"module-3"`, `"overview"`) to a
//! [`PageEngagement`] record. Records are created lazily on first access;
//! comments are append-only; likes toggle between exactly two states per
//! machine. The `liked` flag is a local toggle, not an aggregate: it only
//! suppresses double-incrementing from the same installation.

use crate::app::paths;
use crate::config::DEFAULT_COMMENT_AUTHOR;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// Store file name within the app data directory.
const ENGAGEMENT_FILE: &str = "engagement.json";

/// A single reader comment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    /// Unique timestamp-derived identifier (milliseconds since epoch, bumped
    /// past any existing id on collision).
    pub id: i64,
    pub author: String,
    pub content: String,
    /// ISO-8601 creation timestamp.
    pub date: String,
}

/// Like state and comment list for one page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageEngagement {
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub liked: bool,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// Repository over all page engagement records with an injected storage
/// directory.
#[derive(Debug)]
pub struct EngagementStore {
    base_dir: Option<PathBuf>,
    pages: BTreeMap<String, PageEngagement>,
}

impl EngagementStore {
    /// Opens the store, loading any persisted records.
    ///
    /// Returns a tuple of (store, optional_warning). Loading fails open.
    pub fn open(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let (pages, warning) = Self::load_pages(base_dir.clone());
        (Self { base_dir, pages }, warning)
    }

    fn load_pages(
        base_dir: Option<PathBuf>,
    ) -> (BTreeMap<String, PageEngagement>, Option<String>) {
        let Some(path) = Self::file_path(base_dir) else {
            return (BTreeMap::new(), None);
        };

        if !path.exists() {
            return (BTreeMap::new(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => {
                let reader = BufReader::new(file);
                match serde_json::from_reader(reader) {
                    Ok(pages) => (pages, None),
                    Err(err) => {
                        log::warn!("engagement store unreadable, starting fresh: {}", err);
                        (
                            BTreeMap::new(),
                            Some("notification-engagement-parse-error".to_string()),
                        )
                    }
                }
            }
            Err(err) => {
                log::warn!("engagement store unreadable, starting fresh: {}", err);
                (
                    BTreeMap::new(),
                    Some("notification-engagement-read-error".to_string()),
                )
            }
        }
    }

    /// Returns the record for a page, defaulting to an empty one.
    #[must_use]
    pub fn for_page(&self, page_id: &str) -> PageEngagement {
        self.pages.get(page_id).cloned().unwrap_or_default()
    }

    /// Returns a page's comments sorted newest-first.
    #[must_use]
    pub fn sorted_comments(&self, page_id: &str) -> Vec<Comment> {
        let mut comments = self
            .pages
            .get(page_id)
            .map(|page| page.comments.clone())
            .unwrap_or_default();
        // Ids are timestamp-derived and strictly increasing, so sorting by id
        // descending orders by descending creation time
        comments.sort_by(|a, b| b.id.cmp(&a.id));
        comments
    }

    /// Appends a comment to a page.
    ///
    /// A blank author becomes the anonymous default. Content must be
    /// non-empty: the UI layer rejects empty submissions before they reach
    /// the store.
    ///
    /// Returns an optional warning key if persisting failed.
    pub fn add_comment(&mut self, page_id: &str, author: &str, content: &str) -> Option<String> {
        let author = author.trim();
        let author = if author.is_empty() {
            DEFAULT_COMMENT_AUTHOR
        } else {
            author
        };

        let id = self.next_comment_id();
        let comment = Comment {
            id,
            author: author.to_string(),
            content: content.to_string(),
            date: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };

        self.pages
            .entry(page_id.to_string())
            .or_default()
            .comments
            .push(comment);
        self.save()
    }

    /// Toggles the like flag for a page, adjusting the count.
    ///
    /// Incrementing on false→true and decrementing (saturating at 0) on
    /// true→false makes the operation its own inverse.
    ///
    /// Returns the updated record and an optional warning key.
    pub fn toggle_like(&mut self, page_id: &str) -> (PageEngagement, Option<String>) {
        let page = self.pages.entry(page_id.to_string()).or_default();
        if page.liked {
            page.likes = page.likes.saturating_sub(1);
            page.liked = false;
        } else {
            page.likes += 1;
            page.liked = true;
        }
        let snapshot = page.clone();
        let warning = self.save();
        (snapshot, warning)
    }

    /// Timestamp-derived id, bumped past any existing id so rapid successive
    /// comments within the same millisecond stay unique.
    fn next_comment_id(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let max_existing = self
            .pages
            .values()
            .flat_map(|page| page.comments.iter().map(|comment| comment.id))
            .max()
            .unwrap_or(0);
        now.max(max_existing + 1)
    }

    fn save(&self) -> Option<String> {
        let Some(path) = Self::file_path(self.base_dir.clone()) else {
            return Some("notification-engagement-path-error".to_string());
        };

        if let Some(parent) = path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                log::warn!("could not create data directory: {}", err);
                return Some("notification-engagement-save-error".to_string());
            }
        }

        match fs::File::create(&path) {
            Ok(file) => {
                let writer = BufWriter::new(file);
                if let Err(err) = serde_json::to_writer(writer, &self.pages) {
                    log::warn!("could not save engagement: {}", err);
                    return Some("notification-engagement-save-error".to_string());
                }
                None
            }
            Err(err) => {
                log::warn!("could not save engagement: {}", err);
                Some("notification-engagement-save-error".to_string())
            }
        }
    }

    fn file_path(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(ENGAGEMENT_FILE);
            path
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use tempfile::tempdir;

    fn open_in(dir: &std::path::Path) -> EngagementStore {
        let (store, warning) = EngagementStore::open(Some(dir.to_path_buf()));
        assert!(warning.is_none(), "fresh dir should load silently");
        store
    }

    #[test]
    fn unknown_page_yields_default_record() {
        let temp_dir = tempdir().expect("temp dir");
        let store = open_in(temp_dir.path());

        let page = store.for_page("module-1");
        assert_eq!(page.likes, 0);
        assert!(!page.liked);
        assert!(page.comments.is_empty());
    }

    #[test]
    fn add_comment_stores_author_and_content() {
        let temp_dir = tempdir().expect("temp dir");
        let mut store = open_in(temp_dir.path());

        let warning = store.add_comment("module-1", "Alice", "hi");
        assert!(warning.is_none());

        let page = store.for_page("module-1");
        assert_eq!(page.comments.len(), 1);
        assert_eq!(page.comments[0].author, "Alice");
        assert_eq!(page.comments[0].content, "hi");
        assert!(
            DateTime::parse_from_rfc3339(&page.comments[0].date).is_ok(),
            "comment date should be well-formed ISO-8601"
        );
    }

    #[test]
    fn blank_author_defaults_to_anonymous() {
        let temp_dir = tempdir().expect("temp dir");
        let mut store = open_in(temp_dir.path());

        store.add_comment("module-1", "   ", "first!");
        let page = store.for_page("module-1");
        assert_eq!(page.comments[0].author, "Anonymous");
    }

    #[test]
    fn comment_ids_are_unique_and_increasing() {
        let temp_dir = tempdir().expect("temp dir");
        let mut store = open_in(temp_dir.path());

        for i in 0..5 {
            store.add_comment("module-2", "Bob", &format!("comment {}", i));
        }

        let page = store.for_page("module-2");
        let ids: Vec<i64> = page.comments.iter().map(|c| c.id).collect();
        for pair in ids.windows(2) {
            assert!(pair[1] > pair[0], "ids must be strictly increasing");
        }
    }

    #[test]
    fn sorted_comments_are_newest_first() {
        let temp_dir = tempdir().expect("temp dir");
        let mut store = open_in(temp_dir.path());

        store.add_comment("module-1", "A", "oldest");
        store.add_comment("module-1", "B", "middle");
        store.add_comment("module-1", "C", "newest");

        let sorted = store.sorted_comments("module-1");
        assert_eq!(sorted[0].content, "newest");
        assert_eq!(sorted[2].content, "oldest");
    }

    #[test]
    fn toggle_like_is_its_own_inverse() {
        let temp_dir = tempdir().expect("temp dir");
        let mut store = open_in(temp_dir.path());

        let original = store.for_page("module-4");

        let (after_first, _) = store.toggle_like("module-4");
        assert_eq!(after_first.likes, 1);
        assert!(after_first.liked);

        let (after_second, _) = store.toggle_like("module-4");
        assert_eq!(after_second.likes, original.likes);
        assert_eq!(after_second.liked, original.liked);
    }

    #[test]
    fn unlike_saturates_at_zero() {
        let temp_dir = tempdir().expect("temp dir");

        // Force an inconsistent state: liked with zero likes
        fs::write(
            temp_dir.path().join(ENGAGEMENT_FILE),
            r#"{"module-1":{"likes":0,"liked":true,"comments":[]}}"#,
        )
        .expect("write");
        let (mut store, _) = EngagementStore::open(Some(temp_dir.path().to_path_buf()));

        let (page, _) = store.toggle_like("module-1");
        assert_eq!(page.likes, 0);
        assert!(!page.liked);
    }

    #[test]
    fn engagement_survives_reopen() {
        let temp_dir = tempdir().expect("temp dir");
        {
            let mut store = open_in(temp_dir.path());
            store.add_comment("module-3", "Alice", "persisted");
            store.toggle_like("module-3");
        }

        let reopened = open_in(temp_dir.path());
        let page = reopened.for_page("module-3");
        assert_eq!(page.likes, 1);
        assert!(page.liked);
        assert_eq!(page.comments[0].content, "persisted");
    }

    #[test]
    fn corrupt_file_fails_open_with_warning() {
        let temp_dir = tempdir().expect("temp dir");
        fs::write(temp_dir.path().join(ENGAGEMENT_FILE), "{broken").expect("write");

        let (store, warning) = EngagementStore::open(Some(temp_dir.path().to_path_buf()));
        assert!(store.for_page("module-1").comments.is_empty());
        assert_eq!(
            warning,
            Some("notification-engagement-parse-error".to_string())
        );
    }

    #[test]
    fn pages_are_isolated_from_each_other() {
        let temp_dir = tempdir().expect("temp dir");
        let mut store = open_in(temp_dir.path());

        store.toggle_like("module-1");
        store.add_comment("module-2", "A", "only on two");

        assert_eq!(store.for_page("module-1").likes, 1);
        assert!(store.for_page("module-1").comments.is_empty());
        assert_eq!(store.for_page("module-2").likes, 0);
        assert_eq!(store.for_page("module-2").comments.len(), 1);
    }
}
