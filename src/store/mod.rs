// SPDX-License-Identifier: MPL-2.0
//! Local persistence for the two interaction stores.
//!
//! Both stores are plain JSON files in the application data directory,
//! owned exclusively by the running process. Reads are fail-open: a missing
//! or unparseable file yields the documented default plus a warning key the
//! caller can surface as a notification. Writes that fail are logged and
//! reported the same way; the session continues with in-memory state only.
//!
//! There is no locking. Writes originate from the single UI update loop, so
//! read-modify-write with last-write-wins is sufficient.

pub mod engagement;
pub mod progress;

pub use engagement::{Comment, EngagementStore, PageEngagement};
pub use progress::{ProgressRecord, ProgressStore};
