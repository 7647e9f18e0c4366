//! Visibility window
//!
//! The visible set is a pure function of the queue order and the
//! `max_visible_toasts` cap: the first `min(cap, len)` records. Within the
//! window, `index == total - 1` is the frontmost toast (depth 0).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::record::{ToastKey, ToastRecord};

/// Cap on how many toasts are visible at once
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMaxVisible", into = "RawMaxVisible")]
pub enum MaxVisible {
    Limited(usize),
    Unbounded,
}

impl MaxVisible {
    pub const DEFAULT: MaxVisible = MaxVisible::Limited(3);

    /// Window size for a queue of `len` toasts
    pub fn window(&self, len: usize) -> usize {
        match self {
            MaxVisible::Limited(cap) => len.min(*cap),
            MaxVisible::Unbounded => len,
        }
    }
}

impl Default for MaxVisible {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum RawMaxVisible {
    Count(usize),
    Keyword(String),
}

impl TryFrom<RawMaxVisible> for MaxVisible {
    type Error = String;

    fn try_from(raw: RawMaxVisible) -> Result<Self, Self::Error> {
        match raw {
            RawMaxVisible::Count(0) => Err("max_visible_toasts must be at least 1".to_string()),
            RawMaxVisible::Count(n) => Ok(MaxVisible::Limited(n)),
            RawMaxVisible::Keyword(k) if k == "unbounded" || k == "infinity" => {
                Ok(MaxVisible::Unbounded)
            }
            RawMaxVisible::Keyword(k) => Err(format!(
                "max_visible_toasts must be a positive integer or \"unbounded\", got \"{k}\""
            )),
        }
    }
}

impl From<MaxVisible> for RawMaxVisible {
    fn from(value: MaxVisible) -> Self {
        match value {
            MaxVisible::Limited(n) => RawMaxVisible::Count(n),
            MaxVisible::Unbounded => RawMaxVisible::Keyword("unbounded".to_string()),
        }
    }
}

/// A record together with its position in the visible window
#[derive(Clone, Debug, PartialEq)]
pub struct VisibleToast {
    pub record: ToastRecord,
    pub index: usize,
    pub total: usize,
}

impl VisibleToast {
    pub fn key(&self) -> ToastKey {
        self.record.key()
    }

    /// Distance from the front of the stack (0 = frontmost)
    pub fn depth(&self) -> usize {
        self.total - 1 - self.index
    }

    pub fn is_frontmost(&self) -> bool {
        self.index + 1 == self.total
    }
}

/// Ordered snapshot of the visible window
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VisibleSet {
    entries: SmallVec<[VisibleToast; 4]>,
}

impl VisibleSet {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VisibleToast> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = ToastKey> + '_ {
        self.entries.iter().map(VisibleToast::key)
    }

    pub fn get(&self, key: ToastKey) -> Option<&VisibleToast> {
        self.entries.iter().find(|t| t.key() == key)
    }

    pub fn contains(&self, key: ToastKey) -> bool {
        self.get(key).is_some()
    }

    pub fn frontmost(&self) -> Option<&VisibleToast> {
        self.entries.last()
    }

    pub fn as_slice(&self) -> &[VisibleToast] {
        &self.entries
    }
}

impl<'a> IntoIterator for &'a VisibleSet {
    type Item = &'a VisibleToast;
    type IntoIter = std::slice::Iter<'a, VisibleToast>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Compute the visible window over records already in queue order
pub fn visible_window<'a, I>(ordered: I, max: MaxVisible) -> VisibleSet
where
    I: ExactSizeIterator<Item = &'a ToastRecord>,
{
    let total = max.window(ordered.len());
    let entries = ordered
        .take(total)
        .enumerate()
        .map(|(index, record)| VisibleToast {
            record: record.clone(),
            index,
            total,
        })
        .collect();

    VisibleSet { entries }
}
