// SPDX-License-Identifier: MPL-2.0
//! Month-bucketed filtering for the video archive.
//!
//! Pure filter types without I/O. The home screen derives its month
//! dropdown from [`archive_months`] and narrows the catalog with
//! [`ArchiveFilter`].

use chrono::{Datelike, Month, NaiveDate};
use std::fmt;

use super::VideoItem;

/// A calendar month bucket, e.g. "July 2025".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ArchiveMonth {
    year: i32,
    /// 1-based month number (1 = January).
    month: u32,
}

impl ArchiveMonth {
    /// Creates a month bucket, returning `None` for month numbers
    /// outside 1..=12.
    #[must_use]
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    /// Returns the bucket containing the given date.
    #[must_use]
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    #[must_use]
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns `true` if the given date falls inside this month.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for ArchiveMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = Month::try_from(self.month as u8).map_or("?", |m| m.name());
        write!(f, "{} {}", name, self.year)
    }
}

/// Archive narrowing choice offered by the home screen dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArchiveFilter {
    /// Show the whole catalog.
    #[default]
    All,
    /// Show only videos published in the given month.
    Month(ArchiveMonth),
}

impl ArchiveFilter {
    /// Returns `true` if this filter matches the given video.
    #[must_use]
    pub fn matches(&self, video: &VideoItem) -> bool {
        match self {
            Self::All => true,
            Self::Month(month) => month.contains(video.published()),
        }
    }

    /// Applies the filter to a catalog, preserving order.
    #[must_use]
    pub fn apply<'a>(&self, videos: &'a [VideoItem]) -> Vec<&'a VideoItem> {
        videos.iter().filter(|v| self.matches(v)).collect()
    }
}

impl fmt::Display for ArchiveFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "All months"),
            Self::Month(month) => month.fmt(f),
        }
    }
}

/// Returns the distinct months present in the catalog, newest first.
#[must_use]
pub fn archive_months(videos: &[VideoItem]) -> Vec<ArchiveMonth> {
    let mut months: Vec<ArchiveMonth> = videos
        .iter()
        .map(|v| ArchiveMonth::containing(v.published()))
        .collect();
    months.sort_unstable();
    months.dedup();
    months.reverse();
    months
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(title: &str, year: i32, month: u32, day: u32) -> VideoItem {
        VideoItem::new(
            title,
            "https://example.com/v",
            NaiveDate::from_ymd_opt(year, month, day).unwrap(),
        )
    }

    #[test]
    fn new_rejects_invalid_month_numbers() {
        assert!(ArchiveMonth::new(2025, 0).is_none());
        assert!(ArchiveMonth::new(2025, 13).is_none());
        assert!(ArchiveMonth::new(2025, 12).is_some());
    }

    #[test]
    fn containing_buckets_by_year_and_month() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 14).unwrap();
        let bucket = ArchiveMonth::containing(date);
        assert_eq!(bucket.year(), 2025);
        assert_eq!(bucket.month(), 7);
        assert!(bucket.contains(date));
        assert!(!bucket.contains(NaiveDate::from_ymd_opt(2025, 6, 14).unwrap()));
        assert!(!bucket.contains(NaiveDate::from_ymd_opt(2024, 7, 14).unwrap()));
    }

    #[test]
    fn display_names_the_month() {
        let bucket = ArchiveMonth::new(2025, 7).unwrap();
        assert_eq!(bucket.to_string(), "July 2025");
    }

    #[test]
    fn all_filter_matches_everything() {
        let catalog = vec![video("a", 2025, 7, 1), video("b", 2024, 1, 31)];
        assert_eq!(ArchiveFilter::All.apply(&catalog).len(), 2);
    }

    #[test]
    fn month_filter_narrows_catalog() {
        let catalog = vec![
            video("july one", 2025, 7, 3),
            video("june", 2025, 6, 9),
            video("july two", 2025, 7, 18),
        ];

        let filter = ArchiveFilter::Month(ArchiveMonth::new(2025, 7).unwrap());
        let hits = filter.apply(&catalog);

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].title(), "july one");
        assert_eq!(hits[1].title(), "july two");
    }

    #[test]
    fn month_filter_distinguishes_same_month_across_years() {
        let catalog = vec![video("this year", 2025, 5, 2), video("last year", 2024, 5, 2)];

        let filter = ArchiveFilter::Month(ArchiveMonth::new(2025, 5).unwrap());
        let hits = filter.apply(&catalog);

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title(), "this year");
    }

    #[test]
    fn archive_months_are_unique_and_newest_first() {
        let catalog = vec![
            video("a", 2025, 5, 2),
            video("b", 2025, 7, 3),
            video("c", 2025, 7, 18),
            video("d", 2025, 6, 9),
        ];

        let months = archive_months(&catalog);
        assert_eq!(
            months,
            vec![
                ArchiveMonth::new(2025, 7).unwrap(),
                ArchiveMonth::new(2025, 6).unwrap(),
                ArchiveMonth::new(2025, 5).unwrap(),
            ]
        );
    }

    #[test]
    fn archive_months_of_empty_catalog_is_empty() {
        assert!(archive_months(&[]).is_empty());
    }
}
