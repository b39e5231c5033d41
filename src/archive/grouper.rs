use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use tracing::warn;

use crate::api::Post;

/// Month names as rendered by the archive, indexed by month number - 1.
const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Chronological archive index: years, newest first, each holding its
/// months in calendar-descending order, each month holding its posts
/// newest first.
///
/// A pure function of the input post list; rebuild it whenever the
/// source collection changes.
#[derive(Debug, Clone, PartialEq)]
pub struct ChronoIndex {
    pub years: Vec<YearGroup>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct YearGroup {
    pub year: i32,
    pub months: Vec<MonthGroup>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthGroup {
    /// 1-based calendar month number. Ordering uses this, never the name.
    pub month: u32,
    pub name: &'static str,
    pub posts: Vec<Post>,
}

impl ChronoIndex {
    /// Build the index with today's calendar year as the always-present
    /// heading year.
    pub fn from_posts(posts: &[Post]) -> Self {
        Self::build(posts, Utc::now().year())
    }

    /// Build the index. `current_year` always appears in the output,
    /// with an empty month list when no post falls in it.
    ///
    /// Posts with a missing or unparseable `created_at` are excluded;
    /// grouping itself never fails.
    pub fn build(posts: &[Post], current_year: i32) -> Self {
        let mut dated: Vec<(NaiveDateTime, &Post)> = Vec::with_capacity(posts.len());
        for post in posts {
            match post.created_at.as_deref().and_then(parse_timestamp) {
                Some(ts) => dated.push((ts, post)),
                None => {
                    warn!(slug = %post.slug, "excluding post with unparseable created_at");
                }
            }
        }

        // Stable sort: equal timestamps keep their original relative order.
        dated.sort_by(|a, b| b.0.cmp(&a.0));

        let mut years: Vec<YearGroup> = Vec::new();
        for (ts, post) in dated {
            let year = ts.year();
            let month = ts.month();

            let yi = match years.iter().position(|g| g.year == year) {
                Some(i) => i,
                None => {
                    years.push(YearGroup {
                        year,
                        months: Vec::new(),
                    });
                    years.len() - 1
                }
            };

            let months = &mut years[yi].months;
            let mi = match months.iter().position(|m| m.month == month) {
                Some(i) => i,
                None => {
                    months.push(MonthGroup {
                        month,
                        name: MONTH_NAMES[(month - 1) as usize],
                        posts: Vec::new(),
                    });
                    months.len() - 1
                }
            };

            months[mi].posts.push(post.clone());
        }

        // Input was iterated newest-first, so buckets are already sorted;
        // the year and month lists still need their own ordering.
        years.sort_by(|a, b| b.year.cmp(&a.year));
        for year in &mut years {
            year.months.sort_by(|a, b| b.month.cmp(&a.month));
        }

        if !years.iter().any(|g| g.year == current_year) {
            let at = years
                .iter()
                .position(|g| g.year < current_year)
                .unwrap_or(years.len());
            years.insert(
                at,
                YearGroup {
                    year: current_year,
                    months: Vec::new(),
                },
            );
        }

        Self { years }
    }

    /// Total number of posts in the index.
    pub fn post_count(&self) -> usize {
        self.years
            .iter()
            .flat_map(|y| &y.months)
            .map(|m| m.posts.len())
            .sum()
    }

    pub fn year(&self, year: i32) -> Option<&YearGroup> {
        self.years.iter().find(|g| g.year == year)
    }
}

impl YearGroup {
    pub fn month(&self, name: &str) -> Option<&MonthGroup> {
        self.months.iter().find(|m| m.name == name)
    }
}

/// Previous/next posts by list position, for prev/next navigation on a
/// post page. `None` at either end, both `None` for an unknown slug.
pub fn adjacent<'a>(posts: &'a [Post], slug: &str) -> (Option<&'a Post>, Option<&'a Post>) {
    let Some(index) = posts.iter().position(|p| p.slug == slug) else {
        return (None, None);
    };
    let prev = index.checked_sub(1).map(|i| &posts[i]);
    let next = posts.get(index + 1);
    (prev, next)
}

/// Timestamp formats the API has been seen emitting: RFC 3339 with
/// offset, naive datetime, bare date.
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    None
}
