use chrono::NaiveDate;

#[derive(Debug, PartialEq)]
pub struct BlogPost {
    pub slug: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    /// ISO date, `YYYY-MM-DD`.
    pub published: &'static str,
    pub category: &'static str,
    pub read_time: &'static str,
    pub body: &'static [&'static str],
}

impl BlogPost {
    pub fn published_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.published, "%Y-%m-%d").ok()
    }

    /// `Oct 5, 2025`
    pub fn display_date(&self) -> String {
        self.published_on()
            .map(|date| date.format("%b %-d, %Y").to_string())
            .unwrap_or_else(|| self.published.to_string())
    }
}

pub const BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        slug: "true-cost-of-car-accidents",
        title: "The True Cost of Car Accidents: Beyond the Initial Impact",
        excerpt: "Car accidents create financial burdens that extend far beyond immediate medical bills: lost wages, rehabilitation and long-term care.",
        published: "2025-10-03",
        category: "Auto Accidents",
        read_time: "6 min read",
        body: &[
            "The first medical bill is rarely the largest. Physical therapy, follow-up imaging and time away from work often cost more than the emergency room visit.",
            "Keep every receipt and record every missed shift. A claim can only recover the losses you can document.",
        ],
    },
    BlogPost {
        slug: "understanding-california-personal-injury-law",
        title: "Understanding California Personal Injury Law: Your Rights After an Accident",
        excerpt: "Your right to compensation, the statute of limitations, and how to navigate the claims process.",
        published: "2025-10-05",
        category: "Legal Insights",
        read_time: "7 min read",
        body: &[
            "Most California personal injury claims must be filed within two years. Claims against public entities require notice within six months.",
            "California's comparative negligence rule lets you recover even when you share some of the blame.",
        ],
    },
    BlogPost {
        slug: "navigating-insurance-companies",
        title: "Navigating Insurance Companies After an Accident",
        excerpt: "Insurers have one goal: minimizing payouts. Why you should not accept the first offer.",
        published: "2025-09-27",
        category: "Insurance Claims",
        read_time: "7 min read",
        body: &[
            "Adjusters are trained to settle quickly and cheaply. A recorded statement given too early can be used to dispute your injuries later.",
        ],
    },
    BlogPost {
        slug: "medical-documentation-critical",
        title: "Why Medical Documentation is Critical in Personal Injury Cases",
        excerpt: "What records you need, how to obtain them, and why timely treatment matters.",
        published: "2025-09-30",
        category: "Case Strategy",
        read_time: "8 min read",
        body: &[
            "Gaps in treatment are the insurer's favorite argument. Follow your doctor's plan and keep copies of every visit summary.",
        ],
    },
];

pub fn find(slug: &str) -> Option<&'static BlogPost> {
    BLOG_POSTS.iter().find(|post| post.slug == slug)
}

/// Newest first.
pub fn latest(count: usize) -> Vec<&'static BlogPost> {
    let mut posts: Vec<&'static BlogPost> = BLOG_POSTS.iter().collect();
    posts.sort_by(|a, b| b.published_on().cmp(&a.published_on()));
    posts.truncate(count);
    posts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_post_has_a_valid_date() {
        for post in BLOG_POSTS {
            assert!(post.published_on().is_some(), "{} has a bad date", post.slug);
        }
    }

    #[test]
    fn display_date_is_short_month_format() {
        let post = find("understanding-california-personal-injury-law").unwrap();
        assert_eq!(post.display_date(), "Oct 5, 2025");
    }

    #[test]
    fn latest_is_newest_first() {
        let slugs: Vec<&str> = latest(3).iter().map(|post| post.slug).collect();
        assert_eq!(
            slugs,
            vec![
                "understanding-california-personal-injury-law",
                "true-cost-of-car-accidents",
                "medical-documentation-critical",
            ]
        );
        assert_eq!(latest(100).len(), BLOG_POSTS.len());
    }
}
