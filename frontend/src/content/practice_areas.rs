#[derive(Debug, PartialEq)]
pub struct InfoSection {
    pub title: &'static str,
    pub body: &'static [&'static str],
}

#[derive(Debug, PartialEq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct PracticeArea {
    pub slug: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
    pub hero_image: &'static str,
    pub overview: &'static str,
    pub sections: &'static [InfoSection],
    pub faqs: &'static [Faq],
    /// Subject line of the case evaluation email.
    pub evaluation_subject: &'static str,
}

impl PracticeArea {
    pub fn path(&self) -> String {
        format!("/practice-areas/{}", self.slug)
    }

    pub fn evaluation_path(&self) -> String {
        format!("/practice-areas/{}/case-evaluation", self.slug)
    }
}

pub const PRACTICE_AREAS: &[PracticeArea] = &[
    PracticeArea {
        slug: "car-accidents",
        name: "Car Accidents",
        tagline: "Injured in a collision? Get the full value of your claim.",
        hero_image: "/assets/car-accident-hero.jpg",
        overview: "California drivers injured by a negligent driver can recover medical costs, lost wages and compensation for pain and suffering. Insurance companies work to minimize payouts from the first phone call. We handle the insurers so you can focus on recovery.",
        sections: &[
            InfoSection {
                title: "What to Do After a Crash",
                body: &[
                    "Call 911 and get medical attention, even if you feel fine. Some injuries only show symptoms days later.",
                    "Photograph the vehicles, the road and your injuries. Collect names and contact details of witnesses.",
                    "Do not give a recorded statement to the other driver's insurer before speaking with a lawyer.",
                ],
            },
            InfoSection {
                title: "Compensation You May Recover",
                body: &[
                    "Past and future medical expenses, lost income and reduced earning capacity, property damage, and non-economic damages such as pain, suffering and loss of enjoyment of life.",
                ],
            },
        ],
        faqs: &[
            Faq {
                question: "How long do I have to file a car accident claim in California?",
                answer: "Generally two years from the date of injury. Claims against a government entity require written notice within six months.",
            },
            Faq {
                question: "What if I was partly at fault?",
                answer: "California follows pure comparative negligence. Your recovery is reduced by your share of fault, but you can still recover.",
            },
        ],
        evaluation_subject: "Car Accident Case Evaluation",
    },
    PracticeArea {
        slug: "railroad-accidents",
        name: "Railroad Accidents",
        tagline: "FELA claims and train accident injuries handled by trial lawyers.",
        hero_image: "/assets/railroad-hero-bg.jpg",
        overview: "Railroad workers, passengers and people hurt at grade crossings face powerful corporate defendants. Federal law gives injured railroad employees rights that differ from ordinary workers' compensation, and the deadlines are strict.",
        sections: &[
            InfoSection {
                title: "FELA Claims for Railroad Workers",
                body: &[
                    "The Federal Employers Liability Act covers railroad employees injured on the job. Unlike workers' compensation, FELA requires showing employer negligence but allows full compensation, including pain and suffering.",
                ],
            },
            InfoSection {
                title: "Grade Crossing and Passenger Injuries",
                body: &[
                    "Malfunctioning signals, obstructed sight lines and operator error cause many crossing collisions. Passengers injured on trains or at stations may also have claims against the operator.",
                ],
            },
        ],
        faqs: &[
            Faq {
                question: "What should I do immediately after a railroad accident?",
                answer: "Ensure your safety, call 911 and get medical attention. Document the scene, gather witness information and avoid giving statements to railroad representatives without legal counsel.",
            },
            Faq {
                question: "How long do I have to file?",
                answer: "FELA claims must be filed within three years of the injury. Passenger and third-party claims generally follow the two-year personal injury deadline.",
            },
        ],
        evaluation_subject: "Railroad Accident Case Evaluation",
    },
    PracticeArea {
        slug: "scaffolding-falls",
        name: "Scaffolding Falls",
        tagline: "Falls from height cause catastrophic injuries. We hold the responsible parties accountable.",
        hero_image: "/assets/scaffolding-case-evaluation-hero.jpg",
        overview: "Construction workers who fall from scaffolding often have claims beyond workers' compensation, against general contractors, equipment manufacturers and property owners who ignored safety rules.",
        sections: &[
            InfoSection {
                title: "Common Causes",
                body: &[
                    "Missing guardrails, defective planks, improper assembly, overloading and lack of fall protection training.",
                ],
            },
            InfoSection {
                title: "Third-Party Claims",
                body: &[
                    "When someone other than your employer contributed to the fall, a third-party lawsuit can recover damages workers' compensation does not pay, including pain and suffering.",
                ],
            },
        ],
        faqs: &[Faq {
            question: "Can I sue if I already receive workers' compensation?",
            answer: "You usually cannot sue your employer, but you may sue other negligent parties such as contractors, property owners or equipment makers.",
        }],
        evaluation_subject: "Scaffolding Falls Case Evaluation",
    },
    PracticeArea {
        slug: "defamation",
        name: "Defamation",
        tagline: "Protect your name and your business from false statements.",
        hero_image: "/assets/defamation-hero.jpg",
        overview: "False statements published online or spoken to others can destroy careers and businesses. California law allows victims of libel and slander to recover damages and, in some cases, to have the statements removed.",
        sections: &[
            InfoSection {
                title: "Libel and Slander",
                body: &[
                    "Libel is a false statement in fixed form, such as a post, review or article. Slander is spoken. Both require a false statement of fact, published to a third party, that caused harm.",
                ],
            },
            InfoSection {
                title: "Anti-SLAPP Motions",
                body: &[
                    "Defendants often respond with an anti-SLAPP motion. Preparing evidence early is essential to survive it.",
                ],
            },
        ],
        faqs: &[Faq {
            question: "How long do I have to bring a defamation claim?",
            answer: "One year from publication in most California cases.",
        }],
        evaluation_subject: "Defamation Case Evaluation",
    },
];

pub fn find(slug: &str) -> Option<&'static PracticeArea> {
    PRACTICE_AREAS.iter().find(|area| area.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn slugs_are_unique_and_url_safe() {
        let mut seen = HashSet::new();
        for area in PRACTICE_AREAS {
            assert!(seen.insert(area.slug), "duplicate slug {}", area.slug);
            assert!(area
                .slug
                .chars()
                .all(|c| c.is_ascii_lowercase() || c == '-'));
        }
    }

    #[test]
    fn find_by_slug() {
        let area = find("railroad-accidents").unwrap();
        assert_eq!(area.name, "Railroad Accidents");
        assert_eq!(area.path(), "/practice-areas/railroad-accidents");
        assert_eq!(
            area.evaluation_path(),
            "/practice-areas/railroad-accidents/case-evaluation"
        );
        assert!(find("space-law").is_none());
    }
}
