//! Static copy for the home and about pages

/// Icon tag for a highlight card, resolved to a glyph by the UI layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureIcon {
    Star,
    Check,
    Lightbulb,
    Grid,
    Lightning,
    Code,
    BookOpen,
    Users,
    Award,
    Target,
    Rocket,
    CheckCircle,
}

pub struct Highlight {
    pub icon: FeatureIcon,
    pub title: &'static str,
    pub description: &'static str,
}

/// Id of a featured presentation. Featured items are not catalog entries, so
/// this never indexes into the catalog.
pub type FeaturedId = u32;

/// Presentation promoted on the home page (separate from the catalog list)
pub struct FeaturedPresentation {
    pub id: FeaturedId,
    pub title: &'static str,
    pub price: f64,
    pub thumbnail: &'static str,
    pub category: &'static str,
    pub description: &'static str,
}

pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
}

pub const HERO_TITLE: &str = "Elevate Your Presentations";
pub const HERO_SUBTITLE: &str = "Unlock professional-grade presentation templates that transform ideas into compelling visual stories";
pub const CTA_TITLE: &str = "Ready to Revolutionize Your Presentations?";
pub const CTA_BODY: &str = "Discover a world of professional, eye-catching presentation templates that tell your story with impact";

pub const CATALOG_TITLE: &str = "Presentation Catalog";
pub const CATALOG_SUBTITLE: &str = "Discover premium presentation templates that transform your ideas into compelling stories";

pub const ABOUT_TITLE: &str = "About Presentation Platform";
pub const ABOUT_SUBTITLE: &str =
    "Empowering professionals with high-quality, ready-to-use presentation templates";

pub const FEATURED: &[FeaturedPresentation] = &[
    FeaturedPresentation {
        id: 1,
        title: "Marketing Mastery",
        price: 29.0,
        thumbnail: "marketing-strategy.jpg",
        category: "Business Strategy",
        description: "Advanced marketing strategy blueprint for innovative businesses.",
    },
    FeaturedPresentation {
        id: 2,
        title: "Startup Launchpad",
        price: 39.0,
        thumbnail: "business-plan.jpg",
        category: "Entrepreneurship",
        description: "Comprehensive startup framework for visionary founders.",
    },
    FeaturedPresentation {
        id: 3,
        title: "Pitch Perfect",
        price: 45.0,
        thumbnail: "sales-pitch.jpg",
        category: "Sales Excellence",
        description: "Transformative pitch deck that captivates investors.",
    },
];

pub const HOME_FEATURES: &[Highlight] = &[
    Highlight {
        icon: FeatureIcon::Star,
        title: "Premium Quality",
        description: "Meticulously crafted templates by industry-leading designers",
    },
    Highlight {
        icon: FeatureIcon::Check,
        title: "Seamless Customization",
        description: "Fully adaptive templates that reflect your unique brand identity",
    },
    Highlight {
        icon: FeatureIcon::Lightbulb,
        title: "Creative Insights",
        description: "Built-in design tips to elevate your presentation game",
    },
];

pub const SELLING_POINTS: &[Highlight] = &[
    Highlight {
        icon: FeatureIcon::Grid,
        title: "Versatile Designs",
        description: "Templates that work across industries and presentation styles",
    },
    Highlight {
        icon: FeatureIcon::Lightning,
        title: "Quick Customization",
        description: "Easily modify colors, fonts, and layouts in minutes",
    },
    Highlight {
        icon: FeatureIcon::Code,
        title: "Modern Aesthetics",
        description: "Cutting-edge design principles built into every template",
    },
];

pub const RESOURCES: &[Highlight] = &[
    Highlight {
        icon: FeatureIcon::BookOpen,
        title: "Free Guides",
        description: "Comprehensive guides to improve your presentation skills",
    },
    Highlight {
        icon: FeatureIcon::Users,
        title: "Community Support",
        description: "24/7 support and a vibrant community of professionals",
    },
    Highlight {
        icon: FeatureIcon::Award,
        title: "Quality Guarantee",
        description: "100% satisfaction guarantee on all our templates",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah Johnson",
        role: "Marketing Director, Tech Innovations",
        quote: "These presentation templates transformed our pitch deck and helped us secure $2M in funding!",
    },
    Testimonial {
        name: "Michael Chen",
        role: "Startup Founder, DataSync",
        quote: "Incredibly professional designs that speak directly to our target investors.",
    },
    Testimonial {
        name: "Emily Rodriguez",
        role: "Sales Manager, Global Solutions",
        quote: "Our sales conversions increased by 40% after using these presentation templates.",
    },
];

pub const ABOUT_SECTIONS: &[Highlight] = &[
    Highlight {
        icon: FeatureIcon::Target,
        title: "Our Mission",
        description: "We aim to empower individuals and organizations by providing professionally crafted PowerPoint presentations that save time and boost productivity across various domains.",
    },
    Highlight {
        icon: FeatureIcon::Rocket,
        title: "Our Vision",
        description: "To become the go-to platform for professionals seeking high-quality, impactful presentation templates that help communicate ideas effectively.",
    },
];

pub const WHY_CHOOSE_US: &[Highlight] = &[
    Highlight {
        icon: FeatureIcon::Users,
        title: "Diverse Collection",
        description: "Presentations for every industry and need",
    },
    Highlight {
        icon: FeatureIcon::Award,
        title: "Professional Quality",
        description: "Designed by expert designers and professionals",
    },
    Highlight {
        icon: FeatureIcon::CheckCircle,
        title: "Easy to Use",
        description: "Simple customization and instant download",
    },
];

/// Featured presentations whose title or category contains `term`, ignoring case
pub fn filter_featured<'a>(
    items: &'a [FeaturedPresentation],
    term: &str,
) -> Vec<&'a FeaturedPresentation> {
    let term = term.to_lowercase();
    items
        .iter()
        .filter(|p| {
            term.is_empty()
                || p.title.to_lowercase().contains(&term)
                || p.category.to_lowercase().contains(&term)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(items: Vec<&FeaturedPresentation>) -> Vec<&'static str> {
        items.iter().map(|p| p.title).collect()
    }

    #[test]
    fn empty_term_keeps_everything_in_order() {
        assert_eq!(
            titles(filter_featured(FEATURED, "")),
            vec!["Marketing Mastery", "Startup Launchpad", "Pitch Perfect"]
        );
    }

    #[test]
    fn matches_title_or_category() {
        assert_eq!(titles(filter_featured(FEATURED, "pitch")), vec!["Pitch Perfect"]);
        assert_eq!(
            titles(filter_featured(FEATURED, "ENTREPRENEUR")),
            vec!["Startup Launchpad"]
        );
        assert!(filter_featured(FEATURED, "spreadsheet").is_empty());
    }

    #[test]
    fn featured_ids_are_unique() {
        let mut ids: Vec<FeaturedId> = FEATURED.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), FEATURED.len());
    }

    #[test]
    fn highlight_sections_are_populated() {
        for section in [HOME_FEATURES, SELLING_POINTS, RESOURCES, WHY_CHOOSE_US] {
            assert_eq!(section.len(), 3);
        }
        assert_eq!(ABOUT_SECTIONS.len(), 2);
        assert_eq!(TESTIMONIALS.len(), 3);
    }
}
