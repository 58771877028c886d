//! Static content tables for the site: navigation links, hero copy and the
//! services grid. Everything here is plain `const` data; components read it
//! directly and nothing is serialized.

pub struct NavItem {
    pub label: &'static str,
    pub section: &'static str,
}

pub const LOGO: &str = "CodeFlick";

/// Section ids in page order; the first one is the default active section.
pub const SECTION_IDS: [&str; 5] = ["home", "services", "projects", "about", "contact"];

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem { label: "Home", section: "home" },
    NavItem { label: "Services", section: "services" },
    NavItem { label: "Projects", section: "projects" },
    NavItem { label: "About", section: "about" },
    NavItem { label: "Contact", section: "contact" },
];

pub const NAV_CTA: NavItem = NavItem {
    label: "Get Started",
    section: "contact",
};

pub struct Stat {
    pub value: u32,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub struct HeroContent {
    pub badge: &'static str,
    pub title_main: &'static str,
    pub title_highlight: &'static str,
    pub description: &'static str,
    pub primary: NavItem,
    pub secondary: NavItem,
    pub stats: [Stat; 4],
}

pub const HERO: HeroContent = HeroContent {
    badge: "Innovation Meets Excellence",
    title_main: "Transforming Ideas Into Digital",
    title_highlight: "Experiences",
    description: "We craft exceptional digital solutions that blend cutting-edge \
        technology with stunning design, delivering results that exceed \
        expectations and drive business growth.",
    primary: NavItem { label: "Start Your Journey", section: "contact" },
    secondary: NavItem { label: "View Our Work", section: "projects" },
    stats: [
        Stat { value: 200, suffix: "+", label: "Projects Delivered" },
        Stat { value: 50, suffix: "+", label: "Happy Clients" },
        Stat { value: 5, suffix: "★", label: "Client Rating" },
        Stat { value: 24, suffix: "/7", label: "Support" },
    ],
};

pub struct Service {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub features: [&'static str; 4],
    pub starting_price: &'static str,
}

pub const SERVICES: [Service; 6] = [
    Service {
        id: "web-development",
        title: "Web Development",
        description: "Modern, responsive websites and web applications built with \
            cutting-edge technologies and best practices.",
        icon: "🌐",
        features: [
            "Responsive Design",
            "Performance Optimization",
            "SEO Friendly",
            "Modern Frameworks",
        ],
        starting_price: "$2,500",
    },
    Service {
        id: "mobile-development",
        title: "Mobile Development",
        description: "Native and cross-platform mobile applications that deliver \
            exceptional user experiences across all devices.",
        icon: "📱",
        features: [
            "Cross-Platform",
            "Native Performance",
            "Offline Support",
            "Push Notifications",
        ],
        starting_price: "$5,000",
    },
    Service {
        id: "ui-ux-design",
        title: "UI/UX Design",
        description: "Beautiful, intuitive designs that prioritize user experience \
            and drive engagement.",
        icon: "🎨",
        features: [
            "User Research",
            "Wireframing",
            "Prototyping",
            "Design Systems",
        ],
        starting_price: "$1,500",
    },
    Service {
        id: "ecommerce-solutions",
        title: "E-commerce Solutions",
        description: "Complete e-commerce platforms that drive sales and provide \
            seamless shopping experiences.",
        icon: "🛒",
        features: [
            "Payment Integration",
            "Inventory Management",
            "Analytics Dashboard",
            "Multi-platform Support",
        ],
        starting_price: "$3,500",
    },
    Service {
        id: "digital-marketing",
        title: "Digital Marketing",
        description: "Comprehensive digital marketing strategies that boost your \
            online presence and drive growth.",
        icon: "📈",
        features: [
            "SEO Optimization",
            "Social Media Management",
            "Content Marketing",
            "Analytics & Reporting",
        ],
        starting_price: "$800",
    },
    Service {
        id: "cloud-solutions",
        title: "Cloud Solutions",
        description: "Scalable cloud infrastructure and deployment solutions for \
            modern applications.",
        icon: "☁️",
        features: [
            "Auto Scaling",
            "High Availability",
            "Security Compliance",
            "Cost Optimization",
        ],
        starting_price: "$150",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn section_ids_are_unique_and_non_empty() {
        assert!(!SECTION_IDS.is_empty());
        let unique: HashSet<_> = SECTION_IDS.iter().collect();
        assert_eq!(unique.len(), SECTION_IDS.len());
    }

    #[test]
    fn every_nav_item_targets_a_registered_section() {
        for item in &NAV_ITEMS {
            assert!(
                SECTION_IDS.contains(&item.section),
                "nav item {:?} points at unknown section {:?}",
                item.label,
                item.section
            );
        }
        assert!(SECTION_IDS.contains(&NAV_CTA.section));
        assert!(SECTION_IDS.contains(&HERO.primary.section));
        assert!(SECTION_IDS.contains(&HERO.secondary.section));
    }

    #[test]
    fn service_ids_are_unique() {
        let unique: HashSet<_> = SERVICES.iter().map(|s| s.id).collect();
        assert_eq!(unique.len(), SERVICES.len());
    }
}
