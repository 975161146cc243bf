//! Marketing content of the Cloudom Systems site.
//!
//! These constants are the single source for the support knowledge base.

/// Company display name.
pub const COMPANY_NAME: &str = "Cloudom Systems";

/// A service offered by the agency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// An industry the agency serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Industry {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// A portfolio case study.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub problem: Option<&'static str>,
    pub solution: Option<&'static str>,
    pub outcome: Option<&'static str>,
    pub tech_stack: &'static [&'static str],
}

/// A single priced package inside a [`PricingSection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingCard {
    pub title: &'static str,
    pub price: &'static str,
    pub subtitle: &'static str,
    pub features: &'static [&'static str],
}

/// A group of pricing cards, titled `"<title> <highlight_word>"` on the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingSection {
    pub id: &'static str,
    pub title: &'static str,
    pub highlight_word: &'static str,
    pub cards: &'static [PricingCard],
}

/// Landing page hero copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroContent {
    pub headline_start: &'static str,
    pub headline_end: &'static str,
    pub subheadline: &'static str,
}

/// About section copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AboutContent {
    pub p1: &'static str,
    pub p2: &'static str,
}

/// Public contact details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactInfo {
    pub email: &'static str,
    pub address: &'static str,
    pub website: &'static str,
}

pub const CONTACT: ContactInfo = ContactInfo {
    email: "hello@cloudomsystems.com",
    address: "Block 1 Flat 5, Ijebu Ode Close, Area 2. Garki Abuja",
    website: "https://www.cloudomsystems.com",
};

pub const HERO_CONTENT: HeroContent = HeroContent {
    headline_start: "We craft digital",
    headline_end: "experiences that matter",
    subheadline: "Strategy, design and engineering for ambitious brands. We turn bold ideas into fast, beautiful products people love to use.",
};

pub const ABOUT_CONTENT: AboutContent = AboutContent {
    p1: "We are a team of strategists, designers and engineers who partner with startups and enterprises to plan, build and grow digital products.",
    p2: "From the first workshop to launch and beyond, we focus on measurable outcomes, clean engineering and interfaces that feel effortless.",
};

pub const SERVICES: &[Service] = &[
    Service {
        id: "1",
        title: "Digital Strategy",
        description: "Data-driven roadmaps to navigate the digital landscape and achieve business goals.",
    },
    Service {
        id: "2",
        title: "Web Development",
        description: "High-performance, scalable web applications built with modern technologies.",
    },
    Service {
        id: "3",
        title: "UI/UX Design",
        description: "Immersive, user-centric designs that delight and engage your audience.",
    },
    Service {
        id: "4",
        title: "Mobile Apps",
        description: "Native and cross-platform mobile solutions for iOS and Android.",
    },
];

pub const INDUSTRIES: &[Industry] = &[
    Industry {
        id: "fintech",
        name: "Fintech",
        description: "Secure dashboards, payment flows and lending platforms.",
    },
    Industry {
        id: "healthcare",
        name: "Healthcare",
        description: "Patient portals, telehealth booking and compliant records tooling.",
    },
    Industry {
        id: "ecommerce",
        name: "E-commerce",
        description: "Storefronts, checkout optimization and inventory integrations.",
    },
    Industry {
        id: "education",
        name: "Education",
        description: "Learning platforms, course delivery and student engagement tools.",
    },
    Industry {
        id: "real-estate",
        name: "Real Estate",
        description: "Listing portals, virtual tours and agent CRM workflows.",
    },
    Industry {
        id: "logistics",
        name: "Logistics",
        description: "Fleet tracking, dispatch consoles and delivery notifications.",
    },
];

pub const PORTFOLIO: &[Project] = &[
    Project {
        id: "1",
        title: "Nebula Finance",
        category: "web",
        description: "A next-gen decentralized finance dashboard with real-time analytics.",
        problem: None,
        solution: None,
        outcome: None,
        tech_stack: &[],
    },
    Project {
        id: "2",
        title: "Aero Fitness",
        category: "mobile",
        description: "Social fitness tracking application with AR workout guides.",
        problem: None,
        solution: None,
        outcome: None,
        tech_stack: &[],
    },
    Project {
        id: "3",
        title: "Lumina Brand",
        category: "branding",
        description: "Complete brand identity overhaul for a renewable energy startup.",
        problem: None,
        solution: None,
        outcome: None,
        tech_stack: &[],
    },
    Project {
        id: "4",
        title: "Orbit Market",
        category: "marketing",
        description: "Omnichannel marketing campaign resulting in 300% ROI.",
        problem: None,
        solution: None,
        outcome: None,
        tech_stack: &[],
    },
    Project {
        id: "5",
        title: "Zenith Architecture",
        category: "web",
        description: "Minimalist portfolio site for an award-winning architecture firm.",
        problem: None,
        solution: None,
        outcome: None,
        tech_stack: &[],
    },
    Project {
        id: "6",
        title: "Echo Stream",
        category: "mobile",
        description: "Music streaming service with AI-powered personalized playlists.",
        problem: None,
        solution: None,
        outcome: None,
        tech_stack: &[],
    },
];

pub const PRICING_SECTIONS: &[PricingSection] = &[
    PricingSection {
        id: "web-dev",
        title: "Web",
        highlight_word: "Development",
        cards: &[
            PricingCard {
                title: "Standard Website Package",
                price: "$2,000 - $3,000",
                subtitle: "(one-time project fee) Timeline: 2-4 weeks",
                features: &[
                    "WordPress or custom HTML/CSS website (up to 7 pages)",
                    "Mobile responsive design",
                    "Basic SEO optimization",
                    "Contact forms & Google Analytics",
                    "2 rounds of revisions",
                    "Custom UI Designs Using Figma",
                ],
            },
            PricingCard {
                title: "Advanced Website Package",
                price: "$4,000 - $15,000",
                subtitle: "(one-time project fee) Timeline: 6-10 weeks",
                features: &[
                    "WordPress or custom development (up to 15 pages)",
                    "Advanced responsive design",
                    "Enhanced SEO optimization",
                    "E-commerce functionality (if needed)",
                    "Interactive elements",
                    "3 rounds of revisions",
                    "Custom UI Designs Using Figma",
                ],
            },
            PricingCard {
                title: "Shopify Store",
                price: "$2,000 - $5,000",
                subtitle: "(one-time project fee)",
                features: &[
                    "Custom E-commerce: $15,000 - $40,000 (one-time project fee)",
                    "Payment gateway integration: $500 per gateway",
                    "Inventory management: $1,500",
                    "Customer loyalty programs: $2,000",
                ],
            },
        ],
    },
    PricingSection {
        id: "mobile-app",
        title: "Mobile App",
        highlight_word: "Development",
        cards: &[
            PricingCard {
                title: "MVP Mobile App",
                price: "$15,000 - $25,000",
                subtitle: "(one-time project fee)",
                features: &[
                    "iOS or Android platform",
                    "Core functionality",
                    "Basic UI/UX design",
                    "Backend integration",
                    "App Store submission",
                ],
            },
            PricingCard {
                title: "Professional Mobile App",
                price: "$30,000 - $60,000",
                subtitle: "(one-time project fee)",
                features: &[
                    "Cross-platform development",
                    "Advanced UI/UX design",
                    "Full backend integration",
                    "Authentication systems",
                    "Push notifications",
                    "Analytics",
                ],
            },
            PricingCard {
                title: "Enterprise Mobile Solutions",
                price: "Starting from $75,000+",
                subtitle: "Custom quote based on requirements",
                features: &[
                    "Native development for all platforms",
                    "Custom backend development",
                    "Third-party integrations",
                    "Advanced security features",
                    "Scalable architecture",
                ],
            },
        ],
    },
    PricingSection {
        id: "ai-solutions",
        title: "AI",
        highlight_word: "Solutions",
        cards: &[
            PricingCard {
                title: "Basic AI Implementation",
                price: "$5,000 - $10,000",
                subtitle: "(one-time fee)",
                features: &[
                    "Single OpenAI API integration",
                    "Basic prompt engineering",
                    "Simple user interface",
                    "Backend integration",
                    "App Store submission",
                ],
            },
            PricingCard {
                title: "Advanced AI Implementation",
                price: "$15,000 - $30,000",
                subtitle: "(one-time fee)",
                features: &[
                    "Multiple AI model integrations",
                    "Complex prompt engineering",
                    "Custom user interfaces",
                    "Basic analytics",
                ],
            },
            PricingCard {
                title: "AI Startup MVP",
                price: "$20,000 - $50,000",
                subtitle: "",
                features: &[
                    "Requirements analysis",
                    "Core feature development",
                    "Basic design implementation",
                    "Minimal viable deployment",
                ],
            },
        ],
    },
    PricingSection {
        id: "programmatic-seo",
        title: "Programmatic",
        highlight_word: "SEO",
        cards: &[
            PricingCard {
                title: "Starter SEO",
                price: "$2,997",
                subtitle: "",
                features: &[
                    "Automated keyword research (long-tail focus)",
                    "10 programmatically generated landing pages",
                    "On-page SEO optimization",
                    "Monthly SEO performance report",
                ],
            },
            PricingCard {
                title: "Growth SEO",
                price: "$5,997",
                subtitle: "",
                features: &[
                    "Automated keyword clusters (100+ keywords)",
                    "50 programmatic landing pages",
                    "Schema markup implementation",
                    "Internal linking automation",
                    "Bi-weekly performance reports",
                ],
            },
            PricingCard {
                title: "Enterprise SEO",
                price: "$15,997",
                subtitle: "",
                features: &[
                    "End-to-end programmatic SEO setup",
                    "Unlimited landing page generation",
                    "Custom database + CMS integration",
                    "Technical SEO audits & fixes",
                    "Dedicated account manager",
                    "Weekly strategy calls",
                ],
            },
        ],
    },
    PricingSection {
        id: "branding-design",
        title: "Branding",
        highlight_word: "Design",
        cards: &[
            PricingCard {
                title: "Basic Branding Design",
                price: "$1,997",
                subtitle: "",
                features: &[
                    "Logo & color palette",
                    "Typography recommendations",
                    "1-page brand sheet",
                    "Delivery in 5-7 days",
                ],
            },
            PricingCard {
                title: "Advanced Branding Design",
                price: "$4,997",
                subtitle: "",
                features: &[
                    "Logo, colors, typography, iconography",
                    "Brand voice guidelines",
                    "5-page brand guide (PDF)",
                    "3 rounds of revisions",
                ],
            },
            PricingCard {
                title: "Enterprise Branding Design",
                price: "$12,997",
                subtitle: "",
                features: &[
                    "Full brand strategy document",
                    "Complete visual identity system",
                    "Brand book (10+ pages)",
                    "Brand usage templates (social, print, etc.)",
                ],
            },
        ],
    },
    PricingSection {
        id: "product-design",
        title: "Product",
        highlight_word: "Design",
        cards: &[
            PricingCard {
                title: "Basic Product Design",
                price: "$1,497",
                subtitle: "",
                features: &[
                    "Wireframes for 2 screens/pages",
                    "1 revision",
                    "Delivery in 5 days",
                    "PNG exports only",
                ],
            },
            PricingCard {
                title: "Advanced Product Design",
                price: "$3,997",
                subtitle: "",
                features: &[
                    "High-fidelity UI for 5 screens",
                    "3 revisions",
                    "Clickable prototype (Figma/Adobe XD)",
                    "Design system components included",
                ],
            },
            PricingCard {
                title: "Enterprise Product Design",
                price: "$8,997",
                subtitle: "",
                features: &[
                    "End-to-end design of 10+ screens",
                    "Unlimited revisions",
                    "Design collaboration & dev handoff",
                    "Responsive/mobile-ready design",
                ],
            },
        ],
    },
    PricingSection {
        id: "logo-designs",
        title: "Logo",
        highlight_word: "Designs",
        cards: &[
            PricingCard {
                title: "Basic Logo Design",
                price: "$1,497",
                subtitle: "",
                features: &[
                    "Single logo concept",
                    "2 revisions",
                    "High-resolution PNG & JPEG",
                    "Delivery in 3 days",
                ],
            },
            PricingCard {
                title: "Advanced Logo Design",
                price: "$3,497",
                subtitle: "",
                features: &[
                    "4 initial logo concepts",
                    "4 revisions",
                    "Vector files (AI, EPS, SVG) included",
                    "Transparent and dark/light background versions",
                ],
            },
            PricingCard {
                title: "Enterprise Logo Design",
                price: "$7,997",
                subtitle: "",
                features: &[
                    "6+ logo concepts",
                    "Full revisions",
                    "Complete brand style guide",
                    "Social media-ready logo versions",
                ],
            },
        ],
    },
    PricingSection {
        id: "graphics-designs",
        title: "Graphics",
        highlight_word: "Designs",
        cards: &[
            PricingCard {
                title: "Basic Design",
                price: "$997",
                subtitle: "",
                features: &[
                    "3 design assets",
                    "2 revisions per design",
                    "Standard resolution (72 DPI for web)",
                    "Delivery in 3-5 days",
                ],
            },
            PricingCard {
                title: "Advanced Graphics Design",
                price: "$2,497",
                subtitle: "",
                features: &[
                    "6 design assets",
                    "5 revisions per design",
                    "Print-ready files (300 DPI)",
                    "Source files included (PSD, AI)",
                ],
            },
            PricingCard {
                title: "Enterprise Graphics Design",
                price: "$5,997",
                subtitle: "",
                features: &[
                    "10+ design assets",
                    "Full revisions",
                    "Priority delivery",
                    "Multi-format exports for web & print",
                    "Social media-ready versions",
                ],
            },
        ],
    },
    PricingSection {
        id: "cloud-infrastructure",
        title: "Cloud &",
        highlight_word: "Infrastructure Services",
        cards: &[
            PricingCard {
                title: "Cloud Setup (One-time Fees)",
                price: "$2,500 - $5,000",
                subtitle: "Basic Cloud Setup",
                features: &[
                    "Advanced Cloud Architecture: $7,500 - $15,000",
                    "Enterprise Cloud Migration: $20,000+",
                ],
            },
            PricingCard {
                title: "Amazon SES Email Setup",
                price: "$1,000",
                subtitle: "(up to 10,000 emails/month)",
                features: &[
                    "Standard Setup: $2,500 (up to 100,000 emails/month)",
                    "Enterprise Setup: $5,000+ (millions of emails/month)",
                ],
            },
            PricingCard {
                title: "Cloud Management (Monthly Subscription)",
                price: "$500 /month",
                subtitle: "Basic Monitoring",
                features: &[
                    "Standard Management: $1,500 /month",
                    "Premium Management: $3,000 /month",
                    "Enterprise Management: $5,000+ /month",
                ],
            },
        ],
    },
    PricingSection {
        id: "strategic-packages",
        title: "Strategic",
        highlight_word: "Packages",
        cards: &[
            PricingCard {
                title: "Startup MVP",
                price: "$20,000 - $40,000",
                subtitle: "",
                features: &[
                    "Requirements analysis",
                    "Core feature development",
                    "Basic design implementation",
                    "Minimal viable deployment",
                ],
            },
            PricingCard {
                title: "Growth MVP",
                price: "$45,000 - $75,000",
                subtitle: "",
                features: &[
                    "Enhanced feature set",
                    "Polished UI/UX",
                    "Scalable architecture",
                    "Analytics integration",
                ],
            },
            PricingCard {
                title: "Enterprise MVP",
                price: "$80,000+",
                subtitle: "",
                features: &[
                    "Full-feature development",
                    "Custom integrations",
                    "Advanced security",
                    "Deployment strategy",
                ],
            },
        ],
    },
    PricingSection {
        id: "custom-enterprise",
        title: "Custom",
        highlight_word: "Enterprise Solutions",
        cards: &[PricingCard {
            title: "Enterprise Engagement",
            price: "Starting at $50,000",
            subtitle: "For large-scale enterprise projects requiring multiple services and ongoing development, we offer custom quotes based on detailed requirements analysis.",
            features: &["Ongoing Development: Custom retainer packages"],
        }],
    },
];
