//! Built-in Escape Epic content.

use super::model::{NavLink, Page, PageKind, Section, Slide};
use super::Router;

/// Every page of the site plus the shared navigation list.
#[derive(Debug, Clone)]
pub struct SiteCatalog {
    pages: Vec<Page>,
    nav: Vec<NavLink>,
    not_found: Page,
    contact_line: String,
}

const AGENCY_CONTACT: &str = "hello@escapeepic.travel · +1 555 0142";

impl SiteCatalog {
    pub fn new(pages: Vec<Page>, nav: Vec<NavLink>) -> Self {
        Self {
            pages,
            nav,
            not_found: not_found_page(),
            contact_line: String::new(),
        }
    }

    /// The travel agency site as shipped.
    pub fn escape_epic() -> Self {
        let mut pages = vec![home_page(), destination_index(), blog_index()];
        pages.extend(destinations());
        pages.extend(articles());
        pages.push(about_page());
        pages.push(contact_page());
        Self::new(pages, nav_links()).with_contact_line(AGENCY_CONTACT)
    }

    /// Agency contact details shown in the site footer.
    pub fn with_contact_line(mut self, line: impl Into<String>) -> Self {
        self.contact_line = line.into();
        self
    }

    /// Replaces the home page hero. An empty list leaves the built-in one.
    pub fn with_home_hero(mut self, slides: Vec<Slide>) -> Self {
        if slides.is_empty() {
            return self;
        }
        if let Some(home) = self.pages.iter_mut().find(|p| p.kind == PageKind::Home) {
            home.hero = slides;
        }
        self
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn paths(&self) -> Vec<&str> {
        self.pages.iter().map(|p| p.path.as_str()).collect()
    }

    pub fn nav_links(&self) -> &[NavLink] {
        &self.nav
    }

    pub fn contact_line(&self) -> &str {
        &self.contact_line
    }

    pub fn page_or_not_found(&self, path: &str) -> &Page {
        self.resolve(path).unwrap_or(&self.not_found)
    }
}

impl Router for SiteCatalog {
    fn resolve(&self, path: &str) -> Option<&Page> {
        let path = normalize(path);
        self.pages.iter().find(|p| p.path == path)
    }
}

/// Strips a trailing slash so "/about/" and "/about" resolve alike.
fn normalize(path: &str) -> &str {
    if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    }
}

fn nav_links() -> Vec<NavLink> {
    vec![
        NavLink::new("Home", "/"),
        NavLink::new("Destinations", "/destinations"),
        NavLink::new("Blog", "/blog"),
        NavLink::new("About", "/about"),
        NavLink::new("Contact", "/contact"),
    ]
}

fn home_page() -> Page {
    Page {
        path: "/".to_string(),
        title: "Escape Epic".to_string(),
        kind: PageKind::Home,
        hero: vec![
            Slide::new("/images/hero/thailand-islands.jpg", "Island hop through Thailand")
                .with_subtitle("Longtail boats, limestone cliffs, night markets")
                .with_call_to_action("Explore Thailand", "/destinations/thailand"),
            Slide::new("/images/hero/japan-kyoto.jpg", "Autumn in Kyoto")
                .with_subtitle("Temples, tea houses and maple-lit gardens")
                .with_call_to_action("Explore Japan", "/destinations/japan"),
            Slide::new("/images/hero/italy-amalfi.jpg", "Slow summers on the Amalfi Coast")
                .with_subtitle("Lemon groves and cliffside villages")
                .with_call_to_action("Explore Italy", "/destinations/italy"),
        ],
        sections: vec![
            Section::new(
                "Travel that feels like a story",
                &["We plan small-group and tailor-made journeys for people who would rather \
                   wander a market than queue for a landmark."],
            ),
            Section::new(
                "Why Escape Epic",
                &[
                    "Local guides in every country we sell.",
                    "Flexible itineraries you can change up to two weeks before departure.",
                    "A human on the phone, day or night, while you travel.",
                ],
            ),
            Section::new(
                "From the blog",
                &["Packing lists, visa notes and the street food worth crossing town for."],
            ),
        ],
    }
}

fn destination_index() -> Page {
    Page {
        path: "/destinations".to_string(),
        title: "Destinations".to_string(),
        kind: PageKind::DestinationIndex,
        hero: Vec::new(),
        sections: vec![
            Section::new("Asia", &["Thailand", "Japan"]),
            Section::new("Europe", &["Italy", "Iceland"]),
            Section::new("South America", &["Peru"]),
        ],
    }
}

struct Destination {
    slug: &'static str,
    name: &'static str,
    tagline: &'static str,
    slides: [(&'static str, &'static str); 2],
    best_time: &'static str,
    highlights: [&'static str; 3],
}

fn destinations() -> Vec<Page> {
    let entries = [
        Destination {
            slug: "thailand",
            name: "Thailand",
            tagline: "Beaches, temples and the best street food on earth",
            slides: [
                ("/images/thailand/phi-phi.jpg", "Phi Phi at sunrise"),
                ("/images/thailand/chiang-mai.jpg", "Lantern night in Chiang Mai"),
            ],
            best_time: "November to March, when the monsoon has passed.",
            highlights: [
                "Kayak the sea caves of Phang Nga Bay.",
                "Cook khao soi with a family in Chiang Mai.",
                "Sleep in a floating bungalow on Cheow Lan Lake.",
            ],
        },
        Destination {
            slug: "japan",
            name: "Japan",
            tagline: "Neon cities and quiet mountain inns",
            slides: [
                ("/images/japan/fuji.jpg", "Fuji from Lake Kawaguchi"),
                ("/images/japan/tokyo.jpg", "Shibuya after dark"),
            ],
            best_time: "Late March for blossoms, November for autumn colour.",
            highlights: [
                "Walk the Kumano Kodo between family-run ryokan.",
                "Eat your way through Osaka's Dotonbori.",
                "Catch the first train to Fushimi Inari before the crowds.",
            ],
        },
        Destination {
            slug: "italy",
            name: "Italy",
            tagline: "Long lunches, old stones, blue water",
            slides: [
                ("/images/italy/positano.jpg", "Positano from the water"),
                ("/images/italy/tuscany.jpg", "Cypress roads in Val d'Orcia"),
            ],
            best_time: "May, June and September.",
            highlights: [
                "Take a cooking class in a Tuscan farmhouse.",
                "Hike the Path of the Gods above Amalfi.",
                "See the Sistine Chapel at opening time.",
            ],
        },
        Destination {
            slug: "iceland",
            name: "Iceland",
            tagline: "Fire, ice and the northern lights",
            slides: [
                ("/images/iceland/aurora.jpg", "Aurora over Jokulsarlon"),
                ("/images/iceland/skogafoss.jpg", "Skogafoss in spring"),
            ],
            best_time: "June to August for hiking, October to March for auroras.",
            highlights: [
                "Walk on the Solheimajokull glacier.",
                "Soak in a geothermal lagoon under the stars.",
                "Drive the Ring Road at your own pace.",
            ],
        },
        Destination {
            slug: "peru",
            name: "Peru",
            tagline: "The Andes, the Amazon and Machu Picchu",
            slides: [
                ("/images/peru/machu-picchu.jpg", "Machu Picchu at first light"),
                ("/images/peru/rainbow.jpg", "Rainbow Mountain"),
            ],
            best_time: "May to September, the dry season in the highlands.",
            highlights: [
                "Trek the Inca Trail with porters from the Sacred Valley.",
                "Stay in a lodge on the Tambopata river.",
                "Eat ceviche in Lima's Barranco district.",
            ],
        },
    ];

    entries.into_iter().map(destination_page).collect()
}

fn destination_page(d: Destination) -> Page {
    let hero = d
        .slides
        .iter()
        .map(|(image, title)| {
            Slide::new(*image, *title)
                .with_subtitle(d.tagline)
                .with_call_to_action("Plan this trip", "/contact")
        })
        .collect();

    Page {
        path: format!("/destinations/{}", d.slug),
        title: d.name.to_string(),
        kind: PageKind::Destination,
        hero,
        sections: vec![
            Section::new(format!("Discover {}", d.name), &[d.tagline]),
            Section::new("When to go", &[d.best_time]),
            Section::new("Highlights", &d.highlights),
        ],
    }
}

fn blog_index() -> Page {
    Page {
        path: "/blog".to_string(),
        title: "Blog".to_string(),
        kind: PageKind::BlogIndex,
        hero: Vec::new(),
        sections: vec![Section::new(
            "Latest articles",
            &[
                "Ten days in Japan on a rail pass",
                "What to pack for the Inca Trail",
            ],
        )],
    }
}

fn articles() -> Vec<Page> {
    vec![
        Page {
            path: "/blog/japan-rail-pass".to_string(),
            title: "Ten days in Japan on a rail pass".to_string(),
            kind: PageKind::Article,
            hero: Vec::new(),
            sections: vec![
                Section::new(
                    "Is the pass still worth it?",
                    &["Since the 2023 price rise it only pays off if you cover the \
                       Tokyo to Hiroshima stretch and back."],
                ),
                Section::new(
                    "Our route",
                    &[
                        "Tokyo, Hakone, Kyoto, Nara, Hiroshima, Miyajima, Osaka.",
                        "Reserve seats the day before; unreserved cars fill fast at weekends.",
                    ],
                ),
            ],
        },
        Page {
            path: "/blog/inca-trail-packing".to_string(),
            title: "What to pack for the Inca Trail".to_string(),
            kind: PageKind::Article,
            hero: Vec::new(),
            sections: vec![
                Section::new(
                    "Layers, not bulk",
                    &["Nights at Dead Woman's Pass drop below freezing even in July."],
                ),
                Section::new(
                    "Do not forget",
                    &[
                        "Your original passport; the checkpoint will not accept copies.",
                        "Cash in small soles for tipping porters.",
                    ],
                ),
            ],
        },
    ]
}

fn about_page() -> Page {
    Page {
        path: "/about".to_string(),
        title: "About us".to_string(),
        kind: PageKind::About,
        hero: Vec::new(),
        sections: vec![
            Section::new(
                "Who we are",
                &["Escape Epic started in 2015 with two guides and a minibus in Chiang Mai."],
            ),
            Section::new(
                "How we travel",
                &["Small groups, local partners, and carbon-offset flights on every booking."],
            ),
        ],
    }
}

fn contact_page() -> Page {
    Page {
        path: "/contact".to_string(),
        title: "Contact".to_string(),
        kind: PageKind::Contact,
        hero: Vec::new(),
        sections: vec![Section::new(
            "Talk to a travel designer",
            &["Tell us where you want to go and we will reply within one working day."],
        )],
    }
}

fn not_found_page() -> Page {
    Page {
        path: "/404".to_string(),
        title: "Page not found".to_string(),
        kind: PageKind::NotFound,
        hero: Vec::new(),
        sections: vec![Section::new(
            "Lost?",
            &["That page has wandered off. Use the menu to find your way back."],
        )],
    }
}
