// src/globe/data/regions.rs

use crate::math::geometry::sphere::GeoPoint;

/// Die sechs Meeresregionen, zwischen denen ein Klick auf die Kugel unterscheidet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OceanRegion {
    NorthAtlantic,
    NorthPacific,
    TropicalPacific,
    IndianOcean,
    ArcticOcean,
    SouthernOcean,
}

impl OceanRegion {
    pub const ALL: [OceanRegion; 6] = [
        OceanRegion::NorthAtlantic,
        OceanRegion::NorthPacific,
        OceanRegion::TropicalPacific,
        OceanRegion::IndianOcean,
        OceanRegion::ArcticOcean,
        OceanRegion::SouthernOcean,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            OceanRegion::NorthAtlantic => "North Atlantic",
            OceanRegion::NorthPacific => "North Pacific",
            OceanRegion::TropicalPacific => "Tropical Pacific",
            OceanRegion::IndianOcean => "Indian Ocean",
            OceanRegion::ArcticOcean => "Arctic Ocean",
            OceanRegion::SouthernOcean => "Southern Ocean",
        }
    }

    /// Bezugspunkt für die Zuordnung per nächstem Schwerpunkt
    pub fn centroid(&self) -> GeoPoint {
        match self {
            OceanRegion::NorthAtlantic => GeoPoint::new(40.0, -30.0),
            OceanRegion::NorthPacific => GeoPoint::new(40.0, -160.0),
            OceanRegion::TropicalPacific => GeoPoint::new(0.0, -160.0),
            OceanRegion::IndianOcean => GeoPoint::new(0.0, 80.0),
            OceanRegion::ArcticOcean => GeoPoint::new(75.0, 0.0),
            OceanRegion::SouthernOcean => GeoPoint::new(-60.0, 0.0),
        }
    }

    /// Regelbasierte Zuordnung über Breiten- und Längenbänder
    pub fn classify(point: GeoPoint) -> OceanRegion {
        let lat = point.latitude;
        let lng = point.longitude;

        if lat > 66.5 {
            OceanRegion::ArcticOcean
        } else if lat < -60.0 {
            OceanRegion::SouthernOcean
        } else if lat > 25.0 && lng > -60.0 && lng < 20.0 {
            OceanRegion::NorthAtlantic
        } else if lat > 25.0 && (lng > 100.0 || lng < -100.0) {
            OceanRegion::NorthPacific
        } else if lat.abs() < 25.0 && lng > 100.0 {
            OceanRegion::TropicalPacific
        } else if lng > 20.0 && lng < 150.0 && lat > -40.0 && lat < 30.0 {
            OceanRegion::IndianOcean
        } else {
            OceanRegion::TropicalPacific
        }
    }

    /// Region mit dem nächsten Schwerpunkt im planaren (lat, lon)-Raum.
    /// Bei Gleichstand gewinnt die frühere Region in [`OceanRegion::ALL`].
    pub fn nearest(point: GeoPoint) -> OceanRegion {
        let mut best = OceanRegion::ALL[0];
        let mut best_distance = f32::INFINITY;
        for region in OceanRegion::ALL {
            let distance = point.planar_distance(&region.centroid());
            if distance < best_distance {
                best = region;
                best_distance = distance;
            }
        }
        best
    }

    pub fn profile(&self) -> &'static RegionProfile {
        match self {
            OceanRegion::NorthAtlantic => &NORTH_ATLANTIC,
            OceanRegion::NorthPacific => &NORTH_PACIFIC,
            OceanRegion::TropicalPacific => &TROPICAL_PACIFIC,
            OceanRegion::IndianOcean => &INDIAN_OCEAN,
            OceanRegion::ArcticOcean => &ARCTIC_OCEAN,
            OceanRegion::SouthernOcean => &SOUTHERN_OCEAN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvironmentalConditions {
    pub depth: &'static str,
    pub temperature: &'static str,
    pub salinity: &'static str,
    pub currents: &'static str,
}

/// Statische Beschreibung einer Region für das Detail-Panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionProfile {
    pub display_name: &'static str,
    pub authority: &'static str,
    pub communities: &'static [&'static str],
    pub animals: &'static [&'static str],
    pub species: &'static [&'static str],
    pub plants: &'static [&'static str],
    pub conditions: EnvironmentalConditions,
    pub economic_importance: &'static str,
    pub conservation: &'static str,
}

static NORTH_ATLANTIC: RegionProfile = RegionProfile {
    display_name: "North Atlantic Ocean",
    authority: "NOAA & International Maritime Organization",
    communities: &["Newfoundland Fishermen", "Inuit Communities", "Scottish Coastal Communities"],
    animals: &[
        "Atlantic Cod",
        "Humpback Whale",
        "Atlantic Mackerel",
        "Harbor Seal",
        "Lobster",
        "Atlantic Salmon",
    ],
    species: &["Atlantic Herring", "Bluefin Tuna", "Swordfish", "Sea Scallop", "Snow Crab"],
    plants: &["Sea Lettuce", "Dulse", "Irish Moss", "Bladder Wrack", "Kelp Forests", "Rockweed"],
    conditions: EnvironmentalConditions {
        depth: "0-4000m",
        temperature: "2-15°C",
        salinity: "34.5-36.5 PSU",
        currents: "Gulf Stream, Labrador Current",
    },
    economic_importance: "Major fishing grounds, shipping lanes, oil reserves",
    conservation: "Marine Protected Areas, fishing quotas, whale watching regulations",
};

static NORTH_PACIFIC: RegionProfile = RegionProfile {
    display_name: "North Pacific Ocean",
    authority: "Pacific Marine Fisheries Commission & NOAA",
    communities: &[
        "Alaskan Native Tribes",
        "Pacific Northwest First Nations",
        "Japanese Fishing Communities",
    ],
    animals: &[
        "Pacific Salmon",
        "Orca Whale",
        "Sea Otter",
        "Steller Sea Lion",
        "Pacific Halibut",
        "Gray Whale",
    ],
    species: &["Pacific Sardine", "Dungeness Crab", "Rockfish", "Albacore Tuna", "Pacific Cod"],
    plants: &["Giant Kelp", "Bull Kelp", "Sea Palm", "Wakame", "Nori", "Eelgrass"],
    conditions: EnvironmentalConditions {
        depth: "0-6000m",
        temperature: "4-18°C",
        salinity: "32-35 PSU",
        currents: "Kuroshio Current, California Current",
    },
    economic_importance: "Salmon industry, kelp harvesting, shipping routes",
    conservation: "Marine sanctuaries, salmon restoration programs",
};

static TROPICAL_PACIFIC: RegionProfile = RegionProfile {
    display_name: "Tropical Pacific Ocean",
    authority: "Pacific Islands Fisheries Science Center",
    communities: &[
        "Polynesian Islanders",
        "Micronesian Communities",
        "Hawaiian Native Communities",
    ],
    animals: &[
        "Manta Ray",
        "Reef Sharks",
        "Green Sea Turtle",
        "Dolphin",
        "Whale Shark",
        "Parrotfish",
    ],
    species: &[
        "Tropical Reef Fish",
        "Crown-of-Thorns Starfish",
        "Giant Clam",
        "Sea Cucumber",
        "Coral Trout",
    ],
    plants: &[
        "Sea Grapes",
        "Caulerpa",
        "Halimeda",
        "Turbinaria",
        "Coral Polyps",
        "Coralline Algae",
    ],
    conditions: EnvironmentalConditions {
        depth: "0-2000m",
        temperature: "24-30°C",
        salinity: "34-36 PSU",
        currents: "Equatorial Counter Current, Trade Wind Drift",
    },
    economic_importance: "Tourism, coral reef fisheries, pearl cultivation",
    conservation: "Coral reef protection, marine parks, turtle nesting sites",
};

static INDIAN_OCEAN: RegionProfile = RegionProfile {
    display_name: "Indian Ocean",
    authority: "Indian Ocean Tuna Commission & Regional Fisheries Bodies",
    communities: &[
        "Maldivian Fishermen",
        "Sri Lankan Coastal Communities",
        "East African Fishermen",
    ],
    animals: &[
        "Whale Shark",
        "Manta Ray",
        "Sperm Whale",
        "Dugong",
        "Indian Ocean Tuna",
        "Spinner Dolphin",
    ],
    species: &["Yellowfin Tuna", "Skipjack Tuna", "Reef Fish", "Lobster", "Prawns"],
    plants: &["Seagrass Beds", "Mangrove Systems", "Red Algae", "Brown Algae", "Coralline Algae"],
    conditions: EnvironmentalConditions {
        depth: "0-7000m",
        temperature: "22-28°C",
        salinity: "34-37 PSU",
        currents: "Monsoon Currents, Agulhas Current",
    },
    economic_importance: "Tuna fishing, shipping lanes, oil and gas reserves",
    conservation: "Whale shark protection, dugong sanctuaries",
};

static ARCTIC_OCEAN: RegionProfile = RegionProfile {
    display_name: "Arctic Ocean",
    authority: "Arctic Council & Indigenous Communities Council",
    communities: &["Inuit Peoples", "Sami Communities", "Chukchi Peoples", "Aleut Communities"],
    animals: &["Polar Bear", "Narwhal", "Beluga Whale", "Walrus", "Arctic Fox", "Ringed Seal"],
    species: &["Arctic Cod", "Arctic Char", "Capelin", "Polar Cod", "Ice Fish"],
    plants: &["Ice Algae", "Arctic Kelp", "Phytoplankton Blooms", "Sea Ice Microorganisms"],
    conditions: EnvironmentalConditions {
        depth: "0-4000m",
        temperature: "-2 to 4°C",
        salinity: "30-35 PSU",
        currents: "Transpolar Drift Stream, Beaufort Gyre",
    },
    economic_importance: "Indigenous subsistence, emerging shipping routes",
    conservation: "Climate change monitoring, polar bear protection",
};

static SOUTHERN_OCEAN: RegionProfile = RegionProfile {
    display_name: "Southern Ocean (Antarctic)",
    authority: "Commission for Conservation of Antarctic Marine Living Resources",
    communities: &[
        "Research Station Communities",
        "Antarctic Scientists",
        "International Researchers",
    ],
    animals: &[
        "Emperor Penguin",
        "Leopard Seal",
        "Blue Whale",
        "Orca",
        "Adelie Penguin",
        "Weddell Seal",
    ],
    species: &["Antarctic Krill", "Antarctic Toothfish", "Icefish", "Antarctic Silverfish"],
    plants: &["Antarctic Kelp", "Ice Algae", "Phytoplankton", "Diatoms", "Marine Microalgae"],
    conditions: EnvironmentalConditions {
        depth: "0-5000m",
        temperature: "-2 to 2°C",
        salinity: "34-35 PSU",
        currents: "Antarctic Circumpolar Current",
    },
    economic_importance: "Scientific research, krill harvesting (regulated)",
    conservation: "Antarctic Treaty System, marine protected areas",
};

/// Fest verankerte Ozean-Beschriftung
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OceanLabel {
    pub name: &'static str,
    pub anchor: GeoPoint,
    /// Relativer Schriftgrößenfaktor
    pub scale: f32,
}

pub const OCEAN_LABELS: [OceanLabel; 5] = [
    OceanLabel { name: "Indian", anchor: GeoPoint::new(0.0, 80.0), scale: 1.0 },
    OceanLabel { name: "Pacific", anchor: GeoPoint::new(0.0, -160.0), scale: 1.0 },
    OceanLabel { name: "Atlantic", anchor: GeoPoint::new(0.0, -30.0), scale: 1.0 },
    OceanLabel { name: "Arctic", anchor: GeoPoint::new(75.0, 0.0), scale: 0.6 },
    OceanLabel { name: "Southern", anchor: GeoPoint::new(-60.0, 0.0), scale: 0.7 },
];
