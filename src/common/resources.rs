use crate::common::newtypes::{EventId, ExpertId, NewsItemId, SchemeId, TipId};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FarmingTip {
    pub id: TipId,
    pub title: &'static str,
    pub content: &'static str,
    /// Illustration filename, reserved for a future asset pipeline
    pub image: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GovernmentScheme {
    pub id: SchemeId,
    pub title: &'static str,
    pub description: &'static str,
    pub eligibility: &'static str,
    pub link: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewsItem {
    pub id: NewsItemId,
    pub title: &'static str,
    /// Preformatted display date, rendered as-is
    pub date: &'static str,
    pub summary: &'static str,
    pub source: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Expert {
    pub id: ExpertId,
    pub name: &'static str,
    pub specialty: &'static str,
    pub experience: &'static str,
    pub availability: &'static str,
    pub contact: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Event {
    pub id: EventId,
    pub title: &'static str,
    /// Preformatted display date, rendered as-is
    pub date: &'static str,
    pub location: &'static str,
    pub description: &'static str,
}

pub(crate) const FARMING_TIPS: &[FarmingTip] = &[
    FarmingTip {
        id: TipId(1),
        title: "Soil Testing",
        content: "Regular soil testing helps determine nutrient levels and pH balance. Test your soil at least once every two years to optimize fertilizer application.",
        image: "soil-testing.svg",
    },
    FarmingTip {
        id: TipId(2),
        title: "Crop Rotation",
        content: "Implement crop rotation to break pest cycles, improve soil health, and reduce the need for synthetic fertilizers. Rotate between legumes and non-legumes.",
        image: "crop-rotation.svg",
    },
    FarmingTip {
        id: TipId(3),
        title: "Water Conservation",
        content: "Use drip irrigation or micro-sprinklers to reduce water usage. Water early in the morning to minimize evaporation and fungal diseases.",
        image: "water-conservation.svg",
    },
    FarmingTip {
        id: TipId(4),
        title: "Integrated Pest Management",
        content: "Adopt IPM practices to control pests with minimal environmental impact. Use biological controls when possible before resorting to chemical pesticides.",
        image: "pest-management.svg",
    },
];

pub(crate) const GOVERNMENT_SCHEMES: &[GovernmentScheme] = &[
    GovernmentScheme {
        id: SchemeId(1),
        title: "PM-KISAN",
        description: "Provides income support of ₹6,000 per year to all farmer families in three equal installments.",
        eligibility: "All landholding farmers with cultivable land",
        link: "https://pmkisan.gov.in",
    },
    GovernmentScheme {
        id: SchemeId(2),
        title: "Pradhan Mantri Fasal Bima Yojana",
        description: "Crop insurance scheme to provide financial support to farmers suffering crop loss/damage due to unforeseen events.",
        eligibility: "All farmers growing notified crops",
        link: "https://pmfby.gov.in",
    },
    GovernmentScheme {
        id: SchemeId(3),
        title: "Soil Health Card Scheme",
        description: "Provides information on soil nutrient status and recommendations on appropriate dosage of nutrients for improving soil health and fertility.",
        eligibility: "All farmers",
        link: "https://soilhealth.dac.gov.in",
    },
];

pub(crate) const AGRICULTURAL_NEWS: &[NewsItem] = &[
    NewsItem {
        id: NewsItemId(1),
        title: "New Drought-Resistant Wheat Variety Released",
        date: "June 15, 2023",
        summary: "Agricultural scientists have developed a new wheat variety that can withstand prolonged drought conditions while maintaining yield.",
        source: "Agricultural Research Journal",
    },
    NewsItem {
        id: NewsItemId(2),
        title: "Government Increases MSP for Kharif Crops",
        date: "May 28, 2023",
        summary: "The cabinet has approved an increase in the minimum support prices for kharif crops for the 2023-24 marketing season.",
        source: "Ministry of Agriculture",
    },
    NewsItem {
        id: NewsItemId(3),
        title: "New Mobile App Launched for Pest Identification",
        date: "April 10, 2023",
        summary: "A new mobile application using AI technology helps farmers identify crop pests and diseases through smartphone cameras.",
        source: "Tech for Agriculture",
    },
];

pub(crate) const EXPERTS: &[Expert] = &[
    Expert {
        id: ExpertId(1),
        name: "Dr. Rajesh Kumar",
        specialty: "Soil Science",
        experience: "15 years",
        availability: "Mon, Wed, Fri (10 AM - 12 PM)",
        contact: "rajesh.kumar@agriexpert.com",
    },
    Expert {
        id: ExpertId(2),
        name: "Dr. Priya Singh",
        specialty: "Plant Pathology",
        experience: "12 years",
        availability: "Tue, Thu (2 PM - 4 PM)",
        contact: "priya.singh@agriexpert.com",
    },
    Expert {
        id: ExpertId(3),
        name: "Dr. Amit Verma",
        specialty: "Agricultural Economics",
        experience: "10 years",
        availability: "Mon, Fri (3 PM - 5 PM)",
        contact: "amit.verma@agriexpert.com",
    },
];

pub(crate) const EVENTS: &[Event] = &[
    Event {
        id: EventId(1),
        title: "National Agricultural Fair",
        date: "July 15-17, 2023",
        location: "Delhi Exhibition Center",
        description: "Annual agricultural exhibition showcasing latest farming technologies and innovations.",
    },
    Event {
        id: EventId(2),
        title: "Organic Farming Workshop",
        date: "August 5, 2023",
        location: "Agricultural University, Pune",
        description: "Hands-on workshop on organic farming practices and certification process.",
    },
    Event {
        id: EventId(3),
        title: "Irrigation Technology Seminar",
        date: "August 20, 2023",
        location: "Virtual (Online)",
        description: "Learn about the latest irrigation technologies and water conservation methods.",
    },
];
