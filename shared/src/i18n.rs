//! # String Tables
//!
//! UI chrome text for every supported locale. The tables live in
//! `data/i18n/*.json` and are embedded at compile time, then parsed once on
//! first use.
//!
//! Lookup is `dictionary(locale)?.section.field`; entity text (animal
//! descriptions and tags) is not stored here, see [`crate::locale::Localized`].

use crate::animal::{Gender, Size};
use crate::catalog::DataError;
use crate::locale::Locale;
use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NavStrings {
    pub home: String,
    pub about: String,
    pub pets: String,
    pub donate: String,
    pub adopt_btn: String,
    pub back_home: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HeroStrings {
    pub title: String,
    pub subtitle: String,
    pub cta_primary: String,
    pub cta_secondary: String,
    pub stat_1: String,
    pub stat_2: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AboutStrings {
    pub title: String,
    pub text: String,
    pub mission: String,
    pub mission_text: String,
    pub vision: String,
    pub vision_text: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FilterStrings {
    pub all: String,
    pub dogs: String,
    pub cats: String,
    pub view_all_btn: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DetailStrings {
    pub age: String,
    pub gender: String,
    pub size: String,
    pub about: String,
    pub adopt_me: String,
    pub back: String,
    pub health: String,
    pub health_text: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DonateStrings {
    pub title: String,
    pub subtitle: String,
    pub card1_title: String,
    pub card1_desc: String,
    pub card1_amount: String,
    pub card2_title: String,
    pub card2_desc: String,
    pub card2_amount: String,
    pub card3_title: String,
    pub card3_desc: String,
    pub card3_amount: String,
    pub btn: String,
    pub custom_amount: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FormStrings {
    pub adopt_title: String,
    pub adopt_subtitle: String,
    pub donate_title: String,
    pub name_label: String,
    pub email_label: String,
    pub phone_label: String,
    pub message_label: String,
    pub amount_label: String,
    pub card_label: String,
    pub submit_adopt: String,
    pub submit_donate: String,
    pub submitting: String,
    pub success_title: String,
    pub success_message_adopt: String,
    pub success_message_donate: String,
    pub close: String,
    pub error_required: String,
    pub error_email: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatsStrings {
    pub title: String,
    pub chart_label: String,
    pub blurb: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FooterStrings {
    pub rights: String,
    pub contact: String,
    pub tagline: String,
    pub quick_links: String,
}

/// Strings that sit next to data rather than in a fixed section
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LabelStrings {
    pub urgent_badge: String,
    pub pets_heading: String,
    pub found_home: String,
    pub adopted_badge: String,
    pub meet_me: String,
    pub hero_badge_title: String,
    pub hero_badge_value: String,
    pub gallery_title: String,
    pub male: String,
    pub female: String,
    pub small: String,
    pub medium: String,
    pub large: String,
}

/// The full string table for one locale
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Dictionary {
    pub nav: NavStrings,
    pub hero: HeroStrings,
    pub about: AboutStrings,
    pub filters: FilterStrings,
    pub details: DetailStrings,
    pub donate: DonateStrings,
    pub forms: FormStrings,
    pub stats: StatsStrings,
    pub footer: FooterStrings,
    pub labels: LabelStrings,
}

impl Dictionary {
    pub fn parse(locale: Locale, json: &str) -> Result<Self, DataError> {
        serde_json::from_str(json).map_err(|source| DataError::Dictionary {
            locale,
            message: source.to_string(),
        })
    }

    pub fn gender_label(&self, gender: Gender) -> &str {
        match gender {
            Gender::Male => &self.labels.male,
            Gender::Female => &self.labels.female,
        }
    }

    pub fn size_label(&self, size: Size) -> &str {
        match size {
            Size::Small => &self.labels.small,
            Size::Medium => &self.labels.medium,
            Size::Large => &self.labels.large,
        }
    }

    /// Donation tiers as (amount, title, description), in display order
    pub fn donation_tiers(&self) -> [(&str, &str, &str); 3] {
        let d = &self.donate;
        [
            (d.card1_amount.as_str(), d.card1_title.as_str(), d.card1_desc.as_str()),
            (d.card2_amount.as_str(), d.card2_title.as_str(), d.card2_desc.as_str()),
            (d.card3_amount.as_str(), d.card3_title.as_str(), d.card3_desc.as_str()),
        ]
    }
}

static EN: Lazy<Result<Dictionary, DataError>> =
    Lazy::new(|| Dictionary::parse(Locale::En, include_str!("../data/i18n/en.json")));

static TR: Lazy<Result<Dictionary, DataError>> =
    Lazy::new(|| Dictionary::parse(Locale::Tr, include_str!("../data/i18n/tr.json")));

/// String table for `locale`
pub fn dictionary(locale: Locale) -> Result<&'static Dictionary, DataError> {
    let table = match locale {
        Locale::En => &*EN,
        Locale::Tr => &*TR,
    };
    table.as_ref().map_err(Clone::clone)
}
