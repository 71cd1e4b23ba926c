//! Lookup tables mapping categorical answers to numeric weights
//!
//! Matching is exact on the option text shown to the user. Anything else
//! falls through to the caller's default.

use serde::{Deserialize, Serialize};

/// How often content work spills outside business hours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OvertimeFrequency {
    Never,
    Rarely,
    Sometimes,
    Often,
    Always,
}

impl OvertimeFrequency {
    pub const ALL: [OvertimeFrequency; 5] = [
        OvertimeFrequency::Never,
        OvertimeFrequency::Rarely,
        OvertimeFrequency::Sometimes,
        OvertimeFrequency::Often,
        OvertimeFrequency::Always,
    ];

    pub fn from_answer(answer: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.label() == answer)
    }

    pub fn label(self) -> &'static str {
        match self {
            OvertimeFrequency::Never => "Never",
            OvertimeFrequency::Rarely => "Rarely",
            OvertimeFrequency::Sometimes => "Sometimes",
            OvertimeFrequency::Often => "Often",
            OvertimeFrequency::Always => "Always",
        }
    }

    /// Stress points contributed by this frequency
    pub fn stress_points(self) -> f64 {
        match self {
            OvertimeFrequency::Never => 0.0,
            OvertimeFrequency::Rarely => 20.0,
            OvertimeFrequency::Sometimes => 40.0,
            OvertimeFrequency::Often => 60.0,
            OvertimeFrequency::Always => 80.0,
        }
    }

    /// Frequent enough to count as a burnout risk
    pub fn is_burnout_risk(self) -> bool {
        matches!(self, OvertimeFrequency::Often | OvertimeFrequency::Always)
    }
}

/// Primary content format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentFormat {
    Blog,
    Video,
    Podcast,
    SocialPosts,
}

impl ContentFormat {
    pub const ALL: [ContentFormat; 4] = [
        ContentFormat::Blog,
        ContentFormat::Video,
        ContentFormat::Podcast,
        ContentFormat::SocialPosts,
    ];

    /// Multiplier used when the format is missing or unrecognised
    pub const DEFAULT_EFFECTIVENESS: f64 = 1.4;

    pub fn from_answer(answer: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.label() == answer)
    }

    pub fn label(self) -> &'static str {
        match self {
            ContentFormat::Blog => "Blog",
            ContentFormat::Video => "Video",
            ContentFormat::Podcast => "Podcast",
            ContentFormat::SocialPosts => "Social Posts",
        }
    }

    /// Repurposing effectiveness multiplier
    pub fn effectiveness(self) -> f64 {
        match self {
            ContentFormat::Blog => 1.8,
            ContentFormat::Video => 2.2,
            ContentFormat::Podcast => 1.6,
            ContentFormat::SocialPosts => 1.4,
        }
    }

    /// Effectiveness for a raw answer, falling back to the default
    pub fn effectiveness_for(answer: Option<&str>) -> f64 {
        answer
            .and_then(Self::from_answer)
            .map_or(Self::DEFAULT_EFFECTIVENESS, Self::effectiveness)
    }
}

/// Share of content currently being repurposed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepurposingRate {
    UpToQuarter,
    UpToHalf,
    UpToThreeQuarters,
    UpToAll,
}

impl RepurposingRate {
    pub const ALL: [RepurposingRate; 4] = [
        RepurposingRate::UpToQuarter,
        RepurposingRate::UpToHalf,
        RepurposingRate::UpToThreeQuarters,
        RepurposingRate::UpToAll,
    ];

    /// Usage fraction used when the bucket is missing or unrecognised
    pub const DEFAULT_USAGE: f64 = 0.25;

    pub fn from_answer(answer: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.label() == answer)
    }

    pub fn label(self) -> &'static str {
        match self {
            RepurposingRate::UpToQuarter => "0-25%",
            RepurposingRate::UpToHalf => "26-50%",
            RepurposingRate::UpToThreeQuarters => "51-75%",
            RepurposingRate::UpToAll => "76-100%",
        }
    }

    /// Fraction of potential reach already in use
    pub fn usage_fraction(self) -> f64 {
        match self {
            RepurposingRate::UpToQuarter => 0.25,
            RepurposingRate::UpToHalf => 0.50,
            RepurposingRate::UpToThreeQuarters => 0.75,
            RepurposingRate::UpToAll => 1.0,
        }
    }

    pub fn usage_for(answer: Option<&str>) -> f64 {
        answer
            .and_then(Self::from_answer)
            .map_or(Self::DEFAULT_USAGE, Self::usage_fraction)
    }
}
