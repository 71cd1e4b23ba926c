//! Static question catalog and research sources for every section

use super::Section;
use super::question::{Question, QuestionKind};
use crate::calculator::{baseline, multiplication, roi, stress, time_savings};
use serde::Serialize;

/// A cited industry statistic shown alongside a section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Source {
    pub fact: &'static str,
    pub citation: &'static str,
    pub link: &'static str,
}

const WORKLOAD_PLATFORMS: &[&str] = &[
    "Blog",
    "Instagram",
    "LinkedIn",
    "YouTube",
    "TikTok",
    "Twitter",
    "Facebook",
];
const OVERTIME_OPTIONS: &[&str] = &["Never", "Rarely", "Sometimes", "Often", "Always"];
const FORMAT_OPTIONS: &[&str] = &["Blog", "Video", "Podcast", "Social Posts"];
const ENGAGEMENT_PLATFORMS: &[&str] = &[
    "Website/Blog",
    "LinkedIn",
    "Instagram",
    "YouTube",
    "TikTok",
    "Twitter",
];
const REPURPOSING_OPTIONS: &[&str] = &["0-25%", "26-50%", "51-75%", "76-100%"];

const BASELINE_QUESTIONS: &[Question] = &[
    Question::new(
        baseline::WEEKLY_HOURS,
        "How many hours per week do you spend creating original content?",
        QuestionKind::Number,
    ),
    Question::new(
        baseline::COST_PER_PIECE,
        "What's your average cost per piece of content (USD)?",
        QuestionKind::Number,
    ),
    Question::new(
        baseline::MONTHLY_CONTENT,
        "How many content pieces do you create monthly?",
        QuestionKind::Number,
    ),
];

const WORKLOAD_QUESTIONS: &[Question] = &[
    Question::new(
        stress::STRESS_LEVEL,
        "How often do you feel overwhelmed by content creation deadlines?",
        QuestionKind::Scale,
    ),
    Question::new(
        stress::PLATFORMS,
        "How many platforms do you need to create unique content for?",
        QuestionKind::MultiSelect(WORKLOAD_PLATFORMS),
    ),
    Question::new(
        stress::OVERTIME,
        "Do you frequently work outside business hours to keep up with content demands?",
        QuestionKind::Select(OVERTIME_OPTIONS),
    ),
];

const REPURPOSING_QUESTIONS: &[Question] = &[
    Question::new(
        multiplication::PRIMARY_FORMAT,
        "What's your primary content format?",
        QuestionKind::Select(FORMAT_OPTIONS),
    ),
    Question::new(
        multiplication::PLATFORMS,
        "Which platforms generate the most engagement for your business?",
        QuestionKind::MultiSelect(ENGAGEMENT_PLATFORMS),
    ),
    Question::new(
        multiplication::REPURPOSING_RATE,
        "What percentage of your content gets repurposed currently?",
        QuestionKind::Select(REPURPOSING_OPTIONS),
    ),
];

const ROI_QUESTIONS: &[Question] = &[
    Question::new(
        roi::REVENUE_PER_PIECE,
        "What's your average revenue per content piece (USD)? Ex: $1000 revenue from 10 posts = $100 per piece",
        QuestionKind::Number,
    ),
    Question::new(
        roi::MONTHLY_LEADS,
        "How many leads does your content generate monthly?",
        QuestionKind::Number,
    ),
    Question::new(
        roi::CONVERSION_RATE,
        "What's your content-to-sale conversion rate (%)?",
        QuestionKind::Number,
    ),
];

const TIME_QUESTIONS: &[Question] = &[
    Question::new(
        time_savings::ADAPTATION_TIME,
        "How long does it take to adapt content for each platform? (hours)",
        QuestionKind::Number,
    ),
    Question::new(
        time_savings::TEAM_SIZE,
        "How many team members are involved in content creation?",
        QuestionKind::Number,
    ),
    Question::new(
        time_savings::HOURLY_RATE,
        "What's the hourly cost of your content team? (USD)",
        QuestionKind::Number,
    ),
];

const BASELINE_SOURCES: &[Source] = &[
    Source {
        fact: "Content marketing industry could be worth as much as $2 trillion by 2032, so focusing on creating more with less is smart",
        citation: "Marketing Insider Group",
        link: "https://marketinginsidergroup.com/content-marketing/how-much-budget-do-you-need-for-content-marketing/",
    },
    Source {
        fact: "16% of creators spent 10 to 20 hours weekly, while 9% spend 30 - 40 hours on original content",
        citation: "Market.us Digital Content Creation Statistics",
        link: "https://scoop.market.us/digital-content-creation-statistics/",
    },
    Source {
        fact: "A recent Ahrefs poll found that almost 80% of respondents had already adopted AI tools in their content marketing strategies",
        citation: "Ahrefs Content Marketing Statistics",
        link: "https://ahrefs.com/blog/content-marketing-statistics/",
    },
];

const WORKLOAD_SOURCES: &[Source] = &[
    Source {
        fact: "79% of creators have experienced burnout, rising to 83% among those struggling to monetize",
        citation: "zdnet.com",
        link: "https://www.zdnet.com/article/75-of-content-creators-are-stressed-out-heres-what-helps/",
    },
    Source {
        fact: "43% experience burnout monthly or quarterly, while 29% face it weekly or daily",
        citation: "Creator Mental Health & Burnout Report",
        link: "https://later.com/blog/creator-burnout/",
    },
    Source {
        fact: "More than 45% of full-time content creators say the pressure to post everywhere causes burnout, followed by content fatigue at around 44%",
        citation: "WPBeginner Creator Economy Statistics",
        link: "https://www.wpbeginner.com/research/creator-economy-statistics-that-will-blow-you-away/",
    },
];

const REPURPOSING_SOURCES: &[Source] = &[
    Source {
        fact: "65% of marketers confirm repurposing is more cost-effective than creating new content",
        citation: "Clearvoice 2025 Repurposing Guide",
        link: "https://www.clearvoice.com/resources/guide-to-repurposing-content-for-seo/",
    },
    Source {
        fact: "Repurposing can make your content 300% more effective",
        citation: "Entrepreneur.com",
        link: "https://www.entrepreneur.com/growing-a-business/how-to-make-your-brands-content-300-more-effective/446278",
    },
    Source {
        fact: "Converting your primary content format (blog, video, podcast, or social posts) into at least 2-3 additional formats, has led to successful outcomes for 70% of businesses",
        citation: "Marketingprofs.com",
        link: "https://www.marketingprofs.com/charts/2024/50842/repurposing-content-benefits-small-business",
    },
];

const ROI_SOURCES: &[Source] = &[
    Source {
        fact: "31% of marketers said content repurposing helping increased engagement with their content",
        citation: "ReferralRock",
        link: "https://referralrock.com/blog/content-repurposing-tips-from-experts/",
    },
    Source {
        fact: "Companies posting 16+ blogs monthly see leads multiply by 3.5 times",
        citation: "Sender",
        link: "https://www.sender.net/blog/lead-generation-statistics/",
    },
    Source {
        fact: "Short-form video offers the highest content ROI and will earn more investment than all other formats",
        citation: "Hubspot",
        link: "https://blog.hubspot.com/marketing/hubspot-blog-marketing-industry-trends-report",
    },
];

const TIME_SOURCES: &[Source] = &[
    Source {
        fact: "Content costs are rising, repurposing is the smart way to save resources",
        citation: "The Digital Elevator",
        link: "https://thedigitalelevator.com/content-marketing-cost/",
    },
    Source {
        fact: "Marketers polled by Hubspot said they save 2.5 hours per day using AI for content",
        citation: "Hubspot Markting Report",
        link: "https://blog.hubspot.com/marketing/hubspot-blog-marketing-industry-trends-report",
    },
    Source {
        fact: "Automated content workflows using AI increase team productivity by up to 40%",
        citation: "Harvard Business School",
        link: "https://papers.ssrn.com/sol3/papers.cfm?abstract_id=4573321",
    },
];

pub(super) fn title(section: Section) -> &'static str {
    match section {
        Section::Baseline => "Measure Your Current Content Investment",
        Section::Workload => "Evaluate Your Content Creation Stress Level",
        Section::Repurposing => "Discover Your Content Multiplication Potential",
        Section::Roi => "Calculate Your Repurposing ROI",
        Section::Time => "See Your Time-Saving Potential",
    }
}

pub(super) fn description(section: Section) -> &'static str {
    match section {
        Section::Baseline => "Let's establish your content creation baseline",
        Section::Workload => "Measure your current workload and stress factors",
        Section::Repurposing => "Calculate your content repurposing opportunities",
        Section::Roi => "Project your potential return on investment",
        Section::Time => "Calculate time and resources saved through automation",
    }
}

pub(super) fn questions(section: Section) -> &'static [Question] {
    match section {
        Section::Baseline => BASELINE_QUESTIONS,
        Section::Workload => WORKLOAD_QUESTIONS,
        Section::Repurposing => REPURPOSING_QUESTIONS,
        Section::Roi => ROI_QUESTIONS,
        Section::Time => TIME_QUESTIONS,
    }
}

pub(super) fn sources(section: Section) -> &'static [Source] {
    match section {
        Section::Baseline => BASELINE_SOURCES,
        Section::Workload => WORKLOAD_SOURCES,
        Section::Repurposing => REPURPOSING_SOURCES,
        Section::Roi => ROI_SOURCES,
        Section::Time => TIME_SOURCES,
    }
}
