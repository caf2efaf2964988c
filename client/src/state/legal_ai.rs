//! Legal question assistant: canned guidance keyed on question topics.
//!
//! Answers are templated text chosen by keyword match. They are general
//! guidance only and always end with the not-legal-advice note.

#[cfg(test)]
#[path = "legal_ai_test.rs"]
mod legal_ai_test;

use serde::{Deserialize, Serialize};
use time::Date;

pub const DISCLAIMER: &str = "*Note: This information is provided as general guidance and not as legal advice.*";

pub const SUGGESTED_QUESTIONS: [&str; 5] = [
    "What are my rights as a tenant?",
    "How do I form an LLC?",
    "What is the process for filing a small claims case?",
    "How do I protect my intellectual property?",
    "What should I include in an employment contract?",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topic {
    Tenancy,
    IntellectualProperty,
    General,
}

const TENANCY_KEYWORDS: [&str; 3] = ["landlord", "tenant", "rent"];
const IP_KEYWORDS: [&str; 3] = ["copyright", "intellectual property", "patent"];

/// Classify a question by keyword, tenancy first.
#[must_use]
pub fn classify(question: &str) -> Topic {
    let lower = question.to_lowercase();
    if TENANCY_KEYWORDS.iter().any(|k| lower.contains(k)) {
        Topic::Tenancy
    } else if IP_KEYWORDS.iter().any(|k| lower.contains(k)) {
        Topic::IntellectualProperty
    } else {
        Topic::General
    }
}

/// Markdown answer for `question`.
#[must_use]
pub fn answer(question: &str) -> String {
    let body = match classify(question) {
        Topic::Tenancy => TENANCY_ANSWER,
        Topic::IntellectualProperty => IP_ANSWER,
        Topic::General => GENERAL_ANSWER,
    };
    format!("{body}\n\n{DISCLAIMER}")
}

const TENANCY_ANSWER: &str = "Based on general legal principles regarding landlord-tenant relationships:

1. Landlords typically have a legal obligation to maintain the property in habitable condition.
2. Tenants generally have rights to request necessary repairs.
3. If repairs aren't made within a reasonable timeframe, depending on your jurisdiction, you may have several options:
   - Withholding rent (in some states)
   - \"Repair and deduct\" remedy
   - Breaking the lease without penalty
   - Filing a complaint with local housing authorities

The specific laws vary by location, and consulting a landlord-tenant attorney in your area is recommended for advice on your situation.";

const IP_ANSWER: &str = "Regarding copyright protection for software:

1. Copyright protection for software is automatic upon creation, but registration provides important benefits:
   - Public record of ownership
   - Legal presumption of validity
   - Statutory damages and attorney fees in litigation
   - Ability to file infringement suits (for U.S. works)

2. To register copyright for software with the U.S. Copyright Office:
   - Complete an application through the Electronic Copyright Office (eCO)
   - Pay the required filing fee
   - Submit a deposit of identifying material from your software

For comprehensive protection, consider combining copyright, patents (for functional aspects) and trade secrets.";

const GENERAL_ANSWER: &str = "Based on my understanding of your question:

The answer depends on several factors specific to your jurisdiction and the exact circumstances. Legal matters are often complex and require consideration of local laws and regulations.

Recommended next steps:
1. Consult a licensed attorney specializing in this area
2. Review the relevant statutes in your jurisdiction
3. Gather documentation related to your specific situation";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryStatus {
    Answered,
    Pending,
}

impl QueryStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Answered => "answered",
            Self::Pending => "pending",
        }
    }

    #[must_use]
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Answered => "badge badge--green",
            Self::Pending => "badge badge--yellow",
        }
    }
}

/// A previously asked question shown on the client dashboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalQuery {
    pub id: String,
    pub question: String,
    pub asked_at: Date,
    pub status: QueryStatus,
}
