//! Contract terms attached to a client, one variant per line of business.
use std::collections::BTreeMap;
use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::domain::types::{Amount, CurrencyCode, Notes, Percentage};

/// Fee structure of a standard recruitment contract.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum StandardContractType {
    FixWithAdvance,
    FixWithoutAdvance,
    LevelBasedHiring,
    LevelBasedWithAdvance,
}

impl StandardContractType {
    /// Whether this fee structure varies by candidate seniority tier.
    pub const fn is_level_based(self) -> bool {
        matches!(
            self,
            StandardContractType::LevelBasedHiring | StandardContractType::LevelBasedWithAdvance
        )
    }

    /// Whether this fee structure carries an advance payment per entry.
    pub const fn has_advance(self) -> bool {
        matches!(
            self,
            StandardContractType::FixWithAdvance | StandardContractType::LevelBasedWithAdvance
        )
    }
}

impl Display for StandardContractType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StandardContractType::FixWithAdvance => write!(f, "Fix with Advance"),
            StandardContractType::FixWithoutAdvance => write!(f, "Fix without Advance"),
            StandardContractType::LevelBasedHiring => write!(f, "Level Based Hiring"),
            StandardContractType::LevelBasedWithAdvance => write!(f, "Level Based with Advance"),
        }
    }
}

/// Pricing model of an outsourcing contract.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum OutsourcingPricing {
    FixedCost,
    CostPlus,
    TimeAndMaterials,
}

impl Display for OutsourcingPricing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutsourcingPricing::FixedCost => write!(f, "Fixed Cost"),
            OutsourcingPricing::CostPlus => write!(f, "Cost Plus"),
            OutsourcingPricing::TimeAndMaterials => write!(f, "Time and Materials"),
        }
    }
}

/// Candidate seniority tiers a level-based contract may price separately.
///
/// Ordering matters: `BTreeMap` keys iterate in declaration order, which keeps
/// payload part order deterministic.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HiringLevel {
    Senior,
    Executives,
    NonExecutives,
    Other,
}

impl HiringLevel {
    pub const ALL: [HiringLevel; 4] = [
        HiringLevel::Senior,
        HiringLevel::Executives,
        HiringLevel::NonExecutives,
        HiringLevel::Other,
    ];

    /// Display label shown to users.
    pub const fn label(self) -> &'static str {
        match self {
            HiringLevel::Senior => "Senior Level",
            HiringLevel::Executives => "Executives",
            HiringLevel::NonExecutives => "Non-Executives",
            HiringLevel::Other => "Other",
        }
    }

    /// The derived payload field keys and upload slot for this level.
    pub const fn field_map(self) -> LevelFieldMap {
        match self {
            HiringLevel::Senior => LevelFieldMap {
                percentage: "seniorLevelPercentage",
                notes: "seniorLevelNotes",
                money: "seniorLevelMoney",
                currency: "seniorLevelCurrency",
                slot: "seniorLevel",
            },
            HiringLevel::Executives => LevelFieldMap {
                percentage: "executivesPercentage",
                notes: "executivesNotes",
                money: "executivesMoney",
                currency: "executivesCurrency",
                slot: "executives",
            },
            HiringLevel::NonExecutives => LevelFieldMap {
                percentage: "nonExecutivesPercentage",
                notes: "nonExecutivesNotes",
                money: "nonExecutivesMoney",
                currency: "nonExecutivesCurrency",
                slot: "nonExecutives",
            },
            HiringLevel::Other => LevelFieldMap {
                percentage: "otherPercentage",
                notes: "otherNotes",
                money: "otherMoney",
                currency: "otherCurrency",
                slot: "other",
            },
        }
    }
}

impl Display for HiringLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Payload field names derived per hiring level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelFieldMap {
    pub percentage: &'static str,
    pub notes: &'static str,
    pub money: &'static str,
    pub currency: &'static str,
    pub slot: &'static str,
}

/// An advance payment: amount plus currency.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Advance {
    pub amount: Amount,
    pub currency: CurrencyCode,
}

/// Fee terms entered for one hiring level.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct LevelTerms {
    pub percentage: Option<Percentage>,
    pub notes: Option<Notes>,
    pub advance: Option<Advance>,
}

impl LevelTerms {
    /// A record with nothing entered yet.
    pub fn is_empty(&self) -> bool {
        self.percentage.is_none() && self.notes.is_none() && self.advance.is_none()
    }
}

/// Standard recruitment contract with a flat fee percentage.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StandardContract {
    pub contract_type: StandardContractType,
    pub percentage: Option<Percentage>,
    pub advance: Option<Advance>,
    pub notes: Option<Notes>,
}

impl StandardContract {
    /// Upload slot carrying the signed contract document.
    pub const DOC_SLOT: &'static str = "fixedPercentageAdvance";
}

/// Level-based recruitment contract: fee terms per selected seniority tier.
///
/// Only the levels selected at save time are committed here; the sub-form's
/// sparse scratch map may hold terms for unselected levels too.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LevelBasedContract {
    pub contract_type: StandardContractType,
    pub levels: BTreeMap<HiringLevel, LevelTerms>,
}

/// Consulting contract: a technical and a financial proposal.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ConsultingContract {
    pub technical_notes: Option<Notes>,
    pub financial_notes: Option<Notes>,
}

impl ConsultingContract {
    pub const TECHNICAL_SLOT: &'static str = "technicalProposal";
    pub const FINANCIAL_SLOT: &'static str = "financialProposal";
}

/// Outsourcing contract terms.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct OutsourcingContract {
    pub pricing: OutsourcingPricing,
    pub service_category: Option<String>,
    pub resource_count: Option<u32>,
    pub duration_months: Option<u32>,
    pub sla_terms: Option<Notes>,
    pub total_cost: Option<Advance>,
}

impl OutsourcingContract {
    pub const DOC_SLOT: &'static str = "outsourcingContract";
}

/// Contract terms committed for one line of business.
///
/// Exactly one variant shape is active per business line at a time.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ContractForm {
    Standard(StandardContract),
    LevelBased(LevelBasedContract),
    Consulting(ConsultingContract),
    Outsourcing(OutsourcingContract),
}
