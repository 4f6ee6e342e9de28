//! Per-business-line contract sub-forms.
//!
//! Each sub-form is an isolated scratch buffer: the user edits it inside a
//! modal, and `commit` validates the draft, hands the finished
//! [`ContractForm`] to the caller, and resets the buffer. The parent draft
//! never sees a half-edited contract.

use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;

use crate::domain::contract::{
    Advance, ConsultingContract, ContractForm, HiringLevel, LevelBasedContract, LevelTerms,
    OutsourcingContract, OutsourcingPricing, StandardContract, StandardContractType,
};
use crate::domain::types::{Amount, CurrencyCode, Notes, Percentage};
use crate::forms::{FieldErrorKind, ValidationReport};

/// Raw per-level input, retained sparsely across check/uncheck toggles.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct LevelTermsDraft {
    pub percentage: String,
    pub notes: String,
    pub money: String,
    pub currency: String,
}

impl LevelTermsDraft {
    fn build(
        &self,
        level: HiringLevel,
        with_advance: bool,
        report: &mut ValidationReport,
    ) -> LevelTerms {
        let map = level.field_map();
        let percentage = parse_percentage(&self.percentage, map.percentage, report);
        let advance = if with_advance {
            parse_advance(&self.money, &self.currency, map.money, map.currency, report)
        } else {
            None
        };
        LevelTerms {
            percentage,
            notes: Notes::from_optional(self.notes.clone()),
            advance,
        }
    }
}

/// Scratch state of the standard (recruitment) contract modal.
///
/// Covers the four fee structures, including both level-based variants. The
/// sparse `levels` map keeps terms for unchecked levels so re-checking a level
/// restores what the user already typed.
#[derive(Clone, Debug, PartialEq)]
pub struct StandardContractForm {
    contract_type: StandardContractType,
    pub percentage: String,
    pub advance_amount: String,
    pub advance_currency: String,
    pub notes: String,
    levels: BTreeMap<HiringLevel, LevelTermsDraft>,
    selected_levels: BTreeSet<HiringLevel>,
    active_level: Option<HiringLevel>,
}

impl Default for StandardContractForm {
    fn default() -> Self {
        Self {
            contract_type: StandardContractType::FixWithAdvance,
            percentage: String::new(),
            advance_amount: String::new(),
            advance_currency: String::new(),
            notes: String::new(),
            levels: BTreeMap::new(),
            selected_levels: BTreeSet::new(),
            active_level: None,
        }
    }
}

impl StandardContractForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contract_type(&self) -> StandardContractType {
        self.contract_type
    }

    /// Switches the fee structure.
    ///
    /// The selected-levels set and active level are cleared when, and only
    /// when, the switch crosses the level-based boundary; the sparse terms map
    /// itself always survives.
    pub fn set_contract_type(&mut self, contract_type: StandardContractType) {
        let crossed = self.contract_type.is_level_based() != contract_type.is_level_based();
        self.contract_type = contract_type;
        if crossed {
            self.selected_levels.clear();
            self.active_level = None;
        }
    }

    /// Checks or unchecks a seniority level.
    ///
    /// Checking lazily creates an empty terms draft for the level; unchecking
    /// removes it from the selected set only, leaving its typed terms intact.
    pub fn toggle_level(&mut self, level: HiringLevel) {
        if self.selected_levels.remove(&level) {
            if self.active_level == Some(level) {
                self.active_level = None;
            }
        } else {
            self.selected_levels.insert(level);
            self.levels.entry(level).or_default();
            self.active_level = Some(level);
        }
    }

    pub fn selected_levels(&self) -> impl Iterator<Item = HiringLevel> + '_ {
        self.selected_levels.iter().copied()
    }

    pub fn is_level_selected(&self, level: HiringLevel) -> bool {
        self.selected_levels.contains(&level)
    }

    pub fn active_level(&self) -> Option<HiringLevel> {
        self.active_level
    }

    /// The retained terms draft for a level, whether or not it is selected.
    pub fn level_terms(&self, level: HiringLevel) -> Option<&LevelTermsDraft> {
        self.levels.get(&level)
    }

    /// Mutable access to a level's terms draft, creating it if absent.
    pub fn level_terms_mut(&mut self, level: HiringLevel) -> &mut LevelTermsDraft {
        self.levels.entry(level).or_default()
    }

    /// Validates the scratch buffer and commits it, resetting the buffer on
    /// success.
    pub fn commit(&mut self) -> Result<ContractForm, ValidationReport> {
        let contract = self.build()?;
        *self = Self::default();
        Ok(contract)
    }

    fn build(&self) -> Result<ContractForm, ValidationReport> {
        let mut report = ValidationReport::new();

        if self.contract_type.is_level_based() {
            if self.selected_levels.is_empty() {
                report.push("levelTypes", FieldErrorKind::Required);
            }
            let with_advance = self.contract_type.has_advance();
            let mut committed = BTreeMap::new();
            for level in self.selected_levels.iter().copied() {
                let draft = self.levels.get(&level).cloned().unwrap_or_default();
                committed.insert(level, draft.build(level, with_advance, &mut report));
            }
            report.into_result(ContractForm::LevelBased(LevelBasedContract {
                contract_type: self.contract_type,
                levels: committed,
            }))
        } else {
            let percentage = parse_percentage(&self.percentage, "percentage", &mut report);
            let advance = if self.contract_type.has_advance() {
                parse_advance(
                    &self.advance_amount,
                    &self.advance_currency,
                    "advanceMoney",
                    "advanceCurrency",
                    &mut report,
                )
            } else {
                None
            };
            report.into_result(ContractForm::Standard(StandardContract {
                contract_type: self.contract_type,
                percentage,
                advance,
                notes: Notes::from_optional(self.notes.clone()),
            }))
        }
    }
}

/// Scratch state of the consulting contract modal.
///
/// No fee-structure enum: consulting is always a technical plus financial
/// proposal pair, with the documents living in their own upload slots.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConsultingContractForm {
    pub technical_notes: String,
    pub financial_notes: String,
}

impl ConsultingContractForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commits the proposal pair and resets the buffer. Never fails: both
    /// proposal notes are optional free text.
    pub fn commit(&mut self) -> ContractForm {
        let contract = ContractForm::Consulting(ConsultingContract {
            technical_notes: Notes::from_optional(self.technical_notes.clone()),
            financial_notes: Notes::from_optional(self.financial_notes.clone()),
        });
        *self = Self::default();
        contract
    }
}

/// Scratch state of the outsourcing contract modal.
#[derive(Clone, Debug, PartialEq)]
pub struct OutsourcingContractForm {
    pub pricing: OutsourcingPricing,
    pub service_category: String,
    pub resource_count: String,
    pub duration_months: String,
    pub sla_terms: String,
    pub total_cost: String,
    pub currency: String,
}

impl Default for OutsourcingContractForm {
    fn default() -> Self {
        Self {
            pricing: OutsourcingPricing::FixedCost,
            service_category: String::new(),
            resource_count: String::new(),
            duration_months: String::new(),
            sla_terms: String::new(),
            total_cost: String::new(),
            currency: String::new(),
        }
    }
}

impl OutsourcingContractForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates numeric fields and commits, resetting the buffer on success.
    pub fn commit(&mut self) -> Result<ContractForm, ValidationReport> {
        let contract = self.build()?;
        *self = Self::default();
        Ok(contract)
    }

    fn build(&self) -> Result<ContractForm, ValidationReport> {
        let mut report = ValidationReport::new();

        let resource_count = parse_count(&self.resource_count, "resourceCount", &mut report);
        let duration_months = parse_count(&self.duration_months, "durationMonths", &mut report);
        let total_cost = parse_advance(
            &self.total_cost,
            &self.currency,
            "totalCost",
            "currency",
            &mut report,
        );

        report.into_result(ContractForm::Outsourcing(OutsourcingContract {
            pricing: self.pricing,
            service_category: blank_to_none(&self.service_category),
            resource_count,
            duration_months,
            sla_terms: Notes::from_optional(self.sla_terms.clone()),
            total_cost,
        }))
    }
}

fn blank_to_none(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// The fee percentage is required wherever its contract type is active.
fn parse_percentage(raw: &str, field: &str, report: &mut ValidationReport) -> Option<Percentage> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        report.push(field, FieldErrorKind::Required);
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(value) => match Percentage::new(value) {
            Ok(p) => Some(p),
            Err(_) => {
                report.push(field, FieldErrorKind::InvalidPercentage);
                None
            }
        },
        Err(_) => {
            report.push(field, FieldErrorKind::InvalidNumber);
            None
        }
    }
}

fn parse_count(raw: &str, field: &str, report: &mut ValidationReport) -> Option<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<u32>() {
        Ok(value) => Some(value),
        Err(_) => {
            report.push(field, FieldErrorKind::InvalidNumber);
            None
        }
    }
}

/// Parses an amount/currency pair; both-blank means no advance at all, while a
/// half-filled pair is a reported error.
fn parse_advance(
    raw_amount: &str,
    raw_currency: &str,
    amount_field: &str,
    currency_field: &str,
    report: &mut ValidationReport,
) -> Option<Advance> {
    let amount_blank = raw_amount.trim().is_empty();
    let currency_blank = raw_currency.trim().is_empty();
    if amount_blank && currency_blank {
        return None;
    }

    let amount = if amount_blank {
        report.push(amount_field, FieldErrorKind::Required);
        None
    } else {
        match raw_amount.trim().parse::<f64>() {
            Ok(value) => match Amount::new(value) {
                Ok(amount) => Some(amount),
                Err(_) => {
                    report.push(amount_field, FieldErrorKind::InvalidNumber);
                    None
                }
            },
            Err(_) => {
                report.push(amount_field, FieldErrorKind::InvalidNumber);
                None
            }
        }
    };

    let currency = if currency_blank {
        report.push(currency_field, FieldErrorKind::Required);
        None
    } else {
        match CurrencyCode::new(raw_currency) {
            Ok(code) => Some(code),
            Err(_) => {
                report.push(currency_field, FieldErrorKind::InvalidCurrency);
                None
            }
        }
    };

    match (amount, currency) {
        (Some(amount), Some(currency)) => Some(Advance { amount, currency }),
        _ => None,
    }
}
