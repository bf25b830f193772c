use crate::date::Date;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Default)]
#[serde(rename_all = "snake_case")]
pub enum DebtType {
    #[default]
    Personal,
    Bank,
    OnlineApp,
}

impl TryFrom<&str> for DebtType {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "personal" => Ok(DebtType::Personal),
            "bank" => Ok(DebtType::Bank),
            "online_app" => Ok(DebtType::OnlineApp),
            other => Err(format!("unknown debt type: {other}")),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Default)]
#[serde(rename_all = "snake_case")]
pub enum DebtStatus {
    #[default]
    Ongoing,
    Completed,
    Defaulted,
}

impl TryFrom<&str> for DebtStatus {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "ongoing" => Ok(DebtStatus::Ongoing),
            "completed" => Ok(DebtStatus::Completed),
            "defaulted" => Ok(DebtStatus::Defaulted),
            other => Err(format!("unknown debt status: {other}")),
        }
    }
}

/// Amounts are in currency units and may carry decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Debt {
    #[serde(rename = "type")]
    pub kind: DebtType,
    pub lender: String,
    pub amount: f64,
    pub remaining_amount: f64,
    pub start_date: Date,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Date>,
    pub purpose: String,
    pub status: DebtStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Default)]
#[serde(rename_all = "snake_case")]
pub enum HardshipParent {
    #[default]
    Father,
    Mother,
    Both,
}

impl TryFrom<&str> for HardshipParent {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "father" => Ok(HardshipParent::Father),
            "mother" => Ok(HardshipParent::Mother),
            "both" => Ok(HardshipParent::Both),
            other => Err(format!("unknown parent: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EconomicHardship {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<HardshipParent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_names: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support_received: Option<String>,
}
