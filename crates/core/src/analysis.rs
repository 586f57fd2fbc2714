//! Types for AI repair analysis results.
//!
//! The LLM reply is parsed fail-soft: unknown enum strings fall back to a
//! sensible tier, missing lists become empty, and missing scalars take
//! the documented defaults. A malformed model reply must degrade the
//! response, never fail the request.

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Difficulty
// ---------------------------------------------------------------------------

/// Repair difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Parse a client- or model-supplied tier string. Case-insensitive;
    /// unknown strings return `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

fn lenient_difficulty<'de, D: Deserializer<'de>>(de: D) -> Result<Difficulty, D::Error> {
    let raw = Option::<String>::deserialize(de)?;
    Ok(raw
        .as_deref()
        .and_then(Difficulty::parse)
        .unwrap_or(Difficulty::Medium))
}

// ---------------------------------------------------------------------------
// Risk level
// ---------------------------------------------------------------------------

/// Safety risk tier of a repair. Critical repairs (electrical, gas,
/// structural) should always be referred to a professional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            "critical" => Some(Self::Critical),
            _ => None,
        }
    }
}

fn lenient_risk<'de, D: Deserializer<'de>>(de: D) -> Result<RiskLevel, D::Error> {
    let raw = Option::<String>::deserialize(de)?;
    Ok(raw.as_deref().and_then(RiskLevel::parse).unwrap_or(RiskLevel::Low))
}

// ---------------------------------------------------------------------------
// Skill level
// ---------------------------------------------------------------------------

/// Self-declared user skill level, used to adapt instruction depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillLevel {
    Beginner,
    Diy,
    Pro,
}

impl SkillLevel {
    /// Parse a client-supplied skill level; unknown strings fall back to
    /// the mid tier.
    pub fn parse_or_default(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "beginner" => Self::Beginner,
            "pro" => Self::Pro,
            _ => Self::Diy,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Diy => "diy",
            Self::Pro => "pro",
        }
    }
}

impl Default for SkillLevel {
    fn default() -> Self {
        Self::Diy
    }
}

// ---------------------------------------------------------------------------
// Estimates
// ---------------------------------------------------------------------------

/// Cost estimate for a repair, in dollars.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CostEstimate {
    pub low: f64,
    pub typical: f64,
    pub high: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub parts_breakdown: Vec<serde_json::Value>,
    pub tools_cost: f64,
    pub labor_hours_range: serde_json::Value,
    pub assumptions: Vec<String>,
}

fn default_currency() -> String {
    "USD".to_string()
}

/// Time estimate for a repair, in minutes, split into phases.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeEstimate {
    pub prep: f64,
    pub active: f64,
    pub cure: Option<f64>,
    pub total: f64,
    #[serde(default = "default_time_unit")]
    pub unit: String,
}

fn default_time_unit() -> String {
    "minutes".to_string()
}

// ---------------------------------------------------------------------------
// Analysis
// ---------------------------------------------------------------------------

fn default_confidence() -> i32 {
    85
}

/// Parsed repair analysis from the vision model. All fields degrade to
/// defaults when the model omits or mangles them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RepairAnalysis {
    pub item_type: String,
    pub damage_description: String,
    #[serde(deserialize_with = "lenient_difficulty")]
    pub repair_difficulty: Difficulty,
    pub estimated_time: String,
    /// Steps may be plain strings or structured objects.
    pub repair_steps: Vec<serde_json::Value>,
    pub tools_needed: Vec<serde_json::Value>,
    pub parts_needed: Vec<serde_json::Value>,
    pub safety_tips: Vec<String>,
    #[serde(deserialize_with = "lenient_risk")]
    pub risk_level: RiskLevel,
    /// Model confidence 0-100.
    #[serde(default = "default_confidence")]
    pub confidence_score: i32,
    pub stop_and_call_pro: bool,
    pub assumptions: Vec<String>,
    pub cost_estimate: Option<CostEstimate>,
    pub time_estimate: Option<TimeEstimate>,
}

impl Default for RepairAnalysis {
    fn default() -> Self {
        Self {
            item_type: "Unknown".to_string(),
            damage_description: String::new(),
            repair_difficulty: Difficulty::Medium,
            estimated_time: "Unknown".to_string(),
            repair_steps: Vec::new(),
            tools_needed: Vec::new(),
            parts_needed: Vec::new(),
            safety_tips: Vec::new(),
            risk_level: RiskLevel::Low,
            confidence_score: default_confidence(),
            stop_and_call_pro: false,
            assumptions: Vec::new(),
            cost_estimate: None,
            time_estimate: None,
        }
    }
}

impl RepairAnalysis {
    /// Names of the tools the analysis calls for. Tools may be plain
    /// strings or objects with a `name` field; anything else is skipped.
    pub fn tool_names(&self) -> Vec<String> {
        self.tools_needed
            .iter()
            .filter_map(|tool| match tool {
                serde_json::Value::String(name) => Some(name.clone()),
                serde_json::Value::Object(map) => {
                    map.get("name").and_then(|n| n.as_str()).map(str::to_string)
                }
                _ => None,
            })
            .collect()
    }
}

/// A fully assembled analysis response, as persisted and returned.
#[derive(Debug, Clone, Serialize)]
pub struct RepairReport {
    pub repair_id: Uuid,
    #[serde(flatten)]
    pub analysis: RepairAnalysis,
    pub model_number: Option<String>,
    pub diagram_base64: Option<String>,
    pub timestamp: Timestamp,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_parse_is_case_insensitive() {
        assert_eq!(Difficulty::parse("Easy"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::parse("HARD"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::parse("brutal"), None);
    }

    #[test]
    fn skill_level_falls_back_to_diy() {
        assert_eq!(SkillLevel::parse_or_default("beginner"), SkillLevel::Beginner);
        assert_eq!(SkillLevel::parse_or_default("PRO"), SkillLevel::Pro);
        assert_eq!(SkillLevel::parse_or_default("wizard"), SkillLevel::Diy);
    }

    #[test]
    fn empty_object_parses_with_defaults() {
        let analysis: RepairAnalysis = serde_json::from_str("{}").unwrap();
        assert_eq!(analysis.item_type, "Unknown");
        assert_eq!(analysis.repair_difficulty, Difficulty::Medium);
        assert_eq!(analysis.risk_level, RiskLevel::Low);
        assert_eq!(analysis.confidence_score, 85);
        assert!(!analysis.stop_and_call_pro);
        assert!(analysis.repair_steps.is_empty());
    }

    #[test]
    fn unknown_difficulty_string_degrades_to_medium() {
        let analysis: RepairAnalysis =
            serde_json::from_str(r#"{"repair_difficulty": "impossible"}"#).unwrap();
        assert_eq!(analysis.repair_difficulty, Difficulty::Medium);
    }

    #[test]
    fn full_reply_roundtrips_key_fields() {
        let json = r#"{
            "item_type": "Office Chair",
            "damage_description": "Cracked armrest",
            "repair_difficulty": "easy",
            "estimated_time": "30 minutes",
            "repair_steps": ["Remove screws", {"step": 2, "text": "Glue the crack"}],
            "tools_needed": ["screwdriver", {"name": "epoxy", "estimated_cost": 8}],
            "risk_level": "low",
            "confidence_score": 92,
            "cost_estimate": {"low": 5, "typical": 12, "high": 25},
            "time_estimate": {"prep": 5, "active": 20, "total": 25}
        }"#;
        let analysis: RepairAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(analysis.repair_difficulty, Difficulty::Easy);
        assert_eq!(analysis.confidence_score, 92);
        assert_eq!(analysis.tool_names(), vec!["screwdriver", "epoxy"]);
        let cost = analysis.cost_estimate.unwrap();
        assert!((cost.typical - 12.0).abs() < f64::EPSILON);
        assert_eq!(cost.currency, "USD");
    }
}
